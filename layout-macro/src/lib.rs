use proc_macro::TokenStream;
use quote::quote;
use syn::ext::IdentExt;
use syn::{Data, DeriveInput, Fields, Type, parse_macro_input, parse_quote};

/// Derive `VertexType` for a struct, describing its layout for attribute binding.
///
/// Field offsets come from `core::mem::offset_of!` and the record size from
/// `size_of::<Self>()`, so the layout always matches what the compiler chose.
/// Use `#[repr(C)]` when the same data is uploaded through `bytemuck`.
///
/// Every field type must itself implement `VertexType`: scalars, arrays,
/// other derived records, or supported math vectors. Generic structs get a
/// `VertexType` bound on each field type.
///
/// Every field is part of the layout, including `_`-prefixed ones, so a
/// record used as a nested aggregate counts and type-checks all of its
/// members. Raw identifiers are registered without the `r#` prefix.
///
/// # Named structs
///
/// ```ignore
/// #[derive(Clone, Copy, bytemuck::Pod, bytemuck::Zeroable, VertexRecord)]
/// #[repr(C)]
/// struct QuadVertex {
///     pos: Vec3,
///     tex: [f32; 2],
/// }
/// ```
///
/// # Tuple structs
///
/// Fields are named by index (`"0"`, `"1"`, ...).
///
/// ```ignore
/// #[derive(Clone, Copy, VertexRecord)]
/// #[repr(C)]
/// struct Rgba(u8, u8, u8, u8);
/// ```
#[proc_macro_derive(VertexRecord)]
pub fn derive_vertex_record(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    let name = &input.ident;
    let name_str = name.unraw().to_string();
    let fields = match &input.data {
        Data::Struct(data) => &data.fields,
        _ => {
            return syn::Error::new_spanned(
                &input.ident,
                "VertexRecord can only be derived for structs",
            )
            .to_compile_error()
            .into();
        }
    };

    let mut generics = input.generics.clone();
    let where_clause = generics.make_where_clause();
    for field in fields.iter() {
        let ty = &field.ty;
        where_clause
            .predicates
            .push(parse_quote! { #ty: attribind_core::VertexType });
    }
    let (impl_generics, ty_generics, where_clause) = generics.split_for_impl();

    let fields = match fields {
        Fields::Named(fields) => fields
            .named
            .iter()
            .filter_map(|f| {
                let fname = f.ident.as_ref()?;
                let fname_str = fname.unraw().to_string();
                Some(field_layout(&fname_str, quote! { #fname }, &f.ty))
            })
            .collect::<Vec<_>>(),
        Fields::Unnamed(fields) => fields
            .unnamed
            .iter()
            .enumerate()
            .map(|(i, f)| {
                let idx = syn::Index::from(i);
                field_layout(&i.to_string(), quote! { #idx }, &f.ty)
            })
            .collect(),
        Fields::Unit => Vec::new(),
    };

    let expanded = quote! {
        impl #impl_generics attribind_core::VertexType for #name #ty_generics #where_clause {
            fn shape() -> attribind_core::TypeShape {
                attribind_core::TypeShape::Record(
                    attribind_core::RecordLayout::new(#name_str, ::core::mem::size_of::<Self>())
                        #(.with_field(#fields))*
                )
            }
        }
    };

    expanded.into()
}

/// Build the `FieldLayout` expression for one field of `Self`.
fn field_layout(
    name: &str,
    member: proc_macro2::TokenStream,
    ty: &Type,
) -> proc_macro2::TokenStream {
    quote! {
        attribind_core::FieldLayout::new(
            #name,
            ::core::mem::offset_of!(Self, #member),
            <#ty as attribind_core::VertexType>::shape(),
        )
    }
}
