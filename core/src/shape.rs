//! Static description of vertex record layouts.
//!
//! A [`TypeShape`] describes how one value is laid out in memory: a scalar,
//! a fixed-size array, or a record with named fields at known byte offsets.
//! Shapes are produced by [`VertexType::shape`], either from the built-in
//! impls below, from `#[derive(VertexRecord)]`, or by hand with the
//! [`RecordLayout`] builder.
//!
//! # Example
//!
//! ```ignore
//! // Declared by hand, equivalent to:
//! // #[repr(C)] struct Vertex { position: [f32; 3], color: [u8; 4] }
//! let layout = RecordLayout::new("Vertex", 16)
//!     .with_field(FieldLayout::array("position", 0, ScalarKind::F32, 3))
//!     .with_field(FieldLayout::array("color", 12, ScalarKind::U8, 4));
//! let shape = TypeShape::Record(layout);
//! ```

use std::borrow::Cow;
use std::fmt;

use crate::primitive::ScalarKind;

/// Memory shape of a type that can appear in a vertex record.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TypeShape {
    /// A single scalar value.
    Scalar(ScalarKind),
    /// A fixed-size array `[element; len]`.
    Array {
        /// Shape of each element.
        element: Box<TypeShape>,
        /// Number of elements.
        len: usize,
    },
    /// A record with named fields.
    Record(RecordLayout),
}

impl TypeShape {
    /// Shape of an array of `len` scalars.
    pub fn scalar_array(kind: ScalarKind, len: usize) -> Self {
        Self::Array {
            element: Box::new(Self::Scalar(kind)),
            len,
        }
    }

    /// Size in bytes of one value of this shape.
    pub fn size(&self) -> usize {
        match self {
            Self::Scalar(kind) => kind.size(),
            Self::Array { element, len } => element.size() * len,
            Self::Record(layout) => layout.size,
        }
    }
}

impl fmt::Display for TypeShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Scalar(kind) => write!(f, "{kind}"),
            Self::Array { element, len } => write!(f, "[{element}; {len}]"),
            Self::Record(layout) => write!(f, "struct {}", layout.name),
        }
    }
}

/// Layout of a record type: its size and its named fields.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RecordLayout {
    /// Type name, used in diagnostics.
    pub name: Cow<'static, str>,
    /// Size in bytes of one record, including padding.
    pub size: usize,
    /// Fields in declaration order.
    pub fields: Vec<FieldLayout>,
}

impl RecordLayout {
    /// Create a record layout with no fields.
    pub fn new(name: impl Into<Cow<'static, str>>, size: usize) -> Self {
        Self {
            name: name.into(),
            size,
            fields: Vec::new(),
        }
    }

    /// Add a field.
    pub fn with_field(mut self, field: FieldLayout) -> Self {
        self.fields.push(field);
        self
    }

    /// Look up a field by name.
    pub fn field(&self, name: &str) -> Option<&FieldLayout> {
        self.fields.iter().find(|field| field.name == name)
    }

    /// Number of fields.
    pub fn field_count(&self) -> usize {
        self.fields.len()
    }

    /// Whether the record declares no fields.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

/// A named field inside a [`RecordLayout`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FieldLayout {
    /// Field name as written in the record type.
    pub name: Cow<'static, str>,
    /// Byte offset of the field from the start of the record.
    pub offset: usize,
    /// Shape of the field's type.
    pub shape: TypeShape,
}

impl FieldLayout {
    /// Create a field with an arbitrary shape.
    pub fn new(name: impl Into<Cow<'static, str>>, offset: usize, shape: TypeShape) -> Self {
        Self {
            name: name.into(),
            offset,
            shape,
        }
    }

    /// A scalar field.
    pub fn scalar(name: impl Into<Cow<'static, str>>, offset: usize, kind: ScalarKind) -> Self {
        Self::new(name, offset, TypeShape::Scalar(kind))
    }

    /// A field holding `[kind; len]`.
    pub fn array(
        name: impl Into<Cow<'static, str>>,
        offset: usize,
        kind: ScalarKind,
        len: usize,
    ) -> Self {
        Self::new(name, offset, TypeShape::scalar_array(kind, len))
    }

    /// A field holding a nested record.
    pub fn record(name: impl Into<Cow<'static, str>>, offset: usize, layout: RecordLayout) -> Self {
        Self::new(name, offset, TypeShape::Record(layout))
    }
}

/// Types whose memory shape is known, and which can therefore be used as
/// vertex records or as fields of vertex records.
///
/// Implemented for every Rust scalar, for fixed-size arrays, and for structs
/// using `#[derive(VertexRecord)]`. Implementing it by hand is fine as long
/// as the returned offsets and sizes match the type's real layout.
pub trait VertexType {
    /// Describe the layout of `Self`.
    fn shape() -> TypeShape;
}

macro_rules! impl_scalar {
    ($($ty:ty => $kind:ident),* $(,)?) => {
        $(
            impl VertexType for $ty {
                fn shape() -> TypeShape {
                    TypeShape::Scalar(ScalarKind::$kind)
                }
            }
        )*
    };
}

impl_scalar! {
    i8 => I8,
    u8 => U8,
    i16 => I16,
    u16 => U16,
    i32 => I32,
    u32 => U32,
    f32 => F32,
    f64 => F64,
    i64 => I64,
    u64 => U64,
    i128 => I128,
    u128 => U128,
    isize => Isize,
    usize => Usize,
    bool => Bool,
    char => Char,
}

impl<T: VertexType, const N: usize> VertexType for [T; N] {
    fn shape() -> TypeShape {
        TypeShape::Array {
            element: Box::new(T::shape()),
            len: N,
        }
    }
}

static_assertions::assert_impl_all!(TypeShape: Send, Sync);
