//! Derivation of attribute descriptors from vertex record shapes.
//!
//! Given a record shape and an ordered list of [`AttributeBinding`]s, this
//! module works out component count, element type, stride and byte offset
//! for each binding and hands the result to an [`AttributeBackend`].
//!
//! # Record shapes
//!
//! - **Struct-backed** records bind fields by name. A field may be a
//!   supported scalar (1 component), an array of supported scalars (one
//!   component per element), or a nested record whose members all share one
//!   supported scalar type (one component per member).
//! - **Array-backed** records (`[f32; 2]` per vertex) bind positionally.
//!   Every binding gets `len` components, and binding `i` starts at byte
//!   `i * size_of::<element>()`. The bindings are treated as consecutive
//!   slices of one packed array, not as independent fields.
//!
//! # Failure
//!
//! Validation stops at the first bad binding. Calls already issued for
//! earlier bindings are not undone.

use std::collections::HashSet;

use crate::backend::AttributeBackend;
use crate::binding::{AttributeBinding, AttributeDescriptor};
use crate::error::{LayoutError, LayoutResult};
use crate::primitive::{ElementType, ScalarKind};
use crate::shape::{FieldLayout, RecordLayout, TypeShape, VertexType};

/// Configure attribute pointers for `vertices` on `backend`.
///
/// The vertex array and the buffer holding `vertices` must be bound before
/// calling. For each binding, in order, the backend receives
/// `set_attribute_pointer` followed by `enable_attribute` (and
/// `set_attribute_divisor` if the binding asks for instancing).
///
/// An empty `vertices` slice is a no-op: nothing is validated and the
/// backend is not called.
///
/// # Example
///
/// ```ignore
/// #[derive(Clone, Copy, VertexRecord)]
/// #[repr(C)]
/// struct QuadVertex {
///     pos: [f32; 3],
///     tex: [f32; 2],
/// }
///
/// bind_attributes(
///     &mut backend,
///     &vertices,
///     &[AttributeBinding::field("pos", 0), AttributeBinding::field("tex", 1)],
/// )?;
/// ```
pub fn bind_attributes<V, B>(
    backend: &mut B,
    vertices: &[V],
    bindings: &[AttributeBinding],
) -> LayoutResult<()>
where
    V: VertexType,
    B: AttributeBackend + ?Sized,
{
    let Some(first) = vertices.first() else {
        log::debug!("bind_attributes: no vertices, skipping {} bindings", bindings.len());
        return Ok(());
    };
    let stride = std::mem::size_of_val(first);
    bind_with_stride(backend, &V::shape(), stride, bindings)
}

/// Configure attribute pointers from a manually declared shape.
///
/// Same rules as [`bind_attributes`], with the stride taken from
/// `shape.size()`. `vertex_count == 0` is a no-op.
pub fn bind_shape<B>(
    backend: &mut B,
    shape: &TypeShape,
    vertex_count: usize,
    bindings: &[AttributeBinding],
) -> LayoutResult<()>
where
    B: AttributeBackend + ?Sized,
{
    if vertex_count == 0 {
        log::debug!("bind_shape: no vertices, skipping {} bindings", bindings.len());
        return Ok(());
    }
    bind_with_stride(backend, shape, shape.size(), bindings)
}

/// Resolve the descriptors [`bind_attributes`] would emit for `V`, without
/// calling any backend.
pub fn describe_attributes<V: VertexType>(
    bindings: &[AttributeBinding],
) -> LayoutResult<Vec<AttributeDescriptor>> {
    describe_shape(&V::shape(), bindings)
}

/// Resolve descriptors for a manually declared shape.
pub fn describe_shape(
    shape: &TypeShape,
    bindings: &[AttributeBinding],
) -> LayoutResult<Vec<AttributeDescriptor>> {
    let resolver = Resolver::new(shape, shape.size())?;
    bindings
        .iter()
        .enumerate()
        .map(|(index, binding)| resolver.resolve(index, binding))
        .collect()
}

fn bind_with_stride<B>(
    backend: &mut B,
    shape: &TypeShape,
    stride: usize,
    bindings: &[AttributeBinding],
) -> LayoutResult<()>
where
    B: AttributeBackend + ?Sized,
{
    let resolver = Resolver::new(shape, stride)?;
    let mut seen = HashSet::with_capacity(bindings.len());

    for (index, binding) in bindings.iter().enumerate() {
        let descriptor = resolver.resolve(index, binding)?;
        if !seen.insert(descriptor.location) {
            log::warn!(
                "attribute location {} is bound more than once for `{}`",
                descriptor.location,
                shape
            );
        }
        emit(backend, &descriptor);
    }
    Ok(())
}

fn emit<B: AttributeBackend + ?Sized>(backend: &mut B, descriptor: &AttributeDescriptor) {
    log::debug!(
        "{}: location {} <- {} x {} (stride {}, offset {}{})",
        backend.name(),
        descriptor.location,
        descriptor.components,
        descriptor.element_type,
        descriptor.stride,
        descriptor.offset,
        if descriptor.normalized { ", normalized" } else { "" }
    );
    backend.set_attribute_pointer(descriptor);
    backend.enable_attribute(descriptor.location);
    if let Some(divisor) = descriptor.divisor {
        backend.set_attribute_divisor(descriptor.location, divisor);
    }
}

/// Per-call resolution state, chosen once from the record shape.
enum Resolver<'a> {
    /// Array-backed record: one attribute shape for every binding.
    Packed {
        components: u32,
        element_type: ElementType,
        element_size: usize,
        stride: u32,
    },
    /// Struct-backed record: bindings select fields by name.
    Fields {
        layout: &'a RecordLayout,
        stride: u32,
    },
}

impl<'a> Resolver<'a> {
    fn new(shape: &'a TypeShape, stride: usize) -> LayoutResult<Self> {
        let stride = stride as u32;
        match shape {
            TypeShape::Scalar(_) => Err(LayoutError::UnsupportedRecordShape {
                record: shape.to_string(),
            }),
            TypeShape::Array { element, len } => {
                let element_type = array_element_type(&shape.to_string(), element)?;
                Ok(Self::Packed {
                    components: *len as u32,
                    element_type,
                    element_size: element.size(),
                    stride,
                })
            }
            TypeShape::Record(layout) => Ok(Self::Fields { layout, stride }),
        }
    }

    fn resolve(&self, index: usize, binding: &AttributeBinding) -> LayoutResult<AttributeDescriptor> {
        let (components, element_type, offset, stride) = match *self {
            Self::Packed {
                components,
                element_type,
                element_size,
                stride,
            } => (components, element_type, index * element_size, stride),
            Self::Fields { layout, stride } => {
                let field = layout.field(&binding.field).ok_or_else(|| {
                    LayoutError::UnknownField {
                        record: layout.name.to_string(),
                        field: binding.field.to_string(),
                    }
                })?;
                let (components, element_type) = field_format(field)?;
                (components, element_type, field.offset, stride)
            }
        };

        Ok(AttributeDescriptor {
            location: binding.location,
            components,
            element_type,
            normalized: binding.normalized,
            stride,
            offset: offset as u32,
            divisor: binding.divisor,
        })
    }
}

/// Component count and element type of a struct field.
fn field_format(field: &FieldLayout) -> LayoutResult<(u32, ElementType)> {
    match &field.shape {
        TypeShape::Scalar(kind) => Ok((1, scalar_element_type(&field.name, *kind)?)),
        TypeShape::Array { element, len } => {
            Ok((*len as u32, array_element_type(&field.name, element)?))
        }
        TypeShape::Record(inner) => aggregate_format(field, inner),
    }
}

/// Format of a nested record treated as a named array: every member must be
/// the same supported scalar.
fn aggregate_format(field: &FieldLayout, inner: &RecordLayout) -> LayoutResult<(u32, ElementType)> {
    let Some(first) = inner.fields.first() else {
        return Err(LayoutError::EmptyAggregate {
            field: field.name.to_string(),
            aggregate: inner.name.to_string(),
        });
    };

    let TypeShape::Scalar(kind) = first.shape else {
        return Err(LayoutError::UnsupportedFieldShape {
            field: field.name.to_string(),
            found: format!(
                "{} (member `{}` is `{}`)",
                field.shape, first.name, first.shape
            ),
        });
    };
    let element_type = scalar_element_type(&format!("{}.{}", field.name, first.name), kind)?;

    if let Some(mismatch) = inner.fields[1..]
        .iter()
        .find(|member| member.shape != first.shape)
    {
        return Err(LayoutError::HeterogeneousAggregate {
            field: field.name.to_string(),
            aggregate: inner.name.to_string(),
            member: mismatch.name.to_string(),
            expected: first.shape.to_string(),
            found: mismatch.shape.to_string(),
        });
    }

    Ok((inner.field_count() as u32, element_type))
}

fn scalar_element_type(context: &str, kind: ScalarKind) -> LayoutResult<ElementType> {
    kind.element_type()
        .ok_or_else(|| LayoutError::UnsupportedPrimitiveType {
            field: context.to_string(),
            found: kind.to_string(),
        })
}

fn array_element_type(context: &str, element: &TypeShape) -> LayoutResult<ElementType> {
    match element {
        TypeShape::Scalar(kind) => scalar_element_type(context, *kind),
        other => Err(LayoutError::UnsupportedPrimitiveType {
            field: context.to_string(),
            found: other.to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::{BackendCall, RecordingBackend};
    use crate::error::LayoutErrorKind;

    fn vec3_layout(kind: ScalarKind) -> RecordLayout {
        let size = kind.size();
        RecordLayout::new("Vec3", size * 3)
            .with_field(FieldLayout::scalar("x", 0, kind))
            .with_field(FieldLayout::scalar("y", size, kind))
            .with_field(FieldLayout::scalar("z", size * 2, kind))
    }

    /// `{ a: f32, b: u8 }` padded to 8 bytes.
    fn scalar_record() -> TypeShape {
        TypeShape::Record(
            RecordLayout::new("Scalars", 8)
                .with_field(FieldLayout::scalar("a", 0, ScalarKind::F32))
                .with_field(FieldLayout::scalar("b", 4, ScalarKind::U8)),
        )
    }

    #[test]
    fn test_empty_vertices_skip_everything() {
        let mut backend = RecordingBackend::new();
        let vertices: [f32; 0] = [];
        // A scalar record would fail validation, but nothing is validated.
        bind_attributes(&mut backend, &vertices, &[AttributeBinding::field("x", 0)]).unwrap();
        bind_shape(&mut backend, &scalar_record(), 0, &[AttributeBinding::field("nope", 0)])
            .unwrap();
        assert!(backend.is_empty());
    }

    #[test]
    fn test_scalar_record_rejected() {
        let mut backend = RecordingBackend::new();
        let err = bind_attributes(&mut backend, &[1.0f32, 2.0], &[AttributeBinding::positional(0)])
            .unwrap_err();
        assert_eq!(err.kind(), LayoutErrorKind::UnsupportedRecordShape);
        assert!(backend.is_empty());
    }

    #[test]
    fn test_scalar_fields() {
        let descriptors = describe_shape(
            &scalar_record(),
            &[AttributeBinding::field("a", 0), AttributeBinding::field("b", 1)],
        )
        .unwrap();

        assert_eq!(descriptors.len(), 2);
        assert_eq!(descriptors[0].components, 1);
        assert_eq!(descriptors[0].element_type, ElementType::Float);
        assert_eq!(descriptors[0].offset, 0);
        assert_eq!(descriptors[1].element_type, ElementType::UnsignedByte);
        assert_eq!(descriptors[1].offset, 4);
        assert!(descriptors.iter().all(|d| d.stride == 8));
    }

    #[test]
    fn test_nested_aggregate_field() {
        let shape = TypeShape::Record(
            RecordLayout::new("Vertex", 16)
                .with_field(FieldLayout::record("position", 0, vec3_layout(ScalarKind::F32)))
                .with_field(FieldLayout::array("color", 12, ScalarKind::U8, 4)),
        );
        let descriptors = describe_shape(
            &shape,
            &[
                AttributeBinding::field("position", 0),
                AttributeBinding::field("color", 1).normalized(),
            ],
        )
        .unwrap();

        assert_eq!(descriptors[0].components, 3);
        assert_eq!(descriptors[0].element_type, ElementType::Float);
        assert_eq!(descriptors[1].components, 4);
        assert_eq!(descriptors[1].element_type, ElementType::UnsignedByte);
        assert_eq!(descriptors[1].offset, 12);
        assert!(descriptors[1].normalized);
    }

    #[test]
    fn test_empty_aggregate() {
        let shape = TypeShape::Record(
            RecordLayout::new("Vertex", 4)
                .with_field(FieldLayout::record("marker", 0, RecordLayout::new("Empty", 0)))
                .with_field(FieldLayout::scalar("w", 0, ScalarKind::F32)),
        );
        let err = describe_shape(&shape, &[AttributeBinding::field("marker", 0)]).unwrap_err();
        assert_eq!(
            err,
            LayoutError::EmptyAggregate {
                field: "marker".to_string(),
                aggregate: "Empty".to_string(),
            }
        );
    }

    #[test]
    fn test_heterogeneous_aggregate() {
        let mixed = RecordLayout::new("Mixed", 8)
            .with_field(FieldLayout::scalar("x", 0, ScalarKind::F32))
            .with_field(FieldLayout::scalar("y", 4, ScalarKind::U8));
        let shape = TypeShape::Record(
            RecordLayout::new("Vertex", 8).with_field(FieldLayout::record("p", 0, mixed)),
        );
        let err = describe_shape(&shape, &[AttributeBinding::field("p", 0)]).unwrap_err();
        assert_eq!(err.kind(), LayoutErrorKind::HeterogeneousAggregate);
        assert!(err.to_string().contains("member `y`"));
    }

    #[test]
    fn test_aggregate_of_aggregates() {
        let outer = RecordLayout::new("Pair", 24)
            .with_field(FieldLayout::record("a", 0, vec3_layout(ScalarKind::F32)))
            .with_field(FieldLayout::record("b", 12, vec3_layout(ScalarKind::F32)));
        let shape = TypeShape::Record(
            RecordLayout::new("Vertex", 24).with_field(FieldLayout::record("pair", 0, outer)),
        );
        let err = describe_shape(&shape, &[AttributeBinding::field("pair", 0)]).unwrap_err();
        assert_eq!(err.kind(), LayoutErrorKind::UnsupportedFieldShape);
    }

    #[test]
    fn test_unsupported_members() {
        let shape = TypeShape::Record(
            RecordLayout::new("Vertex", 32)
                .with_field(FieldLayout::scalar("id", 0, ScalarKind::U64))
                .with_field(FieldLayout::array("flags", 8, ScalarKind::Bool, 4))
                .with_field(FieldLayout::record("wide", 16, vec3_layout(ScalarKind::I64))),
        );
        for name in ["id", "flags", "wide"] {
            let err = describe_shape(&shape, &[AttributeBinding::field(name, 0)]).unwrap_err();
            assert_eq!(err.kind(), LayoutErrorKind::UnsupportedPrimitiveType, "field {name}");
        }
    }

    #[test]
    fn test_array_of_arrays_field() {
        let shape = TypeShape::Record(RecordLayout::new("Vertex", 16).with_field(FieldLayout::new(
            "m",
            0,
            <[[f32; 2]; 2]>::shape(),
        )));
        let err = describe_shape(&shape, &[AttributeBinding::field("m", 0)]).unwrap_err();
        assert_eq!(
            err,
            LayoutError::UnsupportedPrimitiveType {
                field: "m".to_string(),
                found: "[f32; 2]".to_string(),
            }
        );
    }

    #[test]
    fn test_packed_array_offsets() {
        let mut backend = RecordingBackend::new();
        let vertices = [[0.0f32, 1.0], [2.0, 3.0]];
        bind_attributes(
            &mut backend,
            &vertices,
            &[AttributeBinding::positional(0), AttributeBinding::positional(1)],
        )
        .unwrap();

        let offsets: Vec<_> = backend.descriptors().map(|d| d.offset).collect();
        assert_eq!(offsets, vec![0, 4]);
        assert!(backend.descriptors().all(|d| d.components == 2 && d.stride == 8));
    }

    #[test]
    fn test_packed_array_validated_up_front() {
        let mut backend = RecordingBackend::new();
        let err = bind_attributes(&mut backend, &[[true, false]], &[]).unwrap_err();
        assert_eq!(
            err,
            LayoutError::UnsupportedPrimitiveType {
                field: "[bool; 2]".to_string(),
                found: "bool".to_string(),
            }
        );
    }

    #[test]
    fn test_failure_keeps_earlier_calls() {
        let mut backend = RecordingBackend::new();
        let err = bind_shape(
            &mut backend,
            &scalar_record(),
            3,
            &[
                AttributeBinding::field("a", 0),
                AttributeBinding::field("missing", 1),
                AttributeBinding::field("b", 2),
            ],
        )
        .unwrap_err();

        assert_eq!(err.kind(), LayoutErrorKind::UnknownField);
        assert_eq!(backend.calls().len(), 2);
        assert_eq!(backend.calls()[1], BackendCall::EnableAttribute(0));
    }

    #[test]
    fn test_divisor_follows_enable() {
        let mut backend = RecordingBackend::new();
        bind_shape(
            &mut backend,
            &scalar_record(),
            1,
            &[AttributeBinding::field("a", 5).per_instance()],
        )
        .unwrap();

        let calls = backend.calls();
        assert_eq!(calls.len(), 3);
        assert_eq!(calls[1], BackendCall::EnableAttribute(5));
        assert_eq!(
            calls[2],
            BackendCall::SetAttributeDivisor {
                location: 5,
                divisor: 1
            }
        );
    }

    #[test]
    fn test_duplicate_locations_allowed() {
        let mut backend = RecordingBackend::new();
        bind_shape(
            &mut backend,
            &scalar_record(),
            1,
            &[AttributeBinding::field("a", 0), AttributeBinding::field("b", 0)],
        )
        .unwrap();
        assert_eq!(backend.enabled_locations().collect::<Vec<_>>(), vec![0, 0]);
    }
}
