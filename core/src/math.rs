//! [`VertexType`](crate::VertexType) impls for math library vector types.
//!
//! Vectors are described as records whose members all share one scalar
//! type, so a `Vec3` field binds as three components at the field's offset.

use crate::primitive::ScalarKind;
use crate::shape::{FieldLayout, RecordLayout, TypeShape};

const COMPONENT_NAMES: [&str; 4] = ["x", "y", "z", "w"];

/// Record layout of a vector with `count` tightly packed components.
///
/// `size` may exceed `count * component size` for SIMD-aligned types
/// such as `glam::Vec3A`.
#[cfg_attr(not(any(feature = "glam", feature = "nalgebra")), allow(dead_code))]
pub(crate) fn vector_layout(
    name: &'static str,
    kind: ScalarKind,
    count: usize,
    size: usize,
) -> TypeShape {
    let layout = COMPONENT_NAMES
        .iter()
        .take(count)
        .enumerate()
        .fold(RecordLayout::new(name, size), |layout, (i, component)| {
            layout.with_field(FieldLayout::scalar(*component, i * kind.size(), kind))
        });
    TypeShape::Record(layout)
}

#[allow(unused_macros)]
macro_rules! impl_vector {
    ($($ty:ty => ($name:literal, $kind:ident, $count:literal)),* $(,)?) => {
        $(
            impl $crate::shape::VertexType for $ty {
                fn shape() -> TypeShape {
                    vector_layout($name, ScalarKind::$kind, $count, ::std::mem::size_of::<$ty>())
                }
            }
        )*
    };
}

#[cfg(feature = "glam")]
impl_vector! {
    glam::Vec2 => ("Vec2", F32, 2),
    glam::Vec3 => ("Vec3", F32, 3),
    glam::Vec3A => ("Vec3A", F32, 3),
    glam::Vec4 => ("Vec4", F32, 4),
    glam::DVec2 => ("DVec2", F64, 2),
    glam::DVec3 => ("DVec3", F64, 3),
    glam::DVec4 => ("DVec4", F64, 4),
    glam::IVec2 => ("IVec2", I32, 2),
    glam::IVec3 => ("IVec3", I32, 3),
    glam::IVec4 => ("IVec4", I32, 4),
    glam::UVec2 => ("UVec2", U32, 2),
    glam::UVec3 => ("UVec3", U32, 3),
    glam::UVec4 => ("UVec4", U32, 4),
}

#[cfg(feature = "nalgebra")]
impl_vector! {
    nalgebra::Vector2<f32> => ("Vector2<f32>", F32, 2),
    nalgebra::Vector3<f32> => ("Vector3<f32>", F32, 3),
    nalgebra::Vector4<f32> => ("Vector4<f32>", F32, 4),
    nalgebra::Vector2<f64> => ("Vector2<f64>", F64, 2),
    nalgebra::Vector3<f64> => ("Vector3<f64>", F64, 3),
    nalgebra::Vector4<f64> => ("Vector4<f64>", F64, 4),
    nalgebra::Vector2<i32> => ("Vector2<i32>", I32, 2),
    nalgebra::Vector3<i32> => ("Vector3<i32>", I32, 3),
    nalgebra::Vector4<i32> => ("Vector4<i32>", I32, 4),
    nalgebra::Vector2<u32> => ("Vector2<u32>", U32, 2),
    nalgebra::Vector3<u32> => ("Vector3<u32>", U32, 3),
    nalgebra::Vector4<u32> => ("Vector4<u32>", U32, 4),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vector_layout() {
        let TypeShape::Record(layout) = vector_layout("Vec3", ScalarKind::F32, 3, 12) else {
            panic!("expected a record shape");
        };
        assert_eq!(layout.size, 12);
        let offsets: Vec<_> = layout.fields.iter().map(|f| (f.name.as_ref(), f.offset)).collect();
        assert_eq!(offsets, vec![("x", 0), ("y", 4), ("z", 8)]);
    }

    #[test]
    fn test_padded_vector_layout() {
        let shape = vector_layout("Vec3A", ScalarKind::F32, 3, 16);
        assert_eq!(shape.size(), 16);
        let TypeShape::Record(layout) = shape else {
            panic!("expected a record shape");
        };
        assert_eq!(layout.field_count(), 3);
    }

    #[cfg(feature = "glam")]
    #[test]
    fn test_glam_vectors() {
        use crate::shape::VertexType;

        let TypeShape::Record(layout) = glam::Vec4::shape() else {
            panic!("expected a record shape");
        };
        assert_eq!(layout.size, 16);
        assert_eq!(layout.field("w").map(|f| f.offset), Some(12));

        assert_eq!(glam::DVec2::shape().size(), 16);
    }

    #[cfg(feature = "nalgebra")]
    #[test]
    fn test_nalgebra_vectors() {
        use crate::shape::VertexType;

        let TypeShape::Record(layout) = nalgebra::Vector3::<f32>::shape() else {
            panic!("expected a record shape");
        };
        assert_eq!(layout.size, 12);
        assert_eq!(layout.field("z").map(|f| f.offset), Some(8));
    }
}
