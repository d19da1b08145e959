//! Sample vertex formats.
//!
//! Each format pairs a vertex type with the attribute bindings a shader for
//! it would declare, plus a few sample vertices to upload.

use std::fmt;

use attribind_core::{
    AttributeBackend, AttributeBinding, AttributeDescriptor, LayoutResult, TypeShape,
    VertexRecord, VertexType, bind_attributes, describe_attributes, vertex_bytes,
};
use glam::{Vec2, Vec3};

// === Vertex Types ===

/// Position and texture coordinate of a textured quad corner.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, bytemuck::Pod, bytemuck::Zeroable, VertexRecord)]
pub struct QuadVertex {
    pub pos: Vec3,
    pub tex: Vec2,
}

/// Position with an 8-bit RGBA color, normalized to `[0, 1]` in the shader.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, bytemuck::Pod, bytemuck::Zeroable, VertexRecord)]
pub struct ColoredVertex {
    pub position: [f32; 3],
    pub color: [u8; 4],
}

/// Per-instance data for instanced quads.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, bytemuck::Pod, bytemuck::Zeroable, VertexRecord)]
pub struct InstanceData {
    pub offset: Vec3,
    pub tint: [f32; 4],
}

/// 2D position stored as a bare array.
pub type PackedVertex = [f32; 2];

const QUAD_VERTICES: [QuadVertex; 4] = [
    QuadVertex {
        pos: Vec3::new(-0.5, -0.5, 0.0),
        tex: Vec2::new(0.0, 1.0),
    },
    QuadVertex {
        pos: Vec3::new(0.5, -0.5, 0.0),
        tex: Vec2::new(1.0, 1.0),
    },
    QuadVertex {
        pos: Vec3::new(0.5, 0.5, 0.0),
        tex: Vec2::new(1.0, 0.0),
    },
    QuadVertex {
        pos: Vec3::new(-0.5, 0.5, 0.0),
        tex: Vec2::new(0.0, 0.0),
    },
];

const COLORED_VERTICES: [ColoredVertex; 3] = [
    ColoredVertex {
        position: [-0.5, -0.5, 0.0],
        color: [255, 0, 0, 255],
    },
    ColoredVertex {
        position: [0.5, -0.5, 0.0],
        color: [0, 255, 0, 255],
    },
    ColoredVertex {
        position: [0.0, 0.5, 0.0],
        color: [0, 0, 255, 255],
    },
];

const INSTANCES: [InstanceData; 2] = [
    InstanceData {
        offset: Vec3::new(-1.0, 0.0, 0.0),
        tint: [1.0, 0.5, 0.5, 1.0],
    },
    InstanceData {
        offset: Vec3::new(1.0, 0.0, 0.0),
        tint: [0.5, 0.5, 1.0, 1.0],
    },
];

const PACKED_VERTICES: [PackedVertex; 3] = [[-0.5, -0.5], [0.5, -0.5], [0.0, 0.5]];

// === Sample Formats ===

/// One of the bundled sample formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SampleFormat {
    /// [`QuadVertex`]: position at location 0, texcoord at location 1.
    Quad,
    /// [`ColoredVertex`]: position at location 0, normalized color at location 1.
    Colored,
    /// [`InstanceData`]: per-instance offset and tint at locations 2 and 3.
    Instance,
    /// [`PackedVertex`]: one positional binding over the whole array.
    Packed,
}

impl SampleFormat {
    pub const ALL: [SampleFormat; 4] = [Self::Quad, Self::Colored, Self::Instance, Self::Packed];

    pub fn name(self) -> &'static str {
        match self {
            Self::Quad => "quad",
            Self::Colored => "colored",
            Self::Instance => "instance",
            Self::Packed => "packed",
        }
    }

    /// Look a format up by its [`name`](Self::name).
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|format| format.name() == name)
    }

    /// Shape of the format's vertex type.
    pub fn shape(self) -> TypeShape {
        match self {
            Self::Quad => QuadVertex::shape(),
            Self::Colored => ColoredVertex::shape(),
            Self::Instance => InstanceData::shape(),
            Self::Packed => PackedVertex::shape(),
        }
    }

    /// Bindings a shader for this format would declare.
    pub fn bindings(self) -> Vec<AttributeBinding> {
        match self {
            Self::Quad => vec![
                AttributeBinding::field("pos", 0),
                AttributeBinding::field("tex", 1),
            ],
            Self::Colored => vec![
                AttributeBinding::field("position", 0),
                AttributeBinding::field("color", 1).normalized(),
            ],
            Self::Instance => vec![
                AttributeBinding::field("offset", 2).per_instance(),
                AttributeBinding::field("tint", 3).per_instance(),
            ],
            Self::Packed => vec![AttributeBinding::positional(0)],
        }
    }

    /// Resolve descriptors without touching a backend.
    pub fn describe(self) -> LayoutResult<Vec<AttributeDescriptor>> {
        let bindings = self.bindings();
        match self {
            Self::Quad => describe_attributes::<QuadVertex>(&bindings),
            Self::Colored => describe_attributes::<ColoredVertex>(&bindings),
            Self::Instance => describe_attributes::<InstanceData>(&bindings),
            Self::Packed => describe_attributes::<PackedVertex>(&bindings),
        }
    }

    /// Bind the format's sample vertices on `backend`.
    ///
    /// Returns the number of bytes the sample vertices occupy once uploaded.
    pub fn bind<B: AttributeBackend + ?Sized>(self, backend: &mut B) -> LayoutResult<usize> {
        let bindings = self.bindings();
        match self {
            Self::Quad => bind_sample(backend, &QUAD_VERTICES, &bindings),
            Self::Colored => bind_sample(backend, &COLORED_VERTICES, &bindings),
            Self::Instance => bind_sample(backend, &INSTANCES, &bindings),
            Self::Packed => bind_sample(backend, &PACKED_VERTICES, &bindings),
        }
    }
}

impl fmt::Display for SampleFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

fn bind_sample<V, B>(
    backend: &mut B,
    vertices: &[V],
    bindings: &[AttributeBinding],
) -> LayoutResult<usize>
where
    V: VertexType + bytemuck::Pod,
    B: AttributeBackend + ?Sized,
{
    bind_attributes(backend, vertices, bindings)?;
    Ok(vertex_bytes(vertices).len())
}
