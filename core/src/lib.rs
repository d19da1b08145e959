//! # attribind
//!
//! Derives GPU vertex attribute pointer configuration from vertex record
//! types, so callers never hand-compute offsets, strides or GL type codes.
//!
//! ## Overview
//!
//! This crate provides:
//! - [`VertexType`] - Static layout description of a vertex record
//! - [`bind_attributes`] - Resolves bindings and drives an [`AttributeBackend`]
//! - [`RecordingBackend`] - Backend that records calls (for testing)
//! - `GlBackend` - OpenGL backend (feature `gl`)
//! - `#[derive(VertexRecord)]` - Layout generation for structs (feature `derive`)
//!
//! ## Example
//!
//! ```ignore
//! use attribind_core::{AttributeBinding, VertexRecord, bind_attributes};
//!
//! #[derive(Clone, Copy, VertexRecord)]
//! #[repr(C)]
//! struct Vertex {
//!     position: [f32; 3],
//!     color: [u8; 4],
//! }
//!
//! // With the VAO and VBO bound:
//! bind_attributes(
//!     &mut backend,
//!     &vertices,
//!     &[
//!         AttributeBinding::field("position", 0),
//!         AttributeBinding::field("color", 1).normalized(),
//!     ],
//! )?;
//! ```

pub mod backend;
pub mod binding;
pub mod error;
pub mod introspect;
mod math;
pub mod primitive;
pub mod shape;

// Re-export main types for convenience
#[cfg(feature = "derive")]
pub use attribind_macro::VertexRecord;
pub use backend::{AttributeBackend, BackendCall, RecordingBackend, vertex_bytes};
#[cfg(feature = "gl")]
pub use backend::{BufferUsage, GlBackend};
pub use binding::{AttributeBinding, AttributeDescriptor};
pub use error::{LayoutError, LayoutErrorKind, LayoutResult};
pub use introspect::{bind_attributes, bind_shape, describe_attributes, describe_shape};
pub use primitive::{ElementType, ScalarKind};
pub use shape::{FieldLayout, RecordLayout, TypeShape, VertexType};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
    }
}
