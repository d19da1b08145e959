//! GPU attribute binding backends.
//!
//! The introspector never talks to a graphics API directly. It hands every
//! resolved [`AttributeDescriptor`] to an [`AttributeBackend`], which turns
//! it into API calls.
//!
//! # Available Backends
//!
//! - [`RecordingBackend`] (always available): records calls, for tests and tooling
//! - `GlBackend` (feature `gl`): OpenGL through the `gl` crate
//!
//! # Preconditions
//!
//! Backends configure whatever vertex array and vertex buffer are currently
//! bound. The caller binds both before calling
//! [`bind_attributes`](crate::bind_attributes).

#[cfg(feature = "gl")]
pub mod opengl;

pub mod recording;

#[cfg(feature = "gl")]
pub use opengl::{BufferUsage, GlBackend};
pub use recording::{BackendCall, RecordingBackend};

use crate::binding::AttributeDescriptor;

/// Receiver of attribute pointer configuration.
pub trait AttributeBackend {
    /// Backend name, used in log output.
    fn name(&self) -> &'static str;

    /// Describe how the bound vertex buffer feeds one attribute location.
    fn set_attribute_pointer(&mut self, descriptor: &AttributeDescriptor);

    /// Enable a previously configured attribute location.
    fn enable_attribute(&mut self, location: u32);

    /// Set the instancing divisor of an attribute location.
    fn set_attribute_divisor(&mut self, location: u32, divisor: u32);
}

impl<B: AttributeBackend + ?Sized> AttributeBackend for &mut B {
    fn name(&self) -> &'static str {
        (**self).name()
    }

    fn set_attribute_pointer(&mut self, descriptor: &AttributeDescriptor) {
        (**self).set_attribute_pointer(descriptor);
    }

    fn enable_attribute(&mut self, location: u32) {
        (**self).enable_attribute(location);
    }

    fn set_attribute_divisor(&mut self, location: u32, divisor: u32) {
        (**self).set_attribute_divisor(location, divisor);
    }
}

/// View a slice of plain-old-data vertices as the bytes to upload.
pub fn vertex_bytes<V: bytemuck::Pod>(vertices: &[V]) -> &[u8] {
    bytemuck::cast_slice(vertices)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vertex_bytes() {
        let vertices: [[f32; 2]; 3] = [[0.0, 1.0], [2.0, 3.0], [4.0, 5.0]];
        let bytes = vertex_bytes(&vertices);
        assert_eq!(bytes.len(), 24);
        assert_eq!(&bytes[4..8], &1.0f32.to_ne_bytes());
    }

    #[test]
    fn test_forwarding_through_mut_ref() {
        fn enable_seven<B: AttributeBackend>(mut backend: B) -> &'static str {
            backend.enable_attribute(7);
            backend.name()
        }

        let mut backend = RecordingBackend::new();
        assert_eq!(enable_seven(&mut backend), "Recording");
        assert_eq!(backend.calls(), &[BackendCall::EnableAttribute(7)]);
    }
}
