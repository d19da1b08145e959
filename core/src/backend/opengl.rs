//! OpenGL backend using the `gl` crate.

use std::ffi::c_void;

use gl::types::{GLboolean, GLint, GLsizei, GLsizeiptr};

use crate::binding::AttributeDescriptor;

use super::{AttributeBackend, vertex_bytes};

/// Expected update frequency of an uploaded vertex buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum BufferUsage {
    /// Uploaded once, drawn many times.
    #[default]
    Static,
    /// Re-uploaded frequently.
    Dynamic,
}

impl BufferUsage {
    fn gl_enum(self) -> u32 {
        match self {
            Self::Static => gl::STATIC_DRAW,
            Self::Dynamic => gl::DYNAMIC_DRAW,
        }
    }
}

/// Backend issuing `glVertexAttribPointer` and friends.
///
/// All calls act on the vertex array object and `GL_ARRAY_BUFFER` bound on
/// the current thread's context.
#[derive(Debug)]
pub struct GlBackend {
    _private: (),
}

impl GlBackend {
    /// Create the backend.
    ///
    /// # Safety
    ///
    /// OpenGL function pointers must have been loaded with `gl::load_with`,
    /// and a context must be current on this thread for as long as the
    /// backend is used.
    pub unsafe fn new() -> Self {
        Self { _private: () }
    }

    /// Upload `vertices` into the bound `GL_ARRAY_BUFFER`, replacing its storage.
    pub fn upload_vertices<V: bytemuck::Pod>(&mut self, vertices: &[V], usage: BufferUsage) {
        let bytes = vertex_bytes(vertices);
        log::debug!(
            "GlBackend: uploading {} vertices ({} bytes, {:?})",
            vertices.len(),
            bytes.len(),
            usage
        );
        // SAFETY: `new` requires a current context with loaded pointers; the
        // pointer and length describe a live slice.
        unsafe {
            gl::BufferData(
                gl::ARRAY_BUFFER,
                bytes.len() as GLsizeiptr,
                bytes.as_ptr().cast::<c_void>(),
                usage.gl_enum(),
            );
        }
    }
}

impl AttributeBackend for GlBackend {
    fn name(&self) -> &'static str {
        "OpenGL"
    }

    fn set_attribute_pointer(&mut self, descriptor: &AttributeDescriptor) {
        let normalized: GLboolean = if descriptor.normalized {
            gl::TRUE
        } else {
            gl::FALSE
        };
        // SAFETY: see `GlBackend::new`. The offset is interpreted relative to
        // the bound array buffer, never dereferenced on the CPU.
        unsafe {
            gl::VertexAttribPointer(
                descriptor.location,
                descriptor.components as GLint,
                descriptor.element_type.gl_enum(),
                normalized,
                descriptor.stride as GLsizei,
                descriptor.offset as usize as *const c_void,
            );
        }
    }

    fn enable_attribute(&mut self, location: u32) {
        // SAFETY: see `GlBackend::new`.
        unsafe {
            gl::EnableVertexAttribArray(location);
        }
    }

    fn set_attribute_divisor(&mut self, location: u32, divisor: u32) {
        // SAFETY: see `GlBackend::new`.
        unsafe {
            gl::VertexAttribDivisor(location, divisor);
        }
    }
}
