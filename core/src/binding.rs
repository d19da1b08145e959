//! Binding requests and the attribute descriptors derived from them.

use std::borrow::Cow;

use crate::primitive::ElementType;

/// Request to bind one part of a vertex record to a shader attribute slot.
///
/// For struct-backed records the binding selects a field by name. For
/// array-backed records the name is ignored; see
/// [`bind_attributes`](crate::bind_attributes) for how positional bindings
/// are laid out.
///
/// # Example
///
/// ```ignore
/// let bindings = [
///     AttributeBinding::field("position", 0),
///     AttributeBinding::field("color", 1).normalized(),
///     AttributeBinding::field("offset", 2).per_instance(),
/// ];
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AttributeBinding {
    /// Name of the record field to bind. Empty for positional bindings.
    pub field: Cow<'static, str>,
    /// Destination attribute location (`layout(location = N)` in GLSL).
    pub location: u32,
    /// Whether integer data is normalized to `[0, 1]` / `[-1, 1]`.
    pub normalized: bool,
    /// Instancing divisor. `None` leaves the attribute per-vertex.
    pub divisor: Option<u32>,
}

impl AttributeBinding {
    /// Bind the named field to `location`.
    pub fn field(name: impl Into<Cow<'static, str>>, location: u32) -> Self {
        Self {
            field: name.into(),
            location,
            normalized: false,
            divisor: None,
        }
    }

    /// Bind the next slice of an array-backed record to `location`.
    pub fn positional(location: u32) -> Self {
        Self::field("", location)
    }

    /// Mark the attribute as normalized.
    pub fn normalized(self) -> Self {
        self.with_normalized(true)
    }

    /// Set the normalized flag.
    pub fn with_normalized(mut self, normalized: bool) -> Self {
        self.normalized = normalized;
        self
    }

    /// Advance the attribute once per instance instead of once per vertex.
    pub fn per_instance(self) -> Self {
        self.with_divisor(1)
    }

    /// Advance the attribute once every `divisor` instances.
    pub fn with_divisor(mut self, divisor: u32) -> Self {
        self.divisor = Some(divisor);
        self
    }

    /// Whether this binding names no field.
    pub fn is_positional(&self) -> bool {
        self.field.is_empty()
    }
}

/// Fully resolved attribute pointer configuration for one binding.
///
/// These are exactly the arguments of `glVertexAttribPointer`, plus the
/// optional instancing divisor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AttributeDescriptor {
    /// Attribute location.
    pub location: u32,
    /// Number of components (1 to 4 for most drivers).
    pub components: u32,
    /// Type of each component.
    pub element_type: ElementType,
    /// Whether integer data is normalized.
    pub normalized: bool,
    /// Byte distance between consecutive records.
    pub stride: u32,
    /// Byte offset of the attribute within a record.
    pub offset: u32,
    /// Instancing divisor, if any.
    pub divisor: Option<u32>,
}

impl AttributeDescriptor {
    /// Size in bytes of one attribute value.
    pub fn byte_size(&self) -> usize {
        self.components as usize * self.element_type.size()
    }

    /// Byte offset one past the end of the attribute within a record.
    pub fn end_offset(&self) -> usize {
        self.offset as usize + self.byte_size()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_binding_builders() {
        let binding = AttributeBinding::field("color", 3).normalized();
        assert_eq!(binding.field, "color");
        assert_eq!(binding.location, 3);
        assert!(binding.normalized);
        assert_eq!(binding.divisor, None);
        assert!(!binding.is_positional());

        let instanced = AttributeBinding::positional(2).per_instance();
        assert!(instanced.is_positional());
        assert_eq!(instanced.divisor, Some(1));
        assert!(!instanced.normalized);

        let owned = AttributeBinding::field(String::from("uv"), 1).with_divisor(4);
        assert_eq!(owned.divisor, Some(4));
    }

    #[test]
    fn test_descriptor_extent() {
        let descriptor = AttributeDescriptor {
            location: 1,
            components: 4,
            element_type: ElementType::UnsignedByte,
            normalized: true,
            stride: 16,
            offset: 12,
            divisor: None,
        };
        assert_eq!(descriptor.byte_size(), 4);
        assert_eq!(descriptor.end_offset(), 16);
    }
}
