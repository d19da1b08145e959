//! Recording backend for tests and tooling.
//!
//! This backend performs no GPU work. It keeps every call it receives, in
//! order, so callers can inspect exactly what a real backend would have
//! been asked to do.

use crate::binding::AttributeDescriptor;

use super::AttributeBackend;

/// One call received by a [`RecordingBackend`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BackendCall {
    /// `set_attribute_pointer` with the given descriptor.
    SetAttributePointer(AttributeDescriptor),
    /// `enable_attribute` for the given location.
    EnableAttribute(u32),
    /// `set_attribute_divisor` for the given location.
    SetAttributeDivisor { location: u32, divisor: u32 },
}

/// Backend that records calls instead of issuing them.
#[derive(Debug, Default, Clone)]
pub struct RecordingBackend {
    calls: Vec<BackendCall>,
}

impl RecordingBackend {
    /// Create an empty recording backend.
    pub fn new() -> Self {
        Self::default()
    }

    /// All calls received so far, in order.
    pub fn calls(&self) -> &[BackendCall] {
        &self.calls
    }

    /// Take the recorded calls, leaving the backend empty.
    pub fn take_calls(&mut self) -> Vec<BackendCall> {
        std::mem::take(&mut self.calls)
    }

    /// Forget all recorded calls.
    pub fn clear(&mut self) {
        self.calls.clear();
    }

    /// Whether no call has been recorded.
    pub fn is_empty(&self) -> bool {
        self.calls.is_empty()
    }

    /// Descriptors passed to `set_attribute_pointer`, in order.
    pub fn descriptors(&self) -> impl Iterator<Item = &AttributeDescriptor> {
        self.calls.iter().filter_map(|call| match call {
            BackendCall::SetAttributePointer(descriptor) => Some(descriptor),
            _ => None,
        })
    }

    /// Locations passed to `enable_attribute`, in order.
    pub fn enabled_locations(&self) -> impl Iterator<Item = u32> + '_ {
        self.calls.iter().filter_map(|call| match call {
            BackendCall::EnableAttribute(location) => Some(*location),
            _ => None,
        })
    }
}

impl AttributeBackend for RecordingBackend {
    fn name(&self) -> &'static str {
        "Recording"
    }

    fn set_attribute_pointer(&mut self, descriptor: &AttributeDescriptor) {
        log::trace!(
            "RecordingBackend: attribute pointer location={} components={} type={} stride={} offset={}",
            descriptor.location,
            descriptor.components,
            descriptor.element_type,
            descriptor.stride,
            descriptor.offset
        );
        self.calls.push(BackendCall::SetAttributePointer(*descriptor));
    }

    fn enable_attribute(&mut self, location: u32) {
        log::trace!("RecordingBackend: enable attribute {}", location);
        self.calls.push(BackendCall::EnableAttribute(location));
    }

    fn set_attribute_divisor(&mut self, location: u32, divisor: u32) {
        log::trace!(
            "RecordingBackend: attribute {} divisor {}",
            location,
            divisor
        );
        self.calls
            .push(BackendCall::SetAttributeDivisor { location, divisor });
    }
}

static_assertions::assert_impl_all!(RecordingBackend: Send, Sync);
