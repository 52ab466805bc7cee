//! `PropertySet` for pass communication.
//!
//! Passes share the optional target device and any number of typed custom
//! properties, such as the [`VerificationSummary`](crate::passes::VerificationSummary)
//! left behind by device verification.
//!
//! # Example
//!
//! ```
//! use gridq_compile::PropertySet;
//! use gridq_device::GridDevice;
//!
//! #[derive(Debug, Clone, PartialEq)]
//! struct DroppedCount(usize);
//!
//! let mut props = PropertySet::new().with_device(GridDevice::foxtail());
//! props.insert(DroppedCount(3));
//!
//! assert!(props.device.is_some());
//! assert_eq!(props.get::<DroppedCount>(), Some(&DroppedCount(3)));
//! ```

use std::any::{Any, TypeId};

use gridq_device::GridDevice;
use rustc_hash::FxHashMap;

/// Shared state threaded through every pass.
#[derive(Debug, Default)]
pub struct PropertySet {
    /// Target device; device-specific passes skip when absent.
    pub device: Option<GridDevice>,

    /// Custom properties storage (type-erased).
    custom: FxHashMap<TypeId, Box<dyn Any + Send + Sync>>,
}

impl PropertySet {
    /// Create a new empty property set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the target device.
    #[must_use]
    pub fn with_device(mut self, device: GridDevice) -> Self {
        self.device = Some(device);
        self
    }

    /// Insert a custom property.
    pub fn insert<T: Any + Send + Sync>(&mut self, value: T) {
        self.custom.insert(TypeId::of::<T>(), Box::new(value));
    }

    /// Get a custom property.
    pub fn get<T: Any>(&self) -> Option<&T> {
        self.custom
            .get(&TypeId::of::<T>())
            .and_then(|v| v.downcast_ref())
    }

    /// Get a mutable custom property.
    pub fn get_mut<T: Any>(&mut self) -> Option<&mut T> {
        self.custom
            .get_mut(&TypeId::of::<T>())
            .and_then(|v| v.downcast_mut())
    }

    /// Remove a custom property.
    pub fn remove<T: Any>(&mut self) -> Option<T> {
        self.custom
            .remove(&TypeId::of::<T>())
            .and_then(|v| v.downcast().ok())
            .map(|v| *v)
    }
}
