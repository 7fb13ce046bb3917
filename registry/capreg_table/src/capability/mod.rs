//! Opaque capability payloads.

use std::any::Any;
use std::fmt;

/// Borrowed payload of a published service.
///
/// Usually a reference to a static record of function pointers. The registry
/// never owns or frees it.
pub type ServiceData = &'static (dyn Any + Send + Sync);

/// A capability handed out by a module.
///
/// Equality is identity: two capabilities are equal when they point at the
/// same payload. Zero-sized payloads may share an address, so services that
/// need distinguishable identities should carry at least one field.
#[derive(Clone, Copy)]
pub struct Capability(ServiceData);

impl Capability {
    /// Wrap a static payload.
    pub const fn new(data: ServiceData) -> Self {
        Capability(data)
    }

    /// The raw payload.
    #[inline]
    pub fn data(self) -> ServiceData {
        self.0
    }

    /// View the payload as a concrete service record.
    ///
    /// Returns `None` if the payload has a different type.
    #[inline]
    pub fn downcast<T: Any>(self) -> Option<&'static T> {
        let data: &'static (dyn Any + Send + Sync) = self.0;
        data.downcast_ref::<T>()
    }

    /// Check whether the payload is a `T`.
    #[inline]
    pub fn is<T: Any>(self) -> bool {
        self.0.is::<T>()
    }

    /// Check whether both capabilities point at the same payload.
    #[inline]
    pub fn ptr_eq(self, other: Capability) -> bool {
        std::ptr::addr_eq(self.0, other.0)
    }
}

impl PartialEq for Capability {
    fn eq(&self, other: &Self) -> bool {
        self.ptr_eq(*other)
    }
}

impl Eq for Capability {}

impl fmt::Debug for Capability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Data address only; the vtable half of the fat pointer is noise.
        write!(f, "Capability({:p})", std::ptr::from_ref(self.0).cast::<()>())
    }
}
