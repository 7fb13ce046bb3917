//! The atomic published unit of a service table.

use crate::capability::{Capability, ServiceData};

/// One entry of a service table.
///
/// `Service` pairs an id with its payload; `End` is the sentinel that closes
/// the table. Nothing after the first `End` is ever visited.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ServiceDescriptor {
    /// A published service.
    Service {
        /// Service id, compared by exact byte equality.
        id: &'static str,
        /// Payload borrowed from the module.
        data: Capability,
    },
    /// End-of-table sentinel.
    End,
}

impl ServiceDescriptor {
    /// The end-of-table sentinel.
    pub const END: Self = ServiceDescriptor::End;

    /// Describe a service.
    pub const fn new(id: &'static str, data: ServiceData) -> Self {
        ServiceDescriptor::Service {
            id,
            data: Capability::new(data),
        }
    }

    /// The service id, or `None` for the sentinel.
    pub const fn id(&self) -> Option<&'static str> {
        match self {
            ServiceDescriptor::Service { id, .. } => Some(*id),
            ServiceDescriptor::End => None,
        }
    }

    /// The service payload, or `None` for the sentinel.
    pub const fn capability(&self) -> Option<Capability> {
        match self {
            ServiceDescriptor::Service { data, .. } => Some(*data),
            ServiceDescriptor::End => None,
        }
    }

    pub const fn is_end(&self) -> bool {
        matches!(self, ServiceDescriptor::End)
    }
}
