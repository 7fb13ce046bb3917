//! Sentinel-terminated service tables.

use rustc_hash::FxHashSet;

use crate::capability::Capability;
use crate::descriptor::ServiceDescriptor;

/// Error when a descriptor list is not a well-formed service table.
///
/// Both cases are construction bugs in the module that owns the table. The
/// constructors panic on them; `ServiceTable::validate` reports them.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum TableError {
    /// No `ServiceDescriptor::End` in the list.
    #[error("service table of {len} descriptors has no end sentinel")]
    MissingSentinel { len: usize },
    /// A descriptor before the sentinel has an empty id.
    #[error("service descriptor {index} has an empty id")]
    EmptyId { index: usize },
}

/// An immutable, ordered list of service descriptors.
///
/// Only the descriptors before the first sentinel are kept; anything after
/// it is unreachable. Tables are read-only after construction and need no
/// synchronization.
#[derive(Clone, Copy, Debug)]
pub struct ServiceTable {
    /// Descriptors preceding the sentinel. Never contains `End`.
    services: &'static [ServiceDescriptor],
}

impl ServiceTable {
    /// A table holding only the sentinel.
    pub const EMPTY: ServiceTable = ServiceTable { services: &[] };

    /// Build a table from a sentinel-terminated descriptor list.
    ///
    /// Intended for statics, where a malformed list fails const evaluation.
    ///
    /// # Panics
    ///
    /// Panics if the list has no `ServiceDescriptor::End` or if a descriptor
    /// before it has an empty id.
    pub const fn new(entries: &'static [ServiceDescriptor]) -> Self {
        match scan(entries) {
            Ok(end) => ServiceTable {
                services: entries.split_at(end).0,
            },
            Err(TableError::MissingSentinel { .. }) => {
                panic!("service table has no end sentinel")
            }
            Err(TableError::EmptyId { .. }) => {
                panic!("service table has a descriptor with an empty id")
            }
        }
    }

    /// Build a table from a descriptor list assembled at runtime.
    ///
    /// Same contract as `new`: a malformed list is a bug in the module that
    /// built it and is never recovered from. Duplicate ids are accepted (the
    /// first one wins at lookup) but each is reported with a warning.
    ///
    /// # Panics
    ///
    /// Panics with the `TableError` message if the list is malformed.
    pub fn from_descriptors(entries: &'static [ServiceDescriptor]) -> Self {
        let end = match scan(entries) {
            Ok(end) => end,
            Err(err) => panic!("{err}"),
        };
        let table = ServiceTable {
            services: &entries[..end],
        };
        for id in table.duplicate_ids() {
            tracing::warn!(id, "duplicate service id; only the first descriptor is reachable");
        }
        table
    }

    /// Explain why `entries` would be rejected by the constructors.
    ///
    /// For table authors and tooling that want the reason without the panic.
    pub fn validate(entries: &[ServiceDescriptor]) -> Result<(), TableError> {
        scan(entries).map(|_| ())
    }

    /// Find the payload of the first service published under `id`.
    ///
    /// Linear in the table size; no allocation, no mutation.
    pub fn lookup(&self, id: &str) -> Option<Capability> {
        self.services.iter().find_map(|descriptor| match *descriptor {
            ServiceDescriptor::Service { id: service_id, data } if service_id == id => Some(data),
            _ => None,
        })
    }

    /// Check whether any service is published under `id`.
    pub fn contains(&self, id: &str) -> bool {
        self.lookup(id).is_some()
    }

    /// Iterate over `(id, capability)` pairs in table order.
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, Capability)> {
        self.services.iter().filter_map(|descriptor| match *descriptor {
            ServiceDescriptor::Service { id, data } => Some((id, data)),
            ServiceDescriptor::End => None,
        })
    }

    /// Number of services before the sentinel.
    pub fn len(&self) -> usize {
        self.services.len()
    }

    pub fn is_empty(&self) -> bool {
        self.services.is_empty()
    }

    /// Ids published more than once, each reported once in first-seen order.
    pub fn duplicate_ids(&self) -> Vec<&'static str> {
        let mut seen = FxHashSet::default();
        let mut duplicates = Vec::new();
        for (id, _) in self.iter() {
            if !seen.insert(id) && !duplicates.contains(&id) {
                duplicates.push(id);
            }
        }
        duplicates
    }
}

impl Default for ServiceTable {
    fn default() -> Self {
        Self::EMPTY
    }
}

/// Find the sentinel, validating every descriptor before it.
const fn scan(entries: &[ServiceDescriptor]) -> Result<usize, TableError> {
    let mut index = 0;
    while index < entries.len() {
        match entries[index] {
            ServiceDescriptor::End => return Ok(index),
            ServiceDescriptor::Service { id, .. } => {
                if id.is_empty() {
                    return Err(TableError::EmptyId { index });
                }
            }
        }
        index += 1;
    }
    Err(TableError::MissingSentinel { len: entries.len() })
}

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    reason = "tests use unwrap to panic on unexpected state"
)]
