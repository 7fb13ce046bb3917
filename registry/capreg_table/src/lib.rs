//! Service tables for the capability registry.
//!
//! A module publishes its optional capabilities ("services") as a static list
//! of `(id, data)` descriptors closed by an end sentinel:
//!
//! ```text
//! static SERVICES: [ServiceDescriptor; 3] = [
//!     ServiceDescriptor::new(ids::MULTI_MASTERS, &MULTI_MASTERS),
//!     ServiceDescriptor::new(ids::GLYPH_DICT, &GLYPH_DICT),
//!     ServiceDescriptor::END,
//! ];
//! static TABLE: ServiceTable = ServiceTable::new(&SERVICES);
//! ```
//!
//! `ServiceTable::new` is a `const fn`, so a table without its sentinel is
//! rejected while the static is evaluated. Lookups are a single linear scan
//! with no allocation; the first descriptor whose id matches wins.

mod capability;
mod descriptor;
pub mod ids;
mod table;

pub use capability::{Capability, ServiceData};
pub use descriptor::ServiceDescriptor;
pub use table::{ServiceTable, TableError};
