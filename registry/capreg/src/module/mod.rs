//! Modules and their service export.

use capreg_table::{Capability, ServiceTable};

/// A provider of optional services.
///
/// The only contract the registry needs is `get_interface`. By default it
/// walks the module's `service_table`; a module with no table publishes
/// nothing. Modules that compute their answers (or forward to another module)
/// override `get_interface` directly.
///
/// Repeated calls with the same id must return equivalent answers. Consumers
/// memoize the first one.
pub trait Module: Send + Sync {
    /// Name used in diagnostics.
    fn name(&self) -> &str;

    /// The static table this module publishes, if any.
    fn service_table(&self) -> Option<&ServiceTable> {
        None
    }

    /// Find the service published under `id`.
    fn get_interface(&self, id: &str) -> Option<Capability> {
        self.service_table().and_then(|table| table.lookup(id))
    }
}

/// A module that publishes a fixed service table.
#[derive(Clone, Copy, Debug)]
pub struct TableModule {
    name: &'static str,
    table: &'static ServiceTable,
}

impl TableModule {
    pub const fn new(name: &'static str, table: &'static ServiceTable) -> Self {
        TableModule { name, table }
    }

    pub fn table(&self) -> &'static ServiceTable {
        self.table
    }
}

impl Module for TableModule {
    fn name(&self) -> &str {
        self.name
    }

    fn service_table(&self) -> Option<&ServiceTable> {
        Some(self.table)
    }
}

/// Check whether two module references denote the same module instance.
///
/// Identity is the whole trait-object pointer: the object address and its
/// vtable. Two zero-sized drivers, or a module and the first field of a
/// `#[repr(C)]` wrapper, can share an address while being different types;
/// they differ here. A duplicated vtable for one type only costs an extra
/// reset.
#[inline]
pub fn same_module(a: &dyn Module, b: &dyn Module) -> bool {
    std::ptr::eq(a, b)
}

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    reason = "tests use unwrap to panic on unexpected state"
)]
