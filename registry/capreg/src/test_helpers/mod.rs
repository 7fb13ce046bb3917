//! Test helpers for module and face tests.

use capreg_table::{ids, Capability, ServiceDescriptor, ServiceTable};
use parking_lot::Mutex;

use crate::Module;

/// A table-backed module that records every `get_interface` call.
pub struct CountingModule {
    name: &'static str,
    table: &'static ServiceTable,
    requests: Mutex<Vec<String>>,
}

impl CountingModule {
    pub fn new(name: &'static str, table: &'static ServiceTable) -> Self {
        CountingModule {
            name,
            table,
            requests: Mutex::new(Vec::new()),
        }
    }

    /// Total number of `get_interface` calls.
    pub fn calls(&self) -> usize {
        self.requests.lock().len()
    }

    /// Number of `get_interface` calls for `id`.
    pub fn calls_for(&self, id: &str) -> usize {
        self.requests.lock().iter().filter(|r| *r == id).count()
    }
}

impl Module for CountingModule {
    fn name(&self) -> &str {
        self.name
    }

    fn service_table(&self) -> Option<&ServiceTable> {
        Some(self.table)
    }

    fn get_interface(&self, id: &str) -> Option<Capability> {
        self.requests.lock().push(id.to_string());
        self.table.lookup(id)
    }
}

// Sample services and tables

crate::define_service! {
    /// PostScript name of a font.
    pub struct PsNameService for ids::POSTSCRIPT_FONT_NAME, slot = PostScriptName {
        pub get_name: fn() -> &'static str,
    }
}

crate::define_service! {
    pub struct MultiMastersService for ids::MULTI_MASTERS, slot = MultiMasters {
        pub axis_count: fn() -> u32,
    }
}

crate::define_service! {
    /// BDF charset, never cached.
    pub struct BdfService for ids::BDF {
        pub charset: fn() -> &'static str,
    }
}

fn times_roman() -> &'static str {
    "Times-Roman"
}

fn two_axes() -> u32 {
    2
}

fn iso8859() -> &'static str {
    "ISO8859-1"
}

pub static PS_NAME: PsNameService = PsNameService {
    get_name: times_roman,
};
pub static MULTI_MASTERS: MultiMastersService = MultiMastersService {
    axis_count: two_axes,
};
pub static BDF: BdfService = BdfService { charset: iso8859 };

static TYPE1_SERVICES: [ServiceDescriptor; 3] = [
    ServiceDescriptor::new(ids::POSTSCRIPT_FONT_NAME, &PS_NAME),
    ServiceDescriptor::new(ids::MULTI_MASTERS, &MULTI_MASTERS),
    ServiceDescriptor::END,
];

/// A Type 1 style driver: PostScript name and Multiple Masters.
pub static TYPE1_TABLE: ServiceTable = ServiceTable::new(&TYPE1_SERVICES);

static BDF_SERVICES: [ServiceDescriptor; 2] = [
    ServiceDescriptor::new(ids::BDF, &BDF),
    ServiceDescriptor::END,
];

/// A bitmap driver: BDF only.
pub static BDF_TABLE: ServiceTable = ServiceTable::new(&BDF_SERVICES);

static MISLABELED_SERVICES: [ServiceDescriptor; 2] = [
    ServiceDescriptor::new(ids::POSTSCRIPT_FONT_NAME, &BDF),
    ServiceDescriptor::END,
];

/// Publishes a BDF record under the PostScript name id.
pub static MISLABELED_TABLE: ServiceTable = ServiceTable::new(&MISLABELED_SERVICES);
