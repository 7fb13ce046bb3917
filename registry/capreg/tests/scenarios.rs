//! End-to-end lookup scenarios through the public API.

#![allow(clippy::unwrap_used, clippy::expect_used, reason = "Tests can panic")]

use std::sync::atomic::{AtomicUsize, Ordering};

use capreg::{
    define_service, ids, init_tracing, CacheSlot, Capability, Face, Module, ServiceDescriptor,
    ServiceSlot, ServiceTable, TableModule,
};
use pretty_assertions::assert_eq;

struct Payload {
    _name: &'static str,
}

static X: Payload = Payload { _name: "x" };
static Y: Payload = Payload { _name: "y" };

static AB_SERVICES: [ServiceDescriptor; 3] = [
    ServiceDescriptor::new("a", &X),
    ServiceDescriptor::new("b", &Y),
    ServiceDescriptor::END,
];
static AB_TABLE: ServiceTable = ServiceTable::new(&AB_SERVICES);

define_service! {
    /// PostScript name retrieval.
    pub struct PsName for ids::POSTSCRIPT_FONT_NAME, slot = PostScriptName {
        pub get: fn() -> &'static str,
    }
}

fn courier() -> &'static str {
    "Courier"
}

static PS_NAME: PsName = PsName { get: courier };

static CFF_SERVICES: [ServiceDescriptor; 2] = [
    ServiceDescriptor::new(ids::POSTSCRIPT_FONT_NAME, &PS_NAME),
    ServiceDescriptor::END,
];
static CFF_TABLE: ServiceTable = ServiceTable::new(&CFF_SERVICES);

/// Table-backed module counting `get_interface` calls.
struct Counted {
    table: &'static ServiceTable,
    calls: AtomicUsize,
}

impl Counted {
    fn new(table: &'static ServiceTable) -> Self {
        Counted {
            table,
            calls: AtomicUsize::new(0),
        }
    }

    fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl Module for Counted {
    fn name(&self) -> &str {
        "counted"
    }

    fn service_table(&self) -> Option<&ServiceTable> {
        Some(self.table)
    }

    fn get_interface(&self, id: &str) -> Option<Capability> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.table.lookup(id)
    }
}

#[test]
fn table_lookup_hits_and_misses() {
    assert_eq!(AB_TABLE.lookup("b"), Some(Capability::new(&Y)));
    assert_eq!(AB_TABLE.lookup("c"), None);
}

#[test]
fn missing_multi_masters_is_negatively_cached() {
    init_tracing();
    let module = Counted::new(&CFF_TABLE);
    let face = Face::new(&module);
    assert_eq!(
        face.services().state(ServiceSlot::MultiMasters),
        CacheSlot::Uninitialized
    );

    assert!(face
        .lookup_service(ServiceSlot::MultiMasters, ids::MULTI_MASTERS)
        .is_none());
    assert_eq!(
        face.services().state(ServiceSlot::MultiMasters),
        CacheSlot::Unavailable
    );

    assert!(face
        .lookup_service(ServiceSlot::MultiMasters, ids::MULTI_MASTERS)
        .is_none());
    assert_eq!(module.calls(), 1);
}

#[test]
fn postscript_name_is_memoized() {
    init_tracing();
    let module = Counted::new(&CFF_TABLE);
    let face = Face::new(&module);

    let first = face
        .lookup_service(ServiceSlot::PostScriptName, ids::POSTSCRIPT_FONT_NAME)
        .unwrap();
    assert_eq!(
        face.services().state(ServiceSlot::PostScriptName),
        CacheSlot::Present(first)
    );

    let second = face
        .lookup_service(ServiceSlot::PostScriptName, ids::POSTSCRIPT_FONT_NAME)
        .unwrap();
    assert!(first.ptr_eq(second));
    assert!(first.ptr_eq(Capability::new(&PS_NAME)));
    assert_eq!(module.calls(), 1);
}

#[test]
fn typed_service_through_stock_table_module() {
    static CFF: TableModule = TableModule::new("cff", &CFF_TABLE);
    let face = Face::new(&CFF);

    let ps = face.service::<PsName>().unwrap();
    assert_eq!((ps.get)(), "Courier");
}

#[test]
fn rebinding_reruns_lookup_on_new_module() {
    let cff = Counted::new(&CFF_TABLE);
    let other = Counted::new(&AB_TABLE);
    let mut face = Face::new(&cff);

    assert!(face.lookup_slot(ServiceSlot::PostScriptName).is_some());
    assert!(face.rebind(&other));
    assert!(face.lookup_slot(ServiceSlot::PostScriptName).is_none());
    assert!(face.lookup_slot(ServiceSlot::PostScriptName).is_none());

    assert_eq!(cff.calls(), 1);
    assert_eq!(other.calls(), 1);
}
