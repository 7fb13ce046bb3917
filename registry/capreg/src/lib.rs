//! Capreg - dynamic capability registry.
//!
//! A module exposes optional, named capabilities ("services") to its host.
//! Consumers (faces) find them through the module and memoize the hot ones.
//!
//! # Architecture
//!
//! - `capreg_table`: descriptors, sentinel-terminated service tables, ids
//! - `capreg_cache`: tri-state cache slots behind a closed slot enum
//! - this crate: the `Module` trait, consumer binding (`Face`), and the two
//!   lookup entry points
//!
//! # Lookup
//!
//! - [`find_service`]: ask the module every time. For rarely used or
//!   dynamically named services.
//! - [`lookup_service`]: read the consumer's cache slot; on first use ask the
//!   module once and memoize the answer, absent answers included.
//!
//! # Debugging
//!
//! - `RUST_LOG=capreg_cache=debug`: log every slot population
//! - `RUST_LOG=capreg_cache=trace`: also log cache hits (very verbose)
//! - `RUST_LOG=capreg_table=warn`: report duplicate ids in runtime-built tables

mod face;
mod facade;
mod module;
mod service;

#[cfg(test)]
mod test_helpers;

use std::sync::Once;

pub use capreg_cache::{
    CacheConfig, CacheSlot, ParseStrategyError, PopulateStrategy, ServiceCache, ServiceSlot,
    POPULATE_ENV,
};
pub use capreg_table::{ids, Capability, ServiceData, ServiceDescriptor, ServiceTable, TableError};
pub use face::{Face, ServiceConsumer};
pub use facade::{find_service, lookup_service};
pub use module::{same_module, Module, TableModule};
pub use service::Service;

static TRACING_INIT: Once = Once::new();

/// Install a `RUST_LOG`-filtered subscriber for capreg's events.
///
/// Does nothing when `RUST_LOG` is unset or unparsable. A host that already
/// installed a global subscriber keeps it; capreg then logs through the host's
/// subscriber. Only the first call does any work.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        let Ok(filter) = EnvFilter::try_from_default_env() else {
            return;
        };
        let installed = tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().with_target(true))
            .try_init();
        if installed.is_err() {
            tracing::debug!("global subscriber already set; keeping the host's");
        }
    });
}
