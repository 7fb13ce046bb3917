//! Service cache for capability consumers.
//!
//! A consumer (a face) keeps one `ServiceCache` for its lifetime. The cache
//! has one slot per hot service, addressed by the closed `ServiceSlot` enum,
//! and each slot distinguishes three states:
//!
//! - `Uninitialized`: nobody asked yet
//! - `Unavailable`: the module was asked and has no such service
//! - `Present`: the module was asked and the capability is memoized
//!
//! A slot is populated at most once per module binding. Negative answers are
//! cached just like positive ones, so a missing service never costs a second
//! module call.
//!
//! # Concurrency
//!
//! Each slot sits behind its own `RwLock`. Settled slots are served from a
//! shared read lock. How the first population is serialized is chosen by
//! `PopulateStrategy`.

mod cache;
mod config;
mod slot;

pub use cache::ServiceCache;
pub use config::{CacheConfig, ParseStrategyError, PopulateStrategy, POPULATE_ENV};
pub use slot::{CacheSlot, ServiceSlot};
