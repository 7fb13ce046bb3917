//! The per-consumer service cache.

use std::fmt;

use capreg_table::Capability;
use parking_lot::RwLock;

use crate::config::{CacheConfig, PopulateStrategy};
use crate::slot::{CacheSlot, ServiceSlot};

/// Fixed-size cache of hot service lookups.
///
/// One slot per `ServiceSlot` variant, stored in an array indexed by the
/// enum, so access never hashes. A slot moves from `Uninitialized` to a
/// settled state exactly once; only `reset` (which needs `&mut self`) moves
/// it back.
pub struct ServiceCache {
    slots: [RwLock<CacheSlot>; ServiceSlot::COUNT],
    populate: PopulateStrategy,
}

impl ServiceCache {
    /// Create a cache with every slot uninitialized.
    pub fn new() -> Self {
        Self::with_config(CacheConfig::default())
    }

    pub fn with_config(config: CacheConfig) -> Self {
        ServiceCache {
            slots: std::array::from_fn(|_| RwLock::new(CacheSlot::Uninitialized)),
            populate: config.populate,
        }
    }

    /// The populate strategy this cache was built with.
    pub fn populate_strategy(&self) -> PopulateStrategy {
        self.populate
    }

    /// Snapshot of a slot's state.
    pub fn state(&self, slot: ServiceSlot) -> CacheSlot {
        *self.slots[slot.index()].read()
    }

    /// Number of slots holding a settled answer.
    pub fn settled_count(&self) -> usize {
        self.slots
            .iter()
            .filter(|cell| cell.read().is_settled())
            .count()
    }

    /// Return the memoized answer for `slot`, running `populate` first if the
    /// slot has never been filled.
    ///
    /// `populate` runs at most once per slot under `PopulateStrategy::Exclusive`.
    /// Under `PopulateStrategy::Racy` concurrent first callers may each run it,
    /// but all of them return the first committed answer.
    ///
    /// Under `Exclusive`, `populate` must not read or populate `slot` of this
    /// cache again; it would wait on the write lock it is running under.
    /// `Racy` runs `populate` unlocked, so such nested lookups are allowed.
    pub fn get_or_populate<F>(&self, slot: ServiceSlot, populate: F) -> Option<Capability>
    where
        F: FnOnce() -> Option<Capability>,
    {
        let cell = &self.slots[slot.index()];

        let current = *cell.read();
        if let Some(answer) = current.settled() {
            tracing::trace!(%slot, present = answer.is_some(), "service cache hit");
            return answer;
        }

        match self.populate {
            PopulateStrategy::Exclusive => {
                let mut guard = cell.write();
                // Another caller may have populated the slot while we waited.
                if let Some(answer) = guard.settled() {
                    return answer;
                }
                let found = populate();
                *guard = CacheSlot::from_lookup(found);
                tracing::debug!(%slot, present = found.is_some(), "populated service slot");
                found
            }
            PopulateStrategy::Racy => {
                let found = populate();
                let mut guard = cell.write();
                if let Some(answer) = guard.settled() {
                    return answer;
                }
                *guard = CacheSlot::from_lookup(found);
                tracing::debug!(%slot, present = found.is_some(), "populated service slot");
                found
            }
        }
    }

    /// Return every slot to `Uninitialized`.
    ///
    /// Called when the owning consumer is bound to a different module.
    pub fn reset(&mut self) {
        for cell in &mut self.slots {
            *cell.get_mut() = CacheSlot::Uninitialized;
        }
    }
}

impl Default for ServiceCache {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for ServiceCache {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut map = f.debug_map();
        for slot in ServiceSlot::ALL {
            map.entry(&slot.name(), &self.state(slot));
        }
        map.finish()
    }
}
