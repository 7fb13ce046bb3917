//! Slot names and slot states.

use std::fmt;

use capreg_table::{ids, Capability};

/// The hot services a face caches.
///
/// Adding a cached service means adding a variant here; the cache array grows
/// with `COUNT` and every `match` below must be extended.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "snake_case")
)]
pub enum ServiceSlot {
    PostScriptName,
    MultiMasters,
    GlyphDict,
}

impl ServiceSlot {
    /// Number of slots in a cache.
    pub const COUNT: usize = 3;

    /// All slots, in index order.
    pub const ALL: [ServiceSlot; Self::COUNT] = [
        ServiceSlot::PostScriptName,
        ServiceSlot::MultiMasters,
        ServiceSlot::GlyphDict,
    ];

    /// Position of this slot in the cache array.
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// The id a module publishes this service under.
    pub const fn service_id(self) -> &'static str {
        match self {
            ServiceSlot::PostScriptName => ids::POSTSCRIPT_FONT_NAME,
            ServiceSlot::MultiMasters => ids::MULTI_MASTERS,
            ServiceSlot::GlyphDict => ids::GLYPH_DICT,
        }
    }

    /// Field-style name of the slot (e.g. `multi_masters`).
    pub const fn name(self) -> &'static str {
        match self {
            ServiceSlot::PostScriptName => "postscript_name",
            ServiceSlot::MultiMasters => "multi_masters",
            ServiceSlot::GlyphDict => "glyph_dict",
        }
    }

    /// Resolve a slot from its field-style name.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|slot| slot.name() == name)
    }
}

impl fmt::Display for ServiceSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Cached outcome of one service lookup.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CacheSlot {
    /// No lookup attempted for this binding.
    #[default]
    Uninitialized,
    /// The module confirmed it has no such service. Never retried.
    Unavailable,
    /// The module returned this capability.
    Present(Capability),
}

impl CacheSlot {
    /// The settled state for a module answer.
    #[inline]
    pub fn from_lookup(found: Option<Capability>) -> Self {
        match found {
            Some(capability) => CacheSlot::Present(capability),
            None => CacheSlot::Unavailable,
        }
    }

    /// The memoized answer, or `None` if no lookup happened yet.
    ///
    /// The inner `Option` is the answer itself: `Some(None)` means
    /// "confirmed absent".
    #[inline]
    pub fn settled(self) -> Option<Option<Capability>> {
        match self {
            CacheSlot::Uninitialized => None,
            CacheSlot::Unavailable => Some(None),
            CacheSlot::Present(capability) => Some(Some(capability)),
        }
    }

    #[inline]
    pub fn is_settled(self) -> bool {
        !matches!(self, CacheSlot::Uninitialized)
    }
}
