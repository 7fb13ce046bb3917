//! Cache configuration.
//!
//! # Environment Variables
//!
//! - `CAPREG_POPULATE=exclusive|racy`: populate strategy for caches built
//!   with `CacheConfig::from_env()`. Unset or unrecognized values fall back
//!   to `exclusive`.

use std::fmt;
use std::str::FromStr;

/// Environment variable read by `CacheConfig::from_env`.
pub const POPULATE_ENV: &str = "CAPREG_POPULATE";

/// How concurrent first lookups of the same slot are serialized.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "snake_case")
)]
pub enum PopulateStrategy {
    /// The slot's write lock is held across the module call, so exactly one
    /// caller queries the module and the others wait for its answer.
    ///
    /// The module must not look up the same slot of the same cache while it
    /// is being populated: the lock is not reentrant and that lookup
    /// deadlocks. Other slots are unaffected. Use `Racy` for modules that
    /// consult their own consumer's cache.
    #[default]
    Exclusive,
    /// The module is queried without holding the lock. Concurrent first
    /// callers may each query the module; the first answer committed wins
    /// and the rest adopt it.
    Racy,
}

impl PopulateStrategy {
    pub const fn as_str(self) -> &'static str {
        match self {
            PopulateStrategy::Exclusive => "exclusive",
            PopulateStrategy::Racy => "racy",
        }
    }
}

impl fmt::Display for PopulateStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error when parsing a `PopulateStrategy` from text.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("unknown populate strategy `{0}` (expected `exclusive` or `racy`)")]
pub struct ParseStrategyError(String);

impl FromStr for PopulateStrategy {
    type Err = ParseStrategyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "exclusive" => Ok(PopulateStrategy::Exclusive),
            "racy" => Ok(PopulateStrategy::Racy),
            _ => Err(ParseStrategyError(s.to_string())),
        }
    }
}

/// Settings for a `ServiceCache`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct CacheConfig {
    pub populate: PopulateStrategy,
}

impl CacheConfig {
    /// Config with the given populate strategy.
    pub const fn with_populate(populate: PopulateStrategy) -> Self {
        CacheConfig { populate }
    }

    /// Read the config from `CAPREG_POPULATE`.
    pub fn from_env() -> Self {
        Self::from_env_value(std::env::var(POPULATE_ENV).ok().as_deref())
    }

    /// Build the config from a raw `CAPREG_POPULATE` value.
    ///
    /// Unrecognized values are reported and replaced by the default.
    pub fn from_env_value(value: Option<&str>) -> Self {
        let Some(raw) = value else {
            return Self::default();
        };
        match raw.parse() {
            Ok(populate) => CacheConfig { populate },
            Err(err) => {
                tracing::warn!(
                    var = POPULATE_ENV,
                    "{err}; using `{}`",
                    PopulateStrategy::default()
                );
                Self::default()
            }
        }
    }
}

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    reason = "tests use unwrap to panic on unexpected state"
)]
mod tests;
