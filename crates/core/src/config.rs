//! Simulator configuration.
//!
//! Cache geometry and the miss penalty are configuration, not hard-coded
//! bit-shift constants: alternate offset/set/tag widths are alternate
//! configurations of the same behavior. Configuration is supplied as JSON
//! (see [`Config::from_json`]) or via [`Config::default`].

use serde::Deserialize;

/// Default configuration constants.
mod defaults {
    /// Number of cache sets.
    pub const CACHE_SETS: usize = 16;

    /// Lines per set (associativity).
    pub const CACHE_WAYS: usize = 4;

    /// Data words per cache line.
    pub const WORDS_PER_LINE: usize = 4;

    /// Flat miss penalty in cycles, modeling off-chip latency independent
    /// of burst size.
    pub const MISS_PENALTY: u64 = 9;
}

/// Data-cache configuration.
///
/// `sets`, `ways`, and `words_per_line` must be powers of two; values that
/// are not are rounded up at construction. The defaults (16 sets, 4 ways,
/// 4-word lines) give 64 lines and 256 words of capacity.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct CacheConfig {
    /// When false, every access bypasses the cache and pays the miss
    /// penalty straight to the backing store.
    pub enabled: bool,
    /// Number of sets.
    pub sets: usize,
    /// Lines per set.
    pub ways: usize,
    /// Data words per line.
    pub words_per_line: usize,
    /// Cycles added to the cycle counter on every miss.
    pub miss_penalty: u64,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            sets: defaults::CACHE_SETS,
            ways: defaults::CACHE_WAYS,
            words_per_line: defaults::WORDS_PER_LINE,
            miss_penalty: defaults::MISS_PENALTY,
        }
    }
}

/// Root configuration.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Data-cache parameters.
    pub cache: CacheConfig,
}

impl Config {
    /// Deserializes a configuration from JSON text. Absent fields keep
    /// their defaults.
    pub fn from_json(text: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(text)
    }
}
