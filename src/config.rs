use serde::{Deserialize, Serialize};

/// Env var overriding [`ScanConfig::parallel_threshold`].
pub const ENV_PARALLEL_MIN: &str = "FORGE_THRESHOLD_PARALLEL_MIN";

/// Env var overriding [`ScanConfig::chunk_len`].
pub const ENV_CHUNK_LEN: &str = "FORGE_THRESHOLD_CHUNK_LEN";

/// Below this many elements the parallel scan runs sequentially.
pub const DEFAULT_PARALLEL_THRESHOLD: usize = 1 << 16;

/// Elements per rayon task.
pub const DEFAULT_CHUNK_LEN: usize = 1 << 14;

/// Tuning for [`crate::par_filter`].
///
/// Only affects how work is split; results are identical to the sequential scan.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScanConfig {
    /// Minimum input length before the scan is split across threads.
    pub parallel_threshold: usize,
    /// Contiguous elements per chunk (clamped to at least 1).
    pub chunk_len: usize,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            parallel_threshold: DEFAULT_PARALLEL_THRESHOLD,
            chunk_len: DEFAULT_CHUNK_LEN,
        }
    }
}

impl ScanConfig {
    /// Defaults, overridden by [`ENV_PARALLEL_MIN`] / [`ENV_CHUNK_LEN`] when set.
    ///
    /// Unparseable values are ignored.
    pub fn from_env() -> Self {
        let mut cfg = Self::default();
        if let Some(n) = env_usize(ENV_PARALLEL_MIN) {
            cfg.parallel_threshold = n;
        }
        if let Some(n) = env_usize(ENV_CHUNK_LEN) {
            cfg.chunk_len = n;
        }
        cfg
    }

    /// Always run sequentially.
    pub fn sequential() -> Self {
        Self {
            parallel_threshold: usize::MAX,
            ..Self::default()
        }
    }

    pub fn with_parallel_threshold(mut self, n: usize) -> Self {
        self.parallel_threshold = n;
        self
    }

    pub fn with_chunk_len(mut self, n: usize) -> Self {
        self.chunk_len = n;
        self
    }

    /// Chunk length actually used; never zero.
    pub fn effective_chunk_len(&self) -> usize {
        self.chunk_len.max(1)
    }

    /// Whether an input of `len` elements should be split.
    pub fn should_parallelize(&self, len: usize) -> bool {
        len >= self.parallel_threshold && len > self.effective_chunk_len()
    }
}

fn env_usize(var: &str) -> Option<usize> {
    std::env::var(var)
        .ok()
        .and_then(|s| s.trim().replace('_', "").parse().ok())
}
