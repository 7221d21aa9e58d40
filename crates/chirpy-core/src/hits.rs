//! Process-lifetime hit counter for the static-file subtree.

use std::sync::atomic::{AtomicU64, Ordering};

/// Atomic request counter. Only changes by +1 or by reset to zero.
#[derive(Debug, Default)]
pub struct HitCounter {
    hits: AtomicU64,
}

impl HitCounter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Increment by 1.
    pub fn increment(&self) {
        self.hits.fetch_add(1, Ordering::Relaxed);
    }

    /// Current value.
    pub fn read(&self) -> u64 {
        self.hits.load(Ordering::Relaxed)
    }

    /// Set back to zero.
    pub fn reset(&self) {
        self.hits.store(0, Ordering::Relaxed);
    }
}
