use std::time::{Duration, Instant};

/// A cached value and the instant it was last decoded.
///
/// A slot that was never filled is always stale.
#[derive(Debug, Clone, Default)]
pub struct CacheSlot<T> {
    value: T,
    refreshed_at: Option<Instant>,
}

impl<T> CacheSlot<T> {
    pub fn new(value: T) -> Self {
        Self {
            value,
            refreshed_at: None,
        }
    }

    pub fn value(&self) -> &T {
        &self.value
    }

    pub fn refreshed_at(&self) -> Option<Instant> {
        self.refreshed_at
    }

    /// Stale once strictly more than `ttl` has elapsed since the last refresh
    pub fn is_stale(&self, now: Instant, ttl: Duration) -> bool {
        match self.refreshed_at {
            Some(at) => now.saturating_duration_since(at) > ttl,
            None => true,
        }
    }

    /// Re-decode with `refresh` when stale or `force` is set, then return the
    /// current value.
    pub fn get_or_refresh<F>(&mut self, now: Instant, ttl: Duration, force: bool, refresh: F) -> &T
    where
        F: FnOnce() -> T,
    {
        if force || self.is_stale(now, ttl) {
            self.value = refresh();
            self.refreshed_at = Some(now);
        }
        &self.value
    }

    /// Mark the slot stale without dropping its value
    pub fn invalidate(&mut self) {
        self.refreshed_at = None;
    }
}
