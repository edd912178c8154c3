//! Response Cache Module
//!
//! Bounded, expiring key -> (payload, validator) store combining HashMap
//! storage with insertion-order eviction and lazy TTL expiry.

use std::collections::HashMap;
use std::time::Duration;

use tracing::debug;

use crate::cache::{CacheEntry, CacheStats, InsertionOrderEviction};

// == Cached Response ==
/// What a cache hit hands back: the payload and its validator.
#[derive(Debug, Clone, PartialEq)]
pub struct CachedResponse<P> {
    pub payload: P,
    pub validator: String,
}

// == Response Cache ==
/// Size-bounded, time-bounded response cache.
///
/// The cache does no locking of its own; share it as
/// `Arc<RwLock<ResponseCache<P>>>` so every entry is written under one lock.
#[derive(Debug)]
pub struct ResponseCache<P> {
    /// Key-value storage
    entries: HashMap<String, CacheEntry<P>>,
    /// Insertion order, front is the next eviction victim
    order: InsertionOrderEviction,
    /// Performance statistics
    stats: CacheStats,
    /// Maximum number of entries retained
    capacity: usize,
    /// Age after which an entry is never served
    ttl: Duration,
}

impl<P: Clone> ResponseCache<P> {
    // == Constructor ==
    /// Creates a new cache.
    ///
    /// # Arguments
    /// * `capacity` - Maximum number of entries; a zero capacity is raised to 1
    /// * `ttl` - Freshness window for every entry
    pub fn new(capacity: usize, ttl: Duration) -> Self {
        Self {
            entries: HashMap::new(),
            order: InsertionOrderEviction::new(),
            stats: CacheStats::new(),
            capacity: capacity.max(1),
            ttl,
        }
    }

    // == Get ==
    /// Looks up a key.
    ///
    /// Returns None if the key is absent or its entry is older than the TTL.
    /// A stale entry is removed before returning, so later lookups miss too.
    pub fn get(&mut self, key: &str) -> Option<CachedResponse<P>> {
        let expired = match self.entries.get(key) {
            Some(entry) => entry.is_expired(self.ttl),
            None => {
                self.stats.record_miss();
                debug!(key, "cache miss");
                return None;
            }
        };

        if expired {
            self.remove(key);
            self.stats.record_expiration();
            debug!(key, "cache entry expired");
            return None;
        }

        self.stats.record_hit();
        debug!(key, "cache hit");
        self.entries.get(key).map(|entry| CachedResponse {
            payload: entry.payload.clone(),
            validator: entry.validator.clone(),
        })
    }

    // == Set ==
    /// Stores a payload and its validator under `key`.
    ///
    /// If the key is new and the cache is full, the earliest-inserted entry
    /// is evicted first. Re-setting an existing key replaces the entry,
    /// refreshes its age, and makes it the newest entry.
    pub fn set(&mut self, key: impl Into<String>, payload: P, validator: impl Into<String>) {
        let key = key.into();

        if !self.entries.contains_key(&key) && self.entries.len() >= self.capacity {
            if let Some(evicted) = self.order.evict_oldest() {
                self.entries.remove(&evicted);
                self.stats.record_eviction();
                debug!(key = %evicted, "evicted oldest cache entry");
            }
        }

        self.entries
            .insert(key.clone(), CacheEntry::new(payload, validator.into()));
        self.order.record_insert(&key);
        self.stats.set_total_entries(self.entries.len());
    }

    // == Clear ==
    /// Removes every entry. Counters other than the entry count are kept.
    pub fn clear(&mut self) -> usize {
        let removed = self.entries.len();
        self.entries.clear();
        self.order.clear();
        self.stats.set_total_entries(0);
        removed
    }

    fn remove(&mut self, key: &str) {
        self.entries.remove(key);
        self.order.remove(key);
        self.stats.set_total_entries(self.entries.len());
    }

    // == Contains ==
    /// True if a key is stored, fresh or not. Does not expire or count.
    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    // == Keys ==
    /// Keys from earliest to most recently inserted.
    pub fn keys(&self) -> Vec<String> {
        self.order.keys().map(str::to_string).collect()
    }

    // == Stats ==
    /// Returns current cache statistics.
    pub fn stats(&self) -> CacheStats {
        let mut stats = self.stats.clone();
        stats.set_total_entries(self.entries.len());
        stats
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }
}
