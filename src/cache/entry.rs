//! Cache Entry Module
//!
//! Defines a single cached response: payload, validator and storage time.

use std::time::{Duration, Instant};

// == Cache Entry ==
/// A cached response, always written and replaced as a whole.
#[derive(Debug, Clone)]
pub struct CacheEntry<P> {
    /// The stored payload
    pub payload: P,
    /// Content fingerprint of the payload (used as the ETag)
    pub validator: String,
    /// When the entry was stored, used only for expiry
    pub stored_at: Instant,
}

impl<P> CacheEntry<P> {
    // == Constructor ==
    /// Creates a new entry stamped with the current instant.
    pub fn new(payload: P, validator: String) -> Self {
        Self {
            payload,
            validator,
            stored_at: Instant::now(),
        }
    }

    // == Is Expired ==
    /// Checks if the entry is stale for the given TTL.
    ///
    /// An entry expires once its age is strictly greater than `ttl`; an
    /// entry exactly `ttl` old is still served.
    pub fn is_expired(&self, ttl: Duration) -> bool {
        self.age() > ttl
    }

    // == Age ==
    /// Time elapsed since the entry was stored.
    pub fn age(&self) -> Duration {
        self.stored_at.elapsed()
    }
}
