//! Insertion-Order Eviction Module
//!
//! FIFO eviction: the victim is always the key inserted earliest, no matter
//! how recently it was read. Reads never reorder keys.

use std::collections::VecDeque;

// == Insertion Order Eviction ==
/// Tracks insertion order of live keys.
///
/// Keys are stored in a VecDeque where:
/// - Front = Inserted earliest (next eviction victim)
/// - Back = Inserted most recently
#[derive(Debug, Default)]
pub struct InsertionOrderEviction {
    /// Keys in insertion order
    order: VecDeque<String>,
}

impl InsertionOrderEviction {
    // == Constructor ==
    /// Creates a new empty tracker.
    pub fn new() -> Self {
        Self {
            order: VecDeque::new(),
        }
    }

    // == Record Insert ==
    /// Records an insertion of `key`.
    ///
    /// A key that is already tracked is moved to the back, exactly as a
    /// delete followed by an insert would.
    pub fn record_insert(&mut self, key: &str) {
        self.remove(key);
        self.order.push_back(key.to_string());
    }

    // == Remove ==
    /// Stops tracking a key.
    pub fn remove(&mut self, key: &str) {
        self.order.retain(|k| k != key);
    }

    // == Evict Oldest ==
    /// Returns and removes the earliest-inserted key.
    ///
    /// Returns None if tracker is empty.
    pub fn evict_oldest(&mut self) -> Option<String> {
        self.order.pop_front()
    }

    // == Clear ==
    pub fn clear(&mut self) {
        self.order.clear();
    }

    // == Length ==
    /// Returns the number of tracked keys.
    pub fn len(&self) -> usize {
        self.order.len()
    }

    // == Is Empty ==
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    // == Keys ==
    /// Iterates keys from oldest to newest.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.order.iter().map(String::as_str)
    }
}
