//! Cache Module
//!
//! In-memory response cache with a capacity bound, lazy TTL expiry and
//! insertion-order (FIFO) eviction.

mod entry;
mod eviction;
mod stats;
mod store;


// Re-export public types
pub use entry::CacheEntry;
pub use eviction::InsertionOrderEviction;
pub use stats::CacheStats;
pub use store::{CachedResponse, ResponseCache};
