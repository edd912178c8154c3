//! Gallery Module
//!
//! Conditional-GET orchestration: cache key derivation, validator
//! computation and the request handler that ties the cache to the
//! media source.

mod handler;
mod key;
mod validator;

pub use handler::{CacheOutcome, GalleryPayload, RequestHandler, SharedCache};
pub use key::derive_cache_key;
pub use validator::{compute_validator, validator_for_bytes};

/// Logical resource path of the gallery listing.
pub const GALLERY_PATH: &str = "/api/gallery";

/// `Cache-Control` sent with both 200 and 304 gallery responses.
pub const GALLERY_CACHE_CONTROL: &str = "public, max-age=300, stale-while-revalidate=600";
