//! Request Handler Module
//!
//! Conditional-GET orchestration on top of the response cache: answer from
//! a matching cached validator, otherwise fetch, fingerprint and store.

use std::sync::Arc;

use tokio::sync::RwLock;
use tracing::{debug, warn};

use crate::cache::ResponseCache;
use crate::error::Result;
use crate::gallery::validator::{compute_validator, matches};
use crate::media::{CredentialPresence, GalleryEntry, MediaSource};

/// Payload cached per key; shared so hits do not copy the listing.
pub type GalleryPayload = Arc<Vec<GalleryEntry>>;

/// The process-wide gallery cache, shared with the request handler.
pub type SharedCache = Arc<RwLock<ResponseCache<GalleryPayload>>>;

// == Cache Outcome ==
/// Result of a conditional gallery request.
#[derive(Debug, Clone, PartialEq)]
pub enum CacheOutcome {
    /// The caller already holds the current version.
    NotModified { validator: String },
    /// Full payload with its validator.
    Fresh {
        payload: GalleryPayload,
        validator: String,
    },
}

impl CacheOutcome {
    // == Validator ==
    pub fn validator(&self) -> &str {
        match self {
            CacheOutcome::NotModified { validator } => validator,
            CacheOutcome::Fresh { validator, .. } => validator,
        }
    }
}

// == Request Handler ==
/// Answers gallery requests from the cache or the media source.
///
/// Concurrent misses on the same key may each call the media source; the
/// last write wins and all converge on the same entry.
#[derive(Clone)]
pub struct RequestHandler {
    cache: SharedCache,
    source: Arc<dyn MediaSource>,
}

impl RequestHandler {
    // == Constructor ==
    pub fn new(cache: SharedCache, source: Arc<dyn MediaSource>) -> Self {
        Self { cache, source }
    }

    pub fn cache(&self) -> &SharedCache {
        &self.cache
    }

    pub fn credentials(&self) -> CredentialPresence {
        self.source.credentials()
    }

    // == Handle ==
    /// Resolves a request for `key` given its `If-None-Match` value.
    ///
    /// A failed fetch is returned as-is and leaves the cache untouched.
    ///
    /// # Examples
    ///
    /// ```
    /// use std::sync::Arc;
    /// use std::time::Duration;
    ///
    /// use async_trait::async_trait;
    /// use gallery_cache::cache::ResponseCache;
    /// use gallery_cache::error::Result;
    /// use gallery_cache::media::{GalleryEntry, MediaSource};
    /// use gallery_cache::{CacheOutcome, RequestHandler};
    /// use tokio::sync::RwLock;
    ///
    /// struct EmptyGallery;
    ///
    /// #[async_trait]
    /// impl MediaSource for EmptyGallery {
    ///     async fn fetch(&self) -> Result<Vec<GalleryEntry>> {
    ///         Ok(Vec::new())
    ///     }
    /// }
    ///
    /// # tokio_test::block_on(async {
    /// let cache = Arc::new(RwLock::new(ResponseCache::new(10, Duration::from_secs(300))));
    /// let handler = RequestHandler::new(cache, Arc::new(EmptyGallery));
    ///
    /// let first = handler.handle("/api/gallery", None).await.unwrap();
    /// let etag = first.validator().to_string();
    ///
    /// let second = handler.handle("/api/gallery", Some(&etag)).await.unwrap();
    /// assert_eq!(second, CacheOutcome::NotModified { validator: etag });
    /// # });
    /// ```
    pub async fn handle(&self, key: &str, if_none_match: Option<&str>) -> Result<CacheOutcome> {
        // The write guard is dropped before the upstream call
        let cached = self.cache.write().await.get(key);

        if let Some(hit) = cached {
            if matches(if_none_match, &hit.validator) {
                debug!(key, "cached validator matches, not modified");
                return Ok(CacheOutcome::NotModified {
                    validator: hit.validator,
                });
            }
        }

        let entries = self.source.fetch().await.map_err(|err| {
            warn!(key, error = %err, "gallery fetch failed");
            err
        })?;
        let validator = compute_validator(&entries)?;
        let payload: GalleryPayload = Arc::new(entries);

        self.cache
            .write()
            .await
            .set(key, Arc::clone(&payload), validator.clone());

        if matches(if_none_match, &validator) {
            debug!(key, "fresh validator matches, not modified");
            return Ok(CacheOutcome::NotModified { validator });
        }

        debug!(key, count = payload.len(), "serving fresh gallery");
        Ok(CacheOutcome::Fresh { payload, validator })
    }
}
