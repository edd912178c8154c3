//! API Handlers
//!
//! HTTP request handlers for the gallery endpoint and cache administration.

use std::sync::Arc;

use axum::{
    extract::{RawQuery, State},
    http::{
        header::{CACHE_CONTROL, CONTENT_TYPE, ETAG, IF_NONE_MATCH, LAST_MODIFIED},
        HeaderMap, StatusCode,
    },
    response::{IntoResponse, Response},
    Json,
};
use tokio::sync::RwLock;
use tracing::{error, info};

use crate::cache::ResponseCache;
use crate::config::Config;
use crate::error::{ApiError, GalleryError};
use crate::gallery::{
    derive_cache_key, CacheOutcome, RequestHandler, GALLERY_CACHE_CONTROL, GALLERY_PATH,
};
use crate::media::MediaSource;
use crate::models::{ClearResponse, HealthResponse, StatsResponse};

/// Application state shared across all handlers.
///
/// Holds the gallery request handler, which owns the shared cache.
#[derive(Clone)]
pub struct AppState {
    pub gallery: RequestHandler,
    /// Include error details and credential flags in error bodies
    pub expose_error_details: bool,
}

impl AppState {
    /// Creates a new AppState around an already-built request handler.
    pub fn new(gallery: RequestHandler, expose_error_details: bool) -> Self {
        Self {
            gallery,
            expose_error_details,
        }
    }

    /// Creates the cache from configuration and wires it to `source`.
    pub fn from_config(config: &Config, source: Arc<dyn MediaSource>) -> Self {
        let cache = ResponseCache::new(config.cache_capacity, config.cache_ttl());
        let gallery = RequestHandler::new(Arc::new(RwLock::new(cache)), source);
        Self::new(gallery, config.expose_error_details)
    }

    fn api_error(&self, error: GalleryError) -> ApiError {
        ApiError::new(error, self.gallery.credentials(), self.expose_error_details)
    }
}

/// Formats a timestamp as an HTTP-date (IMF-fixdate).
fn http_date(time: chrono::DateTime<chrono::Utc>) -> String {
    time.format("%a, %d %b %Y %H:%M:%S GMT").to_string()
}

/// Handler for GET /api/gallery
///
/// Serves the gallery listing with ETag / If-None-Match support.
pub async fn gallery_handler(
    State(state): State<AppState>,
    RawQuery(query): RawQuery,
    headers: HeaderMap,
) -> Result<Response, ApiError> {
    let key = derive_cache_key(GALLERY_PATH, query.as_deref());
    let if_none_match = headers.get(IF_NONE_MATCH).and_then(|v| v.to_str().ok());

    let outcome = state
        .gallery
        .handle(&key, if_none_match)
        .await
        .map_err(|err| {
            error!(key = %key, error = %err, "gallery request failed");
            state.api_error(err)
        })?;

    match outcome {
        CacheOutcome::NotModified { validator } => Ok((
            StatusCode::NOT_MODIFIED,
            [
                (ETAG, validator),
                (CACHE_CONTROL, GALLERY_CACHE_CONTROL.to_string()),
            ],
        )
            .into_response()),
        CacheOutcome::Fresh { payload, validator } => {
            let body = serde_json::to_vec(payload.as_slice())
                .map_err(|err| state.api_error(err.into()))?;
            Ok((
                StatusCode::OK,
                [
                    (CONTENT_TYPE, "application/json".to_string()),
                    (ETAG, validator),
                    (CACHE_CONTROL, GALLERY_CACHE_CONTROL.to_string()),
                    (LAST_MODIFIED, http_date(chrono::Utc::now())),
                ],
                body,
            )
                .into_response())
        }
    }
}

/// Handler for DELETE /api/gallery/cache
///
/// Administrative reset of the gallery cache.
pub async fn clear_cache_handler(State(state): State<AppState>) -> Json<ClearResponse> {
    let cleared = state.gallery.cache().write().await.clear();
    info!(cleared, "gallery cache cleared");
    Json(ClearResponse::new(cleared))
}

/// Handler for GET /api/gallery/cache/stats
pub async fn stats_handler(State(state): State<AppState>) -> Json<StatsResponse> {
    let cache = state.gallery.cache().read().await;
    Json(StatsResponse::new(
        &cache.stats(),
        cache.capacity(),
        cache.ttl().as_secs(),
    ))
}

/// Handler for GET /health
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::healthy())
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;

    use crate::media::{CredentialPresence, GalleryEntry};

    struct FixedSource;

    #[async_trait]
    impl MediaSource for FixedSource {
        async fn fetch(&self) -> crate::error::Result<Vec<GalleryEntry>> {
            Ok(vec![GalleryEntry {
                id: "gallery/one".to_string(),
                url: "https://cdn.example.com/one.jpg".to_string(),
                width: 10,
                height: 10,
                format: "jpg".to_string(),
                created_at: "2024-01-01T00:00:00Z".to_string(),
                caption: None,
            }])
        }
    }

    struct UnconfiguredSource;

    #[async_trait]
    impl MediaSource for UnconfiguredSource {
        async fn fetch(&self) -> crate::error::Result<Vec<GalleryEntry>> {
            Err(GalleryError::UpstreamConfiguration(
                "missing credentials: api_key".to_string(),
            ))
        }

        fn credentials(&self) -> CredentialPresence {
            CredentialPresence {
                cloud_name: true,
                api_key: false,
                api_secret: true,
            }
        }
    }

    fn state(source: Arc<dyn MediaSource>) -> AppState {
        AppState::from_config(&Config::default(), source)
    }

    #[test]
    fn test_http_date_format() {
        let time = chrono::DateTime::parse_from_rfc3339("2015-10-21T07:28:00Z")
            .unwrap()
            .with_timezone(&chrono::Utc);
        assert_eq!(http_date(time), "Wed, 21 Oct 2015 07:28:00 GMT");
    }

    #[tokio::test]
    async fn test_gallery_handler_fresh_then_not_modified() {
        let state = state(Arc::new(FixedSource));

        let response = gallery_handler(State(state.clone()), RawQuery(None), HeaderMap::new())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let etag = response.headers()[ETAG].clone();

        let mut headers = HeaderMap::new();
        headers.insert(IF_NONE_MATCH, etag);
        let response = gallery_handler(State(state), RawQuery(None), headers)
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_MODIFIED);
    }

    #[tokio::test]
    async fn test_gallery_handler_keys_on_raw_query_bytes() {
        let state = state(Arc::new(FixedSource));

        for query in ["a=%FF", "a=%FE", "a=%ff"] {
            gallery_handler(
                State(state.clone()),
                RawQuery(Some(query.to_string())),
                HeaderMap::new(),
            )
            .await
            .unwrap();
        }

        // `%ff` is the same byte as `%FF`, so that key was re-inserted last
        let keys = state.gallery.cache().read().await.keys();
        assert_eq!(keys, vec!["/api/gallery?a=%FE", "/api/gallery?a=%FF"]);
    }

    #[tokio::test]
    async fn test_gallery_handler_configuration_error() {
        let state = state(Arc::new(UnconfiguredSource));

        let err = gallery_handler(State(state.clone()), RawQuery(None), HeaderMap::new())
            .await
            .unwrap_err();
        assert!(!err.credentials.api_key);
        assert_eq!(err.into_response().status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert!(state.gallery.cache().read().await.is_empty());
    }

    #[tokio::test]
    async fn test_clear_cache_handler() {
        let state = state(Arc::new(FixedSource));
        gallery_handler(State(state.clone()), RawQuery(None), HeaderMap::new())
            .await
            .unwrap();

        let response = clear_cache_handler(State(state.clone())).await;
        assert_eq!(response.cleared, 1);
        assert!(state.gallery.cache().read().await.is_empty());
    }

    #[tokio::test]
    async fn test_stats_handler() {
        let state = state(Arc::new(FixedSource));
        let response = stats_handler(State(state)).await;
        assert_eq!(response.hits, 0);
        assert_eq!(response.capacity, 50);
        assert_eq!(response.ttl_seconds, 300);
    }

    #[tokio::test]
    async fn test_health_handler() {
        let response = health_handler().await;
        assert_eq!(response.status, "healthy");
    }
}
