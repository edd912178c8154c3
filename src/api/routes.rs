//! API Routes
//!
//! Configures the Axum router with the gallery and administration endpoints.

use axum::{
    http::{
        header::{CONTENT_TYPE, ETAG, IF_NONE_MATCH},
        Method,
    },
    routing::{delete, get},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use super::handlers::{
    clear_cache_handler, gallery_handler, health_handler, stats_handler, AppState,
};
use crate::gallery::GALLERY_PATH;

/// Creates the main router with all endpoints configured.
///
/// # Endpoints
/// - `GET /api/gallery` - Gallery listing with conditional GET
/// - `DELETE /api/gallery/cache` - Clear the gallery cache
/// - `GET /api/gallery/cache/stats` - Cache statistics
/// - `GET /health` - Health check endpoint
///
/// # Middleware
/// - CORS: any origin, GET/OPTIONS, `ETag` exposed to scripts. The layer
///   answers every OPTIONS request itself with an empty 200.
/// - Tracing: Logs all requests for debugging
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::OPTIONS])
        .allow_headers([CONTENT_TYPE, IF_NONE_MATCH])
        .expose_headers([ETAG]);

    Router::new()
        .route(GALLERY_PATH, get(gallery_handler))
        .route("/api/gallery/cache", delete(clear_cache_handler))
        .route("/api/gallery/cache/stats", get(stats_handler))
        .route("/health", get(health_handler))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
