//! API Module
//!
//! HTTP handlers and routing for the gallery service.
//!
//! # Endpoints
//! - `GET /api/gallery` - Gallery listing with ETag / If-None-Match
//! - `OPTIONS /api/gallery` - CORS answer (from the CORS layer)
//! - `DELETE /api/gallery/cache` - Clear the gallery cache
//! - `GET /api/gallery/cache/stats` - Cache statistics
//! - `GET /health` - Health check endpoint

pub mod handlers;
pub mod routes;

pub use handlers::*;
pub use routes::create_router;
