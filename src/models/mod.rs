//! Response models for the gallery service API
//!
//! JSON bodies for errors, cache administration and health checks. The
//! gallery listing itself is serialized straight from `GalleryEntry`.

pub mod responses;

// Re-export commonly used types
pub use responses::{ClearResponse, ErrorResponse, HealthResponse, StatsResponse};
