//! Response DTOs for the gallery service API
//!
//! Defines the structure of outgoing JSON bodies.

use serde::Serialize;

use crate::cache::CacheStats;
use crate::media::CredentialPresence;

/// Error body for every failed gallery request.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    /// Human-readable summary
    pub error: String,
    /// Underlying cause, only when diagnostics are exposed
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
    /// Whether all upstream credentials are configured
    pub configured: bool,
    /// Per-credential presence, only when diagnostics are exposed
    #[serde(skip_serializing_if = "Option::is_none")]
    pub config: Option<CredentialPresence>,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>, configured: bool) -> Self {
        Self {
            error: error.into(),
            details: None,
            configured,
            config: None,
        }
    }

    /// Attaches diagnostic detail.
    pub fn with_details(mut self, details: impl Into<String>, config: CredentialPresence) -> Self {
        self.details = Some(details.into());
        self.config = Some(config);
        self
    }
}

/// Response body for `GET /api/gallery/cache/stats`
#[derive(Debug, Clone, Serialize)]
pub struct StatsResponse {
    pub hits: u64,
    pub misses: u64,
    pub evictions: u64,
    pub expirations: u64,
    pub total_entries: usize,
    pub capacity: usize,
    pub ttl_seconds: u64,
    /// hits / (hits + misses)
    pub hit_rate: f64,
}

impl StatsResponse {
    pub fn new(stats: &CacheStats, capacity: usize, ttl_seconds: u64) -> Self {
        Self {
            hits: stats.hits,
            misses: stats.misses,
            evictions: stats.evictions,
            expirations: stats.expirations,
            total_entries: stats.total_entries,
            capacity,
            ttl_seconds,
            hit_rate: stats.hit_rate(),
        }
    }
}

/// Response body for `DELETE /api/gallery/cache`
#[derive(Debug, Clone, Serialize)]
pub struct ClearResponse {
    pub message: String,
    /// Number of entries removed
    pub cleared: usize,
}

impl ClearResponse {
    pub fn new(cleared: usize) -> Self {
        Self {
            message: format!("Gallery cache cleared ({} entries)", cleared),
            cleared,
        }
    }
}

/// Response body for the health check endpoint (GET /health)
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    /// Health status
    pub status: String,
    /// Current timestamp in ISO 8601 format
    pub timestamp: String,
}

impl HealthResponse {
    /// Creates a new HealthResponse with current timestamp
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }
}
