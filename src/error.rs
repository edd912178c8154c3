//! Error types for the gallery service
//!
//! Provides unified error handling using thiserror. A cache miss is not an
//! error and has no variant here.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::media::CredentialPresence;
use crate::models::ErrorResponse;

// == Gallery Error Enum ==
/// Unified error type for the gallery service.
#[derive(Error, Debug)]
pub enum GalleryError {
    /// Required upstream credentials are missing; detected before any
    /// network call
    #[error("Upstream configuration error: {0}")]
    UpstreamConfiguration(String),

    /// The upstream call itself failed (network, auth rejection, bad body)
    #[error("Upstream connectivity error: {0}")]
    UpstreamConnectivity(String),

    /// Any other failure while handling the request
    #[error("Internal error: {0}")]
    Internal(String),
}

impl GalleryError {
    /// HTTP status this error is surfaced as.
    pub fn status_code(&self) -> StatusCode {
        match self {
            GalleryError::UpstreamConfiguration(_) => StatusCode::INTERNAL_SERVER_ERROR,
            GalleryError::UpstreamConnectivity(_) => StatusCode::BAD_GATEWAY,
            GalleryError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Short, human-readable summary for the response body.
    pub fn summary(&self) -> &'static str {
        match self {
            GalleryError::UpstreamConfiguration(_) => {
                "Media provider credentials are not configured"
            }
            GalleryError::UpstreamConnectivity(_) => "Failed to fetch gallery from media provider",
            GalleryError::Internal(_) => "Failed to build gallery response",
        }
    }
}

impl From<serde_json::Error> for GalleryError {
    fn from(err: serde_json::Error) -> Self {
        GalleryError::Internal(format!("serialization failed: {}", err))
    }
}

// == API Error ==
/// A `GalleryError` paired with the diagnostics rendered alongside it.
#[derive(Debug)]
pub struct ApiError {
    pub error: GalleryError,
    pub credentials: CredentialPresence,
    /// Whether `details` and per-credential flags are included in the body
    pub expose_details: bool,
}

impl ApiError {
    pub fn new(error: GalleryError, credentials: CredentialPresence, expose_details: bool) -> Self {
        Self {
            error,
            credentials,
            expose_details,
        }
    }
}

// == IntoResponse Implementation ==
impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.error.status_code();
        let mut body = ErrorResponse::new(self.error.summary(), self.credentials.all_present());
        if self.expose_details {
            body = body.with_details(self.error.to_string(), self.credentials);
        }

        (status, Json(body)).into_response()
    }
}

// == Result Type Alias ==
/// Convenience Result type for the gallery service.
pub type Result<T> = std::result::Result<T, GalleryError>;
