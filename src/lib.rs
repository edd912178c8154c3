//! Gallery Cache - gallery endpoint backed by a bounded response cache
//!
//! Serves the media gallery listing through an in-process, size-bounded,
//! time-bounded cache with ETag / If-None-Match conditional GET.

pub mod api;
pub mod cache;
pub mod config;
pub mod error;
pub mod gallery;
pub mod media;
pub mod models;

pub use api::AppState;
pub use config::Config;
pub use gallery::{CacheOutcome, RequestHandler};
