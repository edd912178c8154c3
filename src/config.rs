//! Configuration Module
//!
//! Handles loading and managing server configuration from environment variables.

use std::env;
use std::time::Duration;

use tracing::warn;

use crate::media::CredentialPresence;

/// Default upstream admin API root.
pub const DEFAULT_MEDIA_API_BASE_URL: &str = "https://api.cloudinary.com/v1_1";

/// Server configuration parameters.
///
/// All values can be configured via environment variables with sensible defaults.
#[derive(Debug, Clone)]
pub struct Config {
    /// Maximum number of cached gallery responses
    pub cache_capacity: usize,
    /// Freshness window of a cached response, in seconds
    pub cache_ttl: u64,
    /// HTTP server port
    pub server_port: u16,
    /// Include error details and credential flags in error bodies
    pub expose_error_details: bool,
    /// Upstream media provider settings
    pub media: MediaConfig,
}

/// Settings for the upstream media provider.
///
/// Credentials are optional here; their absence is reported when the
/// gallery is fetched, not at startup.
#[derive(Clone, Default)]
pub struct MediaConfig {
    pub cloud_name: Option<String>,
    pub api_key: Option<String>,
    pub api_secret: Option<String>,
    /// Admin API root, without trailing slash
    pub base_url: String,
    /// Only list assets under this folder prefix
    pub folder: Option<String>,
    pub max_results: u32,
    /// Per-request timeout, in seconds
    pub timeout: u64,
}

impl MediaConfig {
    /// Which of the three credentials are present. Never exposes values.
    pub fn credential_presence(&self) -> CredentialPresence {
        CredentialPresence {
            cloud_name: self.cloud_name.is_some(),
            api_key: self.api_key.is_some(),
            api_secret: self.api_secret.is_some(),
        }
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout)
    }
}

// Hand-written so the secret never ends up in logs
impl std::fmt::Debug for MediaConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MediaConfig")
            .field("cloud_name", &self.cloud_name)
            .field("api_key", &self.api_key.as_ref().map(|_| "<set>"))
            .field("api_secret", &self.api_secret.as_ref().map(|_| "<set>"))
            .field("base_url", &self.base_url)
            .field("folder", &self.folder)
            .field("max_results", &self.max_results)
            .field("timeout", &self.timeout)
            .finish()
    }
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `CACHE_CAPACITY` - Maximum cached responses (default: 50)
    /// - `CACHE_TTL_SECS` - Cache freshness window in seconds (default: 300)
    /// - `SERVER_PORT` - HTTP server port (default: 3000)
    /// - `EXPOSE_ERROR_DETAILS` - Diagnostic detail in error bodies (default: true;
    ///   true/false, 1/0, yes/no or on/off)
    /// - `CLOUDINARY_CLOUD_NAME`, `CLOUDINARY_API_KEY`, `CLOUDINARY_API_SECRET`
    /// - `MEDIA_API_BASE_URL` - Upstream admin API root
    /// - `GALLERY_FOLDER` - Optional folder prefix
    /// - `GALLERY_MAX_RESULTS` - Assets requested per listing (default: 100)
    /// - `MEDIA_TIMEOUT_SECS` - Upstream request timeout (default: 10)
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            cache_capacity: parse_var("CACHE_CAPACITY").unwrap_or(defaults.cache_capacity),
            cache_ttl: parse_var("CACHE_TTL_SECS").unwrap_or(defaults.cache_ttl),
            server_port: parse_var("SERVER_PORT").unwrap_or(defaults.server_port),
            expose_error_details: flag_var("EXPOSE_ERROR_DETAILS", defaults.expose_error_details),
            media: MediaConfig {
                cloud_name: non_empty_var("CLOUDINARY_CLOUD_NAME"),
                api_key: non_empty_var("CLOUDINARY_API_KEY"),
                api_secret: non_empty_var("CLOUDINARY_API_SECRET"),
                base_url: non_empty_var("MEDIA_API_BASE_URL")
                    .map(|url| url.trim_end_matches('/').to_string())
                    .unwrap_or(defaults.media.base_url),
                folder: non_empty_var("GALLERY_FOLDER"),
                max_results: parse_var("GALLERY_MAX_RESULTS")
                    .unwrap_or(defaults.media.max_results),
                timeout: parse_var("MEDIA_TIMEOUT_SECS").unwrap_or(defaults.media.timeout),
            },
        }
    }

    pub fn cache_ttl(&self) -> Duration {
        Duration::from_secs(self.cache_ttl)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            cache_capacity: 50,
            cache_ttl: 300,
            server_port: 3000,
            expose_error_details: true,
            media: MediaConfig {
                base_url: DEFAULT_MEDIA_API_BASE_URL.to_string(),
                max_results: 100,
                timeout: 10,
                ..MediaConfig::default()
            },
        }
    }
}

fn parse_var<T: std::str::FromStr>(name: &str) -> Option<T> {
    env::var(name).ok().and_then(|v| v.trim().parse().ok())
}

/// Reads a boolean switch, falling back to `default` with a warning when the
/// value is not a recognised spelling.
fn flag_var(name: &str, default: bool) -> bool {
    let Ok(raw) = env::var(name) else {
        return default;
    };
    parse_flag(&raw).unwrap_or_else(|| {
        warn!(
            variable = name,
            value = %raw,
            fallback = default,
            "unrecognised boolean value, using default"
        );
        default
    })
}

fn parse_flag(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Some(true),
        "false" | "0" | "no" | "off" => Some(false),
        _ => None,
    }
}

fn non_empty_var(name: &str) -> Option<String> {
    env::var(name)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.cache_capacity, 50);
        assert_eq!(config.cache_ttl, 300);
        assert_eq!(config.server_port, 3000);
        assert!(config.expose_error_details);
        assert_eq!(config.media.base_url, DEFAULT_MEDIA_API_BASE_URL);
        assert_eq!(config.media.max_results, 100);
        assert!(!config.media.credential_presence().all_present());
    }

    #[test]
    fn test_config_from_env() {
        env::remove_var("CACHE_CAPACITY");
        env::set_var("CACHE_TTL_SECS", "60");
        env::set_var("CLOUDINARY_CLOUD_NAME", "demo");
        env::set_var("CLOUDINARY_API_KEY", "   ");
        env::remove_var("CLOUDINARY_API_SECRET");
        env::set_var("MEDIA_API_BASE_URL", "http://localhost:9000/v1_1/");

        let config = Config::from_env();
        assert_eq!(config.cache_capacity, 50);
        assert_eq!(config.cache_ttl, 60);
        assert_eq!(config.media.cloud_name.as_deref(), Some("demo"));
        // Blank values count as absent
        assert!(config.media.api_key.is_none());
        assert_eq!(config.media.base_url, "http://localhost:9000/v1_1");

        let presence = config.media.credential_presence();
        assert!(presence.cloud_name);
        assert!(!presence.api_key);
        assert!(!presence.api_secret);

        env::remove_var("CACHE_TTL_SECS");
        env::remove_var("CLOUDINARY_CLOUD_NAME");
        env::remove_var("CLOUDINARY_API_KEY");
        env::remove_var("MEDIA_API_BASE_URL");
    }

    #[test]
    fn test_debug_hides_secrets() {
        let media = MediaConfig {
            api_key: Some("key-123".to_string()),
            api_secret: Some("secret-456".to_string()),
            ..MediaConfig::default()
        };
        let printed = format!("{:?}", media);
        assert!(!printed.contains("key-123"));
        assert!(!printed.contains("secret-456"));
    }

    #[test]
    fn test_parse_flag_spellings() {
        for raw in ["true", "TRUE", "1", "yes", "On", " true "] {
            assert_eq!(parse_flag(raw), Some(true), "{raw:?}");
        }
        for raw in ["false", "False", "0", "no", "OFF"] {
            assert_eq!(parse_flag(raw), Some(false), "{raw:?}");
        }
        for raw in ["", "2", "enabled", "nope"] {
            assert_eq!(parse_flag(raw), None, "{raw:?}");
        }
    }

    #[test]
    fn test_flag_var_falls_back_on_unrecognised_value() {
        env::set_var("GALLERY_TEST_FLAG", "0");
        assert!(!flag_var("GALLERY_TEST_FLAG", true));

        env::set_var("GALLERY_TEST_FLAG", "maybe");
        assert!(flag_var("GALLERY_TEST_FLAG", true));
        assert!(!flag_var("GALLERY_TEST_FLAG", false));

        env::remove_var("GALLERY_TEST_FLAG");
        assert!(flag_var("GALLERY_TEST_FLAG", true));
    }
}
