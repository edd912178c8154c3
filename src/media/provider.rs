//! HTTP Media Source
//!
//! Lists image assets from a Cloudinary-compatible admin API.

use async_trait::async_trait;
use serde::Deserialize;
use tracing::{debug, warn};

use crate::config::MediaConfig;
use crate::error::{GalleryError, Result};
use crate::media::{CredentialPresence, GalleryEntry, MediaSource};

// == Upstream Wire Types ==
#[derive(Debug, Deserialize)]
struct ResourceList {
    #[serde(default)]
    resources: Vec<Resource>,
}

#[derive(Debug, Deserialize)]
struct Resource {
    public_id: String,
    secure_url: String,
    #[serde(default)]
    width: u32,
    #[serde(default)]
    height: u32,
    #[serde(default)]
    format: String,
    #[serde(default)]
    created_at: String,
    #[serde(default)]
    context: Option<ResourceContext>,
}

#[derive(Debug, Deserialize)]
struct ResourceContext {
    #[serde(default)]
    custom: Option<CustomContext>,
}

#[derive(Debug, Deserialize)]
struct CustomContext {
    caption: Option<String>,
}

impl From<Resource> for GalleryEntry {
    fn from(resource: Resource) -> Self {
        let caption = resource
            .context
            .and_then(|ctx| ctx.custom)
            .and_then(|custom| custom.caption);
        Self {
            id: resource.public_id,
            url: resource.secure_url,
            width: resource.width,
            height: resource.height,
            format: resource.format,
            created_at: resource.created_at,
            caption,
        }
    }
}

// == HTTP Media Source ==
/// Fetches the gallery listing over HTTP with basic auth.
///
/// Performs no caching and no retries.
#[derive(Debug, Clone)]
pub struct HttpMediaSource {
    client: reqwest::Client,
    config: MediaConfig,
}

impl HttpMediaSource {
    /// Builds a source with a client that enforces the configured timeout.
    pub fn new(config: MediaConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout())
            .build()
            .map_err(|e| GalleryError::Internal(format!("failed to build HTTP client: {}", e)))?;
        Ok(Self { client, config })
    }

    /// Returns (cloud_name, api_key, api_secret) or a configuration error
    /// naming what is missing.
    fn credentials_or_err(&self) -> Result<(&str, &str, &str)> {
        match (
            self.config.cloud_name.as_deref(),
            self.config.api_key.as_deref(),
            self.config.api_secret.as_deref(),
        ) {
            (Some(cloud_name), Some(api_key), Some(api_secret)) => {
                Ok((cloud_name, api_key, api_secret))
            }
            _ => Err(GalleryError::UpstreamConfiguration(format!(
                "missing credentials: {}",
                self.credentials().missing().join(", ")
            ))),
        }
    }

    fn listing_url(&self, cloud_name: &str) -> String {
        format!("{}/{}/resources/image", self.config.base_url, cloud_name)
    }

    fn query_params(&self) -> Vec<(&'static str, String)> {
        let mut params = vec![
            ("type", "upload".to_string()),
            ("context", "true".to_string()),
            ("max_results", self.config.max_results.to_string()),
        ];
        if let Some(folder) = &self.config.folder {
            params.push(("prefix", folder.clone()));
        }
        params
    }
}

#[async_trait]
impl MediaSource for HttpMediaSource {
    async fn fetch(&self) -> Result<Vec<GalleryEntry>> {
        let (cloud_name, api_key, api_secret) = self.credentials_or_err()?;
        let url = self.listing_url(cloud_name);
        debug!(%url, "fetching gallery listing");

        let response = self
            .client
            .get(&url)
            .basic_auth(api_key, Some(api_secret))
            .query(&self.query_params())
            .send()
            .await
            .map_err(|e| {
                warn!(error = %e, "media provider request failed");
                GalleryError::UpstreamConnectivity(format!("request failed: {}", e))
            })?;

        let status = response.status();
        if !status.is_success() {
            warn!(%status, "media provider rejected listing request");
            return Err(GalleryError::UpstreamConnectivity(format!(
                "media provider responded with {}",
                status
            )));
        }

        let listing: ResourceList = response.json().await.map_err(|e| {
            GalleryError::UpstreamConnectivity(format!("malformed listing: {}", e))
        })?;

        let entries: Vec<GalleryEntry> = listing.resources.into_iter().map(Into::into).collect();
        debug!(count = entries.len(), "gallery listing fetched");
        Ok(entries)
    }

    fn credentials(&self) -> CredentialPresence {
        self.config.credential_presence()
    }
}
