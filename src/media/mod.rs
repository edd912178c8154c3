//! Media Module
//!
//! The upstream media listing the gallery cache sits in front of.

mod provider;

pub use provider::HttpMediaSource;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::Result;

// == Gallery Entry ==
/// One asset in the gallery listing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GalleryEntry {
    pub id: String,
    pub url: String,
    pub width: u32,
    pub height: u32,
    pub format: String,
    pub created_at: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub caption: Option<String>,
}

// == Credential Presence ==
/// Which upstream credentials are configured. Booleans only, never values.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct CredentialPresence {
    pub cloud_name: bool,
    pub api_key: bool,
    pub api_secret: bool,
}

impl CredentialPresence {
    pub fn all_present(&self) -> bool {
        self.cloud_name && self.api_key && self.api_secret
    }

    /// Names of the missing credentials, for error messages.
    pub fn missing(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if !self.cloud_name {
            missing.push("cloud_name");
        }
        if !self.api_key {
            missing.push("api_key");
        }
        if !self.api_secret {
            missing.push("api_secret");
        }
        missing
    }
}

// == Media Source ==
/// Produces the current full list of gallery entries.
///
/// Implementations may be slow and may fail; callers must not retry on
/// their behalf.
#[async_trait]
pub trait MediaSource: Send + Sync {
    async fn fetch(&self) -> Result<Vec<GalleryEntry>>;

    /// Credential diagnostics attached to error responses.
    fn credentials(&self) -> CredentialPresence {
        CredentialPresence {
            cloud_name: true,
            api_key: true,
            api_secret: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_credential_presence_missing() {
        let presence = CredentialPresence {
            cloud_name: true,
            api_key: false,
            api_secret: false,
        };
        assert!(!presence.all_present());
        assert_eq!(presence.missing(), vec!["api_key", "api_secret"]);
    }

    #[test]
    fn test_gallery_entry_serialize_skips_empty_caption() {
        let entry = GalleryEntry {
            id: "gallery/sunset".to_string(),
            url: "https://cdn.example.com/sunset.jpg".to_string(),
            width: 1200,
            height: 800,
            format: "jpg".to_string(),
            created_at: "2024-05-01T10:00:00Z".to_string(),
            caption: None,
        };
        let json = serde_json::to_string(&entry).unwrap();
        assert!(json.contains("gallery/sunset"));
        assert!(!json.contains("caption"));
    }
}
