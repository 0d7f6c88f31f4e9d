//! Configuration module
//!
//! Gallery client configuration read from the environment (and `.env`).

use std::env;
use std::time::Duration;

const DEFAULT_API_URL: &str = "http://localhost:8000";
const REQUEST_TIMEOUT_SECS: u64 = 60;

/// Client-side configuration for the gallery and upload panel.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GalleryConfig {
    /// Origin serving `/api/images`, `/api/blob` and `/api/upload`.
    pub api_url: String,
    /// Storage account base URL, used only for last-resort URL construction.
    pub blob_account: Option<String>,
    pub request_timeout_secs: u64,
}

impl Default for GalleryConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            blob_account: None,
            request_timeout_secs: REQUEST_TIMEOUT_SECS,
        }
    }
}

impl GalleryConfig {
    /// Load from MEDIAGRID_API_URL (or API_URL), BLOB_ACCOUNT and
    /// MEDIAGRID_REQUEST_TIMEOUT_SECS.
    pub fn from_env() -> Result<Self, anyhow::Error> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load using an arbitrary variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, anyhow::Error>
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let api_url = non_empty("MEDIAGRID_API_URL")
            .or_else(|| non_empty("API_URL"))
            .unwrap_or_else(|| DEFAULT_API_URL.to_string());

        let blob_account = non_empty("BLOB_ACCOUNT").map(|v| v.trim().to_string());

        let request_timeout_secs = match non_empty("MEDIAGRID_REQUEST_TIMEOUT_SECS") {
            Some(raw) => raw.trim().parse().map_err(|_| {
                anyhow::anyhow!("MEDIAGRID_REQUEST_TIMEOUT_SECS must be a valid number")
            })?,
            None => REQUEST_TIMEOUT_SECS,
        };

        Ok(Self {
            api_url: api_url.trim().trim_end_matches('/').to_string(),
            blob_account,
            request_timeout_secs,
        })
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}
