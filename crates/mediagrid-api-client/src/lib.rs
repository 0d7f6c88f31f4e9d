//! HTTP client for the gallery API.
//!
//! Provides a minimal client with GET/multipart helpers and the domain
//! methods used by the gallery (`GET /api/images`) and the upload panel
//! (`POST /api/upload`). The [`MediaApi`] trait is the seam the gallery and
//! upload panel are written against.

pub mod api;
pub mod error;

use anyhow::{Context, Result};
use mediagrid_core::GalleryConfig;
use reqwest::Client;
use std::time::Duration;

pub use api::{MediaApi, IMAGES_PATH, UPLOAD_PATH};
pub use error::ApiError;

/// HTTP client for the gallery API.
#[derive(Clone, Debug)]
pub struct ApiClient {
    client: Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn from_config(config: &GalleryConfig) -> Result<Self> {
        Self::new(&config.api_url, config.request_timeout())
    }

    /// Create client from environment: MEDIAGRID_API_URL (or API_URL).
    pub fn from_env() -> Result<Self> {
        let config = GalleryConfig::from_env()?;
        Self::from_config(&config)
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn build_url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// GET request. Returns the raw JSON body.
    pub async fn get_json(&self, path: &str) -> Result<serde_json::Value, ApiError> {
        let url = self.build_url(path);
        tracing::debug!(url = %url, "GET");

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(ApiError::Transport)?;

        let text = Self::success_text(response).await?;
        serde_json::from_str(&text).map_err(ApiError::Decode)
    }

    /// POST multipart form. Returns the raw response body.
    pub async fn post_multipart(
        &self,
        path: &str,
        form: reqwest::multipart::Form,
    ) -> Result<String, ApiError> {
        let url = self.build_url(path);
        tracing::debug!(url = %url, "POST multipart");

        let response = self
            .client
            .post(&url)
            .multipart(form)
            .send()
            .await
            .map_err(ApiError::Transport)?;

        Self::success_text(response).await
    }

    async fn success_text(response: reqwest::Response) -> Result<String, ApiError> {
        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(ApiError::Status {
                status: status.as_u16(),
                body,
            });
        }

        response.text().await.map_err(ApiError::Transport)
    }
}
