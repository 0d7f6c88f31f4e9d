//! Errors returned by the API client.

use serde::Deserialize;

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("Failed to send request: {0}")]
    Transport(#[source] reqwest::Error),

    #[error("API request failed with status {status}: {body}")]
    Status { status: u16, body: String },

    #[error("Failed to parse response as JSON: {0}")]
    Decode(#[source] serde_json::Error),
}

#[derive(Deserialize)]
struct ErrorBody {
    error: Option<String>,
}

impl ApiError {
    /// Human-readable reason from a JSON `{"error": "..."}` body, if the server sent one.
    pub fn server_message(&self) -> Option<String> {
        match self {
            ApiError::Status { body, .. } => serde_json::from_str::<ErrorBody>(body)
                .ok()
                .and_then(|b| b.error)
                .filter(|msg| !msg.trim().is_empty()),
            _ => None,
        }
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Status { status, .. } => Some(*status),
            ApiError::Transport(err) => err.status().map(|s| s.as_u16()),
            ApiError::Decode(_) => None,
        }
    }
}
