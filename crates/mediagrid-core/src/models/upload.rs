use bytes::Bytes;
use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// A file picked for upload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectedFile {
    pub name: String,
    pub content_type: Option<String>,
    pub bytes: Bytes,
}

impl SelectedFile {
    pub fn new(name: impl Into<String>, bytes: impl Into<Bytes>) -> Self {
        Self {
            name: name.into(),
            content_type: None,
            bytes: bytes.into(),
        }
    }

    pub fn with_content_type(mut self, content_type: impl Into<String>) -> Self {
        self.content_type = Some(content_type.into());
        self
    }
}

/// Validated upload, sent as multipart fields `fileName`, `userID`, `userName`, `file`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadRequest {
    pub file_name: String,
    pub user_id: String,
    pub user_name: String,
    pub file: SelectedFile,
}

impl UploadRequest {
    /// Validate form input in order: file, file name, user ID, user name.
    /// The first failure wins.
    pub fn validate(
        files: &[SelectedFile],
        file_name: &str,
        user_id: &str,
        user_name: &str,
    ) -> Result<Self, ValidationError> {
        let file = match files {
            [] => return Err(ValidationError::MissingFile),
            [file] => file.clone(),
            _ => return Err(ValidationError::TooManyFiles),
        };

        let file_name = file_name.trim();
        if file_name.is_empty() {
            return Err(ValidationError::MissingFileName);
        }
        let user_id = user_id.trim();
        if user_id.is_empty() {
            return Err(ValidationError::MissingUserId);
        }
        let user_name = user_name.trim();
        if user_name.is_empty() {
            return Err(ValidationError::MissingUserName);
        }

        Ok(Self {
            file_name: file_name.to_string(),
            user_id: user_id.to_string(),
            user_name: user_name.to_string(),
            file,
        })
    }
}

/// Body returned by `POST /api/upload`. Only existence is required; every
/// field is optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UploadResponse {
    pub success: bool,
    pub message: Option<String>,
    pub blob_url: Option<String>,
    /// Storage path chosen by the server.
    pub file_name: Option<String>,
}
