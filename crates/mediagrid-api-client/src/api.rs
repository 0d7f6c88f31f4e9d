//! Domain methods for the gallery API.

use async_trait::async_trait;
use mediagrid_core::{UploadRequest, UploadResponse};
use reqwest::multipart::{Form, Part};
use serde_json::Value;

use crate::{ApiClient, ApiError};

pub const IMAGES_PATH: &str = "/api/images";
pub const UPLOAD_PATH: &str = "/api/upload";

/// Remote operations the gallery and the upload panel depend on.
#[async_trait]
pub trait MediaApi: Send + Sync {
    /// Fetch the media list. The body is returned as-is; a non-array body
    /// means "no media" and is not an error here.
    async fn list_media(&self) -> Result<Value, ApiError>;

    /// Create a new asset from a validated upload.
    async fn upload(&self, request: &UploadRequest) -> Result<UploadResponse, ApiError>;
}

impl ApiClient {
    fn upload_form(request: &UploadRequest) -> Result<Form, ApiError> {
        let mut file_part =
            Part::bytes(request.file.bytes.to_vec()).file_name(request.file.name.clone());
        if let Some(content_type) = request.file.content_type.as_deref() {
            file_part = file_part
                .mime_str(content_type)
                .map_err(ApiError::Transport)?;
        }

        Ok(Form::new()
            .text("fileName", request.file_name.clone())
            .text("userID", request.user_id.clone())
            .text("userName", request.user_name.clone())
            .part("file", file_part))
    }
}

#[async_trait]
impl MediaApi for ApiClient {
    async fn list_media(&self) -> Result<Value, ApiError> {
        self.get_json(IMAGES_PATH).await
    }

    async fn upload(&self, request: &UploadRequest) -> Result<UploadResponse, ApiError> {
        let form = Self::upload_form(request)?;
        let body = self.post_multipart(UPLOAD_PATH, form).await?;

        // Success bodies are not schema-checked: anything unparseable is an empty response.
        let response = serde_json::from_str::<UploadResponse>(&body).unwrap_or_else(|err| {
            tracing::debug!(error = %err, "Upload response is not an upload object");
            UploadResponse::default()
        });
        Ok(response)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mediagrid_core::SelectedFile;
    use mockito::Matcher;
    use std::time::Duration;

    fn client(server: &mockito::ServerGuard) -> ApiClient {
        ApiClient::new(&server.url(), Duration::from_secs(5)).unwrap()
    }

    fn request() -> UploadRequest {
        UploadRequest {
            file_name: "Cat".to_string(),
            user_id: "u1".to_string(),
            user_name: "Alice".to_string(),
            file: SelectedFile::new("cat.png", b"PNGDATA".to_vec()).with_content_type("image/png"),
        }
    }

    #[tokio::test]
    async fn list_media_returns_array_body() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/api/images")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"[{"fileName":"a.png","blobPath":"u1/a.png"}]"#)
            .create_async()
            .await;

        let body = client(&server).list_media().await.unwrap();
        assert_eq!(body[0]["fileName"], "a.png");
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn list_media_passes_non_array_bodies_through() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("GET", "/api/images")
            .with_status(200)
            .with_body(r#""not an array""#)
            .create_async()
            .await;

        let body = client(&server).list_media().await.unwrap();
        assert_eq!(body, Value::String("not an array".to_string()));
    }

    #[tokio::test]
    async fn list_media_reports_status_failures() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("GET", "/api/images")
            .with_status(503)
            .with_body("unavailable")
            .create_async()
            .await;

        let err = client(&server).list_media().await.unwrap_err();
        assert_eq!(err.status(), Some(503));
        assert!(matches!(err, ApiError::Status { ref body, .. } if body == "unavailable"));
    }

    #[tokio::test]
    async fn list_media_reports_invalid_json() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("GET", "/api/images")
            .with_status(200)
            .with_body("<html></html>")
            .create_async()
            .await;

        let err = client(&server).list_media().await.unwrap_err();
        assert!(matches!(err, ApiError::Decode(_)));
    }

    #[tokio::test]
    async fn upload_sends_multipart_fields() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/api/upload")
            .match_header("content-type", Matcher::Regex("^multipart/form-data".to_string()))
            .match_body(Matcher::AllOf(vec![
                Matcher::Regex(r#"name="fileName"\r\n\r\nCat\r\n"#.to_string()),
                Matcher::Regex(r#"name="userID"\r\n\r\nu1\r\n"#.to_string()),
                Matcher::Regex(r#"name="userName"\r\n\r\nAlice\r\n"#.to_string()),
                Matcher::Regex(r#"name="file"; filename="cat.png""#.to_string()),
                Matcher::Regex("PNGDATA".to_string()),
            ]))
            .with_status(200)
            .with_body(
                r#"{"success":true,"message":"File uploaded successfully","fileName":"u1/x_cat.png"}"#,
            )
            .create_async()
            .await;

        let response = client(&server).upload(&request()).await.unwrap();
        assert!(response.success);
        assert_eq!(response.file_name.as_deref(), Some("u1/x_cat.png"));
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn upload_accepts_unstructured_success_bodies() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("POST", "/api/upload")
            .with_status(201)
            .with_body("ok")
            .create_async()
            .await;

        let response = client(&server).upload(&request()).await.unwrap();
        assert_eq!(response, UploadResponse::default());
    }

    #[tokio::test]
    async fn upload_failure_keeps_server_reason() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("POST", "/api/upload")
            .with_status(500)
            .with_body(r#"{"error":"Blob storage not configured"}"#)
            .create_async()
            .await;

        let err = client(&server).upload(&request()).await.unwrap_err();
        assert_eq!(
            err.server_message().as_deref(),
            Some("Blob storage not configured")
        );
    }
}
