//! Shared fixtures for unit tests.

use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;
use mediagrid_api_client::{ApiError, MediaApi};
use mediagrid_core::{ResolvedMediaItem, SelectedFile, UploadRequest, UploadResponse};
use serde_json::Value;

use crate::upload::{Notice, Notifier};

pub fn item(file_name: &str, url: &str, is_video: bool) -> ResolvedMediaItem {
    ResolvedMediaItem {
        file_name: file_name.to_string(),
        user_name: "Alice".to_string(),
        user_id: "u1".to_string(),
        url: url.to_string(),
        is_video,
        video_label: None,
    }
}

pub fn png_file() -> SelectedFile {
    SelectedFile::new("cat.png", b"PNGDATA".to_vec()).with_content_type("image/png")
}

pub fn status_error(status: u16, body: &str) -> ApiError {
    ApiError::Status {
        status,
        body: body.to_string(),
    }
}

/// Fake API returning queued responses and recording calls.
#[derive(Default)]
pub struct FakeApi {
    pub list_responses: Mutex<VecDeque<Result<Value, ApiError>>>,
    pub upload_responses: Mutex<VecDeque<Result<UploadResponse, ApiError>>>,
    pub uploads: Mutex<Vec<UploadRequest>>,
    pub list_calls: AtomicUsize,
}

impl FakeApi {
    pub fn with_list(response: Result<Value, ApiError>) -> Self {
        let api = Self::default();
        api.list_responses.lock().unwrap().push_back(response);
        api
    }

    pub fn with_upload(response: Result<UploadResponse, ApiError>) -> Self {
        let api = Self::default();
        api.upload_responses.lock().unwrap().push_back(response);
        api
    }

    pub fn upload_count(&self) -> usize {
        self.uploads.lock().unwrap().len()
    }
}

#[async_trait]
impl MediaApi for FakeApi {
    async fn list_media(&self) -> Result<Value, ApiError> {
        self.list_calls.fetch_add(1, Ordering::SeqCst);
        self.list_responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Ok(Value::Array(Vec::new())))
    }

    async fn upload(&self, request: &UploadRequest) -> Result<UploadResponse, ApiError> {
        self.uploads.lock().unwrap().push(request.clone());
        self.upload_responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Ok(UploadResponse::default()))
    }
}

/// Notifier recording every notice.
#[derive(Default)]
pub struct RecordingNotifier {
    pub notices: Mutex<Vec<Notice>>,
}

impl RecordingNotifier {
    pub fn messages(&self) -> Vec<String> {
        self.notices
            .lock()
            .unwrap()
            .iter()
            .map(Notice::message)
            .collect()
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, notice: Notice) {
        self.notices.lock().unwrap().push(notice);
    }
}
