//! Upload panel: form validation and the multipart create request.
//!
//! The submit control is disabled and relabelled for the whole request, which
//! keeps a single upload in flight per panel. It is restored by a drop guard so
//! every exit path (including a panicking notifier) re-enables it.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use mediagrid_api_client::MediaApi;
use mediagrid_core::{SelectedFile, UploadRequest, UploadResponse, ValidationError};

pub const DEFAULT_SUBMIT_LABEL: &str = "Submit";
pub const BUSY_LABEL: &str = "Uploading...";
pub const UPLOAD_SUCCESS_MESSAGE: &str = "File uploaded successfully!";
pub const UPLOAD_FAILURE_MESSAGE: &str = "Upload failed — see console for details.";

/// User-facing signal raised by the panel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    /// Blocking alert; no request was sent.
    Invalid(ValidationError),
    Uploaded,
    UploadFailed(String),
}

impl Notice {
    pub fn message(&self) -> String {
        match self {
            Notice::Invalid(err) => err.to_string(),
            Notice::Uploaded => UPLOAD_SUCCESS_MESSAGE.to_string(),
            Notice::UploadFailed(reason) => reason.clone(),
        }
    }
}

/// Displays notices to the user (alert, toast, terminal line).
pub trait Notifier: Send + Sync {
    fn notify(&self, notice: Notice);
}

/// New-asset form fields.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UploadForm {
    pub files: Vec<SelectedFile>,
    pub file_name: String,
    pub user_id: String,
    pub user_name: String,
}

impl UploadForm {
    pub fn validate(&self) -> Result<UploadRequest, ValidationError> {
        UploadRequest::validate(&self.files, &self.file_name, &self.user_id, &self.user_name)
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmitControl {
    pub label: String,
    pub disabled: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// An upload from this panel is already in flight.
    Busy,
    Invalid(ValidationError),
    Uploaded(UploadResponse),
    Failed(String),
}

#[derive(Debug)]
struct PanelState {
    form: UploadForm,
    control: SubmitControl,
}

pub struct UploadPanel {
    api: Arc<dyn MediaApi>,
    notifier: Arc<dyn Notifier>,
    state: Mutex<PanelState>,
}

/// Restores the submit control when dropped.
struct BusyGuard<'a> {
    state: &'a Mutex<PanelState>,
    original_label: String,
}

impl Drop for BusyGuard<'_> {
    fn drop(&mut self) {
        let mut state = self.state.lock().unwrap_or_else(PoisonError::into_inner);
        state.control.label = std::mem::take(&mut self.original_label);
        state.control.disabled = false;
    }
}

impl UploadPanel {
    pub fn new(api: Arc<dyn MediaApi>, notifier: Arc<dyn Notifier>) -> Self {
        Self::with_submit_label(api, notifier, DEFAULT_SUBMIT_LABEL)
    }

    pub fn with_submit_label(
        api: Arc<dyn MediaApi>,
        notifier: Arc<dyn Notifier>,
        label: &str,
    ) -> Self {
        Self {
            api,
            notifier,
            state: Mutex::new(PanelState {
                form: UploadForm::default(),
                control: SubmitControl {
                    label: label.to_string(),
                    disabled: false,
                },
            }),
        }
    }

    fn state(&self) -> MutexGuard<'_, PanelState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn set_form(&self, form: UploadForm) {
        self.state().form = form;
    }

    pub fn form(&self) -> UploadForm {
        self.state().form.clone()
    }

    pub fn control(&self) -> SubmitControl {
        self.state().control.clone()
    }

    /// Validate the form and upload it.
    pub async fn submit(&self) -> SubmitOutcome {
        let (request, _guard) = {
            let mut state = self.state();
            if state.control.disabled {
                tracing::debug!("Upload already in flight, submit ignored");
                return SubmitOutcome::Busy;
            }

            let validated = state.form.validate();
            let request = match validated {
                Ok(request) => request,
                Err(err) => {
                    drop(state);
                    tracing::debug!(code = err.error_code(), "Upload form rejected");
                    self.notifier.notify(Notice::Invalid(err));
                    return SubmitOutcome::Invalid(err);
                }
            };

            let original_label =
                std::mem::replace(&mut state.control.label, BUSY_LABEL.to_string());
            state.control.disabled = true;
            let guard = BusyGuard {
                state: &self.state,
                original_label,
            };
            (request, guard)
        };

        tracing::info!(
            file = %request.file.name,
            bytes = request.file.bytes.len(),
            user_id = %request.user_id,
            "Uploading media"
        );

        match self.api.upload(&request).await {
            Ok(response) => {
                tracing::debug!(?response, "Upload response");
                self.state().form.reset();
                self.notifier.notify(Notice::Uploaded);
                SubmitOutcome::Uploaded(response)
            }
            Err(err) => {
                tracing::error!(error = %err, "Upload failed");
                let message = err
                    .server_message()
                    .unwrap_or_else(|| UPLOAD_FAILURE_MESSAGE.to_string());
                self.notifier.notify(Notice::UploadFailed(message.clone()));
                SubmitOutcome::Failed(message)
            }
        }
    }
}
