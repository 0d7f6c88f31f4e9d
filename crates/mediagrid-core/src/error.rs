//! Error types module
//!
//! Errors raised while turning raw list records into gallery items and while
//! validating upload forms. Both are surfaced to the user rather than
//! propagated: a `RecordError` becomes an error card, a `ValidationError`
//! becomes an alert.

/// A single list record could not be turned into a gallery item.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RecordError {
    #[error("Record is not an object (found {0})")]
    NotAnObject(&'static str),
}

/// Upload form validation failure. `Display` is the user-facing message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("Please select a file to upload.")]
    MissingFile,

    #[error("Please select only one file to upload.")]
    TooManyFiles,

    #[error("Please enter a file name.")]
    MissingFileName,

    #[error("Please enter a user ID.")]
    MissingUserId,

    #[error("Please enter a user name.")]
    MissingUserName,
}

impl ValidationError {
    /// Machine-readable error code (e.g., "MISSING_FILE")
    pub fn error_code(&self) -> &'static str {
        match self {
            ValidationError::MissingFile => "MISSING_FILE",
            ValidationError::TooManyFiles => "TOO_MANY_FILES",
            ValidationError::MissingFileName => "MISSING_FILE_NAME",
            ValidationError::MissingUserId => "MISSING_USER_ID",
            ValidationError::MissingUserName => "MISSING_USER_NAME",
        }
    }
}

/// JSON type name used in error messages.
pub fn json_type_name(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "boolean",
        serde_json::Value::Number(_) => "number",
        serde_json::Value::String(_) => "string",
        serde_json::Value::Array(_) => "array",
        serde_json::Value::Object(_) => "object",
    }
}
