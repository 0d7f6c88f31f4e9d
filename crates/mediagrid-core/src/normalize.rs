//! Field normalization for raw media records.
//!
//! Records come from a document store that is not strict about key casing and
//! sometimes wraps string values in a base64 envelope (`{ "$content": "..." }`).
//! Every logical field is looked up through a fixed list of candidate keys and
//! the value is unwrapped into a plain string.

use base64::alphabet;
use base64::engine::{DecodePaddingMode, GeneralPurpose, GeneralPurposeConfig};
use base64::Engine;
use serde_json::{Map, Value};

/// Key marking an envelope-wrapped value.
pub const ENVELOPE_KEY: &str = "$content";

const ENVELOPE_ENGINE: GeneralPurpose = GeneralPurpose::new(
    &alphabet::STANDARD,
    GeneralPurposeConfig::new().with_decode_padding_mode(DecodePaddingMode::Indifferent),
);

/// Logical record fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    FileName,
    BlobPath,
    FilePath,
    UserName,
    UserId,
    ContentType,
    BlobUrl,
}

/// Candidate keys per field, in lookup order. The first key holding a truthy
/// value wins.
static CANDIDATE_KEYS: &[(Field, &[&str])] = &[
    (Field::FileName, &["fileName", "FileName"]),
    (Field::BlobPath, &["blobPath", "BlobPath"]),
    (Field::FilePath, &["blobPath", "filePath", "FilePath"]),
    (Field::UserName, &["userName", "UserName"]),
    (Field::UserId, &["userID", "UserID"]),
    (Field::ContentType, &["contentType", "ContentType"]),
    (Field::BlobUrl, &["blobUrl", "BlobUrl"]),
];

impl Field {
    pub fn candidate_keys(self) -> &'static [&'static str] {
        CANDIDATE_KEYS
            .iter()
            .find(|(field, _)| *field == self)
            .map(|(_, keys)| *keys)
            .unwrap_or(&[])
    }

    /// Normalized value of this field in `record`, or `""` when no candidate is set.
    pub fn extract(self, record: &Map<String, Value>) -> String {
        normalize(self.lookup(record))
    }

    fn lookup(self, record: &Map<String, Value>) -> Option<&Value> {
        self.candidate_keys()
            .iter()
            .filter_map(|key| record.get(*key))
            .find(|value| is_truthy(value))
    }
}

/// A raw field value, classified before unwrapping.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RawField {
    Plain(String),
    Envelope { content: Option<String> },
}

impl RawField {
    /// Classify a JSON value. Falsy values (`null`, `false`, `0`, `""`) yield `None`.
    pub fn from_value(value: &Value) -> Option<Self> {
        if !is_truthy(value) {
            return None;
        }

        match value {
            Value::Object(map) if map.contains_key(ENVELOPE_KEY) => Some(RawField::Envelope {
                content: map.get(ENVELOPE_KEY).and_then(coerce),
            }),
            other => coerce(other).map(RawField::Plain),
        }
    }

    /// Unwrap into a plain string. Content that is not base64 is returned as is.
    pub fn into_string(self) -> String {
        match self {
            RawField::Plain(s) => s,
            RawField::Envelope { content: None } => String::new(),
            RawField::Envelope {
                content: Some(content),
            } => decode_envelope(&content).unwrap_or(content),
        }
    }
}

/// Normalize a raw field value into a string. Never fails.
pub fn normalize(raw: Option<&Value>) -> String {
    raw.and_then(RawField::from_value)
        .map(RawField::into_string)
        .unwrap_or_default()
}

fn decode_envelope(content: &str) -> Option<String> {
    let compact: String = content
        .chars()
        .filter(|c| !c.is_ascii_whitespace())
        .collect();
    let bytes = ENVELOPE_ENGINE.decode(compact).ok()?;
    // Bytes that are not UTF-8 map one-to-one onto Latin-1 chars.
    Some(String::from_utf8(bytes).unwrap_or_else(|err| {
        err.into_bytes().into_iter().map(char::from).collect()
    }))
}

fn coerce(value: &Value) -> Option<String> {
    if !is_truthy(value) {
        return None;
    }
    match value {
        Value::String(s) => Some(s.clone()),
        other => Some(other.to_string()),
    }
}

fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}
