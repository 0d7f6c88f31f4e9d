use serde_json::Value;

use crate::error::{json_type_name, RecordError};
use crate::normalize::Field;
use crate::url_resolver::ResolveInput;

/// A media record from `GET /api/images` with every field normalized.
///
/// Additional keys written by the upload server (`id`, `timestamp`) are ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MediaRecord {
    pub file_name: String,
    pub blob_path: String,
    pub file_path: String,
    pub user_name: String,
    pub user_id: String,
    pub content_type: String,
    pub blob_url: String,
}

impl MediaRecord {
    /// Normalize a raw list element. Only non-object elements are rejected.
    pub fn from_value(value: &Value) -> Result<Self, RecordError> {
        let Value::Object(map) = value else {
            return Err(RecordError::NotAnObject(json_type_name(value)));
        };

        Ok(Self {
            file_name: Field::FileName.extract(map),
            blob_path: Field::BlobPath.extract(map),
            file_path: Field::FilePath.extract(map),
            user_name: Field::UserName.extract(map),
            user_id: Field::UserId.extract(map),
            content_type: Field::ContentType.extract(map),
            blob_url: Field::BlobUrl.extract(map),
        })
    }

    pub fn resolve_input(&self) -> ResolveInput<'_> {
        ResolveInput {
            blob_path: &self.blob_path,
            file_path: &self.file_path,
            blob_url: &self.blob_url,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn normalizes_server_shaped_record() {
        let value = json!({
            "id": "u1_2024-01-01T00:00:00_cat.png",
            "fileName": "Cat",
            "userID": "u1",
            "userName": "Alice",
            "blobUrl": "https://acct.blob.example.net/images/u1/cat.png",
            "blobPath": "u1/2024-01-01T00:00:00_cat.png",
            "timestamp": "2024-01-01T00:00:00",
            "contentType": "image/png"
        });
        let record = MediaRecord::from_value(&value).unwrap();
        assert_eq!(record.file_name, "Cat");
        assert_eq!(record.blob_path, "u1/2024-01-01T00:00:00_cat.png");
        assert_eq!(record.file_path, "u1/2024-01-01T00:00:00_cat.png");
        assert_eq!(record.user_id, "u1");
        assert_eq!(record.user_name, "Alice");
        assert_eq!(record.content_type, "image/png");
    }

    #[test]
    fn normalizes_pascal_case_envelope_record() {
        // "clip.mp4", "bob"
        let value = json!({
            "FileName": { "$content": "Y2xpcC5tcDQ=" },
            "FilePath": "videos/clip.mp4",
            "UserName": { "$content": "Ym9i" },
            "UserID": 7
        });
        let record = MediaRecord::from_value(&value).unwrap();
        assert_eq!(record.file_name, "clip.mp4");
        assert_eq!(record.blob_path, "");
        assert_eq!(record.file_path, "videos/clip.mp4");
        assert_eq!(record.user_name, "bob");
        assert_eq!(record.user_id, "7");
    }

    #[test]
    fn empty_object_normalizes_to_empty_fields() {
        let record = MediaRecord::from_value(&json!({})).unwrap();
        assert_eq!(record, MediaRecord::default());
    }

    #[test]
    fn non_object_records_are_rejected() {
        assert_eq!(
            MediaRecord::from_value(&json!("oops")),
            Err(RecordError::NotAnObject("string"))
        );
        assert_eq!(
            MediaRecord::from_value(&Value::Null),
            Err(RecordError::NotAnObject("null"))
        );
    }
}
