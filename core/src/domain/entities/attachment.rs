//! Reference to a blob saved in external storage.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::ValidationError;

/// Attachment metadata; the bytes live in the attachment store
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attachment {
    /// Storage name, a fresh UUID
    pub name: String,

    /// MIME type
    #[serde(rename = "type")]
    pub content_type: String,
}

impl Attachment {
    pub fn new(content_type: impl Into<String>) -> Self {
        Self {
            name: Uuid::new_v4().to_string(),
            content_type: content_type.into(),
        }
    }
}

/// Where the bytes of a new attachment come from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AttachmentSource {
    /// Inline payload
    Data { bytes: Vec<u8>, content_type: String },
    /// Fetched from a URL
    Url(String),
}

/// Decodes base64 payload sent by clients, dropping a data-URL prefix
/// such as `data:image/png;base64,`.
pub fn decode_attachment_data(encoded: &str) -> Result<Vec<u8>, ValidationError> {
    let payload = match encoded.find(',') {
        Some(index) => &encoded[index + 1..],
        None => encoded,
    };
    STANDARD
        .decode(payload.trim())
        .map_err(|_| ValidationError::InvalidFormat {
            field: "data".to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_attachment_names_are_unique() {
        assert_ne!(Attachment::new("image/png").name, Attachment::new("image/png").name);
    }

    #[test]
    fn test_serializes_type_field() {
        let json = serde_json::to_value(Attachment::new("image/jpeg")).unwrap();
        assert_eq!(json["type"], "image/jpeg");
    }

    #[test]
    fn test_decode_strips_data_url_prefix() {
        assert_eq!(decode_attachment_data("data:text/plain;base64,aGk=").unwrap(), b"hi");
        assert_eq!(decode_attachment_data("aGk=").unwrap(), b"hi");
    }

    #[test]
    fn test_decode_rejects_garbage() {
        assert!(decode_attachment_data("%%%").is_err());
    }
}
