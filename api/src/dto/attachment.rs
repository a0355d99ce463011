use acct_core::domain::entities::attachment::{decode_attachment_data, AttachmentSource};
use acct_core::errors::ValidationError;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

const DEFAULT_CONTENT_TYPE: &str = "application/octet-stream";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AttachmentQuery {
    /// Account the attachment belongs to
    pub parent: Uuid,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateAttachmentRequest {
    #[serde(default)]
    pub url: Option<String>,
    /// Base64 payload, optionally as a `data:` URL
    #[serde(default)]
    pub data: Option<String>,
    #[serde(default)]
    pub content_type: Option<String>,
}

impl CreateAttachmentRequest {
    /// A non-empty url wins over inline data
    pub fn into_source(self) -> Result<AttachmentSource, ValidationError> {
        if let Some(url) = self.url.filter(|url| !url.is_empty()) {
            return Ok(AttachmentSource::Url(url));
        }

        let bytes = match self.data {
            Some(data) => decode_attachment_data(&data)?,
            None => Vec::new(),
        };
        Ok(AttachmentSource::Data {
            bytes,
            content_type: self
                .content_type
                .filter(|content_type| !content_type.is_empty())
                .unwrap_or_else(|| DEFAULT_CONTENT_TYPE.to_string()),
        })
    }
}
