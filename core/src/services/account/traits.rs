//! Trait for blob storage of attachments

use async_trait::async_trait;

use crate::domain::entities::attachment::Attachment;
use crate::errors::DomainResult;

/// Stores attachment bytes and hands back their metadata
#[async_trait]
pub trait AttachmentStore: Send + Sync {
    /// Store an inline payload. Empty payloads are rejected as malformed.
    async fn create_with_data(&self, data: Vec<u8>, content_type: &str)
        -> DomainResult<Attachment>;

    /// Fetch `url` and store its body
    async fn create_with_url(&self, url: &str) -> DomainResult<Attachment>;
}
