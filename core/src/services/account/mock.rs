//! Mock implementation of AttachmentStore for testing

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::entities::attachment::Attachment;
use crate::errors::{DomainError, DomainResult};

use super::traits::AttachmentStore;

/// In-memory attachment store; URLs are recorded, not fetched
pub struct MockAttachmentStore {
    blobs: Arc<RwLock<HashMap<String, Vec<u8>>>>,
}

impl MockAttachmentStore {
    pub fn new() -> Self {
        Self {
            blobs: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Bytes stored under an attachment name
    pub async fn blob(&self, name: &str) -> Option<Vec<u8>> {
        self.blobs.read().await.get(name).cloned()
    }
}

impl Default for MockAttachmentStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl AttachmentStore for MockAttachmentStore {
    async fn create_with_data(
        &self,
        data: Vec<u8>,
        content_type: &str,
    ) -> DomainResult<Attachment> {
        if data.is_empty() {
            return Err(DomainError::Malformed {
                message: "attachment has no data".to_string(),
            });
        }
        let attachment = Attachment::new(content_type);
        self.blobs
            .write()
            .await
            .insert(attachment.name.clone(), data);
        Ok(attachment)
    }

    async fn create_with_url(&self, url: &str) -> DomainResult<Attachment> {
        let attachment = Attachment::new("application/octet-stream");
        self.blobs
            .write()
            .await
            .insert(attachment.name.clone(), url.as_bytes().to_vec());
        Ok(attachment)
    }
}
