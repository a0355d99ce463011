//! Filesystem attachment store
//!
//! Blobs are written as `<directory>/<attachment name>`. URL sources are
//! downloaded first and stored the same way.

use async_trait::async_trait;
use reqwest::header::CONTENT_TYPE;
use reqwest::Client;
use std::path::{Path, PathBuf};
use std::time::Duration;

use acct_core::domain::entities::attachment::Attachment;
use acct_core::errors::{DomainError, DomainResult};
use acct_core::services::AttachmentStore;

use crate::config::AttachmentConfig;
use crate::InfrastructureError;

const FALLBACK_CONTENT_TYPE: &str = "application/octet-stream";

/// Rejects payloads the store will not keep
pub(crate) fn check_payload(len: usize, max_bytes: usize) -> DomainResult<()> {
    if len == 0 {
        return Err(DomainError::Malformed {
            message: "attachment has no data".to_string(),
        });
    }
    if len > max_bytes {
        return Err(oversized(max_bytes));
    }
    Ok(())
}

fn oversized(max_bytes: usize) -> DomainError {
    DomainError::Malformed {
        message: format!("attachment exceeds {} bytes", max_bytes),
    }
}

/// Attachment store writing to a local directory
#[derive(Clone)]
pub struct LocalAttachmentStore {
    directory: PathBuf,
    max_bytes: usize,
    client: Client,
}

impl LocalAttachmentStore {
    pub fn new(config: &AttachmentConfig) -> Result<Self, InfrastructureError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.fetch_timeout_secs))
            .build()?;
        Ok(Self::with_client(config, client))
    }

    pub fn with_client(config: &AttachmentConfig, client: Client) -> Self {
        Self {
            directory: PathBuf::from(&config.directory),
            max_bytes: config.max_bytes,
            client,
        }
    }

    pub fn directory(&self) -> &Path {
        &self.directory
    }

    /// Path a named attachment is stored at
    pub fn path_for(&self, name: &str) -> PathBuf {
        self.directory.join(name)
    }

    /// Read back a stored attachment
    pub async fn read(&self, name: &str) -> Result<Vec<u8>, InfrastructureError> {
        Ok(tokio::fs::read(self.path_for(name)).await?)
    }

    async fn write(&self, data: &[u8], content_type: &str) -> DomainResult<Attachment> {
        check_payload(data.len(), self.max_bytes)?;

        let attachment = Attachment::new(content_type);
        tokio::fs::create_dir_all(&self.directory)
            .await
            .map_err(InfrastructureError::from)?;
        tokio::fs::write(self.path_for(&attachment.name), data)
            .await
            .map_err(|e| {
                tracing::error!(error = %e, name = %attachment.name, "Failed to write attachment");
                InfrastructureError::from(e)
            })?;

        tracing::debug!(
            name = %attachment.name,
            content_type,
            bytes = data.len(),
            "Attachment stored"
        );
        Ok(attachment)
    }
}

#[async_trait]
impl AttachmentStore for LocalAttachmentStore {
    async fn create_with_data(
        &self,
        data: Vec<u8>,
        content_type: &str,
    ) -> DomainResult<Attachment> {
        self.write(&data, content_type).await
    }

    async fn create_with_url(&self, url: &str) -> DomainResult<Attachment> {
        let mut response = self.client.get(url).send().await.map_err(|e| {
            tracing::warn!(error = %e, url, "Attachment download failed");
            DomainError::Malformed {
                message: "attachment url could not be fetched".to_string(),
            }
        })?;

        if !response.status().is_success() {
            tracing::warn!(status = response.status().as_u16(), url, "Attachment download refused");
            return Err(DomainError::Malformed {
                message: format!("attachment url answered {}", response.status()),
            });
        }

        if let Some(declared) = response.content_length() {
            if declared > self.max_bytes as u64 {
                tracing::warn!(declared, url, "Attachment download too large");
                return Err(oversized(self.max_bytes));
            }
        }

        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .unwrap_or(FALLBACK_CONTENT_TYPE)
            .to_string();

        let mut body = Vec::new();
        while let Some(chunk) = response
            .chunk()
            .await
            .map_err(|e| {
                tracing::warn!(error = %e.without_url(), url, "Attachment download interrupted");
                DomainError::Malformed {
                    message: "attachment url could not be read".to_string(),
                }
            })?
        {
            if body.len() + chunk.len() > self.max_bytes {
                tracing::warn!(url, "Attachment download exceeded size limit");
                return Err(oversized(self.max_bytes));
            }
            body.extend_from_slice(&chunk);
        }

        self.write(&body, &content_type).await
    }
}
