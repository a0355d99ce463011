//! Attachment storage configuration

use serde::{Deserialize, Serialize};

/// Local attachment storage settings
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AttachmentConfig {
    /// Directory attachments are written to
    pub directory: String,

    /// Largest accepted attachment in bytes
    pub max_bytes: usize,

    /// Timeout for downloading a URL source in seconds
    pub fetch_timeout_secs: u64,
}

impl Default for AttachmentConfig {
    fn default() -> Self {
        Self {
            directory: String::from("./attachments"),
            max_bytes: 5 * 1024 * 1024,
            fetch_timeout_secs: 10,
        }
    }
}

impl AttachmentConfig {
    /// Create from environment variables
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            directory: std::env::var("ATTACHMENT_DIR").unwrap_or(defaults.directory),
            max_bytes: std::env::var("ATTACHMENT_MAX_BYTES")
                .ok()
                .and_then(|bytes| bytes.parse().ok())
                .unwrap_or(defaults.max_bytes),
            fetch_timeout_secs: std::env::var("ATTACHMENT_FETCH_TIMEOUT_SECS")
                .ok()
                .and_then(|secs| secs.parse().ok())
                .unwrap_or(defaults.fetch_timeout_secs),
        }
    }
}
