//! # Infrastructure Layer
//!
//! Concrete implementations of the ports defined in `acct_core`:
//! - **Database**: MySQL token, credential and account stores using SQLx
//! - **Cache**: Redis client and the token cache built on it
//! - **Providers**: identity provider verification over HTTP
//! - **Attachments**: local filesystem attachment storage
//!
//! ## Features
//!
//! - `mysql`: Enable MySQL database support (default)
//! - `redis-cache`: Enable Redis caching support (default)

use acct_core::errors::DomainError;

// Re-export core types for convenience
pub use acct_core::errors::*;

/// Database module - MySQL implementations using SQLx
#[cfg(feature = "mysql")]
pub mod database;

/// Cache module - Redis client and token cache
pub mod cache;

/// Identity provider verification
pub mod providers;

/// Attachment blob storage
pub mod attachments;

/// Configuration module for infrastructure services
pub mod config {
    //! Configuration for infrastructure services
    //!
    //! Handles:
    //! - Database connection strings
    //! - Redis configuration
    //! - Identity provider endpoints

    use serde::{Deserialize, Serialize};

    pub use acct_shared::config::{
        AttachmentConfig, CacheConfig, DatabaseConfig, ProviderConfig, TokenPolicyConfig,
    };

    /// Infrastructure configuration settings
    #[derive(Debug, Clone, Default, Serialize, Deserialize)]
    pub struct InfrastructureConfig {
        /// Database configuration
        pub database: DatabaseConfig,
        /// Redis cache configuration
        pub cache: CacheConfig,
        /// Identity provider configuration
        pub provider: ProviderConfig,
        /// Attachment storage configuration
        pub attachment: AttachmentConfig,
    }
}

/// Load infrastructure configuration from environment
pub fn load_config() -> Result<config::InfrastructureConfig, InfrastructureError> {
    dotenvy::dotenv().ok(); // Load .env file if present

    let database = acct_shared::config::DatabaseConfig::from_env();
    if database.url.is_empty() {
        return Err(InfrastructureError::Config(
            "DATABASE_URL must not be empty".to_string(),
        ));
    }

    Ok(config::InfrastructureConfig {
        database,
        cache: acct_shared::config::CacheConfig::from_env(),
        provider: acct_shared::config::AuthConfig::from_env().provider,
        attachment: acct_shared::config::AttachmentConfig::from_env(),
    })
}

/// Infrastructure-specific error types
#[derive(Debug, thiserror::Error)]
pub enum InfrastructureError {
    /// Database connection error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Database migration error
    #[error("Migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),

    /// Redis cache error
    #[error("Cache error: {0}")]
    Cache(#[from] redis::RedisError),

    /// HTTP request error for external services
    #[error("HTTP request error: {0}")]
    Http(#[from] reqwest::Error),

    /// Filesystem error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Cached value could not be (de)serialized
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// General infrastructure error
    #[error("Infrastructure error: {0}")]
    General(String),
}

impl From<InfrastructureError> for DomainError {
    fn from(err: InfrastructureError) -> Self {
        DomainError::Internal {
            message: err.to_string(),
        }
    }
}
