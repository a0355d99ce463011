//! Configuration module with business-specific sub-modules
//!
//! - `attachment` - Local attachment storage
//! - `auth` - Token policy, cookie sessions and identity providers
//! - `cache` - Redis configuration
//! - `database` - Database connection and pool configuration
//! - `environment` - Environment detection and logging configuration
//! - `server` - HTTP server configuration

pub mod attachment;
pub mod auth;
pub mod cache;
pub mod database;
pub mod environment;
pub mod server;

pub use attachment::AttachmentConfig;
pub use auth::{AuthConfig, ProviderConfig, SessionConfig, TokenPolicyConfig};
pub use cache::CacheConfig;
pub use database::DatabaseConfig;
pub use environment::{Environment, LogFormat, LoggingConfig};
pub use server::ServerConfig;
