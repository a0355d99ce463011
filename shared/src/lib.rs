//! Shared utilities and common types for the account backend
//!
//! This crate provides common functionality used across all server modules:
//! - Configuration types
//! - Error response structures
//! - Common type definitions

pub mod config;
pub mod errors;
pub mod types;

// Re-export commonly used items at crate root
pub use config::{
    AttachmentConfig, AuthConfig, CacheConfig, DatabaseConfig, Environment, LoggingConfig,
    ProviderConfig, ServerConfig, SessionConfig, TokenPolicyConfig,
};
pub use errors::{error_codes, ErrorResponse};
pub use types::{PaginatedResponse, Pagination};
