//! # Account Core
//!
//! Domain layer of the account backend: entities, repository and cache
//! ports, the token authenticator, credential validation and the account
//! and login services.

pub mod domain;
pub mod errors;
pub mod repositories;
pub mod services;

// Re-export commonly used types for convenience
pub use domain::*;
pub use errors::*;
pub use repositories::*;
pub use services::*;
