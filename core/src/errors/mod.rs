//! Domain-specific error types and error handling.

mod types;


pub use types::{AuthFailure, ValidationError, ValidationFailure};

use thiserror::Error;

/// Core domain errors
#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Malformed request: {message}")]
    Malformed { message: String },

    #[error("Conflict: {message}")]
    Conflict { message: String },

    #[error("Resource not found: {resource}")]
    NotFound { resource: String },

    #[error("Timed out: {operation}")]
    Timeout { operation: String },

    #[error("Internal error: {message}")]
    Internal { message: String },

    // Bridge to specific error types
    #[error("Authentication failed: {0}")]
    Auth(#[from] AuthFailure),

    #[error("Credential validation failed: {0}")]
    Credential(#[from] ValidationFailure),

    #[error(transparent)]
    Validation(#[from] ValidationError),
}

/// Coarse error taxonomy the transport layer maps to status codes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Malformed,
    Unauthenticated,
    Conflict,
    NotFound,
    Timeout,
    Internal,
}

impl DomainError {
    /// Shorthand for an internal error
    pub fn internal(message: impl Into<String>) -> Self {
        DomainError::Internal {
            message: message.into(),
        }
    }

    /// Taxonomy bucket of this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            DomainError::Malformed { .. } | DomainError::Validation(_) => ErrorKind::Malformed,
            DomainError::Conflict { .. } => ErrorKind::Conflict,
            DomainError::NotFound { .. } => ErrorKind::NotFound,
            DomainError::Timeout { .. } => ErrorKind::Timeout,
            DomainError::Internal { .. } => ErrorKind::Internal,
            DomainError::Credential(_) => ErrorKind::Unauthenticated,
            DomainError::Auth(failure) => match failure {
                AuthFailure::Malformed => ErrorKind::Malformed,
                AuthFailure::RotationFailed => ErrorKind::Internal,
                _ => ErrorKind::Unauthenticated,
            },
        }
    }

    /// Authentication failure reason, if this is one
    pub fn auth_failure(&self) -> Option<AuthFailure> {
        match self {
            DomainError::Auth(failure) => Some(*failure),
            _ => None,
        }
    }
}

pub type DomainResult<T> = Result<T, DomainError>;
