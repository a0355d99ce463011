//! Reason enums carried by domain errors
//!
//! Every reason has a stable snake_case code that is safe to log and to
//! return to clients. None of them reveals which half of a credential pair
//! was wrong.

use thiserror::Error;

/// Why a bearer token did not authenticate a request
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthFailure {
    /// No token was presented at all
    #[error("missing token")]
    MissingToken,

    /// Scheme prefix missing or empty token value
    #[error("malformed authorization value")]
    Malformed,

    /// Token value does not decode to a store key
    #[error("invalid token encoding")]
    InvalidTokenEncoding,

    /// Token decodes but no record exists
    #[error("token not found")]
    TokenNotFound,

    /// Owning account key could not be decoded
    #[error("corrupt account reference")]
    CorruptAccountReference,

    /// Token expiry is at or before the current time
    #[error("token expired")]
    Expired,

    /// Token needed rotation and the replacement could not be minted
    #[error("token rotation failed")]
    RotationFailed,
}

impl AuthFailure {
    /// Stable reason code
    pub fn as_str(&self) -> &'static str {
        match self {
            AuthFailure::MissingToken => "missing_token",
            AuthFailure::Malformed => "malformed",
            AuthFailure::InvalidTokenEncoding => "invalid_token_encoding",
            AuthFailure::TokenNotFound => "token_not_found",
            AuthFailure::CorruptAccountReference => "corrupt_account_reference",
            AuthFailure::Expired => "expired",
            AuthFailure::RotationFailed => "rotation_failed",
        }
    }
}

/// Why submitted credentials did not resolve to an account
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationFailure {
    /// Wrong secret, unknown user, ambiguous match or unverifiable record
    #[error("credentials do not match")]
    NoMatch,

    /// Provider name is not supported
    #[error("unknown auth provider")]
    UnknownProvider,

    /// Provider explicitly refused the presented token
    #[error("provider rejected credentials")]
    ProviderRejected,
}

impl ValidationFailure {
    /// Stable reason code
    pub fn as_str(&self) -> &'static str {
        match self {
            ValidationFailure::NoMatch => "no_match",
            ValidationFailure::UnknownProvider => "unknown_provider",
            ValidationFailure::ProviderRejected => "provider_rejected",
        }
    }
}

/// Input validation errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Required field: {field}")]
    RequiredField { field: String },

    #[error("Invalid format: {field}")]
    InvalidFormat { field: String },

    #[error("Credentials must carry provider id, name and token, or username and password")]
    InvalidCredentials,
}
