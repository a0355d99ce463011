use acct_core::domain::entities::token::Token;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Token handed to a client after login or signup
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenResponse {
    /// Opaque value for the `Authorization: token=<value>` header
    pub value: String,
    pub expiry: DateTime<Utc>,
}

impl From<&Token> for TokenResponse {
    fn from(token: &Token) -> Self {
        Self {
            value: token.value(),
            expiry: token.expiry,
        }
    }
}
