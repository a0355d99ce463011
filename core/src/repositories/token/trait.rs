//! Token repository trait defining the durable store for bearer tokens.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::entities::token::Token;
use crate::errors::DomainError;

/// Repository trait for token persistence
///
/// The store is the source of truth for tokens. Each token is a child
/// of exactly one account; the store assigns the key and stamps the expiry.
#[async_trait]
pub trait TokenRepository: Send + Sync {
    /// Mint and persist a new token for an account
    ///
    /// The stored token expires two months after creation. Existing tokens
    /// for the account are left untouched.
    ///
    /// # Returns
    /// * `Ok(Token)` - The persisted token with its key and expiry
    /// * `Err(DomainError)` - Store error
    async fn create(&self, account_id: Uuid) -> Result<Token, DomainError>;

    /// Fetch a token by its store key
    ///
    /// # Returns
    /// * `Ok(Some(Token))` - Token found
    /// * `Ok(None)` - No token with this key
    /// * `Err(DomainError)` - Store error
    async fn get(&self, id: Uuid) -> Result<Option<Token>, DomainError>;
}
