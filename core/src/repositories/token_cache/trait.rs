//! Token cache port.
//!
//! The cache holds [`TokenDetails`] keyed by the raw token value. It is
//! never authoritative: callers fall back to the token store on a miss
//! or on any cache error.

use async_trait::async_trait;
use std::time::Duration;

use crate::domain::entities::token::TokenDetails;
use crate::errors::DomainError;

/// Outcome of a cache read that reached the cache
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CacheLookup {
    Hit(TokenDetails),
    Miss,
}

#[async_trait]
pub trait TokenCache: Send + Sync {
    /// Look up the details cached under a raw token value
    ///
    /// # Returns
    /// * `Ok(CacheLookup::Hit)` - Entry present and decodable
    /// * `Ok(CacheLookup::Miss)` - No entry
    /// * `Err(DomainError)` - Cache unavailable or entry corrupt
    async fn get(&self, token: &str) -> Result<CacheLookup, DomainError>;

    /// Store details under a raw token value for `ttl`
    ///
    /// Implementations must not write an entry when `ttl` is zero.
    async fn put(&self, token: &str, details: &TokenDetails, ttl: Duration)
        -> Result<(), DomainError>;
}
