//! Redis-backed token cache
//!
//! Entries are JSON-encoded [`TokenDetails`] stored under `token:<value>`
//! with `SET EX`, so Redis evicts them when the token expires.

use async_trait::async_trait;
use std::time::Duration;

use acct_core::domain::entities::token::TokenDetails;
use acct_core::errors::DomainError;
use acct_core::repositories::{CacheLookup, TokenCache};

use super::redis_client::RedisClient;
use crate::InfrastructureError;

const KEY_NAMESPACE: &str = "token";

/// Token cache on top of [`RedisClient`]
#[derive(Clone)]
pub struct RedisTokenCache {
    client: RedisClient,
}

impl RedisTokenCache {
    pub fn new(client: RedisClient) -> Self {
        Self { client }
    }
}

/// Cache key for a raw token value
pub fn token_key(token: &str) -> String {
    format!("{}:{}", KEY_NAMESPACE, token)
}

/// Whole seconds to keep an entry, rounded up so sub-second TTLs still expire
pub fn ttl_seconds(ttl: Duration) -> u64 {
    let secs = ttl.as_secs();
    if ttl.subsec_nanos() > 0 {
        secs + 1
    } else {
        secs
    }
}

pub(crate) fn decode_entry(raw: &str) -> Result<TokenDetails, InfrastructureError> {
    Ok(serde_json::from_str(raw)?)
}

#[async_trait]
impl TokenCache for RedisTokenCache {
    async fn get(&self, token: &str) -> Result<CacheLookup, DomainError> {
        match self.client.get(&token_key(token)).await? {
            Some(raw) => {
                let details = decode_entry(&raw).map_err(|e| {
                    tracing::warn!(error = %e, "Discarding undecodable token cache entry");
                    DomainError::from(e)
                })?;
                Ok(CacheLookup::Hit(details))
            }
            None => Ok(CacheLookup::Miss),
        }
    }

    async fn put(
        &self,
        token: &str,
        details: &TokenDetails,
        ttl: Duration,
    ) -> Result<(), DomainError> {
        if ttl.is_zero() {
            tracing::debug!("Not caching token with no remaining lifetime");
            return Ok(());
        }

        let raw = serde_json::to_string(details).map_err(InfrastructureError::from)?;
        self.client
            .set_with_expiry(&token_key(token), &raw, ttl_seconds(ttl))
            .await?;
        Ok(())
    }
}
