//! Mock implementation of TokenCache for testing

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::RwLock;

use crate::domain::entities::token::TokenDetails;
use crate::errors::DomainError;

use super::r#trait::{CacheLookup, TokenCache};

/// In-memory cache recording the TTL of every write
pub struct MockTokenCache {
    entries: Arc<RwLock<HashMap<String, (TokenDetails, Duration)>>>,
    fail_get: AtomicBool,
    fail_put: AtomicBool,
    put_calls: AtomicUsize,
}

impl MockTokenCache {
    pub fn new() -> Self {
        Self {
            entries: Arc::new(RwLock::new(HashMap::new())),
            fail_get: AtomicBool::new(false),
            fail_put: AtomicBool::new(false),
            put_calls: AtomicUsize::new(0),
        }
    }

    /// Seed an entry directly
    pub async fn seed(&self, token: &str, details: TokenDetails, ttl: Duration) {
        self.entries
            .write()
            .await
            .insert(token.to_string(), (details, ttl));
    }

    /// Entry stored under `token`, with the TTL it was written with
    pub async fn entry(&self, token: &str) -> Option<(TokenDetails, Duration)> {
        self.entries.read().await.get(token).cloned()
    }

    pub fn fail_get(&self, fail: bool) {
        self.fail_get.store(fail, Ordering::SeqCst);
    }

    pub fn fail_put(&self, fail: bool) {
        self.fail_put.store(fail, Ordering::SeqCst);
    }

    /// Number of `put` calls, including skipped and failed ones
    pub fn put_calls(&self) -> usize {
        self.put_calls.load(Ordering::SeqCst)
    }
}

impl Default for MockTokenCache {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl TokenCache for MockTokenCache {
    async fn get(&self, token: &str) -> Result<CacheLookup, DomainError> {
        if self.fail_get.load(Ordering::SeqCst) {
            return Err(DomainError::internal("cache unavailable"));
        }
        Ok(match self.entries.read().await.get(token) {
            Some((details, _)) => CacheLookup::Hit(details.clone()),
            None => CacheLookup::Miss,
        })
    }

    async fn put(
        &self,
        token: &str,
        details: &TokenDetails,
        ttl: Duration,
    ) -> Result<(), DomainError> {
        self.put_calls.fetch_add(1, Ordering::SeqCst);
        if self.fail_put.load(Ordering::SeqCst) {
            return Err(DomainError::internal("cache unavailable"));
        }
        if ttl.is_zero() {
            return Ok(());
        }
        self.entries
            .write()
            .await
            .insert(token.to_string(), (details.clone(), ttl));
        Ok(())
    }
}
