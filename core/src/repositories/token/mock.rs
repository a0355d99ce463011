//! Mock implementation of TokenRepository for testing

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::domain::entities::token::Token;
use crate::errors::DomainError;

use super::r#trait::TokenRepository;

/// In-memory token store with failure injection
pub struct MockTokenRepository {
    tokens: Arc<RwLock<HashMap<Uuid, Token>>>,
    fail_get: AtomicBool,
    fail_create: AtomicBool,
    get_calls: AtomicUsize,
}

impl MockTokenRepository {
    /// Create a new mock repository
    pub fn new() -> Self {
        Self {
            tokens: Arc::new(RwLock::new(HashMap::new())),
            fail_get: AtomicBool::new(false),
            fail_create: AtomicBool::new(false),
            get_calls: AtomicUsize::new(0),
        }
    }

    /// Insert a token with an arbitrary expiry
    pub async fn insert(&self, account_id: Uuid, expiry: DateTime<Utc>) -> Token {
        let token = Token {
            id: Uuid::new_v4(),
            account_id,
            expiry,
            created_at: Utc::now(),
        };
        self.tokens.write().await.insert(token.id, token.clone());
        token
    }

    /// Make every `get` fail
    pub fn fail_get(&self, fail: bool) {
        self.fail_get.store(fail, Ordering::SeqCst);
    }

    /// Make every `create` fail
    pub fn fail_create(&self, fail: bool) {
        self.fail_create.store(fail, Ordering::SeqCst);
    }

    /// Number of `get` calls seen so far
    pub fn get_calls(&self) -> usize {
        self.get_calls.load(Ordering::SeqCst)
    }

    /// All tokens belonging to an account
    pub async fn tokens_for(&self, account_id: Uuid) -> Vec<Token> {
        self.tokens
            .read()
            .await
            .values()
            .filter(|t| t.account_id == account_id)
            .cloned()
            .collect()
    }
}

impl Default for MockTokenRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl TokenRepository for MockTokenRepository {
    async fn create(&self, account_id: Uuid) -> Result<Token, DomainError> {
        if self.fail_create.load(Ordering::SeqCst) {
            return Err(DomainError::internal("token store unavailable"));
        }
        let token = Token::issue(account_id, Utc::now());
        self.tokens.write().await.insert(token.id, token.clone());
        Ok(token)
    }

    async fn get(&self, id: Uuid) -> Result<Option<Token>, DomainError> {
        self.get_calls.fetch_add(1, Ordering::SeqCst);
        if self.fail_get.load(Ordering::SeqCst) {
            return Err(DomainError::internal("token store unavailable"));
        }
        Ok(self.tokens.read().await.get(&id).cloned())
    }
}
