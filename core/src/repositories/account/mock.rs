//! Mock implementation of AccountRepository for testing

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::domain::entities::account::Account;
use crate::errors::DomainError;

use super::r#trait::AccountRepository;

/// Mock account repository for testing
pub struct MockAccountRepository {
    accounts: Arc<RwLock<HashMap<Uuid, Account>>>,
    order: Arc<RwLock<Vec<Uuid>>>,
    fetch_delay: RwLock<Option<Duration>>,
}

impl MockAccountRepository {
    pub fn new() -> Self {
        Self {
            accounts: Arc::new(RwLock::new(HashMap::new())),
            order: Arc::new(RwLock::new(Vec::new())),
            fetch_delay: RwLock::new(None),
        }
    }

    /// Delay every `find_by_id` by `delay`
    pub async fn set_fetch_delay(&self, delay: Duration) {
        *self.fetch_delay.write().await = Some(delay);
    }

    /// Drop an account while keeping its id listed
    pub async fn forget(&self, id: Uuid) {
        self.accounts.write().await.remove(&id);
    }
}

impl Default for MockAccountRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl AccountRepository for MockAccountRepository {
    async fn create(&self, account: Account) -> Result<Account, DomainError> {
        let mut accounts = self.accounts.write().await;
        if accounts.contains_key(&account.id) {
            return Err(DomainError::Conflict {
                message: "Account already exists".to_string(),
            });
        }
        accounts.insert(account.id, account.clone());
        self.order.write().await.push(account.id);
        Ok(account)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Account>, DomainError> {
        let delay = *self.fetch_delay.read().await;
        if let Some(delay) = delay {
            tokio::time::sleep(delay).await;
        }
        Ok(self.accounts.read().await.get(&id).cloned())
    }

    async fn update(&self, account: Account) -> Result<Account, DomainError> {
        let mut accounts = self.accounts.write().await;

        if !accounts.contains_key(&account.id) {
            return Err(DomainError::NotFound {
                resource: "Account".to_string(),
            });
        }

        accounts.insert(account.id, account.clone());
        Ok(account)
    }

    async fn list_ids(&self, offset: u32, limit: u32) -> Result<Vec<Uuid>, DomainError> {
        let order = self.order.read().await;
        Ok(order
            .iter()
            .skip(offset as usize)
            .take(limit as usize)
            .copied()
            .collect())
    }
}
