//! Mock implementation of CredentialRepository for testing

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::domain::entities::credentials::{CredentialRecord, StoredCredential};
use crate::errors::DomainError;

use super::r#trait::CredentialRepository;

/// Mock credential repository for testing
pub struct MockCredentialRepository {
    records: Arc<RwLock<HashMap<Uuid, CredentialRecord>>>,
    fail: AtomicBool,
}

impl MockCredentialRepository {
    pub fn new() -> Self {
        Self {
            records: Arc::new(RwLock::new(HashMap::new())),
            fail: AtomicBool::new(false),
        }
    }

    /// Insert a record bypassing the duplicate check
    pub async fn insert_unchecked(&self, record: CredentialRecord) {
        self.records.write().await.insert(record.id, record);
    }

    /// Make every call fail
    pub fn fail(&self, fail: bool) {
        self.fail.store(fail, Ordering::SeqCst);
    }

    pub async fn count(&self) -> usize {
        self.records.read().await.len()
    }

    fn check(&self) -> Result<(), DomainError> {
        if self.fail.load(Ordering::SeqCst) {
            return Err(DomainError::internal("credential store unavailable"));
        }
        Ok(())
    }
}

impl Default for MockCredentialRepository {
    fn default() -> Self {
        Self::new()
    }
}

fn same_identity(a: &StoredCredential, b: &StoredCredential) -> bool {
    match (a, b) {
        (
            StoredCredential::Password { username: x, .. },
            StoredCredential::Password { username: y, .. },
        ) => x == y,
        (StoredCredential::Provider { provider_id, provider_name }, other) => {
            other.matches_provider(provider_id, provider_name)
        }
        _ => false,
    }
}

#[async_trait]
impl CredentialRepository for MockCredentialRepository {
    async fn create(&self, record: CredentialRecord) -> Result<CredentialRecord, DomainError> {
        self.check()?;
        let mut records = self.records.write().await;

        if records.values().any(|r| same_identity(&r.kind, &record.kind)) {
            return Err(DomainError::Conflict {
                message: "Credential already registered".to_string(),
            });
        }

        records.insert(record.id, record.clone());
        Ok(record)
    }

    async fn exists(&self, kind: &StoredCredential) -> Result<bool, DomainError> {
        self.check()?;
        let records = self.records.read().await;
        Ok(records.values().any(|r| same_identity(&r.kind, kind)))
    }

    async fn find_by_username(
        &self,
        username: &str,
    ) -> Result<Vec<CredentialRecord>, DomainError> {
        self.check()?;
        let records = self.records.read().await;
        Ok(records
            .values()
            .filter(|r| {
                matches!(&r.kind, StoredCredential::Password { username: u, .. } if u == username)
            })
            .cloned()
            .collect())
    }

    async fn find_account_by_provider(
        &self,
        provider_id: &str,
        provider_name: &str,
    ) -> Result<Option<Uuid>, DomainError> {
        self.check()?;
        let records = self.records.read().await;
        Ok(records
            .values()
            .find(|r| r.kind.matches_provider(provider_id, provider_name))
            .map(|r| r.account_id))
    }

    async fn find_by_account(
        &self,
        account_id: Uuid,
    ) -> Result<Vec<CredentialRecord>, DomainError> {
        self.check()?;
        let records = self.records.read().await;
        Ok(records
            .values()
            .filter(|r| r.account_id == account_id)
            .cloned()
            .collect())
    }
}
