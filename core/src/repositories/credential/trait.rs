//! Credential repository trait.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::entities::credentials::{CredentialRecord, StoredCredential};
use crate::errors::DomainError;

/// Repository trait for credential records
///
/// Each record is a child of exactly one account. Lookups by username or
/// provider identity are global across accounts.
#[async_trait]
pub trait CredentialRepository: Send + Sync {
    /// Persist a credential record
    ///
    /// Runs a duplicate check first: `(provider_id, provider_name)` for
    /// provider credentials, `username` for password credentials. The check
    /// and the insert are not atomic.
    ///
    /// # Returns
    /// * `Ok(CredentialRecord)` - The stored record
    /// * `Err(DomainError::Conflict)` - A matching credential already exists
    /// * `Err(DomainError)` - Store error
    async fn create(&self, record: CredentialRecord) -> Result<CredentialRecord, DomainError>;

    /// True when a credential with the same identity is already stored
    async fn exists(&self, kind: &StoredCredential) -> Result<bool, DomainError>;

    /// All password credentials registered under `username`
    ///
    /// Normally zero or one; callers treat anything else as no match.
    async fn find_by_username(&self, username: &str)
        -> Result<Vec<CredentialRecord>, DomainError>;

    /// Owning account of a provider identity
    async fn find_account_by_provider(
        &self,
        provider_id: &str,
        provider_name: &str,
    ) -> Result<Option<Uuid>, DomainError>;

    /// Every credential bound to an account
    async fn find_by_account(&self, account_id: Uuid)
        -> Result<Vec<CredentialRecord>, DomainError>;
}
