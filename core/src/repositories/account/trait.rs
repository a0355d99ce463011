//! Account repository trait defining the interface for account persistence.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::entities::account::Account;
use crate::errors::DomainError;

/// Repository trait for Account persistence operations
///
/// Implementations store the lower-cased search filters from
/// [`Account::search_filters`] on every write.
#[async_trait]
pub trait AccountRepository: Send + Sync {
    /// Persist a new account
    async fn create(&self, account: Account) -> Result<Account, DomainError>;

    /// Find an account by its identifier
    ///
    /// # Returns
    /// * `Ok(Some(Account))` - Account found
    /// * `Ok(None)` - No account with this identifier
    /// * `Err(DomainError)` - Store error
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Account>, DomainError>;

    /// Overwrite an existing account
    ///
    /// # Returns
    /// * `Err(DomainError::NotFound)` - The account does not exist
    async fn update(&self, account: Account) -> Result<Account, DomainError>;

    /// Account identifiers in creation order, paged
    async fn list_ids(&self, offset: u32, limit: u32) -> Result<Vec<Uuid>, DomainError>;
}
