//! Main account service implementation

use futures::future::try_join_all;
use std::sync::Arc;
use uuid::Uuid;

use crate::domain::entities::account::{Account, AccountProfile};
use crate::domain::entities::attachment::{Attachment, AttachmentSource};
use crate::domain::entities::credentials::{
    CredentialRecord, Credentials, CredentialsInput, StoredCredential,
};
use crate::domain::entities::token::Token;
use crate::errors::{DomainError, DomainResult};
use crate::repositories::{AccountRepository, CredentialRepository, TokenRepository};
use crate::services::credentials::{hash_password, CredentialValidator, ProviderVerifier};

use super::config::AccountServiceConfig;
use super::traits::AttachmentStore;

/// Account service for signup and account management
pub struct AccountService<A, C, P, T, S>
where
    A: AccountRepository,
    C: CredentialRepository,
    P: ProviderVerifier,
    T: TokenRepository,
    S: AttachmentStore,
{
    accounts: Arc<A>,
    credentials: Arc<C>,
    validator: Arc<CredentialValidator<C, P>>,
    tokens: Arc<T>,
    attachments: Arc<S>,
    config: AccountServiceConfig,
}

impl<A, C, P, T, S> AccountService<A, C, P, T, S>
where
    A: AccountRepository,
    C: CredentialRepository,
    P: ProviderVerifier,
    T: TokenRepository,
    S: AttachmentStore,
{
    pub fn new(
        accounts: Arc<A>,
        credentials: Arc<C>,
        validator: Arc<CredentialValidator<C, P>>,
        tokens: Arc<T>,
        attachments: Arc<S>,
        config: AccountServiceConfig,
    ) -> Self {
        Self {
            accounts,
            credentials,
            validator,
            tokens,
            attachments,
            config,
        }
    }

    /// Create an account with its first credential and log it in
    ///
    /// Provider credentials are verified with the provider before anything
    /// is written. The duplicate check and the credential insert are not
    /// atomic; two concurrent signups with the same identity can both pass.
    ///
    /// # Returns
    /// * `Ok(Token)` - Token for the new account
    /// * `Err(DomainError::Validation)` - Credential shape incomplete
    /// * `Err(DomainError::Credential)` - Provider rejected the token
    /// * `Err(DomainError::Conflict)` - Credential already registered
    pub async fn signup(
        &self,
        profile: AccountProfile,
        input: CredentialsInput,
    ) -> DomainResult<Token> {
        let (credentials, _) = input.into_credentials()?;

        let stored = match credentials {
            Credentials::Provider {
                provider_id,
                provider_name,
                provider_token,
            } => {
                self.validator
                    .verify_with_provider(&provider_name, &provider_id, &provider_token)
                    .await?;
                StoredCredential::Provider {
                    provider_id,
                    provider_name,
                }
            }
            Credentials::Password { username, password } => StoredCredential::Password {
                username,
                password_hash: hash_password(&password)?,
            },
        };

        if self.credentials.exists(&stored).await? {
            return Err(DomainError::Conflict {
                message: "Credential already registered".to_string(),
            });
        }

        let account = self.accounts.create(Account::new(profile)).await?;
        self.credentials
            .create(CredentialRecord::new(account.id, stored))
            .await?;
        let token = self.tokens.create(account.id).await?;

        tracing::info!(account_id = %account.id, "Account created");
        Ok(token)
    }

    /// Fetch an account that must exist
    pub async fn get(&self, account_id: Uuid) -> DomainResult<Account> {
        self.accounts
            .find_by_id(account_id)
            .await?
            .ok_or_else(|| DomainError::NotFound {
                resource: format!("Account {}", account_id),
            })
    }

    /// Store an attachment and make it the account photo
    pub async fn attach_photo(
        &self,
        account_id: Uuid,
        source: AttachmentSource,
    ) -> DomainResult<Attachment> {
        let mut account = self.get(account_id).await?;

        let attachment = match source {
            AttachmentSource::Data {
                bytes,
                content_type,
            } => {
                self.attachments
                    .create_with_data(bytes, &content_type)
                    .await?
            }
            AttachmentSource::Url(url) => self.attachments.create_with_url(&url).await?,
        };

        account.set_photo(attachment.clone());
        self.accounts.update(account).await?;

        tracing::debug!(%account_id, attachment = %attachment.name, "Photo attached");
        Ok(attachment)
    }

    /// One page of accounts, fetched in parallel under a time ceiling
    ///
    /// # Returns
    /// * `Err(DomainError::Timeout)` - The ceiling elapsed; partial results are dropped
    /// * `Err(DomainError::NotFound)` - A listed account vanished mid-fetch
    pub async fn list_accounts(&self, offset: u32, limit: u32) -> DomainResult<Vec<Account>> {
        let fetch_page = async {
            let ids = self.accounts.list_ids(offset, limit).await?;
            try_join_all(ids.into_iter().map(|id| self.get(id))).await
        };

        match tokio::time::timeout(self.config.list_timeout, fetch_page).await {
            Ok(result) => result,
            Err(_) => {
                tracing::warn!(
                    offset,
                    limit,
                    timeout_ms = self.config.list_timeout.as_millis() as u64,
                    "Account listing timed out"
                );
                Err(DomainError::Timeout {
                    operation: "list accounts".to_string(),
                })
            }
        }
    }
}
