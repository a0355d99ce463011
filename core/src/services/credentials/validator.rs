//! Credential validator implementation

use std::sync::Arc;
use uuid::Uuid;

use crate::domain::entities::credentials::{Credentials, StoredCredential};
use crate::errors::{DomainError, DomainResult, ValidationFailure};
use crate::repositories::CredentialRepository;

use super::password::verify_password;
use super::traits::{ProviderVerdict, ProviderVerifier};

/// Resolves credentials to the owning account
pub struct CredentialValidator<C, P>
where
    C: CredentialRepository,
    P: ProviderVerifier,
{
    credentials: Arc<C>,
    providers: Arc<P>,
}

impl<C, P> CredentialValidator<C, P>
where
    C: CredentialRepository,
    P: ProviderVerifier,
{
    pub fn new(credentials: Arc<C>, providers: Arc<P>) -> Self {
        Self {
            credentials,
            providers,
        }
    }

    /// Validates credentials and returns the owning account.
    ///
    /// `account_key` is only honoured for provider credentials, after the
    /// provider has verified the token and the account is confirmed to hold
    /// a matching provider record.
    pub async fn validate(
        &self,
        credentials: &Credentials,
        account_key: Option<Uuid>,
    ) -> DomainResult<Uuid> {
        match credentials {
            Credentials::Password { username, password } => {
                self.validate_password(username, password).await
            }
            Credentials::Provider {
                provider_id,
                provider_name,
                provider_token,
            } => {
                self.verify_with_provider(provider_name, provider_id, provider_token)
                    .await?;
                self.resolve_provider_account(provider_id, provider_name, account_key)
                    .await
            }
        }
    }

    /// Asks the named provider to confirm the token
    pub async fn verify_with_provider(
        &self,
        provider_name: &str,
        provider_id: &str,
        provider_token: &str,
    ) -> DomainResult<()> {
        match self
            .providers
            .verify(provider_name, provider_id, provider_token)
            .await?
        {
            ProviderVerdict::Verified => Ok(()),
            ProviderVerdict::Rejected(reason) => {
                tracing::info!(provider = provider_name, reason = reason.as_str(), "Provider rejected credentials");
                Err(reason.into())
            }
        }
    }

    async fn validate_password(&self, username: &str, password: &str) -> DomainResult<Uuid> {
        let records = self.credentials.find_by_username(username).await?;
        let record = match records.as_slice() {
            [record] => record,
            [] => return Err(ValidationFailure::NoMatch.into()),
            _ => {
                tracing::warn!(count = records.len(), "Ambiguous username, refusing match");
                return Err(ValidationFailure::NoMatch.into());
            }
        };

        let StoredCredential::Password { password_hash, .. } = &record.kind else {
            return Err(ValidationFailure::NoMatch.into());
        };

        match verify_password(password, password_hash) {
            Ok(true) => Ok(record.account_id),
            Ok(false) => Err(ValidationFailure::NoMatch.into()),
            Err(err) => {
                tracing::warn!(error = %err, account_id = %record.account_id, "Stored password hash unusable");
                Err(ValidationFailure::NoMatch.into())
            }
        }
    }

    async fn resolve_provider_account(
        &self,
        provider_id: &str,
        provider_name: &str,
        account_key: Option<Uuid>,
    ) -> DomainResult<Uuid> {
        match account_key {
            Some(account_id) => {
                let records = self.credentials.find_by_account(account_id).await?;
                if records
                    .iter()
                    .any(|r| r.kind.matches_provider(provider_id, provider_name))
                {
                    Ok(account_id)
                } else {
                    tracing::warn!(%account_id, "Supplied account key holds no matching provider credential");
                    Err(ValidationFailure::NoMatch.into())
                }
            }
            None => self
                .credentials
                .find_account_by_provider(provider_id, provider_name)
                .await?
                .ok_or(DomainError::Credential(ValidationFailure::NoMatch)),
        }
    }
}
