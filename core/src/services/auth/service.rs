//! Main authentication service implementation

use std::sync::Arc;

use crate::domain::entities::credentials::CredentialsInput;
use crate::domain::entities::token::Token;
use crate::errors::DomainResult;
use crate::repositories::{CredentialRepository, TokenRepository};
use crate::services::credentials::{CredentialValidator, ProviderVerifier};

/// Authentication service turning a login request into a token
pub struct AuthService<C, P, T>
where
    C: CredentialRepository,
    P: ProviderVerifier,
    T: TokenRepository,
{
    /// Validator resolving credentials to an account
    validator: Arc<CredentialValidator<C, P>>,
    /// Token store minting the session token
    tokens: Arc<T>,
}

impl<C, P, T> AuthService<C, P, T>
where
    C: CredentialRepository,
    P: ProviderVerifier,
    T: TokenRepository,
{
    pub fn new(validator: Arc<CredentialValidator<C, P>>, tokens: Arc<T>) -> Self {
        Self { validator, tokens }
    }

    /// Validate credentials and mint a new token
    ///
    /// # Returns
    /// * `Ok(Token)` - Freshly minted token for the owning account
    /// * `Err(DomainError::Validation)` - Neither credential shape is complete
    /// * `Err(DomainError::Credential)` - Credentials did not match
    pub async fn login(&self, input: CredentialsInput) -> DomainResult<Token> {
        let (credentials, account_key) = input.into_credentials()?;
        let account_id = self.validator.validate(&credentials, account_key).await?;
        let token = self.tokens.create(account_id).await?;

        tracing::info!(%account_id, expiry = %token.expiry, "Issued token on login");
        Ok(token)
    }
}
