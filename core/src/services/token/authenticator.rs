//! Token authenticator implementation

use chrono::{DateTime, Utc};
use std::sync::Arc;
use uuid::Uuid;

use crate::domain::entities::token::{
    decode_account_key, decode_token_key, RotatedToken, TokenDetails,
};
use crate::errors::{AuthFailure, DomainError, DomainResult};
use crate::repositories::{CacheLookup, TokenCache, TokenRepository};

use super::config::AuthenticatorConfig;

/// Identity established for a request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Authenticated {
    pub account_id: Uuid,
    /// Expiry of the presented token
    pub token_expiry: DateTime<Utc>,
    /// Replacement token when the presented one was close to expiry
    pub rotated: Option<RotatedToken>,
}

/// Outcome of resolving a raw token value to its details
#[derive(Debug)]
pub enum Resolution {
    /// Served from the cache
    Hit(TokenDetails),
    /// Served from the token store after a cache miss or cache failure
    Fallback(TokenDetails),
    /// The value does not decode to a store key
    Undecodable,
    /// The store has no such token
    NotFound,
    /// Neither the cache nor the store could answer
    Error(DomainError),
}

/// Strips the scheme prefix from an `Authorization` value.
///
/// The remaining token must be non-empty so an empty string never becomes
/// a cache key.
pub fn parse_auth_header<'a>(header: Option<&'a str>, prefix: &str) -> Result<&'a str, AuthFailure> {
    let header = header.ok_or(AuthFailure::MissingToken)?;
    match header.strip_prefix(prefix) {
        Some(token) if !token.is_empty() => Ok(token),
        _ => Err(AuthFailure::Malformed),
    }
}

/// Validates bearer tokens on every request
pub struct TokenAuthenticator<R, C>
where
    R: TokenRepository,
    C: TokenCache,
{
    tokens: Arc<R>,
    cache: Arc<C>,
    config: AuthenticatorConfig,
}

impl<R, C> TokenAuthenticator<R, C>
where
    R: TokenRepository,
    C: TokenCache,
{
    pub fn new(tokens: Arc<R>, cache: Arc<C>, config: AuthenticatorConfig) -> Self {
        Self {
            tokens,
            cache,
            config,
        }
    }

    pub fn config(&self) -> &AuthenticatorConfig {
        &self.config
    }

    /// Authenticates a raw `Authorization` header value
    pub async fn authenticate(&self, header: Option<&str>) -> DomainResult<Authenticated> {
        let token = parse_auth_header(header, &self.config.header_prefix)?;
        self.authenticate_token(token).await
    }

    /// Authenticates a bare token value, e.g. one read from a cookie
    pub async fn authenticate_token(&self, token: &str) -> DomainResult<Authenticated> {
        if token.is_empty() {
            return Err(AuthFailure::Malformed.into());
        }

        let details = match self.resolve(token).await {
            Resolution::Hit(details) | Resolution::Fallback(details) => details,
            Resolution::Undecodable => return Err(AuthFailure::InvalidTokenEncoding.into()),
            Resolution::NotFound => return Err(AuthFailure::TokenNotFound.into()),
            Resolution::Error(err) => return Err(err),
        };

        let account_id = match decode_account_key(&details.account_key) {
            Ok(id) => id,
            Err(failure) => {
                tracing::warn!(account_key = %details.account_key, "Token references a corrupt account key");
                return Err(failure.into());
            }
        };

        let now = Utc::now();
        if details.is_expired_at(now) {
            tracing::info!(%account_id, expiry = %details.expiry, "Rejected expired token");
            return Err(AuthFailure::Expired.into());
        }

        let rotated = if details.expires_within(self.config.rotation_horizon, now) {
            Some(self.rotate(account_id).await?)
        } else {
            None
        };

        Ok(Authenticated {
            account_id,
            token_expiry: details.expiry,
            rotated,
        })
    }

    /// Cache-aside lookup of the details behind a raw token value
    pub async fn resolve(&self, token: &str) -> Resolution {
        let cache_error = match self.cache.get(token).await {
            Ok(CacheLookup::Hit(details)) => return Resolution::Hit(details),
            Ok(CacheLookup::Miss) => None,
            Err(err) => {
                tracing::warn!(error = %err, "Token cache lookup failed, falling back to store");
                Some(err)
            }
        };

        let key = match decode_token_key(token) {
            Ok(key) => key,
            Err(_) => return Resolution::Undecodable,
        };

        let stored = match self.tokens.get(key).await {
            Ok(Some(stored)) => stored,
            Ok(None) => return Resolution::NotFound,
            Err(err) => {
                tracing::error!(
                    error = %err,
                    cache_error = ?cache_error,
                    "Token store lookup failed"
                );
                return Resolution::Error(DomainError::internal("token lookup failed"));
            }
        };

        let details = TokenDetails::from_token(&stored);
        match details.ttl_at(Utc::now()) {
            Some(ttl) => {
                if let Err(err) = self.cache.put(token, &details, ttl).await {
                    tracing::warn!(error = %err, "Failed to fill token cache");
                }
            }
            None => tracing::debug!("Skipping cache fill for expired token"),
        }

        Resolution::Fallback(details)
    }

    async fn rotate(&self, account_id: Uuid) -> DomainResult<RotatedToken> {
        match self.tokens.create(account_id).await {
            Ok(token) => {
                tracing::info!(%account_id, expiry = %token.expiry, "Rotated token nearing expiry");
                Ok(RotatedToken::from(&token))
            }
            Err(err) => {
                tracing::error!(%account_id, error = %err, "Token rotation failed");
                Err(AuthFailure::RotationFailed.into())
            }
        }
    }
}
