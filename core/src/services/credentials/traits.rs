//! Traits for external identity provider integration

use async_trait::async_trait;

use crate::errors::{DomainResult, ValidationFailure};

/// Answer of an identity provider about a presented token
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProviderVerdict {
    /// The token proves the claimed provider subject
    Verified,
    /// The provider refused, or is not supported
    Rejected(ValidationFailure),
}

/// Trait for verifying provider tokens with the issuing identity provider
#[async_trait]
pub trait ProviderVerifier: Send + Sync {
    /// Check that `provider_token` was issued to `provider_id` by `provider_name`
    ///
    /// Transport failures are returned as errors, not as rejections.
    async fn verify(
        &self,
        provider_name: &str,
        provider_id: &str,
        provider_token: &str,
    ) -> DomainResult<ProviderVerdict>;
}
