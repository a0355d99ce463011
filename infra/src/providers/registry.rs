//! Dispatches provider verification by provider name.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;

use acct_core::errors::{DomainResult, ValidationFailure};
use acct_core::services::credentials::{ProviderVerdict, ProviderVerifier};

use super::facebook::{FacebookVerifier, PROVIDER_NAME as FACEBOOK};
use crate::config::ProviderConfig;
use crate::InfrastructureError;

/// Verifiers keyed by lower-cased provider name
#[derive(Clone, Default)]
pub struct ProviderRegistry {
    verifiers: HashMap<String, Arc<dyn ProviderVerifier>>,
}

impl ProviderRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry with every supported provider
    pub fn from_config(config: &ProviderConfig) -> Result<Self, InfrastructureError> {
        Ok(Self::new().register(FACEBOOK, Arc::new(FacebookVerifier::new(config)?)))
    }

    pub fn register(mut self, name: &str, verifier: Arc<dyn ProviderVerifier>) -> Self {
        self.verifiers.insert(name.to_lowercase(), verifier);
        self
    }

    pub fn supports(&self, name: &str) -> bool {
        self.verifiers.contains_key(&name.to_lowercase())
    }
}

#[async_trait]
impl ProviderVerifier for ProviderRegistry {
    async fn verify(
        &self,
        provider_name: &str,
        provider_id: &str,
        provider_token: &str,
    ) -> DomainResult<ProviderVerdict> {
        match self.verifiers.get(&provider_name.to_lowercase()) {
            Some(verifier) => {
                verifier
                    .verify(provider_name, provider_id, provider_token)
                    .await
            }
            None => {
                tracing::info!(provider = provider_name, "Unknown auth provider");
                Ok(ProviderVerdict::Rejected(ValidationFailure::UnknownProvider))
            }
        }
    }
}
