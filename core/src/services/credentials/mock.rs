//! Mock implementation of ProviderVerifier for testing

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::RwLock;

use crate::errors::{DomainError, DomainResult, ValidationFailure};

use super::traits::{ProviderVerdict, ProviderVerifier};

/// Accepts tokens registered with [`MockProviderVerifier::allow`]
pub struct MockProviderVerifier {
    /// (provider name, provider id) -> accepted token
    allowed: RwLock<HashMap<(String, String), String>>,
    fail: AtomicBool,
    calls: AtomicUsize,
}

impl MockProviderVerifier {
    pub fn new() -> Self {
        Self {
            allowed: RwLock::new(HashMap::new()),
            fail: AtomicBool::new(false),
            calls: AtomicUsize::new(0),
        }
    }

    /// Accept `token` for `(provider_name, provider_id)`
    pub fn allow(&self, provider_name: &str, provider_id: &str, token: &str) {
        if let Ok(mut allowed) = self.allowed.write() {
            allowed.insert(
                (provider_name.to_string(), provider_id.to_string()),
                token.to_string(),
            );
        }
    }

    /// Simulate a transport failure on every call
    pub fn fail(&self, fail: bool) {
        self.fail.store(fail, Ordering::SeqCst);
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl Default for MockProviderVerifier {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ProviderVerifier for MockProviderVerifier {
    async fn verify(
        &self,
        provider_name: &str,
        provider_id: &str,
        provider_token: &str,
    ) -> DomainResult<ProviderVerdict> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.fail.load(Ordering::SeqCst) {
            return Err(DomainError::internal("provider unreachable"));
        }
        let allowed = self
            .allowed
            .read()
            .map_err(|_| DomainError::internal("mock lock poisoned"))?;
        let known_provider = allowed.keys().any(|(name, _)| name == provider_name);
        let verdict = match allowed.get(&(provider_name.to_string(), provider_id.to_string())) {
            Some(token) if token == provider_token => ProviderVerdict::Verified,
            _ if !known_provider => ProviderVerdict::Rejected(ValidationFailure::UnknownProvider),
            _ => ProviderVerdict::Rejected(ValidationFailure::ProviderRejected),
        };
        Ok(verdict)
    }
}
