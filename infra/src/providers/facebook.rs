//! Facebook provider verification via the Graph API.
//!
//! `GET {graph_url}/me?fields=id&access_token=...` must answer with the id
//! the client claimed.

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::Deserialize;
use std::time::Duration;

use acct_core::errors::{DomainError, DomainResult, ValidationFailure};
use acct_core::services::credentials::{ProviderVerdict, ProviderVerifier};

use crate::config::ProviderConfig;
use crate::InfrastructureError;

/// Provider name this verifier answers for
pub const PROVIDER_NAME: &str = "facebook";

#[derive(Debug, Deserialize)]
pub(crate) struct GraphMe {
    pub id: String,
}

/// Maps a Graph API answer to a verdict
pub(crate) fn classify(
    status: StatusCode,
    returned_id: Option<&str>,
    expected_id: &str,
) -> DomainResult<ProviderVerdict> {
    if status.is_success() {
        return Ok(match returned_id {
            Some(id) if id == expected_id => ProviderVerdict::Verified,
            _ => ProviderVerdict::Rejected(ValidationFailure::ProviderRejected),
        });
    }
    if status.is_client_error() {
        return Ok(ProviderVerdict::Rejected(ValidationFailure::ProviderRejected));
    }
    Err(DomainError::internal(format!(
        "Facebook Graph API answered {}",
        status
    )))
}

/// Verifies Facebook access tokens
#[derive(Clone)]
pub struct FacebookVerifier {
    client: Client,
    graph_url: String,
}

impl FacebookVerifier {
    pub fn new(config: &ProviderConfig) -> Result<Self, InfrastructureError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()?;
        Ok(Self::with_client(client, &config.facebook_graph_url))
    }

    pub fn with_client(client: Client, graph_url: &str) -> Self {
        Self {
            client,
            graph_url: graph_url.trim_end_matches('/').to_string(),
        }
    }

    fn me_url(&self) -> String {
        format!("{}/me", self.graph_url)
    }
}

#[async_trait]
impl ProviderVerifier for FacebookVerifier {
    async fn verify(
        &self,
        _provider_name: &str,
        provider_id: &str,
        provider_token: &str,
    ) -> DomainResult<ProviderVerdict> {
        let response = self
            .client
            .get(self.me_url())
            .query(&[("fields", "id"), ("access_token", provider_token)])
            .send()
            .await
            .map_err(|e| {
                // The request URL carries the access token
                let e = e.without_url();
                tracing::error!(error = %e, "Facebook Graph API request failed");
                DomainError::from(InfrastructureError::Http(e))
            })?;

        let status = response.status();
        let returned_id = if status.is_success() {
            let me: GraphMe = response
                .json()
                .await
                .map_err(|e| DomainError::from(InfrastructureError::Http(e.without_url())))?;
            Some(me.id)
        } else {
            None
        };

        let verdict = classify(status, returned_id.as_deref(), provider_id)?;
        tracing::debug!(status = status.as_u16(), ?verdict, "Facebook token checked");
        Ok(verdict)
    }
}
