//! Configuration for the token authenticator

use acct_shared::config::TokenPolicyConfig;
use chrono::Duration;

use crate::domain::entities::token::ROTATION_HORIZON_DAYS;

/// Configuration for the token authenticator
#[derive(Debug, Clone)]
pub struct AuthenticatorConfig {
    /// Scheme prefix the `Authorization` value must start with
    pub header_prefix: String,
    /// Tokens expiring within this window are rotated
    pub rotation_horizon: Duration,
}

impl Default for AuthenticatorConfig {
    fn default() -> Self {
        Self {
            header_prefix: "token=".to_string(),
            rotation_horizon: Duration::days(ROTATION_HORIZON_DAYS),
        }
    }
}

impl From<&TokenPolicyConfig> for AuthenticatorConfig {
    fn from(policy: &TokenPolicyConfig) -> Self {
        Self {
            header_prefix: policy.header_prefix.clone(),
            rotation_horizon: Duration::days(policy.rotation_horizon_days),
        }
    }
}
