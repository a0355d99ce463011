//! Configuration for the account service

use acct_shared::config::AuthConfig;
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct AccountServiceConfig {
    /// Ceiling on the whole parallel fetch of a listing page
    pub list_timeout: Duration,
}

impl Default for AccountServiceConfig {
    fn default() -> Self {
        Self {
            list_timeout: Duration::from_secs(10),
        }
    }
}

impl From<&AuthConfig> for AccountServiceConfig {
    fn from(config: &AuthConfig) -> Self {
        Self {
            list_timeout: Duration::from_secs(config.account_list_timeout_secs),
        }
    }
}
