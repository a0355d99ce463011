//! Authentication and authorization configuration

use serde::{Deserialize, Serialize};

/// Bearer token policy
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct TokenPolicyConfig {
    /// Lifetime of a freshly minted token in calendar months
    pub lifetime_months: u32,

    /// Tokens expiring within this many days are rotated
    pub rotation_horizon_days: i64,

    /// Scheme prefix expected in the `Authorization` header value
    pub header_prefix: String,

    /// Response header carrying a rotated token value
    pub new_token_header: String,

    /// Response header carrying the rotated token expiry (RFC3339)
    pub new_token_expiry_header: String,
}

impl Default for TokenPolicyConfig {
    fn default() -> Self {
        Self {
            lifetime_months: 2,
            rotation_horizon_days: 7,
            header_prefix: String::from("token="),
            new_token_header: String::from("new-auth-token"),
            new_token_expiry_header: String::from("new-auth-token-expiry"),
        }
    }
}

/// Cookie session configuration for browser (form) authentication
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SessionConfig {
    /// Session cookie name
    pub cookie_name: String,

    /// Lifetime of a re-issued cookie in days
    pub cookie_max_age_days: i64,

    /// Session cookie secure flag (HTTPS only)
    pub secure: bool,

    /// Where unauthenticated browser requests are redirected
    pub signin_path: String,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            cookie_name: String::from("app-cookie"),
            cookie_max_age_days: 14,
            secure: false,
            signin_path: String::from("/signin"),
        }
    }
}

/// External identity provider configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ProviderConfig {
    /// Base URL of the Facebook Graph API
    pub facebook_graph_url: String,

    /// Timeout for a single verification call in seconds
    pub request_timeout_secs: u64,
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            facebook_graph_url: String::from("https://graph.facebook.com"),
            request_timeout_secs: 10,
        }
    }
}

/// Complete authentication configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AuthConfig {
    /// Token lifetime and rotation policy
    #[serde(default)]
    pub token: TokenPolicyConfig,

    /// Cookie session configuration
    #[serde(default)]
    pub session: SessionConfig,

    /// Identity providers
    #[serde(default)]
    pub provider: ProviderConfig,

    /// Ceiling for the parallel account listing in seconds
    #[serde(default = "default_account_list_timeout")]
    pub account_list_timeout_secs: u64,

    /// Accounts allowed to list every account
    #[serde(default)]
    pub admin_accounts: Vec<String>,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            token: TokenPolicyConfig::default(),
            session: SessionConfig::default(),
            provider: ProviderConfig::default(),
            account_list_timeout_secs: default_account_list_timeout(),
            admin_accounts: Vec::new(),
        }
    }
}

impl AuthConfig {
    /// Create from environment variables
    pub fn from_env() -> Self {
        let token_defaults = TokenPolicyConfig::default();
        let rotation_horizon_days = std::env::var("TOKEN_ROTATION_HORIZON_DAYS")
            .ok()
            .and_then(|days| days.parse().ok())
            .unwrap_or(token_defaults.rotation_horizon_days);
        let lifetime_months = std::env::var("TOKEN_LIFETIME_MONTHS")
            .ok()
            .and_then(|months| months.parse().ok())
            .unwrap_or(token_defaults.lifetime_months);

        let session = SessionConfig {
            secure: std::env::var("SESSION_COOKIE_SECURE")
                .map(|flag| flag == "true" || flag == "1")
                .unwrap_or(false),
            ..Default::default()
        };

        let provider = ProviderConfig {
            facebook_graph_url: std::env::var("FACEBOOK_GRAPH_URL")
                .unwrap_or_else(|_| ProviderConfig::default().facebook_graph_url),
            ..Default::default()
        };

        let account_list_timeout_secs = std::env::var("ACCOUNT_LIST_TIMEOUT_SECS")
            .ok()
            .and_then(|secs| secs.parse().ok())
            .unwrap_or_else(default_account_list_timeout);

        let admin_accounts = std::env::var("ADMIN_ACCOUNT_IDS")
            .map(|ids| parse_account_list(&ids))
            .unwrap_or_default();

        Self {
            token: TokenPolicyConfig {
                lifetime_months,
                rotation_horizon_days,
                ..token_defaults
            },
            session,
            provider,
            account_list_timeout_secs,
            admin_accounts,
        }
    }

    /// Whether the account may use administrative endpoints
    pub fn is_admin(&self, account_id: &str) -> bool {
        self.admin_accounts
            .iter()
            .any(|admin| admin.eq_ignore_ascii_case(account_id))
    }
}

fn parse_account_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|id| !id.is_empty())
        .map(str::to_string)
        .collect()
}

fn default_account_list_timeout() -> u64 {
    10
}
