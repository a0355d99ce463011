//! Authentication credentials: the raw wire shape, the parsed variant and the
//! stored record.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::ValidationError;

/// Credentials exactly as submitted by a client
///
/// On initial signup the client may include the account key, because
/// lookups by provider identity may not yet see a freshly written record.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CredentialsInput {
    #[serde(default)]
    pub account_key: Option<Uuid>,
    #[serde(default)]
    pub provider_id: String,
    #[serde(default)]
    pub provider_name: String,
    #[serde(default)]
    pub provider_token: String,
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub password: String,
}

impl CredentialsInput {
    fn has_provider(&self) -> bool {
        !self.provider_id.is_empty()
            && !self.provider_name.is_empty()
            && !self.provider_token.is_empty()
    }

    fn has_password(&self) -> bool {
        !self.username.is_empty() && !self.password.is_empty()
    }

    /// True when either the provider triple or the username/password pair is complete
    pub fn is_valid(&self) -> bool {
        self.has_provider() || self.has_password()
    }

    /// Decides the credential variant once. A complete provider triple wins.
    /// Provider names are lower-cased so one identity has one spelling.
    pub fn into_credentials(self) -> Result<(Credentials, Option<Uuid>), ValidationError> {
        let account_key = self.account_key;
        if self.has_provider() {
            return Ok((
                Credentials::Provider {
                    provider_id: self.provider_id,
                    provider_name: self.provider_name.to_lowercase(),
                    provider_token: self.provider_token,
                },
                account_key,
            ));
        }
        if self.has_password() {
            return Ok((
                Credentials::Password {
                    username: self.username,
                    password: self.password,
                },
                account_key,
            ));
        }
        Err(ValidationError::InvalidCredentials)
    }
}

/// A validated credential, one variant per authentication method
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Credentials {
    Password {
        username: String,
        password: String,
    },
    Provider {
        provider_id: String,
        provider_name: String,
        provider_token: String,
    },
}

/// What is persisted for a credential. Provider tokens are never stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum StoredCredential {
    Password {
        username: String,
        password_hash: String,
    },
    Provider {
        provider_id: String,
        provider_name: String,
    },
}

impl StoredCredential {
    /// True when this record is the provider identity `(provider_id, provider_name)`
    pub fn matches_provider(&self, id: &str, name: &str) -> bool {
        matches!(
            self,
            StoredCredential::Provider { provider_id, provider_name }
                if provider_id == id && provider_name == name
        )
    }
}

/// Credential record bound to exactly one account
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CredentialRecord {
    pub id: Uuid,
    pub account_id: Uuid,
    pub kind: StoredCredential,
    pub created_at: DateTime<Utc>,
}

impl CredentialRecord {
    pub fn new(account_id: Uuid, kind: StoredCredential) -> Self {
        Self {
            id: Uuid::new_v4(),
            account_id,
            kind,
            created_at: Utc::now(),
        }
    }
}
