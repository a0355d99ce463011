//! MySQL implementation of the CredentialRepository trait.
//!
//! Both credential variants share one table; the `kind` column says which
//! set of nullable columns is populated.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{MySqlPool, Row};
use uuid::Uuid;

use acct_core::domain::entities::credentials::{CredentialRecord, StoredCredential};
use acct_core::errors::DomainError;
use acct_core::repositories::CredentialRepository;

use super::db_error;

const KIND_PASSWORD: &str = "password";
const KIND_PROVIDER: &str = "provider";

const SELECT_COLUMNS: &str =
    "id, account_id, kind, username, password_hash, provider_id, provider_name, created_at";

/// Column values for a stored credential, in table order:
/// `(kind, username, password_hash, provider_id, provider_name)`
pub(crate) type CredentialColumns<'a> = (
    &'static str,
    Option<&'a str>,
    Option<&'a str>,
    Option<&'a str>,
    Option<&'a str>,
);

pub(crate) fn credential_columns(kind: &StoredCredential) -> CredentialColumns<'_> {
    match kind {
        StoredCredential::Password {
            username,
            password_hash,
        } => (
            KIND_PASSWORD,
            Some(username.as_str()),
            Some(password_hash.as_str()),
            None,
            None,
        ),
        StoredCredential::Provider {
            provider_id,
            provider_name,
        } => (
            KIND_PROVIDER,
            None,
            None,
            Some(provider_id.as_str()),
            Some(provider_name.as_str()),
        ),
    }
}

pub(crate) fn stored_credential_from_columns(
    kind: &str,
    username: Option<String>,
    password_hash: Option<String>,
    provider_id: Option<String>,
    provider_name: Option<String>,
) -> Result<StoredCredential, DomainError> {
    match (kind, username, password_hash, provider_id, provider_name) {
        (KIND_PASSWORD, Some(username), Some(password_hash), _, _) => {
            Ok(StoredCredential::Password {
                username,
                password_hash,
            })
        }
        (KIND_PROVIDER, _, _, Some(provider_id), Some(provider_name)) => {
            Ok(StoredCredential::Provider {
                provider_id,
                provider_name,
            })
        }
        (kind, ..) => Err(DomainError::internal(format!(
            "Incomplete credential row of kind '{}'",
            kind
        ))),
    }
}

/// MySQL implementation of CredentialRepository
pub struct MySqlCredentialRepository {
    pool: MySqlPool,
}

impl MySqlCredentialRepository {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    fn row_to_record(row: &sqlx::mysql::MySqlRow) -> Result<CredentialRecord, DomainError> {
        let id: String = row.try_get("id").map_err(|e| db_error("Failed to get id", e))?;
        let account_id: String = row
            .try_get("account_id")
            .map_err(|e| db_error("Failed to get account_id", e))?;
        let kind: String = row.try_get("kind").map_err(|e| db_error("Failed to get kind", e))?;

        let stored = stored_credential_from_columns(
            &kind,
            row.try_get("username")
                .map_err(|e| db_error("Failed to get username", e))?,
            row.try_get("password_hash")
                .map_err(|e| db_error("Failed to get password_hash", e))?,
            row.try_get("provider_id")
                .map_err(|e| db_error("Failed to get provider_id", e))?,
            row.try_get("provider_name")
                .map_err(|e| db_error("Failed to get provider_name", e))?,
        )?;

        Ok(CredentialRecord {
            id: Uuid::parse_str(&id)
                .map_err(|e| DomainError::internal(format!("Invalid credential UUID: {}", e)))?,
            account_id: Uuid::parse_str(&account_id)
                .map_err(|e| DomainError::internal(format!("Invalid account UUID: {}", e)))?,
            kind: stored,
            created_at: row
                .try_get::<DateTime<Utc>, _>("created_at")
                .map_err(|e| db_error("Failed to get created_at", e))?,
        })
    }

    async fn fetch_records(
        &self,
        query: &str,
        binds: &[&str],
    ) -> Result<Vec<CredentialRecord>, DomainError> {
        let mut q = sqlx::query(query);
        for value in binds {
            q = q.bind(*value);
        }
        let rows = q
            .fetch_all(&self.pool)
            .await
            .map_err(|e| db_error("Failed to query credentials", e))?;

        rows.iter().map(Self::row_to_record).collect()
    }
}

#[async_trait]
impl CredentialRepository for MySqlCredentialRepository {
    async fn create(&self, record: CredentialRecord) -> Result<CredentialRecord, DomainError> {
        if self.exists(&record.kind).await? {
            return Err(DomainError::Conflict {
                message: "Credential already registered".to_string(),
            });
        }

        let (kind, username, password_hash, provider_id, provider_name) =
            credential_columns(&record.kind);

        sqlx::query(
            r#"
            INSERT INTO credentials (
                id, account_id, kind, username, password_hash, provider_id, provider_name, created_at
            ) VALUES (?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(record.id.to_string())
        .bind(record.account_id.to_string())
        .bind(kind)
        .bind(username)
        .bind(password_hash)
        .bind(provider_id)
        .bind(provider_name)
        .bind(record.created_at)
        .execute(&self.pool)
        .await
        .map_err(|e| db_error("Failed to save credential", e))?;

        Ok(record)
    }

    async fn exists(&self, kind: &StoredCredential) -> Result<bool, DomainError> {
        let row = match kind {
            StoredCredential::Password { username, .. } => sqlx::query(
                "SELECT EXISTS(SELECT 1 FROM credentials WHERE kind = ? AND username = ?) AS found",
            )
            .bind(KIND_PASSWORD)
            .bind(username),
            StoredCredential::Provider {
                provider_id,
                provider_name,
            } => sqlx::query(
                "SELECT EXISTS(SELECT 1 FROM credentials WHERE kind = ? AND provider_id = ? AND provider_name = ?) AS found",
            )
            .bind(KIND_PROVIDER)
            .bind(provider_id)
            .bind(provider_name),
        }
        .fetch_one(&self.pool)
        .await
        .map_err(|e| db_error("Failed to check credential existence", e))?;

        let found: i64 = row
            .try_get("found")
            .map_err(|e| db_error("Failed to get existence result", e))?;
        Ok(found == 1)
    }

    async fn find_by_username(
        &self,
        username: &str,
    ) -> Result<Vec<CredentialRecord>, DomainError> {
        let query = format!(
            "SELECT {} FROM credentials WHERE kind = ? AND username = ?",
            SELECT_COLUMNS
        );
        self.fetch_records(&query, &[KIND_PASSWORD, username]).await
    }

    async fn find_account_by_provider(
        &self,
        provider_id: &str,
        provider_name: &str,
    ) -> Result<Option<Uuid>, DomainError> {
        let row = sqlx::query(
            "SELECT account_id FROM credentials WHERE kind = ? AND provider_id = ? AND provider_name = ? LIMIT 1",
        )
        .bind(KIND_PROVIDER)
        .bind(provider_id)
        .bind(provider_name)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| db_error("Failed to find provider credential", e))?;

        match row {
            Some(row) => {
                let account_id: String = row
                    .try_get("account_id")
                    .map_err(|e| db_error("Failed to get account_id", e))?;
                Uuid::parse_str(&account_id)
                    .map(Some)
                    .map_err(|e| DomainError::internal(format!("Invalid account UUID: {}", e)))
            }
            None => Ok(None),
        }
    }

    async fn find_by_account(
        &self,
        account_id: Uuid,
    ) -> Result<Vec<CredentialRecord>, DomainError> {
        let query = format!("SELECT {} FROM credentials WHERE account_id = ?", SELECT_COLUMNS);
        let account_id = account_id.to_string();
        self.fetch_records(&query, &[account_id.as_str()]).await
    }
}
