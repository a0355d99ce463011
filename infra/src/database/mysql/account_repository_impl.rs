//! MySQL implementation of the AccountRepository trait.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{MySqlPool, Row};
use uuid::Uuid;

use acct_core::domain::entities::account::{Account, AccountProfile};
use acct_core::domain::entities::attachment::Attachment;
use acct_core::errors::DomainError;
use acct_core::repositories::AccountRepository;

use super::db_error;

const SELECT_COLUMNS: &str = "id, first_name, last_name, gender, locale, location, name, \
     timezone, email, photo_name, photo_type, created_at, updated_at";

/// Photo columns are written and cleared together
pub(crate) fn photo_from_columns(
    name: Option<String>,
    content_type: Option<String>,
) -> Option<Attachment> {
    match (name, content_type) {
        (Some(name), Some(content_type)) => Some(Attachment { name, content_type }),
        _ => None,
    }
}

/// MySQL implementation of AccountRepository
pub struct MySqlAccountRepository {
    pool: MySqlPool,
}

impl MySqlAccountRepository {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    fn row_to_account(row: &sqlx::mysql::MySqlRow) -> Result<Account, DomainError> {
        let get = |column: &str| -> Result<String, DomainError> {
            row.try_get(column)
                .map_err(|e| db_error(&format!("Failed to get {}", column), e))
        };

        let id = get("id")?;
        let profile = AccountProfile {
            first_name: get("first_name")?,
            last_name: get("last_name")?,
            gender: get("gender")?,
            locale: get("locale")?,
            location: get("location")?,
            name: get("name")?,
            timezone: row
                .try_get("timezone")
                .map_err(|e| db_error("Failed to get timezone", e))?,
            email: get("email")?,
        };

        Ok(Account {
            id: Uuid::parse_str(&id)
                .map_err(|e| DomainError::internal(format!("Invalid account UUID: {}", e)))?,
            profile,
            photo: photo_from_columns(
                row.try_get("photo_name")
                    .map_err(|e| db_error("Failed to get photo_name", e))?,
                row.try_get("photo_type")
                    .map_err(|e| db_error("Failed to get photo_type", e))?,
            ),
            created_at: row
                .try_get::<DateTime<Utc>, _>("created_at")
                .map_err(|e| db_error("Failed to get created_at", e))?,
            updated_at: row
                .try_get::<DateTime<Utc>, _>("updated_at")
                .map_err(|e| db_error("Failed to get updated_at", e))?,
        })
    }
}

#[async_trait]
impl AccountRepository for MySqlAccountRepository {
    async fn create(&self, account: Account) -> Result<Account, DomainError> {
        let filters = account.search_filters();
        let profile = &account.profile;

        sqlx::query(
            r#"
            INSERT INTO accounts (
                id, first_name, last_name, gender, locale, location, name, timezone, email,
                first_name_filter, last_name_filter, name_filter,
                photo_name, photo_type, created_at, updated_at
            ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(account.id.to_string())
        .bind(&profile.first_name)
        .bind(&profile.last_name)
        .bind(&profile.gender)
        .bind(&profile.locale)
        .bind(&profile.location)
        .bind(&profile.name)
        .bind(profile.timezone)
        .bind(&profile.email)
        .bind(&filters.first_name)
        .bind(&filters.last_name)
        .bind(&filters.name)
        .bind(account.photo.as_ref().map(|p| p.name.as_str()))
        .bind(account.photo.as_ref().map(|p| p.content_type.as_str()))
        .bind(account.created_at)
        .bind(account.updated_at)
        .execute(&self.pool)
        .await
        .map_err(|e| db_error("Failed to create account", e))?;

        Ok(account)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Account>, DomainError> {
        let query = format!("SELECT {} FROM accounts WHERE id = ? LIMIT 1", SELECT_COLUMNS);
        let row = sqlx::query(&query)
            .bind(id.to_string())
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| db_error("Failed to find account", e))?;

        row.as_ref().map(Self::row_to_account).transpose()
    }

    async fn update(&self, account: Account) -> Result<Account, DomainError> {
        let filters = account.search_filters();
        let profile = &account.profile;

        let result = sqlx::query(
            r#"
            UPDATE accounts SET
                first_name = ?, last_name = ?, gender = ?, locale = ?, location = ?,
                name = ?, timezone = ?, email = ?,
                first_name_filter = ?, last_name_filter = ?, name_filter = ?,
                photo_name = ?, photo_type = ?, updated_at = ?
            WHERE id = ?
            "#,
        )
        .bind(&profile.first_name)
        .bind(&profile.last_name)
        .bind(&profile.gender)
        .bind(&profile.locale)
        .bind(&profile.location)
        .bind(&profile.name)
        .bind(profile.timezone)
        .bind(&profile.email)
        .bind(&filters.first_name)
        .bind(&filters.last_name)
        .bind(&filters.name)
        .bind(account.photo.as_ref().map(|p| p.name.as_str()))
        .bind(account.photo.as_ref().map(|p| p.content_type.as_str()))
        .bind(account.updated_at)
        .bind(account.id.to_string())
        .execute(&self.pool)
        .await
        .map_err(|e| db_error("Failed to update account", e))?;

        if result.rows_affected() == 0 {
            return Err(DomainError::NotFound {
                resource: format!("Account {}", account.id),
            });
        }

        Ok(account)
    }

    async fn list_ids(&self, offset: u32, limit: u32) -> Result<Vec<Uuid>, DomainError> {
        let rows = sqlx::query("SELECT id FROM accounts ORDER BY created_at, id LIMIT ? OFFSET ?")
            .bind(limit)
            .bind(offset)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| db_error("Failed to list accounts", e))?;

        rows.iter()
            .map(|row| {
                let id: String = row.try_get("id").map_err(|e| db_error("Failed to get id", e))?;
                Uuid::parse_str(&id)
                    .map_err(|e| DomainError::internal(format!("Invalid account UUID: {}", e)))
            })
            .collect()
    }
}
