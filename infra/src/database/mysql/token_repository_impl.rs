//! MySQL implementation of the TokenRepository trait.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{MySqlPool, Row};
use uuid::Uuid;

use acct_core::domain::entities::token::{Token, TOKEN_LIFETIME_MONTHS};
use acct_core::errors::DomainError;
use acct_core::repositories::TokenRepository;

use super::db_error;

/// MySQL implementation of TokenRepository
pub struct MySqlTokenRepository {
    /// Database connection pool
    pool: MySqlPool,
    /// Lifetime stamped on every new token
    lifetime_months: u32,
}

impl MySqlTokenRepository {
    pub fn new(pool: MySqlPool) -> Self {
        Self::with_lifetime(pool, TOKEN_LIFETIME_MONTHS)
    }

    pub fn with_lifetime(pool: MySqlPool, lifetime_months: u32) -> Self {
        Self {
            pool,
            lifetime_months,
        }
    }

    /// Convert database row to Token entity
    fn row_to_token(row: &sqlx::mysql::MySqlRow) -> Result<Token, DomainError> {
        let id: String = row
            .try_get("id")
            .map_err(|e| db_error("Failed to get id", e))?;
        let account_id: String = row
            .try_get("account_id")
            .map_err(|e| db_error("Failed to get account_id", e))?;

        Ok(Token {
            id: Uuid::parse_str(&id)
                .map_err(|e| DomainError::internal(format!("Invalid token UUID: {}", e)))?,
            account_id: Uuid::parse_str(&account_id)
                .map_err(|e| DomainError::internal(format!("Invalid account UUID: {}", e)))?,
            expiry: row
                .try_get::<DateTime<Utc>, _>("expiry")
                .map_err(|e| db_error("Failed to get expiry", e))?,
            created_at: row
                .try_get::<DateTime<Utc>, _>("created_at")
                .map_err(|e| db_error("Failed to get created_at", e))?,
        })
    }
}

#[async_trait]
impl TokenRepository for MySqlTokenRepository {
    async fn create(&self, account_id: Uuid) -> Result<Token, DomainError> {
        let token = Token::issue_with_lifetime(account_id, Utc::now(), self.lifetime_months);

        sqlx::query("INSERT INTO tokens (id, account_id, expiry, created_at) VALUES (?, ?, ?, ?)")
            .bind(token.id.to_string())
            .bind(token.account_id.to_string())
            .bind(token.expiry)
            .bind(token.created_at)
            .execute(&self.pool)
            .await
            .map_err(|e| db_error("Failed to save token", e))?;

        tracing::debug!(%account_id, token_id = %token.id, "Token stored");
        Ok(token)
    }

    async fn get(&self, id: Uuid) -> Result<Option<Token>, DomainError> {
        let row = sqlx::query(
            "SELECT id, account_id, expiry, created_at FROM tokens WHERE id = ? LIMIT 1",
        )
        .bind(id.to_string())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| db_error("Failed to find token", e))?;

        row.as_ref().map(Self::row_to_token).transpose()
    }
}
