//! Unit tests for mock token repository

use chrono::{Duration, Utc};
use uuid::Uuid;

use crate::repositories::token::{MockTokenRepository, TokenRepository};

#[tokio::test]
async fn test_create_and_get() {
    let repo = MockTokenRepository::new();
    let account_id = Uuid::new_v4();

    let token = repo.create(account_id).await.unwrap();
    assert_eq!(token.account_id, account_id);
    assert!(token.expiry > Utc::now() + Duration::days(55));

    let found = repo.get(token.id).await.unwrap();
    assert_eq!(found, Some(token));
}

#[tokio::test]
async fn test_create_keeps_existing_tokens() {
    let repo = MockTokenRepository::new();
    let account_id = Uuid::new_v4();

    repo.create(account_id).await.unwrap();
    repo.create(account_id).await.unwrap();

    assert_eq!(repo.tokens_for(account_id).await.len(), 2);
}

#[tokio::test]
async fn test_get_unknown_is_none() {
    let repo = MockTokenRepository::new();
    assert!(repo.get(Uuid::new_v4()).await.unwrap().is_none());
    assert_eq!(repo.get_calls(), 1);
}

#[tokio::test]
async fn test_failure_injection() {
    let repo = MockTokenRepository::new();
    repo.fail_get(true);
    repo.fail_create(true);

    assert!(repo.get(Uuid::new_v4()).await.is_err());
    assert!(repo.create(Uuid::new_v4()).await.is_err());
}
