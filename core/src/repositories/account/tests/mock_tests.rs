//! Unit tests for mock account repository

use uuid::Uuid;

use crate::domain::entities::account::{Account, AccountProfile};
use crate::domain::entities::attachment::Attachment;
use crate::errors::DomainError;
use crate::repositories::account::{AccountRepository, MockAccountRepository};

#[tokio::test]
async fn test_create_and_find() {
    let repo = MockAccountRepository::new();
    let account = Account::new(AccountProfile::default());

    repo.create(account.clone()).await.unwrap();

    assert_eq!(repo.find_by_id(account.id).await.unwrap(), Some(account));
    assert!(repo.find_by_id(Uuid::new_v4()).await.unwrap().is_none());
}

#[tokio::test]
async fn test_update_missing_is_not_found() {
    let repo = MockAccountRepository::new();
    let result = repo.update(Account::new(AccountProfile::default())).await;
    assert!(matches!(result, Err(DomainError::NotFound { .. })));
}

#[tokio::test]
async fn test_update_replaces() {
    let repo = MockAccountRepository::new();
    let mut account = repo
        .create(Account::new(AccountProfile::default()))
        .await
        .unwrap();

    account.set_photo(Attachment::new("image/png"));
    repo.update(account.clone()).await.unwrap();

    let stored = repo.find_by_id(account.id).await.unwrap().unwrap();
    assert!(stored.photo.is_some());
}

#[tokio::test]
async fn test_list_ids_pages_in_creation_order() {
    let repo = MockAccountRepository::new();
    let mut ids = Vec::new();
    for _ in 0..5 {
        ids.push(
            repo.create(Account::new(AccountProfile::default()))
                .await
                .unwrap()
                .id,
        );
    }

    assert_eq!(repo.list_ids(0, 2).await.unwrap(), ids[0..2].to_vec());
    assert_eq!(repo.list_ids(3, 10).await.unwrap(), ids[3..5].to_vec());
    assert!(repo.list_ids(10, 10).await.unwrap().is_empty());
}
