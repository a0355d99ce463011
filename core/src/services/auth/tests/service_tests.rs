//! Unit tests for login

use std::sync::Arc;
use uuid::Uuid;

use crate::domain::entities::credentials::{CredentialRecord, CredentialsInput, StoredCredential};
use crate::errors::{DomainError, ErrorKind, ValidationError};
use crate::repositories::{
    CredentialRepository, MockCredentialRepository, MockTokenRepository, TokenRepository,
};
use crate::services::auth::AuthService;
use crate::services::credentials::{hash_password, CredentialValidator, MockProviderVerifier};

struct Harness {
    service: AuthService<MockCredentialRepository, MockProviderVerifier, MockTokenRepository>,
    credentials: Arc<MockCredentialRepository>,
    providers: Arc<MockProviderVerifier>,
    tokens: Arc<MockTokenRepository>,
}

fn harness() -> Harness {
    let credentials = Arc::new(MockCredentialRepository::new());
    let providers = Arc::new(MockProviderVerifier::new());
    let tokens = Arc::new(MockTokenRepository::new());
    let validator = Arc::new(CredentialValidator::new(credentials.clone(), providers.clone()));
    Harness {
        service: AuthService::new(validator, tokens.clone()),
        credentials,
        providers,
        tokens,
    }
}

fn login_input(username: &str, password: &str) -> CredentialsInput {
    CredentialsInput {
        username: username.to_string(),
        password: password.to_string(),
        ..Default::default()
    }
}

async fn register_password(h: &Harness, username: &str, secret: &str) -> Uuid {
    let account_id = Uuid::new_v4();
    h.credentials
        .create(CredentialRecord::new(
            account_id,
            StoredCredential::Password {
                username: username.to_string(),
                password_hash: hash_password(secret).unwrap(),
            },
        ))
        .await
        .unwrap();
    account_id
}

#[tokio::test]
async fn test_password_login_issues_token() {
    let h = harness();
    let account_id = register_password(&h, "jim", "secret").await;

    let token = h.service.login(login_input("jim", "secret")).await.unwrap();

    assert_eq!(token.account_id, account_id);
    assert_eq!(h.tokens.get(token.id).await.unwrap(), Some(token));
}

#[tokio::test]
async fn test_provider_login_issues_token() {
    let h = harness();
    let account_id = Uuid::new_v4();
    h.credentials
        .create(CredentialRecord::new(
            account_id,
            StoredCredential::Provider {
                provider_id: "1234".to_string(),
                provider_name: "facebook".to_string(),
            },
        ))
        .await
        .unwrap();
    h.providers.allow("facebook", "1234", "fb-token");

    let input = CredentialsInput {
        provider_id: "1234".to_string(),
        provider_name: "facebook".to_string(),
        provider_token: "fb-token".to_string(),
        ..Default::default()
    };
    let token = h.service.login(input).await.unwrap();
    assert_eq!(token.account_id, account_id);
}

#[tokio::test]
async fn test_incomplete_credentials_are_malformed() {
    let h = harness();

    let err = h.service.login(login_input("jim", "")).await.unwrap_err();

    assert!(matches!(
        err,
        DomainError::Validation(ValidationError::InvalidCredentials)
    ));
    assert_eq!(err.kind(), ErrorKind::Malformed);
}

#[tokio::test]
async fn test_bad_credentials_are_unauthenticated() {
    let h = harness();
    register_password(&h, "jim", "secret").await;

    let err = h.service.login(login_input("jim", "wrong")).await.unwrap_err();

    assert_eq!(err.kind(), ErrorKind::Unauthenticated);
}

#[tokio::test]
async fn test_token_store_failure_is_internal() {
    let h = harness();
    register_password(&h, "jim", "secret").await;
    h.tokens.fail_create(true);

    let err = h.service.login(login_input("jim", "secret")).await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Internal);
}
