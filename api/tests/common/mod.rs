//! Shared fixtures for the HTTP tests: the application wired over the
//! in-memory doubles from `acct_core`.

#![allow(dead_code)]

use std::sync::Arc;

use actix_web::web;
use chrono::{DateTime, Duration, Utc};
use uuid::Uuid;

use acct_api::{AppState, Config, Ports};
use acct_core::domain::entities::account::{Account, AccountProfile};
use acct_core::domain::entities::token::Token;
use acct_core::repositories::{
    AccountRepository, MockAccountRepository, MockCredentialRepository, MockTokenCache,
    MockTokenRepository,
};
use acct_core::services::account::MockAttachmentStore;
use acct_core::services::credentials::MockProviderVerifier;

/// Account id the default test configuration treats as admin
pub const ADMIN_ID: Uuid = Uuid::from_u128(0x6f1c2a9e_0000_4000_8000_000000000001);

/// Default configuration with [`ADMIN_ID`] as the only admin
pub fn test_config() -> Config {
    let mut config = Config::default();
    config.auth.admin_accounts = vec![ADMIN_ID.to_string()];
    config
}

pub struct MockPorts;

impl Ports for MockPorts {
    type Accounts = MockAccountRepository;
    type Credentials = MockCredentialRepository;
    type Providers = MockProviderVerifier;
    type Tokens = MockTokenRepository;
    type Cache = MockTokenCache;
    type Attachments = MockAttachmentStore;
}

pub struct TestHarness {
    pub accounts: Arc<MockAccountRepository>,
    pub credentials: Arc<MockCredentialRepository>,
    pub providers: Arc<MockProviderVerifier>,
    pub tokens: Arc<MockTokenRepository>,
    pub cache: Arc<MockTokenCache>,
    pub attachments: Arc<MockAttachmentStore>,
    pub state: web::Data<AppState<MockPorts>>,
}

impl TestHarness {
    pub fn new() -> Self {
        Self::with_config(test_config())
    }

    pub fn with_config(config: Config) -> Self {
        let accounts = Arc::new(MockAccountRepository::new());
        let credentials = Arc::new(MockCredentialRepository::new());
        let providers = Arc::new(MockProviderVerifier::new());
        let tokens = Arc::new(MockTokenRepository::new());
        let cache = Arc::new(MockTokenCache::new());
        let attachments = Arc::new(MockAttachmentStore::new());

        let state = web::Data::new(AppState::<MockPorts>::new(
            accounts.clone(),
            credentials.clone(),
            providers.clone(),
            tokens.clone(),
            cache.clone(),
            attachments.clone(),
            config,
        ));

        Self {
            accounts,
            credentials,
            providers,
            tokens,
            cache,
            attachments,
            state,
        }
    }

    /// Stored account with a token expiring at `expiry`
    pub async fn account_with_token(&self, expiry: DateTime<Utc>) -> (Account, Token) {
        let account = self
            .accounts
            .create(Account::new(AccountProfile {
                first_name: "Jim".to_string(),
                last_name: "Tester".to_string(),
                ..Default::default()
            }))
            .await
            .unwrap();
        let token = self.tokens.insert(account.id, expiry).await;
        (account, token)
    }

    /// The admin account with a fresh token
    pub async fn admin_account(&self) -> (Account, Token) {
        let mut account = Account::new(AccountProfile {
            first_name: "Ada".to_string(),
            ..Default::default()
        });
        account.id = ADMIN_ID;
        let account = self.accounts.create(account).await.unwrap();
        let token = self
            .tokens
            .insert(account.id, Utc::now() + Duration::days(30))
            .await;
        (account, token)
    }

    /// Account with a token far from its rotation window
    pub async fn fresh_account(&self) -> (Account, Token) {
        self.account_with_token(Utc::now() + Duration::days(30)).await
    }
}

pub fn auth_header(token: &Token) -> String {
    format!("token={}", token.value())
}
