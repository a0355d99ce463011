//! Unit tests for mock token cache

use chrono::Utc;
use std::time::Duration;
use uuid::Uuid;

use crate::domain::entities::token::{Token, TokenDetails};
use crate::repositories::token_cache::{CacheLookup, MockTokenCache, TokenCache};

fn details() -> TokenDetails {
    TokenDetails::from_token(&Token::issue(Uuid::new_v4(), Utc::now()))
}

#[tokio::test]
async fn test_put_then_get_hits() {
    let cache = MockTokenCache::new();
    let details = details();

    cache
        .put(&details.token, &details, Duration::from_secs(60))
        .await
        .unwrap();

    let lookup = cache.get(&details.token).await.unwrap();
    assert_eq!(lookup, CacheLookup::Hit(details.clone()));
    assert_eq!(
        cache.entry(&details.token).await.map(|(_, ttl)| ttl),
        Some(Duration::from_secs(60))
    );
}

#[tokio::test]
async fn test_zero_ttl_skips_write() {
    let cache = MockTokenCache::new();
    let details = details();

    cache.put(&details.token, &details, Duration::ZERO).await.unwrap();

    assert_eq!(cache.get(&details.token).await.unwrap(), CacheLookup::Miss);
    assert_eq!(cache.put_calls(), 1);
}

#[tokio::test]
async fn test_failure_injection() {
    let cache = MockTokenCache::new();
    let details = details();
    cache.fail_get(true);
    cache.fail_put(true);

    assert!(cache.get("anything").await.is_err());
    assert!(cache
        .put(&details.token, &details, Duration::from_secs(1))
        .await
        .is_err());
}
