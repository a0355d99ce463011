//! Browser cookie authentication

mod common;

use actix_web::{cookie::Cookie, test};
use chrono::{Duration, Utc};

use acct_api::create_app;

use common::TestHarness;

#[actix_web::test]
async fn test_missing_cookie_redirects_to_signin() {
    let harness = TestHarness::new();
    let app = test::init_service(create_app(harness.state.clone())).await;

    let req = test::TestRequest::get().uri("/web/account?tab=1").to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), 307);
    assert_eq!(
        resp.headers().get("location").unwrap(),
        "/signin?returnUrl=%2Fweb%2Faccount%3Ftab%3D1"
    );
}

#[actix_web::test]
async fn test_invalid_cookie_redirects_to_signin() {
    let harness = TestHarness::new();
    let app = test::init_service(create_app(harness.state.clone())).await;

    let req = test::TestRequest::get()
        .uri("/web/account")
        .cookie(Cookie::new("app-cookie", "ABC123"))
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), 307);
}

#[actix_web::test]
async fn test_valid_cookie_serves_page() {
    let harness = TestHarness::new();
    let (account, token) = harness.fresh_account().await;
    let app = test::init_service(create_app(harness.state.clone())).await;

    let req = test::TestRequest::get()
        .uri("/web/account")
        .cookie(Cookie::new("app-cookie", token.value()))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), 200);
    assert!(resp.response().cookies().next().is_none());
    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["id"], account.id.to_string());
}

#[actix_web::test]
async fn test_rotation_replaces_cookie() {
    let harness = TestHarness::new();
    let (_, token) = harness
        .account_with_token(Utc::now() + Duration::days(2))
        .await;
    let app = test::init_service(create_app(harness.state.clone())).await;

    let req = test::TestRequest::get()
        .uri("/web/account")
        .cookie(Cookie::new("app-cookie", token.value()))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), 200);
    let cookie = resp
        .response()
        .cookies()
        .find(|c| c.name() == "app-cookie")
        .expect("rotated session cookie");
    assert_ne!(cookie.value(), token.value());
    assert_eq!(cookie.http_only(), Some(true));
}
