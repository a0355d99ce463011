//! Token authentication middleware for protecting API endpoints.
//!
//! Reads `Authorization: token=<value>`, resolves it through the core
//! [`TokenAuthenticator`] and injects an [`AuthContext`] into the request.
//! When the token was rotated the replacement is returned in the
//! `new-auth-token` / `new-auth-token-expiry` response headers.

use actix_web::{
    body::EitherBody,
    dev::{Service, ServiceRequest, ServiceResponse, Transform},
    error::ErrorUnauthorized,
    http::{
        header::{HeaderName, HeaderValue, InvalidHeaderName, AUTHORIZATION},
        Method,
    },
    Error, FromRequest, HttpMessage, HttpRequest,
};
use acct_core::{
    domain::entities::token::RotatedToken,
    errors::DomainResult,
    repositories::{TokenCache, TokenRepository},
    services::token::{Authenticated, TokenAuthenticator},
};
use acct_shared::config::TokenPolicyConfig;
use async_trait::async_trait;
use chrono::{DateTime, SecondsFormat, Utc};
use futures_util::future::LocalBoxFuture;
use std::{
    future::{ready, Ready},
    rc::Rc,
    sync::Arc,
    task::{Context, Poll},
};
use uuid::Uuid;

use crate::handlers::error_response;

/// Account context injected into authenticated requests
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthContext {
    pub account_id: Uuid,
    /// Expiry of the token the request presented
    pub token_expiry: DateTime<Utc>,
}

impl From<&Authenticated> for AuthContext {
    fn from(authenticated: &Authenticated) -> Self {
        Self {
            account_id: authenticated.account_id,
            token_expiry: authenticated.token_expiry,
        }
    }
}

/// Object-safe view of the token authenticator used by the middlewares
#[async_trait]
pub trait RequestAuthenticator: Send + Sync {
    /// Authenticate a raw `Authorization` header value
    async fn authenticate_header(&self, header: Option<&str>) -> DomainResult<Authenticated>;

    /// Authenticate a bare token value, as stored in a cookie
    async fn authenticate_token(&self, token: &str) -> DomainResult<Authenticated>;
}

#[async_trait]
impl<R, C> RequestAuthenticator for TokenAuthenticator<R, C>
where
    R: TokenRepository + 'static,
    C: TokenCache + 'static,
{
    async fn authenticate_header(&self, header: Option<&str>) -> DomainResult<Authenticated> {
        self.authenticate(header).await
    }

    async fn authenticate_token(&self, token: &str) -> DomainResult<Authenticated> {
        TokenAuthenticator::authenticate_token(self, token).await
    }
}

/// Response header names carrying a rotated token
#[derive(Debug, Clone)]
pub struct RotationHeaders {
    pub token: HeaderName,
    pub expiry: HeaderName,
}

impl Default for RotationHeaders {
    fn default() -> Self {
        Self {
            token: HeaderName::from_static("new-auth-token"),
            expiry: HeaderName::from_static("new-auth-token-expiry"),
        }
    }
}

impl RotationHeaders {
    pub fn from_config(config: &TokenPolicyConfig) -> Result<Self, InvalidHeaderName> {
        Ok(Self {
            token: HeaderName::try_from(config.new_token_header.as_str())?,
            expiry: HeaderName::try_from(config.new_token_expiry_header.as_str())?,
        })
    }
}

/// RFC3339 rendering used for rotated token expiries
pub fn format_expiry(expiry: &DateTime<Utc>) -> String {
    expiry.to_rfc3339_opts(SecondsFormat::Secs, true)
}

/// Token authentication middleware factory
#[derive(Clone)]
pub struct TokenAuth {
    authenticator: Arc<dyn RequestAuthenticator>,
    headers: RotationHeaders,
}

impl TokenAuth {
    pub fn new(authenticator: Arc<dyn RequestAuthenticator>) -> Self {
        Self {
            authenticator,
            headers: RotationHeaders::default(),
        }
    }

    pub fn with_headers(mut self, headers: RotationHeaders) -> Self {
        self.headers = headers;
        self
    }
}

impl<S, B> Transform<S, ServiceRequest> for TokenAuth
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type InitError = ();
    type Transform = TokenAuthMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(TokenAuthMiddleware {
            service: Rc::new(service),
            authenticator: Arc::clone(&self.authenticator),
            headers: self.headers.clone(),
        }))
    }
}

/// Token authentication middleware service
pub struct TokenAuthMiddleware<S> {
    service: Rc<S>,
    authenticator: Arc<dyn RequestAuthenticator>,
    headers: RotationHeaders,
}

impl<S, B> Service<ServiceRequest> for TokenAuthMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    fn poll_ready(&self, ctx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.service.poll_ready(ctx)
    }

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let service = Rc::clone(&self.service);
        let authenticator = Arc::clone(&self.authenticator);
        let headers = self.headers.clone();

        Box::pin(async move {
            // Preflight requests carry no credentials
            if req.method() == Method::OPTIONS {
                return service.call(req).await.map(|res| res.map_into_left_body());
            }

            let header = extract_authorization(&req);
            let authenticated = match authenticator.authenticate_header(header.as_deref()).await {
                Ok(authenticated) => authenticated,
                Err(e) => {
                    let response = error_response(&e);
                    return Ok(req.into_response(response).map_into_right_body());
                }
            };

            req.extensions_mut().insert(AuthContext::from(&authenticated));

            let mut res = service.call(req).await?;
            if let Some(rotated) = &authenticated.rotated {
                append_rotation_headers(&mut res, &headers, rotated);
            }
            Ok(res.map_into_left_body())
        })
    }
}

/// `Authorization` value; a non-text value is passed on as empty so it
/// reads as malformed rather than missing
fn extract_authorization(req: &ServiceRequest) -> Option<String> {
    req.headers()
        .get(AUTHORIZATION)
        .map(|value| value.to_str().unwrap_or_default().to_string())
}

fn append_rotation_headers<B>(
    res: &mut ServiceResponse<B>,
    headers: &RotationHeaders,
    rotated: &RotatedToken,
) {
    let values = (
        HeaderValue::from_str(&rotated.value),
        HeaderValue::from_str(&format_expiry(&rotated.expiry)),
    );
    match values {
        (Ok(token), Ok(expiry)) => {
            let response_headers = res.headers_mut();
            response_headers.append(headers.token.clone(), token);
            response_headers.append(headers.expiry.clone(), expiry);
        }
        _ => log::error!("Rotated token could not be encoded as a header value"),
    }
}

/// Extractor for required authentication
impl FromRequest for AuthContext {
    type Error = Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut actix_web::dev::Payload) -> Self::Future {
        let result = req
            .extensions()
            .get::<AuthContext>()
            .cloned()
            .ok_or_else(|| ErrorUnauthorized("Authentication required"));

        ready(result)
    }
}
