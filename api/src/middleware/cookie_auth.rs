//! Cookie authentication for browser pages.
//!
//! Reads the session cookie, resolves it like the API middleware and sends
//! the browser to the sign-in page on any failure. A rotated token replaces
//! the cookie.

use actix_web::{
    body::EitherBody,
    cookie::{time::Duration as CookieDuration, Cookie},
    dev::{Service, ServiceRequest, ServiceResponse, Transform},
    http::header::LOCATION,
    Error, HttpMessage, HttpResponse,
};
use acct_core::errors::AuthFailure;
use acct_shared::config::SessionConfig;
use futures_util::future::LocalBoxFuture;
use std::{
    future::{ready, Ready},
    rc::Rc,
    sync::Arc,
    task::{Context, Poll},
};

use super::auth::{AuthContext, RequestAuthenticator};

/// Cookie settings shared by the middleware instances
#[derive(Debug, Clone)]
pub struct CookieSettings {
    pub name: String,
    pub max_age_days: i64,
    pub secure: bool,
    pub signin_path: String,
}

impl CookieSettings {
    pub fn from_config(config: &SessionConfig, secure: bool) -> Self {
        Self {
            name: config.cookie_name.clone(),
            max_age_days: config.cookie_max_age_days,
            secure,
            signin_path: config.signin_path.clone(),
        }
    }

    /// Sign-in location that brings the browser back to `request_uri`
    pub fn signin_location(&self, request_uri: &str) -> String {
        let return_url: String = url::form_urlencoded::byte_serialize(request_uri.as_bytes()).collect();
        format!("{}?returnUrl={}", self.signin_path, return_url)
    }

    /// Session cookie carrying `value`
    pub fn session_cookie(&self, value: String) -> Cookie<'static> {
        Cookie::build(self.name.clone(), value)
            .path("/")
            .http_only(true)
            .secure(self.secure)
            .max_age(CookieDuration::days(self.max_age_days))
            .finish()
    }
}

impl Default for CookieSettings {
    fn default() -> Self {
        Self::from_config(&SessionConfig::default(), false)
    }
}

/// Cookie authentication middleware factory
#[derive(Clone)]
pub struct CookieAuth {
    authenticator: Arc<dyn RequestAuthenticator>,
    settings: CookieSettings,
}

impl CookieAuth {
    pub fn new(authenticator: Arc<dyn RequestAuthenticator>, settings: CookieSettings) -> Self {
        Self {
            authenticator,
            settings,
        }
    }
}

impl<S, B> Transform<S, ServiceRequest> for CookieAuth
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type InitError = ();
    type Transform = CookieAuthMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(CookieAuthMiddleware {
            service: Rc::new(service),
            authenticator: Arc::clone(&self.authenticator),
            settings: Rc::new(self.settings.clone()),
        }))
    }
}

/// Cookie authentication middleware service
pub struct CookieAuthMiddleware<S> {
    service: Rc<S>,
    authenticator: Arc<dyn RequestAuthenticator>,
    settings: Rc<CookieSettings>,
}

impl<S, B> Service<ServiceRequest> for CookieAuthMiddleware<S>
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
        let settings = Rc::clone(&self.settings);

        Box::pin(async move {
            let cookie = req.cookie(&settings.name).map(|c| c.value().to_string());
            let outcome = match cookie {
                Some(value) => authenticator.authenticate_token(&value).await,
                None => Err(AuthFailure::MissingToken.into()),
            };

            let authenticated = match outcome {
                Ok(authenticated) => authenticated,
                Err(e) => {
                    log::info!("Redirecting unauthenticated browser request: {}", e);
                    let location = settings.signin_location(&req.uri().to_string());
                    let response = HttpResponse::TemporaryRedirect()
                        .insert_header((LOCATION, location))
                        .finish();
                    return Ok(req.into_response(response).map_into_right_body());
                }
            };

            req.extensions_mut().insert(AuthContext::from(&authenticated));

            let mut res = service.call(req).await?;
            if let Some(rotated) = &authenticated.rotated {
                let cookie = settings.session_cookie(rotated.value.clone());
                if let Err(e) = res.response_mut().add_cookie(&cookie) {
                    log::error!("Failed to set rotated session cookie: {}", e);
                }
            }
            Ok(res.map_into_left_body())
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_signin_location_encodes_return_url() {
        let settings = CookieSettings::default();
        assert_eq!(
            settings.signin_location("/web/account?tab=1"),
            "/signin?returnUrl=%2Fweb%2Faccount%3Ftab%3D1"
        );
    }

    #[test]
    fn test_session_cookie_attributes() {
        let settings = CookieSettings::from_config(&SessionConfig::default(), true);
        let cookie = settings.session_cookie("abc".to_string());

        assert_eq!(cookie.name(), "app-cookie");
        assert_eq!(cookie.value(), "abc");
        assert_eq!(cookie.http_only(), Some(true));
        assert_eq!(cookie.secure(), Some(true));
        assert_eq!(cookie.max_age(), Some(CookieDuration::days(14)));
    }
}
