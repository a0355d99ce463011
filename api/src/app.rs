//! Application state and factory
//!
//! [`Ports`] names the concrete adapter behind every core port, so the
//! same factory serves the MySQL/Redis wiring in `main` and the in-memory
//! doubles in tests.

use std::sync::Arc;

use actix_web::{
    body::MessageBody,
    dev::{ServiceFactory, ServiceRequest, ServiceResponse},
    web, App, HttpResponse,
};
use tracing_actix_web::TracingLogger;

use acct_core::repositories::{AccountRepository, CredentialRepository, TokenCache, TokenRepository};
use acct_core::services::{
    AccountService, AccountServiceConfig, AttachmentStore, AuthService, AuthenticatorConfig,
    CredentialValidator, ProviderVerifier, TokenAuthenticator,
};
use acct_shared::{error_codes, ErrorResponse};

use crate::config::Config;
use crate::middleware::{
    create_cors, CookieAuth, CookieSettings, RequestAuthenticator, RotationHeaders, TokenAuth,
};
use crate::routes::{accounts, attachments, auth, health};

/// Concrete adapters plugged into the core services
pub trait Ports: 'static {
    type Accounts: AccountRepository + 'static;
    type Credentials: CredentialRepository + 'static;
    type Providers: ProviderVerifier + 'static;
    type Tokens: TokenRepository + 'static;
    type Cache: TokenCache + 'static;
    type Attachments: AttachmentStore + 'static;
}

pub type LoginService<P> =
    AuthService<<P as Ports>::Credentials, <P as Ports>::Providers, <P as Ports>::Tokens>;

pub type Accounts<P> = AccountService<
    <P as Ports>::Accounts,
    <P as Ports>::Credentials,
    <P as Ports>::Providers,
    <P as Ports>::Tokens,
    <P as Ports>::Attachments,
>;

pub type Authenticator<P> = TokenAuthenticator<<P as Ports>::Tokens, <P as Ports>::Cache>;

/// Application state that holds shared services
pub struct AppState<P: Ports> {
    pub auth_service: Arc<LoginService<P>>,
    pub account_service: Arc<Accounts<P>>,
    pub authenticator: Arc<Authenticator<P>>,
    pub config: Config,
}

impl<P: Ports> AppState<P> {
    /// Wire the services over one set of adapters
    pub fn new(
        accounts: Arc<P::Accounts>,
        credentials: Arc<P::Credentials>,
        providers: Arc<P::Providers>,
        tokens: Arc<P::Tokens>,
        cache: Arc<P::Cache>,
        attachments: Arc<P::Attachments>,
        config: Config,
    ) -> Self {
        let validator = Arc::new(CredentialValidator::new(credentials.clone(), providers));
        let authenticator = Arc::new(TokenAuthenticator::new(
            tokens.clone(),
            cache,
            AuthenticatorConfig::from(&config.auth.token),
        ));

        Self {
            auth_service: Arc::new(AuthService::new(validator.clone(), tokens.clone())),
            account_service: Arc::new(AccountService::new(
                accounts,
                credentials,
                validator,
                tokens,
                attachments,
                AccountServiceConfig::from(&config.auth),
            )),
            authenticator,
            config,
        }
    }

    fn request_authenticator(&self) -> Arc<dyn RequestAuthenticator> {
        self.authenticator.clone()
    }

    fn token_auth(&self) -> TokenAuth {
        let headers = RotationHeaders::from_config(&self.config.auth.token).unwrap_or_else(|e| {
            log::warn!("Invalid rotation header name, using defaults: {}", e);
            RotationHeaders::default()
        });
        TokenAuth::new(self.request_authenticator()).with_headers(headers)
    }

    fn cookie_auth(&self) -> CookieAuth {
        CookieAuth::new(
            self.request_authenticator(),
            CookieSettings::from_config(&self.config.auth.session, self.config.secure_cookies()),
        )
    }
}

/// Create and configure the application with all dependencies
pub fn create_app<P: Ports>(
    app_state: web::Data<AppState<P>>,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse<impl MessageBody>,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    let config = &app_state.config;
    let cors = create_cors(config.environment, &config.server, &config.auth.token);
    let token_auth = app_state.token_auth();
    let cookie_auth = app_state.cookie_auth();

    App::new()
        .app_data(app_state.clone())
        .wrap(cors)
        .wrap(TracingLogger::default())
        .route("/health", web::get().to(health::health_check))
        .service(
            web::scope("/v1")
                .route("/auth", web::post().to(auth::login::<P>))
                .route("/signup", web::post().to(accounts::signup::<P>))
                .service(
                    web::resource("/me")
                        .wrap(token_auth.clone())
                        .route(web::get().to(accounts::me::<P>)),
                )
                .service(
                    web::resource("/accounts")
                        .wrap(token_auth.clone())
                        .route(web::get().to(accounts::list_accounts::<P>)),
                )
                .service(
                    web::resource("/attachments")
                        .wrap(token_auth)
                        .route(web::post().to(attachments::create_attachment::<P>)),
                ),
        )
        .service(
            web::scope("/web")
                .wrap(cookie_auth)
                .route("/account", web::get().to(accounts::me::<P>)),
        )
        .default_service(web::route().to(not_found))
}

/// Default 404 handler
async fn not_found() -> HttpResponse {
    HttpResponse::NotFound().json(ErrorResponse::new(
        error_codes::NOT_FOUND,
        "The requested resource was not found",
    ))
}
