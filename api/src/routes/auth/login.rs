use actix_web::{web, HttpResponse};

use acct_core::domain::entities::credentials::CredentialsInput;

use crate::app::{AppState, Ports};
use crate::dto::TokenResponse;
use crate::handlers::handle_domain_error;

/// Handler for POST /v1/auth
///
/// Exchanges credentials for a fresh token.
///
/// # Request Body
///
/// ```json
/// { "username": "jim", "password": "secret" }
/// ```
/// or
/// ```json
/// { "providerId": "1234", "providerName": "facebook", "providerToken": "EAAB..." }
/// ```
///
/// # Response
///
/// ## Success (200 OK)
/// ```json
/// { "value": "q8n3...", "expiry": "2024-05-01T12:00:00Z" }
/// ```
///
/// ## Errors
/// - 400 Bad Request: neither credential shape is complete
/// - 401 Unauthorized: credentials did not match
pub async fn login<P: Ports>(
    state: web::Data<AppState<P>>,
    request: web::Json<CredentialsInput>,
) -> HttpResponse {
    match state.auth_service.login(request.into_inner()).await {
        Ok(token) => HttpResponse::Ok().json(TokenResponse::from(&token)),
        Err(error) => handle_domain_error(error),
    }
}
