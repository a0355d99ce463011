use actix_web::{web, HttpResponse};

use crate::app::{AppState, Ports};
use crate::dto::{SignupRequest, TokenResponse};
use crate::handlers::handle_domain_error;

/// Handler for POST /v1/signup
///
/// Creates an account with its first credential and logs it in.
///
/// ## Success (201 Created)
/// The token JSON, as returned by `POST /v1/auth`.
///
/// ## Errors
/// - 400 Bad Request: incomplete credentials
/// - 401 Unauthorized: the identity provider rejected the token
/// - 409 Conflict: the credential is already registered
pub async fn signup<P: Ports>(
    state: web::Data<AppState<P>>,
    request: web::Json<SignupRequest>,
) -> HttpResponse {
    let SignupRequest {
        account,
        credentials,
    } = request.into_inner();

    match state.account_service.signup(account, credentials).await {
        Ok(token) => HttpResponse::Created().json(TokenResponse::from(&token)),
        Err(error) => handle_domain_error(error),
    }
}
