use actix_web::{web, HttpResponse};

use crate::app::{AppState, Ports};
use crate::handlers::handle_domain_error;
use crate::middleware::AuthContext;

/// Handler for GET /v1/me
///
/// Returns the account owning the presented token, or 404 if the token
/// outlived its account.
pub async fn me<P: Ports>(state: web::Data<AppState<P>>, auth: AuthContext) -> HttpResponse {
    match state.account_service.get(auth.account_id).await {
        Ok(account) => HttpResponse::Ok().json(account),
        Err(error) => handle_domain_error(error),
    }
}
