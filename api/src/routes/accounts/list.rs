use actix_web::{http::StatusCode, web, HttpResponse};
use validator::Validate;

use acct_shared::{error_codes, ErrorResponse, PaginatedResponse};

use crate::app::{AppState, Ports};
use crate::dto::{ErrorResponseExt, ListAccountsQuery};
use crate::handlers::{handle_domain_error, handle_validation_errors};
use crate::middleware::AuthContext;

/// Handler for GET /v1/accounts?offset=&limit=
///
/// One page of accounts, for configured admin accounts only. The whole page is fetched under the configured
/// time ceiling; exceeding it answers 504 with no partial page.
pub async fn list_accounts<P: Ports>(
    state: web::Data<AppState<P>>,
    auth: AuthContext,
    query: web::Query<ListAccountsQuery>,
) -> HttpResponse {
    if !state.config.auth.is_admin(&auth.account_id.to_string()) {
        log::warn!("Account {} is not allowed to list accounts", auth.account_id);
        return ErrorResponse::new(error_codes::FORBIDDEN, "Account listing is restricted")
            .to_response(StatusCode::FORBIDDEN);
    }

    if let Err(errors) = query.validate() {
        return handle_validation_errors(errors);
    }

    let pagination = query.pagination();
    log::debug!(
        "Account {} listing offset={} limit={}",
        auth.account_id,
        pagination.offset,
        pagination.limit
    );

    match state
        .account_service
        .list_accounts(pagination.offset, pagination.limit)
        .await
    {
        Ok(accounts) => HttpResponse::Ok().json(PaginatedResponse::new(accounts, pagination)),
        Err(error) => handle_domain_error(error),
    }
}
