use actix_web::{http::StatusCode, web, HttpResponse};

use acct_core::errors::DomainError;
use acct_shared::{error_codes, ErrorResponse};

use crate::app::{AppState, Ports};
use crate::dto::{AttachmentQuery, CreateAttachmentRequest, ErrorResponseExt};
use crate::handlers::handle_domain_error;
use crate::middleware::AuthContext;

/// Handler for POST /v1/attachments?parent={account id}
///
/// Stores the attachment and makes it the photo of the parent account.
///
/// # Request Body
///
/// ```json
/// { "url": "https://example.com/me.png" }
/// ```
/// or
/// ```json
/// { "data": "data:image/png;base64,iVBOR...", "contentType": "image/png" }
/// ```
///
/// ## Errors
/// - 400 Bad Request: undecodable or empty data
/// - 401 Unauthorized: parent is not the caller's account
pub async fn create_attachment<P: Ports>(
    state: web::Data<AppState<P>>,
    auth: AuthContext,
    query: web::Query<AttachmentQuery>,
    request: web::Json<CreateAttachmentRequest>,
) -> HttpResponse {
    if query.parent != auth.account_id {
        log::warn!(
            "Account {} tried to attach to account {}",
            auth.account_id,
            query.parent
        );
        return ErrorResponse::new(
            error_codes::UNAUTHORIZED,
            "Attachment parent does not belong to the caller",
        )
        .to_response(StatusCode::UNAUTHORIZED);
    }

    let source = match request.into_inner().into_source() {
        Ok(source) => source,
        Err(e) => return handle_domain_error(DomainError::Validation(e)),
    };

    match state.account_service.attach_photo(auth.account_id, source).await {
        Ok(attachment) => HttpResponse::Created().json(attachment),
        Err(error) => handle_domain_error(error),
    }
}
