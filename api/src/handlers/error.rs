//! Domain error to HTTP response mapping
//!
//! Internal failures are logged with full context and answered with a
//! generic body.

use actix_web::{http::StatusCode, HttpResponse};
use acct_core::errors::{DomainError, ErrorKind};
use acct_shared::{error_codes, ErrorResponse};

use crate::dto::ErrorResponseExt;

/// HTTP status for a taxonomy bucket
pub fn status_for(kind: ErrorKind) -> StatusCode {
    match kind {
        ErrorKind::Malformed => StatusCode::BAD_REQUEST,
        ErrorKind::Unauthenticated => StatusCode::UNAUTHORIZED,
        ErrorKind::Conflict => StatusCode::CONFLICT,
        ErrorKind::NotFound => StatusCode::NOT_FOUND,
        ErrorKind::Timeout => StatusCode::GATEWAY_TIMEOUT,
        ErrorKind::Internal => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

fn body_for(error: &DomainError) -> ErrorResponse {
    match error.kind() {
        ErrorKind::Malformed => {
            let message = match error {
                DomainError::Malformed { message } => message.clone(),
                DomainError::Validation(e) => e.to_string(),
                _ => "Malformed authorization value".to_string(),
            };
            ErrorResponse::new(error_codes::BAD_REQUEST, message)
        }
        ErrorKind::Unauthenticated => {
            let response = ErrorResponse::new(error_codes::UNAUTHORIZED, "Authentication failed");
            match error {
                DomainError::Auth(failure) => response.add_detail("reason", failure.as_str()),
                DomainError::Credential(failure) => {
                    response.add_detail("reason", failure.as_str())
                }
                _ => response,
            }
        }
        ErrorKind::Conflict => {
            ErrorResponse::new(error_codes::CONFLICT, "Credential already registered")
        }
        ErrorKind::NotFound => ErrorResponse::new(error_codes::NOT_FOUND, "Resource not found"),
        ErrorKind::Timeout => ErrorResponse::new(error_codes::TIMEOUT, "The request timed out"),
        ErrorKind::Internal => {
            ErrorResponse::new(error_codes::INTERNAL_ERROR, "An internal error occurred")
        }
    }
}

/// Render a domain error, logging it at a level matching its severity
pub fn error_response(error: &DomainError) -> HttpResponse {
    match error.kind() {
        ErrorKind::Internal => log::error!("Internal error: {:?}", error),
        ErrorKind::Timeout => log::warn!("Request timed out: {}", error),
        ErrorKind::Unauthenticated => log::warn!("Authentication failed: {}", error),
        _ => log::debug!("Request rejected: {}", error),
    }

    body_for(error).to_response(status_for(error.kind()))
}

/// Handle domain errors and convert them to appropriate HTTP responses
pub fn handle_domain_error(error: DomainError) -> HttpResponse {
    error_response(&error)
}

/// Request validation failures from `validator`
pub fn handle_validation_errors(errors: validator::ValidationErrors) -> HttpResponse {
    let mut response =
        ErrorResponse::new(error_codes::VALIDATION_ERROR, "Request validation failed");
    for (field, _) in errors.field_errors() {
        response = response.add_detail(field.to_string(), "invalid");
    }
    response.to_response(StatusCode::BAD_REQUEST)
}

#[cfg(test)]
mod tests {
    use super::*;
    use acct_core::errors::{AuthFailure, ValidationError, ValidationFailure};
    use actix_web::body::to_bytes;

    async fn body_json(response: HttpResponse) -> serde_json::Value {
        let bytes = to_bytes(response.into_body()).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[test]
    fn test_status_mapping() {
        let cases = [
            (DomainError::Auth(AuthFailure::Malformed), 400),
            (DomainError::Auth(AuthFailure::MissingToken), 401),
            (DomainError::Auth(AuthFailure::Expired), 401),
            (DomainError::Auth(AuthFailure::RotationFailed), 500),
            (DomainError::Credential(ValidationFailure::NoMatch), 401),
            (DomainError::Validation(ValidationError::InvalidCredentials), 400),
            (
                DomainError::Conflict {
                    message: "dup".to_string(),
                },
                409,
            ),
            (
                DomainError::NotFound {
                    resource: "Account".to_string(),
                },
                404,
            ),
            (
                DomainError::Timeout {
                    operation: "list".to_string(),
                },
                504,
            ),
            (DomainError::internal("boom"), 500),
        ];

        for (error, status) in cases {
            assert_eq!(error_response(&error).status().as_u16(), status, "{:?}", error);
        }
    }

    #[actix_web::test]
    async fn test_internal_text_not_leaked() {
        let response = error_response(&DomainError::internal("mysql://secret@db failed"));
        let body = body_json(response).await;

        assert_eq!(body["error"], "INTERNAL_ERROR");
        assert!(!body.to_string().contains("secret"));
    }

    #[actix_web::test]
    async fn test_auth_reason_detail() {
        let response = error_response(&DomainError::Auth(AuthFailure::TokenNotFound));
        let body = body_json(response).await;

        assert_eq!(body["details"]["reason"], "token_not_found");
    }
}
