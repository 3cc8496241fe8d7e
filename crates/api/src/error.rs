//! API error types with HTTP response mapping.

use application::ApplicationError;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use domain::{BusinessRuleViolation, DomainError, rules};
use store::RepositoryError;

/// API-level error type that maps to HTTP responses.
#[derive(Debug)]
pub enum ApiError {
    /// Resource not found.
    NotFound(String),
    /// Bad request from the client.
    BadRequest(String),
    /// A use case failed.
    Application(ApplicationError),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message, rule) = match self {
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, msg, None),
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg, None),
            ApiError::Application(err) => application_error_to_response(err),
        };

        let body = match rule {
            Some(rule) => serde_json::json!({ "error": message, "rule": rule }),
            None => serde_json::json!({ "error": message }),
        };
        (status, axum::Json(body)).into_response()
    }
}

fn application_error_to_response(
    err: ApplicationError,
) -> (StatusCode, String, Option<&'static str>) {
    let message = err.to_string();
    match &err {
        ApplicationError::NotFound { .. } => (StatusCode::NOT_FOUND, message, None),
        ApplicationError::InvalidQuery(_) | ApplicationError::InactiveCustomer => {
            (StatusCode::BAD_REQUEST, message, None)
        }
        ApplicationError::AlreadyExists { .. } => (StatusCode::CONFLICT, message, None),
        ApplicationError::Domain(DomainError::Validation(_)) => {
            (StatusCode::BAD_REQUEST, message, None)
        }
        ApplicationError::Domain(DomainError::BusinessRule(violation)) => {
            (rule_status(violation), message, Some(violation.rule_name()))
        }
        ApplicationError::Repository(RepositoryError::UniqueViolation { .. }) => {
            (StatusCode::CONFLICT, message, None)
        }
        ApplicationError::Repository(RepositoryError::Backend(_)) => {
            tracing::error!(error = %message, "repository failure");
            (StatusCode::INTERNAL_SERVER_ERROR, message, None)
        }
    }
}

/// State-machine guards conflict with the current state; a bad amount is unprocessable.
fn rule_status(violation: &BusinessRuleViolation) -> StatusCode {
    match violation.rule_name() {
        rules::MINIMUM_ORDER_AMOUNT => StatusCode::UNPROCESSABLE_ENTITY,
        _ => StatusCode::CONFLICT,
    }
}

impl From<ApplicationError> for ApiError {
    fn from(err: ApplicationError) -> Self {
        ApiError::Application(err)
    }
}
