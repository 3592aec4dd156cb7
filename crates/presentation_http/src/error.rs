//! API error handling
//!
//! Provides sanitized error responses that don't leak implementation details.
//! In production mode, internal errors return generic messages without details.

use std::error::Error as StdError;
use std::sync::atomic::{AtomicBool, Ordering};

use application::Classified;
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use domain::{ErrorKind, LogicError, error_chain};
use serde::Serialize;
use thiserror::Error;
use tracing::error;
use utoipa::ToSchema;

/// Global flag to control error detail exposure
/// Set to false in production to prevent information leakage
static EXPOSE_INTERNAL_ERRORS: AtomicBool = AtomicBool::new(true);

const GENERIC_INTERNAL_MESSAGE: &str = "An internal error occurred";
const GENERIC_REQUEST_MESSAGE: &str = "An error occurred processing your request";

/// Configure whether internal error details should be exposed in responses.
///
/// In production environments, this should be set to `false` to prevent
/// leaking implementation details, driver messages, or sensitive information.
pub fn set_expose_internal_errors(expose: bool) {
    EXPOSE_INTERNAL_ERRORS.store(expose, Ordering::SeqCst);
}

/// Check if internal error details should be exposed
fn should_expose_details() -> bool {
    EXPOSE_INTERNAL_ERRORS.load(Ordering::SeqCst)
}

/// Sanitize an error message to remove potentially sensitive information
///
/// This function removes:
/// - File paths
/// - Database connection strings
/// - Stack trace information
/// - Connection details
fn sanitize_error_message(msg: &str) -> String {
    if should_expose_details() {
        return msg.to_string();
    }

    let sensitive_patterns = [
        // File paths
        "/home/",
        "/Users/",
        "/var/",
        "/etc/",
        "\\Users\\",
        "C:\\",
        // Database patterns
        "postgres://",
        "postgresql://",
        "sqlite://",
        "mysql://",
        // Stack trace indicators
        "stack backtrace",
        "panicked at",
        ".rs:",
        // Connection details
        "connection refused",
        "ECONNREFUSED",
    ];

    let msg_lower = msg.to_lowercase();
    for pattern in &sensitive_patterns {
        if msg_lower.contains(&pattern.to_lowercase()) {
            return GENERIC_REQUEST_MESSAGE.to_string();
        }
    }

    if msg.contains("://") || msg.contains('/') && msg.len() > 50 {
        return GENERIC_REQUEST_MESSAGE.to_string();
    }

    msg.to_string()
}

/// HTTP status for a logic-error category
#[must_use]
pub const fn http_status(kind: ErrorKind) -> StatusCode {
    match kind {
        ErrorKind::NoRows | ErrorKind::NotFound => StatusCode::NOT_FOUND,
        ErrorKind::UniqueViolation
        | ErrorKind::ForeignKeyViolation
        | ErrorKind::RestrictViolation
        | ErrorKind::ConcurrentTransactionConflict
        | ErrorKind::Conflict => StatusCode::CONFLICT,
        ErrorKind::NotNullViolation
        | ErrorKind::CheckViolation
        | ErrorKind::IntegrityViolation
        | ErrorKind::UnprocessableEntity => StatusCode::UNPROCESSABLE_ENTITY,
        ErrorKind::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        ErrorKind::BadRequest => StatusCode::BAD_REQUEST,
        ErrorKind::Unauthorized => StatusCode::UNAUTHORIZED,
        ErrorKind::Forbidden => StatusCode::FORBIDDEN,
        ErrorKind::NotAcceptable => StatusCode::NOT_ACCEPTABLE,
        ErrorKind::ServiceUnavailable => StatusCode::SERVICE_UNAVAILABLE,
        ErrorKind::Canceled => StatusCode::GATEWAY_TIMEOUT,
    }
}

/// API error type
#[derive(Debug, Error)]
pub enum ApiError {
    /// A classified failure
    #[error(transparent)]
    Logic(#[from] LogicError),

    /// A failure no classifier recognized
    #[error("Unclassified error: {0}")]
    Unclassified(String),
}

/// Error response body
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    /// Error message
    pub error: String,
    /// Error code
    pub code: String,
    /// Additional error details
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
    /// Payload attached by the classifier (e.g. offending column)
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Option<Object>)]
    pub data: Option<serde_json::Value>,
}

impl ApiError {
    /// HTTP status for this error
    #[must_use]
    pub const fn status(&self) -> StatusCode {
        match self {
            Self::Logic(err) => http_status(err.kind()),
            Self::Unclassified(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Status and body the response will carry
    #[must_use]
    pub fn to_parts(&self) -> (StatusCode, ErrorResponse) {
        let status = self.status();
        let body = match self {
            Self::Logic(err) if status.is_server_error() => ErrorResponse {
                error: internal_message(err.message()),
                code: err.kind().as_str().to_string(),
                details: internal_details(err),
                data: None,
            },
            Self::Logic(err) => ErrorResponse {
                error: sanitize_error_message(err.message()),
                code: err.kind().as_str().to_string(),
                details: None,
                data: err.data().cloned(),
            },
            Self::Unclassified(msg) => ErrorResponse {
                error: GENERIC_INTERNAL_MESSAGE.to_string(),
                code: ErrorKind::Internal.as_str().to_string(),
                details: should_expose_details().then(|| msg.clone()),
                data: None,
            },
        };
        (status, body)
    }
}

fn internal_message(msg: &str) -> String {
    if should_expose_details() {
        msg.to_string()
    } else {
        GENERIC_INTERNAL_MESSAGE.to_string()
    }
}

/// Causes below the logic error, joined outermost first
fn internal_details(err: &LogicError) -> Option<String> {
    if !should_expose_details() {
        return None;
    }
    let causes: Vec<String> = error_chain(err)
        .skip(1)
        .map(ToString::to_string)
        .collect();
    (!causes.is_empty()).then(|| causes.join(": "))
}

impl<E> From<Classified<E>> for ApiError
where
    E: StdError,
{
    fn from(classified: Classified<E>) -> Self {
        match classified {
            Classified::Recognized(err) => Self::Logic(err),
            Classified::Unrecognized(err) => Self::Unclassified(err.to_string()),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, body) = self.to_parts();
        if status.is_server_error() {
            error!(status = status.as_u16(), code = %body.code, error = %self, "Request failed");
        }
        (status, Json(body)).into_response()
    }
}
