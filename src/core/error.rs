//! Typed error handling for the property API
//!
//! Every failure that can reach a client is an [`AppError`]. Handlers and
//! services return `Result<T, AppError>` and propagate with `?`; the only place
//! an error is turned into an HTTP response is [`AppError::into_response`],
//! which renders an RFC 7807 problem body:
//!
//! ```json
//! {
//!   "type": "about:blank",
//!   "title": "NOT_FOUND",
//!   "status": 404,
//!   "detail": "Property not found with id 999",
//!   "code": "NOT_FOUND"
//! }
//! ```
//!
//! Field validation failures additionally carry an `errors` list of
//! `{field, message, rejectedValue}` records.

use axum::Json;
use axum::http::{StatusCode, header};
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use serde_json::Value;
use std::fmt;

/// Media type of every error body
pub const PROBLEM_JSON: &str = "application/problem+json";

// =============================================================================
// Error codes
// =============================================================================

/// Error kind tag, each with a fixed HTTP status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    NotFound,
    BadRequest,
    Conflict,
    InternalError,
}

impl ErrorCode {
    pub fn status_code(self) -> StatusCode {
        match self {
            ErrorCode::NotFound => StatusCode::NOT_FOUND,
            ErrorCode::BadRequest => StatusCode::BAD_REQUEST,
            ErrorCode::Conflict => StatusCode::CONFLICT,
            ErrorCode::InternalError => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ErrorCode::NotFound => "NOT_FOUND",
            ErrorCode::BadRequest => "BAD_REQUEST",
            ErrorCode::Conflict => "CONFLICT",
            ErrorCode::InternalError => "INTERNAL_ERROR",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// =============================================================================
// Field errors
// =============================================================================

/// A single failed field constraint on a request body
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldError {
    /// Name of the offending field as it appears in the JSON body
    pub field: String,
    /// Human-readable constraint message
    pub message: String,
    /// The raw value that was rejected (`null` when the field was absent)
    pub rejected_value: Value,
}

impl FieldError {
    pub fn new(field: impl Into<String>, message: impl Into<String>, rejected_value: Value) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
            rejected_value,
        }
    }
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

// =============================================================================
// Application error
// =============================================================================

/// The error type of the whole request pipeline
#[derive(Debug)]
pub enum AppError {
    /// Referenced identity does not exist
    NotFound(String),

    /// Caller-supplied data conflicts with the operation semantics
    BadRequest(String),

    /// Reserved for state conflicts; no current operation raises it
    Conflict(String),

    /// Any unclassified failure, including storage failures
    Internal(String),

    /// Request body failed one or more field constraints
    Validation(Vec<FieldError>),
}

/// Convenience alias used by services and handlers
pub type AppResult<T> = Result<T, AppError>;

impl AppError {
    pub fn not_found(message: impl Into<String>) -> Self {
        AppError::NotFound(message.into())
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        AppError::BadRequest(message.into())
    }

    pub fn conflict(message: impl Into<String>) -> Self {
        AppError::Conflict(message.into())
    }

    pub fn internal(message: impl Into<String>) -> Self {
        AppError::Internal(message.into())
    }

    /// The canonical "no such property" error
    pub fn property_not_found(id: i64) -> Self {
        AppError::NotFound(format!("Property not found with id {}", id))
    }

    pub fn error_code(&self) -> ErrorCode {
        match self {
            AppError::NotFound(_) => ErrorCode::NotFound,
            AppError::BadRequest(_) | AppError::Validation(_) => ErrorCode::BadRequest,
            AppError::Conflict(_) => ErrorCode::Conflict,
            AppError::Internal(_) => ErrorCode::InternalError,
        }
    }

    pub fn status_code(&self) -> StatusCode {
        self.error_code().status_code()
    }

    /// Detail line of the problem body
    pub fn detail(&self) -> String {
        match self {
            AppError::NotFound(msg)
            | AppError::BadRequest(msg)
            | AppError::Conflict(msg)
            | AppError::Internal(msg) => msg.clone(),
            AppError::Validation(_) => "Validation Failed".to_string(),
        }
    }

    /// Build the problem body for this error
    pub fn to_problem(&self) -> ProblemDetail {
        let mut problem = ProblemDetail::new(self.error_code(), self.detail());
        if let AppError::Validation(errors) = self {
            problem.errors = Some(errors.clone());
        }
        problem
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Validation(errors) => {
                let fields: Vec<String> = errors.iter().map(ToString::to_string).collect();
                write!(f, "Validation Failed: {}", fields.join(", "))
            }
            other => write!(f, "{}", other.detail()),
        }
    }
}

impl std::error::Error for AppError {}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match &self {
            AppError::Internal(msg) => tracing::error!(error = %msg, "internal error"),
            other => tracing::debug!(code = %other.error_code(), error = %other, "request failed"),
        }
        self.to_problem().into_response()
    }
}

/// Storage and other opaque failures surface as internal errors
impl From<anyhow::Error> for AppError {
    fn from(err: anyhow::Error) -> Self {
        AppError::Internal(format!("{:#}", err))
    }
}

// =============================================================================
// Problem body
// =============================================================================

/// RFC 7807 problem body shared by every error response
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProblemDetail {
    #[serde(rename = "type")]
    pub problem_type: String,
    pub title: String,
    pub status: u16,
    pub detail: String,
    pub code: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub errors: Option<Vec<FieldError>>,
}

impl ProblemDetail {
    pub fn new(code: ErrorCode, detail: impl Into<String>) -> Self {
        Self {
            problem_type: "about:blank".to_string(),
            title: code.as_str().to_string(),
            status: code.status_code().as_u16(),
            detail: detail.into(),
            code: code.as_str().to_string(),
            errors: None,
        }
    }

    fn status_code(&self) -> StatusCode {
        StatusCode::from_u16(self.status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
    }
}

impl IntoResponse for ProblemDetail {
    fn into_response(self) -> Response {
        (
            self.status_code(),
            [(header::CONTENT_TYPE, PROBLEM_JSON)],
            Json(self),
        )
            .into_response()
    }
}

// =============================================================================
// Tests
// =============================================================================
