use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use bookshelf_core::book::DUPLICATE_ISBN_MESSAGE;
use bookshelf_core::error::CoreError;
use bookshelf_db::repositories::book_repo::ISBN_UNIQUE_CONSTRAINT;
use bookshelf_db::DbError;
use serde_json::json;

/// Message returned for every 500 response. Details go to the log only.
pub const INTERNAL_ERROR_MESSAGE: &str = "Internal server error";

/// Message returned for a unique violation other than the isbn constraint.
pub const DUPLICATE_VALUE_MESSAGE: &str = "Duplicate value";

/// Message returned when a request body is not a usable JSON object.
pub const INVALID_BODY_MESSAGE: &str = "Request body must be valid JSON";

/// Application-level error type for HTTP handlers.
///
/// Wraps [`CoreError`] for domain errors and [`DbError`] for storage errors,
/// and adds HTTP-specific variants. Implements [`IntoResponse`] to produce a
/// `{ "error": "..." }` body.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `bookshelf_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A classified storage error from `bookshelf_db`.
    #[error(transparent)]
    Database(#[from] DbError),

    /// A bad request with a human-readable message.
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// An internal error with a human-readable message.
    #[error("Internal error: {0}")]
    InternalError(String),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            // --- CoreError variants ---
            AppError::Core(core) => match core {
                CoreError::NotFound { .. } => (StatusCode::NOT_FOUND, core.to_string()),
                CoreError::Validation(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            },

            // --- Database errors ---
            AppError::Database(err) => classify_db_error(err),

            // --- HTTP-specific errors ---
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            AppError::InternalError(msg) => {
                tracing::error!(error = %msg, "Internal error");
                internal()
            }
        };

        (status, axum::Json(json!({ "error": message }))).into_response()
    }
}

fn internal() -> (StatusCode, String) {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        INTERNAL_ERROR_MESSAGE.to_string(),
    )
}

/// Map a storage error to an HTTP status and message.
///
/// - A unique violation on `uq_books_isbn` maps to 400 "ISBN must be unique".
/// - Any other unique violation maps to 400 with a fixed message; the
///   constraint name is logged only.
/// - Everything else maps to 500 with a sanitized message.
fn classify_db_error(err: &DbError) -> (StatusCode, String) {
    if err.violates(ISBN_UNIQUE_CONSTRAINT) {
        return (StatusCode::BAD_REQUEST, DUPLICATE_ISBN_MESSAGE.to_string());
    }

    match err {
        DbError::UniqueViolation { constraint } => {
            tracing::warn!(constraint = %constraint, "Unique constraint violated");
            (StatusCode::BAD_REQUEST, DUPLICATE_VALUE_MESSAGE.to_string())
        }
        DbError::Storage(source) => {
            tracing::error!(error = %source, "Database error");
            internal()
        }
    }
}
