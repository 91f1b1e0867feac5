//! Tests for `AppError` → HTTP response mapping.
//!
//! These tests verify that each `AppError` variant, and each middleware
//! failure, produces the correct HTTP status code and a single-field
//! `{ "error": ... }` body. None of them need a reachable database.

mod common;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use bookshelf_api::config::ServerConfig;
use bookshelf_api::error::AppError;
use bookshelf_api::router::panic_response;
use bookshelf_core::book::book_not_found;
use bookshelf_core::error::CoreError;
use bookshelf_db::DbError;
use http_body_util::BodyExt;

/// Helper: convert a response into its status code and parsed JSON body.
async fn into_parts(response: Response) -> (StatusCode, serde_json::Value) {
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();

    // Every error body has exactly one field.
    assert_eq!(json.as_object().map(|o| o.len()), Some(1), "body: {json}");
    (status, json)
}

async fn error_to_response(err: AppError) -> (StatusCode, serde_json::Value) {
    into_parts(err.into_response()).await
}

#[tokio::test]
async fn not_found_error_returns_404() {
    let (status, json) = error_to_response(AppError::Core(book_not_found())).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["error"], "Book not found");
}

#[tokio::test]
async fn validation_error_returns_400() {
    let err = AppError::Core(CoreError::Validation(
        "Title, author, and isbn are required".into(),
    ));

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["error"], "Title, author, and isbn are required");
}

#[tokio::test]
async fn isbn_unique_violation_returns_400_with_fixed_message() {
    let err = AppError::Database(DbError::UniqueViolation {
        constraint: "uq_books_isbn".into(),
    });

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["error"], "ISBN must be unique");
}

#[tokio::test]
async fn other_unique_violation_hides_constraint_name() {
    let err = AppError::Database(DbError::UniqueViolation {
        constraint: "uq_something_else".into(),
    });

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["error"], "Duplicate value");
    assert!(!json.to_string().contains("uq_something_else"));
}

#[tokio::test]
async fn storage_error_returns_500_and_sanitizes_message() {
    let err = AppError::Database(DbError::Storage(sqlx::Error::PoolTimedOut));

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json["error"], "Internal server error");
}

#[tokio::test]
async fn bad_request_error_returns_400() {
    let (status, json) = error_to_response(AppError::BadRequest("bad body".into())).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["error"], "bad body");
}

#[tokio::test]
async fn internal_error_returns_500_and_sanitizes_message() {
    let err = AppError::InternalError("secret database credentials leaked".into());

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert!(
        !json.to_string().contains("secret"),
        "Internal error response must not leak sensitive details"
    );
    assert_eq!(json["error"], "Internal server error");
}

#[tokio::test]
async fn panic_payload_is_not_leaked() {
    let response = panic_response(Box::new("index out of bounds: secret"));

    let (status, json) = into_parts(response).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json["error"], "Internal server error");
}

#[tokio::test]
async fn request_timeout_returns_500_json() {
    let config = ServerConfig {
        request_timeout_secs: 1,
        ..common::test_config()
    };
    let app = common::build_app_with_config(common::stalled_pool().await, config);

    let response = common::get(app, "/api/books").await;

    let (status, json) = into_parts(response).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json["error"], "Internal server error");
}
