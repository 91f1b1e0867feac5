//! Handlers for the `/api/books` resource.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use bookshelf_core::book::book_not_found;
use bookshelf_db::models::book::{Book, BookInput};
use bookshelf_db::repositories::BookRepo;

use crate::error::{AppError, AppResult};
use crate::extract::{BookId, JsonBody};
use crate::state::AppState;

/// GET /api/books
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Book>>> {
    let books = BookRepo::list(&state.pool).await?;
    Ok(Json(books))
}

/// POST /api/books
///
/// Title, author and isbn must be present; a duplicate isbn is rejected by
/// the storage layer.
pub async fn create(
    State(state): State<AppState>,
    JsonBody(input): JsonBody<BookInput>,
) -> AppResult<(StatusCode, Json<Book>)> {
    let record = input.validate()?;
    let book = BookRepo::create(&state.pool, &record).await?;

    tracing::info!(book_id = book.id, isbn = %book.isbn, "Book created");

    Ok((StatusCode::CREATED, Json(book)))
}

/// GET /api/books/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    BookId(id): BookId,
) -> AppResult<Json<Book>> {
    let book = BookRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(book_not_found()))?;
    Ok(Json(book))
}

/// PUT /api/books/{id}
///
/// Replaces all five editable fields. Omitted optional fields are cleared;
/// omitted required fields fail validation exactly as on create.
pub async fn update(
    State(state): State<AppState>,
    BookId(id): BookId,
    JsonBody(input): JsonBody<BookInput>,
) -> AppResult<Json<Book>> {
    if BookRepo::find_by_id(&state.pool, id).await?.is_none() {
        return Err(AppError::Core(book_not_found()));
    }

    let record = input.validate()?;

    // The row may have been deleted between the lookup and the write.
    let book = BookRepo::update(&state.pool, id, &record)
        .await?
        .ok_or(AppError::Core(book_not_found()))?;

    tracing::info!(book_id = id, isbn = %book.isbn, "Book updated");

    Ok(Json(book))
}

/// DELETE /api/books/{id}
pub async fn delete(State(state): State<AppState>, BookId(id): BookId) -> AppResult<StatusCode> {
    let deleted = BookRepo::delete(&state.pool, id).await?;
    if !deleted {
        return Err(AppError::Core(book_not_found()));
    }

    tracing::info!(book_id = id, "Book deleted");

    Ok(StatusCode::NO_CONTENT)
}
