//! Request extractors that reject with [`AppError`] so every failure keeps
//! the `{ "error": ... }` response shape.

use axum::extract::{FromRequest, FromRequestParts, Path, Request};
use axum::http::request::Parts;
use axum::Json;
use bookshelf_core::book::{book_not_found, parse_book_id};
use bookshelf_core::types::DbId;
use serde::de::DeserializeOwned;

use crate::error::{AppError, INVALID_BODY_MESSAGE};

/// The `{id}` path segment of a book route.
///
/// A segment that is not a valid id is rejected as not-found, the same as an
/// id with no stored book.
///
/// ```ignore
/// async fn get_by_id(BookId(id): BookId) -> AppResult<Json<Book>> { .. }
/// ```
pub struct BookId(pub DbId);

impl<S> FromRequestParts<S> for BookId
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|_| AppError::Core(book_not_found()))?;

        parse_book_id(&raw)
            .map(BookId)
            .ok_or_else(|| AppError::Core(book_not_found()))
    }
}

/// JSON request body whose parse failures become 400 `AppError::BadRequest`.
///
/// The client gets a fixed message; the parser's detail is logged.
pub struct JsonBody<T>(pub T);

impl<S, T> FromRequest<S> for JsonBody<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match Json::<T>::from_request(req, state).await {
            Ok(Json(value)) => Ok(JsonBody(value)),
            Err(rejection) => {
                tracing::debug!(error = %rejection.body_text(), "Rejected request body");
                Err(AppError::BadRequest(INVALID_BODY_MESSAGE.into()))
            }
        }
    }
}
