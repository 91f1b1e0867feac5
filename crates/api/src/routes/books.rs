//! Route definitions for the book resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::books;
use crate::state::AppState;

/// Book routes, merged into the `/api` tree.
///
/// ```text
/// GET    /books          -> list
/// POST   /books          -> create
/// GET    /books/{id}     -> get_by_id
/// PUT    /books/{id}     -> update
/// DELETE /books/{id}     -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/books", get(books::list).post(books::create))
        .route(
            "/books/{id}",
            get(books::get_by_id)
                .put(books::update)
                .delete(books::delete),
        )
}
