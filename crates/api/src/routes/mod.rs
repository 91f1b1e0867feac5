pub mod books;

use axum::Router;

use crate::state::AppState;

/// Build the `/api` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /books                                           list, create
/// /books/{id}                                      get, update, delete
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new().merge(books::router())
}
