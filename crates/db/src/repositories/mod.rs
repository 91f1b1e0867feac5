//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument and return [`DbError`].
//!
//! [`DbError`]: crate::error::DbError

pub mod book_repo;

pub use book_repo::BookRepo;
