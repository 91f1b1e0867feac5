//! Domain types and rules for the bookshelf service.
//!
//! Nothing in here performs I/O, so it can be shared by the storage layer,
//! the HTTP layer and their tests.

pub mod book;
pub mod error;
pub mod types;
