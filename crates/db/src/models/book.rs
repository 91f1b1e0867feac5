//! Book models and DTOs.

use bookshelf_core::book::{validate_required_fields, MISSING_FIELDS_MESSAGE};
use bookshelf_core::error::CoreError;
use bookshelf_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `books` table.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize, Deserialize)]
pub struct Book {
    pub id: DbId,
    pub title: String,
    pub author: String,
    pub isbn: String,
    pub publication_year: Option<i32>,
    pub genre: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Request body for both create and update.
///
/// Every field is optional at the wire level so a missing required field
/// surfaces as a validation error rather than a deserialization failure.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct BookInput {
    pub title: Option<String>,
    pub author: Option<String>,
    pub isbn: Option<String>,
    pub publication_year: Option<i32>,
    pub genre: Option<String>,
}

/// The full set of editable fields, with required fields guaranteed present.
///
/// Writes replace all five columns; `None` stores `NULL`.
#[derive(Debug, Clone, PartialEq)]
pub struct BookRecord {
    pub title: String,
    pub author: String,
    pub isbn: String,
    pub publication_year: Option<i32>,
    pub genre: Option<String>,
}

impl BookInput {
    /// Check required fields and convert into a writable record.
    pub fn validate(self) -> Result<BookRecord, CoreError> {
        validate_required_fields(
            self.title.as_deref(),
            self.author.as_deref(),
            self.isbn.as_deref(),
        )?;

        match (self.title, self.author, self.isbn) {
            (Some(title), Some(author), Some(isbn)) => Ok(BookRecord {
                title,
                author,
                isbn,
                publication_year: self.publication_year,
                genre: self.genre,
            }),
            _ => Err(CoreError::Validation(MISSING_FIELDS_MESSAGE.into())),
        }
    }
}
