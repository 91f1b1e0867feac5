//! Book request rules: required-field presence and identifier parsing.

use crate::error::CoreError;
use crate::types::DbId;

/// Entity name used in not-found errors.
pub const BOOK_ENTITY: &str = "Book";

/// Message returned when any of title, author or isbn is absent.
pub const MISSING_FIELDS_MESSAGE: &str = "Title, author, and isbn are required";

/// Message returned when an isbn collides with an existing book.
pub const DUPLICATE_ISBN_MESSAGE: &str = "ISBN must be unique";

/// A required text field counts as present only when it is non-empty.
fn is_present(value: Option<&str>) -> bool {
    value.is_some_and(|v| !v.is_empty())
}

/// Check that title, author and isbn are all present and non-empty.
///
/// Only presence is checked; whitespace and length are stored as given.
pub fn validate_required_fields(
    title: Option<&str>,
    author: Option<&str>,
    isbn: Option<&str>,
) -> Result<(), CoreError> {
    if is_present(title) && is_present(author) && is_present(isbn) {
        Ok(())
    } else {
        Err(CoreError::Validation(MISSING_FIELDS_MESSAGE.into()))
    }
}

/// Parse a raw path segment into a book id.
///
/// Returns `None` for anything that is not a base-10 `i64`, which callers
/// report exactly like a missing book.
pub fn parse_book_id(raw: &str) -> Option<DbId> {
    raw.parse::<DbId>().ok()
}

/// Build the not-found error for a book lookup.
pub fn book_not_found() -> CoreError {
    CoreError::NotFound {
        entity: BOOK_ENTITY,
    }
}
