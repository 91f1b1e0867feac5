/// PostgreSQL SQLSTATE for `unique_violation`.
const UNIQUE_VIOLATION: &str = "23505";

/// Outcome of a failed storage call, classified at the storage boundary.
///
/// Callers match on the variant instead of inspecting driver error codes.
#[derive(Debug, thiserror::Error)]
pub enum DbError {
    /// A write collided with a unique constraint (e.g. `uq_books_isbn`).
    #[error("Unique constraint violated: {constraint}")]
    UniqueViolation { constraint: String },

    /// Any other driver, connection or query failure.
    #[error("Storage error: {0}")]
    Storage(sqlx::Error),
}

impl DbError {
    /// True if this error is a unique violation on the named constraint.
    pub fn violates(&self, name: &str) -> bool {
        matches!(self, DbError::UniqueViolation { constraint } if constraint == name)
    }
}

impl From<sqlx::Error> for DbError {
    fn from(err: sqlx::Error) -> Self {
        if let sqlx::Error::Database(db_err) = &err {
            if db_err.code().as_deref() == Some(UNIQUE_VIOLATION) {
                return DbError::UniqueViolation {
                    constraint: db_err.constraint().unwrap_or("unknown").to_string(),
                };
            }
        }
        DbError::Storage(err)
    }
}
