//! Repository for the `books` table.

use bookshelf_core::types::DbId;
use sqlx::PgPool;

use crate::error::DbError;
use crate::models::book::{Book, BookRecord};

/// Name of the unique constraint on `books.isbn`.
pub const ISBN_UNIQUE_CONSTRAINT: &str = "uq_books_isbn";

/// Column list for `books` queries.
const COLUMNS: &str = "\
    id, title, author, isbn, publication_year, genre, \
    created_at, updated_at";

/// Provides CRUD operations for books.
pub struct BookRepo;

impl BookRepo {
    /// List every book, oldest id first.
    pub async fn list(pool: &PgPool) -> Result<Vec<Book>, DbError> {
        let query = format!("SELECT {COLUMNS} FROM books ORDER BY id");
        let books = sqlx::query_as::<_, Book>(&query).fetch_all(pool).await?;
        Ok(books)
    }

    /// Find a book by its ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Book>, DbError> {
        let query = format!("SELECT {COLUMNS} FROM books WHERE id = $1");
        let book = sqlx::query_as::<_, Book>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await?;
        Ok(book)
    }

    /// Insert a new book, returning the stored row.
    ///
    /// A duplicate isbn fails with [`DbError::UniqueViolation`].
    pub async fn create(pool: &PgPool, record: &BookRecord) -> Result<Book, DbError> {
        let query = format!(
            "INSERT INTO books (title, author, isbn, publication_year, genre) \
             VALUES ($1, $2, $3, $4, $5) \
             RETURNING {COLUMNS}"
        );
        let book = sqlx::query_as::<_, Book>(&query)
            .bind(&record.title)
            .bind(&record.author)
            .bind(&record.isbn)
            .bind(record.publication_year)
            .bind(&record.genre)
            .fetch_one(pool)
            .await?;
        Ok(book)
    }

    /// Replace all editable fields of a book and refresh `updated_at`.
    ///
    /// Returns `None` if no book has this ID. `created_at` is never touched.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        record: &BookRecord,
    ) -> Result<Option<Book>, DbError> {
        let query = format!(
            "UPDATE books SET \
                 title = $2, \
                 author = $3, \
                 isbn = $4, \
                 publication_year = $5, \
                 genre = $6, \
                 updated_at = clock_timestamp() \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        );
        let book = sqlx::query_as::<_, Book>(&query)
            .bind(id)
            .bind(&record.title)
            .bind(&record.author)
            .bind(&record.isbn)
            .bind(record.publication_year)
            .bind(&record.genre)
            .fetch_optional(pool)
            .await?;
        Ok(book)
    }

    /// Delete a book by ID.
    ///
    /// Returns `true` if a row was deleted.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, DbError> {
        let result = sqlx::query("DELETE FROM books WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
