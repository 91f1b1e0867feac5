//! Storage client for the bookshelf service.
//!
//! Owns pool construction, the schema bootstrap, and the repository layer.
//! Every failure leaving this crate is a [`DbError`] so callers never need to
//! inspect raw driver errors.

pub mod config;
pub mod error;
pub mod models;
pub mod repositories;

use sqlx::postgres::PgPoolOptions;

pub use config::{ConfigError, DbConfig};
pub use error::DbError;

pub type DbPool = sqlx::PgPool;

/// Create a connection pool from database configuration.
///
/// Connections are acquired lazily per query and returned to the pool when
/// the query completes.
pub async fn create_pool(config: &DbConfig) -> Result<DbPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(config.max_connections)
        .connect_with(config.connect_options())
        .await
}

/// Verify the database answers a trivial query.
pub async fn health_check(pool: &DbPool) -> Result<(), sqlx::Error> {
    sqlx::query("SELECT 1").execute(pool).await?;
    Ok(())
}

/// Create the `books` table if it does not exist yet.
///
/// Idempotent: already-applied migrations are skipped and the DDL itself uses
/// `IF NOT EXISTS`. Must complete before the server accepts requests.
pub async fn ensure_schema(pool: &DbPool) -> Result<(), sqlx::migrate::MigrateError> {
    sqlx::migrate!("./migrations").run(pool).await?;
    tracing::debug!("Book schema is up to date");
    Ok(())
}
