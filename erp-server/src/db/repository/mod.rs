//! Repository Module
//!
//! Free functions over `&SqlitePool`, one module per table. Each function
//! returns [`RepoResult`]; SQLite unique-constraint violations are mapped to
//! the offending field so the API can report them per-field.

pub mod category;
pub mod item;
pub mod role;
pub mod stock;
pub mod store;
pub mod user;

use shared::{AppError, ErrorCode};
use thiserror::Error;

/// Repository error types
#[derive(Debug, Error)]
pub enum RepoError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Duplicate value for {field}")]
    Duplicate { field: &'static str },

    #[error("Business rule: {1}")]
    Business(ErrorCode, String),

    #[error("Database error: {0}")]
    Database(String),
}

impl From<sqlx::Error> for RepoError {
    fn from(err: sqlx::Error) -> Self {
        RepoError::Database(err.to_string())
    }
}

impl From<RepoError> for AppError {
    fn from(err: RepoError) -> Self {
        match err {
            RepoError::NotFound(msg) => AppError::not_found(msg),
            RepoError::Duplicate { field } => AppError::duplicate(field),
            RepoError::Business(code, msg) => AppError::with_message(code, msg),
            RepoError::Database(msg) => AppError::database(msg),
        }
    }
}

/// Result type for repository operations
pub type RepoResult<T> = Result<T, RepoError>;

/// Map a sqlx error to [`RepoError::Duplicate`] when it is a unique-constraint
/// violation on one of the given columns, e.g. `&[("item.sku", "sku")]`.
///
/// SQLite reports the violated column as `UNIQUE constraint failed: table.col`
/// in the error message; that is the only handle sqlx exposes for it.
pub(crate) fn map_unique_violation(
    err: sqlx::Error,
    columns: &[(&'static str, &'static str)],
) -> RepoError {
    if let sqlx::Error::Database(db_err) = &err {
        if db_err.is_unique_violation() {
            let message = db_err.message().to_string();
            for (column, field) in columns {
                if message.contains(column) {
                    return RepoError::Duplicate { field };
                }
            }
        }
    }
    RepoError::from(err)
}
