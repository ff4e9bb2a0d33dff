//! Error types and result handling for store operations.
//!
//! Every failure of the external store collapses into this small taxonomy.
//! Callers of the HTTP surface never see these messages; handlers log them
//! server-side and answer with a generic body.

use thiserror::Error;

/// Result type alias using `CoreError`.
pub type Result<T> = std::result::Result<T, CoreError>;

/// Core error type for store operations.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Database operation failed.
    #[error("Database error: {0}")]
    Database(String),

    /// Entity not found where exactly one row was required.
    #[error("Not found: {0}")]
    NotFound(String),

    /// More than one row matched where exactly one was required.
    #[error("Multiple rows: {0}")]
    MultipleRows(String),
}

impl From<sqlx::Error> for CoreError {
    fn from(err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::RowNotFound => Self::NotFound("requested entity not found".to_string()),
            _ => Self::Database(err.to_string()),
        }
    }
}
