//! Database gateway error types.

use thiserror::Error;

/// Errors from catalog database operations.
#[derive(Debug, Error)]
pub enum DbError {
    /// Pool sizing failed validation.
    #[error("invalid pool sizing: {0}")]
    InvalidPoolSize(String),

    /// The pool could not yield a connection (creation failure or
    /// checkout timeout).
    #[error("connection pool error: {0}")]
    Pool(#[from] r2d2::Error),

    /// Underlying Oracle client error.
    #[error("oracle error: {0}")]
    Oracle(#[from] oracle::Error),

    /// The pool has been closed.
    #[error("connection pool is closed")]
    Closed,
}
