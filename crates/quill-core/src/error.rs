//! Domain-level error types.

use thiserror::Error;

/// Store-level errors.
///
/// `NotFound` is a distinct variant so callers can map a missing row to
/// 404 while every other failure maps to 500.
#[derive(Debug, Error)]
pub enum RepoError {
    #[error("Database connection failed: {0}")]
    Connection(String),

    #[error("Query execution failed: {0}")]
    Query(String),

    #[error("Entity not found")]
    NotFound,
}
