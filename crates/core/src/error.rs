//! Typed error enum for the core crate.

use std::result::Result as StdResult;

use thiserror::Error;

/// Errors from core domain operations.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Caller provided invalid input (empty title, out-of-range count, etc.).
    #[error("invalid input: {0}")]
    InvalidInput(String),
}

pub type Result<T> = StdResult<T, CoreError>;
