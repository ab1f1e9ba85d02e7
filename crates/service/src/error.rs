//! Typed error enum for the service layer.
//!
//! Only two failure classes escape this layer: invalid caller input and
//! LLM failures on operations that have no deterministic fallback. Everything
//! else is absorbed where it happens.

use leetlog_core::CoreError;
use leetlog_llm::LlmError;
use thiserror::Error;

/// Service-layer error.
#[derive(Debug, Error)]
pub enum ServiceError {
    /// Caller provided invalid input (empty title, blank slug, etc.).
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// LLM call failed where no fallback body exists (problem help).
    #[error("llm: {0}")]
    Llm(#[from] LlmError),

    /// The operation needs an LLM client and none was configured.
    #[error("not configured: {0}")]
    NotConfigured(String),
}

impl From<CoreError> for ServiceError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::InvalidInput(msg) => Self::InvalidInput(msg),
        }
    }
}
