//! Typed error enum for the LLM crate.

use thiserror::Error;

/// Errors from chat-completion calls.
#[derive(Debug, Error)]
pub enum LlmError {
    #[error("http request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("api status {code}: {body}")]
    Status { code: u16, body: String },
    #[error("failed to parse {context}: {source}")]
    Parse {
        context: String,
        #[source]
        source: serde_json::Error,
    },
    #[error("response contained no choices")]
    NoChoices,
    #[error("response missing field: {0}")]
    MissingField(String),
    #[error("response content was empty")]
    EmptyContent,
    #[error("client initialization failed: {0}")]
    ClientInit(String),
    #[error("retries exhausted, last error: {0}")]
    RetriesExhausted(Box<LlmError>),
}
