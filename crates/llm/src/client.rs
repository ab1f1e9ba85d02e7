use crate::ai_types::{ChatRequest, ChatResponse};
use crate::error::LlmError;

/// Per-request timeout. Timeouts trigger the same fallback handling as any
/// other failure.
const REQUEST_TIMEOUT_SECS: u64 = 15;
/// Sampling temperature shared by all completion requests.
pub(crate) const COMPLETION_TEMPERATURE: f32 = 0.7;
/// Default completion model.
pub const DEFAULT_MODEL: &str = "mistralai/Mixtral-8x7B-Instruct-v0.1";
/// Default completion endpoint base.
pub const DEFAULT_BASE_URL: &str = "https://api.together.xyz";

/// Client for the chat-completion API.
pub struct LlmClient {
    pub(crate) client: reqwest::Client,
    pub(crate) api_key: String,
    pub(crate) base_url: String,
    pub(crate) model: String,
}

impl std::fmt::Debug for LlmClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LlmClient")
            .field("api_key", &"***")
            .field("base_url", &self.base_url)
            .field("model", &self.model)
            .finish_non_exhaustive()
    }
}

impl LlmClient {
    /// Creates a client with the given API key and base URL. The model
    /// defaults to [`DEFAULT_MODEL`] unless `LEETLOG_MODEL` is set.
    ///
    /// # Errors
    /// Returns an error if the HTTP client cannot be built (TLS backend
    /// failure).
    pub fn new(api_key: String, base_url: String) -> Result<Self, LlmError> {
        let model = std::env::var("LEETLOG_MODEL").unwrap_or_else(|_| DEFAULT_MODEL.to_owned());
        let base_url = base_url.trim_end_matches('/').to_owned();
        let client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()
            .map_err(|e| LlmError::ClientInit(e.to_string()))?;
        Ok(Self { client, api_key, base_url, model })
    }

    /// Sets a custom model for this client.
    #[must_use]
    pub fn with_model(mut self, model: String) -> Self {
        self.model = model;
        self
    }

    /// Returns the model name.
    #[must_use]
    pub fn model(&self) -> &str {
        &self.model
    }

    /// Sends one chat-completion request and extracts the message content.
    ///
    /// # Errors
    /// Fails on transport errors, non-success status, an unparseable body, a
    /// missing/empty choices array, or missing/blank message content. Never
    /// panics on upstream shape.
    pub async fn chat_completion(&self, request: &ChatRequest) -> Result<String, LlmError> {
        let response = self
            .client
            .post(format!("{}/v1/chat/completions", self.base_url))
            .header("Authorization", format!("Bearer {}", self.api_key))
            .json(request)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;
        if !status.is_success() {
            return Err(LlmError::Status { code: status.as_u16(), body });
        }

        let parsed: ChatResponse = serde_json::from_str(&body).map_err(|e| LlmError::Parse {
            context: format!("chat completion response (body: {})", truncate(&body, 200)),
            source: e,
        })?;

        let content = parsed
            .choices
            .first()
            .ok_or(LlmError::NoChoices)?
            .message
            .as_ref()
            .ok_or_else(|| LlmError::MissingField("message".to_owned()))?
            .content
            .as_deref()
            .ok_or_else(|| LlmError::MissingField("content".to_owned()))?
            .trim()
            .to_owned();
        if content.is_empty() {
            return Err(LlmError::EmptyContent);
        }
        Ok(content)
    }

    /// Repeats the identical request up to `retries` extra times. Any failure
    /// counts against the budget, not just transient ones, and attempts are
    /// immediate.
    ///
    /// # Errors
    /// Returns `LlmError::RetriesExhausted` wrapping the last failure.
    pub async fn chat_completion_with_retry(
        &self,
        request: &ChatRequest,
        retries: usize,
    ) -> Result<String, LlmError> {
        let mut last_error: Option<LlmError> = None;
        for attempt in 0..=retries {
            if attempt > 0 {
                tracing::warn!(attempt, retries, "retrying chat completion");
            }
            match self.chat_completion(request).await {
                Ok(content) => return Ok(content),
                Err(e) => last_error = Some(e),
            }
        }
        Err(LlmError::RetriesExhausted(Box::new(last_error.unwrap_or(LlmError::NoChoices))))
    }
}

/// Truncates a string to the given maximum length at a char boundary.
#[must_use]
pub(crate) fn truncate(s: &str, max_len: usize) -> &str {
    if s.len() <= max_len {
        s
    } else {
        let mut end = max_len;
        while end > 0 && !s.is_char_boundary(end) {
            end = end.saturating_sub(1);
        }
        s.get(..end).unwrap_or("")
    }
}
