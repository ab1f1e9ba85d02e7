use leetlog_core::strip_code_fences;
use serde::Deserialize;

use crate::ai_types::{ChatRequest, Message};
use crate::client::{COMPLETION_TEMPERATURE, LlmClient, truncate};
use crate::error::LlmError;

const HELP_MAX_TOKENS: u32 = 1000;

/// Structured solution help for one problem.
#[derive(Debug, Clone)]
pub struct ProblemHelp {
    pub code: String,
    pub explanation: String,
    pub pattern: String,
    pub common_mistake: String,
    pub motivation: String,
}

/// Raw AI payload; everything optional so a partial response parses and the
/// required-field check happens in one place.
#[derive(Debug, Deserialize)]
pub(crate) struct HelpJson {
    #[serde(default)]
    pub code: Option<String>,
    #[serde(default)]
    pub explanation: Option<String>,
    #[serde(default)]
    pub pattern: Option<String>,
    #[serde(default, rename = "commonMistake")]
    pub common_mistake: Option<String>,
    #[serde(default)]
    pub motivation: Option<String>,
}

/// Promotes a parsed payload to [`ProblemHelp`]. `code` and `explanation`
/// are mandatory; the remaining fields fill with placeholders.
pub(crate) fn help_from_json(parsed: HelpJson) -> Result<ProblemHelp, LlmError> {
    let code = parsed
        .code
        .filter(|v| !v.trim().is_empty())
        .ok_or_else(|| LlmError::MissingField("code".to_owned()))?;
    let explanation = parsed
        .explanation
        .filter(|v| !v.trim().is_empty())
        .ok_or_else(|| LlmError::MissingField("explanation".to_owned()))?;
    Ok(ProblemHelp {
        code,
        explanation,
        pattern: parsed.pattern.unwrap_or_else(|| "Not specified".to_owned()),
        common_mistake: parsed.common_mistake.unwrap_or_else(|| "Not specified".to_owned()),
        motivation: parsed.motivation.unwrap_or_else(|| "Keep practicing!".to_owned()),
    })
}

impl LlmClient {
    /// Fetches structured solution help for a problem slug in the given
    /// language. Two attempts max, then the error surfaces: there is no
    /// deterministic fallback body for code help.
    ///
    /// # Errors
    /// Fails on exhausted retries, an unparseable JSON payload, or a payload
    /// missing `code`/`explanation`.
    pub async fn problem_help(&self, slug: &str, language: &str) -> Result<ProblemHelp, LlmError> {
        let request = ChatRequest {
            model: self.model.clone(),
            messages: vec![Message {
                role: "user".to_owned(),
                content: build_help_prompt(slug, language),
            }],
            max_tokens: HELP_MAX_TOKENS,
            temperature: COMPLETION_TEMPERATURE,
        };
        let content = self.chat_completion_with_retry(&request, 1).await?;
        let cleaned = strip_code_fences(&content);
        let parsed: HelpJson = serde_json::from_str(cleaned).map_err(|e| LlmError::Parse {
            context: format!("problem help JSON (content: {})", truncate(cleaned, 300)),
            source: e,
        })?;
        help_from_json(parsed)
    }
}

pub(crate) fn build_help_prompt(slug: &str, language: &str) -> String {
    format!(
        r#"Provide a detailed solution for the LeetCode problem with slug "{slug}" in {language}. Structure the response as a JSON object with the following fields:
- code: The complete solution code (string, properly escaped).
- explanation: A clear explanation of the solution (string).
- pattern: The algorithmic pattern used (e.g., "Two Pointers", string).
- commonMistake: A common mistake users make (string).
- motivation: A motivational message (string).

Ensure the code is properly escaped for JSON (e.g., use \n for newlines, \t for tabs). Return only the JSON object, no surrounding prose."#
    )
}
