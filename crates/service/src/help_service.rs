use std::sync::Arc;

use leetlog_llm::{LlmClient, ProblemHelp};

use crate::ServiceError;

/// On-demand solution help for a single problem slug.
///
/// Unlike roadmaps and recaps there is no deterministic fallback body for
/// code help, so failures here surface to the caller.
pub struct HelpService {
    llm: Option<Arc<LlmClient>>,
}

impl HelpService {
    #[must_use]
    pub const fn new(llm: Option<Arc<LlmClient>>) -> Self {
        Self { llm }
    }

    pub async fn problem_help(
        &self,
        slug: &str,
        language: &str,
    ) -> Result<ProblemHelp, ServiceError> {
        if slug.trim().is_empty() || language.trim().is_empty() {
            return Err(ServiceError::InvalidInput("slug and language are required".to_owned()));
        }
        let llm = self.llm.as_ref().ok_or_else(|| {
            ServiceError::NotConfigured("problem help requires an LLM client".to_owned())
        })?;
        tracing::debug!(slug, language, "requesting problem help");
        Ok(llm.problem_help(slug, language).await?)
    }
}
