use leetlog_core::RoadmapParams;

use crate::ai_types::{ChatRequest, Message};
use crate::client::{COMPLETION_TEMPERATURE, LlmClient};
use crate::error::LlmError;

const ROADMAP_MAX_TOKENS: u32 = 200;

impl LlmClient {
    /// Requests a one-paragraph personalized roadmap for a single topic.
    /// Retries once with the identical prompt on any failure; the caller
    /// supplies the deterministic fallback.
    ///
    /// # Errors
    /// Returns `LlmError::RetriesExhausted` once both attempts fail.
    pub async fn roadmap_paragraph(&self, params: &RoadmapParams) -> Result<String, LlmError> {
        let request = ChatRequest {
            model: self.model.clone(),
            messages: vec![Message {
                role: "user".to_owned(),
                content: build_roadmap_prompt(params),
            }],
            max_tokens: ROADMAP_MAX_TOKENS,
            temperature: COMPLETION_TEMPERATURE,
        };
        self.chat_completion_with_retry(&request, 1).await
    }
}

pub(crate) fn build_roadmap_prompt(params: &RoadmapParams) -> String {
    format!(
        "You are an expert coding tutor specializing in LeetCode problems. Create a concise, \
         personalized learning roadmap for a student with a {style} learning style aiming to solve \
         {count} LeetCode {topic} problems in {days} days, with {minutes} minutes daily. The \
         roadmap should include specific daily tasks (e.g., \"Day 1-2: Solve 2 easy {topic} \
         problems, watch a 10-minute video\") with a clear progression from easy (days 1-10), \
         medium (days 11-20), to hard (days 21+) problems, and end with a review or quiz. Output \
         as a single paragraph, max 150 words, in a motivational tone. Do not include arrows, \
         specific LeetCode problem titles, external links, or Markdown links. Avoid repetitive \
         tasks and ensure variety in daily activities (e.g., problem-solving, video tutorials, \
         concept reviews).",
        style = params.learning_style.as_str().to_lowercase(),
        count = params.problem_count,
        topic = params.topic,
        days = params.total_days,
        minutes = params.daily_time,
    )
}

#[cfg(test)]
mod tests {
    use chrono::{Duration, TimeZone, Utc};
    use leetlog_core::LearningStyle;

    use super::*;

    #[test]
    fn prompt_carries_resolved_plan_numbers() {
        let now = Utc.with_ymd_and_hms(2026, 8, 1, 12, 0, 0).unwrap();
        let params = RoadmapParams::new(
            45,
            LearningStyle::CodeFirst,
            12,
            now + Duration::days(14),
            now,
            "linked-list",
        );
        let prompt = build_roadmap_prompt(&params);

        assert!(prompt.contains("code-first learning style"));
        assert!(prompt.contains("12 LeetCode Linked Lists problems in 14 days"));
        assert!(prompt.contains("45 minutes daily"));
        assert!(prompt.contains("max 150 words"));
    }
}
