use std::fmt::Write as _;

use leetlog_core::{ProblemEntry, WeeklyStats};

use crate::ai_types::{ChatRequest, Message};
use crate::client::{COMPLETION_TEMPERATURE, LlmClient};
use crate::error::LlmError;

const RECAP_MAX_TOKENS: u32 = 500;

/// Cap on AI-sourced bullets appended to a weekly recap.
pub const MAX_AI_BULLETS: usize = 3;

impl LlmClient {
    /// Asks for 2-3 bullet observations about the week's journal notes.
    /// Single attempt; the caller substitutes fixed bullets on failure.
    ///
    /// # Errors
    /// Returns any client error unchanged; no retry at this layer.
    pub async fn recap_insights(
        &self,
        entries: &[ProblemEntry],
        stats: &WeeklyStats,
    ) -> Result<Vec<String>, LlmError> {
        let request = ChatRequest {
            model: self.model.clone(),
            messages: vec![Message {
                role: "user".to_owned(),
                content: build_recap_prompt(entries, stats),
            }],
            max_tokens: RECAP_MAX_TOKENS,
            temperature: COMPLETION_TEMPERATURE,
        };
        let content = self.chat_completion(&request).await?;
        Ok(extract_bullets(&content))
    }
}

pub(crate) fn build_recap_prompt(entries: &[ProblemEntry], stats: &WeeklyStats) -> String {
    let mut data = String::new();
    for (index, entry) in entries.iter().enumerate() {
        let status = entry
            .status
            .iter()
            .map(|s| s.as_str())
            .collect::<Vec<_>>()
            .join(", ");
        let patterns = entry.patterns.join(", ");
        _ = writeln!(
            data,
            "Problem {n}: {title}\nDifficulty: {difficulty}\nStatus: {status}\nNotes: {notes}\nPatterns: {patterns}\nMood: {mood}\n",
            n = index + 1,
            title = entry.problem,
            difficulty = entry.difficulty.as_str(),
            notes = if entry.notes.is_empty() { "None" } else { &entry.notes },
            patterns = if patterns.is_empty() { "None" } else { &patterns },
            mood = entry.mood.as_str(),
        );
    }

    format!(
        r#"Analyze the following user notes from their DSA problem journal for the past week. Focus on:
1. Specific mistakes in notes (e.g., "forgot edge cases", "wrong time complexity").
2. Difficulty levels (Easy: {easy}, Medium: {medium}, Hard: {hard}) to assess strengths/weaknesses.
3. Patterns (e.g., sliding window, greedy) and statuses (Solved: {solved}, Needs Revision: {revision}, Couldn't Solve: {couldnt}).
Return a concise recap as 2-3 bullet points, identifying mistakes, suggesting solutions (e.g., practice specific problems, review techniques), and recommending focus areas. Use "•" for bullets.

Data:
{data}
Example:
• Mistake: Forgot edge cases in array problems.
• Solution: Practice "Two Sum" and review boundary conditions.
• Focus: Study sliding window for Medium problems."#,
        easy = stats.easy,
        medium = stats.medium,
        hard = stats.hard,
        solved = stats.solved,
        revision = stats.needs_revision,
        couldnt = stats.couldnt_solve,
    )
}

/// Keeps only lines that carry actual bullet content: a "•" marker after
/// trimming plus more than the marker itself. Preamble and closing prose
/// from the model are dropped.
#[must_use]
pub fn extract_bullets(content: &str) -> Vec<String> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| line.starts_with('•') && line.chars().count() > 2)
        .map(str::to_owned)
        .take(MAX_AI_BULLETS)
        .collect()
}
