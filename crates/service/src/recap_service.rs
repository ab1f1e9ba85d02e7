use std::sync::Arc;

use leetlog_core::{ProblemEntry, WeeklyStats};
use leetlog_llm::LlmClient;

/// Recap returned verbatim when the window has no entries. No AI call is
/// made in that case.
pub const NO_ACTIVITY_RECAP: &str = "• No problems logged this week.\n• Start solving problems and add notes to get personalized insights!\n• Try an Easy problem to build momentum.";

/// Bullets substituted when the AI insight call is unavailable or fails.
const FALLBACK_INSIGHTS: [&str; 3] = [
    "• Mistake Analysis Failed: Review notes manually for patterns.",
    "• Solution: Revisit problems marked \"Needs Revision\".",
    "• Focus: Strengthen core patterns like those in your recent problems.",
];

/// Builds weekly recaps from problem-log entries.
pub struct RecapService {
    llm: Option<Arc<LlmClient>>,
}

impl RecapService {
    #[must_use]
    pub const fn new(llm: Option<Arc<LlmClient>>) -> Self {
        Self { llm }
    }

    /// The weekly recap for entries already scoped to the caller's 7-day
    /// window: four deterministic stat bullets followed by up to three AI
    /// insights, or three fixed bullets when the AI path is unavailable.
    /// Never fails outward.
    pub async fn weekly_recap(&self, user_id: &str, entries: &[ProblemEntry]) -> String {
        if entries.is_empty() {
            return NO_ACTIVITY_RECAP.to_owned();
        }

        let stats = WeeklyStats::from_entries(entries);
        let mut bullets = summary_bullets(&stats);

        match &self.llm {
            Some(llm) => match llm.recap_insights(entries, &stats).await {
                Ok(ai_bullets) => bullets.extend(ai_bullets),
                Err(error) => {
                    tracing::warn!(user_id, %error, "recap insights fell back to fixed bullets");
                    bullets.extend(FALLBACK_INSIGHTS.iter().map(|s| (*s).to_owned()));
                },
            },
            None => bullets.extend(FALLBACK_INSIGHTS.iter().map(|s| (*s).to_owned())),
        }

        bullets.join("\n")
    }
}

/// The four deterministic bullets every non-empty recap starts with.
fn summary_bullets(stats: &WeeklyStats) -> Vec<String> {
    let nudge = if stats.medium_hard() > 0 {
        "Keep challenging yourself!"
    } else {
        "Try a Medium problem this week."
    };
    let confidence = if stats.low_confidence() {
        format!(
            "Mood ({} Frustrating, {} Challenging) shows challenges. Small steps lead to big wins—try revisiting a familiar problem!",
            stats.mood_frustrating, stats.mood_challenging
        )
    } else {
        format!(
            "Mood ({} Easy, {} Moderate) reflects confidence. Push into tougher problems to grow!",
            stats.mood_easy, stats.mood_moderate
        )
    };
    vec![
        format!(
            "• Weekly Stats: {} problems (Easy: {}, Medium: {}, Hard: {}).",
            stats.total, stats.easy, stats.medium, stats.hard
        ),
        format!(
            "• Status: {} solved, {} need revision, {} couldn't solve.",
            stats.solved, stats.needs_revision, stats.couldnt_solve
        ),
        format!("• Progress: You're showing {}. {nudge}", stats.progress_trend().description()),
        format!("• Confidence: {confidence}"),
    ]
}
