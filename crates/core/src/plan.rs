//! Day-budget math and the deterministic fallback roadmap.
//!
//! Everything here is pure: the service layer computes a [`RoadmapParams`]
//! per topic and either hands it to the AI path or renders [`fallback_roadmap`]
//! directly. The fallback is always available and never fails.

use chrono::{DateTime, Utc};

use crate::goal::LearningStyle;
use crate::topic::normalize_topic;

const SECONDS_PER_DAY: i64 = 86_400;

/// Difficulty tier by absolute day: 1-10 easy, 11-20 medium, 21+ hard.
/// The tiering is fixed regardless of plan length.
#[must_use]
pub const fn tier_for_day(day: u32) -> &'static str {
    if day <= 10 {
        "easy"
    } else if day <= 20 {
        "medium"
    } else {
        "hard"
    }
}

/// Whole days remaining until `target_date`, rounded up and clamped to a
/// minimum of 1. A past target yields a 1-day plan rather than an error.
#[must_use]
pub fn days_until(target_date: DateTime<Utc>, now: DateTime<Utc>) -> u32 {
    let secs = (target_date - now).num_seconds();
    let days = (secs + SECONDS_PER_DAY - 1).div_euclid(SECONDS_PER_DAY).max(1);
    u32::try_from(days).unwrap_or(u32::MAX)
}

/// Resolved inputs for one topic's roadmap.
#[derive(Debug, Clone)]
pub struct RoadmapParams {
    pub daily_time: u32,
    pub learning_style: LearningStyle,
    pub problem_count: u32,
    pub total_days: u32,
    pub topic: String,
}

impl RoadmapParams {
    /// Resolves the day budget from the target date and normalizes the topic
    /// name once, so both the AI prompt and the fallback agree on wording.
    #[must_use]
    pub fn new(
        daily_time: u32,
        learning_style: LearningStyle,
        problem_count: u32,
        target_date: DateTime<Utc>,
        now: DateTime<Utc>,
        topic: &str,
    ) -> Self {
        Self {
            daily_time,
            learning_style,
            problem_count: problem_count.max(1),
            total_days: days_until(target_date, now),
            topic: normalize_topic(topic),
        }
    }

    #[must_use]
    pub const fn problems_per_day(&self) -> u32 {
        self.problem_count.div_ceil(self.total_days)
    }
}

/// Template-based plan used whenever the AI path is skipped or fails.
///
/// Partitions the day budget into three ceiling-sized segments with the
/// easy/medium/hard tiering, then appends a final review sentence. Non-Video
/// output is exactly four sentences joined with ". ".
#[must_use]
pub fn fallback_roadmap(params: &RoadmapParams) -> String {
    let days = params.total_days;
    let per_day = params.problems_per_day();
    let segment_days = days.div_ceil(3);
    let mut tasks = Vec::with_capacity(4);
    for segment in 0..3u32 {
        let start = segment * segment_days + 1;
        let end = (start + segment_days - 1).min(days);
        let tier = tier_for_day(start);
        let mut task = format!(
            "Day {start}-{end}: Solve {per_day} {tier} {topic} problems daily, spending {minutes} minutes",
            topic = params.topic,
            minutes = params.daily_time,
        );
        if params.learning_style == LearningStyle::Video {
            task.push_str(&format!(
                ". Watch a 10-minute {tier} {topic} video tutorial",
                topic = params.topic
            ));
        }
        tasks.push(task);
    }
    tasks.push(format!("Day {days}: Review all {topic} problems with a quiz", topic = params.topic));
    tasks.join(". ")
}
