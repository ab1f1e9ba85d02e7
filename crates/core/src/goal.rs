use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{CoreError, Result};
use crate::topic::parse_topics;

/// Minimum daily commitment accepted on a goal, in minutes.
pub const MIN_DAILY_TIME_MINUTES: u32 = 10;

/// Declared learning style; only `Video` adds video-tutorial tasks to plans.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum LearningStyle {
    Visual,
    #[serde(rename = "Code-first")]
    CodeFirst,
    Video,
}

impl LearningStyle {
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Visual => "Visual",
            Self::CodeFirst => "Code-first",
            Self::Video => "Video",
        }
    }
}

impl std::str::FromStr for LearningStyle {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "Visual" => Ok(Self::Visual),
            "Code-first" => Ok(Self::CodeFirst),
            "Video" => Ok(Self::Video),
            other => Err(CoreError::InvalidInput(format!("unknown learning style: {other}"))),
        }
    }
}

/// Caller-supplied fields for goal creation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GoalInput {
    pub user_id: String,
    pub title: String,
    pub target_date: DateTime<Utc>,
    pub problem_count: u32,
    pub daily_time: u32,
    pub learning_style: LearningStyle,
}

impl GoalInput {
    /// Checks field constraints and resolves the topic list from the title.
    ///
    /// # Errors
    /// Returns `CoreError::InvalidInput` for an empty title, a zero problem
    /// count, a sub-minimum daily time, or a title that yields no topics.
    pub fn validate(&self) -> Result<Vec<String>> {
        if self.title.trim().is_empty() {
            return Err(CoreError::InvalidInput("title is required".to_owned()));
        }
        if self.problem_count == 0 {
            return Err(CoreError::InvalidInput("problem count must be at least 1".to_owned()));
        }
        if self.daily_time < MIN_DAILY_TIME_MINUTES {
            return Err(CoreError::InvalidInput(format!(
                "daily time must be at least {MIN_DAILY_TIME_MINUTES} minutes"
            )));
        }
        let topics = parse_topics(&self.title);
        if topics.is_empty() {
            return Err(CoreError::InvalidInput("at least one topic is required".to_owned()));
        }
        Ok(topics)
    }
}

/// One parsed topic and its generated study plan.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TopicPlan {
    pub name: String,
    pub roadmap: String,
}

/// A monthly study goal. Topics and roadmaps are generated once at creation
/// and never regenerated, even if the title is edited later.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Goal {
    pub id: String,
    pub user_id: String,
    pub title: String,
    pub target_date: DateTime<Utc>,
    pub problem_count: u32,
    pub daily_time: u32,
    pub learning_style: LearningStyle,
    pub progress: u8,
    pub missed_goal_reason: Option<String>,
    pub topics: Vec<TopicPlan>,
    pub created_at: DateTime<Utc>,
}

impl Goal {
    /// Applies a progress/missed-reason edit.
    ///
    /// A goal at 100% progress cannot carry a missed-goal reason; reaching
    /// 100 clears any stored reason.
    ///
    /// # Errors
    /// Returns `CoreError::InvalidInput` if `progress` exceeds 100.
    pub fn apply_update(
        &mut self,
        progress: Option<u8>,
        missed_goal_reason: Option<String>,
    ) -> Result<()> {
        if let Some(p) = progress {
            if p > 100 {
                return Err(CoreError::InvalidInput(format!("progress must be 0-100, got {p}")));
            }
            self.progress = p;
        }
        if let Some(reason) = missed_goal_reason {
            self.missed_goal_reason = Some(reason);
        }
        if self.progress == 100 {
            self.missed_goal_reason = None;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use chrono::TimeZone;

    use super::*;

    fn base_input() -> GoalInput {
        GoalInput {
            user_id: "u1".to_owned(),
            title: "Master Array and Graph".to_owned(),
            target_date: Utc.with_ymd_and_hms(2027, 1, 1, 0, 0, 0).unwrap(),
            problem_count: 20,
            daily_time: 30,
            learning_style: LearningStyle::CodeFirst,
        }
    }

    fn base_goal() -> Goal {
        Goal {
            id: "g1".to_owned(),
            user_id: "u1".to_owned(),
            title: "Master Graph".to_owned(),
            target_date: Utc.with_ymd_and_hms(2027, 1, 1, 0, 0, 0).unwrap(),
            problem_count: 10,
            daily_time: 30,
            learning_style: LearningStyle::Visual,
            progress: 40,
            missed_goal_reason: None,
            topics: vec![TopicPlan { name: "Graph".to_owned(), roadmap: "plan".to_owned() }],
            created_at: Utc.with_ymd_and_hms(2026, 8, 1, 0, 0, 0).unwrap(),
        }
    }

    #[test]
    fn validate_resolves_topics() {
        let topics = base_input().validate().unwrap();
        assert_eq!(topics, vec!["Array".to_owned(), "Graph".to_owned()]);
    }

    #[test]
    fn validate_rejects_blank_title() {
        let mut input = base_input();
        input.title = "   ".to_owned();
        assert!(input.validate().is_err());
    }

    #[test]
    fn validate_rejects_zero_problems() {
        let mut input = base_input();
        input.problem_count = 0;
        assert!(input.validate().is_err());
    }

    #[test]
    fn validate_rejects_low_daily_time() {
        let mut input = base_input();
        input.daily_time = 5;
        assert!(input.validate().is_err());
    }

    #[test]
    fn validate_rejects_title_with_only_fillers() {
        let mut input = base_input();
        input.title = "Master and".to_owned();
        assert!(input.validate().is_err());
    }

    #[test]
    fn update_sets_progress_and_reason() {
        let mut goal = base_goal();
        goal.apply_update(Some(60), Some("busy week".to_owned())).unwrap();
        assert_eq!(goal.progress, 60);
        assert_eq!(goal.missed_goal_reason.as_deref(), Some("busy week"));
    }

    #[test]
    fn update_rejects_progress_over_100() {
        let mut goal = base_goal();
        assert!(goal.apply_update(Some(101), None).is_err());
        assert_eq!(goal.progress, 40);
    }

    #[test]
    fn completing_goal_clears_missed_reason() {
        let mut goal = base_goal();
        goal.missed_goal_reason = Some("fell behind".to_owned());
        goal.apply_update(Some(100), None).unwrap();
        assert!(goal.missed_goal_reason.is_none());
    }

    #[test]
    fn update_never_touches_topics() {
        let mut goal = base_goal();
        goal.apply_update(Some(90), Some("reason".to_owned())).unwrap();
        assert_eq!(goal.topics.len(), 1);
        assert_eq!(goal.topics[0].roadmap, "plan");
    }

    #[test]
    fn learning_style_round_trips() {
        for s in ["Visual", "Code-first", "Video"] {
            assert_eq!(LearningStyle::from_str(s).unwrap().as_str(), s);
        }
        assert!(LearningStyle::from_str("Auditory").is_err());
    }

    #[test]
    fn learning_style_serde_uses_wire_spelling() {
        let json = serde_json::to_string(&LearningStyle::CodeFirst).unwrap();
        assert_eq!(json, "\"Code-first\"");
    }
}
