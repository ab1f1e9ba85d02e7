use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{CoreError, Result};

/// Problem difficulty as labeled by the source site.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Easy => "Easy",
            Self::Medium => "Medium",
            Self::Hard => "Hard",
        }
    }
}

impl std::str::FromStr for Difficulty {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "Easy" => Ok(Self::Easy),
            "Medium" => Ok(Self::Medium),
            "Hard" => Ok(Self::Hard),
            other => Err(CoreError::InvalidInput(format!("unknown difficulty: {other}"))),
        }
    }
}

/// How the attempt felt, logged alongside the objective difficulty.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum Mood {
    Easy,
    Moderate,
    Challenging,
    Frustrating,
}

impl Mood {
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Easy => "Easy",
            Self::Moderate => "Moderate",
            Self::Challenging => "Challenging",
            Self::Frustrating => "Frustrating",
        }
    }
}

impl std::str::FromStr for Mood {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "Easy" => Ok(Self::Easy),
            "Moderate" => Ok(Self::Moderate),
            "Challenging" => Ok(Self::Challenging),
            "Frustrating" => Ok(Self::Frustrating),
            other => Err(CoreError::InvalidInput(format!("unknown mood: {other}"))),
        }
    }
}

/// Outcome tag for an attempt. An entry carries a set of these, not a single
/// value: a problem can be solved and still flagged for revision.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum ProblemStatus {
    Solved,
    #[serde(rename = "Needs Revision")]
    NeedsRevision,
    #[serde(rename = "Couldn't Solve")]
    CouldntSolve,
}

impl ProblemStatus {
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Solved => "Solved",
            Self::NeedsRevision => "Needs Revision",
            Self::CouldntSolve => "Couldn't Solve",
        }
    }
}

impl std::str::FromStr for ProblemStatus {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "Solved" => Ok(Self::Solved),
            "Needs Revision" => Ok(Self::NeedsRevision),
            "Couldn't Solve" => Ok(Self::CouldntSolve),
            other => Err(CoreError::InvalidInput(format!("unknown status: {other}"))),
        }
    }
}

/// One logged problem attempt.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProblemEntry {
    pub user_id: String,
    pub problem: String,
    pub slug: String,
    pub difficulty: Difficulty,
    pub mood: Mood,
    pub status: Vec<ProblemStatus>,
    pub patterns: Vec<String>,
    pub notes: String,
    /// Cached AI help text, if the user requested it for this problem.
    pub ai_suggestions: Option<String>,
    /// Feeds the calendar heatmap; distinct from `created_at`.
    pub solved_date: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

impl ProblemEntry {
    /// Builds a validated entry, deriving the slug from the title. An empty
    /// status set defaults to `Needs Revision`.
    ///
    /// # Errors
    /// Returns `CoreError::InvalidInput` if the title is blank.
    pub fn new(
        user_id: String,
        problem: &str,
        difficulty: Difficulty,
        mood: Mood,
        status: Vec<ProblemStatus>,
        patterns: Vec<String>,
        notes: String,
        created_at: DateTime<Utc>,
    ) -> Result<Self> {
        let title = problem.trim();
        if title.is_empty() {
            return Err(CoreError::InvalidInput("problem title is required".to_owned()));
        }
        let status =
            if status.is_empty() { vec![ProblemStatus::NeedsRevision] } else { status };
        Ok(Self {
            user_id,
            problem: title.to_owned(),
            slug: slugify(title),
            difficulty,
            mood,
            status,
            patterns,
            notes,
            ai_suggestions: None,
            solved_date: None,
            created_at,
        })
    }

    #[must_use]
    pub fn has_status(&self, status: ProblemStatus) -> bool {
        self.status.contains(&status)
    }
}

/// Derives the URL-safe identifier for a problem title: lowercase, runs of
/// non-alphanumeric characters collapsed to a single `-`, no leading or
/// trailing separator. Pure, so the same title always yields the same slug.
#[must_use]
pub fn slugify(title: &str) -> String {
    let mut slug = String::with_capacity(title.len());
    let mut pending_sep = false;
    for c in title.chars() {
        if c.is_ascii_alphanumeric() {
            if pending_sep && !slug.is_empty() {
                slug.push('-');
            }
            pending_sep = false;
            slug.push(c.to_ascii_lowercase());
        } else {
            pending_sep = true;
        }
    }
    slug
}

/// Entries created within the trailing 7-day window ending at `now`.
/// The window is derived on demand, never stored.
#[must_use]
pub fn entries_within_past_week(entries: &[ProblemEntry], now: DateTime<Utc>) -> Vec<ProblemEntry> {
    let cutoff = now - Duration::days(7);
    entries.iter().filter(|e| e.created_at >= cutoff).cloned().collect()
}
