//! Weekly aggregation over problem-log entries.

use crate::problem::{Difficulty, Mood, ProblemEntry, ProblemStatus};

/// Counts derived from one recap window.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WeeklyStats {
    pub total: usize,
    pub solved: usize,
    pub needs_revision: usize,
    pub couldnt_solve: usize,
    pub easy: usize,
    pub medium: usize,
    pub hard: usize,
    pub mood_easy: usize,
    pub mood_moderate: usize,
    pub mood_challenging: usize,
    pub mood_frustrating: usize,
}

impl WeeklyStats {
    /// Aggregates a window of entries. Status is a set, so a single entry can
    /// count toward several status tallies at once.
    #[must_use]
    pub fn from_entries(entries: &[ProblemEntry]) -> Self {
        let mut stats = Self { total: entries.len(), ..Self::default() };
        for entry in entries {
            if entry.has_status(ProblemStatus::Solved) {
                stats.solved += 1;
            }
            if entry.has_status(ProblemStatus::NeedsRevision) {
                stats.needs_revision += 1;
            }
            if entry.has_status(ProblemStatus::CouldntSolve) {
                stats.couldnt_solve += 1;
            }
            match entry.difficulty {
                Difficulty::Easy => stats.easy += 1,
                Difficulty::Medium => stats.medium += 1,
                Difficulty::Hard => stats.hard += 1,
            }
            match entry.mood {
                Mood::Easy => stats.mood_easy += 1,
                Mood::Moderate => stats.mood_moderate += 1,
                Mood::Challenging => stats.mood_challenging += 1,
                Mood::Frustrating => stats.mood_frustrating += 1,
            }
        }
        stats
    }

    #[must_use]
    pub const fn medium_hard(&self) -> usize {
        self.medium + self.hard
    }

    /// True when more than half the window felt Challenging or Frustrating,
    /// or more than a third of it went unsolved.
    #[must_use]
    pub fn low_confidence(&self) -> bool {
        if self.total == 0 {
            return false;
        }
        let total = self.total as f64;
        let struggling = (self.mood_challenging + self.mood_frustrating) as f64;
        struggling / total > 0.5 || self.couldnt_solve as f64 / total > 1.0 / 3.0
    }

    /// Trajectory bucket, checked in priority order: tougher-problem volume
    /// first, then solve rate, then the catch-all nudge.
    #[must_use]
    pub fn progress_trend(&self) -> ProgressTrend {
        let half = self.total as f64 / 2.0;
        if self.medium_hard() as f64 > half {
            ProgressTrend::TacklingTougher
        } else if self.solved as f64 > half {
            ProgressTrend::ConsistentSolves
        } else {
            ProgressTrend::NeedsPush
        }
    }
}

/// Weekly trajectory bucket used in recap text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProgressTrend {
    TacklingTougher,
    ConsistentSolves,
    NeedsPush,
}

impl ProgressTrend {
    /// The phrase inserted into the recap's progress bullet.
    #[must_use]
    pub const fn description(&self) -> &'static str {
        match self {
            Self::TacklingTougher => "strong progress tackling tougher problems",
            Self::ConsistentSolves => "steady progress with consistent solves",
            Self::NeedsPush => "room to push into Medium/Hard problems",
        }
    }
}
