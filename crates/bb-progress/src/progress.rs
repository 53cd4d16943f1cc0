//! Folding scored attempts into progress records and learner XP.

use bb_scoring::Accuracy;
use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::models::{Learner, UserProgress};

/// XP needed to climb one level.
pub const XP_PER_LEVEL: u64 = 500;

/// Level reached with `total_xp`: `floor(total_xp / 500) + 1`.
///
/// There is no level cap.
pub const fn level_for_xp(total_xp: u64) -> u64 {
    total_xp / XP_PER_LEVEL + 1
}

/// Record one attempt at `phrase_id` in a learner's situation progress.
///
/// A missing record is created empty first, so the first submission for a
/// (learner, language, situation) and every later one go through the same
/// path:
///
/// * a new phrase gets a completion entry with one attempt
/// * a repeated phrase has its attempts incremented and keeps its best accuracy
/// * `total_attempts`, `xp_earned` and `last_completed_at` always advance
/// * `average_accuracy` is recomputed over the best accuracy of each phrase
pub fn apply_attempt(
    progress: Option<UserProgress>,
    phrase_id: Uuid,
    accuracy: Accuracy,
    xp: u64,
    now: DateTime<Utc>,
) -> UserProgress {
    let mut progress = progress.unwrap_or_default();
    progress.record_attempt(phrase_id, accuracy, xp, now);
    progress
}

/// Level before and after an XP award.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LevelChange {
    pub previous: u64,
    pub current: u64,
}

impl LevelChange {
    pub const fn leveled_up(&self) -> bool {
        self.current > self.previous
    }
}

impl Learner {
    /// Add XP and recompute the level.
    pub fn award_xp(&mut self, xp: u64) -> LevelChange {
        let previous = self.level();
        self.set_total_xp(self.total_xp().saturating_add(xp));
        LevelChange {
            previous,
            current: self.level(),
        }
    }
}

/// Add `xp` to the learner's total and recompute the level.
pub fn apply_xp_to_user(mut learner: Learner, xp: u64) -> Learner {
    learner.award_xp(xp);
    learner
}
