use bb_scoring::{Accuracy, Tier};
use serde::Serialize;

/// Snapshot of the situation record after an attempt
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgressStats {
    pub phrases_completed: usize,
    /// Rounded to a whole percentage
    pub average_accuracy: u64,
    pub total_attempts: u64,
}

/// Response to a submitted attempt
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AttemptOutcome {
    pub accuracy: Accuracy,
    pub xp_earned: u64,
    pub feedback_message: &'static str,
    pub tier: Tier,
    pub total_xp: u64,
    pub level: u64,
    pub leveled_up: bool,
    pub current_streak: u32,
    pub progress_stats: ProgressStats,
    /// Codes of achievements unlocked by this attempt
    pub new_achievements: Vec<String>,
}
