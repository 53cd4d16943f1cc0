use bb_progress::challenge::{ChallengeProgress, DailyChallenge};
use chrono::{DateTime, Utc};
use serde::Serialize;

/// Today's challenge with the caller's progress on it
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TodayChallenge {
    pub challenge: DailyChallenge,
    pub progress: u32,
    pub completed: bool,
}

impl TodayChallenge {
    pub(crate) fn new(challenge: DailyChallenge, state: Option<ChallengeProgress>) -> Self {
        let state = state.unwrap_or_default();
        Self {
            challenge,
            progress: state.progress,
            completed: state.completed,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChallengeOutcome {
    pub progress: u32,
    pub completed: bool,
    pub completed_at: Option<DateTime<Utc>>,
    /// Non-zero only on the call that completed the challenge
    pub xp_awarded: u64,
}
