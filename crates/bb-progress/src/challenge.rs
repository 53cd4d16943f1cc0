//! Daily challenges.
//!
//! One challenge is drawn per calendar day from a fixed set of templates.
//! Learners push their progress towards the target; reaching it completes the
//! challenge once and pays its XP reward once.

use chrono::{DateTime, NaiveDate, Utc};
use rand::Rng;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::ProgressError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DailyChallengeKind {
    Phrases,
    Accuracy,
    Streak,
    Language,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyChallenge {
    pub id: Uuid,
    pub date: NaiveDate,
    pub kind: DailyChallengeKind,
    pub description: String,
    pub target: u32,
    pub xp_reward: u64,
}

/// Blueprint a daily challenge is drawn from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChallengeTemplate {
    pub kind: DailyChallengeKind,
    pub description: &'static str,
    pub target: u32,
    pub xp_reward: u64,
}

pub const TEMPLATES: [ChallengeTemplate; 3] = [
    ChallengeTemplate {
        kind: DailyChallengeKind::Phrases,
        description: "Complete 5 phrases today",
        target: 5,
        xp_reward: 100,
    },
    ChallengeTemplate {
        kind: DailyChallengeKind::Accuracy,
        description: "Achieve 80%+ accuracy on 3 attempts",
        target: 3,
        xp_reward: 150,
    },
    ChallengeTemplate {
        kind: DailyChallengeKind::Streak,
        description: "Maintain your learning streak",
        target: 1,
        xp_reward: 75,
    },
];

/// Draw the challenge for `date` uniformly from [`TEMPLATES`].
pub fn generate_daily_challenge<R: Rng + ?Sized>(date: NaiveDate, rng: &mut R) -> DailyChallenge {
    let template = TEMPLATES[rng.gen_range(0..TEMPLATES.len())];

    DailyChallenge {
        id: Uuid::new_v4(),
        date,
        kind: template.kind,
        description: template.description.to_string(),
        target: template.target,
        xp_reward: template.xp_reward,
    }
}

/// A learner's progress on one daily challenge
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChallengeProgress {
    pub progress: u32,
    pub completed: bool,
    pub completed_at: Option<DateTime<Utc>>,
}

/// Result of [`advance_challenge`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChallengeAdvance {
    pub state: ChallengeProgress,
    /// True only on the call that first reached the target
    pub newly_completed: bool,
}

/// Add `increment` to a learner's challenge progress.
///
/// Progress keeps counting past the target, but completion (and with it the
/// reward) happens only once. A zero increment is rejected.
pub fn advance_challenge(
    state: Option<ChallengeProgress>,
    challenge: &DailyChallenge,
    increment: u32,
    now: DateTime<Utc>,
) -> Result<ChallengeAdvance, ProgressError> {
    if increment == 0 {
        return Err(ProgressError::InvalidArgument(
            "challenge increment must be at least 1".to_string(),
        ));
    }

    let mut state = state.unwrap_or_default();
    state.progress = state.progress.saturating_add(increment);

    let newly_completed = !state.completed && state.progress >= challenge.target;
    if newly_completed {
        state.completed = true;
        state.completed_at = Some(now);
    }

    Ok(ChallengeAdvance {
        state,
        newly_completed,
    })
}
