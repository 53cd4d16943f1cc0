use bb_progress::{
    Learner, LevelChange,
    achievement::{Achievement, LearnerStats, award_unlocked, evaluate},
};
use bb_store::repositories::PracticeStore;
use chrono::{DateTime, Utc};
use tracing::{info, instrument};
use uuid::Uuid;

use crate::{PracticeError, PracticeState, achievement::model::AchievementStatus};

/// Achievements unlocked by one check
#[derive(Debug, Clone, Default)]
pub(crate) struct Unlocked {
    pub(crate) achievements: Vec<Achievement>,
    /// Learner as left by the reward payout, `None` when nothing unlocked
    pub(crate) learner: Option<Learner>,
    pub(crate) level_change: Option<LevelChange>,
}

/// Evaluate every achievement the learner has not unlocked yet.
///
/// Newly unlocked achievements are recorded and their XP rewards paid out;
/// the rest get their progress updated. Returns the catalog entries that were
/// unlocked by this call.
#[instrument(level = "info", skip(state))]
pub fn check_achievements<S: PracticeStore>(
    state: &PracticeState<S>,
    user_id: Uuid,
    now: DateTime<Utc>,
) -> Result<Vec<Achievement>, PracticeError> {
    Ok(unlock_achievements(state, user_id, now)?.achievements)
}

pub(crate) fn unlock_achievements<S: PracticeStore>(
    state: &PracticeState<S>,
    user_id: Uuid,
    now: DateTime<Utc>,
) -> Result<Unlocked, PracticeError> {
    let learner = state
        .store
        .find_learner(user_id)?
        .ok_or_else(|| PracticeError::NotFound(format!("learner {user_id}")))?;
    let records = state.store.progress_for_user(user_id)?;
    let stats = LearnerStats::collect(&learner, &records);

    let catalog = state.store.active_achievements()?;
    let already_unlocked = state.store.unlocked_codes(user_id)?;

    let mut newly_unlocked = Vec::new();
    for check in evaluate(&catalog, &stats, &already_unlocked) {
        if !check.unlocked {
            state
                .store
                .record_progress(user_id, &check.code, check.progress)?;
            continue;
        }

        // A concurrent check may have recorded it first
        if state
            .store
            .record_unlock(user_id, &check.code, check.progress, now)?
        {
            newly_unlocked.push(check);
        }
    }

    if newly_unlocked.is_empty() {
        return Ok(Unlocked::default());
    }

    let (xp, learner, level_change) = state.store.update_learner(user_id, |learner| {
        let previous = learner.level();
        let xp = award_unlocked(learner, &newly_unlocked);
        let change = LevelChange {
            previous,
            current: learner.level(),
        };
        (xp, learner.clone(), change)
    })?;

    for check in &newly_unlocked {
        info!(code = %check.code, xp_reward = check.xp_reward, "Achievement unlocked");
    }
    info!(xp, count = newly_unlocked.len(), "Achievement rewards granted");
    metrics::counter!("achievements_unlocked_total").increment(newly_unlocked.len() as u64);

    Ok(Unlocked {
        achievements: catalog
            .into_iter()
            .filter(|a| newly_unlocked.iter().any(|c| c.code == a.code))
            .collect(),
        learner: Some(learner),
        level_change: Some(level_change),
    })
}

/// Every active achievement with the learner's progress on it.
pub fn list_achievements<S: PracticeStore>(
    state: &PracticeState<S>,
    user_id: Uuid,
) -> Result<Vec<AchievementStatus>, PracticeError> {
    let catalog = state.store.active_achievements()?;
    let standings = state.store.user_achievements(user_id)?;

    Ok(catalog
        .into_iter()
        .map(|achievement| {
            let standing = standings.iter().find(|s| s.code == achievement.code);
            let mut status = AchievementStatus::locked(achievement);
            if let Some(standing) = standing {
                status.unlocked = standing.is_unlocked();
                status.unlocked_at = standing.unlocked_at;
                status.progress = standing.progress;
            }
            status
        })
        .collect())
}
