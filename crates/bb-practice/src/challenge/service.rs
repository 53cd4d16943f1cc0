use bb_progress::challenge::{self, generate_daily_challenge};
use bb_store::repositories::PracticeStore;
use chrono::{DateTime, Utc};
use tracing::{debug, info, instrument};
use uuid::Uuid;

use crate::{
    PracticeError, PracticeState,
    challenge::model::{ChallengeOutcome, TodayChallenge},
};

/// Fetch the challenge for the current UTC day, drawing one if nobody has
/// asked for it yet.
#[instrument(level = "debug", skip(state))]
pub fn today_challenge<S: PracticeStore>(
    state: &PracticeState<S>,
    user_id: Uuid,
    now: DateTime<Utc>,
) -> Result<TodayChallenge, PracticeError> {
    let date = now.date_naive();

    let challenge = match state.store.find_challenge_by_date(date)? {
        Some(challenge) => challenge,
        None => {
            let drawn = generate_daily_challenge(date, &mut rand::thread_rng());
            let stored = state.store.insert_challenge_if_absent(drawn)?;
            debug!(challenge_id = %stored.id, kind = ?stored.kind, "Daily challenge drawn");
            stored
        }
    };

    let progress = state.store.find_challenge_progress(user_id, challenge.id)?;
    Ok(TodayChallenge::new(challenge, progress))
}

/// Push a learner's progress on a challenge forward by `increment`.
///
/// The challenge reward is paid exactly once, on the call that reaches the
/// target.
#[instrument(level = "info", skip(state))]
pub fn advance_challenge<S: PracticeStore>(
    state: &PracticeState<S>,
    user_id: Uuid,
    challenge_id: Uuid,
    increment: u32,
    now: DateTime<Utc>,
) -> Result<ChallengeOutcome, PracticeError> {
    let challenge = state
        .store
        .find_challenge(challenge_id)?
        .ok_or_else(|| PracticeError::NotFound(format!("challenge {challenge_id}")))?;

    if state.store.find_learner(user_id)?.is_none() {
        return Err(PracticeError::NotFound(format!("learner {user_id}")));
    }

    let advance = state
        .store
        .update_challenge_progress(user_id, challenge_id, |current| {
            challenge::advance_challenge(current, &challenge, increment, now)
                .map_err(PracticeError::from)
        })?;

    let xp_awarded = if advance.newly_completed {
        state
            .store
            .update_learner(user_id, |learner| learner.award_xp(challenge.xp_reward))?;
        info!(xp_reward = challenge.xp_reward, "Daily challenge completed");
        metrics::counter!("daily_challenges_completed_total").increment(1);
        challenge.xp_reward
    } else {
        0
    };

    Ok(ChallengeOutcome {
        progress: advance.state.progress,
        completed: advance.state.completed,
        completed_at: advance.state.completed_at,
        xp_awarded,
    })
}
