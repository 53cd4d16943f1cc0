use bb_progress::{ProgressKey, apply_attempt, streak::record_activity};
use bb_scoring::{reward, score};
use bb_store::repositories::PracticeStore;
use chrono::{DateTime, Utc};
use tracing::{debug, info, instrument};
use uuid::Uuid;

use crate::{
    PracticeError, PracticeState, achievement,
    practice::model::{AttemptOutcome, ProgressStats},
    validation::validate_transcript,
};

/// Score a transcript against a phrase and fold the result into the
/// learner's progress, XP, level and streak.
///
/// The situation record is created on the learner's first attempt in that
/// situation. When achievements are enabled, any unlocked by the new totals
/// are recorded and rewarded before the outcome is built.
#[instrument(
    level = "info",
    skip(state, transcript),
    fields(%user_id, %phrase_id, transcript_len = transcript.len())
)]
pub fn submit_attempt<S: PracticeStore>(
    state: &PracticeState<S>,
    user_id: Uuid,
    phrase_id: Uuid,
    transcript: &str,
    now: DateTime<Utc>,
) -> Result<AttemptOutcome, PracticeError> {
    validate_transcript(transcript, state.config.max_transcript_chars)?;

    let phrase = state
        .store
        .find_phrase(phrase_id)?
        .ok_or_else(|| PracticeError::NotFound(format!("phrase {phrase_id}")))?;

    let accuracy = score(transcript, &phrase.local);
    let reward = reward(accuracy);
    debug!(%accuracy, xp = reward.xp, tier = reward.tier.as_str(), "Scored attempt");

    // The learner is credited first so a missing learner leaves no progress
    // behind. The level change is read under the same update.
    let (mut learner, level_change, streak) = state.store.update_learner(user_id, |learner| {
        let level_change = learner.award_xp(reward.xp);
        let streak = record_activity(learner, now);
        (learner.clone(), level_change, streak)
    })?;
    if streak.extended() {
        debug!(streak = streak.current, "Streak extended");
    }

    let key = ProgressKey::new(user_id, phrase.language_id, phrase.situation);
    let progress = state.store.update_progress(&key, |current| {
        apply_attempt(current, phrase_id, accuracy, reward.xp, now)
    })?;

    metrics::counter!("practice_attempts_total", "tier" => reward.tier.as_str()).increment(1);
    metrics::histogram!("practice_xp_awarded").record(reward.xp as f64);

    let mut leveled_up = level_change.leveled_up();
    let mut new_achievements = Vec::new();
    if state.config.award_achievements {
        let unlocked = achievement::service::unlock_achievements(state, user_id, now)?;
        if let Some(change) = unlocked.level_change {
            leveled_up |= change.leveled_up();
        }
        if let Some(rewarded) = unlocked.learner {
            learner = rewarded;
        }
        new_achievements = unlocked.achievements.into_iter().map(|a| a.code).collect();
    }

    if leveled_up {
        info!(level = learner.level(), total_xp = learner.total_xp(), "Learner leveled up");
    }

    Ok(AttemptOutcome {
        accuracy,
        xp_earned: reward.xp,
        feedback_message: reward.message,
        tier: reward.tier,
        total_xp: learner.total_xp(),
        level: learner.level(),
        leveled_up,
        current_streak: learner.current_streak,
        progress_stats: ProgressStats {
            phrases_completed: progress.phrases_completed.len(),
            average_accuracy: progress.average_accuracy.round() as u64,
            total_attempts: progress.total_attempts,
        },
        new_achievements,
    })
}
