use bb_progress::challenge::{ChallengeAdvance, ChallengeProgress, DailyChallenge};
use chrono::NaiveDate;
use uuid::Uuid;

use crate::StoreError;

pub trait ChallengeRepository {
    fn find_challenge(&self, challenge_id: Uuid) -> Result<Option<DailyChallenge>, StoreError>;

    fn find_challenge_by_date(&self, date: NaiveDate)
    -> Result<Option<DailyChallenge>, StoreError>;

    /// Store `challenge` unless one already exists for its date, and return
    /// whichever challenge owns the date afterwards.
    fn insert_challenge_if_absent(
        &self,
        challenge: DailyChallenge,
    ) -> Result<DailyChallenge, StoreError>;

    fn find_challenge_progress(
        &self,
        user_id: Uuid,
        challenge_id: Uuid,
    ) -> Result<Option<ChallengeProgress>, StoreError>;

    /// Atomically advance a learner's progress on a challenge.
    ///
    /// The new state is stored only when `update` succeeds.
    fn update_challenge_progress<F, E>(
        &self,
        user_id: Uuid,
        challenge_id: Uuid,
        update: F,
    ) -> Result<ChallengeAdvance, E>
    where
        F: FnOnce(Option<ChallengeProgress>) -> Result<ChallengeAdvance, E>,
        E: From<StoreError>;
}
