use bb_progress::{ProgressKey, UserProgress};
use uuid::Uuid;

use crate::StoreError;

pub trait ProgressRepository {
    fn find_progress(&self, key: &ProgressKey) -> Result<Option<UserProgress>, StoreError>;

    /// Every progress record of a learner, across languages and situations.
    fn progress_for_user(&self, user_id: Uuid)
    -> Result<Vec<(ProgressKey, UserProgress)>, StoreError>;

    /// Atomically replace the record at `key` with `update(current)`.
    ///
    /// `current` is `None` when no record exists yet. Returns the stored record.
    fn update_progress<F>(&self, key: &ProgressKey, update: F) -> Result<UserProgress, StoreError>
    where
        F: FnOnce(Option<UserProgress>) -> UserProgress;
}
