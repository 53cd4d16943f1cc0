use bb_progress::Learner;
use uuid::Uuid;

use crate::StoreError;

pub trait LearnerRepository {
    fn find_learner(&self, user_id: Uuid) -> Result<Option<Learner>, StoreError>;

    /// Insert or replace a learner.
    fn save_learner(&self, learner: Learner) -> Result<(), StoreError>;

    /// Atomically mutate an existing learner.
    ///
    /// Fails with [`StoreError::NotFound`] if the learner does not exist.
    fn update_learner<F, T>(&self, user_id: Uuid, update: F) -> Result<T, StoreError>
    where
        F: FnOnce(&mut Learner) -> T;
}
