use std::collections::HashSet;

use bb_progress::achievement::Achievement;
use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::{StoreError, models::UserAchievement};

pub trait AchievementRepository {
    /// Catalog entries with `is_active` set.
    fn active_achievements(&self) -> Result<Vec<Achievement>, StoreError>;

    /// Insert or replace catalog entries, keyed by code.
    fn save_achievements(&self, achievements: Vec<Achievement>) -> Result<(), StoreError>;

    fn unlocked_codes(&self, user_id: Uuid) -> Result<HashSet<String>, StoreError>;

    /// Every achievement the learner has progress on, unlocked or not.
    fn user_achievements(&self, user_id: Uuid) -> Result<Vec<UserAchievement>, StoreError>;

    /// Mark an achievement unlocked. Returns `false` if it already was.
    fn record_unlock(
        &self,
        user_id: Uuid,
        code: &str,
        progress: u64,
        unlocked_at: DateTime<Utc>,
    ) -> Result<bool, StoreError>;

    /// Store progress on a locked achievement. Unlocked entries are left alone.
    fn record_progress(&self, user_id: Uuid, code: &str, progress: u64) -> Result<(), StoreError>;
}
