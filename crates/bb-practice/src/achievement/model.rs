use bb_progress::achievement::{Achievement, AchievementKind};
use chrono::{DateTime, Utc};
use serde::Serialize;

/// A catalog entry annotated with one learner's standing
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AchievementStatus {
    pub code: String,
    pub name: String,
    pub description: String,
    pub icon: String,
    pub kind: AchievementKind,
    pub requirement: u64,
    pub xp_reward: u64,
    pub unlocked: bool,
    pub unlocked_at: Option<DateTime<Utc>>,
    pub progress: u64,
}

impl AchievementStatus {
    pub(crate) fn locked(achievement: Achievement) -> Self {
        Self {
            code: achievement.code,
            name: achievement.name,
            description: achievement.description,
            icon: achievement.icon,
            kind: achievement.kind,
            requirement: achievement.requirement,
            xp_reward: achievement.xp_reward,
            unlocked: false,
            unlocked_at: None,
            progress: 0,
        }
    }
}
