use bb_scoring::Accuracy;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::progress::level_for_xp;

/// Identity of a progress record: one per learner, language and situation.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgressKey {
    pub user_id: Uuid,
    pub language_id: Uuid,
    /// Situation name, e.g. "Tea Shop"
    pub situation: String,
}

impl ProgressKey {
    pub fn new(user_id: Uuid, language_id: Uuid, situation: impl Into<String>) -> Self {
        Self {
            user_id,
            language_id,
            situation: situation.into(),
        }
    }
}

/// Per-phrase bookkeeping inside a [`UserProgress`] record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PhraseCompletion {
    pub phrase_id: Uuid,
    /// Number of attempts at this phrase, at least 1
    pub attempts: u64,
    /// Highest accuracy reached on this phrase
    pub best_accuracy: Accuracy,
    /// When the phrase was first attempted
    pub completed_at: DateTime<Utc>,
}

/// A learner's progress through one situation of one language.
///
/// `average_accuracy` is the mean of `best_accuracy` over
/// `phrases_completed`, and `total_attempts` counts every submission
/// regardless of phrase. Both are maintained by
/// [`record_attempt`](Self::record_attempt).
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProgress {
    pub phrases_completed: Vec<PhraseCompletion>,
    pub total_attempts: u64,
    pub average_accuracy: f64,
    pub xp_earned: u64,
    pub last_completed_at: Option<DateTime<Utc>>,
}

impl UserProgress {
    /// Look up the completion entry of a phrase.
    pub fn phrase(&self, phrase_id: Uuid) -> Option<&PhraseCompletion> {
        self.phrases_completed
            .iter()
            .find(|p| p.phrase_id == phrase_id)
    }

    /// Fold one scored attempt into the record.
    pub fn record_attempt(
        &mut self,
        phrase_id: Uuid,
        accuracy: Accuracy,
        xp: u64,
        now: DateTime<Utc>,
    ) {
        match self
            .phrases_completed
            .iter_mut()
            .find(|p| p.phrase_id == phrase_id)
        {
            Some(existing) => {
                existing.attempts += 1;
                existing.best_accuracy = existing.best_accuracy.max(accuracy);
            }
            None => self.phrases_completed.push(PhraseCompletion {
                phrase_id,
                attempts: 1,
                best_accuracy: accuracy,
                completed_at: now,
            }),
        }

        self.total_attempts += 1;
        self.xp_earned = self.xp_earned.saturating_add(xp);
        self.last_completed_at = Some(now);
        self.average_accuracy = self.mean_best_accuracy();
    }

    fn mean_best_accuracy(&self) -> f64 {
        if self.phrases_completed.is_empty() {
            return 0.0;
        }

        let total: u64 = self
            .phrases_completed
            .iter()
            .map(|p| u64::from(p.best_accuracy.value()))
            .sum();

        total as f64 / self.phrases_completed.len() as f64
    }
}

/// A learner's global gamification counters.
///
/// `level` is always `floor(total_xp / 500) + 1`. The XP fields are private
/// so the only way to change them is through
/// [`award_xp`](Self::award_xp), and deserialization recomputes the level
/// from the stored XP.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", from = "LearnerRecord")]
pub struct Learner {
    pub id: Uuid,
    total_xp: u64,
    level: u64,
    pub current_streak: u32,
    pub last_activity_at: Option<DateTime<Utc>>,
}

impl Learner {
    /// A fresh learner at level 1 with no XP.
    pub const fn new(id: Uuid) -> Self {
        Self::with_xp(id, 0)
    }

    /// A learner holding `total_xp`, with the matching level.
    pub const fn with_xp(id: Uuid, total_xp: u64) -> Self {
        Self {
            id,
            total_xp,
            level: level_for_xp(total_xp),
            current_streak: 0,
            last_activity_at: None,
        }
    }

    pub const fn total_xp(&self) -> u64 {
        self.total_xp
    }

    pub const fn level(&self) -> u64 {
        self.level
    }

    pub(crate) const fn set_total_xp(&mut self, total_xp: u64) {
        self.total_xp = total_xp;
        self.level = level_for_xp(total_xp);
    }
}

/// Stored shape of a [`Learner`]; any persisted level is ignored.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct LearnerRecord {
    id: Uuid,
    #[serde(default)]
    total_xp: u64,
    #[serde(default)]
    current_streak: u32,
    #[serde(default)]
    last_activity_at: Option<DateTime<Utc>>,
}

impl From<LearnerRecord> for Learner {
    fn from(record: LearnerRecord) -> Self {
        let mut learner = Self::with_xp(record.id, record.total_xp);
        learner.current_streak = record.current_streak;
        learner.last_activity_at = record.last_activity_at;
        learner
    }
}
