use bb_progress::tutor::TutorPhrase;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Phrase difficulty
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    #[default]
    Beginner,
    Intermediate,
    Advanced,
}

/// Phrase model - one line of a situation in one language
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Phrase {
    /// Unique phrase identifier
    pub id: Uuid,
    /// Language this phrase belongs to
    pub language_id: Uuid,
    /// Situation name (e.g. "Tea Shop", "Bus Stand")
    pub situation: String,
    /// English meaning
    pub english: String,
    /// What the learner says, in Latin script. Attempts are scored against it.
    pub local: String,
    /// Syllable-split pronunciation guide
    pub transliteration: String,
    #[serde(default)]
    pub difficulty: Difficulty,
    #[serde(default)]
    pub tags: Vec<String>,
    /// Position within the situation
    #[serde(default)]
    pub order: u32,
}

impl TutorPhrase for Phrase {
    fn english(&self) -> &str {
        &self.english
    }

    fn local(&self) -> &str {
        &self.local
    }

    fn situation(&self) -> &str {
        &self.situation
    }

    fn tags(&self) -> &[String] {
        &self.tags
    }
}

/// Language model - one of the languages offered for learning
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Language {
    pub id: Uuid,
    /// English name, e.g. "Tamil"
    pub name: String,
    /// ISO 639-1 code, e.g. "ta"
    pub code: String,
    /// Name in the language's own script
    pub native_script: String,
    #[serde(default)]
    pub region: Option<String>,
    #[serde(default)]
    pub difficulty: Difficulty,
    /// Inactive languages are hidden from the catalog
    #[serde(default = "default_active")]
    pub is_active: bool,
}

const fn default_active() -> bool {
    true
}

/// A learner's standing on one achievement
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserAchievement {
    pub code: String,
    pub progress: u64,
    /// Set once the achievement is unlocked, never cleared
    pub unlocked_at: Option<DateTime<Utc>>,
}

impl UserAchievement {
    pub const fn is_unlocked(&self) -> bool {
        self.unlocked_at.is_some()
    }
}
