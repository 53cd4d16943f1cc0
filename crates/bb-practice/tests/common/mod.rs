use bb_practice::{PracticeConfig, PracticeState};
use bb_progress::{Learner, achievement::default_catalog};
use bb_store::{
    MemoryStore,
    models::{Difficulty, Language, Phrase},
    repositories::{
        AchievementRepository, LanguageRepository, LearnerRepository, PhraseRepository,
    },
};
use chrono::{DateTime, TimeZone, Utc};
use uuid::Uuid;

pub const TEA_SHOP: &str = "Tea Shop";
pub const BUS_STAND: &str = "Bus Stand";

/// A store seeded with two active languages, one retired language, one
/// learner and the built-in achievement catalog
pub struct TestContext {
    pub state: PracticeState<MemoryStore>,
    pub learner_id: Uuid,
    pub hindi_id: Uuid,
    pub marathi_id: Uuid,
    /// Inactive, without phrases
    pub sanskrit_id: Uuid,
    /// Hindi, Tea Shop: "Ek chai dijiye"
    pub chai: Uuid,
    /// Hindi, Tea Shop: "Kitne paise hue"
    pub price: Uuid,
    /// Marathi, Bus Stand: "Bus kuthe thambte"
    pub bus: Uuid,
}

/// Builder for [`TestContext`]
pub struct TestContextBuilder {
    config: PracticeConfig,
    starting_xp: u64,
}

impl TestContextBuilder {
    pub fn new() -> Self {
        Self {
            config: PracticeConfig::default(),
            starting_xp: 0,
        }
    }

    pub fn without_achievements(mut self) -> Self {
        self.config.award_achievements = false;
        self
    }

    pub fn max_transcript_chars(mut self, max: usize) -> Self {
        self.config.max_transcript_chars = max;
        self
    }

    pub fn starting_xp(mut self, xp: u64) -> Self {
        self.starting_xp = xp;
        self
    }

    pub fn build(self) -> anyhow::Result<TestContext> {
        let store = MemoryStore::new();

        let hindi_id = Uuid::new_v4();
        let marathi_id = Uuid::new_v4();
        let sanskrit_id = Uuid::new_v4();

        store.save_language(language(hindi_id, "Hindi", "hi", "हिन्दी", true))?;
        store.save_language(language(marathi_id, "Marathi", "mr", "मराठी", true))?;
        store.save_language(language(sanskrit_id, "Sanskrit", "sa", "संस्कृतम्", false))?;

        let chai = phrase(hindi_id, TEA_SHOP, "One tea please", "Ek chai dijiye", 1);
        let price = phrase(hindi_id, TEA_SHOP, "How much is it?", "Kitne paise hue", 2);
        let bus = phrase(marathi_id, BUS_STAND, "Where does the bus stop?", "Bus kuthe thambte", 1);
        let (chai_id, price_id, bus_id) = (chai.id, price.id, bus.id);
        for p in [chai, price, bus] {
            store.save_phrase(p)?;
        }

        let learner_id = Uuid::new_v4();
        store.save_learner(Learner::with_xp(learner_id, self.starting_xp))?;
        store.save_achievements(default_catalog())?;

        Ok(TestContext {
            state: PracticeState::new(store, self.config),
            learner_id,
            hindi_id,
            marathi_id,
            sanskrit_id,
            chai: chai_id,
            price: price_id,
            bus: bus_id,
        })
    }
}

impl Default for TestContextBuilder {
    fn default() -> Self {
        Self::new()
    }
}

fn language(id: Uuid, name: &str, code: &str, native_script: &str, is_active: bool) -> Language {
    Language {
        id,
        name: name.to_string(),
        code: code.to_string(),
        native_script: native_script.to_string(),
        region: Some("India".to_string()),
        difficulty: Difficulty::Beginner,
        is_active,
    }
}

pub fn phrase(
    language_id: Uuid,
    situation: &str,
    english: &str,
    local: &str,
    order: u32,
) -> Phrase {
    Phrase {
        id: Uuid::new_v4(),
        language_id,
        situation: situation.to_string(),
        english: english.to_string(),
        local: local.to_string(),
        transliteration: String::new(),
        difficulty: Difficulty::Beginner,
        tags: Vec::new(),
        order,
    }
}

/// Fixed instant on a given day of March 2024, UTC
pub fn at(day: u32, hour: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 3, day, hour, 0, 0)
        .single()
        .expect("valid test timestamp")
}
