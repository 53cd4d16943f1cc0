//! In-process implementation of every repository.
//!
//! Each table sits behind its own `RwLock`. Read-modify-write operations hold
//! the write lock for the whole closure call, which makes them atomic with
//! respect to each other.

use std::{
    collections::{HashMap, HashSet},
    sync::{RwLock, RwLockReadGuard, RwLockWriteGuard},
};

use bb_progress::{
    Learner, ProgressKey, UserProgress,
    achievement::Achievement,
    challenge::{ChallengeAdvance, ChallengeProgress, DailyChallenge},
};
use chrono::{DateTime, NaiveDate, Utc};
use uuid::Uuid;

use crate::{
    StoreError,
    models::{Language, Phrase, UserAchievement},
    repositories::{
        AchievementRepository, ChallengeRepository, LanguageRepository, LearnerRepository,
        PhraseRepository, ProgressRepository,
    },
};

/// Progress records remember their insertion position so listings come back
/// in creation order.
type ProgressTable = HashMap<ProgressKey, (usize, UserProgress)>;

#[derive(Debug, Default)]
pub struct MemoryStore {
    languages: RwLock<HashMap<Uuid, Language>>,
    phrases: RwLock<HashMap<Uuid, Phrase>>,
    progress: RwLock<ProgressTable>,
    learners: RwLock<HashMap<Uuid, Learner>>,
    achievements: RwLock<Vec<Achievement>>,
    user_achievements: RwLock<HashMap<(Uuid, String), UserAchievement>>,
    challenges: RwLock<HashMap<Uuid, DailyChallenge>>,
    challenge_progress: RwLock<HashMap<(Uuid, Uuid), ChallengeProgress>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

fn read<T>(lock: &RwLock<T>) -> Result<RwLockReadGuard<'_, T>, StoreError> {
    lock.read().map_err(|_| StoreError::Poisoned)
}

fn write<T>(lock: &RwLock<T>) -> Result<RwLockWriteGuard<'_, T>, StoreError> {
    lock.write().map_err(|_| StoreError::Poisoned)
}

impl LanguageRepository for MemoryStore {
    fn find_language(&self, language_id: Uuid) -> Result<Option<Language>, StoreError> {
        Ok(read(&self.languages)?.get(&language_id).cloned())
    }

    fn active_languages(&self) -> Result<Vec<Language>, StoreError> {
        let mut languages: Vec<Language> = read(&self.languages)?
            .values()
            .filter(|l| l.is_active)
            .cloned()
            .collect();
        languages.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(languages)
    }

    fn save_language(&self, language: Language) -> Result<(), StoreError> {
        write(&self.languages)?.insert(language.id, language);
        Ok(())
    }
}

impl PhraseRepository for MemoryStore {
    fn find_phrase(&self, phrase_id: Uuid) -> Result<Option<Phrase>, StoreError> {
        Ok(read(&self.phrases)?.get(&phrase_id).cloned())
    }

    fn phrases_for_situation(
        &self,
        language_id: Uuid,
        situation: &str,
    ) -> Result<Vec<Phrase>, StoreError> {
        let mut phrases: Vec<Phrase> = read(&self.phrases)?
            .values()
            .filter(|p| p.language_id == language_id && p.situation == situation)
            .cloned()
            .collect();
        phrases.sort_by_key(|p| p.order);
        Ok(phrases)
    }

    fn phrases_for_language(&self, language_id: Uuid) -> Result<Vec<Phrase>, StoreError> {
        let mut phrases: Vec<Phrase> = read(&self.phrases)?
            .values()
            .filter(|p| p.language_id == language_id)
            .cloned()
            .collect();
        phrases.sort_by(|a, b| {
            a.situation
                .cmp(&b.situation)
                .then(a.order.cmp(&b.order))
                .then_with(|| a.english.cmp(&b.english))
        });
        Ok(phrases)
    }

    fn save_phrase(&self, phrase: Phrase) -> Result<(), StoreError> {
        write(&self.phrases)?.insert(phrase.id, phrase);
        Ok(())
    }
}

impl ProgressRepository for MemoryStore {
    fn find_progress(&self, key: &ProgressKey) -> Result<Option<UserProgress>, StoreError> {
        Ok(read(&self.progress)?.get(key).map(|(_, p)| p.clone()))
    }

    fn progress_for_user(
        &self,
        user_id: Uuid,
    ) -> Result<Vec<(ProgressKey, UserProgress)>, StoreError> {
        let table = read(&self.progress)?;
        let mut records: Vec<(usize, ProgressKey, UserProgress)> = table
            .iter()
            .filter(|(key, _)| key.user_id == user_id)
            .map(|(key, (position, progress))| (*position, key.clone(), progress.clone()))
            .collect();
        records.sort_by_key(|(position, _, _)| *position);

        Ok(records
            .into_iter()
            .map(|(_, key, progress)| (key, progress))
            .collect())
    }

    fn update_progress<F>(&self, key: &ProgressKey, update: F) -> Result<UserProgress, StoreError>
    where
        F: FnOnce(Option<UserProgress>) -> UserProgress,
    {
        let mut table = write(&self.progress)?;
        let next_position = table.len();

        let (position, current) = match table.remove(key) {
            Some((position, progress)) => (position, Some(progress)),
            None => (next_position, None),
        };

        let updated = update(current);
        table.insert(key.clone(), (position, updated.clone()));
        Ok(updated)
    }
}

impl LearnerRepository for MemoryStore {
    fn find_learner(&self, user_id: Uuid) -> Result<Option<Learner>, StoreError> {
        Ok(read(&self.learners)?.get(&user_id).cloned())
    }

    fn save_learner(&self, learner: Learner) -> Result<(), StoreError> {
        write(&self.learners)?.insert(learner.id, learner);
        Ok(())
    }

    fn update_learner<F, T>(&self, user_id: Uuid, update: F) -> Result<T, StoreError>
    where
        F: FnOnce(&mut Learner) -> T,
    {
        let mut learners = write(&self.learners)?;
        let learner = learners.get_mut(&user_id).ok_or_else(|| StoreError::NotFound {
            entity: "learner",
            id: user_id.to_string(),
        })?;
        Ok(update(learner))
    }
}

impl AchievementRepository for MemoryStore {
    fn active_achievements(&self) -> Result<Vec<Achievement>, StoreError> {
        Ok(read(&self.achievements)?
            .iter()
            .filter(|a| a.is_active)
            .cloned()
            .collect())
    }

    fn save_achievements(&self, achievements: Vec<Achievement>) -> Result<(), StoreError> {
        let mut catalog = write(&self.achievements)?;
        for achievement in achievements {
            match catalog.iter_mut().find(|a| a.code == achievement.code) {
                Some(existing) => *existing = achievement,
                None => catalog.push(achievement),
            }
        }
        Ok(())
    }

    fn unlocked_codes(&self, user_id: Uuid) -> Result<HashSet<String>, StoreError> {
        Ok(read(&self.user_achievements)?
            .iter()
            .filter(|((owner, _), ua)| *owner == user_id && ua.is_unlocked())
            .map(|((_, code), _)| code.clone())
            .collect())
    }

    fn user_achievements(&self, user_id: Uuid) -> Result<Vec<UserAchievement>, StoreError> {
        let mut entries: Vec<UserAchievement> = read(&self.user_achievements)?
            .iter()
            .filter(|((owner, _), _)| *owner == user_id)
            .map(|(_, ua)| ua.clone())
            .collect();
        // Most recent unlocks first, then locked entries by code
        entries.sort_by(|a, b| {
            b.unlocked_at
                .cmp(&a.unlocked_at)
                .then_with(|| a.code.cmp(&b.code))
        });
        Ok(entries)
    }

    fn record_unlock(
        &self,
        user_id: Uuid,
        code: &str,
        progress: u64,
        unlocked_at: DateTime<Utc>,
    ) -> Result<bool, StoreError> {
        let mut entries = write(&self.user_achievements)?;
        let entry = entries
            .entry((user_id, code.to_string()))
            .or_insert_with(|| UserAchievement {
                code: code.to_string(),
                progress: 0,
                unlocked_at: None,
            });

        if entry.is_unlocked() {
            return Ok(false);
        }
        entry.progress = progress;
        entry.unlocked_at = Some(unlocked_at);
        Ok(true)
    }

    fn record_progress(&self, user_id: Uuid, code: &str, progress: u64) -> Result<(), StoreError> {
        let mut entries = write(&self.user_achievements)?;
        let entry = entries
            .entry((user_id, code.to_string()))
            .or_insert_with(|| UserAchievement {
                code: code.to_string(),
                progress: 0,
                unlocked_at: None,
            });

        if !entry.is_unlocked() {
            entry.progress = progress;
        }
        Ok(())
    }
}

impl ChallengeRepository for MemoryStore {
    fn find_challenge(&self, challenge_id: Uuid) -> Result<Option<DailyChallenge>, StoreError> {
        Ok(read(&self.challenges)?.get(&challenge_id).cloned())
    }

    fn find_challenge_by_date(
        &self,
        date: NaiveDate,
    ) -> Result<Option<DailyChallenge>, StoreError> {
        Ok(read(&self.challenges)?
            .values()
            .find(|c| c.date == date)
            .cloned())
    }

    fn insert_challenge_if_absent(
        &self,
        challenge: DailyChallenge,
    ) -> Result<DailyChallenge, StoreError> {
        let mut challenges = write(&self.challenges)?;
        if let Some(existing) = challenges.values().find(|c| c.date == challenge.date) {
            return Ok(existing.clone());
        }
        challenges.insert(challenge.id, challenge.clone());
        Ok(challenge)
    }

    fn find_challenge_progress(
        &self,
        user_id: Uuid,
        challenge_id: Uuid,
    ) -> Result<Option<ChallengeProgress>, StoreError> {
        Ok(read(&self.challenge_progress)?
            .get(&(user_id, challenge_id))
            .cloned())
    }

    fn update_challenge_progress<F, E>(
        &self,
        user_id: Uuid,
        challenge_id: Uuid,
        update: F,
    ) -> Result<ChallengeAdvance, E>
    where
        F: FnOnce(Option<ChallengeProgress>) -> Result<ChallengeAdvance, E>,
        E: From<StoreError>,
    {
        let mut entries = write(&self.challenge_progress)?;
        let current = entries.get(&(user_id, challenge_id)).cloned();

        let advance = update(current)?;
        entries.insert((user_id, challenge_id), advance.state.clone());
        Ok(advance)
    }
}
