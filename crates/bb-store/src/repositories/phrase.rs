use uuid::Uuid;

use crate::{StoreError, models::Phrase};

pub trait PhraseRepository {
    fn find_phrase(&self, phrase_id: Uuid) -> Result<Option<Phrase>, StoreError>;

    /// Phrases of one situation, ordered by their position.
    fn phrases_for_situation(
        &self,
        language_id: Uuid,
        situation: &str,
    ) -> Result<Vec<Phrase>, StoreError>;

    /// Every phrase of a language, grouped by situation name in ascending
    /// order and by position within each situation.
    fn phrases_for_language(&self, language_id: Uuid) -> Result<Vec<Phrase>, StoreError>;

    /// Insert or replace a phrase.
    fn save_phrase(&self, phrase: Phrase) -> Result<(), StoreError>;
}
