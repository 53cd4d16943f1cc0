use uuid::Uuid;

use crate::{StoreError, models::Language};

pub trait LanguageRepository {
    fn find_language(&self, language_id: Uuid) -> Result<Option<Language>, StoreError>;

    /// Active languages, ordered by name.
    fn active_languages(&self) -> Result<Vec<Language>, StoreError>;

    /// Insert or replace a language.
    fn save_language(&self, language: Language) -> Result<(), StoreError>;
}
