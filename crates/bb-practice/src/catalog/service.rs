//! Browsing languages, their situations and the phrases of a situation.
//!
//! Situations are listed by name in ascending order.

use bb_store::{
    models::{Language, Phrase},
    repositories::PracticeStore,
};
use tracing::instrument;
use uuid::Uuid;

use crate::{
    PracticeError, PracticeState,
    catalog::model::{LanguageDetail, SituationInfo},
    validation::validate_situation,
};

/// Active languages, ordered by name.
pub fn languages<S: PracticeStore>(
    state: &PracticeState<S>,
) -> Result<Vec<Language>, PracticeError> {
    Ok(state.store.active_languages()?)
}

fn find_language<S: PracticeStore>(
    state: &PracticeState<S>,
    language_id: Uuid,
) -> Result<Language, PracticeError> {
    state
        .store
        .find_language(language_id)?
        .ok_or_else(|| PracticeError::NotFound(format!("language {language_id}")))
}

/// Group a language's phrases by situation, keeping the store's order.
fn group_situations(phrases: &[Phrase]) -> Vec<SituationInfo> {
    let mut situations: Vec<SituationInfo> = Vec::new();
    for phrase in phrases {
        match situations.iter_mut().find(|s| s.name == phrase.situation) {
            Some(info) => info.phrase_count += 1,
            None => situations.push(SituationInfo {
                name: phrase.situation.clone(),
                phrase_count: 1,
                difficulty: phrase.difficulty,
            }),
        }
    }
    situations
}

#[instrument(level = "debug", skip(state))]
pub fn language_detail<S: PracticeStore>(
    state: &PracticeState<S>,
    language_id: Uuid,
) -> Result<LanguageDetail, PracticeError> {
    let language = find_language(state, language_id)?;
    let phrases = state.store.phrases_for_language(language_id)?;

    let situations: Vec<String> = group_situations(&phrases)
        .into_iter()
        .map(|s| s.name)
        .collect();

    Ok(LanguageDetail {
        language,
        total_situations: situations.len(),
        situations,
    })
}

/// Situations of a language with their phrase counts.
#[instrument(level = "debug", skip(state))]
pub fn situations<S: PracticeStore>(
    state: &PracticeState<S>,
    language_id: Uuid,
) -> Result<Vec<SituationInfo>, PracticeError> {
    find_language(state, language_id)?;
    let phrases = state.store.phrases_for_language(language_id)?;
    Ok(group_situations(&phrases))
}

/// Phrases of one situation in lesson order. An unknown situation yields an
/// empty list.
#[instrument(level = "debug", skip(state))]
pub fn situation_phrases<S: PracticeStore>(
    state: &PracticeState<S>,
    language_id: Uuid,
    situation: &str,
) -> Result<Vec<Phrase>, PracticeError> {
    validate_situation(situation)?;
    find_language(state, language_id)?;
    Ok(state.store.phrases_for_situation(language_id, situation)?)
}
