use bb_store::models::{Difficulty, Language};
use serde::Serialize;

/// A language with the names of its situations
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LanguageDetail {
    #[serde(flatten)]
    pub language: Language,
    pub situations: Vec<String>,
    pub total_situations: usize,
}

/// One situation of a language
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SituationInfo {
    pub name: String,
    pub phrase_count: usize,
    /// Difficulty of the situation's first phrase
    pub difficulty: Difficulty,
}
