pub mod model;
pub mod service;

pub use model::{LanguageDetail, SituationInfo};
pub use service::{language_detail, languages, situation_phrases, situations};
