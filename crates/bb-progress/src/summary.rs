//! Dashboard summaries built from a learner's progress records.

use std::collections::HashSet;

use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::models::{Learner, ProgressKey, UserProgress};

/// One situation row of the overall dashboard
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SituationSummary {
    pub language_id: Uuid,
    pub situation: String,
    pub phrases_completed: usize,
    pub average_accuracy: u64,
    pub xp_earned: u64,
    pub last_completed_at: Option<DateTime<Utc>>,
}

/// Everything the dashboard shows about a learner
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgressOverview {
    pub total_xp: u64,
    pub level: u64,
    pub current_streak: u32,
    pub total_phrases_completed: usize,
    pub total_attempts: u64,
    pub languages_learning: usize,
    pub progress_by_language: Vec<SituationSummary>,
}

/// One situation row of a single-language view
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LanguageSituationSummary {
    pub situation: String,
    pub phrases_completed: usize,
    pub average_accuracy: u64,
    pub total_attempts: u64,
    pub last_completed_at: Option<DateTime<Utc>>,
}

/// A learner's progress in one language
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LanguageProgress {
    pub language_id: Uuid,
    pub total_phrases_completed: usize,
    pub total_xp_earned: u64,
    pub situations: Vec<LanguageSituationSummary>,
}

/// Averages are displayed as whole percentages.
pub(crate) fn rounded(average_accuracy: f64) -> u64 {
    average_accuracy.round().max(0.0) as u64
}

/// Number of distinct languages among the records.
pub fn languages_learning(records: &[(ProgressKey, UserProgress)]) -> usize {
    records
        .iter()
        .map(|(key, _)| key.language_id)
        .collect::<HashSet<_>>()
        .len()
}

/// Build the overall dashboard for a learner from all their records.
pub fn overview(learner: &Learner, records: &[(ProgressKey, UserProgress)]) -> ProgressOverview {
    ProgressOverview {
        total_xp: learner.total_xp(),
        level: learner.level(),
        current_streak: learner.current_streak,
        total_phrases_completed: records
            .iter()
            .map(|(_, p)| p.phrases_completed.len())
            .sum(),
        total_attempts: records.iter().map(|(_, p)| p.total_attempts).sum(),
        languages_learning: languages_learning(records),
        progress_by_language: records
            .iter()
            .map(|(key, p)| SituationSummary {
                language_id: key.language_id,
                situation: key.situation.clone(),
                phrases_completed: p.phrases_completed.len(),
                average_accuracy: rounded(p.average_accuracy),
                xp_earned: p.xp_earned,
                last_completed_at: p.last_completed_at,
            })
            .collect(),
    }
}

/// Build the single-language view. Records for other languages are skipped.
pub fn language_progress(
    language_id: Uuid,
    records: &[(ProgressKey, UserProgress)],
) -> LanguageProgress {
    let in_language = move || {
        records
            .iter()
            .filter(move |(key, _)| key.language_id == language_id)
    };

    LanguageProgress {
        language_id,
        total_phrases_completed: in_language().map(|(_, p)| p.phrases_completed.len()).sum(),
        total_xp_earned: in_language().map(|(_, p)| p.xp_earned).sum(),
        situations: in_language()
            .map(|(key, p)| LanguageSituationSummary {
                situation: key.situation.clone(),
                phrases_completed: p.phrases_completed.len(),
                average_accuracy: rounded(p.average_accuracy),
                total_attempts: p.total_attempts,
                last_completed_at: p.last_completed_at,
            })
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::apply_attempt;
    use bb_scoring::Accuracy;

    fn record(
        user_id: Uuid,
        language_id: Uuid,
        situation: &str,
        accuracies: &[i64],
    ) -> (ProgressKey, UserProgress) {
        let now = Utc::now();
        let mut progress = None;
        for value in accuracies {
            progress = Some(apply_attempt(
                progress,
                Uuid::new_v4(),
                Accuracy::new(*value).unwrap(),
                10,
                now,
            ));
        }
        (
            ProgressKey::new(user_id, language_id, situation),
            progress.unwrap_or_default(),
        )
    }

    #[test]
    fn test_overview_totals() {
        let user = Uuid::new_v4();
        let hindi = Uuid::new_v4();
        let tamil = Uuid::new_v4();
        let records = vec![
            record(user, hindi, "Tea Shop", &[80, 67]),
            record(user, hindi, "Bus Stand", &[90]),
            record(user, tamil, "Market", &[55, 60, 71]),
        ];
        let learner = Learner::with_xp(user, 730);

        let overview = overview(&learner, &records);

        assert_eq!(overview.total_xp, 730);
        assert_eq!(overview.level, 2);
        assert_eq!(overview.total_phrases_completed, 6);
        assert_eq!(overview.total_attempts, 6);
        assert_eq!(overview.languages_learning, 2);
        assert_eq!(overview.progress_by_language.len(), 3);

        // (80 + 67) / 2 = 73.5 rounds half away from zero
        let tea_shop = &overview.progress_by_language[0];
        assert_eq!(tea_shop.situation, "Tea Shop");
        assert_eq!(tea_shop.average_accuracy, 74);
        assert_eq!(tea_shop.xp_earned, 20);
    }

    #[test]
    fn test_overview_without_records() {
        let learner = Learner::new(Uuid::new_v4());
        let overview = overview(&learner, &[]);

        assert_eq!(overview.total_phrases_completed, 0);
        assert_eq!(overview.total_attempts, 0);
        assert_eq!(overview.languages_learning, 0);
        assert!(overview.progress_by_language.is_empty());
    }

    #[test]
    fn test_language_progress_filters_language() {
        let user = Uuid::new_v4();
        let hindi = Uuid::new_v4();
        let bengali = Uuid::new_v4();
        let records = vec![
            record(user, hindi, "Tea Shop", &[80, 90]),
            record(user, bengali, "Tea Shop", &[40]),
            record(user, hindi, "Railway Station", &[100]),
        ];

        let progress = language_progress(hindi, &records);

        assert_eq!(progress.language_id, hindi);
        assert_eq!(progress.total_phrases_completed, 3);
        assert_eq!(progress.total_xp_earned, 30);
        let situations: Vec<&str> = progress
            .situations
            .iter()
            .map(|s| s.situation.as_str())
            .collect();
        assert_eq!(situations, ["Tea Shop", "Railway Station"]);
        assert_eq!(progress.situations[0].average_accuracy, 85);
        assert_eq!(progress.situations[0].total_attempts, 2);
    }

    #[test]
    fn test_overview_wire_names() {
        let learner = Learner::new(Uuid::new_v4());
        let value = serde_json::to_value(overview(&learner, &[])).unwrap();

        for key in [
            "totalXp",
            "level",
            "currentStreak",
            "totalPhrasesCompleted",
            "totalAttempts",
            "languagesLearning",
            "progressByLanguage",
        ] {
            assert!(value.get(key).is_some(), "missing {key}");
        }
    }
}
