//! Achievement catalog and unlock rules.
//!
//! Achievements unlock once per learner. Each kind tracks one learner
//! statistic; an achievement unlocks as soon as that statistic reaches its
//! requirement. Unlock rewards are paid out with [`Learner::award_xp`] so the
//! level always follows the XP total.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::{
    models::{Learner, ProgressKey, UserProgress},
    summary::{languages_learning, rounded},
};

/// Statistic an achievement is measured against
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AchievementKind {
    /// Phrases completed across all situations
    Milestone,
    /// Current daily streak
    Streak,
    /// Average accuracy across all situations
    Accuracy,
    /// Best accuracy reached on any single phrase
    #[serde(rename = "phrase_accuracy")]
    PhraseAccuracy,
    /// Distinct languages being learned
    Language,
    /// Awarded by hand, never unlocked automatically
    Special,
    /// Current level
    Level,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Achievement {
    /// Stable identifier, e.g. `first_steps`
    pub code: String,
    pub name: String,
    pub description: String,
    pub icon: String,
    pub kind: AchievementKind,
    /// Threshold the tracked statistic must reach
    pub requirement: u64,
    pub xp_reward: u64,
    pub is_active: bool,
}

impl Achievement {
    fn new(
        code: &str,
        name: &str,
        description: &str,
        icon: &str,
        kind: AchievementKind,
        requirement: u64,
        xp_reward: u64,
    ) -> Self {
        Self {
            code: code.to_string(),
            name: name.to_string(),
            description: description.to_string(),
            icon: icon.to_string(),
            kind,
            requirement,
            xp_reward,
            is_active: true,
        }
    }
}

/// Built-in achievements
#[rustfmt::skip]
pub fn default_catalog() -> Vec<Achievement> {
    use AchievementKind::{Accuracy, Milestone, PhraseAccuracy, Special, Streak};

    vec![
        // Milestones
        Achievement::new("first_steps", "First Steps", "Complete your first phrase", "🎯", Milestone, 1, 50),
        Achievement::new("quick_learner", "Quick Learner", "Complete 10 phrases", "⚡", Milestone, 10, 100),
        Achievement::new("dedicated", "Dedicated Student", "Complete 50 phrases", "📚", Milestone, 50, 250),
        Achievement::new("century_club", "Century Club", "Complete 100 phrases", "💯", Milestone, 100, 500),
        Achievement::new("master", "Language Master", "Complete 250 phrases", "👑", Milestone, 250, 1000),
        // Streaks
        Achievement::new("committed", "Committed Learner", "Maintain a 3-day streak", "🔥", Streak, 3, 100),
        Achievement::new("weekly_warrior", "Weekly Warrior", "Maintain a 7-day streak", "⭐", Streak, 7, 250),
        Achievement::new("unstoppable", "Unstoppable", "Maintain a 30-day streak", "🚀", Streak, 30, 1500),
        // Accuracy
        Achievement::new("perfectionist", "Perfectionist", "Achieve 100% accuracy on a phrase", "✨", PhraseAccuracy, 100, 75),
        Achievement::new("sharpshooter", "Sharpshooter", "Maintain 90% average accuracy", "🎯", Accuracy, 90, 200),
        // Special
        Achievement::new("early_bird", "Early Bird", "Complete a lesson before 9 AM", "🌅", Special, 1, 50),
        Achievement::new("night_owl", "Night Owl", "Complete a lesson after 10 PM", "🦉", Special, 1, 50),
    ]
}

/// Learner statistics the unlock rules are evaluated against
#[derive(Debug, Clone, PartialEq, Default)]
pub struct LearnerStats {
    pub phrases_completed: u64,
    pub current_streak: u32,
    /// Mean of the per-situation average accuracies, 0 without any progress
    pub average_accuracy: f64,
    /// Highest best accuracy over every completed phrase
    pub best_phrase_accuracy: u8,
    pub level: u64,
    pub languages_learning: u64,
}

impl LearnerStats {
    /// Gather statistics from a learner and all their progress records.
    pub fn collect(learner: &Learner, records: &[(ProgressKey, UserProgress)]) -> Self {
        let average_accuracy = if records.is_empty() {
            0.0
        } else {
            records.iter().map(|(_, p)| p.average_accuracy).sum::<f64>() / records.len() as f64
        };

        Self {
            phrases_completed: records
                .iter()
                .map(|(_, p)| p.phrases_completed.len() as u64)
                .sum(),
            current_streak: learner.current_streak,
            average_accuracy,
            best_phrase_accuracy: records
                .iter()
                .flat_map(|(_, p)| &p.phrases_completed)
                .map(|c| c.best_accuracy.value())
                .max()
                .unwrap_or(0),
            level: learner.level(),
            languages_learning: languages_learning(records) as u64,
        }
    }

    /// Value of the statistic tracked by `kind`.
    pub fn progress_for(&self, kind: AchievementKind) -> u64 {
        match kind {
            AchievementKind::Milestone => self.phrases_completed,
            AchievementKind::Streak => u64::from(self.current_streak),
            AchievementKind::Accuracy => rounded(self.average_accuracy),
            AchievementKind::PhraseAccuracy => u64::from(self.best_phrase_accuracy),
            AchievementKind::Language => self.languages_learning,
            AchievementKind::Level => self.level,
            AchievementKind::Special => 0,
        }
    }
}

/// Outcome of checking one achievement
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AchievementCheck {
    pub code: String,
    pub progress: u64,
    pub unlocked: bool,
    pub xp_reward: u64,
}

/// Check every active achievement not in `already_unlocked`.
///
/// Special achievements are skipped: they have no statistic to track.
pub fn evaluate(
    catalog: &[Achievement],
    stats: &LearnerStats,
    already_unlocked: &HashSet<String>,
) -> Vec<AchievementCheck> {
    catalog
        .iter()
        .filter(|a| a.is_active && a.kind != AchievementKind::Special)
        .filter(|a| !already_unlocked.contains(&a.code))
        .map(|a| {
            let progress = stats.progress_for(a.kind);
            AchievementCheck {
                code: a.code.clone(),
                progress,
                unlocked: progress >= a.requirement,
                xp_reward: a.xp_reward,
            }
        })
        .collect()
}

/// Pay out the rewards of the unlocked checks. Returns the XP granted.
pub fn award_unlocked(learner: &mut Learner, checks: &[AchievementCheck]) -> u64 {
    let xp: u64 = checks
        .iter()
        .filter(|c| c.unlocked)
        .map(|c| c.xp_reward)
        .sum();
    learner.award_xp(xp);
    xp
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    fn unlocked_codes(checks: &[AchievementCheck]) -> Vec<&str> {
        checks
            .iter()
            .filter(|c| c.unlocked)
            .map(|c| c.code.as_str())
            .collect()
    }

    #[test]
    fn test_default_catalog() {
        let catalog = default_catalog();
        assert_eq!(catalog.len(), 12);

        let codes: HashSet<&str> = catalog.iter().map(|a| a.code.as_str()).collect();
        assert_eq!(codes.len(), 12, "codes must be unique");
        assert!(catalog.iter().all(|a| a.is_active));
    }

    #[test]
    fn test_first_phrase_unlocks_first_steps() {
        let stats = LearnerStats {
            phrases_completed: 1,
            current_streak: 1,
            average_accuracy: 64.0,
            best_phrase_accuracy: 80,
            level: 1,
            languages_learning: 1,
        };

        let checks = evaluate(&default_catalog(), &stats, &HashSet::new());

        assert_eq!(unlocked_codes(&checks), ["first_steps"]);
        let quick = checks.iter().find(|c| c.code == "quick_learner").unwrap();
        assert_eq!(quick.progress, 1);
        assert!(!quick.unlocked);
    }

    #[test]
    fn test_already_unlocked_are_skipped() {
        let stats = LearnerStats {
            phrases_completed: 12,
            ..LearnerStats::default()
        };
        let unlocked = HashSet::from(["first_steps".to_string()]);

        let checks = evaluate(&default_catalog(), &stats, &unlocked);

        assert!(checks.iter().all(|c| c.code != "first_steps"));
        assert_eq!(unlocked_codes(&checks), ["quick_learner"]);
    }

    #[test]
    fn test_streak_and_accuracy() {
        let stats = LearnerStats {
            phrases_completed: 0,
            current_streak: 7,
            average_accuracy: 89.6,
            best_phrase_accuracy: 95,
            level: 1,
            languages_learning: 0,
        };

        let checks = evaluate(&default_catalog(), &stats, &HashSet::new());

        assert_eq!(
            unlocked_codes(&checks),
            ["committed", "weekly_warrior", "sharpshooter"]
        );
    }

    #[test]
    fn test_special_never_evaluated() {
        let stats = LearnerStats {
            phrases_completed: 1000,
            current_streak: 1000,
            average_accuracy: 100.0,
            best_phrase_accuracy: 100,
            level: 100,
            languages_learning: 6,
        };

        let checks = evaluate(&default_catalog(), &stats, &HashSet::new());

        assert!(checks.iter().all(|c| c.code != "early_bird" && c.code != "night_owl"));
        assert_eq!(checks.len(), 10);
        assert!(checks.iter().all(|c| c.unlocked));
    }

    #[test]
    fn test_inactive_and_level_kinds() {
        #[rustfmt::skip]
        let mut catalog = vec![
            Achievement::new("level_5", "High Five", "Reach level 5", "🏅", AchievementKind::Level, 5, 100),
            Achievement::new("polyglot", "Polyglot", "Learn 3 languages", "🌏", AchievementKind::Language, 3, 300),
        ];
        catalog[1].is_active = false;

        let stats = LearnerStats {
            level: 5,
            languages_learning: 3,
            ..LearnerStats::default()
        };

        let checks = evaluate(&catalog, &stats, &HashSet::new());
        assert_eq!(unlocked_codes(&checks), ["level_5"]);
        assert_eq!(checks.len(), 1);
    }

    #[test]
    fn test_collect_stats() {
        let user = Uuid::new_v4();
        let hindi = Uuid::new_v4();
        let tamil = Uuid::new_v4();
        let mut a = UserProgress::default();
        let mut b = UserProgress::default();
        let now = chrono::Utc::now();
        let acc = |v| bb_scoring::Accuracy::new(v).unwrap();
        a.record_attempt(Uuid::new_v4(), acc(80), 30, now);
        a.record_attempt(Uuid::new_v4(), acc(100), 50, now);
        b.record_attempt(Uuid::new_v4(), acc(60), 10, now);

        let mut learner = Learner::with_xp(user, 1200);
        learner.current_streak = 4;

        let stats = LearnerStats::collect(
            &learner,
            &[
                (ProgressKey::new(user, hindi, "Tea Shop"), a),
                (ProgressKey::new(user, tamil, "Market"), b),
            ],
        );

        assert_eq!(stats.phrases_completed, 3);
        assert_eq!(stats.current_streak, 4);
        // Per-record averages are 90 and 60
        assert_eq!(stats.average_accuracy, 75.0);
        assert_eq!(stats.best_phrase_accuracy, 100);
        assert_eq!(stats.level, 3);
        assert_eq!(stats.languages_learning, 2);
    }

    #[test]
    fn test_collect_stats_without_progress() {
        let stats = LearnerStats::collect(&Learner::new(Uuid::new_v4()), &[]);
        assert_eq!(stats.average_accuracy, 0.0);
        assert_eq!(stats.phrases_completed, 0);
        assert_eq!(stats.best_phrase_accuracy, 0);
        assert_eq!(stats.level, 1);
    }

    #[test]
    fn test_one_perfect_phrase_unlocks_perfectionist() {
        let user = Uuid::new_v4();
        let mut progress = UserProgress::default();
        let now = chrono::Utc::now();
        let acc = |v| bb_scoring::Accuracy::new(v).unwrap();
        progress.record_attempt(Uuid::new_v4(), acc(100), 50, now);
        progress.record_attempt(Uuid::new_v4(), acc(60), 10, now);

        let stats = LearnerStats::collect(
            &Learner::new(user),
            &[(ProgressKey::new(user, Uuid::new_v4(), "Tea Shop"), progress)],
        );
        assert_eq!(stats.average_accuracy, 80.0);

        let checks = evaluate(&default_catalog(), &stats, &HashSet::new());
        let perfectionist = checks.iter().find(|c| c.code == "perfectionist").unwrap();
        assert!(perfectionist.unlocked);
        assert_eq!(perfectionist.progress, 100);

        let sharpshooter = checks.iter().find(|c| c.code == "sharpshooter").unwrap();
        assert!(!sharpshooter.unlocked);
        assert_eq!(sharpshooter.progress, 80);
    }

    #[test]
    fn test_phrase_accuracy_kind_wire_name() {
        let json = serde_json::to_value(AchievementKind::PhraseAccuracy).unwrap();
        assert_eq!(json, "phrase_accuracy");
    }

    #[test]
    fn test_award_unlocked_keeps_level_in_step() {
        let mut learner = Learner::with_xp(Uuid::new_v4(), 450);
        let checks = vec![
            AchievementCheck {
                code: "first_steps".into(),
                progress: 1,
                unlocked: true,
                xp_reward: 50,
            },
            AchievementCheck {
                code: "quick_learner".into(),
                progress: 1,
                unlocked: false,
                xp_reward: 100,
            },
        ];

        let granted = award_unlocked(&mut learner, &checks);

        assert_eq!(granted, 50);
        assert_eq!(learner.total_xp(), 500);
        assert_eq!(learner.level(), 2);
    }
}
