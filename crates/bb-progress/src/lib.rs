//! Learner progress and gamification state for BhashaBridge
//!
//! This crate folds scored attempts into the per-situation progress records
//! and the learner's XP, level and streak. It also owns the achievement and
//! daily challenge rules, the progress summaries shown on the dashboard and
//! the keyword-matching chat tutor.
//!
//! Nothing in here performs I/O: records come in as plain values and leave as
//! plain values, persistence is the caller's business.

pub mod achievement;
pub mod challenge;
pub mod models;
pub mod progress;
pub mod streak;
pub mod summary;
pub mod tutor;

pub use models::{Learner, PhraseCompletion, ProgressKey, UserProgress};
pub use progress::{LevelChange, XP_PER_LEVEL, apply_attempt, apply_xp_to_user, level_for_xp};

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ProgressError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}
