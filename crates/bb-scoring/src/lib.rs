//! Pronunciation scoring library for BhashaBridge
//!
//! This crate turns a learner's spoken or typed attempt at a phrase into an
//! accuracy percentage and maps that percentage onto an XP reward.
//!
//! The pipeline is:
//!
//! 1. [`normalize`] both the attempt and the reference phrase
//! 2. compute the [`edit_distance`] between them
//! 3. convert the distance into an [`Accuracy`] with [`score`]
//! 4. look up the [`Reward`] for that accuracy with [`reward`]
//!
//! Everything here is pure and synchronous.

mod accuracy;
mod distance;
mod normalization;
mod reward;

pub use accuracy::{Accuracy, score};
pub use distance::edit_distance;
pub use normalization::normalize;
pub use reward::{Reward, Tier, reward};

use thiserror::Error;

/// Errors raised when a caller hands the scoring functions a value outside
/// their domain.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ScoringError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}
