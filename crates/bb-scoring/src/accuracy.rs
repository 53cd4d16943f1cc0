//! Accuracy scoring between a learner's attempt and a reference phrase.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::{ScoringError, distance::edit_distance, normalization::normalize};

/// A percentage similarity in `0..=100`.
///
/// The only ways to obtain one are [`score`] and the checked constructors, so
/// every `Accuracy` in circulation is in range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "u8")]
pub struct Accuracy(u8);

impl Accuracy {
    /// Zero accuracy, also returned when there is nothing to compare.
    pub const MIN: Self = Self(0);
    /// A perfect match.
    pub const MAX: Self = Self(100);

    /// Build an accuracy from an integer percentage.
    ///
    /// Returns [`ScoringError::InvalidArgument`] outside `0..=100`.
    pub fn new(value: i64) -> Result<Self, ScoringError> {
        match u8::try_from(value) {
            Ok(v) if v <= 100 => Ok(Self(v)),
            _ => Err(ScoringError::InvalidArgument(format!(
                "accuracy must be between 0 and 100, got {value}"
            ))),
        }
    }

    /// The percentage as an integer.
    pub const fn value(self) -> u8 {
        self.0
    }
}

impl TryFrom<i64> for Accuracy {
    type Error = ScoringError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Accuracy> for u8 {
    fn from(accuracy: Accuracy) -> Self {
        accuracy.0
    }
}

impl fmt::Display for Accuracy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.0)
    }
}

/// Score a learner's attempt against the reference phrase.
///
/// Both strings are [`normalize`]d, then the edit distance `d` between them is
/// turned into `round((max_len - d) / max_len * 100)`, where `max_len` is the
/// character count of the longer normalized string. Rounding is half away
/// from zero.
///
/// Two strings that are both empty after normalization score `0`: empty input
/// is never rewarded.
///
/// # Examples
///
/// ```
/// use bb_scoring::score;
///
/// assert_eq!(score("Ek chai dijiye", "Ek chai dijiye.").value(), 100);
/// assert_eq!(score("", "").value(), 0);
/// ```
pub fn score(user_text: &str, reference_text: &str) -> Accuracy {
    let user = normalize(user_text);
    let reference = normalize(reference_text);

    let max_len = user.chars().count().max(reference.chars().count());
    if max_len == 0 {
        return Accuracy::MIN;
    }

    let distance = edit_distance(&user, &reference);
    let matched = max_len.saturating_sub(distance);
    let percent = (matched as f64 / max_len as f64 * 100.0).round();

    Accuracy(percent.clamp(0.0, 100.0) as u8)
}
