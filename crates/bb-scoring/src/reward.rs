//! XP reward policy for scored attempts.

use serde::{Deserialize, Serialize};

use crate::accuracy::Accuracy;

/// Feedback tier an attempt falls into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Tier {
    /// 90% and above
    Perfect,
    /// 70% to 89%
    Good,
    /// 50% to 69%
    Fair,
    /// Below 50%
    NeedsWork,
}

impl Tier {
    /// Classify an accuracy. A value exactly on a threshold belongs to the
    /// higher tier.
    pub const fn for_accuracy(accuracy: Accuracy) -> Self {
        match accuracy.value() {
            a if a >= 90 => Self::Perfect,
            a if a >= 70 => Self::Good,
            a if a >= 50 => Self::Fair,
            _ => Self::NeedsWork,
        }
    }

    /// XP granted for an attempt in this tier.
    pub const fn xp(self) -> u64 {
        match self {
            Self::Perfect => 50,
            Self::Good => 30,
            Self::Fair => 10,
            Self::NeedsWork => 5,
        }
    }

    /// Wire name of the tier.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Perfect => "perfect",
            Self::Good => "good",
            Self::Fair => "fair",
            Self::NeedsWork => "needsWork",
        }
    }

    /// Feedback shown to the learner.
    pub const fn message(self) -> &'static str {
        match self {
            Self::Perfect => "Perfect! Excellent pronunciation!",
            Self::Good => "Good job! Keep practicing!",
            Self::Fair => "Not bad! Try again for better accuracy.",
            Self::NeedsWork => "Keep practicing! You'll get better.",
        }
    }
}

/// XP award and feedback for one attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Reward {
    pub xp: u64,
    pub tier: Tier,
    pub message: &'static str,
}

/// Map an accuracy onto its reward.
///
/// | accuracy | xp | tier |
/// |----------|----|------|
/// | ≥ 90     | 50 | perfect |
/// | 70 – 89  | 30 | good |
/// | 50 – 69  | 10 | fair |
/// | < 50     | 5  | needsWork |
pub const fn reward(accuracy: Accuracy) -> Reward {
    let tier = Tier::for_accuracy(accuracy);
    Reward {
        xp: tier.xp(),
        tier,
        message: tier.message(),
    }
}
