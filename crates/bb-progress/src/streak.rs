//! Daily activity streaks.
//!
//! A streak counts consecutive UTC calendar days with at least one completed
//! activity.

use chrono::{DateTime, Utc};

use crate::models::Learner;

/// Streak before and after recording an activity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StreakChange {
    pub previous: u32,
    pub current: u32,
}

impl StreakChange {
    pub const fn extended(&self) -> bool {
        self.current > self.previous
    }
}

/// Record an activity at `now` and update the learner's streak.
///
/// * first activity ever: streak becomes 1
/// * another activity on the same day: unchanged
/// * activity on the following day: streak grows by one
/// * a gap of more than a day: streak restarts at 1
///
/// An activity dated before the last recorded one leaves the learner
/// untouched.
pub fn record_activity(learner: &mut Learner, now: DateTime<Utc>) -> StreakChange {
    let previous = learner.current_streak;

    let current = match learner.last_activity_at {
        None => 1,
        Some(last) => {
            let days = (now.date_naive() - last.date_naive()).num_days();
            match days {
                d if d < 0 || now < last => {
                    return StreakChange {
                        previous,
                        current: previous,
                    };
                }
                0 => previous.max(1),
                1 => previous.saturating_add(1),
                _ => 1,
            }
        }
    };

    learner.current_streak = current;
    learner.last_activity_at = Some(now);

    StreakChange { previous, current }
}
