pub mod model;
pub mod service;

pub use model::{ChallengeOutcome, TodayChallenge};
pub use service::{advance_challenge, today_challenge};
