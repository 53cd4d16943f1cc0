pub mod model;
pub mod service;

pub use model::AchievementStatus;
pub use service::{check_achievements, list_achievements};
