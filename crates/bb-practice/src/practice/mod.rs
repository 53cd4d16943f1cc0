pub mod model;
pub mod service;

pub use model::{AttemptOutcome, ProgressStats};
pub use service::submit_attempt;
