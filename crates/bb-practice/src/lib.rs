pub mod achievement;
pub mod catalog;
pub mod challenge;
pub mod chat;
pub mod config;
pub mod error;
pub mod practice;
pub mod progress;
pub mod state;
pub mod tracing;
pub mod validation;

pub use config::{Environment, PracticeConfig};
pub use error::PracticeError;
pub use state::PracticeState;
