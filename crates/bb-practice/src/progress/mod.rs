mod service;

pub use service::{language_progress, overview};
