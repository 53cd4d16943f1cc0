mod service;

pub use bb_progress::tutor::TutorReply;
pub use service::{chat, chat_with_rng};
