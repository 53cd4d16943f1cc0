use bb_progress::ProgressError;
use bb_scoring::ScoringError;
use bb_store::StoreError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PracticeError {
    /// Malformed or missing input, not worth retrying
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
    #[error("Not found: {0}")]
    NotFound(String),
    #[error("Store error: {0}")]
    Store(StoreError),
}

impl From<StoreError> for PracticeError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::NotFound { entity, id } => Self::NotFound(format!("{entity} {id}")),
            other => Self::Store(other),
        }
    }
}

impl From<ScoringError> for PracticeError {
    fn from(err: ScoringError) -> Self {
        match err {
            ScoringError::InvalidArgument(msg) => Self::InvalidArgument(msg),
        }
    }
}

impl From<ProgressError> for PracticeError {
    fn from(err: ProgressError) -> Self {
        match err {
            ProgressError::InvalidArgument(msg) => Self::InvalidArgument(msg),
        }
    }
}
