use std::sync::Arc;

use bb_store::repositories::PracticeStore;

use crate::PracticeConfig;

/// Shared handles every practice operation runs against.
#[derive(Debug)]
pub struct PracticeState<S> {
    pub store: Arc<S>,
    pub config: PracticeConfig,
}

impl<S> Clone for PracticeState<S> {
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
            config: self.config.clone(),
        }
    }
}

impl<S: PracticeStore> PracticeState<S> {
    pub fn new(store: S, config: PracticeConfig) -> Self {
        Self::from_shared(Arc::new(store), config)
    }

    pub const fn from_shared(store: Arc<S>, config: PracticeConfig) -> Self {
        Self { store, config }
    }
}
