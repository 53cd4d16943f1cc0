use bb_progress::summary::{self, LanguageProgress, ProgressOverview};
use bb_store::repositories::PracticeStore;
use tracing::instrument;
use uuid::Uuid;

use crate::{PracticeError, PracticeState};

#[instrument(level = "debug", skip(state))]
pub fn overview<S: PracticeStore>(
    state: &PracticeState<S>,
    user_id: Uuid,
) -> Result<ProgressOverview, PracticeError> {
    let learner = state
        .store
        .find_learner(user_id)?
        .ok_or_else(|| PracticeError::NotFound(format!("learner {user_id}")))?;
    let records = state.store.progress_for_user(user_id)?;

    Ok(summary::overview(&learner, &records))
}

/// Progress in one language. A language the learner never practised yields
/// an empty summary rather than an error.
#[instrument(level = "debug", skip(state))]
pub fn language_progress<S: PracticeStore>(
    state: &PracticeState<S>,
    user_id: Uuid,
    language_id: Uuid,
) -> Result<LanguageProgress, PracticeError> {
    if state.store.find_learner(user_id)?.is_none() {
        return Err(PracticeError::NotFound(format!("learner {user_id}")));
    }
    let records = state.store.progress_for_user(user_id)?;

    Ok(summary::language_progress(language_id, &records))
}
