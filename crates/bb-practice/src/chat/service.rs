use bb_progress::tutor::{self, TutorReply};
use bb_store::repositories::PracticeStore;
use rand::Rng;
use tracing::{debug, instrument};
use uuid::Uuid;

use crate::{PracticeError, PracticeState, validation::validate_chat_message};

/// Answer a learner's chat message from the phrasebook of `language_id`.
pub fn chat<S: PracticeStore>(
    state: &PracticeState<S>,
    language_id: Uuid,
    message: &str,
) -> Result<TutorReply, PracticeError> {
    chat_with_rng(state, language_id, message, &mut rand::thread_rng())
}

/// [`chat`] with a caller-supplied random source.
#[instrument(
    level = "debug",
    skip(state, message, rng),
    fields(message_len = message.len())
)]
pub fn chat_with_rng<S, R>(
    state: &PracticeState<S>,
    language_id: Uuid,
    message: &str,
    rng: &mut R,
) -> Result<TutorReply, PracticeError>
where
    S: PracticeStore,
    R: Rng + ?Sized,
{
    validate_chat_message(message, state.config.max_message_chars)?;

    let language = state
        .store
        .find_language(language_id)?
        .ok_or_else(|| PracticeError::NotFound(format!("language {language_id}")))?;
    let phrasebook = state.store.phrases_for_language(language_id)?;

    let reply = tutor::reply(&phrasebook, message, &language.name, rng);
    debug!(phrases = phrasebook.len(), reply = %reply.message, "Tutor replied");
    metrics::counter!("chat_messages_total").increment(1);

    Ok(reply)
}
