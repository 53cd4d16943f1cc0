use crate::error::PracticeError;

/// Validate a learner's transcript before scoring
///
/// # Examples
/// ```
/// use bb_practice::validation::validate_transcript;
///
/// assert!(validate_transcript("Oru tea kudunga", 500).is_ok());
/// assert!(validate_transcript("   ", 500).is_err());
/// ```
pub fn validate_transcript(transcript: &str, max_chars: usize) -> Result<(), PracticeError> {
    validate_text("Transcript", transcript, max_chars)
}

/// Validate a message sent to the chat tutor
pub fn validate_chat_message(message: &str, max_chars: usize) -> Result<(), PracticeError> {
    validate_text("Message", message, max_chars)
}

/// Validate a situation name used to look up phrases
pub fn validate_situation(situation: &str) -> Result<(), PracticeError> {
    if situation.trim().is_empty() {
        return Err(PracticeError::InvalidArgument(
            "Situation cannot be empty".to_string(),
        ));
    }
    Ok(())
}

fn validate_text(label: &str, text: &str, max_chars: usize) -> Result<(), PracticeError> {
    if text.trim().is_empty() {
        return Err(PracticeError::InvalidArgument(format!(
            "{label} cannot be empty"
        )));
    }

    let chars = text.chars().count();
    if chars > max_chars {
        return Err(PracticeError::InvalidArgument(format!(
            "{label} must be at most {max_chars} characters long, got {chars}"
        )));
    }

    Ok(())
}
