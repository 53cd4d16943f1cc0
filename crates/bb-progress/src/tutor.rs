//! Keyword-matching chat tutor.
//!
//! The tutor answers a learner's message with a phrase from the language's
//! phrasebook. Keywords from the message are looked up in each phrase's
//! English and local text and in its tags; one of the first few matches is
//! picked at random. Without a match the tutor greets back when greeted, and
//! otherwise answers with one of a few canned replies.

use bb_scoring::normalize;
use rand::Rng;
use serde::Serialize;

/// Most phrases considered as candidate answers.
pub const MAX_MATCHES: usize = 3;

/// Situation holding greetings.
pub const GREETING_SITUATION: &str = "General Conversation";

const GREETING_WORDS: [&str; 2] = ["hello", "hi"];

/// Read access to the phrase fields the tutor matches on.
pub trait TutorPhrase {
    fn english(&self) -> &str;
    fn local(&self) -> &str;
    fn situation(&self) -> &str;
    fn tags(&self) -> &[String];
}

/// The tutor's answer
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TutorReply {
    /// What the tutor says, in the learner's target language
    pub message: String,
    /// English meaning of `message`
    pub translation: String,
    /// Text to hand to speech synthesis
    pub audio: String,
}

impl TutorReply {
    fn from_phrase<P: TutorPhrase>(phrase: &P) -> Self {
        Self {
            message: phrase.local().to_string(),
            translation: phrase.english().to_string(),
            audio: phrase.local().to_string(),
        }
    }

    fn canned(local: String, english: String) -> Self {
        Self {
            audio: local.clone(),
            message: local,
            translation: english,
        }
    }
}

/// Lowercased words of a message, with sentence punctuation removed.
pub fn keywords(message: &str) -> Vec<String> {
    normalize(message)
        .split_whitespace()
        .map(str::to_string)
        .collect()
}

/// Whether any keyword occurs in the phrase text or equals one of its tags.
pub fn matches_keywords<P: TutorPhrase>(phrase: &P, keywords: &[String]) -> bool {
    let english = phrase.english().to_lowercase();
    let local = phrase.local().to_lowercase();

    keywords.iter().any(|k| {
        english.contains(k.as_str())
            || local.contains(k.as_str())
            || phrase.tags().iter().any(|t| t.eq_ignore_ascii_case(k))
    })
}

/// The first [`MAX_MATCHES`] phrases matching the message, in phrasebook
/// order.
pub fn find_matches<'a, P: TutorPhrase>(phrasebook: &'a [P], message: &str) -> Vec<&'a P> {
    let keywords = keywords(message);
    if keywords.is_empty() {
        return Vec::new();
    }

    phrasebook
        .iter()
        .filter(|p| matches_keywords(*p, &keywords))
        .take(MAX_MATCHES)
        .collect()
}

fn is_greeting(message: &str) -> bool {
    keywords(message)
        .iter()
        .any(|k| GREETING_WORDS.contains(&k.as_str()))
}

fn greeting<P: TutorPhrase>(phrasebook: &[P]) -> Option<&P> {
    phrasebook.iter().find(|p| {
        p.situation() == GREETING_SITUATION && p.english().to_lowercase().contains("hello")
    })
}

fn fallback<R: Rng + ?Sized>(language_name: &str, rng: &mut R) -> TutorReply {
    let (local, english) = match rng.gen_range(0..4) {
        0 => (
            "I'm still learning too!".to_string(),
            "I am still learning too!".to_string(),
        ),
        1 => (
            "Can you say that again?".to_string(),
            "Can you say that again?".to_string(),
        ),
        2 => ("Tell me more.".to_string(), "Tell me more.".to_string()),
        _ => (
            format!("Let's practice \"{language_name}\"."),
            format!("Let's practice {language_name}."),
        ),
    };
    TutorReply::canned(local, english)
}

/// Answer `message` from the phrasebook of the language named
/// `language_name`.
///
/// `phrasebook` should hold the phrases of that language only.
pub fn reply<P, R>(
    phrasebook: &[P],
    message: &str,
    language_name: &str,
    rng: &mut R,
) -> TutorReply
where
    P: TutorPhrase,
    R: Rng + ?Sized,
{
    let candidates = find_matches(phrasebook, message);
    if !candidates.is_empty() {
        let pick = candidates[rng.gen_range(0..candidates.len())];
        return TutorReply::from_phrase(pick);
    }

    if is_greeting(message)
        && let Some(hello) = greeting(phrasebook)
    {
        return TutorReply::from_phrase(hello);
    }

    fallback(language_name, rng)
}
