// Repositories are traits over `&self` so one store value can back every
// service. Read-modify-write operations take a closure and must apply it
// atomically with respect to other writers of the same record.

pub mod achievement;
pub mod challenge;
pub mod language;
pub mod learner;
pub mod phrase;
pub mod progress;

pub use achievement::AchievementRepository;
pub use challenge::ChallengeRepository;
pub use language::LanguageRepository;
pub use learner::LearnerRepository;
pub use phrase::PhraseRepository;
pub use progress::ProgressRepository;

/// Everything the practice services need from a store.
pub trait PracticeStore:
    LanguageRepository
    + PhraseRepository
    + ProgressRepository
    + LearnerRepository
    + AchievementRepository
    + ChallengeRepository
{
}

impl<T> PracticeStore for T where
    T: LanguageRepository
        + PhraseRepository
        + ProgressRepository
        + LearnerRepository
        + AchievementRepository
        + ChallengeRepository
{
}
