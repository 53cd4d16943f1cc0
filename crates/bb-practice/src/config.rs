use serde::Deserialize;

/// Deployment environment, selects the logging format.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    #[default]
    Development,
    Production,
}

impl Environment {
    pub const fn is_development(&self) -> bool {
        matches!(self, Self::Development)
    }
}

/// Settings for the practice services, read from `BHASHA_*` variables.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct PracticeConfig {
    /// `BHASHA_ENV`
    #[serde(default)]
    pub env: Environment,
    /// `BHASHA_MAX_TRANSCRIPT_CHARS`: longer transcripts are rejected
    #[serde(default = "default_max_transcript_chars")]
    pub max_transcript_chars: usize,
    /// `BHASHA_MAX_MESSAGE_CHARS`: longer chat messages are rejected
    #[serde(default = "default_max_message_chars")]
    pub max_message_chars: usize,
    /// `BHASHA_AWARD_ACHIEVEMENTS`: run the achievement check after each attempt
    #[serde(default = "default_award_achievements")]
    pub award_achievements: bool,
}

const ENV_PREFIX: &str = "BHASHA_";

const fn default_max_transcript_chars() -> usize {
    500
}

const fn default_max_message_chars() -> usize {
    500
}

const fn default_award_achievements() -> bool {
    true
}

impl Default for PracticeConfig {
    fn default() -> Self {
        Self {
            env: Environment::default(),
            max_transcript_chars: default_max_transcript_chars(),
            max_message_chars: default_max_message_chars(),
            award_achievements: default_award_achievements(),
        }
    }
}

impl PracticeConfig {
    /// Load from the process environment, after reading `.env` if present.
    pub fn from_env() -> Result<Self, envy::Error> {
        dotenvy::dotenv().ok();
        envy::prefixed(ENV_PREFIX).from_env()
    }

    /// Load from an explicit set of variables.
    pub fn from_vars<I>(vars: I) -> Result<Self, envy::Error>
    where
        I: IntoIterator<Item = (String, String)>,
    {
        envy::prefixed(ENV_PREFIX).from_iter(vars)
    }
}
