use thiserror::Error;

/// Main error type for the engine's fallible helpers.
///
/// Scoring, bonus lookup and ranking never fail; only data loading,
/// configuration, survey answering and battle recording report errors.
#[derive(Error, Debug)]
pub enum EngineError {
    /// JSON (de)serialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// File access errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Invalid configuration
    #[error("Configuration error: {0}")]
    Config(String),

    /// Two members share an ID
    #[error("Duplicate member id: {0}")]
    DuplicateMember(String),

    /// Two groups share an ID
    #[error("Duplicate group id: {0}")]
    DuplicateGroup(String),

    /// Member refers to a group that does not exist
    #[error("Member '{member}' refers to unknown group '{group}'")]
    UnknownGroup { member: String, group: String },

    /// Invalid multi-choice selection
    #[error("Invalid selection for question '{question}': {message}")]
    Selection { question: String, message: String },

    /// Battle result names a member outside the candidate pool
    #[error("Member '{0}' is not in the candidate pool")]
    UnknownCandidate(String),

    /// Battle result that cannot be applied
    #[error("Invalid battle: {0}")]
    InvalidBattle(String),

    /// All battle rounds have been played
    #[error("Battle session already finished after {0} rounds")]
    BattleFinished(usize),

    /// Generic errors
    #[error("{0}")]
    Other(String),
}

impl From<String> for EngineError {
    fn from(s: String) -> Self {
        EngineError::Other(s)
    }
}

impl From<&str> for EngineError {
    fn from(s: &str) -> Self {
        EngineError::Other(s.to_string())
    }
}

/// Result type alias
pub type Result<T> = std::result::Result<T, EngineError>;
