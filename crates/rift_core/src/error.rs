use thiserror::Error;

use crate::models::Role;

/// Errors raised at the library boundary (request parsing, roster and
/// catalog validation, config loading).
///
/// The simulation itself never returns these: missing reference data is
/// replaced with defaults and an incomplete draft is reported through
/// `SetResult::winner_name == None`.
#[derive(Error, Debug)]
pub enum MatchError {
    #[error("Invalid roster for {team}: {reason}")]
    InvalidRoster { team: String, reason: String },

    #[error("Missing player for role {role:?} in {team}")]
    MissingRole { team: String, role: Role },

    #[error("Duplicate champion in catalog: {0}")]
    DuplicateChampion(String),

    #[error("Invalid champion {name}: {reason}")]
    InvalidChampion { name: String, reason: String },

    #[error("Invalid engine config: {0}")]
    InvalidConfig(String),

    #[error("Embedded data error: {0}")]
    Data(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

impl MatchError {
    /// Whether the caller can retry with corrected input.
    pub fn is_input_error(&self) -> bool {
        match self {
            MatchError::InvalidRoster { .. }
            | MatchError::MissingRole { .. }
            | MatchError::DuplicateChampion(_)
            | MatchError::InvalidChampion { .. }
            | MatchError::InvalidConfig(_)
            | MatchError::Json(_)
            | MatchError::Yaml(_) => true,
            MatchError::Data(_) => false,
        }
    }
}

pub type Result<T> = std::result::Result<T, MatchError>;
