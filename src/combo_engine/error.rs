//! Errors surfaced by combo generation.

use thiserror::Error;

/// Everything that can stop a combo from being generated.
///
/// `InvalidSize` and `SizeTooLarge` are malformed requests.
/// `InsufficientCandidates` is a well-formed request that the current
/// catalog cannot satisfy.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ComboError {
    #[error("combo size must be at least {min} (got {requested})")]
    InvalidSize { requested: i64, min: usize },

    #[error("combo size {requested} exceeds the maximum of {max}")]
    SizeTooLarge { requested: i64, max: usize },

    #[error(
        "not enough tricks available for requested combo size: \
         need {requested} tricks, only {available} available"
    )]
    InsufficientCandidates { requested: usize, available: usize },

    #[error("duplicate trick id {0} in candidate pool")]
    DuplicateCandidate(u32),

    #[error("invalid trick catalog: {0}")]
    Catalog(String),
}

pub type ComboResult<T> = Result<T, ComboError>;

impl ComboError {
    /// Bad input from the caller; should map to a client error, never retried.
    pub fn is_caller_error(&self) -> bool {
        matches!(self, ComboError::InvalidSize { .. } | ComboError::SizeTooLarge { .. })
    }

    /// Valid request the candidate pool cannot fulfil.
    pub fn is_unsatisfiable(&self) -> bool {
        matches!(self, ComboError::InsufficientCandidates { .. })
    }
}

impl From<serde_json::Error> for ComboError {
    fn from(err: serde_json::Error) -> Self {
        ComboError::Catalog(err.to_string())
    }
}
