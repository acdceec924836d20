//! Error types for the life simulation core
//!
//! Every variant except `NotInitialized` is raised while building a catalogue.
//! A life that has started cannot fail.

use thiserror::Error;

/// Main error type for the life simulation core
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LifeSimError {
    #[error("Invalid condition: {0}")]
    InvalidCondition(String),

    #[error("Duplicate talent id: {0}")]
    DuplicateTalent(i32),

    #[error("Duplicate event id: {0}")]
    DuplicateEvent(i32),

    #[error("Duplicate age entry: {0}")]
    DuplicateAge(i32),

    #[error("Talent {talent} has grade {grade}, expected 0..=3")]
    InvalidGrade { talent: i32, grade: i32 },

    #[error("Talent {talent} lists unknown exclusive talent {exclusive}")]
    UnknownExclusiveTalent { talent: i32, exclusive: i32 },

    #[error("Event branch cycle: {0:?}")]
    BranchCycle(Vec<i32>),

    #[error("Deserialization error: {0}")]
    Deserialization(String),

    #[error("Catalogue not initialized")]
    NotInitialized,
}

impl From<serde_json::Error> for LifeSimError {
    fn from(err: serde_json::Error) -> Self {
        LifeSimError::Deserialization(err.to_string())
    }
}

#[cfg(feature = "python")]
impl From<LifeSimError> for pyo3::PyErr {
    fn from(err: LifeSimError) -> pyo3::PyErr {
        use pyo3::exceptions::{PyKeyError, PyRuntimeError, PyValueError};

        match err {
            LifeSimError::DuplicateTalent(_)
            | LifeSimError::DuplicateEvent(_)
            | LifeSimError::DuplicateAge(_)
            | LifeSimError::UnknownExclusiveTalent { .. } => PyKeyError::new_err(err.to_string()),
            LifeSimError::NotInitialized => PyRuntimeError::new_err(err.to_string()),
            _ => PyValueError::new_err(err.to_string()),
        }
    }
}

/// Result type alias for the life simulation core
pub type Result<T> = std::result::Result<T, LifeSimError>;
