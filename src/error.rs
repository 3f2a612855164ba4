//! Error Taxonomy
//!
//! Two conditions exist: a scenario key that is not registered, and an
//! operation that a type only carries to satisfy an over-broad capability.

use thiserror::Error;

/// Returned by "bad" implementations that are forced to expose an operation
/// they cannot perform.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unsupported operation `{operation}`: {reason}")]
pub struct UnsupportedOperation {
    pub operation: &'static str,
    pub reason: &'static str,
}

impl UnsupportedOperation {
    pub fn new(operation: &'static str, reason: &'static str) -> Self {
        Self { operation, reason }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScenarioError {
    #[error("unknown scenario: {0}")]
    UnknownScenario(String),

    #[error(transparent)]
    Unsupported(#[from] UnsupportedOperation),
}

pub type ScenarioResult<T> = std::result::Result<T, ScenarioError>;
