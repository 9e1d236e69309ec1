//! Error types for the stepping engines
//!
//! [`EngineError`] covers everything a caller can get wrong before a run
//! starts. Once a run is accepted it cannot fail: every algorithm is total
//! over its input, and cancellation is reported as an event rather than an
//! error. Asking for a traversal or layout of an empty tree is not an error
//! either; it produces an empty result.

use crate::scheduler::RunId;
use thiserror::Error;

/// Errors surfaced synchronously by `start`, `run_*` and the validators
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EngineError {
    /// Non-numeric or out-of-range parameter; nothing was mutated
    #[error("invalid {parameter}: {reason}")]
    InvalidInput {
        parameter: &'static str,
        reason: String,
    },

    /// A run is still live on this scheduler
    #[error("run {active} is still active; cancel it before starting another")]
    RunAlreadyActive { active: RunId },
}

impl EngineError {
    pub fn invalid(parameter: &'static str, reason: impl Into<String>) -> Self {
        EngineError::InvalidInput {
            parameter,
            reason: reason.into(),
        }
    }

    /// Name of the offending parameter, if this is an input error
    pub fn parameter(&self) -> Option<&'static str> {
        match self {
            EngineError::InvalidInput { parameter, .. } => Some(parameter),
            EngineError::RunAlreadyActive { .. } => None,
        }
    }
}
