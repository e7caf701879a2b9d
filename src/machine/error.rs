//! Machine construction and conversion errors.

use crate::core::State;
use crate::relation::{DeterminismViolation, TransitionViolation};
use thiserror::Error;

/// Errors that can occur when parsing, building or converting machines.
///
/// All of these are validation failures over caller-supplied data, detected
/// eagerly when a machine is constructed.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum MachineError {
    /// The textual encoding is malformed.
    #[error("Malformed machine encoding: {0}")]
    Format(String),

    /// Transitions refer to undeclared states or symbols.
    #[error("{} invalid transition(s), first: {}", .violations.len(), first_violation(.violations))]
    InvalidTransition { violations: Vec<TransitionViolation> },

    /// A machine claimed deterministic is not.
    #[error("Machine is not deterministic: {0}")]
    NotDeterministic(#[from] DeterminismViolation),

    #[error("Initial state {0} is not a declared state")]
    UnknownInitialState(State),

    #[error("Accepting state {0} is not a declared state")]
    UnknownAcceptingState(State),

    /// Subset construction would create more states than configured.
    #[error("Subset construction exceeded the limit of {limit} states")]
    StateLimitExceeded { limit: usize },
}

fn first_violation(violations: &[TransitionViolation]) -> String {
    violations
        .first()
        .map(ToString::to_string)
        .unwrap_or_default()
}
