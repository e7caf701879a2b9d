//! Integrity and determinism violations.

use crate::core::{State, Transition};
use thiserror::Error;

/// A transition that refers to something its machine does not declare.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TransitionViolation {
    #[error("transition {transition} starts in undeclared state {}", .transition.from)]
    UnknownSource { transition: Transition },

    #[error("transition {transition} ends in undeclared state {}", .transition.to)]
    UnknownDestination { transition: Transition },

    #[error("transition {transition} uses symbol {} outside the alphabet", .transition.symbol)]
    UnknownSymbol { transition: Transition },
}

/// A relation that cannot serve as a deterministic transition function.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum DeterminismViolation {
    #[error("epsilon transition from state {from} to state {to}")]
    EpsilonTransition { from: State, to: State },

    #[error("state {state} has {} destinations on '{symbol}'", .destinations.len())]
    MultipleDestinations {
        state: State,
        symbol: char,
        destinations: Vec<State>,
    },
}
