//! State identifiers and state sets.
//!
//! States carry no behavior, only identity: two states are equal iff their
//! identifiers are equal.

use crate::machine::MachineError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

/// A machine state identified by a non-negative integer.
///
/// # Example
///
/// ```rust
/// use fsmkit::core::State;
///
/// let s = State::new(3);
/// assert_eq!(s.id(), 3);
/// assert_eq!(s.encode(), "3");
/// assert_eq!(s, State::from(3));
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Debug, Serialize, Deserialize)]
#[serde(transparent)]
pub struct State(u32);

/// An ordered set of states.
///
/// Ordering makes the set usable as a normalized key: two sets with the same
/// members compare, hash and iterate identically regardless of insertion order.
pub type StateSet = BTreeSet<State>;

impl State {
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    pub fn id(&self) -> u32 {
        self.0
    }

    pub fn encode(&self) -> String {
        self.0.to_string()
    }

    /// Parse a single state identifier.
    pub fn parse(token: &str) -> Result<Self, MachineError> {
        let token = token.trim();
        token
            .parse::<u32>()
            .map(Self)
            .map_err(|_| MachineError::Format(format!("'{token}' is not a state identifier")))
    }
}

impl From<u32> for State {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl fmt::Display for State {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Parse a whitespace separated list of state identifiers.
///
/// Repeated identifiers collapse into one member.
pub fn parse_state_set(text: &str) -> Result<StateSet, MachineError> {
    text.split_whitespace().map(State::parse).collect()
}

/// Encode a state set as ascending identifiers separated by single spaces.
pub fn encode_state_set(states: &StateSet) -> String {
    states
        .iter()
        .map(State::encode)
        .collect::<Vec<_>>()
        .join(" ")
}
