//! Execution traces of deterministic runs.
//!
//! A `Trace` records every step a `Dfa` took while consuming an input, so a
//! rejected input can be explained: either the run ended in a non-accepting
//! state or it fell into the implicit dead state.

use crate::core::State;
use serde::{Deserialize, Serialize};

/// One consumed character.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Step {
    /// The state the character was read in
    pub from: State,
    /// The character consumed
    pub symbol: char,
    /// The state after consuming it
    pub to: State,
}

/// How a run ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    /// All input consumed, ending in an accepting state.
    Accepted,
    /// All input consumed, ending in a non-accepting state.
    Rejected,
    /// No transition for `symbol` at input position `position`.
    Stuck { position: usize, symbol: char },
}

/// Ordered record of a deterministic run.
///
/// # Example
///
/// ```rust
/// use fsmkit::core::State;
/// use fsmkit::machine::{Dfa, Outcome};
///
/// let dfa: Dfa = "0 1/a b/0,a,1;1,b,0/0/1".parse().unwrap();
///
/// let trace = dfa.trace("aba".chars());
/// assert!(trace.accepted());
/// assert_eq!(trace.path(), vec![State::new(0), State::new(1), State::new(0), State::new(1)]);
///
/// let stuck = dfa.trace("b".chars());
/// assert_eq!(stuck.outcome(), Outcome::Stuck { position: 0, symbol: 'b' });
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Trace {
    start: State,
    steps: Vec<Step>,
    outcome: Outcome,
}

impl Trace {
    pub(crate) fn new(start: State, steps: Vec<Step>, outcome: Outcome) -> Self {
        Self {
            start,
            steps,
            outcome,
        }
    }

    /// States visited in order: the initial state, then the destination of
    /// each step.
    pub fn path(&self) -> Vec<State> {
        std::iter::once(self.start)
            .chain(self.steps.iter().map(|step| step.to))
            .collect()
    }

    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    pub fn outcome(&self) -> Outcome {
        self.outcome
    }

    pub fn accepted(&self) -> bool {
        self.outcome == Outcome::Accepted
    }

    /// The last state reached before the run ended.
    pub fn last_state(&self) -> State {
        self.steps.last().map_or(self.start, |step| step.to)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_trace_path_is_start_only() {
        let trace = Trace::new(State::new(4), Vec::new(), Outcome::Rejected);
        assert_eq!(trace.path(), vec![State::new(4)]);
        assert_eq!(trace.last_state(), State::new(4));
        assert!(!trace.accepted());
    }

    #[test]
    fn trace_serializes_correctly() {
        let trace = Trace::new(
            State::new(0),
            vec![Step {
                from: State::new(0),
                symbol: 'a',
                to: State::new(1),
            }],
            Outcome::Accepted,
        );
        let json = serde_json::to_string(&trace).unwrap();
        let deserialized: Trace = serde_json::from_str(&json).unwrap();
        assert_eq!(trace, deserialized);
    }
}
