//! Deterministic execution.

use super::trace::{Outcome, Step, Trace};
use super::Dfa;
use crate::core::State;
use crate::relation::DeterministicRelation;

impl Dfa {
    fn delta(&self) -> &DeterministicRelation {
        &self.transitions
    }

    /// The unique successor of `state` on `c`, or `None` for the dead state.
    pub fn next(&self, state: State, c: char) -> Option<State> {
        self.delta().next(state, c)
    }

    /// Run the machine on `input`.
    ///
    /// A missing transition rejects immediately; characters outside the
    /// alphabet have no transitions and so reject too. This never fails.
    ///
    /// # Example
    ///
    /// ```rust
    /// use fsmkit::machine::Dfa;
    ///
    /// let dfa: Dfa = "0 1/a b/0,a,0;0,b,1;1,a,0;1,b,1/0/1".parse().unwrap();
    /// assert!(dfa.compute("abbaab".chars()));
    /// assert!(!dfa.compute("aba".chars()));
    /// assert!(!dfa.compute("abc".chars()));
    /// ```
    pub fn compute<I>(&self, input: I) -> bool
    where
        I: IntoIterator<Item = char>,
    {
        let mut current = self.initial();
        for c in input {
            match self.next(current, c) {
                Some(next) => current = next,
                None => return false,
            }
        }
        self.is_accepting(current)
    }

    /// Run the machine on `input`, recording every step.
    pub fn trace<I>(&self, input: I) -> Trace
    where
        I: IntoIterator<Item = char>,
    {
        let start = self.initial();
        let mut current = start;
        let mut steps = Vec::new();

        for (position, c) in input.into_iter().enumerate() {
            let Some(next) = self.next(current, c) else {
                return Trace::new(start, steps, Outcome::Stuck { position, symbol: c });
            };
            steps.push(Step {
                from: current,
                symbol: c,
                to: next,
            });
            current = next;
        }

        let outcome = if self.is_accepting(current) {
            Outcome::Accepted
        } else {
            Outcome::Rejected
        };
        Trace::new(start, steps, outcome)
    }

    /// Check if every state has a transition on every alphabet character.
    pub fn is_complete(&self) -> bool {
        self.delta().is_total(self.states(), self.alphabet())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dfa(encoding: &str) -> Dfa {
        encoding.parse().unwrap()
    }

    #[test]
    fn compute_accepts_when_ending_in_accepting_state() {
        let m = dfa("0 1/a b/0,a,0;0,b,1;1,a,0;1,b,1/0/1");
        assert!(m.compute("abbaab".chars()));
        assert!(m.compute("b".chars()));
        assert!(!m.compute("".chars()));
        assert!(!m.compute("ba".chars()));
    }

    #[test]
    fn missing_transition_rejects() {
        let m = dfa("0 1/a b/0,a,1/0/1");
        assert!(m.compute("a".chars()));
        assert!(!m.compute("b".chars()));
        assert!(!m.compute("aa".chars()));
    }

    #[test]
    fn empty_input_accepts_iff_initial_accepting() {
        assert!(dfa("0/a/0,a,0/0/0").compute("".chars()));
        assert!(!dfa("0/a/0,a,0/0/").compute("".chars()));
    }

    #[test]
    fn trace_matches_compute() {
        let m = dfa("0 1/a b/0,a,0;0,b,1;1,a,0;1,b,1/0/1");
        for input in ["", "a", "ab", "abbaab", "bba"] {
            assert_eq!(m.trace(input.chars()).accepted(), m.compute(input.chars()));
        }
    }

    #[test]
    fn trace_stops_at_dead_state() {
        let m = dfa("0 1/a b/0,a,1/0/1");
        let trace = m.trace("aab".chars());
        assert_eq!(
            trace.outcome(),
            Outcome::Stuck {
                position: 1,
                symbol: 'a'
            }
        );
        assert_eq!(trace.path(), vec![State::new(0), State::new(1)]);
    }

    #[test]
    fn completeness() {
        assert!(dfa("0 1/a/0,a,1;1,a,1/0/1").is_complete());
        assert!(!dfa("0 1/a/0,a,1/0/1").is_complete());
    }
}
