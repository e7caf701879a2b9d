//! Builder for constructing machines.

use crate::builder::error::BuildError;
use crate::core::{Alphabet, State, StateSet, Symbol, Transition};
use crate::machine::{Dfa, Machine, Nfa};
use crate::relation::Relation;

/// Builder for constructing machines with a fluent API.
///
/// States named by `.initial()`, `.accepting()` or a transition are NOT
/// declared implicitly; every state must be added with `.state()` or
/// `.states()`, so typos surface as validation errors instead of silently
/// growing the machine.
#[derive(Debug, Clone, Default)]
pub struct MachineBuilder {
    states: StateSet,
    symbols: Vec<char>,
    transitions: Vec<Transition>,
    initial: Option<State>,
    accepting: StateSet,
}

impl MachineBuilder {
    /// Create a new builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Declare a state.
    pub fn state(mut self, id: u32) -> Self {
        self.states.insert(State::new(id));
        self
    }

    /// Declare several states.
    pub fn states<I: IntoIterator<Item = u32>>(mut self, ids: I) -> Self {
        self.states.extend(ids.into_iter().map(State::new));
        self
    }

    /// Append a character to the alphabet.
    pub fn symbol(mut self, c: char) -> Self {
        self.symbols.push(c);
        self
    }

    /// Append every character of `symbols` to the alphabet, in order.
    pub fn alphabet(mut self, symbols: &str) -> Self {
        self.symbols.extend(symbols.chars().filter(|c| !c.is_whitespace()));
        self
    }

    /// Add a transition consuming `c`.
    pub fn transition(mut self, from: u32, c: char, to: u32) -> Self {
        self.transitions
            .push(Transition::new(State::new(from), Symbol::Char(c), State::new(to)));
        self
    }

    /// Add an `Epsilon` transition.
    pub fn epsilon(mut self, from: u32, to: u32) -> Self {
        self.transitions
            .push(Transition::new(State::new(from), Symbol::Epsilon, State::new(to)));
        self
    }

    /// Set the initial state (required).
    pub fn initial(mut self, id: u32) -> Self {
        self.initial = Some(State::new(id));
        self
    }

    /// Mark a state as accepting.
    pub fn accepting(mut self, id: u32) -> Self {
        self.accepting.insert(State::new(id));
        self
    }

    /// Build a nondeterministic machine.
    pub fn build_nfa(self) -> Result<Nfa, BuildError> {
        self.build()
    }

    /// Build a deterministic machine.
    /// Fails if any transition is `Epsilon` or forks.
    pub fn build_dfa(self) -> Result<Dfa, BuildError> {
        self.build()
    }

    /// Build a machine over any relation kind.
    pub fn build<R: Relation>(self) -> Result<Machine<R>, BuildError> {
        let initial = self.initial.ok_or(BuildError::MissingInitialState)?;
        let alphabet = Alphabet::new(self.symbols)?;

        Ok(Machine::new(
            self.states,
            alphabet,
            self.transitions,
            initial,
            self.accepting,
        )?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::machine::MachineError;

    #[test]
    fn builder_validates_required_fields() {
        let result = MachineBuilder::new().states([0, 1]).build_nfa();

        assert!(matches!(result, Err(BuildError::MissingInitialState)));
    }

    #[test]
    fn fluent_api_builds_nfa() {
        let nfa = MachineBuilder::new()
            .states(0..3)
            .alphabet("ab")
            .epsilon(0, 1)
            .transition(1, 'a', 1)
            .transition(1, 'b', 2)
            .initial(0)
            .accepting(2)
            .build_nfa()
            .unwrap();

        assert_eq!(nfa.encode(), "0 1 2/a b/0,,1;1,a,1;1,b,2/0/2");
        assert!(nfa.compute("aab".chars()));
    }

    #[test]
    fn fluent_api_builds_dfa() {
        let dfa = MachineBuilder::new()
            .state(0)
            .state(1)
            .symbol('x')
            .transition(0, 'x', 1)
            .transition(1, 'x', 0)
            .initial(0)
            .accepting(0)
            .build_dfa()
            .unwrap();

        assert!(dfa.compute("xx".chars()));
        assert!(!dfa.compute("x".chars()));
    }

    #[test]
    fn undeclared_states_are_rejected() {
        let result = MachineBuilder::new()
            .state(0)
            .symbol('a')
            .transition(0, 'a', 1)
            .initial(0)
            .build_nfa();

        assert!(matches!(
            result,
            Err(BuildError::Invalid(MachineError::InvalidTransition { .. }))
        ));
    }

    #[test]
    fn dfa_build_rejects_epsilon() {
        let result = MachineBuilder::new()
            .states([0, 1])
            .epsilon(0, 1)
            .initial(0)
            .build_dfa();

        assert!(matches!(
            result,
            Err(BuildError::Invalid(MachineError::NotDeterministic(_)))
        ));
    }

    #[test]
    fn repeated_symbol_is_rejected() {
        let result = MachineBuilder::new()
            .state(0)
            .alphabet("aa")
            .initial(0)
            .build_nfa();

        assert!(matches!(
            result,
            Err(BuildError::Invalid(MachineError::Format(_)))
        ));
    }

    #[test]
    fn separator_symbol_is_rejected() {
        let result = MachineBuilder::new()
            .states([0, 1])
            .symbol(';')
            .transition(0, ';', 1)
            .initial(0)
            .accepting(1)
            .build_nfa();

        assert!(matches!(
            result,
            Err(BuildError::Invalid(MachineError::Format(_)))
        ));
    }

    #[test]
    fn whitespace_symbol_is_rejected() {
        let result = MachineBuilder::new()
            .state(0)
            .symbol(' ')
            .initial(0)
            .build_nfa();

        assert!(matches!(
            result,
            Err(BuildError::Invalid(MachineError::Format(_)))
        ));
    }

    #[test]
    fn built_machine_encoding_parses_back() {
        let nfa = MachineBuilder::new()
            .states([0, 1])
            .symbol('-')
            .symbol('.')
            .transition(0, '-', 1)
            .transition(1, '.', 0)
            .initial(0)
            .accepting(1)
            .build_nfa()
            .unwrap();

        let reparsed: Nfa = nfa.encode().parse().unwrap();
        assert_eq!(reparsed, nfa);
    }
}
