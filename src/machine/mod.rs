//! Finite state machines.
//!
//! `Machine<R>` is the shape shared by both kinds of automaton: a state set,
//! an alphabet, a transition relation, one initial state and a set of
//! accepting states. The relation type `R` decides which transitions are
//! allowed:
//!
//! - `Nfa` (`Machine<TransitionRelation>`): any number of destinations per
//!   `(state, symbol)` pair and `Epsilon` transitions
//! - `Dfa` (`Machine<DeterministicRelation>`): at most one destination and no
//!   `Epsilon` transitions
//!
//! Machines are immutable values. Every transformation (pruning, canonical
//! form, subset construction) returns a new machine and leaves the receiver
//! untouched.
//!
//! # Example
//!
//! ```rust
//! use fsmkit::machine::Nfa;
//!
//! let nfa: Nfa = "0 1 2/a b/0,,1;1,a,1;1,b,2/0/2".parse().unwrap();
//! let dfa = nfa.to_dfa();
//!
//! assert!(dfa.compute("aab".chars()));
//! assert!(!dfa.compute("ba".chars()));
//! assert_eq!(nfa.compute("b".chars()), dfa.compute("b".chars()));
//! ```

mod dfa;
pub mod error;
mod nfa;
mod subset;
mod trace;

pub use error::MachineError;
pub use trace::{Outcome, Step, Trace};

use crate::core::{Alphabet, State, StateSet, Transition};
use crate::relation::{DeterministicRelation, Relation, TransitionRelation};

/// A machine with a nondeterministic transition relation.
pub type Nfa = Machine<TransitionRelation>;

/// A machine with a deterministic transition function.
pub type Dfa = Machine<DeterministicRelation>;

/// A finite state machine over transition relation `R`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Machine<R: Relation> {
    states: StateSet,
    alphabet: Alphabet,
    transitions: R,
    initial: State,
    accepting: StateSet,
}

impl<R: Relation> Machine<R> {
    /// Build a machine from its components, enforcing every invariant.
    ///
    /// Fails when the initial state or an accepting state is undeclared, when
    /// a transition refers to an undeclared state or symbol, or when `R`
    /// rejects the relation (for a `Dfa`: `Epsilon` or forked transitions).
    pub fn new<I>(
        states: StateSet,
        alphabet: Alphabet,
        transitions: I,
        initial: State,
        accepting: StateSet,
    ) -> Result<Self, MachineError>
    where
        I: IntoIterator<Item = Transition>,
    {
        if !states.contains(&initial) {
            return Err(MachineError::UnknownInitialState(initial));
        }
        if let Some(&unknown) = accepting.difference(&states).next() {
            return Err(MachineError::UnknownAcceptingState(unknown));
        }

        let relation = TransitionRelation::new(transitions);
        relation.check(&states, &alphabet)?;

        Ok(Self {
            states,
            alphabet,
            transitions: R::try_from_relation(relation)?,
            initial,
            accepting,
        })
    }

    /// Assemble a machine from components derived from a valid machine.
    pub(crate) fn derived(
        states: StateSet,
        alphabet: Alphabet,
        relation: TransitionRelation,
        initial: State,
        accepting: StateSet,
    ) -> Self {
        Self {
            states,
            alphabet,
            transitions: R::from_derived(relation),
            initial,
            accepting,
        }
    }

    pub fn states(&self) -> &StateSet {
        &self.states
    }

    pub fn alphabet(&self) -> &Alphabet {
        &self.alphabet
    }

    /// The transition relation, viewed nondeterministically.
    pub fn transitions(&self) -> &TransitionRelation {
        self.transitions.relation()
    }

    pub fn initial(&self) -> State {
        self.initial
    }

    pub fn accepting(&self) -> &StateSet {
        &self.accepting
    }

    pub fn is_accepting(&self, state: State) -> bool {
        self.accepting.contains(&state)
    }

    /// Check if any state in `states` is accepting.
    pub fn any_accepting<'a, I>(&self, states: I) -> bool
    where
        I: IntoIterator<Item = &'a State>,
    {
        states.into_iter().any(|s| self.accepting.contains(s))
    }
}

impl From<Dfa> for Nfa {
    fn from(dfa: Dfa) -> Self {
        Self {
            states: dfa.states,
            alphabet: dfa.alphabet,
            transitions: dfa.transitions.relation().clone(),
            initial: dfa.initial,
            accepting: dfa.accepting,
        }
    }
}

impl TryFrom<Nfa> for Dfa {
    type Error = MachineError;

    /// Reinterpret an NFA whose relation happens to be deterministic.
    ///
    /// This does not run subset construction; use `Nfa::to_dfa` for that.
    fn try_from(nfa: Nfa) -> Result<Self, Self::Error> {
        Ok(Self {
            transitions: DeterministicRelation::new(nfa.transitions)?,
            states: nfa.states,
            alphabet: nfa.alphabet,
            initial: nfa.initial,
            accepting: nfa.accepting,
        })
    }
}
