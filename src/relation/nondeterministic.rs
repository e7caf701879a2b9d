//! Indexed nondeterministic transition relation.

use crate::core::{Alphabet, State, StateSet, Symbol, Transition};
use crate::machine::MachineError;
use crate::relation::violations::TransitionViolation;
use std::collections::{BTreeMap, BTreeSet};
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;

/// The set of all transitions of a machine, indexed by `(state, symbol)`.
///
/// Any number of transitions may share a `(state, symbol)` pair, and
/// `Epsilon` transitions are allowed. A pair with no transitions leads to the
/// implicit dead state.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TransitionRelation {
    transitions: BTreeSet<Transition>,
    index: BTreeMap<(State, Symbol), StateSet>,
}

impl TransitionRelation {
    /// Index a collection of transitions. Duplicates collapse into one.
    pub fn new<I>(transitions: I) -> Self
    where
        I: IntoIterator<Item = Transition>,
    {
        let transitions: BTreeSet<Transition> = transitions.into_iter().collect();
        let mut index: BTreeMap<(State, Symbol), StateSet> = BTreeMap::new();
        for t in &transitions {
            index.entry((t.from, t.symbol)).or_default().insert(t.to);
        }
        Self { transitions, index }
    }

    /// Parse `;`-separated `from,symbol,to` tuples. A blank field is an empty relation.
    pub fn parse(text: &str) -> Result<Self, MachineError> {
        if text.trim().is_empty() {
            return Ok(Self::default());
        }
        let transitions = text
            .split(';')
            .map(Transition::parse)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self::new(transitions))
    }

    /// All destinations for `(state, symbol)`; empty when there are none.
    ///
    /// # Example
    ///
    /// ```rust
    /// use fsmkit::core::{State, Symbol};
    /// use fsmkit::relation::TransitionRelation;
    ///
    /// let relation = TransitionRelation::parse("0,a,1;0,a,2").unwrap();
    /// assert_eq!(relation.at(State::new(0), Symbol::Char('a')).len(), 2);
    /// assert!(relation.at(State::new(1), Symbol::Char('a')).is_empty());
    /// ```
    pub fn at(&self, state: State, symbol: Symbol) -> StateSet {
        self.index
            .get(&(state, symbol))
            .cloned()
            .unwrap_or_default()
    }

    /// Destinations for `(state, symbol)` in ascending order, without copying.
    pub fn successors(&self, state: State, symbol: Symbol) -> impl Iterator<Item = State> + '_ {
        self.index.get(&(state, symbol)).into_iter().flatten().copied()
    }

    /// Check every transition against the declared states and alphabet,
    /// accumulating ALL violations.
    pub fn verify(
        &self,
        states: &StateSet,
        alphabet: &Alphabet,
    ) -> Validation<(), NonEmptyVec<TransitionViolation>> {
        let mut checks: Vec<Validation<(), NonEmptyVec<TransitionViolation>>> = Vec::new();

        for &transition in &self.transitions {
            if !states.contains(&transition.from) {
                checks.push(Validation::fail(TransitionViolation::UnknownSource {
                    transition,
                }));
            }
            if !states.contains(&transition.to) {
                checks.push(Validation::fail(TransitionViolation::UnknownDestination {
                    transition,
                }));
            }
            if !alphabet.admits(transition.symbol) {
                checks.push(Validation::fail(TransitionViolation::UnknownSymbol {
                    transition,
                }));
            }
        }

        Validation::all_vec(checks).map(|_| ())
    }

    /// `verify` as a `Result`, for use with `?`.
    pub fn check(&self, states: &StateSet, alphabet: &Alphabet) -> Result<(), MachineError> {
        match self.verify(states, alphabet) {
            Validation::Success(_) => Ok(()),
            Validation::Failure(violations) => Err(MachineError::InvalidTransition {
                violations: violations.iter().cloned().collect(),
            }),
        }
    }

    /// Keep only transitions whose endpoints are both in `states`.
    pub fn restrict(&self, states: &StateSet) -> Self {
        Self::new(
            self.transitions
                .iter()
                .filter(|t| states.contains(&t.from) && states.contains(&t.to))
                .copied(),
        )
    }

    /// `(state, symbol)` pairs with their destination sets, in ascending order.
    pub fn entries(&self) -> impl Iterator<Item = (State, Symbol, &StateSet)> + '_ {
        self.index
            .iter()
            .map(|(&(state, symbol), destinations)| (state, symbol, destinations))
    }

    /// Transitions in ascending `(from, symbol, to)` order.
    pub fn iter(&self) -> impl Iterator<Item = &Transition> + '_ {
        self.transitions.iter()
    }

    pub fn len(&self) -> usize {
        self.transitions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transitions.is_empty()
    }

    /// Encode as `;`-joined tuples in ascending `(from, symbol, to)` order.
    pub fn encode(&self) -> String {
        self.transitions
            .iter()
            .map(Transition::encode)
            .collect::<Vec<_>>()
            .join(";")
    }
}

impl FromIterator<Transition> for TransitionRelation {
    fn from_iter<I: IntoIterator<Item = Transition>>(iter: I) -> Self {
        Self::new(iter)
    }
}
