//! Deterministic transition function.

use crate::core::{Alphabet, State, Symbol};
use crate::relation::nondeterministic::TransitionRelation;
use crate::relation::violations::DeterminismViolation;
use std::collections::BTreeMap;

/// A transition relation with no `Epsilon` transitions and at most one
/// destination per `(state, character)` pair.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DeterministicRelation {
    relation: TransitionRelation,
    delta: BTreeMap<(State, char), State>,
}

impl DeterministicRelation {
    /// Validate and index a relation as a transition function.
    ///
    /// # Example
    ///
    /// ```rust
    /// use fsmkit::relation::{DeterministicRelation, DeterminismViolation, TransitionRelation};
    ///
    /// let ok = TransitionRelation::parse("0,a,1;1,a,0").unwrap();
    /// assert!(DeterministicRelation::new(ok).is_ok());
    ///
    /// let forked = TransitionRelation::parse("0,a,1;0,a,0").unwrap();
    /// assert!(matches!(
    ///     DeterministicRelation::new(forked),
    ///     Err(DeterminismViolation::MultipleDestinations { .. })
    /// ));
    /// ```
    pub fn new(relation: TransitionRelation) -> Result<Self, DeterminismViolation> {
        for (state, symbol, destinations) in relation.entries() {
            match symbol {
                Symbol::Epsilon => {
                    if let Some(&to) = destinations.iter().next() {
                        return Err(DeterminismViolation::EpsilonTransition { from: state, to });
                    }
                }
                Symbol::Char(c) if destinations.len() > 1 => {
                    return Err(DeterminismViolation::MultipleDestinations {
                        state,
                        symbol: c,
                        destinations: destinations.iter().copied().collect(),
                    });
                }
                Symbol::Char(_) => {}
            }
        }
        Ok(Self::index(relation))
    }

    /// Index a relation already known to be deterministic.
    pub(crate) fn index(relation: TransitionRelation) -> Self {
        let delta = relation
            .iter()
            .filter_map(|t| t.symbol.as_char().map(|c| ((t.from, c), t.to)))
            .collect();
        Self { relation, delta }
    }

    /// The unique destination for `(state, c)`, or `None` for the dead state.
    pub fn next(&self, state: State, c: char) -> Option<State> {
        self.delta.get(&(state, c)).copied()
    }

    pub fn relation(&self) -> &TransitionRelation {
        &self.relation
    }

    /// Check if every `(state, c)` pair over the given states and characters is defined.
    pub fn is_total<'a, S>(&self, states: S, alphabet: &Alphabet) -> bool
    where
        S: IntoIterator<Item = &'a State>,
    {
        states
            .into_iter()
            .all(|&state| alphabet.iter().all(|c| self.delta.contains_key(&(state, c))))
    }
}
