//! Subset construction.
//!
//! Each DFA state stands for the set of NFA states reachable by some input
//! prefix. Sets are keyed by their ordered membership, so the same set always
//! maps to the same DFA state no matter how it was assembled.

use super::{Dfa, Machine, MachineError};
use crate::config::ConversionConfig;
use crate::core::{State, StateSet, Symbol, Transition};
use crate::relation::{Relation, TransitionRelation};
use std::collections::{HashMap, VecDeque};

impl<R: Relation> Machine<R> {
    /// Convert to an equivalent deterministic machine.
    ///
    /// The DFA's initial state is 0 and stands for the epsilon closure of the
    /// initial state. The empty subset, when it arises, becomes a single
    /// non-accepting dead state that loops to itself on every symbol.
    ///
    /// # Example
    ///
    /// ```rust
    /// use fsmkit::machine::Nfa;
    ///
    /// let nfa: Nfa = "0 1/a/0,a,0;0,a,1/0/1".parse().unwrap();
    /// let dfa = nfa.to_dfa();
    /// assert_eq!(dfa.encode(), "0 1/a/0,a,1;1,a,1/0/1");
    /// ```
    pub fn to_dfa(&self) -> Dfa {
        self.subset_construction(None)
            .expect("an unbounded subset construction cannot exceed a state limit")
    }

    /// Convert to a deterministic machine under `config`.
    ///
    /// Fails with `StateLimitExceeded` when more than `config.max_states()`
    /// DFA states would be created.
    pub fn to_dfa_with(&self, config: &ConversionConfig) -> Result<Dfa, MachineError> {
        if config.prune_unreachable() {
            self.remove_unreachable_states()
                .subset_construction(config.max_states())
        } else {
            self.subset_construction(config.max_states())
        }
    }

    fn subset_construction(&self, limit: Option<usize>) -> Result<Dfa, MachineError> {
        let start = self.epsilon_closure(self.initial());

        let mut ids: HashMap<StateSet, State> = HashMap::new();
        let mut worklist: VecDeque<StateSet> = VecDeque::new();
        let mut transitions: Vec<Transition> = Vec::new();
        let mut accepting = StateSet::new();
        let mut next_id: u32 = 0;

        let mut assign = |subset: StateSet,
                          ids: &mut HashMap<StateSet, State>,
                          worklist: &mut VecDeque<StateSet>|
         -> Result<State, MachineError> {
            if let Some(&id) = ids.get(&subset) {
                return Ok(id);
            }
            if let Some(limit) = limit {
                if ids.len() >= limit {
                    return Err(MachineError::StateLimitExceeded { limit });
                }
            }
            let id = State::new(next_id);
            next_id += 1;
            ids.insert(subset.clone(), id);
            worklist.push_back(subset);
            Ok(id)
        };

        assign(start, &mut ids, &mut worklist)?;

        while let Some(subset) = worklist.pop_front() {
            let from = ids[&subset];
            if self.any_accepting(&subset) {
                accepting.insert(from);
            }

            for c in self.alphabet().iter() {
                let target = self.step(&subset, c);
                log::trace!("{subset:?} --{c}--> {target:?}");
                let to = assign(target, &mut ids, &mut worklist)?;
                transitions.push(Transition::new(from, Symbol::Char(c), to));
            }
        }

        log::debug!(
            "subset construction produced {} state(s) from {}",
            ids.len(),
            self.states().len()
        );

        Ok(Dfa::derived(
            ids.into_values().collect(),
            self.alphabet().clone(),
            TransitionRelation::new(transitions),
            State::new(0),
            accepting,
        ))
    }

    /// NFA states reachable from `subset` by consuming `c`, epsilon-closed.
    fn step(&self, subset: &StateSet, c: char) -> StateSet {
        let relation = self.transitions();
        self.epsilon_closure_of(
            subset
                .iter()
                .flat_map(|&s| relation.successors(s, Symbol::Char(c))),
        )
    }
}
