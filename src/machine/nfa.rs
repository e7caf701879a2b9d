//! Closure, reachability and canonical renumbering.
//!
//! These traversals apply to any machine; on a `Dfa` the epsilon closure of a
//! state is always the state alone.

use super::{Machine, Nfa};
use crate::core::{State, StateSet, Symbol, Transition};
use crate::relation::{Relation, TransitionRelation};
use std::collections::{BTreeMap, VecDeque};

impl<R: Relation> Machine<R> {
    /// States reachable from `state` through zero or more `Epsilon`
    /// transitions, including `state` itself.
    ///
    /// # Example
    ///
    /// ```rust
    /// use fsmkit::core::State;
    /// use fsmkit::machine::Nfa;
    ///
    /// let nfa: Nfa = "0 1 2 3/a/0,,1;1,,2;2,a,3/0/3".parse().unwrap();
    /// let closure = nfa.epsilon_closure(State::new(0));
    /// assert_eq!(closure.len(), 3);
    /// assert!(!closure.contains(&State::new(3)));
    /// ```
    pub fn epsilon_closure(&self, state: State) -> StateSet {
        self.epsilon_closure_of([state])
    }

    /// Union of the epsilon closures of every state in `seeds`.
    pub fn epsilon_closure_of<I>(&self, seeds: I) -> StateSet
    where
        I: IntoIterator<Item = State>,
    {
        let mut closure = StateSet::new();
        let mut worklist = Vec::new();
        for seed in seeds {
            if closure.insert(seed) {
                worklist.push(seed);
            }
        }

        let relation = self.transitions();
        while let Some(current) = worklist.pop() {
            for next in relation.successors(current, Symbol::Epsilon) {
                if closure.insert(next) {
                    worklist.push(next);
                }
            }
        }

        closure
    }

    /// States reachable from the initial state over any symbol, `Epsilon`
    /// included.
    pub fn reachable_states(&self) -> StateSet {
        let relation = self.transitions();
        let mut reachable = StateSet::from([self.initial()]);
        let mut queue = VecDeque::from([self.initial()]);

        while let Some(current) = queue.pop_front() {
            for symbol in self.alphabet().with_epsilon() {
                for next in relation.successors(current, symbol) {
                    if reachable.insert(next) {
                        queue.push_back(next);
                    }
                }
            }
        }

        reachable
    }

    /// A machine restricted to the states reachable from the initial state.
    ///
    /// States, transitions and accepting states outside the reachable set are
    /// dropped. The recognized language is unchanged.
    pub fn remove_unreachable_states(&self) -> Self {
        let reachable = self.reachable_states();
        let accepting: StateSet = self.accepting().intersection(&reachable).copied().collect();
        let relation = self.transitions().restrict(&reachable);

        log::debug!(
            "pruned {} unreachable state(s), {} remain",
            self.states().len() - reachable.len(),
            reachable.len()
        );

        Self::derived(
            reachable,
            self.alphabet().clone(),
            relation,
            self.initial(),
            accepting,
        )
    }

    /// Renumber the reachable states in traversal order.
    ///
    /// States are numbered from 0 in the order a breadth-first traversal from
    /// the initial state first visits them. Each state's successors are
    /// enumerated `Epsilon` first, then in alphabet declaration order, and
    /// multiple destinations on one symbol in ascending id order. Unreachable
    /// states, including accepting ones, are dropped.
    ///
    /// Isomorphic machines encode identically only when no `(state, symbol)`
    /// pair has more than one destination, which always holds for a `Dfa`.
    /// Otherwise the ascending-id tie-break depends on the original names:
    /// `0,a,1;0,a,2;1,b,3` and `0,a,1;0,a,2;2,b,3` describe the same graph
    /// but canonicalize differently.
    ///
    /// This is a relabeling, not minimization.
    ///
    /// # Example
    ///
    /// ```rust
    /// use fsmkit::machine::Dfa;
    ///
    /// let a: Dfa = "7 3/a/7,a,3;3,a,7/7/3".parse().unwrap();
    /// let b: Dfa = "10 20/a/20,a,10;10,a,20/20/10".parse().unwrap();
    /// assert_eq!(a.to_canonic_form().encode(), b.to_canonic_form().encode());
    /// assert_eq!(a.to_canonic_form().encode(), "0 1/a/0,a,1;1,a,0/0/1");
    /// ```
    pub fn to_canonic_form(&self) -> Self {
        let relation = self.transitions();
        let mut canonic: BTreeMap<State, State> = BTreeMap::new();
        let mut transitions: Vec<Transition> = Vec::new();
        let mut queue = VecDeque::new();
        let mut free: u32 = 0;

        canonic.insert(self.initial(), State::new(free));
        free += 1;
        queue.push_back(self.initial());

        while let Some(current) = queue.pop_front() {
            let from = canonic[&current];
            for symbol in self.alphabet().with_epsilon() {
                for next in relation.successors(current, symbol) {
                    let to = *canonic.entry(next).or_insert_with(|| {
                        queue.push_back(next);
                        let id = State::new(free);
                        free += 1;
                        id
                    });
                    transitions.push(Transition::new(from, symbol, to));
                }
            }
        }

        let accepting: StateSet = self
            .accepting()
            .iter()
            .filter_map(|s| canonic.get(s).copied())
            .collect();

        log::debug!("canonic form has {} state(s)", canonic.len());

        Self::derived(
            canonic.into_values().collect(),
            self.alphabet().clone(),
            TransitionRelation::new(transitions),
            State::new(0),
            accepting,
        )
    }
}

impl Nfa {
    /// Run the machine on `input`, accepting iff some nondeterministic path
    /// consumes all of it and ends in an accepting state.
    ///
    /// Defined through subset construction.
    pub fn compute<I>(&self, input: I) -> bool
    where
        I: IntoIterator<Item = char>,
    {
        self.to_dfa().compute(input)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::machine::Dfa;

    fn nfa(encoding: &str) -> Nfa {
        encoding.parse().unwrap()
    }

    fn set(ids: &[u32]) -> StateSet {
        ids.iter().copied().map(State::new).collect()
    }

    #[test]
    fn epsilon_closure_includes_the_state_itself() {
        let m = nfa("0 1/a/0,a,1/0/1");
        assert_eq!(m.epsilon_closure(State::new(0)), set(&[0]));
    }

    #[test]
    fn epsilon_closure_follows_chains_and_cycles() {
        let m = nfa("0 1 2 3/a/0,,1;1,,2;2,,0;2,a,3/0/3");
        assert_eq!(m.epsilon_closure(State::new(1)), set(&[0, 1, 2]));
        assert_eq!(m.epsilon_closure(State::new(3)), set(&[3]));
    }

    #[test]
    fn epsilon_closure_is_idempotent() {
        let m = nfa("0 1 2 3 4/a/0,,1;1,,3;3,a,4;4,,2/0/2");
        let once = m.epsilon_closure(State::new(0));
        let twice = m.epsilon_closure_of(once.iter().copied());
        assert_eq!(once, twice);
    }

    #[test]
    fn reachable_states_follow_every_symbol() {
        let m = nfa("0 1 2 3 4/a b/0,a,1;1,,2;2,b,0;3,a,4/0/4");
        assert_eq!(m.reachable_states(), set(&[0, 1, 2]));
    }

    #[test]
    fn remove_unreachable_states_drops_states_and_accepting() {
        let m = nfa("0 1 2 3/a/0,a,1;2,a,3;3,a,0/0/1 3");
        let pruned = m.remove_unreachable_states();
        assert_eq!(pruned.encode(), "0 1/a/0,a,1/0/1");
        // receiver untouched
        assert_eq!(m.states().len(), 4);
    }

    #[test]
    fn canonic_form_numbers_in_breadth_first_order() {
        let m = nfa("5 6 7 8/a b/5,b,6;5,a,7;7,a,8;6,,8/5/8");
        // from 5: a -> 7 gets 1, b -> 6 gets 2; from 7: a -> 8 gets 3
        assert_eq!(
            m.to_canonic_form().encode(),
            "0 1 2 3/a b/0,a,1;0,b,2;1,a,3;2,,3/0/3"
        );
    }

    #[test]
    fn canonic_form_visits_epsilon_first() {
        let m = nfa("4 9/a/4,a,4;4,,9/4/");
        assert_eq!(m.to_canonic_form().encode(), "0 1/a/0,,1;0,a,0/0/");
    }

    #[test]
    fn canonic_form_drops_unreachable_accepting_states() {
        let m = nfa("0 1 2/a/0,a,0/0/2");
        let canonic = m.to_canonic_form();
        assert_eq!(canonic.encode(), "0/a/0,a,0/0/");
        assert!(canonic.accepting().is_empty());
    }

    #[test]
    fn canonic_form_is_stable_under_renaming() {
        let m1: Dfa = "0 1 2/a b/0,a,1;0,b,2;1,a,2;1,b,0;2,a,2;2,b,2/0/1"
            .parse()
            .unwrap();
        let m2: Dfa = "10 11 12/a b/12,a,10;12,b,11;10,a,11;10,b,12;11,a,11;11,b,11/12/10"
            .parse()
            .unwrap();
        assert_eq!(
            m1.to_canonic_form().encode(),
            m2.to_canonic_form().encode()
        );
    }

    #[test]
    fn canonic_form_breaks_forked_ties_by_id() {
        let left = nfa("0 1 2 3/a b/0,a,1;0,a,2;1,b,3/0/").to_canonic_form();
        let right = nfa("0 1 2 3/a b/0,a,1;0,a,2;2,b,3/0/").to_canonic_form();

        // isomorphic graphs, but the fork on 'a' keeps source id order
        assert_eq!(left.encode(), "0 1 2 3/a b/0,a,1;0,a,2;1,b,3/0/");
        assert_eq!(right.encode(), "0 1 2 3/a b/0,a,1;0,a,2;2,b,3/0/");
    }

    #[test]
    fn canonic_form_of_canonic_form_is_identical() {
        let m = nfa("3 1 2/a b/3,a,1;1,b,2;2,,3/3/2");
        let once = m.to_canonic_form();
        assert_eq!(once.to_canonic_form(), once);
    }

    #[test]
    fn nfa_compute_uses_nondeterminism_and_epsilon() {
        // strings over {a, b} ending in "ab"
        let m = nfa("0 1 2/a b/0,a,0;0,b,0;0,a,1;1,b,2/0/2");
        assert!(m.compute("ab".chars()));
        assert!(m.compute("bbab".chars()));
        assert!(!m.compute("aba".chars()));
        assert!(!m.compute("".chars()));

        let with_epsilon = nfa("0 1/a/0,,1/0/1");
        assert!(with_epsilon.compute("".chars()));
        assert!(!with_epsilon.compute("a".chars()));
    }
}
