//! Transition relations.
//!
//! A machine's transitions live in a relation that supports nondeterministic
//! lookup by `(state, symbol)` and integrity verification against the
//! machine's declared states and alphabet.
//!
//! Two relations are provided:
//! - `TransitionRelation`: any number of destinations, `Epsilon` allowed
//! - `DeterministicRelation`: at most one destination, no `Epsilon`
//!
//! The `Relation` trait is the seam `Machine` is generic over, so the same
//! machine shape serves both kinds of automaton.

mod deterministic;
mod nondeterministic;
pub mod violations;

pub use deterministic::DeterministicRelation;
pub use nondeterministic::TransitionRelation;
pub use violations::{DeterminismViolation, TransitionViolation};

use crate::machine::MachineError;
use serde::{Deserialize, Serialize};
use std::fmt::{self, Debug};

/// Whether a machine may branch.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MachineKind {
    Nondeterministic,
    Deterministic,
}

impl fmt::Display for MachineKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Nondeterministic => f.write_str("NFA"),
            Self::Deterministic => f.write_str("DFA"),
        }
    }
}

/// The kind of transition relation a machine is built on.
pub trait Relation: Clone + PartialEq + Debug {
    /// Name of the relation in set notation.
    const NOTATION: &'static str;

    const KIND: MachineKind;

    /// View as the underlying nondeterministic relation.
    fn relation(&self) -> &TransitionRelation;

    /// Adopt a relation, enforcing this kind's constraints.
    fn try_from_relation(relation: TransitionRelation) -> Result<Self, MachineError>;

    /// Adopt a relation derived from one that already satisfied
    /// `try_from_relation` (a restriction or an injective relabeling).
    #[doc(hidden)]
    fn from_derived(relation: TransitionRelation) -> Self;
}

impl Relation for TransitionRelation {
    const NOTATION: &'static str = "Δ";
    const KIND: MachineKind = MachineKind::Nondeterministic;

    fn relation(&self) -> &TransitionRelation {
        self
    }

    fn try_from_relation(relation: TransitionRelation) -> Result<Self, MachineError> {
        Ok(relation)
    }

    fn from_derived(relation: TransitionRelation) -> Self {
        relation
    }
}

impl Relation for DeterministicRelation {
    const NOTATION: &'static str = "δ";
    const KIND: MachineKind = MachineKind::Deterministic;

    fn relation(&self) -> &TransitionRelation {
        DeterministicRelation::relation(self)
    }

    fn try_from_relation(relation: TransitionRelation) -> Result<Self, MachineError> {
        Ok(DeterministicRelation::new(relation)?)
    }

    fn from_derived(relation: TransitionRelation) -> Self {
        DeterministicRelation::index(relation)
    }
}
