//! Primitive automaton types.
//!
//! This module contains the value types every machine is built from:
//! - `Symbol` and `Alphabet` for input characters and the `Epsilon` marker
//! - `State` and `StateSet` for state identity
//! - `Transition` for `(from, symbol, to)` triples
//!
//! All types are immutable values with structural equality.

mod state;
mod symbol;
mod transition;

pub use state::{encode_state_set, parse_state_set, State, StateSet};
pub use symbol::{Alphabet, Symbol};
pub use transition::Transition;
