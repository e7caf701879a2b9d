//! fsmkit: finite state automata with epsilon transitions
//!
//! Machines are immutable values. Every transformation (pruning, subset
//! construction, canonical relabeling) is a pure function returning a new
//! machine, and every constructor validates the machine's invariants before
//! handing one out.
//!
//! # Core Concepts
//!
//! - **Nfa**: nondeterministic machine; transitions may fork or consume `Epsilon`
//! - **Dfa**: deterministic machine; at most one move per state and character
//! - **Encoding**: a one-line text form, `states/alphabet/transitions/initial/accepting`
//! - **Canonical form**: ids relabeled in discovery order, so machines that
//!   differ only in naming encode identically
//!
//! # Example
//!
//! ```rust
//! use fsmkit::{Dfa, Nfa};
//!
//! let nfa: Nfa = "0 1 2 3/a b/2,a,0;0,,1;1,a,1;1,a,2;1,b,2;2,a,2;2,b,3;3,b,1/0/0"
//!     .parse()
//!     .unwrap();
//! let dfa: Dfa = nfa.to_dfa();
//!
//! assert!(dfa.is_complete());
//! assert_eq!(nfa.compute("ab".chars()), dfa.compute("ab".chars()));
//! println!("{}", dfa.to_canonic_form().pretty());
//! ```

pub mod builder;
pub mod config;
pub mod core;
pub mod encoding;
pub mod machine;
pub mod pretty;
pub mod relation;
pub mod snapshot;

// Re-export commonly used types
pub use builder::{BuildError, MachineBuilder};
pub use config::{ConversionConfig, ConversionConfigBuilder};
pub use core::{Alphabet, State, StateSet, Symbol, Transition};
pub use machine::{Dfa, Machine, MachineError, Nfa, Outcome, Trace};
pub use relation::{MachineKind, Relation};
pub use snapshot::{Snapshot, SnapshotError};
