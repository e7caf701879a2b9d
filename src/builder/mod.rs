//! Builder API for ergonomic machine construction.
//!
//! Machines can be decoded from text or assembled from components. This
//! module provides a fluent builder for the latter, validating every
//! invariant when the machine is built.

pub mod error;
pub mod machine;

pub use error::BuildError;
pub use machine::MachineBuilder;

use crate::machine::{Dfa, MachineError};

/// Build a DFA that accepts exactly `word` over the characters it contains.
///
/// States are numbered `0..=len`; state `len` accepts. Fails when `word` has
/// too many characters for `u32` state ids, or contains a character the
/// alphabet rejects.
///
/// # Example
///
/// ```
/// use fsmkit::builder::literal;
///
/// let dfa = literal("abc").unwrap();
/// assert!(dfa.compute("abc".chars()));
/// assert!(!dfa.compute("ab".chars()));
/// ```
pub fn literal(word: &str) -> Result<Dfa, BuildError> {
    let chars: Vec<char> = word.chars().collect();
    let mut symbols: Vec<char> = Vec::new();
    for &c in &chars {
        if !symbols.contains(&c) {
            symbols.push(c);
        }
    }

    let len = u32::try_from(chars.len()).map_err(|_| {
        MachineError::Format(format!(
            "literal of {} characters exceeds the state id range",
            chars.len()
        ))
    })?;

    let mut builder = MachineBuilder::new().states(0..=len).initial(0).accepting(len);
    for c in symbols {
        builder = builder.symbol(c);
    }
    for (i, &c) in (0..len).zip(chars.iter()) {
        builder = builder.transition(i, c, i + 1);
    }

    builder.build_dfa()
}
