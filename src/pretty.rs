//! Set-notation rendering for human inspection.
//!
//! ```text
//! K = {0, 1}
//! Σ = {a, b}
//! Δ = {(0, ε, 1), (0, a, 0)}
//! s = 0
//! A = {1}
//! ```
//!
//! Deterministic machines name their relation `δ` instead of `Δ`. The output
//! is for display only and cannot be parsed back.

use crate::core::StateSet;
use crate::machine::Machine;
use crate::relation::Relation;
use std::fmt;
use std::io;

/// Display adapter returned by [`Machine::pretty`].
pub struct Pretty<'a, R: Relation> {
    machine: &'a Machine<R>,
}

fn braced<I, T>(items: I) -> String
where
    I: IntoIterator<Item = T>,
    T: fmt::Display,
{
    let inner = items
        .into_iter()
        .map(|item| item.to_string())
        .collect::<Vec<_>>()
        .join(", ");
    format!("{{{inner}}}")
}

fn state_set(states: &StateSet) -> String {
    braced(states.iter())
}

impl<R: Relation> fmt::Display for Pretty<'_, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let m = self.machine;
        writeln!(f, "K = {}", state_set(m.states()))?;
        writeln!(f, "Σ = {}", braced(m.alphabet().iter()))?;
        writeln!(f, "{} = {}", R::NOTATION, braced(m.transitions().iter()))?;
        writeln!(f, "s = {}", m.initial())?;
        writeln!(f, "A = {}", state_set(m.accepting()))
    }
}

impl<R: Relation> Machine<R> {
    /// A `Display` view in set notation.
    pub fn pretty(&self) -> Pretty<'_, R> {
        Pretty { machine: self }
    }

    /// Write the set-notation description to `out`.
    pub fn pretty_print<W: io::Write>(&self, out: &mut W) -> io::Result<()> {
        write!(out, "{}", self.pretty())
    }
}
