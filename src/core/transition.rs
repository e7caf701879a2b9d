//! Transition triples.

use super::state::State;
use super::symbol::Symbol;
use crate::machine::MachineError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// An immutable `(from, symbol, to)` triple.
///
/// Equality and ordering are structural over all three fields, in that order.
///
/// # Example
///
/// ```rust
/// use fsmkit::core::{State, Symbol, Transition};
///
/// let t = Transition::parse(" 0 , , 1 ").unwrap();
/// assert_eq!(t, Transition::new(State::new(0), Symbol::Epsilon, State::new(1)));
/// assert_eq!(t.encode(), "0,,1");
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Debug, Serialize, Deserialize)]
pub struct Transition {
    /// The state being transitioned from
    pub from: State,
    /// The symbol consumed, or `Epsilon`
    pub symbol: Symbol,
    /// The state being transitioned to
    pub to: State,
}

impl Transition {
    pub fn new(from: State, symbol: Symbol, to: State) -> Self {
        Self { from, symbol, to }
    }

    /// Parse `from,symbol,to`; an empty symbol is `Epsilon`.
    pub fn parse(text: &str) -> Result<Self, MachineError> {
        let fields: Vec<&str> = text.split(',').collect();
        let [from, symbol, to] = fields.as_slice() else {
            return Err(MachineError::Format(format!(
                "transition '{}' must have the form from,symbol,to",
                text.trim()
            )));
        };

        Ok(Self {
            from: State::parse(from)?,
            symbol: Symbol::parse(symbol)?,
            to: State::parse(to)?,
        })
    }

    pub fn encode(&self) -> String {
        format!("{},{},{}", self.from, self.symbol.encode(), self.to)
    }
}

impl FromStr for Transition {
    type Err = MachineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for Transition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.from, self.symbol, self.to)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_reads_character_transition() {
        let t = Transition::parse("2,a,5").unwrap();
        assert_eq!(t.from, State::new(2));
        assert_eq!(t.symbol, Symbol::Char('a'));
        assert_eq!(t.to, State::new(5));
    }

    #[test]
    fn parse_rejects_wrong_arity() {
        assert!(matches!(
            Transition::parse("0,a"),
            Err(MachineError::Format(_))
        ));
        assert!(matches!(
            Transition::parse("0,a,1,2"),
            Err(MachineError::Format(_))
        ));
    }

    #[test]
    fn parse_rejects_bad_fields() {
        assert!(Transition::parse("x,a,1").is_err());
        assert!(Transition::parse("0,ab,1").is_err());
    }

    #[test]
    fn transitions_differing_only_by_epsilon_are_distinct() {
        let eps = Transition::new(State::new(0), Symbol::Epsilon, State::new(1));
        let a = Transition::new(State::new(0), Symbol::Char('a'), State::new(1));
        assert_ne!(eps, a);
        assert!(eps < a);
    }

    #[test]
    fn display_uses_tuple_notation() {
        let t = Transition::new(State::new(0), Symbol::Epsilon, State::new(1));
        assert_eq!(t.to_string(), "(0, ε, 1)");
    }
}
