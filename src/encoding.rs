//! Text encoding of whole machines.
//!
//! ```text
//! <states> / <alphabet> / <transitions> / <initial> / <accepting>
//! ```
//!
//! - `<states>`: state ids separated by spaces
//! - `<alphabet>`: single characters separated by spaces
//! - `<transitions>`: `from,symbol,to` tuples separated by `;`, where an
//!   empty symbol is `Epsilon`
//! - `<initial>`: one state id
//! - `<accepting>`: state ids separated by spaces; may be empty or absent
//!
//! Whitespace around separators is ignored. `encode` produces the same
//! grammar with every part in a fixed order, so equal machines encode to equal
//! strings.

use crate::core::{encode_state_set, parse_state_set, Alphabet, State};
use crate::machine::{Machine, MachineError};
use crate::relation::{Relation, TransitionRelation};
use std::fmt;
use std::str::FromStr;

const FIELD_SEPARATOR: char = '/';

impl<R: Relation> Machine<R> {
    /// Decode a machine from its text encoding.
    ///
    /// # Example
    ///
    /// ```rust
    /// use fsmkit::machine::Dfa;
    ///
    /// let dfa = Dfa::parse("0 1/a b/0 , a , 0; 0,b, 1 ;1, a, 0 ; 1, b, 1/0/ 1").unwrap();
    /// assert_eq!(dfa.encode(), "0 1/a b/0,a,0;0,b,1;1,a,0;1,b,1/0/1");
    /// ```
    pub fn parse(text: &str) -> Result<Self, MachineError> {
        let fields: Vec<&str> = text.split(FIELD_SEPARATOR).map(str::trim).collect();

        let (states, alphabet, transitions, initial, accepting) = match fields.as_slice() {
            [states, alphabet, transitions, initial] => {
                (*states, *alphabet, *transitions, *initial, "")
            }
            [states, alphabet, transitions, initial, accepting] => {
                (*states, *alphabet, *transitions, *initial, *accepting)
            }
            _ => {
                return Err(MachineError::Format(format!(
                    "expected 4 or 5 '/'-separated fields, found {}",
                    fields.len()
                )))
            }
        };

        let relation = TransitionRelation::parse(transitions)?;

        Self::new(
            parse_state_set(states)?,
            Alphabet::parse(alphabet)?,
            relation.iter().copied(),
            State::parse(initial)?,
            parse_state_set(accepting)?,
        )
    }

    /// Encode as `<states>/<alphabet>/<transitions>/<initial>/<accepting>`.
    pub fn encode(&self) -> String {
        format!(
            "{}/{}/{}/{}/{}",
            encode_state_set(self.states()),
            self.alphabet().encode(),
            self.transitions().encode(),
            self.initial().encode(),
            encode_state_set(self.accepting()),
        )
    }
}

impl<R: Relation> FromStr for Machine<R> {
    type Err = MachineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl<R: Relation> fmt::Display for Machine<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.encode())
    }
}

#[cfg(test)]
mod tests {
    use crate::machine::{Dfa, MachineError, Nfa};

    const TWO_STATE: &str = "0 1/a b/0,a,0;0,b,1;1,a,0;1,b,1/0/1";

    #[test]
    fn parse_then_encode_round_trips() {
        let dfa: Dfa = TWO_STATE.parse().unwrap();
        assert_eq!(dfa.encode(), TWO_STATE);
        assert_eq!(dfa.to_string(), TWO_STATE);
    }

    #[test]
    fn encode_normalizes_order_and_whitespace() {
        let nfa: Nfa = " 2 0 1 / b a / 1,b,2 ; 0,,1 ; 0 , a , 0 / 0 / 2 1 ".parse().unwrap();
        assert_eq!(nfa.encode(), "0 1 2/b a/0,,1;0,a,0;1,b,2/0/1 2");
    }

    #[test]
    fn accepting_field_may_be_absent_or_empty() {
        let absent: Nfa = "0/a/0,a,0/0".parse().unwrap();
        let empty: Nfa = "0/a/0,a,0/0/".parse().unwrap();
        assert!(absent.accepting().is_empty());
        assert_eq!(absent, empty);
        assert_eq!(absent.encode(), "0/a/0,a,0/0/");
    }

    #[test]
    fn wrong_field_count_is_format_error() {
        assert!(matches!(
            "0 1/a/0,a,1".parse::<Nfa>(),
            Err(MachineError::Format(_))
        ));
        assert!(matches!(
            "0/a/0,a,0/0/0/0".parse::<Nfa>(),
            Err(MachineError::Format(_))
        ));
    }

    #[test]
    fn bad_tokens_are_format_errors() {
        assert!(matches!(
            "0 x/a/0,a,0/0/".parse::<Nfa>(),
            Err(MachineError::Format(_))
        ));
        assert!(matches!(
            "0/a/0,a/0/".parse::<Nfa>(),
            Err(MachineError::Format(_))
        ));
        assert!(matches!(
            "0/a/0,a,0//".parse::<Nfa>(),
            Err(MachineError::Format(_))
        ));
    }

    #[test]
    fn semantic_violations_are_reported() {
        assert!(matches!(
            "0 1/a/0,b,1/0/".parse::<Nfa>(),
            Err(MachineError::InvalidTransition { .. })
        ));
        assert!(matches!(
            "0 1/a/0,a,2/0/".parse::<Nfa>(),
            Err(MachineError::InvalidTransition { .. })
        ));
        assert!(matches!(
            "0 1/a/0,,1/0/".parse::<Dfa>(),
            Err(MachineError::NotDeterministic(_))
        ));
        assert!(matches!(
            "0 1/a/0,a,1/3/".parse::<Nfa>(),
            Err(MachineError::UnknownInitialState(_))
        ));
    }

    #[test]
    fn nfa_encoding_keeps_epsilon_as_empty_symbol() {
        let encoding = "0 1 2 3/a b/0,,1;1,a,1;1,a,2;1,b,2;2,a,0;2,a,2;2,b,3;3,b,1/0/0";
        let nfa: Nfa = encoding.parse().unwrap();
        assert_eq!(nfa.encode(), encoding);
    }
}
