//! Input symbols and alphabets.
//!
//! A `Symbol` is either a real input character or the reserved `Epsilon`
//! marker. `Epsilon` is a dedicated variant so it can never collide with a
//! character of the alphabet.

use crate::machine::MachineError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A transition label: a character of the alphabet or the empty string.
///
/// The derived ordering places `Epsilon` before every character, which is the
/// order used when encoding transitions.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Debug, Serialize, Deserialize)]
pub enum Symbol {
    /// Consume nothing.
    Epsilon,
    /// Consume one character.
    Char(char),
}

impl Symbol {
    /// Check if this is the empty-string symbol.
    pub fn is_epsilon(&self) -> bool {
        matches!(self, Self::Epsilon)
    }

    /// The character carried by this symbol, if any.
    pub fn as_char(&self) -> Option<char> {
        match self {
            Self::Epsilon => None,
            Self::Char(c) => Some(*c),
        }
    }

    /// Encode as it appears inside a transition tuple (empty for `Epsilon`).
    pub fn encode(&self) -> String {
        match self {
            Self::Epsilon => String::new(),
            Self::Char(c) => c.to_string(),
        }
    }

    /// Parse a transition symbol token. An empty token is `Epsilon`.
    pub fn parse(token: &str) -> Result<Self, MachineError> {
        let token = token.trim();
        let mut chars = token.chars();
        match (chars.next(), chars.next()) {
            (None, _) => Ok(Self::Epsilon),
            (Some(c), None) => Ok(Self::Char(c)),
            _ => Err(MachineError::Format(format!(
                "symbol '{token}' must be a single character"
            ))),
        }
    }
}

impl From<char> for Symbol {
    fn from(c: char) -> Self {
        Self::Char(c)
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Epsilon => write!(f, "ε"),
            Self::Char(c) => write!(f, "{c}"),
        }
    }
}

/// Characters the text encoding uses as separators.
const RESERVED: [char; 3] = ['/', ',', ';'];

/// An ordered set of input characters.
///
/// Iteration follows declaration order (the order symbols were parsed or
/// supplied in). `Epsilon` is never a member.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<char>", into = "Vec<char>")]
pub struct Alphabet {
    symbols: Vec<char>,
}

impl Alphabet {
    /// Build an alphabet from characters in declaration order.
    ///
    /// Repeated characters are rejected rather than merged, as are
    /// whitespace and the separators `/`, `,` and `;`, which the text
    /// encoding could not represent.
    pub fn new<I>(symbols: I) -> Result<Self, MachineError>
    where
        I: IntoIterator<Item = char>,
    {
        let mut alphabet = Self::default();
        for c in symbols {
            if c.is_whitespace() || RESERVED.contains(&c) {
                return Err(MachineError::Format(format!(
                    "symbol {c:?} is reserved by the text encoding"
                )));
            }
            if alphabet.contains(c) {
                return Err(MachineError::Format(format!(
                    "symbol '{c}' declared more than once"
                )));
            }
            alphabet.symbols.push(c);
        }
        Ok(alphabet)
    }

    /// Parse a whitespace separated list of single-character tokens.
    ///
    /// # Example
    ///
    /// ```rust
    /// use fsmkit::core::Alphabet;
    ///
    /// let alphabet = Alphabet::parse("a b c").unwrap();
    /// assert_eq!(alphabet.len(), 3);
    /// assert_eq!(alphabet.encode(), "a b c");
    /// assert!(Alphabet::parse("ab").is_err());
    /// ```
    pub fn parse(text: &str) -> Result<Self, MachineError> {
        let mut symbols = Vec::new();
        for token in text.split_whitespace() {
            let mut chars = token.chars();
            match (chars.next(), chars.next()) {
                (Some(c), None) => symbols.push(c),
                _ => {
                    return Err(MachineError::Format(format!(
                        "alphabet token '{token}' must be a single character"
                    )))
                }
            }
        }
        Self::new(symbols)
    }

    /// Encode as space separated characters in declaration order.
    pub fn encode(&self) -> String {
        self.symbols
            .iter()
            .map(char::to_string)
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Check membership of a character.
    pub fn contains(&self, c: char) -> bool {
        self.symbols.contains(&c)
    }

    /// Check if a transition symbol is allowed: `Epsilon` or a member.
    pub fn admits(&self, symbol: Symbol) -> bool {
        match symbol {
            Symbol::Epsilon => true,
            Symbol::Char(c) => self.contains(c),
        }
    }

    /// Characters in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = char> + '_ {
        self.symbols.iter().copied()
    }

    /// `Epsilon` followed by every character in declaration order.
    ///
    /// This is the fixed enumeration used by reachability and canonical form.
    pub fn with_epsilon(&self) -> impl Iterator<Item = Symbol> + '_ {
        std::iter::once(Symbol::Epsilon).chain(self.iter().map(Symbol::Char))
    }

    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }
}

impl TryFrom<Vec<char>> for Alphabet {
    type Error = MachineError;

    fn try_from(symbols: Vec<char>) -> Result<Self, Self::Error> {
        Self::new(symbols)
    }
}

impl From<Alphabet> for Vec<char> {
    fn from(alphabet: Alphabet) -> Self {
        alphabet.symbols
    }
}

impl FromStr for Alphabet {
    type Err = MachineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}
