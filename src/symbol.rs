use std::fmt::{Debug, Display};

use crate::{reserved::EPSILON_MARKER, AutomatonError};

/// The label of a transition: either the empty word (epsilon) or a sequence of one or
/// more characters. Symbols made of more than one character are decomposed into chains of
/// single character transitions before determinization, see
/// [`crate::Automaton::split_symbols`].
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Symbol {
    /// Consumes no input.
    Epsilon,
    /// Consumes the contained characters, in order.
    Word(String),
}

impl Symbol {
    /// The epsilon symbol.
    pub fn epsilon() -> Self {
        Symbol::Epsilon
    }

    /// Returns true for the epsilon symbol.
    pub fn is_epsilon(&self) -> bool {
        matches!(self, Symbol::Epsilon)
    }

    /// Number of characters consumed, which is zero for epsilon.
    pub fn len(&self) -> usize {
        match self {
            Symbol::Epsilon => 0,
            Symbol::Word(w) => w.chars().count(),
        }
    }

    /// Returns true if this is a [`Symbol::Word`] without any characters. Such a symbol
    /// is never accepted on a transition.
    pub fn is_empty(&self) -> bool {
        matches!(self, Symbol::Word(w) if w.is_empty())
    }

    /// Returns the character if `self` consists of exactly one.
    pub fn as_char(&self) -> Option<char> {
        match self {
            Symbol::Word(w) => {
                let mut chars = w.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) => Some(c),
                    _ => None,
                }
            }
            Symbol::Epsilon => None,
        }
    }

    /// Iterates over the characters that are consumed.
    pub fn chars(&self) -> impl Iterator<Item = char> + '_ {
        let word = match self {
            Symbol::Word(w) => w.as_str(),
            Symbol::Epsilon => "",
        };
        word.chars()
    }

    /// Checks that `self` may label a transition.
    pub(crate) fn validate(&self) -> Result<(), AutomatonError> {
        match self {
            Symbol::Epsilon => Ok(()),
            Symbol::Word(w) if w.is_empty() => Err(AutomatonError::EmptySymbol),
            Symbol::Word(w) if w.contains(EPSILON_MARKER) => {
                Err(AutomatonError::ReservedSymbol(w.clone()))
            }
            Symbol::Word(_) => Ok(()),
        }
    }
}

impl From<&str> for Symbol {
    fn from(value: &str) -> Self {
        Symbol::Word(value.to_string())
    }
}

impl From<String> for Symbol {
    fn from(value: String) -> Self {
        Symbol::Word(value)
    }
}

impl From<char> for Symbol {
    fn from(value: char) -> Self {
        Symbol::Word(value.to_string())
    }
}

impl From<&Symbol> for Symbol {
    fn from(value: &Symbol) -> Self {
        value.clone()
    }
}

impl Display for Symbol {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Symbol::Epsilon => write!(f, "{EPSILON_MARKER}"),
            Symbol::Word(w) => write!(f, "{w}"),
        }
    }
}

impl Debug for Symbol {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Symbol::Epsilon => write!(f, "{EPSILON_MARKER}"),
            Symbol::Word(w) => write!(f, "{w:?}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation() {
        assert_eq!(Symbol::from("").validate(), Err(AutomatonError::EmptySymbol));
        assert_eq!(
            Symbol::from("aεb").validate(),
            Err(AutomatonError::ReservedSymbol("aεb".into()))
        );
        assert!(Symbol::epsilon().validate().is_ok());
        assert!(Symbol::from("ab").validate().is_ok());
    }

    #[test]
    fn characters() {
        assert_eq!(Symbol::from('a').as_char(), Some('a'));
        assert_eq!(Symbol::from("ab").as_char(), None);
        assert_eq!(Symbol::epsilon().as_char(), None);
        assert_eq!(Symbol::from("äb").len(), 2);
        assert_eq!(Symbol::epsilon().len(), 0);
        assert!(Symbol::epsilon() < Symbol::from("a"));
    }
}
