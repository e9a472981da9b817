use std::fmt::{Debug, Display};

use crate::reserved::{is_reserved_name, RENAME_PREFIX};

#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
enum Repr {
    Index(usize),
    Name(String),
    Reserved(usize),
}

/// Identifies a state within one [`crate::Automaton`]. Identifiers are opaque and totally
/// ordered: plain indices come first (ordered numerically), then names (ordered
/// lexicographically) and finally identifiers from the reserved rename namespace.
///
/// A `StateId` is created from a `usize` or from a string. Identifiers of the reserved
/// namespace can only be produced by [`Namespace::Reserved`] and never by a caller.
///
/// Names are displayed quoted, so the index `1` and the name `"1"` never print alike.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct StateId(Repr);

impl StateId {
    /// Returns true if `self` belongs to the reserved rename namespace, this includes
    /// names that merely look like one, i.e. names starting with [`RENAME_PREFIX`].
    pub fn is_reserved(&self) -> bool {
        match &self.0 {
            Repr::Reserved(_) => true,
            Repr::Name(name) => is_reserved_name(name),
            Repr::Index(_) => false,
        }
    }

    /// Returns the plain index if `self` was created from a `usize`.
    pub fn index(&self) -> Option<usize> {
        match self.0 {
            Repr::Index(i) => Some(i),
            _ => None,
        }
    }
}

impl From<usize> for StateId {
    fn from(value: usize) -> Self {
        Self(Repr::Index(value))
    }
}

impl From<&str> for StateId {
    fn from(value: &str) -> Self {
        Self(Repr::Name(value.to_string()))
    }
}

impl From<String> for StateId {
    fn from(value: String) -> Self {
        Self(Repr::Name(value))
    }
}

impl From<&StateId> for StateId {
    fn from(value: &StateId) -> Self {
        value.clone()
    }
}

impl Display for StateId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.0 {
            Repr::Index(i) => write!(f, "{i}"),
            Repr::Name(name) => write!(f, "{name:?}"),
            Repr::Reserved(i) => write!(f, "{RENAME_PREFIX}{i}"),
        }
    }
}

impl Debug for StateId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        Display::fmt(self, f)
    }
}

impl PartialEq<usize> for StateId {
    fn eq(&self, other: &usize) -> bool {
        self.index() == Some(*other)
    }
}

/// The kind of identifiers issued by [`crate::Automaton::rename_states`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Namespace {
    /// Plain sequential indices `0, 1, 2, ...`.
    Plain,
    /// Identifiers prefixed with [`RENAME_PREFIX`], which can never collide with a
    /// state that a caller created.
    Reserved,
}

impl Namespace {
    /// Returns the `counter`-th identifier of this namespace.
    pub fn state(self, counter: usize) -> StateId {
        match self {
            Namespace::Plain => StateId(Repr::Index(counter)),
            Namespace::Reserved => StateId(Repr::Reserved(counter)),
        }
    }
}
