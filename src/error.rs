use thiserror::Error;

use crate::StateId;

/// Errors raised when a structural operation on an [`crate::Automaton`] violates its
/// contract. None of them is transient, and the automaton is left untouched whenever one
/// is returned.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AutomatonError {
    /// A transition was given the empty sequence as its symbol.
    #[error("transition symbols may not be empty")]
    EmptySymbol,
    /// A symbol contains [`crate::reserved::EPSILON_MARKER`].
    #[error("symbol \"{0}\" contains the reserved epsilon marker")]
    ReservedSymbol(String),
    /// A new state identifier lies in the reserved rename namespace.
    #[error("state {0} lies in the reserved rename namespace")]
    ReservedState(StateId),
    /// The target of a rename is already a state of the automaton.
    #[error("cannot rename to {0}, the state already exists")]
    RenameCollision(StateId),
    /// The state is not part of the automaton.
    #[error("state {0} does not exist")]
    UnknownState(StateId),
}
