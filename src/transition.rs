use std::fmt::{Debug, Display};

use crate::{StateId, Symbol};

/// An immutable labeled edge from one state to another. Two transitions with the same
/// source, target and symbol are the same transition.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Transition {
    from: StateId,
    to: StateId,
    symbol: Symbol,
}

impl Transition {
    /// Creates a new transition. This does not validate `symbol`, that happens when the
    /// transition is added to an automaton.
    pub fn new<X: Into<StateId>, Y: Into<StateId>, S: Into<Symbol>>(
        from: X,
        to: Y,
        symbol: S,
    ) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
            symbol: symbol.into(),
        }
    }

    /// The state in which the transition originates.
    pub fn source(&self) -> &StateId {
        &self.from
    }

    /// The state that is reached.
    pub fn target(&self) -> &StateId {
        &self.to
    }

    /// The symbol that labels the transition.
    pub fn symbol(&self) -> &Symbol {
        &self.symbol
    }

    /// Returns true if the transition is labeled with epsilon.
    pub fn is_epsilon(&self) -> bool {
        self.symbol.is_epsilon()
    }

    /// Returns true if `q` is the source or the target.
    pub fn touches(&self, q: &StateId) -> bool {
        &self.from == q || &self.to == q
    }

    pub(crate) fn relabeled<F: Fn(&StateId) -> StateId>(&self, f: F) -> Self {
        Self {
            from: f(&self.from),
            to: f(&self.to),
            symbol: self.symbol.clone(),
        }
    }
}

impl Display for Transition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}, {}, {}", self.from, self.to, self.symbol)
    }
}

impl Debug for Transition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {:?}, {})", self.from, self.symbol, self.to)
    }
}
