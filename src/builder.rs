use crate::{Automaton, AutomatonError, StateId, Symbol, Transition};

/// Helper struct for the construction of automata. It collects states, transitions and
/// accepting states, which are validated all at once when the automaton is built.
///
/// # Example
///
/// We want to create an automaton with states 0, 1 and 2 that accepts the words `a` and
/// `bc`, where state 0 is initial and state 2 is accepting. This can be done as follows
/// ```
/// use regular_automata::prelude::*;
///
/// let automaton = AutomatonBuilder::default()
///     .with_transitions([(0, "a", 2), (0, "bc", 2)]) // (from, symbol, to)
///     .with_accepting_states([2])
///     .into_automaton(0) // 0 is the initial state
///     .unwrap();
/// assert!(automaton.matches("bc"));
/// assert!(!automaton.matches("b"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct AutomatonBuilder {
    states: Vec<StateId>,
    transitions: Vec<Transition>,
    accepting: Vec<StateId>,
}

impl AutomatonBuilder {
    /// Adds states that need not be touched by any transition.
    pub fn with_states<I, X>(mut self, states: I) -> Self
    where
        I: IntoIterator<Item = X>,
        X: Into<StateId>,
    {
        self.states.extend(states.into_iter().map(Into::into));
        self
    }

    /// Adds transitions given as `(from, symbol, to)` triples.
    pub fn with_transitions<I, X, S, Y>(mut self, transitions: I) -> Self
    where
        I: IntoIterator<Item = (X, S, Y)>,
        X: Into<StateId>,
        S: Into<Symbol>,
        Y: Into<StateId>,
    {
        self.transitions.extend(
            transitions
                .into_iter()
                .map(|(from, symbol, to)| Transition::new(from, to, symbol)),
        );
        self
    }

    /// Marks the given states as accepting, they are created if necessary.
    pub fn with_accepting_states<I, X>(mut self, states: I) -> Self
    where
        I: IntoIterator<Item = X>,
        X: Into<StateId>,
    {
        self.accepting.extend(states.into_iter().map(Into::into));
        self
    }

    /// Builds the automaton with the given initial state. Fails on the first state,
    /// transition or symbol that is rejected by [`Automaton`].
    pub fn into_automaton<X: Into<StateId>>(self, initial: X) -> Result<Automaton, AutomatonError> {
        let mut automaton = Automaton::new(initial, self.accepting)?;
        for q in self.states {
            automaton.add_state(q)?;
        }
        for t in self.transitions {
            automaton.add_transition(t.source(), t.target(), t.symbol())?;
        }
        Ok(automaton)
    }
}

#[cfg(test)]
mod tests {
    use crate::prelude::*;

    #[test_log::test]
    fn building() {
        let a = AutomatonBuilder::default()
            .with_states(["unused"])
            .with_transitions([(0, 'a', 1), (1, 'b', 0)])
            .with_accepting_states([1])
            .into_automaton(0)
            .unwrap();
        assert_eq!(a.size(), 3);
        assert_eq!(a.transitions().count(), 2);
        assert!(a.is_accepting(&1.into()));
        assert_eq!(a.initial_state(), Some(&0.into()));
    }

    #[test_log::test]
    fn building_fails_on_invalid_input() {
        assert_eq!(
            AutomatonBuilder::default()
                .with_transitions([(0, "", 1)])
                .into_automaton(0),
            Err(AutomatonError::EmptySymbol)
        );
        assert_eq!(
            AutomatonBuilder::default()
                .with_states(["$$1"])
                .into_automaton(0),
            Err(AutomatonError::ReservedState("$$1".into()))
        );
    }
}
