use itertools::Itertools;
use tracing::trace;

use crate::{Automaton, Namespace, Transition};

impl Automaton {
    /// Returns an equivalent automaton in which every transition consumes at most one
    /// character. A transition on a symbol of length `n > 1` is replaced by a chain of `n`
    /// single character transitions through `n - 1` fresh states. All states of the result
    /// are numbered `0, 1, 2, ...`.
    ///
    /// ```
    /// use regular_automata::prelude::*;
    ///
    /// let mut a = Automaton::new(1, [2]).unwrap();
    /// a.add_transition(1, 2, "ab").unwrap();
    ///
    /// let split = a.split_symbols();
    /// assert_eq!(split.size(), 3);
    /// assert!(split.transitions().all(|t| t.symbol().len() == 1));
    /// ```
    pub fn split_symbols(&self) -> Automaton {
        let mut split = self.clone();
        let next = split.rename_states(Namespace::Reserved, 0);
        split.split_long_symbols(next);
        split.rename_states(Namespace::Plain, 0);
        split
    }

    /// Splits the long transitions in place. All states must be in the reserved namespace
    /// and use counters below `next`, the fresh states continue from there. Returns the next
    /// unused counter.
    pub(crate) fn split_long_symbols(&mut self, mut next: usize) -> usize {
        let long = self
            .transitions()
            .filter(|t| t.symbol().len() > 1)
            .cloned()
            .sorted()
            .collect_vec();

        for transition in long {
            self.transitions.remove(&transition);
            let chars = transition.symbol().chars().collect_vec();
            trace!(
                "splitting {transition:?} into {} transitions",
                chars.len()
            );

            let mut source = transition.source().clone();
            for (i, c) in chars.iter().enumerate() {
                let target = if i + 1 == chars.len() {
                    transition.target().clone()
                } else {
                    let fresh = Namespace::Reserved.state(next);
                    next += 1;
                    fresh
                };
                self.insert_transition(Transition::new(source, target.clone(), *c));
                source = target;
            }
        }
        next
    }
}
