use std::collections::VecDeque;

use crate::{math::OrderedSet, Automaton, StateId};

impl Automaton {
    /// Returns the states that can be reached from the initial state along any
    /// transitions, epsilon transitions included. Empty if there is no initial state.
    pub fn reachable_states(&self) -> OrderedSet<StateId> {
        let Some(initial) = self.initial_state() else {
            return OrderedSet::new();
        };
        let mut seen = OrderedSet::from([initial.clone()]);
        let mut queue = VecDeque::from([initial]);
        while let Some(q) = queue.pop_front() {
            for t in self.transitions_from(q) {
                if seen.insert(t.target().clone()) {
                    queue.push_back(t.target());
                }
            }
        }
        seen
    }
}
