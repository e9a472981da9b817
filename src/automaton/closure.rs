use std::collections::VecDeque;

use crate::{
    math::{Map, OrderedSet},
    Automaton, StateId, Symbol,
};

/// Maps every state to the targets of its outgoing epsilon transitions.
pub(crate) type EpsilonSuccessors<'a> = Map<&'a StateId, Vec<&'a StateId>>;

/// Collects everything reachable from `origin` in `successors`, including `origin` itself.
/// The visited set makes this terminate on epsilon cycles and ensures that every state is
/// expanded at most once.
fn closure_in(successors: &EpsilonSuccessors<'_>, origin: &StateId) -> OrderedSet<StateId> {
    let mut closure = OrderedSet::from([origin.clone()]);
    let mut queue = VecDeque::from([origin]);

    while let Some(q) = queue.pop_front() {
        for &p in successors.get(q).into_iter().flatten() {
            if closure.insert(p.clone()) {
                queue.push_back(p);
            }
        }
    }
    closure
}

impl Automaton {
    /// Returns the distinct symbols used on transitions, epsilon excluded.
    pub fn alphabet(&self) -> OrderedSet<Symbol> {
        self.transitions()
            .filter(|t| !t.is_epsilon())
            .map(|t| t.symbol().clone())
            .collect()
    }

    /// Computes the set of states that can be reached from `state` using only epsilon
    /// transitions. This always contains `state`.
    pub fn epsilon_closure(&self, state: &StateId) -> OrderedSet<StateId> {
        closure_in(&self.epsilon_successors(), state)
    }

    /// Computes the epsilon closure of every state at once.
    pub(crate) fn epsilon_closures(&self) -> Map<StateId, OrderedSet<StateId>> {
        let successors = self.epsilon_successors();
        self.states()
            .map(|q| (q.clone(), closure_in(&successors, q)))
            .collect()
    }

    fn epsilon_successors(&self) -> EpsilonSuccessors<'_> {
        let mut successors = EpsilonSuccessors::default();
        for t in self.transitions().filter(|t| t.is_epsilon()) {
            successors.entry(t.source()).or_default().push(t.target());
        }
        successors
    }
}
