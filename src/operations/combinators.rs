use tracing::{trace, warn};

use crate::{Automaton, Namespace, StateId, Symbol, Transition};

/// Moves every state of `automaton` into the reserved namespace, starting at `start`.
/// Returns the copy together with the next free counter.
fn isolated(automaton: &Automaton, start: usize) -> (Automaton, usize) {
    if automaton.initial_state().is_none() {
        warn!("combining an automaton without initial state, it accepts nothing");
    }
    let mut copy = automaton.clone();
    let next = copy.rename_states(Namespace::Reserved, start);
    (copy, next)
}

fn absorb(into: &mut Automaton, other: &Automaton) {
    for q in other.states() {
        into.insert_state(q.clone());
    }
    for t in other.transitions() {
        into.insert_transition(t.clone());
    }
}

fn epsilon(from: &StateId, to: &StateId) -> Transition {
    Transition::new(from, to, Symbol::epsilon())
}

impl Automaton {
    /// Builds an automaton accepting the words accepted by `self` or by `other`. A fresh
    /// initial state `0` branches into both operands with epsilon transitions.
    pub fn union(&self, other: &Automaton) -> Automaton {
        let (left, next) = isolated(self, 1);
        let (right, _) = isolated(other, next);

        let initial = StateId::from(0);
        let mut united = Automaton::empty();
        united.replace_initial_state(Some(initial.clone()));
        absorb(&mut united, &left);
        absorb(&mut united, &right);
        for operand in [&left, &right] {
            if let Some(q) = operand.initial_state() {
                united.insert_transition(epsilon(&initial, q));
            }
            for q in operand.accepting_states() {
                united.insert_accepting(q.clone());
            }
        }

        united.rename_states(Namespace::Plain, 0);
        trace!("union has {} states", united.size());
        united
    }

    /// Builds an automaton accepting every word `uv` such that `self` accepts `u` and
    /// `other` accepts `v`. The accepting states of `self` are linked to the initial state
    /// of `other` and lose their accepting status.
    pub fn concatenate(&self, other: &Automaton) -> Automaton {
        let (left, next) = isolated(self, 0);
        let (right, _) = isolated(other, next);

        let mut concatenated = Automaton::empty();
        concatenated.replace_initial_state(left.initial_state().cloned());
        absorb(&mut concatenated, &left);
        absorb(&mut concatenated, &right);
        if let Some(target) = right.initial_state() {
            for q in left.accepting_states() {
                concatenated.insert_transition(epsilon(q, target));
            }
        }
        for q in right.accepting_states() {
            concatenated.insert_accepting(q.clone());
        }

        concatenated.rename_states(Namespace::Plain, 0);
        trace!("concatenation has {} states", concatenated.size());
        concatenated
    }

    /// Builds an automaton accepting all concatenations of zero or more words accepted
    /// by `self`. Every accepting state loops back to the old initial state, and a new
    /// accepting initial state is placed in front so that the empty word is accepted.
    pub fn kleene_closure(&self) -> Automaton {
        let (mut closure, _) = isolated(self, 1);

        let old_initial = closure.initial_state().cloned();
        if let Some(target) = &old_initial {
            let back_edges: Vec<Transition> = closure
                .accepting_states()
                .map(|q| epsilon(q, target))
                .collect();
            for t in back_edges {
                closure.insert_transition(t);
            }
        }

        let initial = StateId::from(0);
        closure.replace_initial_state(Some(initial.clone()));
        closure.insert_accepting(initial.clone());
        if let Some(target) = &old_initial {
            closure.insert_transition(epsilon(&initial, target));
        }

        closure.rename_states(Namespace::Plain, 0);
        trace!("kleene closure has {} states", closure.size());
        closure
    }
}
