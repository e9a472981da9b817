use bit_set::BitSet;
use itertools::Itertools;
use tracing::trace;

use crate::{
    math::{Map, OrderedSet},
    Automaton, Namespace, Transition,
};

impl Automaton {
    /// Makes a deterministic automaton total over `alphabet`. A fresh non-accepting sink
    /// state is added which loops on every symbol, and every state that lacks a transition
    /// on some symbol is sent to the sink on that symbol. If nothing is missing, no sink is
    /// added. An automaton without initial state gets the sink as initial state.
    ///
    /// The states must be numbered `0, 1, ..., n - 1`, the sink becomes `n`.
    pub(crate) fn complete_with_sink(&mut self, alphabet: &OrderedSet<char>) {
        let position: Map<char, usize> = alphabet
            .iter()
            .enumerate()
            .map(|(i, &c)| (c, i))
            .collect();

        let mut seen = BitSet::with_capacity(alphabet.len());
        let mut missing = vec![];
        for q in self.states().sorted() {
            seen.clear();
            for t in self.transitions_from(q) {
                if let Some(i) = t.symbol().as_char().and_then(|c| position.get(&c)) {
                    seen.insert(*i);
                }
            }
            missing.extend(
                alphabet
                    .iter()
                    .enumerate()
                    .filter(|(i, _)| !seen.contains(*i))
                    .map(|(_, &c)| (q.clone(), c)),
            );
        }

        if missing.is_empty() && self.initial_state().is_some() {
            trace!("automaton is already complete, no sink needed");
            return;
        }

        let sink = Namespace::Plain.state(self.size());
        trace!(
            "adding sink {sink} with {} incoming transitions",
            missing.len()
        );
        self.insert_state(sink.clone());
        if self.initial_state().is_none() {
            self.replace_initial_state(Some(sink.clone()));
        }
        for &c in alphabet {
            self.insert_transition(Transition::new(&sink, &sink, c));
        }
        for (q, c) in missing {
            self.insert_transition(Transition::new(q, &sink, c));
        }
    }
}
