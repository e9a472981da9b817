use itertools::Itertools;
use tracing::{debug, trace, warn};

use crate::{
    math::{Bijection, Map, OrderedSet},
    Automaton, Namespace, StateId, Transition,
};

/// A state of the subset automaton. The members are kept ordered, so two subsets with the
/// same members are equal regardless of the order in which they were discovered.
type Subset = OrderedSet<StateId>;

fn single_characters(nfa: &Automaton) -> OrderedSet<char> {
    nfa.alphabet().iter().filter_map(|sym| sym.as_char()).collect()
}

/// Runs the subset construction on `nfa`, which must only contain epsilon and single
/// character transitions. The state with index `i` in the result corresponds to the `i`-th
/// discovered subset, the subset containing the initial state is discovered first.
fn subset_construction(nfa: &Automaton) -> Automaton {
    let Some(initial) = nfa.initial_state() else {
        warn!("determinizing an automaton without initial state, it accepts nothing");
        return Automaton::empty();
    };

    let alphabet = single_characters(nfa);
    let closures = nfa.epsilon_closures();

    let mut successors: Map<(&StateId, char), Vec<&StateId>> = Map::default();
    for t in nfa.transitions() {
        if let Some(c) = t.symbol().as_char() {
            successors.entry((t.source(), c)).or_default().push(t.target());
        }
    }

    // canonical subset <-> index of the state in the result
    let mut identities: Bijection<Subset, usize> = Bijection::new();
    let mut worklist: Vec<Subset> = vec![closures[initial].clone()];
    identities.insert(worklist[0].clone(), 0);

    let mut dfa = Automaton::empty();
    dfa.replace_initial_state(Some(Namespace::Plain.state(0)));

    let mut active = 0;
    while active < worklist.len() {
        let source = Namespace::Plain.state(active);
        if worklist[active].iter().any(|q| nfa.is_accepting(q)) {
            dfa.insert_accepting(source.clone());
        }

        for &c in &alphabet {
            let successor: Subset = worklist[active]
                .iter()
                .flat_map(|q| successors.get(&(q, c)).into_iter().flatten())
                .flat_map(|&p| closures[p].iter().cloned())
                .collect();
            if successor.is_empty() {
                continue;
            }

            let target = match identities.get_by_left(&successor) {
                Some(&idx) => idx,
                None => {
                    let idx = worklist.len();
                    trace!("discovered subset {idx} = {{{}}}", successor.iter().join(", "));
                    identities.insert(successor.clone(), idx);
                    worklist.push(successor);
                    idx
                }
            };
            dfa.insert_transition(Transition::new(
                source.clone(),
                Namespace::Plain.state(target),
                c,
            ));
        }
        active += 1;
    }
    dfa
}

impl Automaton {
    /// Computes a deterministic and complete automaton that accepts the same words as
    /// `self`. The input may contain epsilon transitions as well as transitions on
    /// symbols consisting of multiple characters.
    ///
    /// The steps are
    /// 1. split multi-character transitions into chains of single character ones,
    /// 2. renumber all states,
    /// 3. compute the alphabet and the epsilon closure of every state,
    /// 4. run the subset construction starting from the closure of the initial state,
    /// 5. add a non-accepting sink for all transitions that are still missing.
    ///
    /// States of the result are numbered `0, 1, 2, ...` with `0` being initial. An
    /// automaton without initial state accepts nothing, the result then consists of a
    /// single sink.
    ///
    /// ```
    /// use regular_automata::prelude::*;
    ///
    /// let mut nfa = Automaton::new(0, [1]).unwrap();
    /// nfa.add_transition(0, 1, "ab").unwrap();
    /// nfa.add_transition(0, 1, "ac").unwrap();
    ///
    /// let dfa = nfa.determinize();
    /// assert!(dfa.is_complete());
    /// assert!(dfa.matches("ab") && dfa.matches("ac"));
    /// ```
    pub fn determinize(&self) -> Automaton {
        let mut nfa = self.clone();
        let next = nfa.rename_states(Namespace::Reserved, 0);
        nfa.split_long_symbols(next);
        nfa.rename_states(Namespace::Plain, 0);

        let mut dfa = subset_construction(&nfa);
        dfa.complete_with_sink(&single_characters(&nfa));

        debug!(
            "determinized automaton with {} states into one with {} states",
            self.size(),
            dfa.size()
        );
        dfa
    }
}
