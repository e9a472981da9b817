use tracing::trace;

use crate::{math::Map, Automaton, StateId};

/// The sequence of states visited while reading a word in a deterministic automaton.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Path {
    states: Vec<StateId>,
    accepting: bool,
}

impl Path {
    /// The visited states, starting with the initial state.
    pub fn states(&self) -> &[StateId] {
        &self.states
    }

    /// The state in which the run ended.
    pub fn reached(&self) -> Option<&StateId> {
        self.states.last()
    }

    /// Number of characters that were consumed.
    pub fn len(&self) -> usize {
        self.states.len().saturating_sub(1)
    }

    /// Returns true if not a single character was consumed.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns true if the reached state is accepting.
    pub fn is_accepting(&self) -> bool {
        self.accepting
    }
}

/// Decides membership of words. The automaton is determinized once on creation, after
/// which each word is read in time linear in its length.
#[derive(Clone)]
pub struct Matcher {
    dfa: Automaton,
    successors: Map<(StateId, char), StateId>,
}

impl Matcher {
    /// Creates a matcher for the language of `automaton`.
    pub fn new(automaton: &Automaton) -> Self {
        let dfa = automaton.determinize();
        let successors = dfa
            .transitions()
            .filter_map(|t| {
                t.symbol()
                    .as_char()
                    .map(|c| ((t.source().clone(), c), t.target().clone()))
            })
            .collect();
        Self { dfa, successors }
    }

    /// The deterministic automaton that words are read in.
    pub fn automaton(&self) -> &Automaton {
        &self.dfa
    }

    /// Reads `input` from the initial state. Returns the path through the automaton if the
    /// whole input could be read. If some character is not in the alphabet, the partial
    /// path up to that character is returned as the error.
    pub fn run(&self, input: &str) -> Result<Path, Path> {
        let mut states = Vec::with_capacity(input.len() + 1);
        let Some(mut current) = self.dfa.initial_state() else {
            return Err(Path {
                states,
                accepting: false,
            });
        };
        states.push(current.clone());

        for c in input.chars() {
            match self.successors.get(&(current.clone(), c)) {
                Some(next) => {
                    current = next;
                    states.push(current.clone());
                }
                None => {
                    trace!("character {c:?} is not in the alphabet, rejecting");
                    return Err(Path {
                        states,
                        accepting: false,
                    });
                }
            }
        }

        Ok(Path {
            accepting: self.dfa.is_accepting(current),
            states,
        })
    }

    /// Returns true if `input` is accepted.
    pub fn matches(&self, input: &str) -> bool {
        self.run(input).map(|p| p.is_accepting()).unwrap_or(false)
    }
}

impl Automaton {
    /// Returns true if `input` belongs to the language of `self`. This determinizes `self`
    /// on every call, use a [`Matcher`] to read multiple words.
    pub fn matches(&self, input: &str) -> bool {
        Matcher::new(self).matches(input)
    }
}
