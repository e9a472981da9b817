use tracing::trace;

use crate::{math::Set, Automaton};

impl Automaton {
    /// Returns true if the automaton is deterministic, i.e. it has no epsilon transitions,
    /// every transition consumes exactly one character and no two transitions leaving the
    /// same state carry the same character.
    pub fn is_deterministic(&self) -> bool {
        let mut seen = Set::default();
        for t in self.transitions() {
            let Some(c) = t.symbol().as_char() else {
                trace!("transition {t:?} does not consume exactly one character");
                return false;
            };
            if !seen.insert((t.source(), c)) {
                trace!("found a second transition from {} on {c:?}", t.source());
                return false;
            }
        }
        true
    }

    /// Returns true if the automaton is deterministic and every state has an outgoing
    /// transition for every symbol of the alphabet.
    pub fn is_complete(&self) -> bool {
        self.is_deterministic()
            && self.transitions().count() == self.size() * self.alphabet().len()
    }
}

#[cfg(test)]
mod tests {
    use crate::prelude::*;

    #[test_log::test]
    fn determinism() {
        let mut a = Automaton::new(0, [1]).unwrap();
        a.add_transition(0, 1, 'a').unwrap();
        a.add_transition(1, 0, 'b').unwrap();
        assert!(a.is_deterministic());
        assert!(!a.is_complete());

        a.add_transition(0, 0, 'b').unwrap();
        a.add_transition(1, 1, 'a').unwrap();
        assert!(a.is_complete());

        let mut b = a.clone();
        b.add_transition(0, 0, 'a').unwrap();
        assert!(!b.is_deterministic());

        let mut c = a.clone();
        c.add_transition(0, 1, Symbol::epsilon()).unwrap();
        assert!(!c.is_deterministic());

        let mut d = a;
        d.add_transition(0, 1, "ab").unwrap();
        assert!(!d.is_deterministic());
    }
}
