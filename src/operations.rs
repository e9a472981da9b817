mod combinators;

mod completion;

mod subset;

#[cfg(test)]
mod tests {
    use std::collections::VecDeque;

    use itertools::Itertools;

    use crate::{math::Set, prelude::*};

    /// Decides membership directly on the nondeterministic automaton by exploring
    /// configurations (state, consumed prefix length).
    fn accepted_by_search(automaton: &Automaton, word: &str) -> bool {
        let Some(initial) = automaton.initial_state() else {
            return false;
        };
        let mut seen = Set::default();
        let mut queue = VecDeque::from([(initial.clone(), 0usize)]);
        while let Some((q, pos)) = queue.pop_front() {
            if !seen.insert((q.clone(), pos)) {
                continue;
            }
            if pos == word.len() && automaton.is_accepting(&q) {
                return true;
            }
            for t in automaton.transitions_from(&q) {
                match t.symbol() {
                    Symbol::Epsilon => queue.push_back((t.target().clone(), pos)),
                    Symbol::Word(w) if word[pos..].starts_with(w.as_str()) => {
                        queue.push_back((t.target().clone(), pos + w.len()))
                    }
                    Symbol::Word(_) => {}
                }
            }
        }
        false
    }

    fn words(alphabet: &[char], max_len: usize) -> Vec<String> {
        (0..=max_len)
            .flat_map(|n| {
                itertools::repeat_n(alphabet.iter().copied(), n)
                    .multi_cartesian_product()
                    .map(|w| w.into_iter().collect::<String>())
            })
            .collect()
    }

    fn samples() -> Vec<Automaton> {
        let x = AutomatonBuilder::default()
            .with_transitions([(1, 'a', 2), (1, 'b', 3), (2, 'b', 3)])
            .with_accepting_states([3])
            .into_automaton(1)
            .unwrap();
        let y = AutomatonBuilder::default()
            .with_transitions([(4, 'c', 5), (5, 'd', 6), (5, 'c', 6)])
            .with_accepting_states([4, 6])
            .into_automaton(4)
            .unwrap();
        let mut cyclic = AutomatonBuilder::default()
            .with_transitions([(0, "ab", 1), (1, "c", 2), (2, "ca", 0)])
            .with_accepting_states([2])
            .into_automaton(0)
            .unwrap();
        cyclic.add_transition(1, 0, Symbol::epsilon()).unwrap();
        cyclic.add_transition(0, 1, Symbol::epsilon()).unwrap();
        let mut named = Automaton::new("start", ["end"]).unwrap();
        named.add_transition("start", "mid", "ad").unwrap();
        named.add_transition("mid", "end", 'b').unwrap();
        named.add_transition("mid", "mid", 'a').unwrap();
        vec![x, y, cyclic, named]
    }

    const ALPHABET: [char; 4] = ['a', 'b', 'c', 'd'];

    #[test_log::test]
    fn determinization_preserves_the_language() {
        for automaton in samples() {
            let dfa = automaton.determinize();
            assert!(dfa.is_complete());
            let matcher = Matcher::new(&dfa);
            for w in words(&ALPHABET, 5) {
                assert_eq!(
                    accepted_by_search(&automaton, &w),
                    matcher.matches(&w),
                    "disagreement on {w:?} for\n{automaton}"
                );
                assert_eq!(accepted_by_search(&dfa, &w), matcher.matches(&w));
            }
        }
    }

    #[test_log::test]
    fn completed_automata_are_total_on_reachable_states() {
        for automaton in samples() {
            let dfa = automaton.determinize();
            let alphabet = dfa.alphabet();
            for q in dfa.reachable_states() {
                for sym in &alphabet {
                    assert_eq!(
                        dfa.transitions_from(&q).filter(|t| t.symbol() == sym).count(),
                        1
                    );
                }
            }
        }
    }

    #[test_log::test]
    fn redeterminization_preserves_the_language() {
        for automaton in samples() {
            let once = automaton.determinize();
            let twice = once.determinize();
            assert_eq!(once.size(), twice.size());
            let (m1, m2) = (Matcher::new(&once), Matcher::new(&twice));
            for w in words(&ALPHABET, 5) {
                assert_eq!(m1.matches(&w), m2.matches(&w));
            }
        }
    }

    #[test_log::test]
    fn union_accepts_either_language() {
        for (a, b) in samples().iter().tuple_combinations() {
            let united = Matcher::new(&a.union(b));
            let (a, b) = (Matcher::new(a), Matcher::new(b));
            for w in words(&ALPHABET, 4) {
                assert_eq!(united.matches(&w), a.matches(&w) || b.matches(&w), "{w:?}");
            }
        }
    }

    #[test_log::test]
    fn concatenation_accepts_exactly_the_splittable_words() {
        let samples = samples();
        for (a, b) in samples.iter().cartesian_product(samples.iter()) {
            let concatenated = Matcher::new(&a.concatenate(b));
            let (a, b) = (Matcher::new(a), Matcher::new(b));
            for w in words(&ALPHABET, 4) {
                let splittable =
                    (0..=w.len()).any(|i| a.matches(&w[..i]) && b.matches(&w[i..]));
                assert_eq!(concatenated.matches(&w), splittable, "{w:?}");
            }
        }
    }

    #[test_log::test]
    fn kleene_closure_accepts_iterations() {
        for a in samples() {
            let star = Matcher::new(&a.kleene_closure());
            assert!(star.matches(""));

            let a = Matcher::new(&a);
            let members = words(&ALPHABET, 3)
                .into_iter()
                .filter(|w| !w.is_empty() && a.matches(w))
                .collect_vec();
            for (u, v) in members.iter().cartesian_product(members.iter()) {
                assert!(star.matches(u));
                assert!(star.matches(&format!("{u}{v}")));
                assert!(star.matches(&format!("{u}{v}{u}")));
            }
        }
    }
}
