use std::fmt::{Debug, Display};

use itertools::Itertools;
use tracing::{trace, warn};

use crate::{
    math::{Map, OrderedSet, Set},
    AutomatonError, Namespace, StateId, Symbol, Transition,
};

mod closure;

mod deterministic;

mod reachability;

mod split;

/// A finite automaton over characters. It consists of a set of states, a designated initial
/// state, a set of accepting states and a set of (possibly epsilon or multi-character)
/// transitions, so in general it is nondeterministic.
///
/// The following invariants hold after every operation:
/// - the initial state, if set, is a state of the automaton,
/// - every accepting state is a state of the automaton,
/// - source and target of every transition are states of the automaton,
/// - no transition is labeled with the empty word.
///
/// Structural mutations are atomic: an operation returning an error leaves the automaton
/// exactly as it was. The combinators ([`Automaton::union`], [`Automaton::concatenate`] and
/// [`Automaton::kleene_closure`]) as well as [`Automaton::determinize`] never modify their
/// operands and return a fresh automaton instead.
///
/// # Example
/// ```
/// use regular_automata::prelude::*;
///
/// let mut nfa = Automaton::new(1, [3]).unwrap();
/// nfa.add_transition(1, 2, 'a').unwrap();
/// nfa.add_transition(1, 3, 'b').unwrap();
/// nfa.add_transition(2, 3, 'b').unwrap();
///
/// let star = nfa.kleene_closure();
/// assert!(star.matches(""));
/// assert!(star.matches("abbab"));
/// assert!(!star.matches("a"));
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct Automaton {
    initial: Option<StateId>,
    states: Set<StateId>,
    accepting: Set<StateId>,
    transitions: Set<Transition>,
}

/// Read-only view on the constituents of an [`Automaton`]. This is all that a renderer
/// gets to see.
#[derive(Debug, Clone, Copy)]
pub struct AutomatonView<'a> {
    /// All states.
    pub states: &'a Set<StateId>,
    /// The accepting states, a subset of `states`.
    pub accepting_states: &'a Set<StateId>,
    /// All transitions.
    pub transitions: &'a Set<Transition>,
    /// The initial state, `None` if it has been removed.
    pub initial_state: Option<&'a StateId>,
}

fn check_fresh(automaton: &Automaton, q: &StateId) -> Result<(), AutomatonError> {
    if q.is_reserved() && !automaton.states.contains(q) {
        return Err(AutomatonError::ReservedState(q.clone()));
    }
    Ok(())
}

impl Automaton {
    /// Creates a new automaton whose only states are `initial` and the given accepting
    /// states. Fails if any of them lies in the reserved rename namespace.
    pub fn new<X, I, Y>(initial: X, accepting: I) -> Result<Self, AutomatonError>
    where
        X: Into<StateId>,
        I: IntoIterator<Item = Y>,
        Y: Into<StateId>,
    {
        let initial = initial.into();
        let accepting: Set<StateId> = accepting.into_iter().map(Into::into).collect();
        if let Some(q) = std::iter::once(&initial)
            .chain(accepting.iter())
            .find(|q| q.is_reserved())
        {
            return Err(AutomatonError::ReservedState(q.clone()));
        }

        let mut states = accepting.clone();
        states.insert(initial.clone());
        Ok(Self {
            initial: Some(initial),
            states,
            accepting,
            transitions: Set::default(),
        })
    }

    /// An automaton without any states, the combinators start from this.
    pub(crate) fn empty() -> Self {
        Self {
            initial: None,
            states: Set::default(),
            accepting: Set::default(),
            transitions: Set::default(),
        }
    }

    /// Returns a read-only view on all constituents.
    pub fn view(&self) -> AutomatonView<'_> {
        AutomatonView {
            states: &self.states,
            accepting_states: &self.accepting,
            transitions: &self.transitions,
            initial_state: self.initial.as_ref(),
        }
    }

    /// The initial state, `None` if it was removed through [`Automaton::remove_state`].
    pub fn initial_state(&self) -> Option<&StateId> {
        self.initial.as_ref()
    }

    /// Iterates over all states in no particular order.
    pub fn states(&self) -> impl Iterator<Item = &StateId> + '_ {
        self.states.iter()
    }

    /// Iterates over the accepting states in no particular order.
    pub fn accepting_states(&self) -> impl Iterator<Item = &StateId> + '_ {
        self.accepting.iter()
    }

    /// Iterates over all transitions in no particular order.
    pub fn transitions(&self) -> impl Iterator<Item = &Transition> + '_ {
        self.transitions.iter()
    }

    /// Iterates over the transitions leaving `q`.
    pub fn transitions_from<'a>(&'a self, q: &'a StateId) -> impl Iterator<Item = &'a Transition> {
        self.transitions.iter().filter(move |t| t.source() == q)
    }

    /// Number of states.
    pub fn size(&self) -> usize {
        self.states.len()
    }

    /// Returns true if `q` is a state of the automaton.
    pub fn contains_state(&self, q: &StateId) -> bool {
        self.states.contains(q)
    }

    /// Returns true if `q` is an accepting state.
    pub fn is_accepting(&self, q: &StateId) -> bool {
        self.accepting.contains(q)
    }

    /// Returns true if `transition` belongs to the automaton.
    pub fn contains_transition(&self, transition: &Transition) -> bool {
        self.transitions.contains(transition)
    }

    /// Adds a state, returning `true` if it was not present before. Fails if the
    /// state is new and lies in the reserved rename namespace.
    pub fn add_state<X: Into<StateId>>(&mut self, state: X) -> Result<bool, AutomatonError> {
        let state = state.into();
        check_fresh(self, &state)?;
        Ok(self.states.insert(state))
    }

    pub(crate) fn insert_state(&mut self, state: StateId) -> bool {
        self.states.insert(state)
    }

    /// Removes `state` together with every transition touching it. If `state` is accepting,
    /// it loses this status, and if it is the initial state then the automaton is left
    /// without one. Such an automaton accepts nothing until [`Automaton::set_initial_state`]
    /// is called. Returns `false` if there was no such state.
    pub fn remove_state(&mut self, state: &StateId) -> bool {
        if !self.states.remove(state) {
            return false;
        }
        if self.initial.as_ref() == Some(state) {
            warn!("removing initial state {state}, the automaton no longer has one");
            self.initial = None;
        }
        self.transitions.retain(|t| !t.touches(state));
        self.accepting.remove(state);
        true
    }

    /// Adds a transition from `from` to `to` on `symbol`, creating its endpoints if they do
    /// not exist yet. Returns `false` if the transition was already present.
    ///
    /// Fails without changing anything if `symbol` is the empty word or contains the
    /// epsilon marker, or if a new endpoint lies in the reserved rename namespace.
    pub fn add_transition<X, Y, S>(
        &mut self,
        from: X,
        to: Y,
        symbol: S,
    ) -> Result<bool, AutomatonError>
    where
        X: Into<StateId>,
        Y: Into<StateId>,
        S: Into<Symbol>,
    {
        let transition = Transition::new(from, to, symbol);
        transition.symbol().validate()?;
        check_fresh(self, transition.source())?;
        check_fresh(self, transition.target())?;
        Ok(self.insert_transition(transition))
    }

    pub(crate) fn insert_transition(&mut self, transition: Transition) -> bool {
        self.states.insert(transition.source().clone());
        self.states.insert(transition.target().clone());
        self.transitions.insert(transition)
    }

    /// Removes the given transition, returning whether it was present. An empty symbol is
    /// rejected.
    pub fn remove_transition<X, Y, S>(
        &mut self,
        from: X,
        to: Y,
        symbol: S,
    ) -> Result<bool, AutomatonError>
    where
        X: Into<StateId>,
        Y: Into<StateId>,
        S: Into<Symbol>,
    {
        let transition = Transition::new(from, to, symbol);
        if transition.symbol().is_empty() {
            return Err(AutomatonError::EmptySymbol);
        }
        Ok(self.transitions.remove(&transition))
    }

    /// Makes `state` accepting. The state must already exist.
    pub fn grant_accepting_state<X: Into<StateId>>(
        &mut self,
        state: X,
    ) -> Result<bool, AutomatonError> {
        let state = state.into();
        if !self.states.contains(&state) {
            return Err(AutomatonError::UnknownState(state));
        }
        Ok(self.accepting.insert(state))
    }

    /// Makes `state` non-accepting, returns `false` if it was not accepting.
    pub fn ungrant_accepting_state(&mut self, state: &StateId) -> bool {
        self.accepting.remove(state)
    }

    /// Replaces the initial state, which must be an existing state.
    pub fn set_initial_state<X: Into<StateId>>(&mut self, state: X) -> Result<(), AutomatonError> {
        let state = state.into();
        if !self.states.contains(&state) {
            return Err(AutomatonError::UnknownState(state));
        }
        self.initial = Some(state);
        Ok(())
    }

    pub(crate) fn replace_initial_state(&mut self, state: Option<StateId>) {
        if let Some(q) = &state {
            self.states.insert(q.clone());
        }
        self.initial = state;
    }

    pub(crate) fn insert_accepting(&mut self, state: StateId) {
        self.states.insert(state.clone());
        self.accepting.insert(state);
    }

    /// Renames `old` to `new`, moving every transition endpoint, the initial state and the
    /// accepting status along. Fails if `new` is already a state or lies in the reserved
    /// rename namespace, or if `old` does not exist.
    pub fn rename_state<X: Into<StateId>, Y: Into<StateId>>(
        &mut self,
        old: X,
        new: Y,
    ) -> Result<(), AutomatonError> {
        let (old, new) = (old.into(), new.into());
        if new.is_reserved() {
            return Err(AutomatonError::ReservedState(new));
        }
        if self.states.contains(&new) {
            return Err(AutomatonError::RenameCollision(new));
        }
        if !self.states.contains(&old) {
            return Err(AutomatonError::UnknownState(old));
        }
        self.relabel(|q| if q == &old { new.clone() } else { q.clone() });
        Ok(())
    }

    /// Renames every state to the identifiers `start, start + 1, ...` of the given
    /// namespace, assigning them in the order of the states. Returns the next unused
    /// counter, so that a second automaton can be moved into the same namespace without
    /// collisions.
    pub fn rename_states(&mut self, namespace: Namespace, start: usize) -> usize {
        let mapping: Map<StateId, StateId> = self
            .states
            .iter()
            .sorted()
            .enumerate()
            .map(|(i, q)| (q.clone(), namespace.state(start + i)))
            .collect();
        let next = start + mapping.len();
        trace!(
            "renaming {} states into {namespace:?} namespace starting at {start}",
            mapping.len()
        );
        self.relabel(|q| mapping[q].clone());
        next
    }

    /// Applies `f` to every state identifier. `f` has to be injective on the states.
    pub(crate) fn relabel<F: Fn(&StateId) -> StateId>(&mut self, f: F) {
        self.initial = self.initial.as_ref().map(&f);
        self.states = self.states.iter().map(&f).collect();
        self.accepting = self.accepting.iter().map(&f).collect();
        self.transitions = self.transitions.iter().map(|t| t.relabeled(&f)).collect();
    }

    /// Returns true if at least one transition leaves `q`.
    pub fn has_transition_from(&self, q: &StateId) -> bool {
        self.transitions.iter().any(|t| t.source() == q)
    }

    /// Returns true if at least one transition enters `q`.
    pub fn has_transition_to(&self, q: &StateId) -> bool {
        self.transitions.iter().any(|t| t.target() == q)
    }

    /// Removes all states other than the initial one that no transition touches, returns
    /// how many were removed.
    pub fn remove_isolated_states(&mut self) -> usize {
        let touched: Set<&StateId> = self
            .transitions
            .iter()
            .flat_map(|t| [t.source(), t.target()])
            .collect();
        let isolated = self
            .states
            .iter()
            .filter(|q| Some(*q) != self.initial.as_ref() && !touched.contains(q))
            .cloned()
            .collect_vec();
        for q in &isolated {
            self.remove_state(q);
        }
        isolated.len()
    }

    /// Builds a table with one row per state and one column per symbol (epsilon included),
    /// each cell lists the targets that are reached.
    pub fn transition_table(&self) -> String {
        use owo_colors::OwoColorize;

        let symbols: OrderedSet<&Symbol> = self.transitions.iter().map(|t| t.symbol()).collect();
        let mut builder = tabled::builder::Builder::default();
        builder.push_record(
            std::iter::once("State".to_string()).chain(symbols.iter().map(|s| s.to_string())),
        );
        for q in self.states.iter().sorted() {
            let mut name = q.to_string();
            if self.initial.as_ref() == Some(q) {
                name = format!("→ {name}");
            }
            if self.accepting.contains(q) {
                name = name.bold().to_string();
            }
            let mut row = vec![name];
            for sym in &symbols {
                let targets = self
                    .transitions_from(q)
                    .filter(|t| t.symbol() == *sym)
                    .map(|t| t.target())
                    .sorted()
                    .join(", ");
                row.push(if targets.is_empty() {
                    "-".to_string()
                } else {
                    targets
                });
            }
            builder.push_record(row);
        }
        builder
            .build()
            .with(tabled::settings::Style::rounded())
            .to_string()
    }
}

impl Display for Automaton {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.initial {
            Some(q) => writeln!(f, "Initial State: {q}")?,
            None => writeln!(f, "Initial State: -")?,
        }
        for t in self.transitions.iter().sorted() {
            writeln!(f, "{t}")?;
        }
        writeln!(
            f,
            "Accepting States: {}",
            self.accepting.iter().sorted().join(", ")
        )
    }
}

impl Debug for Automaton {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.transition_table())
    }
}

#[cfg(test)]
mod tests {
    use crate::prelude::*;

    fn example() -> Automaton {
        let mut a = Automaton::new(1, Vec::<usize>::new()).unwrap();
        a.add_transition(1, 2, 'a').unwrap();
        a.add_transition(1, 3, 'b').unwrap();
        a.add_transition(2, 3, 'b').unwrap();
        a.grant_accepting_state(3).unwrap();
        a
    }

    #[test_log::test]
    fn construction() {
        let a = Automaton::new(0, [1, 2]).unwrap();
        assert_eq!(a.size(), 3);
        assert_eq!(a.initial_state(), Some(&StateId::from(0)));
        assert!(a.is_accepting(&1.into()));
        assert!(!a.is_accepting(&0.into()));

        assert_eq!(
            Automaton::new("$$0", Vec::<usize>::new()),
            Err(AutomatonError::ReservedState("$$0".into()))
        );
        assert_eq!(
            Automaton::new(0, ["$$"]),
            Err(AutomatonError::ReservedState("$$".into()))
        );
    }

    #[test_log::test]
    fn transitions_are_deduplicated() {
        let mut a = example();
        assert_eq!(a.add_transition(1, 2, 'a'), Ok(false));
        assert_eq!(a.transitions().count(), 3);
        assert_eq!(a.add_transition(2, 4, Symbol::epsilon()), Ok(true));
        assert!(a.contains_state(&4.into()));
    }

    #[test_log::test]
    fn rejected_transitions_leave_automaton_unchanged() {
        let mut a = example();
        let before = a.clone();
        assert_eq!(a.add_transition(1, 5, ""), Err(AutomatonError::EmptySymbol));
        assert_eq!(
            a.add_transition(1, 5, "xε"),
            Err(AutomatonError::ReservedSymbol("xε".into()))
        );
        assert_eq!(
            a.add_transition(1, "$$7", 'a'),
            Err(AutomatonError::ReservedState("$$7".into()))
        );
        assert_eq!(a.remove_transition(1, 2, ""), Err(AutomatonError::EmptySymbol));
        assert_eq!(a, before);

        assert_eq!(a.remove_transition(1, 2, 'a'), Ok(true));
        assert_eq!(a.remove_transition(1, 2, 'a'), Ok(false));
    }

    #[test_log::test]
    fn granting_requires_existing_state() {
        let mut a = example();
        assert_eq!(
            a.grant_accepting_state(9),
            Err(AutomatonError::UnknownState(9.into()))
        );
        assert_eq!(a.grant_accepting_state(2), Ok(true));
        assert!(a.ungrant_accepting_state(&2.into()));
        assert!(!a.ungrant_accepting_state(&2.into()));
    }

    #[test_log::test]
    fn removing_states() {
        let mut a = example();
        assert!(a.remove_state(&3.into()));
        assert!(!a.remove_state(&3.into()));
        assert_eq!(a.transitions().count(), 1);
        assert_eq!(a.accepting_states().count(), 0);

        assert!(a.remove_state(&1.into()));
        assert_eq!(a.initial_state(), None);
        assert_eq!(a.transitions().count(), 0);
        assert_eq!(
            a.set_initial_state(1),
            Err(AutomatonError::UnknownState(1.into()))
        );
        a.set_initial_state(2).unwrap();
        assert_eq!(a.initial_state(), Some(&2.into()));
    }

    #[test_log::test]
    fn renaming_a_single_state() {
        let mut a = example();
        a.add_transition(3, 3, 'c').unwrap();
        a.rename_state(3, "end").unwrap();
        assert!(a.is_accepting(&"end".into()));
        assert!(!a.contains_state(&3.into()));
        assert!(a.contains_transition(&Transition::new(1, "end", 'b')));
        assert!(a.contains_transition(&Transition::new("end", "end", 'c')));

        a.rename_state(1, "start").unwrap();
        assert_eq!(a.initial_state(), Some(&"start".into()));

        let before = a.clone();
        assert_eq!(
            a.rename_state(2, "end"),
            Err(AutomatonError::RenameCollision("end".into()))
        );
        assert_eq!(
            a.rename_state(2, "$$"),
            Err(AutomatonError::ReservedState("$$".into()))
        );
        assert_eq!(
            a.rename_state(42, 43),
            Err(AutomatonError::UnknownState(42.into()))
        );
        assert_eq!(a, before);
    }

    #[test_log::test]
    fn renaming_into_namespaces() {
        let mut a = example();
        let next = a.rename_states(Namespace::Reserved, 5);
        assert_eq!(next, 8);
        assert!(a.states().all(|q| q.is_reserved()));
        assert_eq!(a.initial_state(), Some(&Namespace::Reserved.state(5)));

        assert_eq!(a.rename_states(Namespace::Plain, 0), 3);
        assert_eq!(a.initial_state(), Some(&0.into()));
        assert!(a.is_accepting(&2.into()));
        assert!(a.contains_transition(&Transition::new(0, 1, 'a')));
        assert!(a.contains_transition(&Transition::new(1, 2, 'b')));
    }

    #[test_log::test]
    fn isolated_states() {
        let mut a = example();
        a.add_state(7).unwrap();
        a.add_state("lonely").unwrap();
        assert!(!a.has_transition_from(&7.into()));
        assert!(a.has_transition_to(&3.into()));
        assert_eq!(a.remove_isolated_states(), 2);
        assert_eq!(a.size(), 3);
    }

    #[test_log::test]
    fn display() {
        let a = example();
        assert_eq!(
            a.to_string(),
            "Initial State: 1\n1, 2, a\n1, 3, b\n2, 3, b\nAccepting States: 3\n"
        );
        let table = format!("{a:?}");
        assert!(table.contains("State"));
        assert!(table.contains("→ 1"));
    }

    #[test_log::test]
    fn index_and_name_states_stay_apart() {
        let mut a = Automaton::new(1, ["1"]).unwrap();
        a.add_transition(1, "1", 'a').unwrap();
        assert_eq!(a.size(), 2);
        assert_eq!(
            a.to_string(),
            "Initial State: 1\n1, \"1\", a\nAccepting States: \"1\"\n"
        );
        assert!(!a.matches(""));
        assert!(a.matches("a"));
    }
}
