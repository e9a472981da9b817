//! Library for constructing and evaluating finite automata over characters.
//!
//! The central type is [`Automaton`], which stores a set of states, a designated initial state,
//! a set of accepting states and a set of [`Transition`]s. A transition is labeled with a
//! [`Symbol`], which is either the empty word (epsilon) or a non-empty sequence of characters,
//! so in general an automaton is nondeterministic.
//!
//! Automata are typically built from small fragments that are combined algebraically:
//! - [`Automaton::union`] accepts the words accepted by either operand,
//! - [`Automaton::concatenate`] accepts the words that split into a word accepted by the first
//!   operand followed by one accepted by the second,
//! - [`Automaton::kleene_closure`] accepts all concatenations of zero or more accepted words.
//!
//! Each combinator copies its operands into a reserved namespace of state identifiers
//! (see [`reserved::RENAME_PREFIX`]) before merging them, so states never collide, and
//! numbers the states of the result `0, 1, 2, ...` afterwards.
//!
//! [`Automaton::determinize`] turns any automaton into a deterministic and complete one by
//! splitting multi-character transitions, computing epsilon closures and running the subset
//! construction, after which missing transitions are redirected into a non-accepting sink.
//! Membership of words is decided by a [`Matcher`], or for one-off queries through
//! [`Automaton::matches`].
//!
//! ```
//! use regular_automata::prelude::*;
//!
//! let mut ab = Automaton::new(0, [1]).unwrap();
//! ab.add_transition(0, 1, "ab").unwrap();
//! let mut c = Automaton::new(0, [1]).unwrap();
//! c.add_transition(0, 1, 'c').unwrap();
//!
//! // (ab | c)*
//! let matcher = Matcher::new(&ab.union(&c).kleene_closure());
//! assert!(matcher.matches("abcab"));
//! assert!(matcher.matches(""));
//! assert!(!matcher.matches("abb"));
//! ```
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

/// The prelude is supposed to make using this package easier. Including everything, i.e.
/// `use regular_automata::prelude::*;` should be enough to use the package.
pub mod prelude {
    pub use super::{
        automaton::AutomatonView, dot::Dottable, math, run::Path, Automaton, AutomatonBuilder,
        AutomatonError, Matcher, Namespace, StateId, Symbol, Transition,
    };
}

/// This module contains aliases for the collections which are used throughout the crate.
pub mod math;

/// Tokens that are reserved for internal use.
pub mod reserved;

mod error;
pub use error::AutomatonError;

mod state;
pub use state::{Namespace, StateId};

mod symbol;
pub use symbol::Symbol;

mod transition;
pub use transition::Transition;

/// Defines the [`Automaton`] container together with its structural operations.
pub mod automaton;
pub use automaton::Automaton;

mod builder;
pub use builder::AutomatonBuilder;

/// Combinators and determinization.
mod operations;

/// Runs of words through determinized automata.
pub mod run;
pub use run::Matcher;

/// Output of automata in the DOT format of graphviz.
pub mod dot;
