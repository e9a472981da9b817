//! Process-wide reserved tokens.
//!
//! Every place that has to recognise or display one of these goes through the
//! constants defined here, user input that collides with them is rejected.

/// Prefix of the identifiers in the reserved namespace. States are moved into this
/// namespace whenever two automata are merged, which guarantees that their identifiers
/// are disjoint. A user supplied state name starting with this prefix is rejected.
pub const RENAME_PREFIX: &str = "$$";

/// Textual form of the empty word on a transition. User supplied symbols may not
/// contain it.
pub const EPSILON_MARKER: &str = "ε";

/// Returns true if `name` lies in the reserved rename namespace.
pub fn is_reserved_name(name: &str) -> bool {
    name.starts_with(RENAME_PREFIX)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reserved_names() {
        assert!(is_reserved_name("$$"));
        assert!(is_reserved_name("$$12"));
        assert!(!is_reserved_name("$1"));
        assert!(!is_reserved_name("q$$"));
    }
}
