#[cfg(feature = "graphviz")]
use std::ffi::OsStr;
use std::fmt::Display;

use itertools::Itertools;

use crate::{automaton::AutomatonView, Automaton, StateId};

/// Enum that abstracts attributes of a node in the DOT format.
#[derive(Debug, Clone, Eq, PartialEq)]
pub enum DotStateAttribute {
    /// The label of a node
    Label(String),
    /// The shape of a node
    Shape(String),
}

impl Display for DotStateAttribute {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DotStateAttribute::Label(s) => write!(f, "label=\"{}\"", escape(s)),
            DotStateAttribute::Shape(s) => write!(f, "shape=\"{}\"", escape(s)),
        }
    }
}

/// Attributes of an edge in the DOT format.
#[derive(Debug, Clone, Eq, PartialEq)]
pub enum DotTransitionAttribute {
    #[allow(missing_docs)]
    Label(String),
}

impl Display for DotTransitionAttribute {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DotTransitionAttribute::Label(lbl) => write!(f, "label=\"{}\"", escape(lbl)),
        }
    }
}

fn escape(s: &str) -> String {
    s.replace('\\', "\\\\").replace('"', "\\\"")
}

fn ident(q: &StateId) -> String {
    format!("\"{}\"", escape(&q.to_string()))
}

/// Produces diagrams of automata. Only the read-only [`AutomatonView`] is consulted.
pub trait Dottable {
    /// Returns the view that is rendered.
    fn dot_view(&self) -> AutomatonView<'_>;

    /// Compute the graphviz representation, for more information on the DOT format,
    /// see the [graphviz documentation](https://graphviz.org/doc/info/lang.html).
    /// Accepting states are drawn as double circles, and an invisible node points to the
    /// initial state.
    fn dot_representation(&self) -> String {
        let view = self.dot_view();

        let header = ["digraph A {".to_string(), "rankdir=LR".to_string()].into_iter();

        let states = view.states.iter().sorted().map(|q| {
            let shape = if view.accepting_states.contains(q) {
                "doublecircle"
            } else {
                "circle"
            };
            format!(
                "{} [{}]",
                ident(q),
                [
                    DotStateAttribute::Shape(shape.into()),
                    DotStateAttribute::Label(q.to_string()),
                ]
                .iter()
                .join(", ")
            )
        });

        let entry = view.initial_state.into_iter().flat_map(|q| {
            [
                "init [label=\"\", shape=none]".to_string(),
                format!("init -> {}", ident(q)),
            ]
        });

        let transitions = view.transitions.iter().sorted().map(|t| {
            format!(
                "{} -> {} [{}]",
                ident(t.source()),
                ident(t.target()),
                DotTransitionAttribute::Label(t.symbol().to_string())
            )
        });

        header
            .chain(states)
            .chain(entry)
            .chain(transitions)
            .chain(std::iter::once("}".to_string()))
            .join("\n")
    }

    /// Renders the diagram as PNG and returns the encoded image. Only available with the
    /// `graphviz` feature, and requires the `dot` executable on the path.
    #[cfg(feature = "graphviz")]
    fn render(&self) -> Result<Vec<u8>, std::io::Error> {
        let source = staged(&self.dot_representation())?;
        run_dot(&[source.path().as_os_str()])
    }

    /// Renders the diagram as PNG into the file at `filename`. Only available with the
    /// `graphviz` feature.
    #[cfg(feature = "graphviz")]
    fn render_to_file_name(&self, filename: &str) -> Result<(), std::io::Error> {
        let source = staged(&self.dot_representation())?;
        let args = [OsStr::new("-o"), OsStr::new(filename), source.path().as_os_str()];
        run_dot(&args).map(|_| ())
    }
}

/// Writes the DOT source into a temporary file that lives as long as the handle.
#[cfg(feature = "graphviz")]
fn staged(dot: &str) -> Result<tempfile::NamedTempFile, std::io::Error> {
    use std::io::Write;

    tracing::trace!("staging dot source\n{dot}");
    let mut file = tempfile::NamedTempFile::new()?;
    file.write_all(dot.as_bytes())?;
    file.flush()?;
    Ok(file)
}

/// Invokes `dot -Tpng` with `args` and returns its standard output.
#[cfg(feature = "graphviz")]
fn run_dot(args: &[&OsStr]) -> Result<Vec<u8>, std::io::Error> {
    let output = std::process::Command::new("dot")
        .arg("-Tpng")
        .args(args)
        .output()?;
    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr).into_owned();
        tracing::error!("dot exited with {}: {stderr}", output.status);
        return Err(std::io::Error::other(stderr));
    }
    Ok(output.stdout)
}

impl Dottable for Automaton {
    fn dot_view(&self) -> AutomatonView<'_> {
        self.view()
    }
}

impl Dottable for AutomatonView<'_> {
    fn dot_view(&self) -> AutomatonView<'_> {
        *self
    }
}
