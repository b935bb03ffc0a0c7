//! Mermaid flowchart rendering.
//!
//! A successful extraction renders as
//!
//! ```text
//! graph TD
//!     node_0[Input<br/>node_0]
//!     node_1[Linear<br/>node_1]
//!     node_0 --> node_1
//! ```
//!
//! with every node line before every edge line. A failed extraction renders
//! as a fixed two-node diagram pointing from an error marker to the message.

use std::fmt::{self, Write};

use serde::Deserialize;

use nirviz_core::{
    identifier::DiagramId,
    structure::{ExtractionResult, ModelStructure},
};

/// Inline line break inside a Mermaid label.
pub const LINE_BREAK: &str = "<br/>";

const INDENT: &str = "    ";

/// Layout direction of a Mermaid `graph`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
pub enum Direction {
    /// Top down.
    #[default]
    TD,
    /// Top to bottom, same as `TD`.
    TB,
    /// Bottom to top.
    BT,
    /// Left to right.
    LR,
    /// Right to left.
    RL,
}

impl Direction {
    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::TD => "TD",
            Direction::TB => "TB",
            Direction::BT => "BT",
            Direction::LR => "LR",
            Direction::RL => "RL",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Renders [`ExtractionResult`]s as Mermaid text.
///
/// Rendering never fails. Ids are sanitized with
/// [`sanitize`](nirviz_core::identifier::sanitize); labels are written as
/// they are, apart from the error message which is quoted and escaped.
#[derive(Debug, Clone, Copy, Default)]
pub struct DiagramRenderer {
    direction: Direction,
}

impl DiagramRenderer {
    pub fn new(direction: Direction) -> Self {
        Self { direction }
    }

    /// Renders `result` as a Mermaid diagram.
    pub fn render(&self, result: &ExtractionResult) -> String {
        match result {
            ExtractionResult::Success { structure, .. } => self.render_structure(structure),
            ExtractionResult::Failure { error } => render_error(error),
        }
    }

    /// Renders the nodes and connections of `structure`.
    ///
    /// Connections are not checked against the nodes; a dangling id is
    /// emitted like any other.
    pub fn render_structure(&self, structure: &ModelStructure) -> String {
        let mut out = String::new();
        writeln!(out, "graph {}", self.direction)
            .expect("Writing to String buffer is infallible");

        for node in structure.nodes() {
            writeln!(
                out,
                "{INDENT}{}[{}{LINE_BREAK}{}]",
                DiagramId::new(node.id()),
                node.kind(),
                node.name()
            )
            .expect("Writing to String buffer is infallible");
        }

        for conn in structure.connections() {
            writeln!(
                out,
                "{INDENT}{} --> {}",
                DiagramId::new(conn.from()),
                DiagramId::new(conn.to())
            )
            .expect("Writing to String buffer is infallible");
        }

        out
    }
}

/// Renders the fixed error diagram for `message`.
///
/// The layout direction is always `TD` so the template does not vary.
pub fn render_error(message: &str) -> String {
    format!(
        "graph TD\n{INDENT}error[Error]\n{INDENT}msg[\"{}\"]\n{INDENT}error --> msg\n",
        escape_label(message)
    )
}

/// Escapes text for use inside a double-quoted Mermaid label.
///
/// Quotes become the `#quot;` entity and line breaks become [`LINE_BREAK`]
/// so the label stays on one line.
pub fn escape_label(text: &str) -> String {
    text.replace("\r\n", "\n")
        .replace('"', "#quot;")
        .replace(['\n', '\r'], LINE_BREAK)
}


#[cfg(test)]
mod proptest_tests {
    use proptest::prelude::*;

    use nirviz_core::structure::{ConnectionRecord, NodeRecord};

    use super::*;

    // ===================
    // Strategies
    // ===================

    fn structure_strategy() -> impl Strategy<Value = ModelStructure> {
        (
            prop::collection::vec("[A-Za-z]{1,10}", 0..20),
            prop::collection::vec((0usize..30, 0usize..30), 0..30),
        )
            .prop_map(|(kinds, edges)| {
                let nodes = kinds
                    .into_iter()
                    .enumerate()
                    .map(|(i, kind)| NodeRecord::positional(i, kind))
                    .collect();
                let connections = edges
                    .into_iter()
                    .map(|(a, b)| ConnectionRecord::forward(format!("node_{a}"), format!("node_{b}")))
                    .collect();
                ModelStructure::new(nodes, connections)
            })
    }

    // ===================
    // Property Test Functions
    // ===================

    /// One header, one line per node, one line per connection, in that order.
    fn check_line_counts(structure: &ModelStructure) -> Result<(), TestCaseError> {
        let text = DiagramRenderer::default().render_structure(structure);
        let lines: Vec<&str> = text.lines().collect();

        prop_assert!(text.ends_with('\n'));
        prop_assert_eq!(lines[0], "graph TD");

        let body = &lines[1..];
        let node_lines = body.iter().filter(|l| !l.contains(" --> ")).count();
        let edge_lines = body.iter().filter(|l| l.contains(" --> ")).count();
        prop_assert_eq!(node_lines, structure.nodes().len());
        prop_assert_eq!(edge_lines, structure.connections().len());

        let first_edge = body.iter().position(|l| l.contains(" --> ")).unwrap_or(body.len());
        prop_assert!(body[first_edge..].iter().all(|l| l.contains(" --> ")));
        Ok(())
    }

    /// The error diagram has exactly three lines after the header.
    fn check_error_template_shape(message: &str) -> Result<(), TestCaseError> {
        let text = render_error(message);
        let lines: Vec<&str> = text.lines().collect();

        prop_assert_eq!(lines.len(), 4);
        prop_assert_eq!(lines[0], "graph TD");
        prop_assert_eq!(lines[1], "    error[Error]");
        prop_assert!(lines[2].starts_with("    msg[\"") && lines[2].ends_with("\"]"));
        prop_assert_eq!(lines[3], "    error --> msg");

        let label = &lines[2]["    msg[\"".len()..lines[2].len() - "\"]".len()];
        prop_assert!(!label.contains('"'), "unescaped quote in {label:?}");
        Ok(())
    }

    // ===================
    // Proptest Wrappers
    // ===================

    proptest! {
        #[test]
        fn line_counts(structure in structure_strategy()) {
            check_line_counts(&structure)?;
        }

        #[test]
        fn error_template_shape(message in any::<String>()) {
            check_error_template_shape(&message)?;
        }

        #[test]
        fn error_template_shape_hostile(message in r#"[\[\]"\n\r a-z{}<>|-]{0,40}"#) {
            check_error_template_shape(&message)?;
        }
    }
}
