//! The deserialized NIR graph.
//!
//! A [`RawGraph`] is what a model artifact reader hands to the extractor: the
//! nodes in declaration order and the edge list exactly as the artifact
//! declared it. Nothing here is validated beyond what the reader checked.

use crate::node::NodeKind;

/// Format version assumed for artifacts that do not declare one.
pub const DEFAULT_VERSION: &str = "1.0";

/// A single node of a NIR graph as declared in the artifact.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawNode {
    name: String,
    kind: NodeKind,
}

impl RawNode {
    /// Creates a node with its artifact-level name and kind.
    pub fn new(name: impl Into<String>, kind: NodeKind) -> Self {
        Self {
            name: name.into(),
            kind,
        }
    }

    /// Returns the key the artifact uses for this node.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the kind of this node.
    pub fn kind(&self) -> NodeKind {
        self.kind
    }
}

/// A directed edge between two nodes, referenced by artifact-level name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawEdge {
    source: String,
    target: String,
}

impl RawEdge {
    pub fn new(source: impl Into<String>, target: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            target: target.into(),
        }
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn target(&self) -> &str {
        &self.target
    }
}

/// An ordered NIR graph.
///
/// # Examples
///
/// ```
/// use nirviz_core::{graph::{RawEdge, RawGraph, RawNode}, node::NodeKind};
///
/// let graph = RawGraph::new(
///     vec![
///         RawNode::new("input", NodeKind::Input),
///         RawNode::new("output", NodeKind::Output),
///     ],
///     vec![RawEdge::new("input", "output")],
/// );
/// assert_eq!(graph.nodes().len(), 2);
/// assert_eq!(graph.position("output"), Some(1));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawGraph {
    nodes: Vec<RawNode>,
    edges: Vec<RawEdge>,
    version: Option<String>,
}

impl RawGraph {
    /// Creates a graph from nodes in declaration order and declared edges.
    pub fn new(nodes: Vec<RawNode>, edges: Vec<RawEdge>) -> Self {
        Self {
            nodes,
            edges,
            version: None,
        }
    }

    /// Records the format version declared by the artifact.
    pub fn with_version(mut self, version: impl Into<String>) -> Self {
        self.version = Some(version.into());
        self
    }

    /// Returns the nodes in declaration order.
    pub fn nodes(&self) -> &[RawNode] {
        &self.nodes
    }

    /// Returns the edges in declaration order.
    pub fn edges(&self) -> &[RawEdge] {
        &self.edges
    }

    /// Returns the format version, if the artifact declared one.
    pub fn version(&self) -> Option<&str> {
        self.version.as_deref()
    }

    /// Returns the declared format version, or [`DEFAULT_VERSION`] when the
    /// artifact declared none.
    pub fn version_or_default(&self) -> &str {
        self.version().unwrap_or(DEFAULT_VERSION)
    }

    /// Returns the declaration index of the node called `name`.
    ///
    /// Names are unique within one artifact, so the first match is the only one.
    pub fn position(&self, name: &str) -> Option<usize> {
        self.nodes.iter().position(|node| node.name() == name)
    }

    /// Returns `true` if the declared edges are exactly the chain
    /// `nodes[0] -> nodes[1] -> ... -> nodes[n-1]`.
    pub fn is_linear_chain(&self) -> bool {
        self.edges.len() == self.nodes.len().saturating_sub(1)
            && self
                .nodes
                .windows(2)
                .zip(&self.edges)
                .all(|(pair, edge)| {
                    edge.source() == pair[0].name() && edge.target() == pair[1].name()
                })
    }
}
