//! JSON serialization of a NIR graph.
//!
//! A document is an object with a `nodes` map (node name to node object,
//! in declaration order) and an `edges` list of `[source, target]` pairs.
//! Node objects carry a `type` tag plus parameters that are not needed for
//! topology and therefore ignored. Nodes of type `NIRGraph` nest their own
//! `nodes` and `edges` and are checked recursively.

use indexmap::IndexMap;
use log::trace;
use serde::Deserialize;
use serde_json::{Value, error::Category};

use nirviz_core::{
    graph::{RawEdge, RawGraph, RawNode},
    node::NodeKind,
};

use crate::error::{ErrorCode, Location, ParseError, Result};

/// Top-level document.
#[derive(Debug, Deserialize)]
pub(crate) struct GraphDocument {
    nodes: Option<IndexMap<String, NodeDocument>>,
    edges: Option<Vec<Value>>,
    #[serde(default)]
    version: Option<Value>,
}

/// A single node entry.
#[derive(Debug, Deserialize)]
pub(crate) struct NodeDocument {
    #[serde(rename = "type")]
    kind: Option<String>,
    #[serde(default)]
    nodes: Option<IndexMap<String, NodeDocument>>,
    #[serde(default)]
    edges: Option<Vec<Value>>,
}

impl GraphDocument {
    /// Assembles a document from parts read out of another serialization.
    #[cfg(feature = "hdf5")]
    pub(crate) fn new(
        nodes: Option<IndexMap<String, NodeDocument>>,
        edges: Option<Vec<Value>>,
        version: Option<String>,
    ) -> Self {
        Self {
            nodes,
            edges,
            version: version.map(Value::String),
        }
    }

    /// Deserializes a document from raw bytes.
    pub(crate) fn from_slice(bytes: &[u8]) -> Result<Self> {
        serde_json::from_slice(bytes).map_err(json_error)
    }

    /// Converts the document into an ordered [`RawGraph`].
    pub(crate) fn into_raw_graph(self) -> Result<RawGraph> {
        let nodes = self.nodes.ok_or_else(|| missing_field("nodes", None))?;
        let edges = self.edges.ok_or_else(|| missing_field("edges", None))?;

        let nodes = read_nodes(nodes, None)?;
        let edges = read_edges(&edges, None)?;

        let graph = RawGraph::new(nodes, edges);
        Ok(match self.version {
            Some(Value::String(version)) => graph.with_version(version),
            Some(Value::Null) | None => graph,
            Some(other) => graph.with_version(other.to_string()),
        })
    }
}

#[cfg(feature = "hdf5")]
impl NodeDocument {
    pub(crate) fn new(
        kind: Option<String>,
        nodes: Option<IndexMap<String, NodeDocument>>,
        edges: Option<Vec<Value>>,
    ) -> Self {
        Self { kind, nodes, edges }
    }
}

fn read_nodes(nodes: IndexMap<String, NodeDocument>, scope: Option<&str>) -> Result<Vec<RawNode>> {
    nodes
        .into_iter()
        .map(|(name, node)| read_node(name, node, scope))
        .collect()
}

fn read_node(name: String, node: NodeDocument, scope: Option<&str>) -> Result<RawNode> {
    let path = qualified(scope, &name);

    let tag = node.kind.ok_or_else(|| {
        ParseError::new(ErrorCode::E201, format!("node `{path}` has no `type`"))
            .with_help("every node needs a `type` such as \"Linear\" or \"LIF\"")
    })?;

    let kind = tag.parse::<NodeKind>().map_err(|err| {
        ParseError::new(ErrorCode::E200, format!("{err} for node `{path}`")).with_help(format!(
            "known types are {}",
            NodeKind::ALL.map(|kind| kind.as_str()).join(", ")
        ))
    })?;

    if kind == NodeKind::NIRGraph {
        let nested_nodes = node
            .nodes
            .ok_or_else(|| missing_field("nodes", Some(path.as_str())))?;
        let nested_edges = node
            .edges
            .ok_or_else(|| missing_field("edges", Some(path.as_str())))?;
        read_nodes(nested_nodes, Some(path.as_str()))?;
        read_edges(&nested_edges, Some(path.as_str()))?;
    }

    trace!(node = path, kind = kind.as_str(); "Read node");
    Ok(RawNode::new(name, kind))
}

fn read_edges(edges: &[Value], scope: Option<&str>) -> Result<Vec<RawEdge>> {
    edges
        .iter()
        .enumerate()
        .map(|(index, edge)| match edge.as_array().map(Vec::as_slice) {
            Some([Value::String(source), Value::String(target)]) => {
                Ok(RawEdge::new(source.as_str(), target.as_str()))
            }
            _ => {
                let place = scope.map(|s| format!(" in `{s}`")).unwrap_or_default();
                Err(ParseError::new(
                    ErrorCode::E202,
                    format!("edge {index}{place} is not a [source, target] pair: {edge}"),
                ))
            }
        })
        .collect()
}

fn qualified(scope: Option<&str>, name: &str) -> String {
    match scope {
        Some(scope) => format!("{scope}.{name}"),
        None => name.to_string(),
    }
}

fn missing_field(field: &str, scope: Option<&str>) -> ParseError {
    let message = match scope {
        Some(scope) => format!("subgraph `{scope}` is missing the `{field}` field"),
        None => format!("document is missing the `{field}` field"),
    };
    ParseError::new(ErrorCode::E100, message)
        .with_help("a NIR graph document needs both `nodes` and `edges`")
}

/// Converts a `serde_json` error, moving its position into a [`Location`].
fn json_error(err: serde_json::Error) -> ParseError {
    let code = match err.classify() {
        Category::Data => ErrorCode::E101,
        Category::Io | Category::Syntax | Category::Eof => ErrorCode::E001,
    };

    let text = err.to_string();
    if err.line() == 0 {
        return ParseError::new(code, text);
    }

    let message = text
        .rsplit_once(" at line ")
        .map(|(message, _)| message.to_string())
        .unwrap_or(text);
    ParseError::new(code, message).with_location(Location::new(err.line(), err.column()))
}
