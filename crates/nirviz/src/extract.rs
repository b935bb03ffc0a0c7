//! Topology extraction.
//!
//! [`GraphExtractor`] turns a model artifact into an [`ExtractionResult`].
//! Nodes get positional ids `node_0`, `node_1`, ... in declaration order and
//! keep their NIR type tag. How connections are built is chosen by
//! [`ConnectivityPolicy`].
//!
//! Extraction never returns an error: any failure to read the artifact is
//! folded into [`ExtractionResult::Failure`] so that it can still be rendered.

use std::{fmt, path::Path, str::FromStr};

use log::{debug, info, trace, warn};
use serde::Deserialize;

use nirviz_core::{
    graph::RawGraph,
    node::NodeKind,
    structure::{ConnectionRecord, ExtractionResult, Metadata, ModelStructure, NodeRecord},
};

use crate::{NirvizError, source::GraphSource};

/// How connections between extracted nodes are derived.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConnectivityPolicy {
    /// Connect every node to the next one in declaration order, ignoring
    /// the declared edges. Branching or merging models are drawn as a
    /// straight line.
    #[default]
    LinearChain,

    /// Use the edges declared by the artifact, in declaration order.
    TrueEdges,
}

impl ConnectivityPolicy {
    pub fn as_str(&self) -> &'static str {
        match self {
            ConnectivityPolicy::LinearChain => "linear-chain",
            ConnectivityPolicy::TrueEdges => "true-edges",
        }
    }
}

impl fmt::Display for ConnectivityPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ConnectivityPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "linear-chain" | "linear_chain" => Ok(ConnectivityPolicy::LinearChain),
            "true-edges" | "true_edges" => Ok(ConnectivityPolicy::TrueEdges),
            other => Err(format!(
                "unknown connectivity policy `{other}` (expected `linear-chain` or `true-edges`)"
            )),
        }
    }
}

/// Converts model artifacts into [`ExtractionResult`]s.
#[derive(Debug, Clone, Copy, Default)]
pub struct GraphExtractor {
    policy: ConnectivityPolicy,
}

impl GraphExtractor {
    /// Creates an extractor using `policy` to build connections.
    pub fn new(policy: ConnectivityPolicy) -> Self {
        Self { policy }
    }

    pub fn policy(&self) -> ConnectivityPolicy {
        self.policy
    }

    /// Reads the artifact at `path` through `source` and extracts its topology.
    ///
    /// A read failure becomes [`ExtractionResult::Failure`] carrying the
    /// error's message. I/O failures carry the underlying cause only.
    pub fn extract(&self, source: &dyn GraphSource, path: &Path) -> ExtractionResult {
        info!(
            path = path.display().to_string(),
            policy = self.policy.as_str();
            "Extracting model topology"
        );

        match source.read(path) {
            Ok(graph) => self.extract_graph(&graph, &model_name(path)),
            Err(err) => {
                warn!(error = err.to_string(); "Failed to read model");
                match err {
                    NirvizError::Io(cause) => ExtractionResult::failure(cause),
                    other => ExtractionResult::failure(other),
                }
            }
        }
    }

    /// Extracts the topology of an already deserialized graph.
    pub fn extract_graph(&self, graph: &RawGraph, model_name: &str) -> ExtractionResult {
        let nodes: Vec<NodeRecord> = graph
            .nodes()
            .iter()
            .enumerate()
            .map(|(index, node)| NodeRecord::positional(index, node.kind().as_str()))
            .collect();

        let connections = match self.policy {
            ConnectivityPolicy::LinearChain => {
                if !graph.is_linear_chain() {
                    warn!(
                        declared_edges = graph.edges().len();
                        "Declared edges differ from declaration order; drawing a linear chain"
                    );
                }
                chain_connections(&nodes)
            }
            ConnectivityPolicy::TrueEdges => match declared_connections(graph) {
                Ok(connections) => connections,
                Err(err) => {
                    warn!(error = err.to_string(); "Invalid edge in model");
                    return ExtractionResult::failure(err);
                }
            },
        };

        debug!(
            version = graph.version_or_default(),
            nodes_count = nodes.len(),
            connections_count = connections.len(),
            neuron_layers = graph.nodes().iter().filter(|n| n.kind().is_neuron()).count();
            "Topology extracted"
        );

        let metadata = Metadata::nir(nodes.len());
        let structure = ModelStructure::new(nodes, connections);
        trace!(structure:?; "Extracted structure");

        ExtractionResult::Success {
            model_name: model_name.to_string(),
            structure,
            metadata,
        }
    }
}

/// Connects each node to its successor.
fn chain_connections(nodes: &[NodeRecord]) -> Vec<ConnectionRecord> {
    nodes
        .windows(2)
        .map(|pair| ConnectionRecord::forward(pair[0].id(), pair[1].id()))
        .collect()
}

/// Maps declared edges onto positional ids.
///
/// An edge into or out of a nested graph names the inner node as
/// `block.inner`; it resolves to the `NIRGraph` node `block`, which is drawn
/// as a single node.
fn declared_connections(graph: &RawGraph) -> Result<Vec<ConnectionRecord>, NirvizError> {
    let id_of = |name: &str| {
        graph
            .position(name)
            .or_else(|| subgraph_position(graph, name))
            .map(nirviz_core::structure::positional_id)
            .ok_or_else(|| NirvizError::UnknownNode(name.to_string()))
    };

    graph
        .edges()
        .iter()
        .map(|edge| -> Result<ConnectionRecord, NirvizError> {
            Ok(ConnectionRecord::forward(
                id_of(edge.source())?,
                id_of(edge.target())?,
            ))
        })
        .collect()
}

/// Position of the `NIRGraph` node owning the dotted reference `name`.
fn subgraph_position(graph: &RawGraph, name: &str) -> Option<usize> {
    let (prefix, _) = name.split_once('.')?;
    let index = graph.position(prefix)?;
    (graph.nodes()[index].kind() == NodeKind::NIRGraph).then_some(index)
}

/// Returns the final component of `path`, extension included.
fn model_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}


#[cfg(test)]
mod proptest_tests {
    use proptest::prelude::*;

    use nirviz_core::{graph::RawNode, node::NodeKind};

    use super::*;

    // ===================
    // Strategies
    // ===================

    fn graph_strategy() -> impl Strategy<Value = RawGraph> {
        prop::collection::vec(prop::sample::select(NodeKind::ALL.to_vec()), 0..40).prop_map(
            |kinds| {
                let nodes = kinds
                    .into_iter()
                    .enumerate()
                    .map(|(i, kind)| RawNode::new(format!("n{i}"), kind))
                    .collect();
                RawGraph::new(nodes, Vec::new())
            },
        )
    }

    // ===================
    // Property Test Functions
    // ===================

    /// N nodes give N records and max(N-1, 0) chained connections in order.
    fn check_linear_chain_shape(graph: &RawGraph) -> Result<(), TestCaseError> {
        let result = GraphExtractor::default().extract_graph(graph, "model.json");
        let structure = result
            .structure()
            .ok_or_else(|| TestCaseError::fail("extraction failed"))?;

        let n = graph.nodes().len();
        prop_assert_eq!(structure.nodes().len(), n);
        prop_assert_eq!(structure.connections().len(), n.saturating_sub(1));

        for (i, (record, node)) in structure.nodes().iter().zip(graph.nodes()).enumerate() {
            prop_assert_eq!(record.id(), format!("node_{i}"));
            prop_assert_eq!(record.kind(), node.kind().as_str());
        }
        for (i, conn) in structure.connections().iter().enumerate() {
            prop_assert_eq!(conn.from(), structure.nodes()[i].id());
            prop_assert_eq!(conn.to(), structure.nodes()[i + 1].id());
        }
        Ok(())
    }

    // ===================
    // Proptest Wrappers
    // ===================

    proptest! {
        #[test]
        fn linear_chain_shape(graph in graph_strategy()) {
            check_linear_chain_shape(&graph)?;
        }
    }
}
