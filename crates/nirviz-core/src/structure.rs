//! Normalized topology produced by extraction.
//!
//! These types are derived from a [`RawGraph`](crate::graph::RawGraph) and
//! never mutated afterwards. They serialize to the JSON report shape used by
//! the `nirviz` export.

use std::fmt;

use serde::Serialize;

/// Model format tag stored in [`Metadata`].
pub const MODEL_TYPE_NIR: &str = "NIR";

/// One node of the extracted topology.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NodeRecord {
    id: String,
    #[serde(rename = "type")]
    kind: String,
    name: String,
}

impl NodeRecord {
    /// Creates a node record.
    ///
    /// # Arguments
    ///
    /// * `id` - Identifier unique within one [`ModelStructure`].
    /// * `kind` - The node's type tag (e.g., `"Linear"`).
    /// * `name` - Display name.
    pub fn new(id: impl Into<String>, kind: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            kind: kind.into(),
            name: name.into(),
        }
    }

    /// Creates the record for the node at declaration index `index`.
    ///
    /// Both the id and the name are the positional token `node_<index>`.
    pub fn positional(index: usize, kind: impl Into<String>) -> Self {
        let id = positional_id(index);
        Self::new(id.clone(), kind, id)
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn kind(&self) -> &str {
        &self.kind
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

/// Returns the positional token `node_<index>`.
pub fn positional_id(index: usize) -> String {
    format!("node_{index}")
}

/// The kind of a connection between two nodes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ConnectionKind {
    /// Data flows from source to target.
    #[default]
    Forward,
}

impl ConnectionKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ConnectionKind::Forward => "forward",
        }
    }
}

impl fmt::Display for ConnectionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A directed connection between two [`NodeRecord`] ids.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConnectionRecord {
    from: String,
    to: String,
    #[serde(rename = "type")]
    kind: ConnectionKind,
}

impl ConnectionRecord {
    pub fn new(from: impl Into<String>, to: impl Into<String>, kind: ConnectionKind) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
            kind,
        }
    }

    /// Creates a [`ConnectionKind::Forward`] connection.
    pub fn forward(from: impl Into<String>, to: impl Into<String>) -> Self {
        Self::new(from, to, ConnectionKind::Forward)
    }

    pub fn from(&self) -> &str {
        &self.from
    }

    pub fn to(&self) -> &str {
        &self.to
    }

    pub fn kind(&self) -> ConnectionKind {
        self.kind
    }
}

/// Nodes and connections of one extracted model.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ModelStructure {
    nodes: Vec<NodeRecord>,
    connections: Vec<ConnectionRecord>,
}

impl ModelStructure {
    pub fn new(nodes: Vec<NodeRecord>, connections: Vec<ConnectionRecord>) -> Self {
        Self { nodes, connections }
    }

    /// Returns the nodes in declaration order.
    pub fn nodes(&self) -> &[NodeRecord] {
        &self.nodes
    }

    /// Returns the connections in declaration order.
    pub fn connections(&self) -> &[ConnectionRecord] {
        &self.connections
    }
}

/// Summary information attached to a successful extraction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Metadata {
    model_type: String,
    total_parameters: usize,
}

impl Metadata {
    pub fn new(model_type: impl Into<String>, total_parameters: usize) -> Self {
        Self {
            model_type: model_type.into(),
            total_parameters,
        }
    }

    /// Metadata for a NIR model with `node_count` nodes.
    pub fn nir(node_count: usize) -> Self {
        Self::new(MODEL_TYPE_NIR, node_count)
    }

    pub fn model_type(&self) -> &str {
        &self.model_type
    }

    /// Returns the parameter count. For NIR models this is the node count.
    pub fn total_parameters(&self) -> usize {
        self.total_parameters
    }
}

/// Outcome of extracting a model's topology.
///
/// Extraction never fails through a `Result`; a deserialization problem is
/// carried as [`ExtractionResult::Failure`] so it can still be rendered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExtractionResult {
    Success {
        model_name: String,
        structure: ModelStructure,
        metadata: Metadata,
    },
    Failure {
        error: String,
    },
}

impl ExtractionResult {
    /// Creates a failure carrying the stringified cause.
    pub fn failure(error: impl fmt::Display) -> Self {
        Self::Failure {
            error: error.to_string(),
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, ExtractionResult::Success { .. })
    }

    /// Returns the model name on success.
    pub fn model_name(&self) -> Option<&str> {
        match self {
            ExtractionResult::Success { model_name, .. } => Some(model_name),
            ExtractionResult::Failure { .. } => None,
        }
    }

    /// Returns the structure on success.
    pub fn structure(&self) -> Option<&ModelStructure> {
        match self {
            ExtractionResult::Success { structure, .. } => Some(structure),
            ExtractionResult::Failure { .. } => None,
        }
    }

    /// Returns the metadata on success.
    pub fn metadata(&self) -> Option<&Metadata> {
        match self {
            ExtractionResult::Success { metadata, .. } => Some(metadata),
            ExtractionResult::Failure { .. } => None,
        }
    }

    /// Returns the error message on failure.
    pub fn error(&self) -> Option<&str> {
        match self {
            ExtractionResult::Success { .. } => None,
            ExtractionResult::Failure { error } => Some(error),
        }
    }
}
