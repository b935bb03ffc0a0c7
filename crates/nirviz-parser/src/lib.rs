//! Reader for NIR model graph artifacts.
//!
//! This crate turns a persisted NIR graph into a [`RawGraph`]: the nodes in
//! declaration order with their [`NodeKind`](nirviz_core::node::NodeKind),
//! plus the declared edge list. Parameters such as weights or time constants
//! are skipped; only topology is read.
//!
//! # Supported formats
//!
//! JSON documents, and with the `hdf5` feature HDF5 containers as written by
//! `nir.write`. The format is sniffed from the content, so a `.nir` file may
//! be either. Without the feature, HDF5 containers are recognized and
//! rejected with [`ErrorCode::E002`](error::ErrorCode::E002).
//!
//! # Example
//!
//! ```
//! let source = br#"{
//!     "nodes": {
//!         "input": {"type": "Input", "shape": [784]},
//!         "fc": {"type": "Linear", "weight": [[0.1]]},
//!         "output": {"type": "Output", "shape": [10]}
//!     },
//!     "edges": [["input", "fc"], ["fc", "output"]]
//! }"#;
//!
//! let graph = nirviz_parser::parse(source, "model.json").expect("Failed to parse");
//! assert_eq!(graph.nodes().len(), 3);
//! assert_eq!(graph.edges().len(), 2);
//! ```

pub mod error;
pub mod format;

#[cfg(feature = "hdf5")]
mod container;
mod document;

use log::{debug, info};

use nirviz_core::graph::RawGraph;

use document::GraphDocument;
use error::ParseError;
use format::Format;

/// Parse an artifact named `file_name` with content `bytes`.
///
/// The name is only used to check the extension and for messages.
///
/// # Errors
///
/// Returns a [`ParseError`] if the format is not supported, the document is
/// malformed, or a node type is unknown.
pub fn parse(bytes: &[u8], file_name: &str) -> Result<RawGraph, ParseError> {
    info!(file_name = file_name; "Reading NIR artifact");
    match format::detect(bytes, file_name)? {
        Format::Json => parse_json(bytes),
        #[cfg(feature = "hdf5")]
        Format::Hdf5 => parse_hdf5(bytes),
        #[cfg(not(feature = "hdf5"))]
        Format::Hdf5 => Err(format::hdf5_disabled(file_name)),
    }
}

/// Parse a JSON document without any file-name checks.
///
/// # Errors
///
/// Returns a [`ParseError`] if the document is malformed or a node type is
/// unknown.
pub fn parse_json(bytes: &[u8]) -> Result<RawGraph, ParseError> {
    let graph = GraphDocument::from_slice(bytes)?.into_raw_graph()?;

    debug!(
        nodes_count = graph.nodes().len(),
        edges_count = graph.edges().len();
        "NIR graph parsed"
    );

    Ok(graph)
}

/// Parse an HDF5 container without any file-name checks.
///
/// # Errors
///
/// Returns a [`ParseError`] if the container cannot be opened, its layout is
/// not a NIR graph, or a node type is unknown.
#[cfg(feature = "hdf5")]
pub fn parse_hdf5(bytes: &[u8]) -> Result<RawGraph, ParseError> {
    let graph = container::read(bytes)?.into_raw_graph()?;

    debug!(
        nodes_count = graph.nodes().len(),
        edges_count = graph.edges().len();
        "NIR container parsed"
    );

    Ok(graph)
}
