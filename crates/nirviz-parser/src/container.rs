//! HDF5 serialization of a NIR graph.
//!
//! `nir.write` stores the graph under a `node` group holding a `nodes` group
//! (one subgroup per node, each with a `type` string dataset) and an `edges`
//! group with parallel `src` and `dst` string datasets. Older writers store
//! `edges` as a single string dataset of `[source, target]` rows instead;
//! both layouts are read. A root `version` dataset is optional.
//!
//! HDF5 iterates group members by name, so nodes come back in name order,
//! the same order `nir.read` produces.
//!
//! The container is translated into a [`GraphDocument`] so it goes through
//! the same checks and error codes as a JSON document.

use std::io::Write;

use hdf5::{
    File, Group,
    types::{VarLenAscii, VarLenUnicode},
};
use indexmap::IndexMap;
use log::{debug, trace};
use serde_json::Value;
use tempfile::NamedTempFile;

use nirviz_core::node::NodeKind;

use crate::{
    document::{GraphDocument, NodeDocument},
    error::{ErrorCode, ParseError, Result},
};

/// Group holding the top-level graph.
const ROOT_GROUP: &str = "node";

type Subgraph = (Option<IndexMap<String, NodeDocument>>, Option<Vec<Value>>);

/// Reads an HDF5 container into a document.
pub(crate) fn read(bytes: &[u8]) -> Result<GraphDocument> {
    // The HDF5 library opens files by path only.
    let mut staged = NamedTempFile::new().map_err(staging_error)?;
    staged.write_all(bytes).map_err(staging_error)?;
    staged.flush().map_err(staging_error)?;

    let file = File::open(staged.path()).map_err(hdf5_error)?;
    let version = if file.link_exists("version") {
        Some(read_string(&file, "version")?)
    } else {
        None
    };

    let root = if file.link_exists(ROOT_GROUP) {
        file.group(ROOT_GROUP).map_err(hdf5_error)?
    } else {
        debug!("Container has no `node` group, reading the root group");
        file.as_group().map_err(hdf5_error)?
    };

    let (nodes, edges) = read_graph(&root)?;
    Ok(GraphDocument::new(nodes, edges, version))
}

fn read_graph(group: &Group) -> Result<Subgraph> {
    let nodes = if group.link_exists("nodes") {
        let nodes = group.group("nodes").map_err(hdf5_error)?;
        Some(read_nodes(&nodes)?)
    } else {
        None
    };
    Ok((nodes, read_edges(group)?))
}

fn read_nodes(group: &Group) -> Result<IndexMap<String, NodeDocument>> {
    group
        .member_names()
        .map_err(hdf5_error)?
        .into_iter()
        .map(|name| {
            let node = group.group(&name).map_err(hdf5_error)?;
            let kind = if node.link_exists("type") {
                Some(read_string(&node, "type")?)
            } else {
                None
            };

            let (nodes, edges) = if kind.as_deref() == Some(NodeKind::NIRGraph.as_str()) {
                read_graph(&node)?
            } else {
                (None, None)
            };

            trace!(node = name.as_str(); "Read container node");
            Ok((name, NodeDocument::new(kind, nodes, edges)))
        })
        .collect()
}

fn read_edges(group: &Group) -> Result<Option<Vec<Value>>> {
    if !group.link_exists("edges") {
        return Ok(None);
    }

    let pairs = match group.group("edges") {
        Ok(edges) => {
            let sources = read_strings(&edges, "src")?;
            let targets = read_strings(&edges, "dst")?;
            if sources.len() != targets.len() {
                return Err(ParseError::new(
                    ErrorCode::E202,
                    format!(
                        "edge lists differ in length: {} sources, {} targets",
                        sources.len(),
                        targets.len()
                    ),
                ));
            }
            sources.into_iter().zip(targets).map(edge).collect()
        }
        Err(_) => {
            let flat = read_strings(group, "edges")?;
            if flat.len() % 2 != 0 {
                return Err(ParseError::new(
                    ErrorCode::E202,
                    format!("edge table holds {} names, not [source, target] rows", flat.len()),
                ));
            }
            flat.chunks_exact(2)
                .map(|row| edge((row[0].clone(), row[1].clone())))
                .collect()
        }
    };

    Ok(Some(pairs))
}

fn edge((source, target): (String, String)) -> Value {
    Value::Array(vec![Value::String(source), Value::String(target)])
}

/// Reads a scalar string dataset, UTF-8 first, then ASCII.
fn read_string(group: &Group, name: &str) -> Result<String> {
    let dataset = group.dataset(name).map_err(hdf5_error)?;
    if let Ok(value) = dataset.read_scalar::<VarLenUnicode>() {
        return Ok(value.as_str().to_string());
    }
    dataset
        .read_scalar::<VarLenAscii>()
        .map(|value| value.as_str().to_string())
        .map_err(|err| dataset_error(group, name, err))
}

/// Reads a string dataset of any shape, flattened in row-major order.
fn read_strings(group: &Group, name: &str) -> Result<Vec<String>> {
    let dataset = group.dataset(name).map_err(hdf5_error)?;
    if let Ok(values) = dataset.read_raw::<VarLenUnicode>() {
        return Ok(values.iter().map(|v| v.as_str().to_string()).collect());
    }
    dataset
        .read_raw::<VarLenAscii>()
        .map(|values| values.iter().map(|v| v.as_str().to_string()).collect())
        .map_err(|err| dataset_error(group, name, err))
}

fn dataset_error(group: &Group, name: &str, err: hdf5::Error) -> ParseError {
    ParseError::new(
        ErrorCode::E004,
        format!("dataset `{}/{name}` is not a string: {err}", group.name()),
    )
}

fn hdf5_error(err: hdf5::Error) -> ParseError {
    ParseError::new(ErrorCode::E004, format!("malformed HDF5 container: {err}"))
        .with_help("the container should be written by `nir.write`")
}

fn staging_error(err: std::io::Error) -> ParseError {
    ParseError::new(
        ErrorCode::E004,
        format!("cannot stage HDF5 container for reading: {err}"),
    )
}
