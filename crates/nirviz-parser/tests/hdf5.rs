//! Reading HDF5 containers laid out the way `nir.write` stores them.

#![cfg(feature = "hdf5")]

use std::{fs, path::Path};

use hdf5::{File, Group, types::VarLenUnicode};
use tempfile::tempdir;

use nirviz_core::{graph::RawEdge, node::NodeKind};
use nirviz_parser::{error::ErrorCode, parse, parse_hdf5};

fn unicode(value: &str) -> VarLenUnicode {
    value.parse().expect("valid string")
}

fn write_string(group: &Group, name: &str, value: &str) {
    group
        .new_dataset::<VarLenUnicode>()
        .shape(())
        .create(name)
        .expect("create dataset")
        .write_scalar(&unicode(value))
        .expect("write dataset");
}

fn write_strings(group: &Group, name: &str, values: &[&str]) {
    let values: Vec<VarLenUnicode> = values.iter().map(|value| unicode(value)).collect();
    group
        .new_dataset_builder()
        .with_data(values.as_slice())
        .create(name)
        .expect("create dataset");
}

/// Writes `nodes/<name>/type` for each node and `edges/{src,dst}` into `group`.
fn write_graph(group: &Group, nodes: &[(&str, &str)], edges: &[(&str, &str)]) {
    let node_group = group.create_group("nodes").expect("create nodes");
    for (name, kind) in nodes {
        let node = node_group.create_group(name).expect("create node");
        write_string(&node, "type", kind);
    }

    let edge_group = group.create_group("edges").expect("create edges");
    let sources: Vec<&str> = edges.iter().map(|(source, _)| *source).collect();
    let targets: Vec<&str> = edges.iter().map(|(_, target)| *target).collect();
    write_strings(&edge_group, "src", &sources);
    write_strings(&edge_group, "dst", &targets);
}

fn read_bytes(path: &Path) -> Vec<u8> {
    fs::read(path).expect("read container")
}

#[test]
fn test_container_layout() {
    let dir = tempdir().expect("Failed to create temp directory");
    let path = dir.path().join("snn.nir");
    {
        let file = File::create(&path).expect("create container");
        write_string(&file, "version", "0.5.0");
        let root = file.create_group("node").expect("create root");
        write_string(&root, "type", "NIRGraph");
        write_graph(
            &root,
            &[("a_input", "Input"), ("b_fc", "Affine"), ("c_lif", "LIF"), ("d_output", "Output")],
            &[("a_input", "b_fc"), ("b_fc", "c_lif"), ("c_lif", "d_output")],
        );
    }

    let graph = parse(&read_bytes(&path), "snn.nir").expect("Failed to parse");

    let kinds: Vec<_> = graph.nodes().iter().map(|node| node.kind()).collect();
    assert_eq!(
        kinds,
        [NodeKind::Input, NodeKind::Affine, NodeKind::LIF, NodeKind::Output]
    );
    assert_eq!(graph.edges()[0], RawEdge::new("a_input", "b_fc"));
    assert!(graph.is_linear_chain());
    assert_eq!(graph.version(), Some("0.5.0"));
}

#[test]
fn test_nodes_in_name_order() {
    let dir = tempdir().expect("Failed to create temp directory");
    let path = dir.path().join("order.h5");
    {
        let file = File::create(&path).expect("create container");
        let root = file.create_group("node").expect("create root");
        write_graph(
            &root,
            &[("output", "Output"), ("input", "Input"), ("lif", "LIF")],
            &[("input", "lif"), ("lif", "output")],
        );
    }

    let graph = parse(&read_bytes(&path), "order.h5").expect("Failed to parse");

    let names: Vec<_> = graph.nodes().iter().map(|node| node.name()).collect();
    assert_eq!(names, ["input", "lif", "output"]);
    assert_eq!(graph.version(), None);
}

#[test]
fn test_nested_graph() {
    let dir = tempdir().expect("Failed to create temp directory");
    let path = dir.path().join("nested.nir");
    {
        let file = File::create(&path).expect("create container");
        let root = file.create_group("node").expect("create root");
        write_graph(
            &root,
            &[("block", "NIRGraph"), ("input", "Input"), ("output", "Output")],
            &[("input", "block.in"), ("block.out", "output")],
        );
        let block = root.group("nodes/block").expect("open block");
        write_graph(
            &block,
            &[("in", "Input"), ("lif", "LIF"), ("out", "Output")],
            &[("in", "lif"), ("lif", "out")],
        );
    }

    let graph = parse_hdf5(&read_bytes(&path)).expect("Failed to parse");
    assert_eq!(graph.nodes()[0].kind(), NodeKind::NIRGraph);
    assert_eq!(graph.edges()[1], RawEdge::new("block.out", "output"));
}

#[test]
fn test_edge_table_rows() {
    let dir = tempdir().expect("Failed to create temp directory");
    let path = dir.path().join("table.nir");
    {
        let file = File::create(&path).expect("create container");
        let root = file.create_group("node").expect("create root");
        let nodes = root.create_group("nodes").expect("create nodes");
        for (name, kind) in [("a", "Input"), ("b", "Linear"), ("c", "Output")] {
            let node = nodes.create_group(name).expect("create node");
            write_string(&node, "type", kind);
        }
        write_strings(&root, "edges", &["a", "b", "b", "c"]);
    }

    let graph = parse_hdf5(&read_bytes(&path)).expect("Failed to parse");
    assert_eq!(
        graph.edges(),
        [RawEdge::new("a", "b"), RawEdge::new("b", "c")]
    );
}

#[test]
fn test_unknown_node_type() {
    let dir = tempdir().expect("Failed to create temp directory");
    let path = dir.path().join("unknown.nir");
    {
        let file = File::create(&path).expect("create container");
        let root = file.create_group("node").expect("create root");
        write_graph(&root, &[("x", "Transformer")], &[]);
    }

    let err = parse(&read_bytes(&path), "unknown.nir").unwrap_err();
    assert_eq!(err.code(), ErrorCode::E200);
    assert!(err.message().contains("Transformer"));
}

#[test]
fn test_missing_edges() {
    let dir = tempdir().expect("Failed to create temp directory");
    let path = dir.path().join("no_edges.nir");
    {
        let file = File::create(&path).expect("create container");
        let root = file.create_group("node").expect("create root");
        let nodes = root.create_group("nodes").expect("create nodes");
        let node = nodes.create_group("a").expect("create node");
        write_string(&node, "type", "Input");
    }

    let err = parse(&read_bytes(&path), "no_edges.nir").unwrap_err();
    assert_eq!(err.code(), ErrorCode::E100);
}

#[test]
fn test_mismatched_edge_lists() {
    let dir = tempdir().expect("Failed to create temp directory");
    let path = dir.path().join("edges.nir");
    {
        let file = File::create(&path).expect("create container");
        let root = file.create_group("node").expect("create root");
        let nodes = root.create_group("nodes").expect("create nodes");
        let node = nodes.create_group("a").expect("create node");
        write_string(&node, "type", "Input");
        let edges = root.create_group("edges").expect("create edges");
        write_strings(&edges, "src", &["a", "a"]);
        write_strings(&edges, "dst", &["a"]);
    }

    let err = parse(&read_bytes(&path), "edges.nir").unwrap_err();
    assert_eq!(err.code(), ErrorCode::E202);
}

#[test]
fn test_json_still_parses_with_feature() {
    let graph = parse(br#"{"nodes": {"a": {"type": "Input"}}, "edges": []}"#, "m.nir")
        .expect("Failed to parse");
    assert_eq!(graph.nodes().len(), 1);
}
