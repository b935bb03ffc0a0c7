//! nirviz Core Types and Definitions
//!
//! This crate provides the foundational types shared by the nirviz crates:
//!
//! - **Nodes**: The closed set of NIR node kinds ([`node::NodeKind`])
//! - **Graph**: The deserialized, ordered model graph ([`graph::RawGraph`])
//! - **Structure**: Extracted topology and extraction outcome ([`structure`] module)
//! - **Identifiers**: Diagram-safe node identifiers ([`identifier::DiagramId`])

pub mod graph;
pub mod identifier;
pub mod node;
pub mod structure;
