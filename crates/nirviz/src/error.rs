//! Error types for nirviz operations.
//!
//! This module provides the main error type [`NirvizError`] which wraps
//! the error conditions that can occur while reading a model, extracting its
//! topology, and writing diagrams.

use std::{io, path::PathBuf};

use thiserror::Error;

use nirviz_parser::error::ParseError;

/// The main error type for nirviz operations.
///
/// # Diagnostic Variants
///
/// The `Parse` variant carries a coded [`ParseError`] with optional position
/// and help text, which the CLI turns into a rich report.
#[derive(Debug, Error)]
pub enum NirvizError {
    #[error("Input file not found: {}", .0.display())]
    InputNotFound(PathBuf),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("{0}")]
    Parse(#[from] ParseError),

    #[error("Edge references unknown node `{0}`")]
    UnknownNode(String),

    #[error("Extraction failed: {0}")]
    Extraction(String),

    #[error("Failed to write {}: {source}", path.display())]
    Write { path: PathBuf, source: io::Error },

    #[error("Export error: {0}")]
    Export(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl NirvizError {
    /// Create a new `Write` error for `path`.
    pub fn new_write_error(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Write {
            path: path.into(),
            source,
        }
    }
}
