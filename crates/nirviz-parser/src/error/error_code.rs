//! Error codes for NIR artifact parsing.
//!
//! Error codes are organized by phase:
//! - `E0xx` - Format detection errors
//! - `E1xx` - Document structure errors
//! - `E2xx` - Graph content errors

use std::fmt;

/// Error codes for categorizing parse errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // =========================================================================
    // Format Errors (E0xx)
    // =========================================================================
    /// Invalid JSON.
    ///
    /// The artifact is not well-formed JSON.
    E001,

    /// HDF5 support not enabled.
    ///
    /// The artifact is an HDF5 container, but the crate was built without
    /// the `hdf5` feature.
    E002,

    /// Unsupported file extension.
    ///
    /// Artifacts must use the `.nir`, `.json`, `.h5` or `.hdf5` extension.
    E003,

    /// Malformed HDF5 container.
    ///
    /// The container cannot be opened, or a group or dataset of the graph
    /// layout has an unexpected shape or type.
    E004,

    // =========================================================================
    // Document Errors (E1xx)
    // =========================================================================
    /// Missing required field.
    ///
    /// The document lacks a `nodes` or `edges` field.
    E100,

    /// Malformed document.
    ///
    /// A field has the wrong JSON type, e.g. `nodes` is an array.
    E101,

    // =========================================================================
    // Graph Errors (E2xx)
    // =========================================================================
    /// Unknown node type.
    ///
    /// A node's `type` tag does not name a known NIR node.
    E200,

    /// Missing node type.
    ///
    /// A node has no `type` tag.
    E201,

    /// Malformed edge.
    ///
    /// An edge is not a `[source, target]` pair of strings.
    E202,
}

impl ErrorCode {
    /// Returns the numeric code as a string (e.g., "E001").
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::E001 => "E001",
            ErrorCode::E002 => "E002",
            ErrorCode::E003 => "E003",
            ErrorCode::E004 => "E004",
            ErrorCode::E100 => "E100",
            ErrorCode::E101 => "E101",
            ErrorCode::E200 => "E200",
            ErrorCode::E201 => "E201",
            ErrorCode::E202 => "E202",
        }
    }

    /// Returns a short description of what this error code means.
    pub fn description(&self) -> &'static str {
        match self {
            ErrorCode::E001 => "invalid JSON",
            ErrorCode::E002 => "HDF5 support not enabled",
            ErrorCode::E003 => "unsupported file extension",
            ErrorCode::E004 => "malformed HDF5 container",
            ErrorCode::E100 => "missing required field",
            ErrorCode::E101 => "malformed document",
            ErrorCode::E200 => "unknown node type",
            ErrorCode::E201 => "missing node type",
            ErrorCode::E202 => "malformed edge",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
