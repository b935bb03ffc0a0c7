//! Artifact format detection.
//!
//! NIR graphs are persisted either as HDF5 containers or as JSON documents.
//! HDF5 is recognized by its signature first, so a `.nir` file of either
//! kind dispatches correctly; the extension only decides when the content
//! carries no signature.

use std::path::Path;

use log::debug;

use crate::error::{ErrorCode, ParseError, Result};

/// Magic bytes at the start of every HDF5 file.
pub const HDF5_SIGNATURE: [u8; 8] = [0x89, b'H', b'D', b'F', b'\r', b'\n', 0x1a, b'\n'];

/// Extensions accepted for JSON artifacts.
const JSON_EXTENSIONS: [&str; 2] = ["nir", "json"];

/// Extensions conventionally used for HDF5 artifacts.
const HDF5_EXTENSIONS: [&str; 2] = ["h5", "hdf5"];

/// Serialization of a NIR artifact.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    /// JSON document.
    Json,
    /// HDF5 container, as written by `nir.write`.
    Hdf5,
}

/// Returns `true` if `bytes` start with the HDF5 signature.
pub fn is_hdf5(bytes: &[u8]) -> bool {
    bytes.starts_with(&HDF5_SIGNATURE)
}

/// Detects the format of an artifact named `file_name` with content `bytes`.
///
/// # Errors
///
/// Returns [`ErrorCode::E003`] if the content has no HDF5 signature and the
/// extension is neither a JSON nor an HDF5 one.
pub fn detect(bytes: &[u8], file_name: &str) -> Result<Format> {
    if is_hdf5(bytes) {
        debug!(file_name = file_name; "Detected HDF5 signature");
        return Ok(Format::Hdf5);
    }

    let extension = Path::new(file_name)
        .extension()
        .and_then(|ext| ext.to_str())
        .map(str::to_ascii_lowercase)
        .unwrap_or_default();

    if JSON_EXTENSIONS.contains(&extension.as_str()) {
        Ok(Format::Json)
    } else if HDF5_EXTENSIONS.contains(&extension.as_str()) {
        Ok(Format::Hdf5)
    } else {
        Err(ParseError::new(
            ErrorCode::E003,
            format!("unsupported file extension for `{file_name}`"),
        )
        .with_help("NIR artifacts must use the `.nir`, `.json`, `.h5` or `.hdf5` extension"))
    }
}

/// Error for an HDF5 artifact in a build without the `hdf5` feature.
#[cfg(not(feature = "hdf5"))]
pub(crate) fn hdf5_disabled(file_name: &str) -> ParseError {
    ParseError::new(
        ErrorCode::E002,
        format!("`{file_name}` is an HDF5 container, but HDF5 support is not enabled"),
    )
    .with_help("rebuild with `--features hdf5`, or export the graph as JSON and pass that file")
}
