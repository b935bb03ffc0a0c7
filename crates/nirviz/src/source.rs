//! I/O capabilities used by the pipeline.
//!
//! Reading artifacts and writing diagrams go through [`GraphSource`] and
//! [`DiagramSink`] so the pipeline can run against in-memory fakes.
//! [`FileSystem`] is the implementation backed by the local disk.

use std::{fs, io::Write, path::Path};

use log::{debug, trace};
use tempfile::NamedTempFile;

use nirviz_core::graph::RawGraph;

use crate::NirvizError;

/// Reads a model artifact and deserializes it into a [`RawGraph`].
pub trait GraphSource {
    /// Reads the artifact at `path`.
    ///
    /// # Errors
    ///
    /// Returns [`NirvizError`] when the artifact cannot be read or is not a
    /// well-formed graph.
    fn read(&self, path: &Path) -> Result<RawGraph, NirvizError>;
}

/// Persists rendered diagram text.
pub trait DiagramSink {
    /// Writes `text` to `path`, replacing any existing content.
    ///
    /// # Errors
    ///
    /// Returns [`NirvizError::Write`] when the text cannot be stored.
    fn write(&self, path: &Path, text: &str) -> Result<(), NirvizError>;
}

/// Local file system access.
///
/// Writes go to a temporary file in the destination directory which is then
/// renamed over the target, so a failed write never leaves a partial file.
#[derive(Debug, Clone, Copy, Default)]
pub struct FileSystem;

impl GraphSource for FileSystem {
    fn read(&self, path: &Path) -> Result<RawGraph, NirvizError> {
        let bytes = fs::read(path)?;
        debug!(path = path.display().to_string(), bytes_count = bytes.len(); "Read model artifact");

        let file_name = path
            .file_name()
            .map(|name| name.to_string_lossy())
            .unwrap_or_default();
        let graph = nirviz_parser::parse(&bytes, &file_name)?;
        trace!(graph:?; "Deserialized graph");

        Ok(graph)
    }
}

impl DiagramSink for FileSystem {
    fn write(&self, path: &Path, text: &str) -> Result<(), NirvizError> {
        let parent = match path.parent() {
            Some(dir) if !dir.as_os_str().is_empty() => dir,
            _ => Path::new("."),
        };

        let mut file =
            NamedTempFile::new_in(parent).map_err(|err| NirvizError::new_write_error(path, err))?;
        file.write_all(text.as_bytes())
            .map_err(|err| NirvizError::new_write_error(path, err))?;
        file.persist(path)
            .map_err(|err| NirvizError::new_write_error(path, err.error))?;

        debug!(path = path.display().to_string(), bytes_count = text.len(); "Wrote output");
        Ok(())
    }
}
