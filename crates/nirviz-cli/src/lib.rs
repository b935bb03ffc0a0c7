//! CLI logic for the nirviz tool.
//!
//! This module contains the core CLI logic: it reads a NIR model, extracts
//! its topology, and writes the Mermaid diagram (and optionally a JSON
//! report).

pub mod error_adapter;

mod args;
mod config;

pub use args::Args;

use std::path::{Path, PathBuf};

use log::{info, warn};

use nirviz::{
    DiagramBuilder, NirvizError,
    source::{DiagramSink, FileSystem},
    structure::ExtractionResult,
};

/// Run the nirviz CLI application
///
/// This function processes the input model through the nirviz pipeline
/// and writes the resulting Mermaid text to the output file. When the model
/// cannot be read, the error diagram is written instead and the run fails.
///
/// # Arguments
///
/// * `args` - Command-line arguments
///
/// # Errors
///
/// Returns `NirvizError` for:
/// - A missing input file (nothing is written)
/// - Configuration loading errors
/// - Extraction failures (after the error diagram is written)
/// - Write errors
pub fn run(args: &Args) -> Result<(), NirvizError> {
    let input = Path::new(&args.input);
    let output = args
        .output
        .as_ref()
        .map(PathBuf::from)
        .unwrap_or_else(|| default_output_path(input));

    info!(
        input_path = args.input,
        output_path = output.display().to_string();
        "Processing model"
    );

    if !input.exists() {
        return Err(NirvizError::InputNotFound(input.to_path_buf()));
    }

    let mut app_config = config::load_config(args.config.as_ref())?;
    if let Some(policy) = args.connectivity {
        app_config = app_config.with_connectivity(policy);
    }

    let builder = DiagramBuilder::new(app_config);
    let result = builder.extract(&FileSystem, input);

    FileSystem.write(&output, &builder.render_mermaid(&result))?;
    info!(output_file = output.display().to_string(); "Mermaid diagram written");

    if let Some(json_path) = &args.json {
        FileSystem.write(Path::new(json_path), &builder.export_json(&result)?)?;
        info!(output_file = json_path; "JSON report written");
    }

    match result {
        ExtractionResult::Success { .. } => Ok(()),
        ExtractionResult::Failure { error } => {
            warn!(output_file = output.display().to_string(); "Wrote error diagram");
            Err(NirvizError::Extraction(error))
        }
    }
}

/// Returns `<input stem>_diagram.mmd` in the current directory.
pub fn default_output_path(input: &Path) -> PathBuf {
    let stem = input
        .file_stem()
        .map(|stem| stem.to_string_lossy())
        .unwrap_or_else(|| "model".into());
    PathBuf::from(format!("{stem}_diagram.mmd"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_output_path() {
        assert_eq!(
            default_output_path(Path::new("models/simple_snn.nir")),
            PathBuf::from("simple_snn_diagram.mmd")
        );
        assert_eq!(
            default_output_path(Path::new("complex.model.json")),
            PathBuf::from("complex.model_diagram.mmd")
        );
        assert_eq!(
            default_output_path(Path::new("")),
            PathBuf::from("model_diagram.mmd")
        );
    }
}
