//! nirviz - Mermaid flowcharts for NIR neural network graphs.
//!
//! Reads a NIR model, extracts its layer topology, and renders it as Mermaid
//! text. Failures while reading the model are rendered too, as a small error
//! diagram.

pub mod config;
pub mod export;
pub mod extract;
pub mod source;

mod error;

pub use nirviz_core::{graph, identifier, node, structure};

pub use error::NirvizError;

use std::path::Path;

use log::{debug, info};

use config::AppConfig;
use export::mermaid::DiagramRenderer;
use extract::GraphExtractor;
use source::GraphSource;
use structure::ExtractionResult;

/// Builder for extracting and rendering NIR model diagrams.
///
/// # Examples
///
/// ```rust,no_run
/// use std::path::Path;
///
/// use nirviz::{DiagramBuilder, config::AppConfig, source::FileSystem};
///
/// let builder = DiagramBuilder::new(AppConfig::default());
///
/// // Extraction never fails; a bad model yields an error diagram
/// let result = builder.extract(&FileSystem, Path::new("model.nir"));
/// let mermaid = builder.render_mermaid(&result);
///
/// println!("{}", mermaid);
/// ```
#[derive(Debug, Default)]
pub struct DiagramBuilder {
    config: AppConfig,
}

impl DiagramBuilder {
    /// Create a new diagram builder with the given configuration.
    ///
    /// # Arguments
    ///
    /// * `config` - Application configuration including extraction and render settings
    pub fn new(config: AppConfig) -> Self {
        Self { config }
    }

    /// Returns the configuration this builder was created with.
    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Read the model at `path` through `source` and extract its topology.
    ///
    /// # Arguments
    ///
    /// * `source` - Capability used to read and deserialize the artifact
    /// * `path` - Location of the artifact
    pub fn extract(&self, source: &dyn GraphSource, path: &Path) -> ExtractionResult {
        let extractor = GraphExtractor::new(self.config.extraction().connectivity());
        let result = extractor.extract(source, path);

        match &result {
            ExtractionResult::Success {
                model_name,
                metadata,
                ..
            } => info!(
                model_name = model_name.as_str(),
                nodes_count = metadata.total_parameters();
                "Model extracted"
            ),
            ExtractionResult::Failure { error } => {
                debug!(error = error.as_str(); "Extraction produced a failure")
            }
        }

        result
    }

    /// Render an extraction result as Mermaid text.
    ///
    /// A failure renders as the fixed error diagram.
    pub fn render_mermaid(&self, result: &ExtractionResult) -> String {
        DiagramRenderer::new(self.config.render().direction()).render(result)
    }

    /// Serialize an extraction result as a pretty-printed JSON report.
    ///
    /// # Errors
    ///
    /// Returns [`NirvizError::Export`] if serialization fails.
    pub fn export_json(&self, result: &ExtractionResult) -> Result<String, NirvizError> {
        export::json::to_json(result)
    }
}
