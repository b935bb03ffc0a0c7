//! Configuration types for nirviz.
//!
//! All types implement [`serde::Deserialize`] so they can be loaded from a
//! TOML file. Every section and field is optional and falls back to its
//! default.
//!
//! # Overview
//!
//! - [`AppConfig`] - Top-level configuration combining extraction and render settings.
//! - [`ExtractionConfig`] - Controls how connections are derived ([`ConnectivityPolicy`]).
//! - [`RenderConfig`] - Controls the Mermaid output ([`Direction`]).
//!
//! # Example
//!
//! ```
//! # use nirviz::config::AppConfig;
//! # use nirviz::extract::ConnectivityPolicy;
//! let config = AppConfig::default();
//! assert_eq!(config.extraction().connectivity(), ConnectivityPolicy::LinearChain);
//! ```

use serde::Deserialize;

use crate::{export::mermaid::Direction, extract::ConnectivityPolicy};

/// Top-level configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Extraction configuration section.
    #[serde(default)]
    extraction: ExtractionConfig,

    /// Render configuration section.
    #[serde(default)]
    render: RenderConfig,
}

impl AppConfig {
    /// Creates a new [`AppConfig`] from its sections.
    ///
    /// # Arguments
    ///
    /// * `extraction` - How the topology is extracted.
    /// * `render` - How the diagram is written.
    pub fn new(extraction: ExtractionConfig, render: RenderConfig) -> Self {
        Self { extraction, render }
    }

    /// Returns a copy with the connectivity policy replaced by `connectivity`.
    pub fn with_connectivity(mut self, connectivity: ConnectivityPolicy) -> Self {
        self.extraction.connectivity = connectivity;
        self
    }

    /// Returns the extraction configuration.
    pub fn extraction(&self) -> &ExtractionConfig {
        &self.extraction
    }

    /// Returns the render configuration.
    pub fn render(&self) -> &RenderConfig {
        &self.render
    }
}

/// Extraction settings.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ExtractionConfig {
    #[serde(default)]
    connectivity: ConnectivityPolicy,
}

impl ExtractionConfig {
    pub fn new(connectivity: ConnectivityPolicy) -> Self {
        Self { connectivity }
    }

    /// Returns the [`ConnectivityPolicy`] used to build connections.
    pub fn connectivity(&self) -> ConnectivityPolicy {
        self.connectivity
    }
}

/// Mermaid output settings.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RenderConfig {
    /// Layout [`Direction`] of successful diagrams.
    #[serde(default)]
    direction: Direction,
}

impl RenderConfig {
    pub fn new(direction: Direction) -> Self {
        Self { direction }
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }
}
