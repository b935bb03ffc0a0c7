//! Command-line argument definitions for the nirviz CLI.
//!
//! This module defines the [`Args`] structure parsed from the command line
//! using [`clap`]. Arguments control the model and output paths, configuration
//! file selection, connectivity, and logging verbosity.

use clap::Parser;

use nirviz::extract::ConnectivityPolicy;

/// Render a NIR model graph as a Mermaid flowchart
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Path to the NIR model (.json or .nir)
    #[arg(help = "Path to the input model")]
    pub input: String,

    /// Path to the output Mermaid file [default: <MODEL stem>_diagram.mmd]
    #[arg(short, long)]
    pub output: Option<String>,

    /// Path to configuration file (TOML)
    #[arg(short, long)]
    pub config: Option<String>,

    /// How connections are derived (linear-chain, true-edges); overrides the config file
    #[arg(long)]
    pub connectivity: Option<ConnectivityPolicy>,

    /// Also write the extraction result as a JSON report to this path
    #[arg(long)]
    pub json: Option<String>,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long, default_value = "info")]
    pub log_level: String,
}
