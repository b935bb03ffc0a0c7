//! Output formats for extraction results.
//!
//! [`mermaid`] produces the diagram text and [`json`] the machine-readable
//! report.

pub mod json;
pub mod mermaid;
