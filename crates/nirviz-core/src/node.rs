//! Node kinds of a NIR model graph.
//!
//! Every computational unit in a NIR graph carries a type tag such as
//! `"Linear"` or `"LIF"`. [`NodeKind`] is the closed set of tags this crate
//! understands; each variant reports its own tag through [`NodeKind::as_str`].

use std::{fmt, str::FromStr};

use thiserror::Error;

/// Error returned when a type tag does not name a known [`NodeKind`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown node type `{0}`")]
pub struct UnknownNodeKind(pub String);

/// The computational role of a node in a NIR graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeKind {
    // =========================================================================
    // Graph boundaries
    // =========================================================================
    /// Graph input.
    Input,

    /// Graph output.
    Output,

    // =========================================================================
    // Stateless transforms
    // =========================================================================
    /// Weight matrix with bias.
    Affine,

    /// Weight matrix without bias.
    Linear,

    /// Element-wise scaling.
    Scale,

    /// Heaviside threshold.
    Threshold,

    /// Per-element delay.
    Delay,

    /// Reshape collapsing a range of dimensions.
    Flatten,

    /// One dimensional convolution.
    Conv1d,

    /// Two dimensional convolution.
    Conv2d,

    /// Two dimensional sum pooling.
    SumPool2d,

    /// Two dimensional average pooling.
    AvgPool2d,

    // =========================================================================
    // Neuron models
    // =========================================================================
    /// Leaky integrate-and-fire neuron.
    LIF,

    /// Leaky integrator.
    LI,

    /// Integrate-and-fire neuron.
    IF,

    /// Pure integrator. Serialized with the tag `I`.
    Integrator,

    /// Current-based leaky integrate-and-fire neuron.
    CubaLIF,

    /// Current-based leaky integrator.
    CubaLI,

    // =========================================================================
    // Composition
    // =========================================================================
    /// A nested NIR graph used as a single node.
    NIRGraph,
}

impl NodeKind {
    /// Every known kind, in declaration order.
    pub const ALL: [NodeKind; 19] = [
        NodeKind::Input,
        NodeKind::Output,
        NodeKind::Affine,
        NodeKind::Linear,
        NodeKind::Scale,
        NodeKind::Threshold,
        NodeKind::Delay,
        NodeKind::Flatten,
        NodeKind::Conv1d,
        NodeKind::Conv2d,
        NodeKind::SumPool2d,
        NodeKind::AvgPool2d,
        NodeKind::LIF,
        NodeKind::LI,
        NodeKind::IF,
        NodeKind::Integrator,
        NodeKind::CubaLIF,
        NodeKind::CubaLI,
        NodeKind::NIRGraph,
    ];

    /// Returns the NIR type tag of this kind (e.g., `"LIF"`).
    pub fn as_str(&self) -> &'static str {
        match self {
            NodeKind::Input => "Input",
            NodeKind::Output => "Output",
            NodeKind::Affine => "Affine",
            NodeKind::Linear => "Linear",
            NodeKind::Scale => "Scale",
            NodeKind::Threshold => "Threshold",
            NodeKind::Delay => "Delay",
            NodeKind::Flatten => "Flatten",
            NodeKind::Conv1d => "Conv1d",
            NodeKind::Conv2d => "Conv2d",
            NodeKind::SumPool2d => "SumPool2d",
            NodeKind::AvgPool2d => "AvgPool2d",
            NodeKind::LIF => "LIF",
            NodeKind::LI => "LI",
            NodeKind::IF => "IF",
            NodeKind::Integrator => "I",
            NodeKind::CubaLIF => "CubaLIF",
            NodeKind::CubaLI => "CubaLI",
            NodeKind::NIRGraph => "NIRGraph",
        }
    }

    /// Returns `true` for kinds that carry neuron state.
    pub fn is_neuron(&self) -> bool {
        matches!(
            self,
            NodeKind::LIF
                | NodeKind::LI
                | NodeKind::IF
                | NodeKind::Integrator
                | NodeKind::CubaLIF
                | NodeKind::CubaLI
        )
    }
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for NodeKind {
    type Err = UnknownNodeKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        NodeKind::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| UnknownNodeKind(s.to_string()))
    }
}
