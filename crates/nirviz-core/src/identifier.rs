//! Diagram-safe node identifiers.
//!
//! Mermaid node identifiers may not contain `.`, `-` or spaces and should
//! not start with a digit or punctuation. [`DiagramId`] wraps a raw id after
//! rewriting it with [`sanitize`].

use std::fmt;

/// Prefix added to ids that do not start with an alphabetic character.
const ID_PREFIX: &str = "node_";

/// Rewrites `raw` into a legal diagram node identifier.
///
/// Every `.`, `-` and space becomes `_`. A non-empty result whose first
/// character is not alphabetic is prefixed with `node_`. The empty string
/// stays empty. Applying `sanitize` twice gives the same result as once.
///
/// # Examples
///
/// ```
/// use nirviz_core::identifier::sanitize;
///
/// assert_eq!(sanitize("node_0"), "node_0");
/// assert_eq!(sanitize("3.layer-a b"), "node_3_layer_a_b");
/// assert_eq!(sanitize(""), "");
/// ```
pub fn sanitize(raw: &str) -> String {
    let replaced: String = raw
        .chars()
        .map(|c| match c {
            '.' | '-' | ' ' => '_',
            other => other,
        })
        .collect();

    match replaced.chars().next() {
        Some(first) if !first.is_alphabetic() => format!("{ID_PREFIX}{replaced}"),
        _ => replaced,
    }
}

/// A sanitized diagram node identifier.
///
/// # Examples
///
/// ```
/// use nirviz_core::identifier::DiagramId;
///
/// let id = DiagramId::new("0.input");
/// assert_eq!(id, "node_0_input");
/// assert_eq!(id.to_string(), "node_0_input");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DiagramId(String);

impl DiagramId {
    /// Creates a `DiagramId` by sanitizing `raw`.
    pub fn new(raw: &str) -> Self {
        Self(sanitize(raw))
    }

    /// Returns the sanitized identifier.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for DiagramId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for DiagramId {
    fn from(raw: &str) -> Self {
        Self::new(raw)
    }
}

impl PartialEq<str> for DiagramId {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for DiagramId {
    fn eq(&self, other: &&str) -> bool {
        self == *other
    }
}
