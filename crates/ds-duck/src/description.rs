//! Structured duck snapshot.

use std::fmt;

/// What a duck is and what it currently does, captured at one instant.
///
/// Produced by [`Duck::describe`](crate::Duck::describe).  Later behavior
/// swaps do not alter an existing description.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DuckDescription {
    /// Display name of the duck's kind, e.g. `"Mallard Duck"`.
    pub kind:         String,
    /// Result of the quack behavior at snapshot time.
    pub vocalization: String,
    /// Result of the fly behavior at snapshot time.
    pub flight:       String,
}

impl fmt::Display for DuckDescription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} and {}", self.kind, self.vocalization, self.flight)
    }
}
