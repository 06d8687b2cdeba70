//! Named duck kinds.
//!
//! A kind is plain data: it names the duck and, for the built-in kinds,
//! selects a default behavior pair in `ds-duck`.  There is no per-kind type
//! and nothing to override.

use std::fmt;

/// The declared kind of a duck.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DuckKind {
    Mallard,
    RedHead,
    Rubber,
    Decoy,
    Model,
    /// A caller-defined kind with no default behaviors.
    Custom(String),
}

impl DuckKind {
    /// Every kind that ships with default behaviors.
    pub const BUILT_IN: [DuckKind; 5] = [
        DuckKind::Mallard,
        DuckKind::RedHead,
        DuckKind::Rubber,
        DuckKind::Decoy,
        DuckKind::Model,
    ];

    /// Human-readable name used in descriptions, e.g. `"Rubber Duck"`.
    pub fn display_name(&self) -> &str {
        match self {
            DuckKind::Mallard   => "Mallard Duck",
            DuckKind::RedHead   => "Red Head Duck",
            DuckKind::Rubber    => "Rubber Duck",
            DuckKind::Decoy     => "Decoy Duck",
            DuckKind::Model     => "Model Duck",
            DuckKind::Custom(s) => s,
        }
    }
}

impl fmt::Display for DuckKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

impl From<&str> for DuckKind {
    /// Wraps an arbitrary name as [`DuckKind::Custom`].
    fn from(name: &str) -> Self {
        DuckKind::Custom(name.to_owned())
    }
}
