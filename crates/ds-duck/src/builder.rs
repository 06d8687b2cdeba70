//! Fluent builder for constructing a [`Duck`].
//!
//! # Usage
//!
//! ```rust
//! use std::sync::Arc;
//!
//! use ds_behavior::{FlyRocketPowered, Squeak};
//! use ds_duck::{DuckBuilder, DuckKind};
//!
//! // Built-in kinds fill any unset slot from their defaults.
//! let duck = DuckBuilder::new(DuckKind::Rubber)
//!     .fly(Arc::new(FlyRocketPowered))
//!     .build()?;
//! assert_eq!(duck.perform_quack(), "squeaks");
//!
//! // Custom kinds have no defaults, so both slots are required.
//! let err = DuckBuilder::new(DuckKind::from("Robo Duck"))
//!     .quack(Arc::new(Squeak))
//!     .build();
//! assert!(err.is_err());
//! # Ok::<(), ds_duck::DsError>(())
//! ```

use std::sync::Arc;

use ds_behavior::{FlyBehavior, QuackBehavior};
use ds_core::{DsError, DsResult, DuckKind};

use crate::Duck;
use crate::defaults::{default_fly, default_quack};

/// Fluent builder for [`Duck`].
///
/// | Method        | Default when not called                         |
/// |---------------|-------------------------------------------------|
/// | `.fly(b)`     | the kind's default; error for `Custom` kinds    |
/// | `.quack(b)`   | the kind's default; error for `Custom` kinds    |
#[derive(Debug)]
pub struct DuckBuilder {
    kind:  DuckKind,
    fly:   Option<Arc<dyn FlyBehavior>>,
    quack: Option<Arc<dyn QuackBehavior>>,
}

impl DuckBuilder {
    pub fn new(kind: DuckKind) -> Self {
        Self { kind, fly: None, quack: None }
    }

    /// Supply the fly behavior.
    pub fn fly(mut self, fly: Arc<dyn FlyBehavior>) -> Self {
        self.fly = Some(fly);
        self
    }

    /// Supply the quack behavior.
    pub fn quack(mut self, quack: Arc<dyn QuackBehavior>) -> Self {
        self.quack = Some(quack);
        self
    }

    /// Resolve both slots and return the duck.
    ///
    /// Fails with [`DsError::InvalidConstruction`] if a slot was not supplied
    /// and the kind has no default for it.  The fly slot is checked first.
    pub fn build(self) -> DsResult<Duck> {
        let fly = match self.fly {
            Some(b) => b,
            None => default_fly(&self.kind).ok_or_else(|| DsError::InvalidConstruction {
                kind:    self.kind.to_string(),
                missing: "fly behavior",
            })?,
        };

        let quack = match self.quack {
            Some(b) => b,
            None => default_quack(&self.kind).ok_or_else(|| DsError::InvalidConstruction {
                kind:    self.kind.to_string(),
                missing: "quack behavior",
            })?,
        };

        Ok(Duck::new(self.kind, fly, quack))
    }
}
