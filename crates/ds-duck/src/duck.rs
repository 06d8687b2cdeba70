//! The behavior-composed duck.

use std::sync::Arc;

use ds_behavior::{FlyBehavior, QuackBehavior};
use ds_core::{DsResult, DuckKind};
use log::debug;

use crate::{DuckBuilder, DuckDescription};

/// A duck: a kind plus one fly behavior and one quack behavior.
///
/// Both slots are always filled.  The only ways to obtain a `Duck` are
/// [`Duck::new`] (both behaviors supplied by the caller), [`Duck::of_kind`]
/// (the kind's defaults), and [`DuckBuilder`], which refuses to build with
/// an empty slot.
///
/// # Example
///
/// ```rust
/// use std::sync::Arc;
///
/// use ds_behavior::FlyRocketPowered;
/// use ds_duck::{Duck, DuckKind};
///
/// let mut duck = Duck::of_kind(DuckKind::Model)?;
/// assert_eq!(duck.perform_fly(), "can't fly.");
///
/// duck.set_fly_behavior(Arc::new(FlyRocketPowered));
/// assert_eq!(duck.perform_fly(), "can fly with a rocket.");
/// # Ok::<(), ds_duck::DsError>(())
/// ```
#[derive(Debug, Clone)]
pub struct Duck {
    kind:  DuckKind,
    fly:   Arc<dyn FlyBehavior>,
    quack: Arc<dyn QuackBehavior>,
}

impl Duck {
    /// Build a duck from an explicit behavior pair.
    pub fn new(
        kind:  DuckKind,
        fly:   Arc<dyn FlyBehavior>,
        quack: Arc<dyn QuackBehavior>,
    ) -> Self {
        debug!("new {kind}: fly={fly:?} quack={quack:?}");
        Self { kind, fly, quack }
    }

    /// Build a duck with its kind's default behaviors.
    ///
    /// Fails with [`DsError::InvalidConstruction`](ds_core::DsError) for
    /// [`DuckKind::Custom`], which has no defaults.
    pub fn of_kind(kind: DuckKind) -> DsResult<Self> {
        DuckBuilder::new(kind).build()
    }

    #[inline]
    pub fn kind(&self) -> &DuckKind {
        &self.kind
    }

    /// The current fly behavior, shareable with other ducks.
    #[inline]
    pub fn fly_behavior(&self) -> Arc<dyn FlyBehavior> {
        Arc::clone(&self.fly)
    }

    /// The current quack behavior, shareable with other ducks.
    #[inline]
    pub fn quack_behavior(&self) -> Arc<dyn QuackBehavior> {
        Arc::clone(&self.quack)
    }

    /// Delegate to the fly behavior.
    pub fn perform_fly(&self) -> String {
        self.fly.fly()
    }

    /// Delegate to the quack behavior.
    pub fn perform_quack(&self) -> String {
        self.quack.vocalize()
    }

    /// Replace the fly behavior.  Every later [`perform_fly`](Self::perform_fly)
    /// uses `fly`; the old behavior is dropped if nothing else holds it.
    pub fn set_fly_behavior(&mut self, fly: Arc<dyn FlyBehavior>) {
        debug!("{}: fly behavior {:?} -> {:?}", self.kind, self.fly, fly);
        self.fly = fly;
    }

    /// Replace the quack behavior.
    pub fn set_quack_behavior(&mut self, quack: Arc<dyn QuackBehavior>) {
        debug!("{}: quack behavior {:?} -> {:?}", self.kind, self.quack, quack);
        self.quack = quack;
    }

    /// Every duck floats, whatever its behaviors.
    pub fn swim(&self) -> &'static str {
        "All ducks float, even decoys!"
    }

    /// How the duck looks.
    pub fn display(&self) -> String {
        format!("Looks like a {}", self.kind)
    }

    /// Snapshot the duck's kind and the current output of both behaviors.
    pub fn describe(&self) -> DuckDescription {
        DuckDescription {
            kind:         self.kind.display_name().to_owned(),
            vocalization: self.perform_quack(),
            flight:       self.perform_fly(),
        }
    }
}
