//! The `FlyBehavior` capability and its stock variants.

use std::fmt::Debug;

/// How a duck gets (or fails to get) off the water.
///
/// `fly` is total: a duck that cannot fly returns a description saying so.
/// Implementations must be `Send + Sync` because one instance is shared
/// between every duck that uses it.
///
/// # Example
///
/// ```rust
/// use ds_behavior::FlyBehavior;
///
/// #[derive(Debug)]
/// struct Glide;
///
/// impl FlyBehavior for Glide {
///     fn fly(&self) -> String {
///         "glides.".to_owned()
///     }
/// }
///
/// assert_eq!(Glide.fly(), "glides.");
/// ```
pub trait FlyBehavior: Debug + Send + Sync + 'static {
    /// Describe the flight, e.g. `"can fly."`.
    fn fly(&self) -> String;
}

/// Ordinary powered flight.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FlyWithWings;

impl FlyBehavior for FlyWithWings {
    fn fly(&self) -> String {
        "can fly.".to_owned()
    }
}

/// Flight without wings.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FlyRocketPowered;

impl FlyBehavior for FlyRocketPowered {
    fn fly(&self) -> String {
        "can fly with a rocket.".to_owned()
    }
}

/// No flight at all.  Rubber ducks, decoys and model ducks use this.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FlyNoWay;

impl FlyBehavior for FlyNoWay {
    fn fly(&self) -> String {
        "can't fly.".to_owned()
    }
}
