//! The `QuackBehavior` capability and its stock variants.

use std::fmt::Debug;

/// The sound a duck makes.
///
/// Like [`FlyBehavior`](crate::FlyBehavior), `vocalize` never fails and
/// always returns something printable, even for a silent duck.
pub trait QuackBehavior: Debug + Send + Sync + 'static {
    /// Describe the sound, e.g. `"quacks"`.
    fn vocalize(&self) -> String;
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Quack;

impl QuackBehavior for Quack {
    fn vocalize(&self) -> String {
        "quacks".to_owned()
    }
}

/// Rubber-duck squeak.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Squeak;

impl QuackBehavior for Squeak {
    fn vocalize(&self) -> String {
        "squeaks".to_owned()
    }
}

/// Silence.  Still yields a description so reports render uniformly.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MuteQuack;

impl QuackBehavior for MuteQuack {
    fn vocalize(&self) -> String {
        "can't quack".to_owned()
    }
}
