//! `ds-behavior` — the two pluggable duck capabilities.
//!
//! # Crate layout
//!
//! | Module    | Contents                                                  |
//! |-----------|-----------------------------------------------------------|
//! | [`fly`]   | `FlyBehavior` trait; `FlyWithWings`, `FlyRocketPowered`, `FlyNoWay` |
//! | [`quack`] | `QuackBehavior` trait; `Quack`, `Squeak`, `MuteQuack`     |
//!
//! # Design notes
//!
//! Each capability that varies between ducks is its own trait.  A duck holds
//! one implementor of each behind an `Arc<dyn …>` and delegates to it, so
//! a Rubber Duck that cannot fly is a duck holding [`FlyNoWay`], not a type
//! that overrides `fly` to do nothing.
//!
//! Every stock variant is a unit struct with no per-duck state, so a single
//! instance can be shared across any number of ducks.

pub mod fly;
pub mod quack;


pub use fly::{FlyBehavior, FlyNoWay, FlyRocketPowered, FlyWithWings};
pub use quack::{MuteQuack, Quack, QuackBehavior, Squeak};
