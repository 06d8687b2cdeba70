//! `ds-duck` — ducks composed from swappable behaviors.
//!
//! # Crate layout
//!
//! | Module          | Contents                                                 |
//! |-----------------|----------------------------------------------------------|
//! | [`duck`]        | `Duck` — holds one fly and one quack behavior            |
//! | [`builder`]     | `DuckBuilder` — validated construction                   |
//! | [`defaults`]    | default behavior pair for each built-in `DuckKind`       |
//! | [`description`] | `DuckDescription` — snapshot returned by `Duck::describe` |
//! | [`pond`]        | `Pond` — `DuckId`-indexed collection of ducks            |
//!
//! # Design notes
//!
//! A Mallard and a Rubber Duck are the same Rust type.  What differs is the
//! data they are built with: their [`DuckKind`] and the two behaviors plugged
//! into their slots.  Either slot can be replaced later through
//! [`Duck::set_fly_behavior`] / [`Duck::set_quack_behavior`] without
//! rebuilding the duck.
//!
//! Behaviors are held as `Arc<dyn …>`, so any number of ducks can share one
//! instance.  Replacing a slot on one duck never touches another duck.

pub mod builder;
pub mod defaults;
pub mod description;
pub mod duck;
pub mod pond;

#[cfg(test)]
mod tests;

pub use builder::DuckBuilder;
pub use description::DuckDescription;
pub use duck::Duck;
pub use pond::Pond;

pub use ds_core::{DsError, DsResult, DuckId, DuckKind};
