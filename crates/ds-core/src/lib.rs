//! `ds-core` — foundational types for the `duck_sim` workspace.
//!
//! This crate is a dependency of every other `ds-*` crate.  It has no `ds-*`
//! dependencies and a single external one (`thiserror`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module      | Contents                                   |
//! |-------------|--------------------------------------------|
//! | [`ids`]     | `DuckId`                                   |
//! | [`kind`]    | `DuckKind` — the declared named subtype    |
//! | [`error`]   | `DsError`, `DsResult`                      |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                              |
//! |---------|-----------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types. |

pub mod error;
pub mod ids;
pub mod kind;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use error::{DsError, DsResult};
pub use ids::DuckId;
pub use kind::DuckKind;
