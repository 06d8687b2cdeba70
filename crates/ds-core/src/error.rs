//! Workspace error type.

use thiserror::Error;

use crate::DuckId;

/// The error type shared by every `ds-*` crate.
///
/// Only construction and pond insertions and lookups can fail.  Flying and quacking are
/// total: a duck that cannot fly says so in its description instead.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DsError {
    #[error("cannot build {kind}: no {missing} supplied")]
    InvalidConstruction {
        kind:    String,
        missing: &'static str,
    },

    #[error("duck {0} not found")]
    DuckNotFound(DuckId),

    #[error("pond is full: no duck id left for slot {0}")]
    PondFull(usize),
}

/// Shorthand result type for all `ds-*` crates.
pub type DsResult<T> = Result<T, DsError>;
