//! A pond of ducks addressed by dense [`DuckId`]s.

use std::sync::Arc;

use ds_behavior::FlyBehavior;
use ds_core::{DsError, DsResult, DuckId};
use log::trace;

use crate::{Duck, DuckDescription};

/// Owns a set of ducks.  `DuckId(i)` is the `i`-th duck added.
///
/// Ducks are never removed, so ids stay valid for the pond's lifetime.
#[derive(Debug, Clone, Default)]
pub struct Pond {
    ducks: Vec<Duck>,
}

impl Pond {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self { ducks: Vec::with_capacity(capacity) }
    }

    /// Add a duck and return its id.
    ///
    /// Fails with [`DsError::PondFull`] once every id below
    /// [`DuckId::INVALID`] is taken.
    pub fn add(&mut self, duck: Duck) -> DsResult<DuckId> {
        let id = id_for_slot(self.ducks.len())?;
        trace!("{id}: {} enters the pond", duck.kind());
        self.ducks.push(duck);
        Ok(id)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.ducks.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.ducks.is_empty()
    }

    pub fn get(&self, id: DuckId) -> DsResult<&Duck> {
        self.ducks.get(id.index()).ok_or(DsError::DuckNotFound(id))
    }

    pub fn get_mut(&mut self, id: DuckId) -> DsResult<&mut Duck> {
        self.ducks.get_mut(id.index()).ok_or(DsError::DuckNotFound(id))
    }

    /// Iterate `(id, duck)` pairs in id order.
    pub fn iter(&self) -> impl Iterator<Item = (DuckId, &Duck)> + '_ {
        // `add` keeps len below u32::MAX, so the id range never runs out first.
        (0..u32::MAX).map(DuckId).zip(self.ducks.iter())
    }

    /// Describe every duck, in id order.
    pub fn describe_all(&self) -> Vec<DuckDescription> {
        self.ducks.iter().map(Duck::describe).collect()
    }

    /// Give every duck in the pond the same fly behavior instance.
    pub fn ground_all(&mut self, fly: Arc<dyn FlyBehavior>) {
        for duck in &mut self.ducks {
            duck.set_fly_behavior(Arc::clone(&fly));
        }
    }
}

/// The id handed to the duck stored at `slot`.
pub(crate) fn id_for_slot(slot: usize) -> DsResult<DuckId> {
    match DuckId::try_from(slot) {
        Ok(id) if id != DuckId::INVALID => Ok(id),
        _ => Err(DsError::PondFull(slot)),
    }
}
