//! Pond-local duck identifiers.

use std::fmt;

/// Position of a duck in its pond, assigned in insertion order starting at 0.
///
/// `u32::MAX` is reserved as [`DuckId::INVALID`], so a pond holds at most
/// `u32::MAX` ducks.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DuckId(pub u32);

impl DuckId {
    /// Never assigned to a duck.
    pub const INVALID: DuckId = DuckId(u32::MAX);

    /// Slot of this duck in pond storage.
    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for DuckId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "DuckId({})", self.0)
    }
}

impl TryFrom<usize> for DuckId {
    type Error = std::num::TryFromIntError;

    /// Checked conversion from a storage slot; fails above `u32::MAX`.
    fn try_from(slot: usize) -> Result<DuckId, Self::Error> {
        u32::try_from(slot).map(DuckId)
    }
}
