//! Default behavior pairs for the built-in duck kinds.

use std::sync::Arc;

use ds_behavior::{FlyBehavior, FlyNoWay, FlyWithWings, MuteQuack, Quack, QuackBehavior, Squeak};
use ds_core::DuckKind;

/// The fly behavior a kind starts with, or `None` for [`DuckKind::Custom`].
pub fn default_fly(kind: &DuckKind) -> Option<Arc<dyn FlyBehavior>> {
    match kind {
        DuckKind::Mallard | DuckKind::RedHead => Some(Arc::new(FlyWithWings)),
        DuckKind::Rubber | DuckKind::Decoy | DuckKind::Model => Some(Arc::new(FlyNoWay)),
        DuckKind::Custom(_) => None,
    }
}

/// The quack behavior a kind starts with, or `None` for [`DuckKind::Custom`].
pub fn default_quack(kind: &DuckKind) -> Option<Arc<dyn QuackBehavior>> {
    match kind {
        DuckKind::Mallard | DuckKind::RedHead | DuckKind::Model => Some(Arc::new(Quack)),
        DuckKind::Rubber => Some(Arc::new(Squeak)),
        DuckKind::Decoy => Some(Arc::new(MuteQuack)),
        DuckKind::Custom(_) => None,
    }
}
