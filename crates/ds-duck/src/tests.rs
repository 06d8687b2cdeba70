//! Unit tests for ds-duck.

use std::sync::Arc;

use ds_behavior::{
    FlyBehavior, FlyNoWay, FlyRocketPowered, FlyWithWings, MuteQuack, Quack, QuackBehavior,
    Squeak,
};

use crate::{DsError, Duck, DuckBuilder, DuckDescription, DuckId, DuckKind, Pond};

// ── Helpers ───────────────────────────────────────────────────────────────────

fn mallard() -> Duck {
    Duck::new(DuckKind::Mallard, Arc::new(FlyWithWings), Arc::new(Quack))
}

fn desc(kind: &str, vocalization: &str, flight: &str) -> DuckDescription {
    DuckDescription {
        kind:         kind.into(),
        vocalization: vocalization.into(),
        flight:       flight.into(),
    }
}

// ── Duck ──────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod duck_tests {
    use super::*;

    #[test]
    fn quack_and_wings_describe() {
        assert_eq!(mallard().describe(), desc("Mallard Duck", "quacks", "can fly."));
    }

    #[test]
    fn mute_and_grounded_describe() {
        let duck = Duck::new(DuckKind::Decoy, Arc::new(FlyNoWay), Arc::new(MuteQuack));
        let d = duck.describe();
        assert_eq!(d, desc("Decoy Duck", "can't quack", "can't fly."));
        assert_ne!(d.vocalization, Quack.vocalize());
        assert_ne!(d.flight, FlyWithWings.fly());
    }

    #[test]
    fn perform_delegates_unchanged() {
        let duck = Duck::new(DuckKind::Rubber, Arc::new(FlyRocketPowered), Arc::new(Squeak));
        assert_eq!(duck.perform_fly(), FlyRocketPowered.fly());
        assert_eq!(duck.perform_quack(), Squeak.vocalize());
    }

    #[test]
    fn set_fly_behavior_takes_effect_immediately() {
        let mut duck = mallard();
        assert_eq!(duck.perform_fly(), "can fly.");
        duck.set_fly_behavior(Arc::new(FlyNoWay));
        assert_eq!(duck.perform_fly(), "can't fly.");
        assert_eq!(duck.perform_quack(), "quacks");
    }

    #[test]
    fn set_quack_behavior_takes_effect_immediately() {
        let mut duck = mallard();
        duck.set_quack_behavior(Arc::new(MuteQuack));
        assert_eq!(duck.perform_quack(), "can't quack");
        assert_eq!(duck.perform_fly(), "can fly.");
    }

    #[test]
    fn any_variant_can_replace_any_other() {
        let flies: Vec<Arc<dyn FlyBehavior>> =
            vec![Arc::new(FlyNoWay), Arc::new(FlyRocketPowered), Arc::new(FlyWithWings)];
        let mut duck = mallard();
        for f in flies {
            let expected = f.fly();
            duck.set_fly_behavior(f);
            assert_eq!(duck.perform_fly(), expected);
        }
    }

    #[test]
    fn description_is_a_snapshot() {
        let mut duck = mallard();
        let before = duck.describe();
        duck.set_fly_behavior(Arc::new(FlyNoWay));
        assert_eq!(before.flight, "can fly.");
        assert_eq!(duck.describe().flight, "can't fly.");
    }

    #[test]
    fn description_display() {
        assert_eq!(mallard().describe().to_string(), "Mallard Duck quacks and can fly.");
    }

    #[test]
    fn swim_and_display() {
        let duck = Duck::of_kind(DuckKind::Decoy).unwrap();
        assert_eq!(duck.swim(), "All ducks float, even decoys!");
        assert_eq!(duck.display(), "Looks like a Decoy Duck");
    }

    #[test]
    fn old_behavior_released_on_swap() {
        let fly: Arc<dyn FlyBehavior> = Arc::new(FlyWithWings);
        let mut duck = Duck::new(DuckKind::Mallard, Arc::clone(&fly), Arc::new(Quack));
        assert_eq!(Arc::strong_count(&fly), 2);
        duck.set_fly_behavior(Arc::new(FlyNoWay));
        assert_eq!(Arc::strong_count(&fly), 1);
    }
}

// ── Shared behaviors ──────────────────────────────────────────────────────────

#[cfg(test)]
mod sharing_tests {
    use super::*;

    #[test]
    fn two_ducks_share_one_quack() {
        let quack: Arc<dyn QuackBehavior> = Arc::new(Quack);
        let a = Duck::new(DuckKind::Mallard, Arc::new(FlyWithWings), Arc::clone(&quack));
        let b = Duck::new(DuckKind::RedHead, Arc::new(FlyWithWings), Arc::clone(&quack));
        assert_eq!(a.perform_quack(), b.perform_quack());
        assert!(Arc::ptr_eq(&a.quack_behavior(), &b.quack_behavior()));
    }

    #[test]
    fn swapping_one_duck_leaves_the_other_alone() {
        let quack: Arc<dyn QuackBehavior> = Arc::new(Quack);
        let wings: Arc<dyn FlyBehavior> = Arc::new(FlyWithWings);
        let mut a = Duck::new(DuckKind::Mallard, Arc::clone(&wings), Arc::clone(&quack));
        let b = Duck::new(DuckKind::RedHead, Arc::clone(&wings), Arc::clone(&quack));

        a.set_fly_behavior(Arc::new(FlyNoWay));

        assert_eq!(a.perform_fly(), "can't fly.");
        assert_eq!(b.perform_fly(), "can fly.");
        assert_eq!(b.perform_quack(), "quacks");
    }

    #[test]
    fn cloned_duck_has_independent_slots() {
        let original = mallard();
        let mut copy = original.clone();
        copy.set_quack_behavior(Arc::new(Squeak));
        assert_eq!(original.perform_quack(), "quacks");
        assert_eq!(copy.perform_quack(), "squeaks");
    }

    #[test]
    fn duck_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Duck>();
        assert_send_sync::<Pond>();
    }
}

// ── DuckBuilder / defaults ────────────────────────────────────────────────────

#[cfg(test)]
mod builder_tests {
    use super::*;

    #[test]
    fn built_in_defaults() {
        let cases = [
            (DuckKind::Mallard, "quacks", "can fly."),
            (DuckKind::RedHead, "quacks", "can fly."),
            (DuckKind::Rubber, "squeaks", "can't fly."),
            (DuckKind::Decoy, "can't quack", "can't fly."),
            (DuckKind::Model, "quacks", "can't fly."),
        ];
        for (kind, vocalization, flight) in cases {
            let name = kind.display_name().to_owned();
            let duck = Duck::of_kind(kind).unwrap();
            assert_eq!(duck.describe(), desc(&name, vocalization, flight));
        }
    }

    #[test]
    fn every_built_in_kind_builds() {
        for kind in DuckKind::BUILT_IN {
            assert!(Duck::of_kind(kind).is_ok());
        }
    }

    #[test]
    fn unset_slot_falls_back_to_kind_default() {
        let duck = DuckBuilder::new(DuckKind::Rubber)
            .fly(Arc::new(FlyRocketPowered))
            .build()
            .unwrap();
        assert_eq!(duck.perform_fly(), "can fly with a rocket.");
        assert_eq!(duck.perform_quack(), "squeaks");
    }

    #[test]
    fn custom_kind_with_both_slots() {
        let duck = DuckBuilder::new(DuckKind::from("Robo Duck"))
            .fly(Arc::new(FlyRocketPowered))
            .quack(Arc::new(Squeak))
            .build()
            .unwrap();
        assert_eq!(duck.describe(), desc("Robo Duck", "squeaks", "can fly with a rocket."));
    }

    #[test]
    fn custom_kind_missing_fly_fails() {
        let err = DuckBuilder::new(DuckKind::from("Robo Duck"))
            .quack(Arc::new(Quack))
            .build()
            .unwrap_err();
        assert_eq!(
            err,
            DsError::InvalidConstruction { kind: "Robo Duck".into(), missing: "fly behavior" }
        );
    }

    #[test]
    fn custom_kind_missing_quack_fails() {
        let err = DuckBuilder::new(DuckKind::from("Robo Duck"))
            .fly(Arc::new(FlyWithWings))
            .build()
            .unwrap_err();
        assert_eq!(
            err,
            DsError::InvalidConstruction { kind: "Robo Duck".into(), missing: "quack behavior" }
        );
    }

    #[test]
    fn custom_kind_has_no_defaults() {
        let err = Duck::of_kind(DuckKind::from("Robo Duck")).unwrap_err();
        assert!(matches!(err, DsError::InvalidConstruction { missing: "fly behavior", .. }));
    }
}

// ── Pond ──────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod pond_tests {
    use super::*;

    fn make_pond() -> (Pond, DuckId, DuckId) {
        let mut pond = Pond::with_capacity(2);
        let m = pond.add(mallard()).unwrap();
        let r = pond.add(Duck::of_kind(DuckKind::Rubber).unwrap()).unwrap();
        (pond, m, r)
    }

    #[test]
    fn ids_are_dense() {
        let (pond, m, r) = make_pond();
        assert_eq!(m, DuckId(0));
        assert_eq!(r, DuckId(1));
        assert_eq!(pond.len(), 2);
        assert!(!pond.is_empty());
        assert!(Pond::new().is_empty());
    }

    #[test]
    fn slot_ids_stop_before_invalid() {
        use crate::pond::id_for_slot;

        assert_eq!(id_for_slot(0).unwrap(), DuckId(0));
        assert_eq!(id_for_slot(u32::MAX as usize - 1).unwrap(), DuckId(u32::MAX - 1));
        assert_eq!(id_for_slot(u32::MAX as usize), Err(DsError::PondFull(u32::MAX as usize)));
    }

    #[cfg(target_pointer_width = "64")]
    #[test]
    fn slot_past_u32_does_not_wrap() {
        use crate::pond::id_for_slot;

        let slot = u32::MAX as usize + 1;
        assert_eq!(id_for_slot(slot), Err(DsError::PondFull(slot)));
    }

    #[test]
    fn get_and_get_mut() {
        let (mut pond, m, r) = make_pond();
        assert_eq!(pond.get(r).unwrap().perform_quack(), "squeaks");
        pond.get_mut(m).unwrap().set_quack_behavior(Arc::new(MuteQuack));
        assert_eq!(pond.get(m).unwrap().perform_quack(), "can't quack");
    }

    #[test]
    fn unknown_id_is_not_found() {
        let (mut pond, _, _) = make_pond();
        assert_eq!(pond.get(DuckId(9)).unwrap_err(), DsError::DuckNotFound(DuckId(9)));
        assert!(matches!(pond.get_mut(DuckId::INVALID), Err(DsError::DuckNotFound(_))));
    }

    #[test]
    fn describe_all_in_id_order() {
        let (pond, _, _) = make_pond();
        assert_eq!(
            pond.describe_all(),
            vec![
                desc("Mallard Duck", "quacks", "can fly."),
                desc("Rubber Duck", "squeaks", "can't fly."),
            ]
        );
    }

    #[test]
    fn iter_yields_ids() {
        let (pond, m, r) = make_pond();
        let ids: Vec<DuckId> = pond.iter().map(|(id, _)| id).collect();
        assert_eq!(ids, vec![m, r]);
    }

    #[test]
    fn ground_all_shares_one_instance() {
        let (mut pond, m, r) = make_pond();
        let (other, om, _) = make_pond();

        let rocket: Arc<dyn FlyBehavior> = Arc::new(FlyRocketPowered);
        pond.ground_all(Arc::clone(&rocket));

        assert!(Arc::ptr_eq(&pond.get(m).unwrap().fly_behavior(), &rocket));
        assert!(Arc::ptr_eq(&pond.get(r).unwrap().fly_behavior(), &rocket));
        assert_eq!(Arc::strong_count(&rocket), 3);
        assert_eq!(other.get(om).unwrap().perform_fly(), "can fly.");
    }
}
