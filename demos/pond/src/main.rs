//! pond — a small duck-pond simulation built on `ds-duck`.
//!
//! Stocks a pond with one duck of every built-in kind plus a custom one,
//! prints what each duck does, then runs a few seeded rounds in which random
//! ducks have a behavior slot swapped at runtime.  Set `RUST_LOG=debug` to see
//! every swap as it happens.

use std::sync::Arc;

use anyhow::Result;
use log::info;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use ds_behavior::{
    FlyBehavior, FlyNoWay, FlyRocketPowered, FlyWithWings, MuteQuack, Quack, QuackBehavior,
    Squeak,
};
use ds_core::{DuckId, DuckKind};
use ds_duck::{Duck, DuckBuilder, Pond};

// ── Constants ─────────────────────────────────────────────────────────────────

const SEED:   u64   = 42;
const ROUNDS: usize = 3;

// ── Behavior palette ──────────────────────────────────────────────────────────

/// One shared instance of every stock behavior.  Swaps hand out clones of
/// these `Arc`s, so no behavior is allocated more than once.
struct Palette {
    flies:  Vec<Arc<dyn FlyBehavior>>,
    quacks: Vec<Arc<dyn QuackBehavior>>,
}

impl Palette {
    fn new() -> Self {
        Self {
            flies:  vec![Arc::new(FlyWithWings), Arc::new(FlyRocketPowered), Arc::new(FlyNoWay)],
            quacks: vec![Arc::new(Quack), Arc::new(Squeak), Arc::new(MuteQuack)],
        }
    }
}

// ── Report ────────────────────────────────────────────────────────────────────

fn print_pond(pond: &Pond) {
    println!("{:<8} {:<14} {:<12} {}", "Duck", "Kind", "Sound", "Flight");
    println!("{}", "-".repeat(52));
    for (id, duck) in pond.iter() {
        let d = duck.describe();
        println!("{:<8} {:<14} {:<12} {}", id.0, d.kind, d.vocalization, d.flight);
    }
    println!();
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    env_logger::init();

    println!("=== pond — duck_sim strategy demo ===");
    println!("Seed: {SEED}  |  Rounds: {ROUNDS}");
    println!();

    let palette = Palette::new();

    let mut pond = Pond::with_capacity(DuckKind::BUILT_IN.len() + 1);
    for kind in DuckKind::BUILT_IN {
        pond.add(Duck::of_kind(kind)?)?;
    }
    let robo = pond.add(
        DuckBuilder::new(DuckKind::from("Robo Duck"))
            .fly(Arc::clone(&palette.flies[1]))
            .quack(Arc::clone(&palette.quacks[1]))
            .build()?,
    )?;
    info!("stocked pond with {} ducks", pond.len());

    for (_, duck) in pond.iter() {
        println!("{}. {}", duck.display(), duck.describe());
    }
    println!("{}", pond.get(robo)?.swim());
    println!();

    print_pond(&pond);

    // ── Runtime behavior swaps ────────────────────────────────────────────
    let mut rng = SmallRng::seed_from_u64(SEED);
    for round in 1..=ROUNDS {
        let id = DuckId::try_from(rng.gen_range(0..pond.len()))?;
        let duck = pond.get_mut(id)?;
        if rng.gen_bool(0.5) {
            let fly = &palette.flies[rng.gen_range(0..palette.flies.len())];
            duck.set_fly_behavior(Arc::clone(fly));
            println!("Round {round}: {} now {}", duck.kind(), duck.perform_fly());
        } else {
            let quack = &palette.quacks[rng.gen_range(0..palette.quacks.len())];
            duck.set_quack_behavior(Arc::clone(quack));
            println!("Round {round}: {} now {}", duck.kind(), duck.perform_quack());
        }
    }
    println!();

    // Winter: nobody flies.
    pond.ground_all(Arc::clone(&palette.flies[2]));
    info!("grounded every duck");

    print_pond(&pond);

    Ok(())
}
