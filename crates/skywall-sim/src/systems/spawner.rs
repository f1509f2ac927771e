//! Rocket spawner — time-gated random launches with difficulty scaling.

use hecs::World;
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use skywall_core::components::{City, Turret};
use skywall_core::constants::*;
use skywall_core::types::{Point, SimTime, Viewport};

use crate::world_setup;

/// Tracks when the launch gate last opened. Reset with the match.
#[derive(Debug, Clone, Copy, Default)]
pub struct SpawnClock {
    pub last_spawn_ms: f64,
}

/// Interval between launches, tightening as the score grows.
pub fn spawn_interval_ms(score: u32) -> f64 {
    let reduction = (score as f64 / SPAWN_INTERVAL_SCORE_STEP) * SPAWN_INTERVAL_STEP_MS;
    (SPAWN_INTERVAL_BASE_MS - reduction).max(SPAWN_INTERVAL_MIN_MS)
}

/// Check the launch gate and spawn at most one rocket.
pub fn run(
    world: &mut World,
    rng: &mut ChaCha8Rng,
    clock: &mut SpawnClock,
    time: &SimTime,
    viewport: &Viewport,
    score: u32,
    next_id: &mut u32,
) {
    let now_ms = time.elapsed_ms;
    if now_ms - clock.last_spawn_ms <= spawn_interval_ms(score) {
        return;
    }
    // The gate re-arms whether or not a rocket actually launches.
    clock.last_spawn_ms = now_ms;

    // Pool surviving installations type-blind: every active city or turret
    // is one equally-likely target slot.
    let mut targets: Vec<f64> = Vec::new();
    {
        let mut query = world.query::<(&City, &Point)>();
        for (_entity, (city, pos)) in query.iter() {
            if city.active {
                targets.push(pos.x);
            }
        }
    }
    {
        let mut query = world.query::<(&Turret, &Point)>();
        for (_entity, (turret, pos)) in query.iter() {
            if turret.active {
                targets.push(pos.x);
            }
        }
    }

    if targets.is_empty() {
        // Everything is rubble; spawning silently stops.
        return;
    }

    let target_x = targets[rng.gen_range(0..targets.len())];
    world_setup::spawn_rocket(world, rng, next_id, viewport, score, target_x);
}
