//! Entity spawn factories for setting up and populating the match world.
//!
//! Creates the installation layout at match start and owns component-bundle
//! construction (and id allocation) for everything spawned mid-match.

use glam::DVec2;
use hecs::World;
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use skywall_core::components::*;
use skywall_core::constants::*;
use skywall_core::enums::BlastPhase;
use skywall_core::types::{Point, Velocity, Viewport};

/// Set up a fresh match: cities and turrets at their layout fractions,
/// anchored on the ground plane.
pub fn setup_match(world: &mut World, viewport: &Viewport, next_id: &mut u32) {
    let ground = viewport.ground_y();

    for frac in CITY_LAYOUT {
        let id = alloc_id(next_id);
        world.spawn((
            City { id, active: true },
            Point::new(frac * viewport.width, ground),
        ));
    }

    for frac in TURRET_LAYOUT {
        let id = alloc_id(next_id);
        world.spawn((
            Turret {
                id,
                ammo: TURRET_MAX_AMMO,
                max_ammo: TURRET_MAX_AMMO,
                active: true,
            },
            Point::new(frac * viewport.width, ground),
        ));
    }
}

/// Spawn a rocket from a random point on the top edge toward the chosen
/// installation x at the ground plane. Speed scales with score.
pub fn spawn_rocket(
    world: &mut World,
    rng: &mut ChaCha8Rng,
    next_id: &mut u32,
    viewport: &Viewport,
    score: u32,
    target_x: f64,
) -> u32 {
    let start = Point::new(rng.gen_range(0.0..viewport.width), 0.0);
    let target = Point::new(target_x, viewport.ground_y());
    let hue = rng.gen_range(0.0..360.0);
    spawn_rocket_at(world, next_id, start, target, rocket_speed(score), hue)
}

/// Spawn a rocket with explicit kinematics.
pub fn spawn_rocket_at(
    world: &mut World,
    next_id: &mut u32,
    start: Point,
    target: Point,
    speed: f64,
    hue: f64,
) -> u32 {
    let id = alloc_id(next_id);
    world.spawn((
        Rocket {
            id,
            start,
            target,
            speed,
            hue,
        },
        start,
        axis_velocity(start, target, speed),
    ));
    id
}

/// Spawn a player missile from a turret muzzle toward the aim point.
pub fn spawn_missile(
    world: &mut World,
    next_id: &mut u32,
    turret_id: u32,
    start: Point,
    target: Point,
) -> u32 {
    let id = alloc_id(next_id);
    world.spawn((
        Missile {
            id,
            start,
            target,
            speed: MISSILE_SPEED,
            turret_id,
        },
        start,
        axis_velocity(start, target, MISSILE_SPEED),
    ));
    id
}

/// Spawn an explosion at radius zero; the blast system animates it.
pub fn spawn_explosion(world: &mut World, next_id: &mut u32, pos: Point, max_radius: f64) -> u32 {
    let id = alloc_id(next_id);
    world.spawn((
        Explosion {
            id,
            radius: 0.0,
            max_radius,
            phase: BlastPhase::Growing,
        },
        pos,
    ));
    id
}

/// Rocket speed for the current score (units per tick).
pub fn rocket_speed(score: u32) -> f64 {
    (1.0 + score as f64 / ROCKET_SPEED_SCORE_DIVISOR) * ROCKET_BASE_SPEED
}

/// Velocity along the fixed start→target axis at the given speed.
/// A zero-length axis collapses to zero velocity rather than dividing by
/// zero distance.
pub fn axis_velocity(start: Point, target: Point, speed: f64) -> Velocity {
    let dir = DVec2::new(target.x - start.x, target.y - start.y).normalize_or_zero();
    Velocity::new(dir.x * speed, dir.y * speed)
}

fn alloc_id(next_id: &mut u32) -> u32 {
    let id = *next_id;
    *next_id += 1;
    id
}
