//! Impact resolver — rockets reaching the ground plane, missiles reaching
//! their aim point.
//!
//! Each pass collects its removals into the shared despawn buffer and
//! applies them before spawning the resulting explosions, so no later
//! system observes a half-resolved collection.

use hecs::{Entity, World};

use skywall_core::components::*;
use skywall_core::constants::*;
use skywall_core::enums::InstallationKind;
use skywall_core::events::GameEvent;
use skywall_core::types::Point;

use crate::world_setup;

/// Run the impact resolver for one tick: rockets first, then missiles.
pub fn run(
    world: &mut World,
    next_id: &mut u32,
    despawn_buffer: &mut Vec<Entity>,
    events: &mut Vec<GameEvent>,
) {
    resolve_rockets(world, next_id, despawn_buffer, events);
    resolve_missiles(world, next_id, despawn_buffer);
}

/// A rocket detonates once its position reaches its target's y (the ground
/// plane), leaving a small blast and razing any installation close enough.
fn resolve_rockets(
    world: &mut World,
    next_id: &mut u32,
    despawn_buffer: &mut Vec<Entity>,
    events: &mut Vec<GameEvent>,
) {
    despawn_buffer.clear();
    let mut impacts: Vec<Point> = Vec::new();

    for (entity, (rocket, pos)) in world.query_mut::<(&Rocket, &Point)>() {
        if pos.y >= rocket.target.y {
            impacts.push(*pos);
            despawn_buffer.push(entity);
        }
    }
    for entity in despawn_buffer.drain(..) {
        let _ = world.despawn(entity);
    }

    for impact in impacts {
        world_setup::spawn_explosion(world, next_id, impact, ROCKET_BLAST_RADIUS);
        events.push(GameEvent::GroundImpact { x: impact.x });
        raze_installations(world, impact.x, events);
    }
}

/// Deactivate every active installation within `IMPACT_PROXIMITY` of the
/// impact x. A single impact may take out several. Ground-level check:
/// only horizontal distance matters.
fn raze_installations(world: &mut World, impact_x: f64, events: &mut Vec<GameEvent>) {
    for (_entity, (city, pos)) in world.query_mut::<(&mut City, &Point)>() {
        if city.active && (pos.x - impact_x).abs() < IMPACT_PROXIMITY {
            city.active = false;
            events.push(GameEvent::InstallationDestroyed {
                kind: InstallationKind::City,
                id: city.id,
            });
        }
    }
    for (_entity, (turret, pos)) in world.query_mut::<(&mut Turret, &Point)>() {
        if turret.active && (pos.x - impact_x).abs() < IMPACT_PROXIMITY {
            turret.active = false;
            events.push(GameEvent::InstallationDestroyed {
                kind: InstallationKind::Turret,
                id: turret.id,
            });
        }
    }
}

/// A missile detonates once the remaining distance to its target drops
/// below one speed step — large speeds may overshoot the literal aim
/// point, so the blast is centered on the intended target, not on the
/// missile's current position.
fn resolve_missiles(world: &mut World, next_id: &mut u32, despawn_buffer: &mut Vec<Entity>) {
    despawn_buffer.clear();
    let mut detonations: Vec<Point> = Vec::new();

    for (entity, (missile, pos)) in world.query_mut::<(&Missile, &Point)>() {
        if pos.distance_to(&missile.target) < missile.speed {
            detonations.push(missile.target);
            despawn_buffer.push(entity);
        }
    }
    for entity in despawn_buffer.drain(..) {
        let _ = world.despawn(entity);
    }

    for target in detonations {
        world_setup::spawn_explosion(world, next_id, target, MISSILE_BLAST_RADIUS);
    }
}
