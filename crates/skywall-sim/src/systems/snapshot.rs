//! Snapshot system: queries the ECS world and builds a complete MatchSnapshot.
//!
//! This system is read-only — it never modifies the world. Every list is
//! sorted by id so output is stable across ECS iteration orders.

use hecs::World;

use skywall_core::components::*;
use skywall_core::enums::MatchPhase;
use skywall_core::events::GameEvent;
use skywall_core::state::*;
use skywall_core::types::{Point, SimTime, Viewport};

/// Build a complete MatchSnapshot from the current world state.
pub fn build_snapshot(
    world: &World,
    time: &SimTime,
    phase: MatchPhase,
    score: u32,
    viewport: &Viewport,
    events: Vec<GameEvent>,
) -> MatchSnapshot {
    MatchSnapshot {
        time: *time,
        phase,
        score,
        viewport: *viewport,
        rockets: build_rockets(world),
        missiles: build_missiles(world),
        explosions: build_explosions(world),
        cities: build_cities(world),
        turrets: build_turrets(world),
        events,
    }
}

fn build_rockets(world: &World) -> Vec<RocketView> {
    let mut rockets: Vec<RocketView> = world
        .query::<(&Rocket, &Point)>()
        .iter()
        .map(|(_, (rocket, pos))| RocketView {
            id: rocket.id,
            position: *pos,
            start: rocket.start,
            target: rocket.target,
            hue: rocket.hue,
        })
        .collect();

    rockets.sort_by_key(|r| r.id);
    rockets
}

fn build_missiles(world: &World) -> Vec<MissileView> {
    let mut missiles: Vec<MissileView> = world
        .query::<(&Missile, &Point)>()
        .iter()
        .map(|(_, (missile, pos))| MissileView {
            id: missile.id,
            position: *pos,
            start: missile.start,
            target: missile.target,
            turret_id: missile.turret_id,
        })
        .collect();

    missiles.sort_by_key(|m| m.id);
    missiles
}

fn build_explosions(world: &World) -> Vec<ExplosionView> {
    let mut explosions: Vec<ExplosionView> = world
        .query::<(&Explosion, &Point)>()
        .iter()
        .map(|(_, (explosion, pos))| ExplosionView {
            id: explosion.id,
            position: *pos,
            radius: explosion.radius,
            max_radius: explosion.max_radius,
            phase: explosion.phase,
        })
        .collect();

    explosions.sort_by_key(|e| e.id);
    explosions
}

fn build_cities(world: &World) -> Vec<CityView> {
    let mut cities: Vec<CityView> = world
        .query::<(&City, &Point)>()
        .iter()
        .map(|(_, (city, pos))| CityView {
            id: city.id,
            x: pos.x,
            active: city.active,
        })
        .collect();

    cities.sort_by_key(|c| c.id);
    cities
}

fn build_turrets(world: &World) -> Vec<TurretView> {
    let mut turrets: Vec<TurretView> = world
        .query::<(&Turret, &Point)>()
        .iter()
        .map(|(_, (turret, pos))| TurretView {
            id: turret.id,
            x: pos.x,
            ammo: turret.ammo,
            max_ammo: turret.max_ammo,
            active: turret.active,
        })
        .collect();

    turrets.sort_by_key(|t| t.id);
    turrets
}
