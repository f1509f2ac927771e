//! Fire control — maps a pointer tap to a turret launch.

use hecs::World;

use skywall_core::components::Turret;
use skywall_core::constants::TURRET_MUZZLE_HEIGHT;
use skywall_core::events::GameEvent;
use skywall_core::types::{Point, Viewport};

use crate::world_setup;

/// Fire a missile at a canvas point from the nearest eligible turret.
///
/// Eligible means active with ammo remaining. Ties on horizontal distance
/// break to the lowest turret id, so selection never depends on ECS
/// iteration order. With no eligible turret the tap is a silent no-op.
pub fn fire_at(
    world: &mut World,
    viewport: &Viewport,
    aim: Point,
    next_id: &mut u32,
    events: &mut Vec<GameEvent>,
) {
    let mut candidates: Vec<(hecs::Entity, u32, f64, f64)> = {
        let mut query = world.query::<(&Turret, &Point)>();
        query
            .iter()
            .filter(|(_, (turret, _))| turret.active && turret.ammo > 0)
            .map(|(entity, (turret, pos))| (entity, turret.id, pos.x, (pos.x - aim.x).abs()))
            .collect()
    };
    candidates.sort_by_key(|&(_, id, _, _)| id);

    let selected = candidates
        .into_iter()
        .min_by(|a, b| a.3.total_cmp(&b.3));
    let Some((entity, turret_id, turret_x, _)) = selected else {
        return;
    };

    if let Ok(mut turret) = world.get::<&mut Turret>(entity) {
        // Eligibility filter above guarantees ammo > 0.
        turret.ammo -= 1;
    }

    let muzzle = Point::new(turret_x, viewport.ground_y() - TURRET_MUZZLE_HEIGHT);
    world_setup::spawn_missile(world, next_id, turret_id, muzzle, aim);
    events.push(GameEvent::MissileFired { turret_id });
}
