//! Explosion engine — radius animation, kill checks, chained blasts.
//!
//! Chain policy: the kill scan runs against a blast list collected before
//! any chained explosion is spawned, so a chain advances one hop per tick
//! rather than cascading arbitrarily far within a single tick.

use hecs::{Entity, World};

use skywall_core::components::{Explosion, Rocket};
use skywall_core::constants::*;
use skywall_core::enums::BlastPhase;
use skywall_core::events::GameEvent;
use skywall_core::types::Point;

use crate::world_setup;

/// Run the explosion engine for one tick.
pub fn run(
    world: &mut World,
    next_id: &mut u32,
    score: &mut u32,
    despawn_buffer: &mut Vec<Entity>,
    events: &mut Vec<GameEvent>,
) {
    advance_radii(world);

    // Snapshot live blasts before scanning rockets.
    let blasts: Vec<(Point, f64)> = {
        let mut query = world.query::<(&Explosion, &Point)>();
        query
            .iter()
            .filter(|(_, (explosion, _))| explosion.radius > 0.0)
            .map(|(_, (explosion, pos))| (*pos, explosion.radius))
            .collect()
    };
    if blasts.is_empty() {
        return;
    }

    despawn_buffer.clear();
    let mut kills: Vec<(u32, Point)> = Vec::new();
    for (entity, (rocket, pos)) in world.query_mut::<(&Rocket, &Point)>() {
        let caught = blasts
            .iter()
            .any(|(center, radius)| pos.distance_to(center) < *radius);
        if caught {
            kills.push((rocket.id, *pos));
            despawn_buffer.push(entity);
        }
    }
    for entity in despawn_buffer.drain(..) {
        let _ = world.despawn(entity);
    }

    for (rocket_id, pos) in kills {
        *score += INTERCEPT_SCORE;
        events.push(GameEvent::RocketIntercepted { rocket_id });
        // Chained blast at the kill point; detonates starting next tick.
        world_setup::spawn_explosion(world, next_id, pos, ROCKET_BLAST_RADIUS);
    }
}

/// Grow-then-collapse radius animation. The radius clamps at `max_radius`
/// on the flip, so a blast lives exactly
/// `ceil(max/GROWTH) + ceil(max/DECAY)` ticks.
fn advance_radii(world: &mut World) {
    for (_entity, explosion) in world.query_mut::<&mut Explosion>() {
        match explosion.phase {
            BlastPhase::Growing => {
                explosion.radius += BLAST_GROWTH_PER_TICK;
                if explosion.radius >= explosion.max_radius {
                    explosion.radius = explosion.max_radius;
                    explosion.phase = BlastPhase::Shrinking;
                }
            }
            BlastPhase::Shrinking => {
                explosion.radius -= BLAST_DECAY_PER_TICK;
                if explosion.radius <= 0.0 {
                    explosion.radius = 0.0;
                    explosion.phase = BlastPhase::Spent;
                }
            }
            BlastPhase::Spent => {}
        }
    }
}
