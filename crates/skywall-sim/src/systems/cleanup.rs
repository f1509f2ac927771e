//! Cleanup system: purges explosions that have finished collapsing.
//!
//! Uses the engine's pre-allocated buffer to avoid per-tick allocation.

use hecs::{Entity, World};

use skywall_core::components::Explosion;
use skywall_core::enums::BlastPhase;

/// Remove spent explosions at the end of the tick.
pub fn run(world: &mut World, despawn_buffer: &mut Vec<Entity>) {
    despawn_buffer.clear();

    for (entity, explosion) in world.query_mut::<&Explosion>() {
        if explosion.phase == BlastPhase::Spent {
            despawn_buffer.push(entity);
        }
    }

    for entity in despawn_buffer.drain(..) {
        let _ = world.despawn(entity);
    }
}
