//! Kinematic integration system.
//!
//! Positions advance by one velocity step per tick. Directions were fixed
//! at spawn, so projectiles never leave their start→target ray.

use hecs::World;

use skywall_core::types::{Point, Velocity};

/// Run kinematic integration for all entities with a position and velocity.
pub fn run(world: &mut World) {
    for (_entity, (pos, vel)) in world.query_mut::<(&mut Point, &Velocity)>() {
        pos.x += vel.x;
        pos.y += vel.y;
    }
}
