//! Win/loss evaluator — checks terminal conditions after all mutation.

use hecs::World;

use skywall_core::components::Turret;
use skywall_core::constants::WIN_SCORE;
use skywall_core::enums::MatchPhase;

/// Returns the terminal phase reached this tick, if any.
///
/// The win check precedes the loss check: if both hold in the same tick,
/// the match is won. A turret with no ammo left still counts as active —
/// running dry and being destroyed are distinct failure modes.
pub fn run(world: &World, score: u32) -> Option<MatchPhase> {
    if score >= WIN_SCORE {
        return Some(MatchPhase::Won);
    }

    let any_turret_active = {
        let mut query = world.query::<&Turret>();
        query.iter().any(|(_, turret)| turret.active)
    };
    if !any_turret_active {
        return Some(MatchPhase::Lost);
    }

    None
}
