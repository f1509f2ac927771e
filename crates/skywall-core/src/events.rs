//! Events emitted by the simulation for audio and UI feedback.
//!
//! The core emits only state — mapping events to sounds or strings is
//! entirely the frontend's business.

use serde::{Deserialize, Serialize};

use crate::enums::InstallationKind;

/// One tick's worth of these is drained into each snapshot.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum GameEvent {
    /// A turret expended a round.
    MissileFired { turret_id: u32 },
    /// A rocket was caught inside a blast radius.
    RocketIntercepted { rocket_id: u32 },
    /// A rocket reached the ground plane.
    GroundImpact { x: f64 },
    /// An installation was destroyed by a ground impact.
    InstallationDestroyed { kind: InstallationKind, id: u32 },
    /// Score threshold reached. Terminal.
    MatchWon,
    /// Every turret destroyed. Terminal.
    MatchLost,
}
