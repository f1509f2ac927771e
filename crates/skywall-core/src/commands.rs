//! Player commands sent from the frontend to the simulation.
//!
//! Commands are validated and queued for processing at the next tick
//! boundary — input never mutates the world mid-tick.

use serde::{Deserialize, Serialize};

/// All possible player actions.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum PlayerCommand {
    /// Begin a match from the menu or after a terminal phase.
    StartMatch,
    /// Tear down the current match and begin a fresh one immediately.
    RestartMatch,
    /// Fire a missile at a canvas-local point.
    FireAt { x: f64, y: f64 },
    /// The host canvas was resized. Layout adjustment only, not a reset.
    Resize { width: f64, height: f64 },
}
