//! Runtime state shared between the frame-driver thread and its host.

use std::sync::{Arc, Mutex};

use skywall_core::commands::PlayerCommand;
use skywall_core::state::MatchSnapshot;

/// Commands sent from the host to the frame-driver thread.
#[derive(Debug)]
pub enum GameLoopCommand {
    /// A player command to forward to the match engine.
    Player(PlayerCommand),
    /// Shut down the frame-driver thread gracefully.
    Shutdown,
}

/// Shared cell holding the latest snapshot for synchronous polling.
/// Updated by the frame-driver thread after each tick.
pub type SnapshotCell = Arc<Mutex<Option<MatchSnapshot>>>;

/// Create an empty snapshot cell.
pub fn snapshot_cell() -> SnapshotCell {
    Arc::new(Mutex::new(None))
}
