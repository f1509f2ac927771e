//! Enumeration types used throughout the simulation.

use serde::{Deserialize, Serialize};

/// Top-level match state. `Won` and `Lost` are terminal: the engine stops
/// running systems once either is reached.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum MatchPhase {
    #[default]
    NotStarted,
    InProgress,
    Won,
    Lost,
}

/// Explosion lifecycle phase.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum BlastPhase {
    /// Radius expanding toward `max_radius`.
    #[default]
    Growing,
    /// Radius collapsing back toward zero.
    Shrinking,
    /// Collapsed; purged by cleanup at end of tick.
    Spent,
}

/// Ground installation category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum InstallationKind {
    City,
    Turret,
}
