//! ECS components for hecs entities.
//!
//! Components are plain data structs with no methods.
//! Game logic lives in systems, not components.
//!
//! Projectiles carry `Point` (current position) and `Velocity` alongside
//! their identity component; installations carry `Point` only.

use serde::{Deserialize, Serialize};

use crate::enums::BlastPhase;
use crate::types::Point;

/// An enemy rocket falling from the top edge toward an installation.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Rocket {
    /// Unique within a match.
    pub id: u32,
    /// Launch point on the top edge. The position component never leaves
    /// the ray from here through `target`.
    pub start: Point,
    /// Impact point: an installation's x at the ground plane.
    pub target: Point,
    /// Scalar speed (units per tick).
    pub speed: f64,
    /// Presentation color seed in degrees (0-360).
    pub hue: f64,
}

/// A player-fired interceptor heading for a clicked point.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Missile {
    pub id: u32,
    /// Muzzle point above the firing turret.
    pub start: Point,
    /// The aim point chosen by the player.
    pub target: Point,
    /// Scalar speed (units per tick). Arrival is approximate: the missile
    /// detonates once the remaining distance drops below this.
    pub speed: f64,
    /// Id of the turret that fired it.
    pub turret_id: u32,
}

/// A transient circular kill-zone.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Explosion {
    pub id: u32,
    /// Current blast radius. A live hazard whenever > 0.
    pub radius: f64,
    /// Radius at which growth flips to collapse.
    pub max_radius: f64,
    pub phase: BlastPhase,
}

/// A defended city. Pure target: destroyed by a nearby ground impact.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct City {
    pub id: u32,
    /// Flips to false permanently when destroyed.
    pub active: bool,
}

/// A missile battery. Destroyed by a nearby ground impact; an empty
/// turret stays active (still a valid rocket target, just silent).
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Turret {
    pub id: u32,
    /// Remaining rounds. Decrements only via firing, never below zero.
    pub ammo: u32,
    pub max_ammo: u32,
    pub active: bool,
}
