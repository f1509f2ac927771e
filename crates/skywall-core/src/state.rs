//! Match snapshot — the complete visible state handed to the renderer each tick.

use serde::{Deserialize, Serialize};

use crate::enums::{BlastPhase, MatchPhase};
use crate::events::GameEvent;
use crate::types::{Point, SimTime, Viewport};

/// Complete read-only state built after each tick.
/// The renderer draws from this and must never mutate simulation state.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MatchSnapshot {
    pub time: SimTime,
    pub phase: MatchPhase,
    pub score: u32,
    pub viewport: Viewport,
    pub rockets: Vec<RocketView>,
    pub missiles: Vec<MissileView>,
    pub explosions: Vec<ExplosionView>,
    pub cities: Vec<CityView>,
    pub turrets: Vec<TurretView>,
    /// Events that fired during this tick, in emission order.
    pub events: Vec<GameEvent>,
}

/// A falling rocket on the display.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RocketView {
    pub id: u32,
    pub position: Point,
    /// Launch point, for drawing the trail.
    pub start: Point,
    pub target: Point,
    pub hue: f64,
}

/// A player missile in flight.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MissileView {
    pub id: u32,
    pub position: Point,
    pub start: Point,
    pub target: Point,
    pub turret_id: u32,
}

/// A blast circle.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExplosionView {
    pub id: u32,
    pub position: Point,
    pub radius: f64,
    pub max_radius: f64,
    pub phase: BlastPhase,
}

/// City status for display.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CityView {
    pub id: u32,
    pub x: f64,
    pub active: bool,
}

/// Turret status for display.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TurretView {
    pub id: u32,
    pub x: f64,
    pub ammo: u32,
    pub max_ammo: u32,
    pub active: bool,
}
