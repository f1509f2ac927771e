//! Simulation constants and tuning parameters.
//!
//! All projectile speeds and blast rates are expressed in canvas units
//! per tick — the simulation advances in whole ticks, not wall time.

/// Simulation tick rate (Hz), matched to display refresh.
pub const TICK_RATE: u32 = 60;

/// Milliseconds per tick.
pub const MS_PER_TICK: f64 = 1000.0 / TICK_RATE as f64;

// --- Canvas / layout ---

/// Default logical canvas width.
pub const DEFAULT_VIEW_WIDTH: f64 = 800.0;

/// Default logical canvas height.
pub const DEFAULT_VIEW_HEIGHT: f64 = 600.0;

/// Height of the ground strip: the ground plane is `height - GROUND_MARGIN`.
pub const GROUND_MARGIN: f64 = 20.0;

/// Turret x positions as fractions of the canvas width.
pub const TURRET_LAYOUT: [f64; 3] = [0.08, 0.5, 0.92];

/// City x positions as fractions of the canvas width.
pub const CITY_LAYOUT: [f64; 4] = [0.2, 0.34, 0.66, 0.8];

// --- Spawning ---

/// Spawn interval at score 0 (milliseconds).
pub const SPAWN_INTERVAL_BASE_MS: f64 = 2000.0;

/// Spawn interval floor (milliseconds).
pub const SPAWN_INTERVAL_MIN_MS: f64 = 500.0;

/// Score step that tightens the spawn interval.
pub const SPAWN_INTERVAL_SCORE_STEP: f64 = 100.0;

/// Interval reduction per score step (milliseconds).
pub const SPAWN_INTERVAL_STEP_MS: f64 = 200.0;

// --- Rockets ---

/// Rocket speed at score 0 (units per tick).
pub const ROCKET_BASE_SPEED: f64 = 0.8;

/// Score divisor for rocket speed scaling: speed = (1 + score/divisor) * base.
pub const ROCKET_SPEED_SCORE_DIVISOR: f64 = 500.0;

/// Blast radius of a rocket ground impact and of chained explosions.
pub const ROCKET_BLAST_RADIUS: f64 = 30.0;

// --- Missiles ---

/// Missile speed (units per tick).
pub const MISSILE_SPEED: f64 = 6.0;

/// Blast radius of a player missile detonation.
pub const MISSILE_BLAST_RADIUS: f64 = 80.0;

/// How far above the ground plane a missile leaves its turret.
pub const TURRET_MUZZLE_HEIGHT: f64 = 50.0;

// --- Explosions ---

/// Radius growth per tick during the expansion phase.
pub const BLAST_GROWTH_PER_TICK: f64 = 1.5;

/// Radius decay per tick during the collapse phase.
pub const BLAST_DECAY_PER_TICK: f64 = 0.8;

// --- Installations ---

/// Number of cities at match start.
pub const CITY_COUNT: usize = 4;

/// Number of turrets at match start.
pub const TURRET_COUNT: usize = 3;

/// Rounds loaded into each turret at match start.
pub const TURRET_MAX_AMMO: u32 = 10;

/// Horizontal distance within which a ground impact destroys an installation.
pub const IMPACT_PROXIMITY: f64 = 30.0;

// --- Scoring ---

/// Points awarded per intercepted rocket.
pub const INTERCEPT_SCORE: u32 = 20;

/// Cumulative score at which the match is won.
pub const WIN_SCORE: u32 = 1000;
