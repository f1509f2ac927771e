//! Match engine — the core of the game.
//!
//! `MatchEngine` owns the hecs ECS world, processes player commands at tick
//! boundaries, runs the per-tick system sequence, and produces
//! `MatchSnapshot`s. Completely headless (no windowing or timer
//! dependency), enabling deterministic testing.

use std::collections::VecDeque;

use hecs::World;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use skywall_core::commands::PlayerCommand;
use skywall_core::enums::MatchPhase;
use skywall_core::events::GameEvent;
use skywall_core::state::MatchSnapshot;
use skywall_core::types::{Point, SimTime, Viewport};

use crate::systems;
use crate::systems::spawner::SpawnClock;
use crate::world_setup;

/// Configuration for a new match engine.
pub struct MatchConfig {
    /// RNG seed. Tests pin this; the app seeds from entropy so gameplay
    /// randomness is live.
    pub seed: u64,
    /// Initial canvas dimensions.
    pub viewport: Viewport,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            viewport: Viewport::default(),
        }
    }
}

/// The match engine. Owns the ECS world and all per-match state.
pub struct MatchEngine {
    world: World,
    time: SimTime,
    phase: MatchPhase,
    viewport: Viewport,
    rng: ChaCha8Rng,
    score: u32,
    next_id: u32,
    spawn_clock: SpawnClock,
    command_queue: VecDeque<PlayerCommand>,
    despawn_buffer: Vec<hecs::Entity>,
    events: Vec<GameEvent>,
}

impl MatchEngine {
    /// Create a new engine with the given config. No match is running
    /// until a `StartMatch` command arrives.
    pub fn new(config: MatchConfig) -> Self {
        Self {
            world: World::new(),
            time: SimTime::default(),
            phase: MatchPhase::default(),
            viewport: config.viewport,
            rng: ChaCha8Rng::seed_from_u64(config.seed),
            score: 0,
            next_id: 0,
            spawn_clock: SpawnClock::default(),
            command_queue: VecDeque::new(),
            despawn_buffer: Vec::new(),
            events: Vec::new(),
        }
    }

    /// Queue a player command for processing at the next tick boundary.
    pub fn queue_command(&mut self, command: PlayerCommand) {
        self.command_queue.push_back(command);
    }

    /// Queue multiple commands.
    pub fn queue_commands(&mut self, commands: impl IntoIterator<Item = PlayerCommand>) {
        self.command_queue.extend(commands);
    }

    /// Advance the simulation by one tick and return the resulting snapshot.
    ///
    /// Outside `InProgress` (menu or a terminal phase) this only drains
    /// commands and rebuilds the snapshot — the tick body never re-enters
    /// a finished match.
    pub fn tick(&mut self) -> MatchSnapshot {
        self.process_commands();

        if self.phase == MatchPhase::InProgress {
            self.run_systems();
            self.time.advance();
        }

        let events = std::mem::take(&mut self.events);
        systems::snapshot::build_snapshot(
            &self.world,
            &self.time,
            self.phase,
            self.score,
            &self.viewport,
            events,
        )
    }

    /// Get the current match phase.
    pub fn phase(&self) -> MatchPhase {
        self.phase
    }

    /// Get the current simulation time.
    pub fn time(&self) -> SimTime {
        self.time
    }

    /// Get the cumulative score.
    pub fn score(&self) -> u32 {
        self.score
    }

    /// Get the current viewport.
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// Get a read-only reference to the ECS world.
    pub fn world(&self) -> &World {
        &self.world
    }

    /// Process all queued commands.
    fn process_commands(&mut self) {
        while let Some(command) = self.command_queue.pop_front() {
            self.handle_command(command);
        }
    }

    /// Handle a single player command.
    fn handle_command(&mut self, command: PlayerCommand) {
        match command {
            PlayerCommand::StartMatch => {
                if matches!(
                    self.phase,
                    MatchPhase::NotStarted | MatchPhase::Won | MatchPhase::Lost
                ) {
                    self.reset_match();
                }
            }
            PlayerCommand::RestartMatch => {
                self.reset_match();
            }
            PlayerCommand::FireAt { x, y } => {
                if self.phase == MatchPhase::InProgress {
                    systems::fire_control::fire_at(
                        &mut self.world,
                        &self.viewport,
                        Point::new(x, y),
                        &mut self.next_id,
                        &mut self.events,
                    );
                }
            }
            PlayerCommand::Resize { width, height } => {
                // Layout adjustment, not a reset: in-flight entities keep
                // their targets; new spawns and launches use the new
                // ground plane.
                self.viewport = Viewport::new(width, height);
            }
        }
    }

    /// Atomically replace the match: fresh world, zeroed counters, clock,
    /// and score, then a new installation layout. Runs only between ticks,
    /// so no system pass can observe the discarded world.
    fn reset_match(&mut self) {
        self.world = World::new();
        self.time = SimTime::default();
        self.score = 0;
        self.next_id = 0;
        self.spawn_clock = SpawnClock::default();
        self.events.clear();
        world_setup::setup_match(&mut self.world, &self.viewport, &mut self.next_id);
        self.phase = MatchPhase::InProgress;
    }

    /// Run all systems in order.
    fn run_systems(&mut self) {
        // 1. Time-gated rocket spawning
        systems::spawner::run(
            &mut self.world,
            &mut self.rng,
            &mut self.spawn_clock,
            &self.time,
            &self.viewport,
            self.score,
            &mut self.next_id,
        );
        // 2. Straight-line kinematics
        systems::movement::run(&mut self.world);
        // 3. Ground impacts and missile detonations
        systems::impact::run(
            &mut self.world,
            &mut self.next_id,
            &mut self.despawn_buffer,
            &mut self.events,
        );
        // 4. Blast animation, kill checks, chained explosions
        systems::blast::run(
            &mut self.world,
            &mut self.next_id,
            &mut self.score,
            &mut self.despawn_buffer,
            &mut self.events,
        );
        // 5. Terminal conditions (win checked before loss)
        if let Some(outcome) = systems::evaluator::run(&self.world, self.score) {
            self.events.push(match outcome {
                MatchPhase::Won => GameEvent::MatchWon,
                _ => GameEvent::MatchLost,
            });
            self.phase = outcome;
        }
        // 6. Purge spent explosions
        systems::cleanup::run(&mut self.world, &mut self.despawn_buffer);
    }

    /// Spawn a rocket with explicit kinematics (for tests).
    #[cfg(test)]
    pub fn spawn_rocket_at(&mut self, start: Point, target: Point, speed: f64) -> u32 {
        world_setup::spawn_rocket_at(&mut self.world, &mut self.next_id, start, target, speed, 0.0)
    }

    /// Spawn an explosion at a fixed point (for tests).
    #[cfg(test)]
    pub fn spawn_explosion_at(&mut self, pos: Point, max_radius: f64) -> u32 {
        world_setup::spawn_explosion(&mut self.world, &mut self.next_id, pos, max_radius)
    }

    /// Override the score (for tests exercising thresholds).
    #[cfg(test)]
    pub fn set_score(&mut self, score: u32) {
        self.score = score;
    }

    /// Get a mutable reference to the ECS world (for tests).
    #[cfg(test)]
    pub fn world_mut(&mut self) -> &mut World {
        &mut self.world
    }
}
