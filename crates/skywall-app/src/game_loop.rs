//! Frame-driver thread — runs the match engine at 60 Hz.
//!
//! Commands arrive via an `mpsc` channel and are drained at the top of
//! each frame; the resulting snapshot is published into the shared cell
//! for synchronous polling. Input therefore never races the tick body:
//! both run on this one thread, with the channel as the only boundary.

use std::sync::mpsc;
use std::thread::JoinHandle;
use std::time::{Duration, Instant};

use skywall_core::constants::TICK_RATE;
use skywall_sim::engine::{MatchConfig, MatchEngine};

use crate::state::{GameLoopCommand, SnapshotCell};

/// Nominal duration of one frame.
const TICK_DURATION: Duration = Duration::from_nanos(1_000_000_000 / TICK_RATE as u64);

/// Spawn the frame driver in a new thread.
///
/// Returns the command sender and the thread handle. The loop exits on
/// `Shutdown` or once every sender has been dropped.
pub fn spawn_game_loop(
    config: MatchConfig,
    latest_snapshot: SnapshotCell,
) -> (mpsc::Sender<GameLoopCommand>, JoinHandle<()>) {
    let (cmd_tx, cmd_rx) = mpsc::channel::<GameLoopCommand>();

    let handle = std::thread::Builder::new()
        .name("skywall-frame-driver".into())
        .spawn(move || {
            run_game_loop(config, cmd_rx, &latest_snapshot);
        })
        .expect("Failed to spawn frame driver thread");

    (cmd_tx, handle)
}

/// The frame loop. Runs until Shutdown command or channel disconnect.
fn run_game_loop(
    config: MatchConfig,
    cmd_rx: mpsc::Receiver<GameLoopCommand>,
    latest_snapshot: &SnapshotCell,
) {
    let mut engine = MatchEngine::new(config);
    let mut next_tick_time = Instant::now();

    loop {
        // 1. Drain all pending commands
        loop {
            match cmd_rx.try_recv() {
                Ok(GameLoopCommand::Player(cmd)) => engine.queue_command(cmd),
                Ok(GameLoopCommand::Shutdown) => return,
                Err(mpsc::TryRecvError::Empty) => break,
                Err(mpsc::TryRecvError::Disconnected) => return,
            }
        }

        // 2. Advance one tick (the engine handles terminal phases internally)
        let snapshot = engine.tick();

        // 3. Publish for synchronous polling. A poisoned lock skips the
        //    publish for this frame only; the loop keeps running.
        if let Ok(mut cell) = latest_snapshot.lock() {
            *cell = Some(snapshot);
        }

        // 4. Sleep until the next frame deadline
        next_tick_time += TICK_DURATION;
        let now = Instant::now();
        if next_tick_time > now {
            std::thread::sleep(next_tick_time - now);
        } else if now - next_tick_time > TICK_DURATION * 2 {
            // Too far behind — reset to avoid a catch-up spiral
            next_tick_time = now;
        }
    }
}
