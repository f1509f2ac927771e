//! Headless demo: runs a short self-playing match and prints one snapshot
//! per second as a JSON line, for eyeballing or piping into tools.

use std::time::Duration;

use skywall_app::game_loop;
use skywall_app::state::{snapshot_cell, GameLoopCommand};
use skywall_core::commands::PlayerCommand;
use skywall_sim::engine::MatchConfig;

fn main() {
    let cell = snapshot_cell();
    let config = MatchConfig {
        // Live randomness for actual play; tests pin their own seeds.
        seed: rand::random(),
        ..Default::default()
    };
    let (tx, handle) = game_loop::spawn_game_loop(config, cell.clone());

    let _ = tx.send(GameLoopCommand::Player(PlayerCommand::StartMatch));

    for _ in 0..15 {
        std::thread::sleep(Duration::from_secs(1));

        let snapshot = match cell.lock() {
            Ok(cell) => cell.clone(),
            Err(_) => None,
        };
        let Some(snapshot) = snapshot else { continue };

        // Autopilot: shoot a bit below the lowest rocket to lead it.
        if let Some(rocket) = snapshot
            .rockets
            .iter()
            .max_by(|a, b| a.position.y.total_cmp(&b.position.y))
        {
            let _ = tx.send(GameLoopCommand::Player(PlayerCommand::FireAt {
                x: rocket.position.x,
                y: rocket.position.y + 60.0,
            }));
        }

        match serde_json::to_string(&snapshot) {
            Ok(json) => println!("{json}"),
            Err(err) => eprintln!("snapshot serialization failed: {err}"),
        }
    }

    let _ = tx.send(GameLoopCommand::Shutdown);
    let _ = handle.join();
}
