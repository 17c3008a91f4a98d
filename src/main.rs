//! Tappy Jelly entry point
//!
//! Native builds run a headless session: a 60 Hz clock drives the game and a
//! simple autopilot taps to keep the jelly in the gap. Usage:
//!
//! ```text
//! tappy-jelly [config.json] [seconds]
//! ```

use tappy_jelly::sim::Game;
use tappy_jelly::{Assets, GameConfig, GameEvent, GamePhase};

/// Fixed frame time of the headless clock
const FRAME_DT: f32 = 1.0 / 60.0;
const DEFAULT_SECONDS: u32 = 30;

/// Tap when the jelly's reference point sinks this far below the gap centre
const AUTOPILOT_SLACK: f32 = 40.0;

fn autopilot(game: &mut Game) {
    let track = game.track();
    let gap_top = track.top_rect().y + track.height;
    let gap_bottom = track.bottom_rect().y;
    let target = (gap_top + gap_bottom) / 2.0;

    let player = game.player();
    let reference_y = player.y + game.config().reference_offset.y;
    if reference_y > target + AUTOPILOT_SLACK && player.vy > 0.0 {
        game.on_tap();
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("Tappy Jelly (headless) starting...");

    let mut args = std::env::args().skip(1);
    let config = match args.next() {
        Some(path) => GameConfig::load(path),
        None => GameConfig::default(),
    };
    let seconds = args
        .next()
        .and_then(|s| s.parse::<u32>().ok())
        .unwrap_or(DEFAULT_SECONDS);

    let mut game = Game::new(config);
    game.set_on_game_over(|score| log::info!("Game over! Score: {}", score));
    log::info!("Seed: {}", game.seed());

    // Landing screen: first tap starts the run
    game.on_tap();

    let assets = Assets::default();
    let mut jumps = 0u32;
    for _ in 0..seconds * 60 {
        autopilot(&mut game);
        game.on_frame(FRAME_DT);

        for event in game.drain_events() {
            match event {
                GameEvent::Jumped => jumps += 1,
                GameEvent::Scored { score } => log::info!("Score: {}", score),
                _ => log::debug!("{:?}", event),
            }
        }

        // Nothing is loaded headless, so the backend would paint only text
        let frame = game.draw_list(&assets);
        log::trace!("{} sprites, score text {:?}", frame.drawable().count(), frame.score.text);

        if game.phase() == GamePhase::Terminated {
            break;
        }
    }

    if game.phase() == GamePhase::Running {
        game.terminate();
    }

    match serde_json::to_string_pretty(&game.snapshot()) {
        Ok(json) => println!("{json}"),
        Err(e) => log::error!("Cannot encode snapshot: {}", e),
    }
    println!("Final score: {} ({} jumps)", game.score(), jumps);
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // Web hosts drive `Game` directly; there is no headless session
}
