//! Snake Arcade entry point
//!
//! There is no windowing backend here; the binary plays a short scripted
//! session through the menu and a round of snake, then prints the final board
//! using the text renderer. Set `RUST_LOG=debug` to follow the simulation.

use std::time::{SystemTime, UNIX_EPOCH};

use snake_arcade::input::{Key, KeyboardState};
use snake_arcade::render::TextRenderer;
use snake_arcade::{App, GameOptions};

/// Simulated display rate
const FRAME_DT: f32 = 1.0 / 60.0;

/// Keys held and for how many frames
const SCRIPT: &[(&[Key], usize)] = &[
    // Menu: lower the difficulty to 6, then Play
    (&[], 2),
    (&[Key::Down], 1),
    (&[], 1),
    (&[Key::Left], 1),
    (&[], 1),
    (&[Key::Left], 1),
    (&[], 1),
    (&[Key::Left], 1),
    (&[], 1),
    (&[Key::Up], 1),
    (&[], 1),
    (&[Key::Confirm], 1),
    // Game: start heading right and wander
    (&[Key::Right], 90),
    (&[Key::Down], 60),
    (&[], 30),
    (&[Key::Left], 90),
    (&[Key::Up], 45),
    (&[Key::Pause], 1),
    (&[], 120),
    (&[Key::Pause], 1),
    (&[Key::Right], 60),
    (&[Key::Down], 120),
];

fn main() {
    env_logger::init();

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0);
    log::info!("Snake Arcade (headless) starting with seed {}", seed);

    let mut app = App::new(GameOptions::default(), seed);
    let mut input = KeyboardState::new();
    let mut renderer = TextRenderer::new();

    'script: for (keys, frames) in SCRIPT {
        for _ in 0..*frames {
            input.update(keys.iter().copied());
            if !app.frame(&input, FRAME_DT, &mut renderer) {
                break 'script;
            }
        }
    }

    println!("{}", renderer.frame());
    println!(
        "\nDifficulty {}  High score {}",
        app.options().difficulty(),
        app.options().high_score()
    );
    match app.options().to_json() {
        Ok(json) => log::debug!("Options: {}", json),
        Err(e) => log::warn!("Could not serialize options: {}", e),
    }
}
