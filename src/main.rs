//! Invaders headless runner
//!
//! Plays one run at a fixed 60 Hz step with a simple autopilot, then prints
//! the final play-field snapshot as JSON.
//!
//! Usage: `invaders [settings.json] [frames]`

use std::path::Path;
use std::time::Duration;

use invaders::audio::LogBackend;
use invaders::renderer::{Frame, HeadlessRenderer, Snapshot};
use invaders::scene::PlayScene;
use invaders::sim::GameState;
use invaders::{AudioManager, InputState, SceneKind, SceneManager, Settings};

const FRAME_DT: Duration = Duration::from_micros(16_667);
const DEFAULT_FRAMES: u64 = 60 * 60 * 5;

/// Steer under the nearest alien column and fire whenever possible
fn autopilot(state: &GameState) -> InputState {
    let player_x = state.player.rect().center().x;
    let target = state
        .aliens
        .iter()
        .filter(|a| a.alive)
        .map(|a| a.rect().center().x)
        .min_by_key(|x| (x - player_x).abs());

    let (left, right) = match target {
        Some(x) if x < player_x - 1 => (true, false),
        Some(x) if x > player_x + 1 => (false, true),
        _ => (false, false),
    };

    InputState {
        left,
        right,
        fire_just_pressed: state.player.can_shoot(),
        any_just_pressed: false,
    }
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let mut args = std::env::args().skip(1);
    let settings = match args.next() {
        Some(path) => Settings::load_from(Path::new(&path)),
        None => Settings::default(),
    };
    let frames = match args.next().map(|s| s.parse::<u64>()) {
        Some(Ok(n)) => n,
        Some(Err(e)) => {
            log::warn!("Bad frame count ({}), using {}", e, DEFAULT_FRAMES);
            DEFAULT_FRAMES
        }
        None => DEFAULT_FRAMES,
    };

    let seed = settings.seed.unwrap_or_else(rand::random);
    log::info!("Invaders (headless) starting, seed {}, {} frames", seed, frames);

    let audio = AudioManager::with_settings(Box::new(LogBackend), &settings);
    let mut manager = SceneManager::new(PlayScene::new(seed, audio));
    let mut renderer = HeadlessRenderer::new();

    for _ in 0..frames {
        let input = match manager.kind() {
            SceneKind::Title => InputState {
                any_just_pressed: true,
                ..Default::default()
            },
            SceneKind::Game => autopilot(manager.play().state()),
            SceneKind::End => break,
        };
        manager.update(&input, FRAME_DT);
        manager.draw(&mut renderer);
    }

    let state = manager.play().state();
    log::info!(
        "Stopped after {} frames: wave {}, score {}, lives {}, outcome {:?}, audio failures {}",
        renderer.frames(),
        state.wave_index,
        state.player.score,
        state.player.lives,
        state.run_end,
        manager.play().audio().failures(),
    );

    match serde_json::to_string_pretty(&Frame::Game(Snapshot::capture(state))) {
        Ok(json) => println!("{}", json),
        Err(e) => {
            log::error!("Failed to serialize snapshot: {}", e);
            std::process::exit(1);
        }
    }
}
