use std::time::Duration;

use super::{InputState, Scene, SceneKind};
use crate::audio::AudioManager;
use crate::consts::{PLAY_HEIGHT, PLAY_WIDTH};
use crate::renderer::{Frame, Snapshot};
use crate::sim::{GameState, TickInput, tick};

/// The playing field: owns the run state and the injected audio
pub struct PlayScene {
    state: GameState,
    audio: AudioManager,
    /// Runs started so far, mixed into the seed on reset
    runs: u64,
}

impl PlayScene {
    pub fn new(seed: u64, audio: AudioManager) -> Self {
        Self {
            state: GameState::new(seed),
            audio,
            runs: 1,
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut GameState {
        &mut self.state
    }

    pub fn audio(&self) -> &AudioManager {
        &self.audio
    }

    pub fn is_over(&self) -> bool {
        self.state.is_over()
    }

    pub fn final_score(&self) -> u32 {
        self.state.player.score
    }

    /// Discard the finished run and start a fresh one
    pub fn reset(&mut self) {
        let seed = self.state.seed.wrapping_add(self.runs);
        self.runs += 1;
        log::info!("New run (seed {})", seed);
        self.state = GameState::new(seed);
    }
}

impl Scene for PlayScene {
    fn update(&mut self, input: &InputState, dt: Duration) -> Option<SceneKind> {
        let tick_input = TickInput {
            left: input.left,
            right: input.right,
            fire: input.fire_just_pressed,
        };
        tick(&mut self.state, &tick_input, dt);

        for event in self.state.drain_events() {
            self.audio.handle_event(&event);
        }

        self.state.is_over().then_some(SceneKind::End)
    }

    fn draw(&self) -> Frame {
        Frame::Game(Snapshot::capture(&self.state))
    }

    fn layout(&self, _outer_width: u32, _outer_height: u32) -> (u32, u32) {
        (PLAY_WIDTH as u32, PLAY_HEIGHT as u32)
    }
}
