use std::time::Duration;

use super::{InputState, Scene, SceneKind};
use crate::renderer::Frame;

/// Game-over screen showing the final score; any key starts a new run
#[derive(Debug, Default)]
pub struct EndScene {
    score: u32,
}

impl EndScene {
    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn set_score(&mut self, score: u32) {
        self.score = score;
    }
}

impl Scene for EndScene {
    fn update(&mut self, input: &InputState, _dt: Duration) -> Option<SceneKind> {
        input.any_pressed().then_some(SceneKind::Game)
    }

    fn draw(&self) -> Frame {
        Frame::End { score: self.score }
    }
}
