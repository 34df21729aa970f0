use std::time::Duration;

use super::{InputState, Scene, SceneKind};
use crate::renderer::Frame;

/// Attract screen; any key starts a run
#[derive(Debug, Default)]
pub struct TitleScene;

impl Scene for TitleScene {
    fn update(&mut self, input: &InputState, _dt: Duration) -> Option<SceneKind> {
        input.any_pressed().then_some(SceneKind::Game)
    }

    fn draw(&self) -> Frame {
        Frame::Title
    }
}
