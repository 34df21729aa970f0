//! Scene routing
//!
//! Three scenes (title, play, end) behind one `Scene` trait. The
//! `SceneManager` owns all of them and forwards update/draw/layout to the
//! active one; scenes request transitions by returning the next `SceneKind`.

mod end;
mod play;
mod title;

pub use end::EndScene;
pub use play::PlayScene;
pub use title::TitleScene;

use std::time::Duration;

use crate::renderer::{Frame, RenderSink};

/// Per-frame input as sampled by the host
#[derive(Debug, Clone, Default)]
pub struct InputState {
    pub left: bool,
    pub right: bool,
    /// Fire key went down this frame
    pub fire_just_pressed: bool,
    /// Any other key or mouse button went down this frame
    pub any_just_pressed: bool,
}

impl InputState {
    /// "Press any key" check used by the title and end screens
    pub fn any_pressed(&self) -> bool {
        self.any_just_pressed || self.fire_just_pressed
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SceneKind {
    Title,
    Game,
    End,
}

pub trait Scene {
    /// Advance one frame; `Some(kind)` requests a transition
    fn update(&mut self, input: &InputState, dt: Duration) -> Option<SceneKind>;

    /// Read-only view of what to paint
    fn draw(&self) -> Frame;

    /// Logical size for the given window size
    fn layout(&self, outer_width: u32, outer_height: u32) -> (u32, u32) {
        (outer_width, outer_height)
    }
}

pub struct SceneManager {
    kind: SceneKind,
    title: TitleScene,
    play: PlayScene,
    end: EndScene,
}

impl SceneManager {
    pub fn new(play: PlayScene) -> Self {
        Self {
            kind: SceneKind::Title,
            title: TitleScene,
            play,
            end: EndScene::default(),
        }
    }

    pub fn kind(&self) -> SceneKind {
        self.kind
    }

    pub fn play(&self) -> &PlayScene {
        &self.play
    }

    pub fn end(&self) -> &EndScene {
        &self.end
    }

    fn active(&self) -> &dyn Scene {
        match self.kind {
            SceneKind::Title => &self.title,
            SceneKind::Game => &self.play,
            SceneKind::End => &self.end,
        }
    }

    fn active_mut(&mut self) -> &mut dyn Scene {
        match self.kind {
            SceneKind::Title => &mut self.title,
            SceneKind::Game => &mut self.play,
            SceneKind::End => &mut self.end,
        }
    }

    pub fn update(&mut self, input: &InputState, dt: Duration) {
        if let Some(next) = self.active_mut().update(input, dt) {
            self.transition_to(next);
        }
    }

    /// Hand the active scene's frame to `sink`; sink failures are logged only
    pub fn draw(&self, sink: &mut dyn RenderSink) {
        if let Err(e) = sink.present(&self.active().draw()) {
            log::warn!("Render error: {}", e);
        }
    }

    pub fn layout(&self, outer_width: u32, outer_height: u32) -> (u32, u32) {
        self.active().layout(outer_width, outer_height)
    }

    pub fn transition_to(&mut self, kind: SceneKind) {
        match kind {
            SceneKind::Game if self.play.is_over() => self.play.reset(),
            SceneKind::End => self.end.set_score(self.play.final_score()),
            _ => {}
        }
        log::info!("Scene {:?} -> {:?}", self.kind, kind);
        self.kind = kind;
    }
}
