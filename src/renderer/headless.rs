//! Headless render sink
//!
//! Paints nothing. Counts presented frames and keeps the most recent one so
//! the binary and tests can inspect what would have been drawn.

use super::{Frame, RenderSink};
use crate::error::RenderError;

#[derive(Debug, Default)]
pub struct HeadlessRenderer {
    frames: u64,
    last: Option<Frame>,
}

impl HeadlessRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }

    pub fn last_frame(&self) -> Option<&Frame> {
        self.last.as_ref()
    }
}

impl RenderSink for HeadlessRenderer {
    fn present(&mut self, frame: &Frame) -> Result<(), RenderError> {
        self.frames += 1;
        self.last = Some(frame.clone());
        Ok(())
    }
}
