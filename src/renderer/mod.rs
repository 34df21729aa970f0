//! Rendering seam
//!
//! The simulation never draws. Each frame the active scene produces a
//! read-only `Frame`, and whatever sink the host plugged in paints it.

pub mod headless;
pub mod snapshot;

pub use headless::HeadlessRenderer;
pub use snapshot::{AlienSprite, BlockSprite, Frame, Snapshot};

use crate::error::RenderError;

/// Consumer of per-frame snapshots
pub trait RenderSink {
    fn present(&mut self, frame: &Frame) -> Result<(), RenderError>;
}
