//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Time only advances through the `dt` handed to `tick`
//! - Seeded RNG only
//! - Stable iteration order (formation order, spawn order)
//! - No rendering, audio or platform dependencies

pub mod bonus;
pub mod collision;
pub mod formation;
pub mod rect;
pub mod state;
pub mod tick;
pub mod timer;

pub use bonus::{BonusController, BonusState, BonusTarget};
pub use collision::resolve_collisions;
pub use formation::{Direction, advance_formation, spawn_wave, step_formation};
pub use rect::Rect;
pub use state::{
    Alien, AlienKind, AlienMissile, Base, BaseBlock, GameEvent, GamePhase, GameState, Player,
    PlayerMissile, RunEnd, create_bases,
};
pub use tick::{TickInput, tick};
pub use timer::Timer;
