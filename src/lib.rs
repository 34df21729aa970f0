//! Invaders - a fixed-formation arcade shooter core
//!
//! Core modules:
//! - `sim`: Deterministic simulation (formation, projectiles, collisions, game state)
//! - `audio`: Sound-trigger dispatch to an injected backend
//! - `renderer`: Read-only frame snapshots and the render sink seam
//! - `scene`: Title / play / end scene routing
//! - `settings`: User preferences

pub mod audio;
pub mod error;
pub mod renderer;
pub mod scene;
pub mod settings;
pub mod sim;

pub use audio::{AudioBackend, AudioManager, SoundEffect};
pub use error::{AudioError, RenderError, SettingsError};
pub use scene::{InputState, SceneKind, SceneManager};
pub use settings::Settings;

use std::time::Duration;

/// Game configuration constants
pub mod consts {
    use std::time::Duration;

    /// Logical play area
    pub const PLAY_WIDTH: i32 = 320;
    pub const PLAY_HEIGHT: i32 = 240;

    /// Alien sprite size (square) and formation grid cell
    pub const ALIEN_SIZE: i32 = 16;
    /// Horizontal offset of the first formation column
    pub const FORMATION_PADDING: i32 = 64;
    pub const FORMATION_COLUMNS: i32 = 12;
    pub const FORMATION_ROWS: i32 = 5;
    /// Horizontal distance per movement tick
    pub const FORMATION_STEP_X: i32 = 8;
    /// Vertical distance on a reversal tick
    pub const FORMATION_STEP_Y: i32 = 8;
    /// Movement cadence per live alien (formation shrinks => faster)
    pub const MOVE_INTERVAL_PER_ALIEN: Duration = Duration::from_millis(20);

    /// Chance per Top alien per movement tick to fire
    pub const ALIEN_FIRE_CHANCE: f64 = 0.1;
    /// Maximum enemy missiles in flight
    pub const MAX_ALIEN_MISSILES: usize = 3;

    /// Player ship
    pub const PLAYER_WIDTH: i32 = 16;
    pub const PLAYER_HEIGHT: i32 = 8;
    pub const PLAYER_SPEED: i32 = 2;
    pub const PLAYER_Y: i32 = PLAY_HEIGHT - PLAYER_HEIGHT - 8;
    pub const PLAYER_LIVES: u8 = 5;
    pub const SHOOT_COOLDOWN: Duration = Duration::from_millis(500);

    /// Projectiles (pixels per frame tick)
    pub const PLAYER_MISSILE_WIDTH: i32 = 2;
    pub const PLAYER_MISSILE_HEIGHT: i32 = 6;
    pub const PLAYER_MISSILE_SPEED: i32 = 3;
    pub const ALIEN_MISSILE_WIDTH: i32 = 3;
    pub const ALIEN_MISSILE_HEIGHT: i32 = 7;
    pub const ALIEN_MISSILE_SPEED: i32 = 2;

    /// Defensive bases
    pub const BASE_COUNT: i32 = 4;
    pub const BLOCK_SIZE: i32 = 8;
    pub const BASE_BLOCKS_PER_SIDE: i32 = 4;
    /// Damage level at which a block is gone for good
    pub const BLOCK_DESTROYED_LEVEL: u8 = 3;

    /// Bonus target (UFO)
    pub const BONUS_WIDTH: i32 = 16;
    pub const BONUS_HEIGHT: i32 = 7;
    pub const BONUS_Y: i32 = 4;
    pub const BONUS_SPEED: i32 = 1;
    pub const BONUS_POINTS: u32 = 100;
    pub const BONUS_KILL_THRESHOLD: u32 = 10;
    /// Cooldown range in seconds, [min, max)
    pub const BONUS_COOLDOWN_MIN_SECS: f32 = 10.0;
    pub const BONUS_COOLDOWN_MAX_SECS: f32 = 30.0;

    /// Run pacing
    pub const DEATH_PAUSE: Duration = Duration::from_millis(1500);
    pub const WAVE_RESPAWN_DELAY: Duration = Duration::from_secs(3);
}

/// Movement cadence for a formation of `alive` aliens
#[inline]
pub fn move_interval(alive: usize) -> Duration {
    consts::MOVE_INTERVAL_PER_ALIEN * alive as u32
}
