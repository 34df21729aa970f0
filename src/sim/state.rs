//! Game state and core simulation types
//!
//! Plain entity records plus the `GameState` that owns them. The tick driver
//! in `tick.rs` is the only code that mutates a `GameState` during play.

use glam::IVec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::bonus::BonusController;
use super::formation::{Direction, spawn_wave};
use super::rect::Rect;
use super::timer::Timer;
use crate::consts::*;
use crate::move_interval;

/// Current phase of the play scene
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Normal play
    Playing,
    /// Player was hit; only the death timer advances
    DeathPause,
    /// Run ended (terminal)
    GameOver,
}

/// Why a run ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RunEnd {
    /// Last life lost and the death pause elapsed
    LivesExhausted,
    /// An alien reached the bottom of the play area
    Invaded,
}

/// Things that happened during a tick, drained by the play scene
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    /// Formation stepped (movement sound)
    AlienMoved,
    PlayerShot,
    AlienDestroyed { kind: AlienKind, points: u32 },
    BonusDestroyed { points: u32 },
    /// A missile chipped a base block
    BaseHit { destroyed: bool },
    PlayerKilled { lives_left: u8 },
    PlayerRespawned,
    BonusSpawned,
    /// Bonus target left the active state (shot or flew off)
    BonusRetired,
    WaveCleared,
    WaveSpawned { wave: u32 },
    GameOver { score: u32, reason: RunEnd },
}

/// Alien rows, top to bottom
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AlienKind {
    Top,
    Middle,
    Bottom,
}

impl AlienKind {
    pub fn points(&self) -> u32 {
        match self {
            AlienKind::Top => 40,
            AlienKind::Middle => 20,
            AlienKind::Bottom => 10,
        }
    }

    /// Kind for a formation row (0 = top)
    pub fn for_row(row: i32) -> Self {
        match row {
            0 => AlienKind::Top,
            1 | 2 => AlienKind::Middle,
            _ => AlienKind::Bottom,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alien {
    pub id: u32,
    pub kind: AlienKind,
    pub pos: IVec2,
    pub points: u32,
    /// Animation frame (0 or 1)
    pub frame: u8,
    /// Cleared when shot; dead aliens are compacted out after collisions
    pub alive: bool,
}

impl Alien {
    pub fn new(id: u32, kind: AlienKind, pos: IVec2) -> Self {
        Self {
            id,
            kind,
            pos,
            points: kind.points(),
            frame: 0,
            alive: true,
        }
    }

    pub fn rect(&self) -> Rect {
        Rect::from_pos(self.pos, ALIEN_SIZE, ALIEN_SIZE)
    }

    pub fn toggle_frame(&mut self) {
        self.frame = (self.frame + 1) % 2;
    }
}

/// A player shot, travelling up
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerMissile {
    pub id: u32,
    pub pos: IVec2,
    /// Pixels per tick (negative = up)
    pub vel: i32,
    pub consumed: bool,
}

impl PlayerMissile {
    pub fn rect(&self) -> Rect {
        Rect::from_pos(self.pos, PLAYER_MISSILE_WIDTH, PLAYER_MISSILE_HEIGHT)
    }

    /// 2x2 window at the missile center used against aliens and the bonus
    pub fn hit_window(&self) -> Rect {
        Rect::centered(self.rect().center(), 2, 2)
    }

    /// 4px wide window used against base blocks
    pub fn base_window(&self) -> Rect {
        let center = self.rect().center();
        Rect::new(center.x - 2, self.pos.y, 4, PLAYER_MISSILE_HEIGHT)
    }

    /// Fully above the play area
    pub fn is_off_screen(&self) -> bool {
        self.pos.y + PLAYER_MISSILE_HEIGHT <= 0
    }
}

/// An enemy shot, travelling down. Owned by the formation once fired.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlienMissile {
    pub id: u32,
    pub pos: IVec2,
    /// Pixels per tick (positive = down)
    pub vel: i32,
    pub consumed: bool,
}

impl AlienMissile {
    pub fn rect(&self) -> Rect {
        Rect::from_pos(self.pos, ALIEN_MISSILE_WIDTH, ALIEN_MISSILE_HEIGHT)
    }

    /// Fully below the play area
    pub fn is_off_screen(&self) -> bool {
        self.pos.y >= PLAY_HEIGHT
    }
}

/// One 8x8 cell of a defensive base
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BaseBlock {
    pub pos: IVec2,
    /// 0 = intact, 1-2 = damaged, 3 = destroyed
    pub damage: u8,
    pub exists: bool,
}

impl BaseBlock {
    pub fn new(pos: IVec2) -> Self {
        Self {
            pos,
            damage: 0,
            exists: true,
        }
    }

    pub fn rect(&self) -> Rect {
        Rect::from_pos(self.pos, BLOCK_SIZE, BLOCK_SIZE)
    }

    /// Apply one damage step; returns true if this step destroyed the block
    pub fn take_damage(&mut self) -> bool {
        if !self.exists {
            return false;
        }
        self.damage += 1;
        if self.damage >= BLOCK_DESTROYED_LEVEL {
            self.damage = BLOCK_DESTROYED_LEVEL;
            self.exists = false;
            return true;
        }
        false
    }

    /// Remove outright (alien contact)
    pub fn demolish(&mut self) {
        self.damage = BLOCK_DESTROYED_LEVEL;
        self.exists = false;
    }
}

/// A defensive base: 4x4 blocks with the two bottom-center cells missing
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Base {
    pub origin: IVec2,
    pub blocks: Vec<BaseBlock>,
}

impl Base {
    pub fn new(origin: IVec2) -> Self {
        let mut blocks = Vec::with_capacity(14);
        for row in 0..BASE_BLOCKS_PER_SIDE {
            for col in 0..BASE_BLOCKS_PER_SIDE {
                // Archway
                if row == BASE_BLOCKS_PER_SIDE - 1 && (col == 1 || col == 2) {
                    continue;
                }
                let pos = origin + IVec2::new(col * BLOCK_SIZE, row * BLOCK_SIZE);
                blocks.push(BaseBlock::new(pos));
            }
        }
        Self { origin, blocks }
    }
}

/// Build the row of bases, evenly spaced above the player
pub fn create_bases() -> Vec<Base> {
    let base_width = BASE_BLOCKS_PER_SIDE * BLOCK_SIZE;
    let spacing = (PLAY_WIDTH - BASE_COUNT * base_width) / (BASE_COUNT + 1);
    let base_y = PLAYER_Y - 8 - base_width;

    (0..BASE_COUNT)
        .map(|i| Base::new(IVec2::new(spacing + i * (base_width + spacing), base_y)))
        .collect()
}

/// The player's ship
#[derive(Debug, Clone)]
pub struct Player {
    pub pos: IVec2,
    pub lives: u8,
    pub score: u32,
    pub missiles: Vec<PlayerMissile>,
    pub shoot_timer: Timer,
}

impl Default for Player {
    fn default() -> Self {
        Self {
            pos: Self::spawn_pos(),
            lives: PLAYER_LIVES,
            score: 0,
            missiles: Vec::new(),
            shoot_timer: Timer::new(SHOOT_COOLDOWN),
        }
    }
}

impl Player {
    /// Horizontal center, bottom of the play area
    pub fn spawn_pos() -> IVec2 {
        IVec2::new((PLAY_WIDTH - PLAYER_WIDTH) / 2, PLAYER_Y)
    }

    pub fn rect(&self) -> Rect {
        Rect::from_pos(self.pos, PLAYER_WIDTH, PLAYER_HEIGHT)
    }

    /// Move horizontally, clamped to the play area
    pub fn move_by(&mut self, dx: i32) {
        self.pos.x = (self.pos.x + dx).clamp(0, PLAY_WIDTH - PLAYER_WIDTH);
    }

    pub fn can_shoot(&self) -> bool {
        !self.shoot_timer.is_running() || self.shoot_timer.is_done()
    }

    /// Position reset after a death pause (not a reconstruction)
    pub fn respawn(&mut self) {
        self.pos = Self::spawn_pos();
    }
}

/// Complete play-scene state
#[derive(Debug, Clone)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    pub rng: Pcg32,
    pub phase: GamePhase,
    /// Frame tick counter
    pub time_ticks: u64,
    /// Waves spawned so far (1-based once play starts)
    pub wave_index: u32,
    pub player: Player,
    /// Live formation, in spawn order
    pub aliens: Vec<Alien>,
    pub alien_missiles: Vec<AlienMissile>,
    pub bases: Vec<Base>,
    /// Global formation travel direction
    pub direction: Direction,
    pub move_timer: Timer,
    pub death_timer: Timer,
    pub wave_timer: Timer,
    pub bonus: BonusController,
    /// Set once the run ends
    pub run_end: Option<RunEnd>,
    /// Events produced since the last drain
    pub events: Vec<GameEvent>,
    next_id: u32,
}

impl GameState {
    /// Create a fresh run: first wave, bases, player, movement timer started
    pub fn new(seed: u64) -> Self {
        let mut state = Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            phase: GamePhase::Playing,
            time_ticks: 0,
            wave_index: 0,
            player: Player::default(),
            aliens: Vec::new(),
            alien_missiles: Vec::new(),
            bases: create_bases(),
            direction: Direction::Left,
            move_timer: Timer::new(move_interval(0)),
            death_timer: Timer::new(DEATH_PAUSE),
            wave_timer: Timer::new(WAVE_RESPAWN_DELAY),
            bonus: BonusController::default(),
            run_end: None,
            events: Vec::new(),
            next_id: 1,
        };

        state.spawn_formation();
        state
    }

    /// Allocate a new entity ID
    pub fn next_entity_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// Replace the formation with a fresh wave and restart the movement cadence
    pub fn spawn_formation(&mut self) {
        let first_id = self.next_id;
        self.aliens = spawn_wave(first_id);
        self.next_id += self.aliens.len() as u32;
        self.wave_index += 1;
        self.restart_move_timer();
        log::info!("Wave {} spawned ({} aliens)", self.wave_index, self.aliens.len());
        self.events.push(GameEvent::WaveSpawned {
            wave: self.wave_index,
        });
    }

    /// Re-derive the movement cadence from the live formation size and restart
    pub fn restart_move_timer(&mut self) {
        self.move_timer.set_duration(move_interval(self.live_aliens()));
        self.move_timer.start();
    }

    pub fn live_aliens(&self) -> usize {
        self.aliens.iter().filter(|a| a.alive).count()
    }

    pub fn is_dead(&self) -> bool {
        self.phase == GamePhase::DeathPause
    }

    pub fn is_over(&self) -> bool {
        self.phase == GamePhase::GameOver
    }

    /// End the run (terminal)
    pub fn end_run(&mut self, reason: RunEnd) {
        if self.is_over() {
            return;
        }
        log::info!("Run over ({:?}), final score {}", reason, self.player.score);
        if self.bonus.is_active() {
            self.events.push(GameEvent::BonusRetired);
        }
        self.phase = GamePhase::GameOver;
        self.run_end = Some(reason);
        self.events.push(GameEvent::GameOver {
            score: self.player.score,
            reason,
        });
    }

    /// Take all events produced since the last drain
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::bonus::{BonusState, BonusTarget};

    #[test]
    fn test_new_state_layout() {
        let state = GameState::new(1);
        assert_eq!(state.phase, GamePhase::Playing);
        assert_eq!(state.aliens.len(), 60);
        assert_eq!(state.bases.len(), 4);
        assert_eq!(state.player.lives, PLAYER_LIVES);
        assert_eq!(state.player.pos, IVec2::new(152, 224));
        assert!(state.move_timer.is_running());
        assert_eq!(state.move_timer.duration(), std::time::Duration::from_millis(1200));
        assert_eq!(state.wave_index, 1);
    }

    #[test]
    fn test_base_has_archway() {
        let base = Base::new(IVec2::new(38, 184));
        assert_eq!(base.blocks.len(), 14);
        let bottom_row_y = 184 + 3 * BLOCK_SIZE;
        let bottom: Vec<i32> = base
            .blocks
            .iter()
            .filter(|b| b.pos.y == bottom_row_y)
            .map(|b| b.pos.x)
            .collect();
        assert_eq!(bottom, vec![38, 38 + 3 * BLOCK_SIZE]);
    }

    #[test]
    fn test_bases_evenly_spaced() {
        let bases = create_bases();
        let xs: Vec<i32> = bases.iter().map(|b| b.origin.x).collect();
        assert_eq!(xs, vec![38, 108, 178, 248]);
        assert!(bases.iter().all(|b| b.origin.y == 184));
    }

    #[test]
    fn test_block_takes_three_hits() {
        let mut block = BaseBlock::new(IVec2::ZERO);
        assert!(!block.take_damage());
        assert!(!block.take_damage());
        assert!(block.exists);
        assert_eq!(block.damage, 2);
        assert!(block.take_damage());
        assert!(!block.exists);
        assert_eq!(block.damage, 3);

        // No resurrection, no further progression
        assert!(!block.take_damage());
        assert!(!block.exists);
        assert_eq!(block.damage, 3);
    }

    #[test]
    fn test_player_clamped_to_play_area() {
        let mut player = Player::default();
        player.move_by(-1000);
        assert_eq!(player.pos.x, 0);
        player.move_by(1000);
        assert_eq!(player.pos.x, PLAY_WIDTH - PLAYER_WIDTH);
    }

    #[test]
    fn test_missile_windows() {
        let missile = PlayerMissile {
            id: 1,
            pos: IVec2::new(100, 50),
            vel: -PLAYER_MISSILE_SPEED,
            consumed: false,
        };
        assert_eq!(missile.hit_window(), Rect::new(100, 52, 2, 2));
        assert_eq!(missile.base_window(), Rect::new(99, 50, 4, PLAYER_MISSILE_HEIGHT));
    }

    #[test]
    fn test_end_run_is_terminal() {
        let mut state = GameState::new(3);
        state.player.score = 70;
        state.end_run(RunEnd::Invaded);
        state.end_run(RunEnd::LivesExhausted);
        assert_eq!(state.run_end, Some(RunEnd::Invaded));
        let over: Vec<_> = state
            .drain_events()
            .into_iter()
            .filter(|e| matches!(e, GameEvent::GameOver { .. }))
            .collect();
        assert_eq!(
            over,
            vec![GameEvent::GameOver {
                score: 70,
                reason: RunEnd::Invaded
            }]
        );
    }

    #[test]
    fn test_end_run_stops_active_bonus() {
        let mut state = GameState::new(3);
        state.drain_events();
        state.bonus.state = BonusState::Active(BonusTarget::new());
        state.player.score = 140;

        state.end_run(RunEnd::LivesExhausted);
        assert_eq!(
            state.drain_events(),
            vec![
                GameEvent::BonusRetired,
                GameEvent::GameOver {
                    score: 140,
                    reason: RunEnd::LivesExhausted
                }
            ]
        );
    }

    #[test]
    fn test_end_run_without_bonus_only_reports_game_over() {
        let mut state = GameState::new(3);
        state.drain_events();
        state.end_run(RunEnd::Invaded);
        assert_eq!(
            state.drain_events(),
            vec![GameEvent::GameOver {
                score: 0,
                reason: RunEnd::Invaded
            }]
        );
    }
}
