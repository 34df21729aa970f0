//! Bonus target (UFO) controller
//!
//! Absent -> Active once enough aliens have been shot since the last spawn;
//! Active -> Cooldown when the target is shot or flies off the left edge;
//! Cooldown -> Absent after a random 10-30 s delay.

use std::time::Duration;

use glam::IVec2;
use rand::Rng;

use super::rect::Rect;
use super::state::GameEvent;
use super::timer::Timer;
use crate::consts::*;

/// The live bonus flyer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BonusTarget {
    pub pos: IVec2,
    /// Pixels per advancing tick
    pub speed: i32,
    /// Ticks since spawn; the target advances on every other tick
    pub frame_counter: u32,
}

impl BonusTarget {
    pub fn new() -> Self {
        Self {
            pos: IVec2::new(PLAY_WIDTH, BONUS_Y),
            speed: BONUS_SPEED,
            frame_counter: 0,
        }
    }

    pub fn rect(&self) -> Rect {
        Rect::from_pos(self.pos, BONUS_WIDTH, BONUS_HEIGHT)
    }

    /// Fully past the left edge
    pub fn is_off_screen(&self) -> bool {
        self.pos.x + BONUS_WIDTH <= 0
    }

    fn advance(&mut self) {
        self.frame_counter += 1;
        if self.frame_counter % 2 == 0 {
            self.pos.x -= self.speed;
        }
    }
}

impl Default for BonusTarget {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BonusState {
    Absent,
    Active(BonusTarget),
    Cooldown,
}

#[derive(Debug, Clone)]
pub struct BonusController {
    pub state: BonusState,
    /// Aliens destroyed since the last spawn
    pub kills: u32,
    pub cooldown: Timer,
}

impl Default for BonusController {
    fn default() -> Self {
        Self {
            state: BonusState::Absent,
            kills: 0,
            cooldown: Timer::new(Duration::ZERO),
        }
    }
}

impl BonusController {
    pub fn record_kill(&mut self) {
        self.kills += 1;
    }

    pub fn is_active(&self) -> bool {
        matches!(self.state, BonusState::Active(_))
    }

    pub fn target(&self) -> Option<&BonusTarget> {
        match &self.state {
            BonusState::Active(target) => Some(target),
            _ => None,
        }
    }

    /// Per-frame update: spawn, move, or count down the cooldown
    pub fn update<R: Rng>(&mut self, dt: Duration, rng: &mut R, events: &mut Vec<GameEvent>) {
        match &mut self.state {
            BonusState::Absent => {
                if self.kills >= BONUS_KILL_THRESHOLD {
                    self.kills = 0;
                    self.state = BonusState::Active(BonusTarget::new());
                    log::debug!("Bonus target spawned");
                    events.push(GameEvent::BonusSpawned);
                }
            }
            BonusState::Active(target) => {
                target.advance();
                if target.is_off_screen() {
                    self.retire(rng, events);
                }
            }
            BonusState::Cooldown => {
                self.cooldown.update(dt);
                if self.cooldown.is_done() {
                    self.cooldown.reset();
                    self.state = BonusState::Absent;
                }
            }
        }
    }

    /// Leave the active state (shot down or off screen) and start a fresh
    /// random cooldown. No-op unless a target is active.
    pub fn retire<R: Rng>(&mut self, rng: &mut R, events: &mut Vec<GameEvent>) {
        if !self.is_active() {
            return;
        }
        let secs = rng.random_range(BONUS_COOLDOWN_MIN_SECS..BONUS_COOLDOWN_MAX_SECS);
        self.cooldown.set_duration(Duration::from_secs_f32(secs));
        self.cooldown.start();
        self.state = BonusState::Cooldown;
        log::debug!("Bonus target retired, cooldown {:.1}s", secs);
        events.push(GameEvent::BonusRetired);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    const FRAME: Duration = Duration::from_millis(16);

    fn controller_with_kills(kills: u32) -> BonusController {
        BonusController {
            kills,
            ..Default::default()
        }
    }

    #[test]
    fn test_no_spawn_before_threshold() {
        let mut rng = Pcg32::seed_from_u64(1);
        let mut events = Vec::new();
        let mut bonus = controller_with_kills(BONUS_KILL_THRESHOLD - 1);
        bonus.update(FRAME, &mut rng, &mut events);
        assert_eq!(bonus.state, BonusState::Absent);

        bonus.record_kill();
        bonus.update(FRAME, &mut rng, &mut events);
        assert!(bonus.is_active());
        assert_eq!(bonus.kills, 0);
        assert_eq!(events, vec![GameEvent::BonusSpawned]);
    }

    #[test]
    fn test_moves_every_other_tick() {
        let mut rng = Pcg32::seed_from_u64(1);
        let mut events = Vec::new();
        let mut bonus = controller_with_kills(BONUS_KILL_THRESHOLD);
        bonus.update(FRAME, &mut rng, &mut events);

        bonus.update(FRAME, &mut rng, &mut events);
        assert_eq!(bonus.target().map(|t| t.pos.x), Some(PLAY_WIDTH));
        bonus.update(FRAME, &mut rng, &mut events);
        assert_eq!(bonus.target().map(|t| t.pos.x), Some(PLAY_WIDTH - BONUS_SPEED));
    }

    #[test]
    fn test_retires_off_left_edge_into_cooldown() {
        let mut rng = Pcg32::seed_from_u64(2);
        let mut events = Vec::new();
        let mut bonus = controller_with_kills(BONUS_KILL_THRESHOLD);
        bonus.update(FRAME, &mut rng, &mut events);

        // Kills during the flight must not spawn a second target
        for _ in 0..20 {
            bonus.record_kill();
        }
        let mut ticks = 0;
        while bonus.is_active() {
            bonus.update(FRAME, &mut rng, &mut events);
            ticks += 1;
            assert!(ticks < 10_000);
        }
        assert_eq!(bonus.state, BonusState::Cooldown);
        assert_eq!(events.last(), Some(&GameEvent::BonusRetired));
        assert_eq!(
            events.iter().filter(|e| **e == GameEvent::BonusSpawned).count(),
            1
        );
        let cooldown = bonus.cooldown.duration();
        assert!(cooldown >= Duration::from_secs(10) && cooldown < Duration::from_secs(30));
    }

    #[test]
    fn test_cooldown_gates_respawn() {
        let mut rng = Pcg32::seed_from_u64(3);
        let mut events = Vec::new();
        let mut bonus = controller_with_kills(BONUS_KILL_THRESHOLD);
        bonus.update(FRAME, &mut rng, &mut events);
        bonus.retire(&mut rng, &mut events);
        bonus.kills = BONUS_KILL_THRESHOLD;

        let cooldown = bonus.cooldown.duration();
        bonus.update(cooldown - Duration::from_millis(1), &mut rng, &mut events);
        assert_eq!(bonus.state, BonusState::Cooldown);
        bonus.update(Duration::from_millis(1), &mut rng, &mut events);
        assert_eq!(bonus.state, BonusState::Absent);
        bonus.update(FRAME, &mut rng, &mut events);
        assert!(bonus.is_active());
    }

    #[test]
    fn test_retire_when_absent_is_noop() {
        let mut rng = Pcg32::seed_from_u64(4);
        let mut events = Vec::new();
        let mut bonus = BonusController::default();
        bonus.retire(&mut rng, &mut events);
        assert_eq!(bonus.state, BonusState::Absent);
        assert!(events.is_empty());
    }
}
