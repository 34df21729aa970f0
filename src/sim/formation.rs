//! Formation spawning and the movement / direction controller
//!
//! The formation moves as one unit: every live alien is checked against the
//! walls before anything moves, and a single boundary alien reverses the
//! whole formation.

use glam::IVec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::state::{Alien, AlienKind, AlienMissile, GameEvent, GameState};
use crate::consts::*;

/// Global horizontal travel direction of the formation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Direction {
    Left,
    Right,
}

impl Direction {
    pub fn flipped(self) -> Self {
        match self {
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }

    /// Signed horizontal unit
    pub fn sign(self) -> i32 {
        match self {
            Direction::Left => -1,
            Direction::Right => 1,
        }
    }
}

/// Build a fresh 12x5 formation. IDs are assigned from `first_id` upward.
///
/// Aliens are emitted column by column, top row first.
pub fn spawn_wave(first_id: u32) -> Vec<Alien> {
    let mut aliens = Vec::with_capacity((FORMATION_COLUMNS * FORMATION_ROWS) as usize);
    let mut id = first_id;
    for col in 0..FORMATION_COLUMNS {
        for row in 0..FORMATION_ROWS {
            let pos = IVec2::new(col * ALIEN_SIZE + FORMATION_PADDING, (row + 1) * ALIEN_SIZE);
            aliens.push(Alien::new(id, AlienKind::for_row(row), pos));
            id += 1;
        }
    }
    aliens
}

/// True if stepping in `direction` would put any live alien on or past a wall
pub fn hits_wall(aliens: &[Alien], direction: Direction) -> bool {
    aliens.iter().filter(|a| a.alive).any(|a| match direction {
        Direction::Left => a.pos.x - FORMATION_STEP_X <= 0,
        Direction::Right => a.pos.x + FORMATION_STEP_X >= PLAY_WIDTH - ALIEN_SIZE,
    })
}

/// One movement tick. Returns true if the formation reversed (and descended)
/// instead of moving sideways.
pub fn step_formation(aliens: &mut [Alien], direction: &mut Direction) -> bool {
    let reverse = hits_wall(aliens, *direction);
    let delta = if reverse {
        *direction = direction.flipped();
        IVec2::new(0, FORMATION_STEP_Y)
    } else {
        IVec2::new(direction.sign() * FORMATION_STEP_X, 0)
    };

    for alien in aliens.iter_mut().filter(|a| a.alive) {
        alien.pos += delta;
        alien.toggle_frame();
    }
    reverse
}

/// Roll enemy fire for every Top alien, respecting the in-flight cap
pub fn alien_fire(state: &mut GameState) {
    let shooters: Vec<IVec2> = state
        .aliens
        .iter()
        .filter(|a| a.alive && a.kind == AlienKind::Top)
        .map(|a| a.pos)
        .collect();

    for pos in shooters {
        if state.alien_missiles.len() >= MAX_ALIEN_MISSILES {
            break;
        }
        if !state.rng.random_bool(ALIEN_FIRE_CHANCE) {
            continue;
        }
        let id = state.next_entity_id();
        state.alien_missiles.push(AlienMissile {
            id,
            pos: IVec2::new(
                pos.x + ALIEN_SIZE / 2 - ALIEN_MISSILE_WIDTH / 2,
                pos.y + ALIEN_SIZE,
            ),
            vel: ALIEN_MISSILE_SPEED,
            consumed: false,
        });
    }
}

/// Advance the formation on an elapsed movement tick: step, fire, emit the
/// movement trigger and restart the cadence for the current formation size.
pub fn advance_formation(state: &mut GameState) {
    if state.live_aliens() == 0 {
        return;
    }
    if step_formation(&mut state.aliens, &mut state.direction) {
        log::trace!("Formation reversed, now heading {:?}", state.direction);
    }
    alien_fire(state);
    state.events.push(GameEvent::AlienMoved);
    state.restart_move_timer();
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_top_alien_fires_about_one_roll_in_ten() {
        let mut state = GameState::new(17);
        let shooter = state
            .aliens
            .iter()
            .position(|a| a.kind == AlienKind::Top)
            .unwrap();
        let shooter = state.aliens.swap_remove(shooter);
        state.aliens = vec![shooter];

        let rolls = 4_000;
        let mut shots = 0;
        for _ in 0..rolls {
            state.alien_missiles.clear();
            alien_fire(&mut state);
            shots += state.alien_missiles.len();
        }
        let rate = shots as f64 / rolls as f64;
        assert!((0.07..0.13).contains(&rate), "fire rate {rate}");
    }

    #[test]
    fn test_only_top_aliens_fire() {
        let mut state = GameState::new(17);
        state.aliens.retain(|a| a.kind != AlienKind::Top);
        for _ in 0..500 {
            alien_fire(&mut state);
        }
        assert!(state.alien_missiles.is_empty());
    }

    #[test]
    fn test_spawn_wave_composition() {
        let aliens = spawn_wave(1);
        assert_eq!(aliens.len(), 60);
        let count = |k: AlienKind| aliens.iter().filter(|a| a.kind == k).count();
        assert_eq!(count(AlienKind::Top), 12);
        assert_eq!(count(AlienKind::Middle), 24);
        assert_eq!(count(AlienKind::Bottom), 24);
        assert!(aliens.iter().all(|a| a.frame == 0 && a.alive));
    }

    #[test]
    fn test_spawn_wave_grid_positions() {
        let aliens = spawn_wave(1);
        for alien in &aliens {
            let col = (alien.pos.x - FORMATION_PADDING) / ALIEN_SIZE;
            let row = alien.pos.y / ALIEN_SIZE - 1;
            assert_eq!((alien.pos.x - FORMATION_PADDING) % ALIEN_SIZE, 0);
            assert!((0..FORMATION_COLUMNS).contains(&col));
            assert_eq!(alien.kind, AlienKind::for_row(row));
        }
        assert_eq!(aliens[0].pos, IVec2::new(64, 16));
        assert_eq!(aliens[59].pos, IVec2::new(64 + 11 * 16, 80));
        assert_eq!(aliens[59].id, 60);
    }

    #[test]
    fn test_points_per_kind() {
        assert_eq!(AlienKind::Top.points(), 40);
        assert_eq!(AlienKind::Middle.points(), 20);
        assert_eq!(AlienKind::Bottom.points(), 10);
    }

    #[test]
    fn test_step_moves_sideways_without_wall() {
        let mut aliens = spawn_wave(1);
        let before: Vec<IVec2> = aliens.iter().map(|a| a.pos).collect();
        let mut dir = Direction::Left;
        assert!(!step_formation(&mut aliens, &mut dir));
        assert_eq!(dir, Direction::Left);
        for (a, b) in aliens.iter().zip(before) {
            assert_eq!(a.pos, b - IVec2::new(FORMATION_STEP_X, 0));
            assert_eq!(a.frame, 1);
        }
    }

    #[test]
    fn test_single_boundary_alien_reverses_everyone() {
        let mut aliens = spawn_wave(1);
        aliens[0].pos.x = FORMATION_STEP_X;
        let before: Vec<IVec2> = aliens.iter().map(|a| a.pos).collect();
        let mut dir = Direction::Left;
        assert!(step_formation(&mut aliens, &mut dir));
        assert_eq!(dir, Direction::Right);
        for (a, b) in aliens.iter().zip(before) {
            assert_eq!(a.pos, b + IVec2::new(0, FORMATION_STEP_Y));
        }
    }

    #[test]
    fn test_dead_aliens_ignored_for_walls() {
        let mut aliens = spawn_wave(1);
        aliens[0].pos.x = 0;
        aliens[0].alive = false;
        assert!(!hits_wall(&aliens, Direction::Left));
    }

    #[test]
    fn test_alien_fire_respects_cap() {
        let mut state = GameState::new(7);
        for _ in 0..200 {
            alien_fire(&mut state);
            assert!(state.alien_missiles.len() <= MAX_ALIEN_MISSILES);
        }
        assert_eq!(state.alien_missiles.len(), MAX_ALIEN_MISSILES);

        let top_xs: Vec<i32> = state
            .aliens
            .iter()
            .filter(|a| a.kind == AlienKind::Top)
            .map(|a| a.pos.x + ALIEN_SIZE / 2 - ALIEN_MISSILE_WIDTH / 2)
            .collect();
        for missile in &state.alien_missiles {
            assert!(top_xs.contains(&missile.pos.x));
            assert_eq!(missile.pos.y, 2 * ALIEN_SIZE);
        }
    }

    proptest! {
        #[test]
        fn prop_reversal_iff_wall_crossed(
            xs in prop::collection::vec(0i32..(PLAY_WIDTH - ALIEN_SIZE), 1..20),
            going_left in any::<bool>(),
        ) {
            let mut aliens: Vec<Alien> = xs
                .iter()
                .enumerate()
                .map(|(i, &x)| Alien::new(i as u32, AlienKind::Bottom, IVec2::new(x, 40)))
                .collect();
            let start = if going_left { Direction::Left } else { Direction::Right };
            let expected = xs.iter().any(|&x| match start {
                Direction::Left => x - FORMATION_STEP_X <= 0,
                Direction::Right => x + FORMATION_STEP_X >= PLAY_WIDTH - ALIEN_SIZE,
            });

            let mut dir = start;
            let reversed = step_formation(&mut aliens, &mut dir);
            prop_assert_eq!(reversed, expected);

            for (alien, &x) in aliens.iter().zip(&xs) {
                if expected {
                    prop_assert_eq!(alien.pos, IVec2::new(x, 40 + FORMATION_STEP_Y));
                    prop_assert_eq!(dir, start.flipped());
                } else {
                    prop_assert_eq!(alien.pos, IVec2::new(x + start.sign() * FORMATION_STEP_X, 40));
                    prop_assert_eq!(dir, start);
                }
            }
        }
    }
}
