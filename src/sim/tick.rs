//! Per-frame simulation step
//!
//! Sequences player control, formation movement, projectiles, collisions,
//! the bonus target and wave respawn. This is the only writer of
//! `GameState` during a frame.

use std::time::Duration;

use glam::IVec2;

use super::collision::resolve_collisions;
use super::formation::advance_formation;
use super::state::{GameEvent, GamePhase, GameState, PlayerMissile, RunEnd};
use crate::consts::*;

/// Input commands for a single tick
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Move left held
    pub left: bool,
    /// Move right held
    pub right: bool,
    /// Fire key went down this frame
    pub fire: bool,
}

/// Advance the game state by one frame of `dt` wall-clock time
pub fn tick(state: &mut GameState, input: &TickInput, dt: Duration) {
    match state.phase {
        GamePhase::GameOver => return,
        GamePhase::DeathPause => {
            update_death_pause(state, dt);
            return;
        }
        GamePhase::Playing => {}
    }

    state.time_ticks += 1;

    update_player(state, input, dt);

    state.move_timer.update(dt);
    if state.move_timer.is_done() {
        advance_formation(state);
    }

    advance_projectiles(state);
    resolve_collisions(state);

    {
        let GameState {
            bonus, rng, events, ..
        } = state;
        bonus.update(dt, rng, events);
    }

    update_wave_respawn(state, dt);

    if formation_landed(state) {
        state.end_run(RunEnd::Invaded);
    }
}

/// Player movement, shoot cooldown and firing
fn update_player(state: &mut GameState, input: &TickInput, dt: Duration) {
    if input.left {
        state.player.move_by(-PLAYER_SPEED);
    }
    if input.right {
        state.player.move_by(PLAYER_SPEED);
    }

    state.player.shoot_timer.update(dt);
    if input.fire && state.player.can_shoot() {
        let id = state.next_entity_id();
        let player = &mut state.player;
        player.missiles.push(PlayerMissile {
            id,
            pos: IVec2::new(
                player.pos.x + PLAYER_WIDTH / 2 - PLAYER_MISSILE_WIDTH / 2,
                player.pos.y,
            ),
            vel: -PLAYER_MISSILE_SPEED,
            consumed: false,
        });
        player.shoot_timer.reset();
        player.shoot_timer.start();
        state.events.push(GameEvent::PlayerShot);
    }
}

fn advance_projectiles(state: &mut GameState) {
    for missile in &mut state.player.missiles {
        missile.pos.y += missile.vel;
    }
    for missile in &mut state.alien_missiles {
        missile.pos.y += missile.vel;
    }
}

/// Only the death timer runs while the player is down
fn update_death_pause(state: &mut GameState, dt: Duration) {
    state.death_timer.update(dt);
    if !state.death_timer.is_done() {
        return;
    }
    state.death_timer.reset();

    if state.player.lives > 0 {
        state.phase = GamePhase::Playing;
        state.player.respawn();
        state.events.push(GameEvent::PlayerRespawned);
    } else {
        state.end_run(RunEnd::LivesExhausted);
    }
}

/// Start the respawn delay once the formation is gone; spawn when it elapses
fn update_wave_respawn(state: &mut GameState, dt: Duration) {
    if !state.aliens.is_empty() {
        return;
    }
    if !state.wave_timer.is_running() {
        log::info!("Wave {} cleared", state.wave_index);
        state.wave_timer.start();
        state.events.push(GameEvent::WaveCleared);
        return;
    }

    state.wave_timer.update(dt);
    if state.wave_timer.is_done() {
        state.wave_timer.reset();
        state.spawn_formation();
    }
}

/// Any live alien touching the bottom of the play area
fn formation_landed(state: &GameState) -> bool {
    state
        .aliens
        .iter()
        .any(|a| a.alive && a.pos.y + ALIEN_SIZE >= PLAY_HEIGHT)
}
