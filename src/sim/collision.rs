//! Collision resolution
//!
//! Five ordered passes run once per frame. Hits only mark entities (alien
//! `alive`, missile `consumed`); the final pass compacts the arenas so indices
//! stay stable while the earlier passes run.

use super::rect::Rect;
use super::state::{Base, GameEvent, GamePhase, GameState};
use crate::consts::*;

/// Run all collision passes in order
pub fn resolve_collisions(state: &mut GameState) {
    player_missiles_vs_aliens(state);
    alien_missiles_vs_player(state);
    missiles_vs_bases(state);
    aliens_vs_bases(state);
    prune_projectiles(state);
}

/// Pass 1: player missiles against the formation, then the bonus target.
///
/// A missile destroys at most one alien; only a missile that missed every
/// alien is tested against the bonus target.
pub fn player_missiles_vs_aliens(state: &mut GameState) {
    let GameState {
        player,
        aliens,
        bonus,
        rng,
        events,
        ..
    } = state;

    for missile in player.missiles.iter_mut().filter(|m| !m.consumed) {
        let window = missile.hit_window();

        if let Some(alien) = aliens
            .iter_mut()
            .find(|a| a.alive && a.rect().overlaps(&window))
        {
            alien.alive = false;
            missile.consumed = true;
            player.score += alien.points;
            bonus.record_kill();
            events.push(GameEvent::AlienDestroyed {
                kind: alien.kind,
                points: alien.points,
            });
            continue;
        }

        if bonus.target().is_some_and(|t| t.rect().overlaps(&window)) {
            missile.consumed = true;
            player.score += BONUS_POINTS;
            events.push(GameEvent::BonusDestroyed {
                points: BONUS_POINTS,
            });
            bonus.retire(rng, events);
        }
    }
}

/// Pass 2: enemy missiles against the player. The first hit costs a life,
/// starts the death pause and clears every enemy missile in flight.
pub fn alien_missiles_vs_player(state: &mut GameState) {
    if state.phase != GamePhase::Playing {
        return;
    }
    let player_rect = state.player.rect();
    let hit = state
        .alien_missiles
        .iter()
        .any(|m| !m.consumed && m.rect().overlaps(&player_rect));
    if !hit {
        return;
    }

    state.player.lives = state.player.lives.saturating_sub(1);
    state.phase = GamePhase::DeathPause;
    state.death_timer.start();
    state.alien_missiles.clear();
    log::debug!("Player hit, {} lives left", state.player.lives);
    state.events.push(GameEvent::PlayerKilled {
        lives_left: state.player.lives,
    });
}

/// Damage the first existing block overlapping `window`.
/// Returns `Some(destroyed)` on a hit.
fn damage_first_block(bases: &mut [Base], window: &Rect) -> Option<bool> {
    bases
        .iter_mut()
        .flat_map(|base| base.blocks.iter_mut())
        .find(|block| block.exists && block.rect().overlaps(window))
        .map(|block| block.take_damage())
}

/// Pass 3: both missile kinds against the bases, one damage step per hit
pub fn missiles_vs_bases(state: &mut GameState) {
    let GameState {
        player,
        alien_missiles,
        bases,
        events,
        ..
    } = state;

    for missile in player.missiles.iter_mut().filter(|m| !m.consumed) {
        if let Some(destroyed) = damage_first_block(bases, &missile.base_window()) {
            missile.consumed = true;
            events.push(GameEvent::BaseHit { destroyed });
        }
    }

    for missile in alien_missiles.iter_mut().filter(|m| !m.consumed) {
        if let Some(destroyed) = damage_first_block(bases, &missile.rect()) {
            missile.consumed = true;
            events.push(GameEvent::BaseHit { destroyed });
        }
    }
}

/// Pass 4: aliens bulldoze any block they touch; the alien is unaffected
pub fn aliens_vs_bases(state: &mut GameState) {
    for alien in state.aliens.iter().filter(|a| a.alive) {
        let rect = alien.rect();
        for block in state
            .bases
            .iter_mut()
            .flat_map(|base| base.blocks.iter_mut())
            .filter(|block| block.exists && block.rect().overlaps(&rect))
        {
            block.demolish();
        }
    }
}

/// Pass 5: drop consumed and off-screen projectiles, compact dead aliens
pub fn prune_projectiles(state: &mut GameState) {
    state
        .player
        .missiles
        .retain(|m| !m.consumed && !m.is_off_screen());
    state
        .alien_missiles
        .retain(|m| !m.consumed && !m.is_off_screen());
    state.aliens.retain(|a| a.alive);
}
