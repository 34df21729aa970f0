//! Build render snapshots from the game state

use serde::Serialize;

use crate::sim::{AlienKind, GameState, Rect};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AlienSprite {
    pub rect: Rect,
    pub kind: AlienKind,
    /// Animation frame (0 or 1)
    pub frame: u8,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BlockSprite {
    pub rect: Rect,
    /// 0 = intact, 1-2 = damaged
    pub damage: u8,
}

/// Everything a renderer needs for one play-scene frame
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Snapshot {
    pub aliens: Vec<AlienSprite>,
    pub player: Rect,
    /// Player is in its death pause (draw explosion / blink)
    pub player_dead: bool,
    pub player_missiles: Vec<Rect>,
    pub alien_missiles: Vec<Rect>,
    /// Existing blocks only
    pub blocks: Vec<BlockSprite>,
    pub bonus: Option<Rect>,
    pub score: u32,
    pub lives: u8,
    pub wave: u32,
}

impl Snapshot {
    pub fn capture(state: &GameState) -> Self {
        Self {
            aliens: state
                .aliens
                .iter()
                .filter(|a| a.alive)
                .map(|a| AlienSprite {
                    rect: a.rect(),
                    kind: a.kind,
                    frame: a.frame,
                })
                .collect(),
            player: state.player.rect(),
            player_dead: state.is_dead(),
            player_missiles: state.player.missiles.iter().map(|m| m.rect()).collect(),
            alien_missiles: state.alien_missiles.iter().map(|m| m.rect()).collect(),
            blocks: state
                .bases
                .iter()
                .flat_map(|b| b.blocks.iter())
                .filter(|b| b.exists)
                .map(|b| BlockSprite {
                    rect: b.rect(),
                    damage: b.damage,
                })
                .collect(),
            bonus: state.bonus.target().map(|t| t.rect()),
            score: state.player.score,
            lives: state.player.lives,
            wave: state.wave_index,
        }
    }
}

/// What the active scene wants on screen
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum Frame {
    Title,
    Game(Snapshot),
    End { score: u32 },
}
