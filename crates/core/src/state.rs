use serde::{Deserialize, Serialize};

use crate::board::Board;
use crate::content::{PLAYER_BASE_ATTACK, PLAYER_BASE_MAX_HP};
use crate::types::Pos;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerState {
    pub pos: Pos,
    pub hp: i32,
    pub max_hp: i32,
    pub attack: i32,
    pub experience: u32,
    pub level: u32,
    /// Levels already granted; lags `level` until the next gain catches up.
    pub level_ups: u32,
    pub potions: u32,
}

impl PlayerState {
    pub fn starting(pos: Pos) -> Self {
        Self {
            pos,
            hp: PLAYER_BASE_MAX_HP,
            max_hp: PLAYER_BASE_MAX_HP,
            attack: PLAYER_BASE_ATTACK,
            experience: 1,
            level: 1,
            level_ups: 1,
            potions: 0,
        }
    }
}

/// The whole session: one board, one player, the floor/turn counters, and the
/// terminal flag. This is exactly the state a save blob carries.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    pub board: Board,
    pub player: PlayerState,
    pub floor: u32,
    pub floor_turn: u32,
    pub total_turns: u32,
    pub enemy_count: u32,
    pub combat_message: Option<String>,
    pub dead: bool,
}
