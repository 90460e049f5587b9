//! Session export/import. The blob carries the run seed plus the full data
//! model; how it is encoded on disk is the persistence collaborator's
//! concern. Import validates the blob so a session is never half-applied.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::board::{BOARD_HEIGHT, BOARD_WIDTH, Board, Occupant};
use crate::game::Game;
use crate::state::GameState;
use crate::types::Pos;

pub const SAVE_FORMAT_VERSION: u16 = 1;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SaveState {
    pub format_version: u16,
    pub seed: u64,
    pub state: GameState,
}

#[derive(Debug, PartialEq, Eq)]
pub enum SaveError {
    UnsupportedVersion { found: u16 },
    PlayerOutOfBounds { pos: Pos },
    PlayerCellMismatch,
    EnemyCountMismatch { recorded: u32, on_board: u32 },
    HealthOutOfRange { hp: i32, max_hp: i32 },
}

impl fmt::Display for SaveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnsupportedVersion { found } => {
                write!(f, "unsupported save format version {found}")
            }
            Self::PlayerOutOfBounds { pos } => {
                write!(f, "player position ({}, {}) is outside the board", pos.y, pos.x)
            }
            Self::PlayerCellMismatch => {
                write!(f, "board player cell disagrees with the recorded player position")
            }
            Self::EnemyCountMismatch { recorded, on_board } => {
                write!(f, "save records {recorded} enemies but the board holds {on_board}")
            }
            Self::HealthOutOfRange { hp, max_hp } => {
                write!(f, "player health {hp} is outside 0..={max_hp}")
            }
        }
    }
}

impl Game {
    pub fn to_save(&self) -> SaveState {
        SaveState {
            format_version: SAVE_FORMAT_VERSION,
            seed: self.seed(),
            state: self.state().clone(),
        }
    }

    /// Restores a session from an exported blob. Either the whole blob is
    /// consistent and a session is returned, or nothing is applied.
    pub fn from_save(save: SaveState) -> Result<Game, SaveError> {
        if save.format_version != SAVE_FORMAT_VERSION {
            return Err(SaveError::UnsupportedVersion { found: save.format_version });
        }
        validate_state(&save.state)?;
        Ok(Game::from_parts(save.seed, save.state))
    }
}

fn validate_state(state: &GameState) -> Result<(), SaveError> {
    let player = &state.player;
    if !Board::in_bounds(player.pos) {
        return Err(SaveError::PlayerOutOfBounds { pos: player.pos });
    }
    if player.hp < 0 || player.hp > player.max_hp {
        return Err(SaveError::HealthOutOfRange { hp: player.hp, max_hp: player.max_hp });
    }

    let mut player_cells = 0;
    for y in 0..BOARD_HEIGHT {
        for x in 0..BOARD_WIDTH {
            if state.board.occupant_at(Pos { y, x }) == Occupant::Player {
                player_cells += 1;
            }
        }
    }
    if player_cells != 1 || state.board.occupant_at(player.pos) != Occupant::Player {
        return Err(SaveError::PlayerCellMismatch);
    }

    let on_board = state.board.enemy_census();
    if on_board != state.enemy_count {
        return Err(SaveError::EnemyCountMismatch { recorded: state.enemy_count, on_board });
    }
    Ok(())
}
