//! Shared fixtures for the turn-engine test suites.

use super::*;
use crate::board::{EnemyUnit, Occupant};
use crate::types::Species;

/// A session with a clean board (no stairs, no potions), the player at `pos`,
/// and the floor turn advanced past the initial spawn boundary so tests can
/// arrange enemies without the spawner interfering.
pub(super) fn mid_floor_arena(seed: u64, pos: Pos) -> Game {
    let mut game = Game::new(seed);
    game.state.board = Board::new();
    game.state.board.set_occupant(pos, Occupant::Player);
    game.state.player.pos = pos;
    game.state.enemy_count = 0;
    game.state.floor_turn = 1;
    game
}

pub(super) fn place_enemy(game: &mut Game, pos: Pos, hp: i32, attack: i32) {
    let unit = EnemyUnit {
        species: Species::Wolf,
        hp,
        attack,
        exp_reward: ((hp + attack) / 2) as u32,
        acted: false,
    };
    game.state.board.set_occupant(pos, Occupant::Enemy(unit));
    game.state.enemy_count += 1;
}

pub(super) fn place_slime(game: &mut Game, pos: Pos, hp: i32, attack: i32, exp_reward: u32) {
    let unit = EnemyUnit { species: Species::Slime, hp, attack, exp_reward, acted: false };
    game.state.board.set_occupant(pos, Occupant::Enemy(unit));
    game.state.enemy_count += 1;
}
