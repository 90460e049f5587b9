//! The 8×8 board: a flat cell grid with an occupant layer and a ground layer.
//! Cells own the enemies standing on them; the ground layer persists
//! underneath whatever moves across it.

use rand_chacha::ChaCha8Rng;
use rand_chacha::rand_core::Rng;
use serde::{Deserialize, Serialize};

use crate::types::{Pos, Species};

pub const BOARD_WIDTH: i32 = 8;
pub const BOARD_HEIGHT: i32 = 8;

/// Sampling attempts before `random_free_tile` falls back to a scan.
const MAX_SAMPLE_ATTEMPTS: u32 = 256;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Ground {
    Grass,
    Potion,
    Stairs,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnemyUnit {
    pub species: Species,
    pub hp: i32,
    pub attack: i32,
    pub exp_reward: u32,
    /// Per-turn guard: set once the unit has acted in the current enemy phase.
    pub acted: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Occupant {
    Empty,
    Player,
    Enemy(EnemyUnit),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cell {
    pub occupant: Occupant,
    pub ground: Ground,
}

const EMPTY_CELL: Cell = Cell { occupant: Occupant::Empty, ground: Ground::Grass };

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    cells: Vec<Cell>,
}

impl Board {
    pub fn new() -> Self {
        Self { cells: vec![EMPTY_CELL; (BOARD_WIDTH * BOARD_HEIGHT) as usize] }
    }

    pub fn in_bounds(pos: Pos) -> bool {
        pos.x >= 0 && pos.x < BOARD_WIDTH && pos.y >= 0 && pos.y < BOARD_HEIGHT
    }

    fn index(pos: Pos) -> usize {
        (pos.y * BOARD_WIDTH + pos.x) as usize
    }

    /// Out-of-bounds reads as `Empty` so neighbor probes need no edge cases.
    pub fn occupant_at(&self, pos: Pos) -> Occupant {
        if !Self::in_bounds(pos) {
            return Occupant::Empty;
        }
        self.cells[Self::index(pos)].occupant
    }

    pub fn ground_at(&self, pos: Pos) -> Ground {
        if !Self::in_bounds(pos) {
            return Ground::Grass;
        }
        self.cells[Self::index(pos)].ground
    }

    pub fn set_occupant(&mut self, pos: Pos, occupant: Occupant) {
        if !Self::in_bounds(pos) {
            return;
        }
        self.cells[Self::index(pos)].occupant = occupant;
    }

    pub fn set_ground(&mut self, pos: Pos, ground: Ground) {
        if !Self::in_bounds(pos) {
            return;
        }
        self.cells[Self::index(pos)].ground = ground;
    }

    pub fn clear_occupant(&mut self, pos: Pos) {
        self.set_occupant(pos, Occupant::Empty);
    }

    /// Copies the full occupant record from `from` to `to` and clears `from`.
    /// The ground layer of both cells is untouched. The caller is responsible
    /// for `to` being empty or intentionally overwritten.
    pub fn move_occupant(&mut self, from: Pos, to: Pos) {
        let occupant = self.occupant_at(from);
        self.set_occupant(to, occupant);
        self.clear_occupant(from);
    }

    /// Clears every enemy's per-turn `acted` flag. Called at enemy-phase start.
    pub fn clear_acted_flags(&mut self) {
        for cell in &mut self.cells {
            if let Occupant::Enemy(unit) = &mut cell.occupant {
                unit.acted = false;
            }
        }
    }

    /// Number of enemy-occupied cells, for cross-checking the session counter.
    pub fn enemy_census(&self) -> u32 {
        self.cells.iter().filter(|cell| matches!(cell.occupant, Occupant::Enemy(_))).count() as u32
    }

    fn is_free(&self, pos: Pos) -> bool {
        self.occupant_at(pos) == Occupant::Empty && self.ground_at(pos) == Ground::Grass
    }

    /// Uniformly samples a cell that is both occupant-empty and ground-grass.
    /// Falls back to a row-major scan when sampling keeps missing; `None` only
    /// on a fully taken board, in which case the caller skips placement.
    pub fn random_free_tile(&self, rng: &mut ChaCha8Rng) -> Option<Pos> {
        for _ in 0..MAX_SAMPLE_ATTEMPTS {
            let x = (rng.next_u64() % BOARD_WIDTH as u64) as i32;
            let y = (rng.next_u64() % BOARD_HEIGHT as u64) as i32;
            let pos = Pos { y, x };
            if self.is_free(pos) {
                return Some(pos);
            }
        }
        for y in 0..BOARD_HEIGHT {
            for x in 0..BOARD_WIDTH {
                let pos = Pos { y, x };
                if self.is_free(pos) {
                    return Some(pos);
                }
            }
        }
        None
    }

    /// Rebuilds the board for a new floor: every cell reset, the player placed
    /// back at `player_pos`, one stairs tile and `0..=floor/2` potion tiles
    /// placed on free cells.
    pub fn reset(&mut self, player_pos: Pos, floor: u32, rng: &mut ChaCha8Rng) {
        self.cells.fill(EMPTY_CELL);
        self.set_occupant(player_pos, Occupant::Player);
        if let Some(stairs_pos) = self.random_free_tile(rng) {
            self.set_ground(stairs_pos, Ground::Stairs);
        }
        let potion_count = rng.next_u64() % u64::from(floor / 2 + 1);
        for _ in 0..potion_count {
            if let Some(potion_pos) = self.random_free_tile(rng) {
                self.set_ground(potion_pos, Ground::Potion);
            }
        }
    }

    /// Stable byte encoding of the full board for snapshot hashing.
    pub fn canonical_bytes(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(self.cells.len() * 2);
        for cell in &self.cells {
            match cell.occupant {
                Occupant::Empty => bytes.push(0),
                Occupant::Player => bytes.push(1),
                Occupant::Enemy(unit) => {
                    bytes.push(match unit.species {
                        Species::Slime => 2,
                        Species::Wolf => 3,
                    });
                    bytes.extend(unit.hp.to_le_bytes());
                    bytes.extend(unit.attack.to_le_bytes());
                    bytes.extend(unit.exp_reward.to_le_bytes());
                }
            }
            bytes.push(match cell.ground {
                Ground::Grass => 0,
                Ground::Potion => 1,
                Ground::Stairs => 2,
            });
        }
        bytes
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use rand_chacha::rand_core::SeedableRng;

    use super::*;

    fn ground_count(board: &Board, ground: Ground) -> usize {
        let mut count = 0;
        for y in 0..BOARD_HEIGHT {
            for x in 0..BOARD_WIDTH {
                if board.ground_at(Pos { y, x }) == ground {
                    count += 1;
                }
            }
        }
        count
    }

    #[test]
    fn new_board_is_entirely_empty_grass() {
        let board = Board::new();
        for y in 0..BOARD_HEIGHT {
            for x in 0..BOARD_WIDTH {
                let pos = Pos { y, x };
                assert_eq!(board.occupant_at(pos), Occupant::Empty);
                assert_eq!(board.ground_at(pos), Ground::Grass);
            }
        }
    }

    #[test]
    fn out_of_bounds_reads_are_inert() {
        let board = Board::new();
        assert_eq!(board.occupant_at(Pos { y: -1, x: 0 }), Occupant::Empty);
        assert_eq!(board.occupant_at(Pos { y: 0, x: 8 }), Occupant::Empty);
        assert_eq!(board.ground_at(Pos { y: 8, x: 8 }), Ground::Grass);
    }

    #[test]
    fn move_occupant_carries_the_record_and_preserves_ground() {
        let mut board = Board::new();
        let from = Pos { y: 2, x: 2 };
        let to = Pos { y: 2, x: 3 };
        let unit = EnemyUnit {
            species: Species::Wolf,
            hp: 9,
            attack: 9,
            exp_reward: 9,
            acted: true,
        };
        board.set_occupant(from, Occupant::Enemy(unit));
        board.set_ground(to, Ground::Stairs);

        board.move_occupant(from, to);

        assert_eq!(board.occupant_at(from), Occupant::Empty);
        assert_eq!(board.occupant_at(to), Occupant::Enemy(unit));
        assert_eq!(board.ground_at(to), Ground::Stairs, "ground must survive a move");
    }

    #[test]
    fn reset_places_player_and_exactly_one_stairs_tile() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        let mut board = Board::new();
        let player_pos = Pos { y: 4, x: 4 };
        board.reset(player_pos, 1, &mut rng);

        assert_eq!(board.occupant_at(player_pos), Occupant::Player);
        assert_eq!(ground_count(&board, Ground::Stairs), 1);
        assert_eq!(ground_count(&board, Ground::Potion), 0, "floor 1 never has potions");
        assert_eq!(board.enemy_census(), 0);
    }

    #[test]
    fn reset_potion_count_is_bounded_by_half_the_floor() {
        for seed in [1_u64, 2, 3, 4, 5, 99] {
            let mut rng = ChaCha8Rng::seed_from_u64(seed);
            let mut board = Board::new();
            board.reset(Pos { y: 0, x: 0 }, 9, &mut rng);
            assert!(ground_count(&board, Ground::Potion) <= 4);
            assert_eq!(ground_count(&board, Ground::Stairs), 1);
        }
    }

    #[test]
    fn random_free_tile_avoids_occupied_and_featured_cells() {
        let mut rng = ChaCha8Rng::seed_from_u64(11);
        let mut board = Board::new();
        // Fill everything except one cell.
        for y in 0..BOARD_HEIGHT {
            for x in 0..BOARD_WIDTH {
                if (y, x) != (5, 6) {
                    board.set_ground(Pos { y, x }, Ground::Stairs);
                }
            }
        }
        assert_eq!(board.random_free_tile(&mut rng), Some(Pos { y: 5, x: 6 }));
    }

    #[test]
    fn random_free_tile_on_saturated_board_is_none() {
        let mut rng = ChaCha8Rng::seed_from_u64(11);
        let mut board = Board::new();
        for y in 0..BOARD_HEIGHT {
            for x in 0..BOARD_WIDTH {
                board.set_ground(Pos { y, x }, Ground::Potion);
            }
        }
        assert_eq!(board.random_free_tile(&mut rng), None);
    }

    #[test]
    fn canonical_bytes_change_when_a_cell_changes() {
        let mut board = Board::new();
        let before = board.canonical_bytes();
        board.set_ground(Pos { y: 3, x: 3 }, Ground::Potion);
        assert_ne!(before, board.canonical_bytes());
    }
}
