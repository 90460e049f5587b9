//! Stairs-triggered floor advancement. The transition happens in the same
//! turn as the move, before the enemy phase, so the first tick on a new floor
//! already runs against the regenerated board.

use super::*;

impl Game {
    pub(super) fn advance_floor(&mut self) {
        self.state.floor += 1;
        let player_pos = self.state.player.pos;
        let floor = self.state.floor;
        self.state.board.reset(player_pos, floor, &mut self.rng);
        self.state.floor_turn = 0;
        self.state.enemy_count = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_support::{mid_floor_arena, place_enemy};
    use super::*;
    use crate::board::{BOARD_HEIGHT, BOARD_WIDTH, Ground, Occupant};
    use crate::types::{Command, CommandOutcome, Direction};

    fn ground_census(game: &Game) -> (u32, u32) {
        let mut stairs = 0;
        let mut potions = 0;
        for y in 0..BOARD_HEIGHT {
            for x in 0..BOARD_WIDTH {
                match game.state().board.ground_at(Pos { y, x }) {
                    Ground::Stairs => stairs += 1,
                    Ground::Potion => potions += 1,
                    Ground::Grass => {}
                }
            }
        }
        (stairs, potions)
    }

    #[test]
    fn stepping_on_stairs_regenerates_the_board_within_the_same_turn() {
        let mut game = mid_floor_arena(61, Pos { y: 3, x: 3 });
        game.state.floor_turn = 5;
        place_enemy(&mut game, Pos { y: 7, x: 7 }, 30, 1);
        game.state.board.set_ground(Pos { y: 3, x: 4 }, Ground::Stairs);

        let outcome = game.resolve_command(Command::Move(Direction::Right));
        assert_eq!(outcome, CommandOutcome::TurnResolved);

        assert_eq!(game.state().floor, 2);
        assert_eq!(game.state().player.pos, Pos { y: 3, x: 4 });
        assert_eq!(game.state().board.occupant_at(Pos { y: 3, x: 4 }), Occupant::Player);

        // Old enemies are gone; the new floor's first spawn already happened
        // because the regenerated floor restarts its turn counter at zero.
        assert_eq!(game.state().board.enemy_census(), game.state().enemy_count);
        assert_eq!(game.state().enemy_count, 1);
        assert_eq!(game.state().floor_turn, 1, "the transition turn still finalizes counters");

        let (stairs, potions) = ground_census(&game);
        assert_eq!(stairs, 1, "a regenerated floor has exactly one stairs tile");
        assert!(potions <= 1, "floor 2 places at most one potion");
    }

    #[test]
    fn floor_number_feeds_the_potion_budget() {
        for seed in [1_u64, 7, 13, 29, 55] {
            let mut game = mid_floor_arena(seed, Pos { y: 0, x: 0 });
            game.state.floor = 8;
            game.state.board.set_ground(Pos { y: 0, x: 1 }, Ground::Stairs);

            game.resolve_command(Command::Move(Direction::Right));

            assert_eq!(game.state().floor, 9);
            let (stairs, potions) = ground_census(&game);
            assert_eq!(stairs, 1);
            assert!(potions <= 4, "floor 9 allows at most four potions, found {potions}");
        }
    }

    #[test]
    fn descending_keeps_player_stats_and_inventory() {
        let mut game = mid_floor_arena(61, Pos { y: 2, x: 2 });
        game.state.player.potions = 3;
        game.state.player.experience = 12;
        game.state.player.hp = 9;
        game.state.board.set_ground(Pos { y: 2, x: 3 }, Ground::Stairs);

        game.resolve_command(Command::Move(Direction::Right));

        assert_eq!(game.state().player.potions, 3);
        assert_eq!(game.state().player.experience, 12);
        assert_eq!(game.state().player.hp, 9);
    }
}
