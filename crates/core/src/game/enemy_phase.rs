//! Enemy phase: one fixed-order scan per turn. Each enemy acts at most once
//! per tick, guarded by its `acted` flag rather than by scan position, so a
//! unit that moved ahead of the scan is not processed twice.

use super::*;
use crate::board::{BOARD_HEIGHT, BOARD_WIDTH, Occupant};

impl Game {
    pub(super) fn resolve_enemies(&mut self) {
        self.state.board.clear_acted_flags();
        for x in 0..BOARD_WIDTH {
            for y in 0..BOARD_HEIGHT {
                let pos = Pos { y, x };
                let Occupant::Enemy(mut unit) = self.state.board.occupant_at(pos) else {
                    continue;
                };
                if unit.acted {
                    continue;
                }
                unit.acted = true;
                self.state.board.set_occupant(pos, Occupant::Enemy(unit));

                if self.player_adjacent_to(pos) {
                    self.state.player.hp -= unit.attack;
                    self.state.combat_message = Some(format!("You took {} damage.", unit.attack));
                    if self.check_player_death() {
                        // First terminal event ends the tick; damage already
                        // dealt by earlier units this phase stands.
                        return;
                    }
                } else if let Some(step) = self.chase_step(pos) {
                    self.state.board.move_occupant(pos, step);
                }
            }
        }
    }

    fn player_adjacent_to(&self, pos: Pos) -> bool {
        let neighbors = [
            Pos { y: pos.y - 1, x: pos.x },
            Pos { y: pos.y + 1, x: pos.x },
            Pos { y: pos.y, x: pos.x - 1 },
            Pos { y: pos.y, x: pos.x + 1 },
        ];
        neighbors.iter().any(|&neighbor| self.state.board.occupant_at(neighbor) == Occupant::Player)
    }

    /// Greedy single-axis chase, vertical checked before horizontal. Takes the
    /// first step toward the player whose destination cell is empty; stands
    /// still when all candidate steps are taken.
    fn chase_step(&self, pos: Pos) -> Option<Pos> {
        let player = self.state.player.pos;
        let board = &self.state.board;
        if player.y < pos.y {
            let up = Pos { y: pos.y - 1, x: pos.x };
            if board.occupant_at(up) == Occupant::Empty {
                return Some(up);
            }
        }
        if player.y > pos.y {
            let down = Pos { y: pos.y + 1, x: pos.x };
            if board.occupant_at(down) == Occupant::Empty {
                return Some(down);
            }
        }
        if player.x < pos.x {
            let left = Pos { y: pos.y, x: pos.x - 1 };
            if board.occupant_at(left) == Occupant::Empty {
                return Some(left);
            }
        }
        if player.x > pos.x {
            let right = Pos { y: pos.y, x: pos.x + 1 };
            if board.occupant_at(right) == Occupant::Empty {
                return Some(right);
            }
        }
        None
    }

    /// Runs whenever player health reaches zero; returns whether the run
    /// ended. A held potion restores full health instead.
    pub(super) fn check_player_death(&mut self) -> bool {
        if self.state.player.hp > 0 {
            return false;
        }
        if self.state.player.potions > 0 {
            self.state.player.potions -= 1;
            self.state.player.hp = self.state.player.max_hp;
            self.state.combat_message =
                Some(format!("You used a potion. Potions left: {}", self.state.player.potions));
            return false;
        }
        self.state.player.hp = 0;
        self.state.combat_message = Some("You died.".to_string());
        self.state.dead = true;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_support::{mid_floor_arena, place_enemy};
    use super::*;
    use crate::types::Command;

    fn enemy_at(game: &Game, pos: Pos) -> bool {
        matches!(game.state().board.occupant_at(pos), Occupant::Enemy(_))
    }

    #[test]
    fn adjacent_enemy_attacks_instead_of_moving() {
        let mut game = mid_floor_arena(31, Pos { y: 3, x: 3 });
        place_enemy(&mut game, Pos { y: 3, x: 4 }, 30, 6);

        game.resolve_command(Command::Skip);

        assert_eq!(game.state().player.hp, 14);
        assert!(enemy_at(&game, Pos { y: 3, x: 4 }), "attacking enemy stays put");
        assert_eq!(game.state().combat_message.as_deref(), Some("You took 6 damage."));
    }

    #[test]
    fn chase_prefers_the_vertical_axis() {
        let mut game = mid_floor_arena(31, Pos { y: 1, x: 1 });
        // Above and to the left of the enemy; the up-step must win.
        place_enemy(&mut game, Pos { y: 5, x: 5 }, 30, 6);

        game.resolve_command(Command::Skip);

        assert!(enemy_at(&game, Pos { y: 4, x: 5 }));
        assert!(!enemy_at(&game, Pos { y: 5, x: 5 }));
    }

    #[test]
    fn chase_falls_back_to_horizontal_when_vertically_aligned() {
        let mut game = mid_floor_arena(31, Pos { y: 5, x: 1 });
        place_enemy(&mut game, Pos { y: 5, x: 6 }, 30, 6);

        game.resolve_command(Command::Skip);

        assert!(enemy_at(&game, Pos { y: 5, x: 5 }));
    }

    #[test]
    fn blocked_chaser_stands_still() {
        let mut game = mid_floor_arena(31, Pos { y: 5, x: 7 });
        place_enemy(&mut game, Pos { y: 5, x: 1 }, 30, 6);
        place_enemy(&mut game, Pos { y: 5, x: 2 }, 30, 6);

        game.resolve_command(Command::Skip);

        // The rear unit is scanned first and its only step toward the player
        // is still occupied, so it stays; the front unit then steps away.
        assert!(enemy_at(&game, Pos { y: 5, x: 1 }));
        assert!(enemy_at(&game, Pos { y: 5, x: 3 }));
        assert!(!enemy_at(&game, Pos { y: 5, x: 2 }));
    }

    #[test]
    fn acted_flag_limits_each_unit_to_one_action_per_turn() {
        let mut game = mid_floor_arena(31, Pos { y: 0, x: 7 });
        // Scanned early, this unit moves right into a later scan slot. Without
        // the acted guard it would move again in the same phase.
        place_enemy(&mut game, Pos { y: 0, x: 2 }, 30, 6);

        game.resolve_command(Command::Skip);

        assert!(enemy_at(&game, Pos { y: 0, x: 3 }));
    }

    #[test]
    fn lethal_damage_with_a_potion_in_reserve_saves_the_run() {
        let mut game = mid_floor_arena(31, Pos { y: 0, x: 0 });
        game.state.player.hp = 5;
        game.state.player.potions = 1;
        place_enemy(&mut game, Pos { y: 0, x: 1 }, 30, 8);

        game.resolve_command(Command::Skip);

        assert!(!game.is_over());
        assert_eq!(game.state().player.hp, 20);
        assert_eq!(game.state().player.potions, 0);
        assert_eq!(
            game.state().combat_message.as_deref(),
            Some("You used a potion. Potions left: 0"),
        );
    }

    #[test]
    fn lethal_damage_without_potions_ends_the_run() {
        let mut game = mid_floor_arena(31, Pos { y: 0, x: 0 });
        game.state.player.hp = 5;
        place_enemy(&mut game, Pos { y: 0, x: 1 }, 30, 8);

        game.resolve_command(Command::Skip);

        assert!(game.is_over());
        assert_eq!(game.state().player.hp, 0, "health clamps at zero");
        assert_eq!(game.state().combat_message.as_deref(), Some("You died."));
    }

    #[test]
    fn terminal_death_halts_the_rest_of_the_phase() {
        let mut game = mid_floor_arena(31, Pos { y: 0, x: 0 });
        game.state.player.hp = 3;
        // Scanned first (x=1), kills the player.
        place_enemy(&mut game, Pos { y: 0, x: 1 }, 30, 5);
        // Scanned later and far away; it would chase if the phase continued.
        place_enemy(&mut game, Pos { y: 7, x: 7 }, 30, 5);

        game.resolve_command(Command::Skip);

        assert!(game.is_over());
        assert!(enemy_at(&game, Pos { y: 7, x: 7 }), "no enemy may act after the run ends");
    }

    #[test]
    fn potion_save_mid_phase_lets_later_enemies_keep_acting() {
        let mut game = mid_floor_arena(31, Pos { y: 0, x: 0 });
        game.state.player.hp = 3;
        game.state.player.potions = 1;
        place_enemy(&mut game, Pos { y: 0, x: 1 }, 30, 5);
        place_enemy(&mut game, Pos { y: 7, x: 7 }, 30, 5);

        game.resolve_command(Command::Skip);

        assert!(!game.is_over());
        assert!(enemy_at(&game, Pos { y: 6, x: 7 }), "the distant enemy still chases");
    }
}
