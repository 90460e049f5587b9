//! Pure text builders for the renderer. Kept free of macroquad calls so the
//! panel contents stay unit-testable.

use gridfall_core::{Game, Ground, Occupant, RunSummary, Species};

use crate::score_file::ScoreTable;

pub fn stats_panel_lines(game: &Game) -> Vec<String> {
    let state = game.state();
    let player = &state.player;
    let mut lines = vec![
        format!("Floor {}", state.floor),
        format!("Level {}", player.level),
        format!("Health: {}/{}", player.hp, player.max_hp),
        format!("Attack: {}", player.attack),
        format!("EXP: {}", player.experience),
    ];
    // The potion count only appears once the player holds one.
    if player.potions > 0 {
        lines.push(format!("Potions: {}", player.potions));
    }
    lines
}

pub fn message_line(game: &Game) -> Option<&str> {
    game.state().combat_message.as_deref()
}

pub fn occupant_glyph(occupant: Occupant) -> Option<&'static str> {
    match occupant {
        Occupant::Empty => None,
        Occupant::Player => Some("@"),
        Occupant::Enemy(unit) => match unit.species {
            Species::Slime => Some("s"),
            Species::Wolf => Some("w"),
        },
    }
}

pub fn ground_glyph(ground: Ground) -> Option<&'static str> {
    match ground {
        Ground::Grass => None,
        Ground::Potion => Some("!"),
        Ground::Stairs => Some(">"),
    }
}

pub fn title_lines(has_save: bool) -> Vec<String> {
    let mut lines = vec![
        "Gridfall".to_string(),
        "Press Space to start a new game".to_string(),
    ];
    if has_save {
        lines.push("Press Enter to resume from save".to_string());
    }
    lines
}

pub fn game_over_lines(summary: &RunSummary, name_entry: &str) -> Vec<String> {
    vec![
        "GAME OVER".to_string(),
        format!("Score: {}", summary.score),
        format!("Floor {} / Level {} / {} turns", summary.floor, summary.level, summary.total_turns),
        "Enter your name:".to_string(),
        name_entry.to_string(),
    ]
}

pub fn scoreboard_lines(table: &ScoreTable) -> Vec<String> {
    let mut lines = vec!["High Scores".to_string()];
    for entry in &table.entries {
        lines.push(format!("{} {}", entry.score, entry.name));
    }
    lines.push("Press Space to restart".to_string());
    lines
}

#[cfg(test)]
mod tests {
    use gridfall_core::EnemyUnit;

    use super::*;
    use crate::score_file::ScoreEntry;

    #[test]
    fn stats_panel_hides_the_potion_line_until_one_is_held() {
        let game = Game::new(3);
        let lines = stats_panel_lines(&game);
        assert_eq!(
            lines,
            vec!["Floor 1", "Level 1", "Health: 20/20", "Attack: 10", "EXP: 1"],
        );
        assert!(!lines.iter().any(|line| line.starts_with("Potions")));
    }

    #[test]
    fn glyphs_cover_every_species_and_ground_feature() {
        assert_eq!(occupant_glyph(Occupant::Player), Some("@"));
        assert_eq!(occupant_glyph(Occupant::Empty), None);
        let slime = EnemyUnit {
            species: Species::Slime,
            hp: 16,
            attack: 5,
            exp_reward: 10,
            acted: false,
        };
        assert_eq!(occupant_glyph(Occupant::Enemy(slime)), Some("s"));
        let wolf = EnemyUnit { species: Species::Wolf, ..slime };
        assert_eq!(occupant_glyph(Occupant::Enemy(wolf)), Some("w"));

        assert_eq!(ground_glyph(Ground::Grass), None);
        assert_eq!(ground_glyph(Ground::Potion), Some("!"));
        assert_eq!(ground_glyph(Ground::Stairs), Some(">"));
    }

    #[test]
    fn title_mentions_resume_only_with_a_save_present() {
        assert_eq!(title_lines(false).len(), 2);
        let with_save = title_lines(true);
        assert!(with_save.last().unwrap().contains("resume"));
    }

    #[test]
    fn scoreboard_lists_entries_between_header_and_footer() {
        let table = ScoreTable {
            format_version: 1,
            entries: vec![
                ScoreEntry { score: 200, name: "ada".to_string() },
                ScoreEntry { score: 90, name: "lin".to_string() },
            ],
        };
        let lines = scoreboard_lines(&table);
        assert_eq!(lines[0], "High Scores");
        assert_eq!(lines[1], "200 ada");
        assert_eq!(lines[2], "90 lin");
        assert_eq!(lines.last().unwrap(), "Press Space to restart");
    }
}
