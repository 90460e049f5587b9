//! Rendering for every screen: the board grid, the stats side panel, the
//! combat message strip, and the title/game-over/scoreboard overlays.

use gridfall_app::app_loop::{AppState, Screen};
use gridfall_app::score_file::ScoreTable;
use gridfall_app::ui_text::{
    game_over_lines, ground_glyph, message_line, occupant_glyph, scoreboard_lines,
    stats_panel_lines, title_lines,
};
use gridfall_core::{BOARD_HEIGHT, BOARD_WIDTH, Game, Occupant, Pos, Species};
use macroquad::prelude::*;

const BOARD_LEFT: f32 = 16.0;
const BOARD_TOP: f32 = 16.0;
const TILE_SIZE: f32 = 64.0;
const TILE_GAP: f32 = 4.0;
const TILE_SPREAD: f32 = TILE_SIZE + TILE_GAP;
const PANEL_LEFT: f32 = BOARD_LEFT + 8.0 * TILE_SPREAD + 24.0;
const PANEL_LINE_STEP: f32 = 32.0;
const TEXT_SIZE: f32 = 24.0;
const BIG_TEXT_SIZE: f32 = 48.0;

const GRASS_COLOR: Color = Color { r: 0.13, g: 0.33, b: 0.16, a: 1.0 };
const BORDER_COLOR: Color = Color { r: 0.5, g: 0.5, b: 0.5, a: 1.0 };

pub fn draw_frame(app: &AppState, game: Option<&Game>, scores: &ScoreTable) {
    clear_background(BLACK);
    match app.screen {
        Screen::Title => draw_title(app),
        Screen::Playing => {
            if let Some(game) = game {
                draw_board(game);
                draw_side_panel(game);
                draw_message_strip(game);
            }
        }
        Screen::GameOver => draw_game_over(app),
        Screen::Scoreboard => draw_scoreboard(scores),
    }
}

fn draw_title(app: &AppState) {
    let mut text_y = screen_height() / 2.0 - 36.0;
    for (index, line) in title_lines(app.has_save).iter().enumerate() {
        let size = if index == 0 { BIG_TEXT_SIZE } else { TEXT_SIZE };
        draw_centered_text(line, text_y, size);
        text_y += size;
    }
}

fn draw_board(game: &Game) {
    let board_span = 8.0 * TILE_SPREAD + TILE_GAP;
    draw_rectangle(
        BOARD_LEFT - TILE_GAP,
        BOARD_TOP - TILE_GAP,
        board_span,
        board_span,
        BORDER_COLOR,
    );

    for y in 0..BOARD_HEIGHT {
        for x in 0..BOARD_WIDTH {
            let pos = Pos { y, x };
            let tile_x = BOARD_LEFT + x as f32 * TILE_SPREAD;
            let tile_y = BOARD_TOP + y as f32 * TILE_SPREAD;
            draw_rectangle(tile_x, tile_y, TILE_SIZE, TILE_SIZE, GRASS_COLOR);

            if let Some(glyph) = ground_glyph(game.state().board.ground_at(pos)) {
                draw_glyph(glyph, tile_x, tile_y, GOLD);
            }
            let occupant = game.state().board.occupant_at(pos);
            if let Some(glyph) = occupant_glyph(occupant) {
                draw_glyph(glyph, tile_x, tile_y, occupant_color(occupant));
            }
        }
    }
}

fn occupant_color(occupant: Occupant) -> Color {
    match occupant {
        Occupant::Player => WHITE,
        Occupant::Enemy(unit) => match unit.species {
            Species::Slime => GREEN,
            Species::Wolf => RED,
        },
        Occupant::Empty => BLANK,
    }
}

fn draw_glyph(glyph: &str, tile_x: f32, tile_y: f32, color: Color) {
    draw_text(
        glyph,
        tile_x + TILE_SIZE * 0.32,
        tile_y + TILE_SIZE * 0.72,
        TILE_SIZE * 0.8,
        color,
    );
}

fn draw_side_panel(game: &Game) {
    let mut text_y = BOARD_TOP + TEXT_SIZE;
    for line in stats_panel_lines(game) {
        draw_text(&line, PANEL_LEFT, text_y, TEXT_SIZE, WHITE);
        text_y += PANEL_LINE_STEP;
    }
}

fn draw_message_strip(game: &Game) {
    if let Some(message) = message_line(game) {
        let strip_y = BOARD_TOP + 8.0 * TILE_SPREAD + TEXT_SIZE;
        draw_text(message, BOARD_LEFT, strip_y, TEXT_SIZE, WHITE);
    }
}

fn draw_game_over(app: &AppState) {
    let Some(summary) = app.summary else {
        return;
    };
    let mut text_y = screen_height() / 2.0 - 72.0;
    for (index, line) in game_over_lines(&summary, &app.name_entry).iter().enumerate() {
        let (size, color) = if index == 0 { (BIG_TEXT_SIZE, RED) } else { (TEXT_SIZE, WHITE) };
        draw_centered_text_colored(line, text_y, size, color);
        text_y += size + 8.0;
    }
}

fn draw_scoreboard(scores: &ScoreTable) {
    let mut text_y = 72.0;
    for (index, line) in scoreboard_lines(scores).iter().enumerate() {
        let size = if index == 0 { BIG_TEXT_SIZE } else { TEXT_SIZE };
        draw_centered_text(line, text_y, size);
        text_y += size + 8.0;
    }
}

fn draw_centered_text(text: &str, text_y: f32, size: f32) {
    draw_centered_text_colored(text, text_y, size, WHITE);
}

fn draw_centered_text_colored(text: &str, text_y: f32, size: f32, color: Color) {
    let dimensions = measure_text(text, None, size as u16, 1.0);
    draw_text(text, (screen_width() - dimensions.width) / 2.0, text_y, size, color);
}
