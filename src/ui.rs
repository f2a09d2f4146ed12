//! Layout math and the per-frame render pass. Reads engine state,
//! never mutates it.

use macroquad::prelude::*;
use sweeplet::{Cell, Game, GameState, Position};

pub const COUNT_FONT_SIZE: f32 = 26.0;
pub const MESSAGE_FONT_SIZE: f32 = 32.0;

/// Per-cell pixel size for the current window.
pub fn tile_size(game: &Game) -> Vec2 {
    let (cols, rows) = game.dimensions();
    vec2(screen_width() / cols as f32, screen_height() / rows as f32)
}

/// Maps a pixel coordinate to the cell under it.
pub fn cell_at(point: Vec2, tile: Vec2) -> Position {
    Position::new((point.x / tile.x) as i32, (point.y / tile.y) as i32)
}

pub fn draw(game: &Game) {
    clear_background(GRAY);

    let tile = tile_size(game);
    let (cols, rows) = game.dimensions();

    for y in 0..rows as i32 {
        for x in 0..cols as i32 {
            let pos = Position::new(x, y);
            let color = match game.get_cell(pos).unwrap() {
                Cell::Revealed(false) => GREEN,
                Cell::Revealed(true) => RED,
                Cell::Hidden(_) => continue,
            };
            draw_rectangle(x as f32 * tile.x, y as f32 * tile.y, tile.x, tile.y, color);
        }
    }

    if game.state() == GameState::Playing {
        draw_adjacency_counts(game, tile, cols, rows);
    }

    match game.state() {
        GameState::Lost => draw_end_messages("Game Over"),
        GameState::Won => draw_end_messages("Game Won"),
        GameState::Playing => {}
    }
}

/// Neighbor-mine count on every revealed safe cell, centered in the
/// tile; zero counts stay blank.
fn draw_adjacency_counts(game: &Game, tile: Vec2, cols: u32, rows: u32) {
    for y in 0..rows as i32 {
        for x in 0..cols as i32 {
            let pos = Position::new(x, y);
            if game.get_cell(pos).unwrap() != Cell::Revealed(false) {
                continue;
            }
            let count = game.adjacent_mines(pos);
            if count == 0 {
                continue;
            }

            let text = count.to_string();
            let dims = measure_text(&text, None, COUNT_FONT_SIZE as u16, 1.0);
            draw_text(
                &text,
                x as f32 * tile.x + (tile.x - dims.width) / 2.0,
                y as f32 * tile.y + (tile.y + dims.height) / 2.0,
                COUNT_FONT_SIZE,
                BLACK,
            );
        }
    }
}

fn draw_end_messages(phase_text: &str) {
    let dims = measure_text(phase_text, None, MESSAGE_FONT_SIZE as u16, 1.0);
    let baseline = (screen_height() - dims.height) / 2.0;
    draw_text(
        phase_text,
        (screen_width() - dims.width) / 2.0,
        baseline,
        MESSAGE_FONT_SIZE,
        BLACK,
    );

    // Replay prompt sits one line below the phase message.
    let replay = "Click to Play Again";
    let replay_dims = measure_text(replay, None, MESSAGE_FONT_SIZE as u16, 1.0);
    draw_text(
        replay,
        (screen_width() - replay_dims.width) / 2.0,
        baseline + MESSAGE_FONT_SIZE,
        MESSAGE_FONT_SIZE,
        BLACK,
    );
}
