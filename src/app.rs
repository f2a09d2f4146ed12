//! Application orchestration: owns the game and turns mouse presses
//! into engine calls.

use macroquad::prelude::*;
use sweeplet::{Game, GameState};

use crate::ui;

pub const SCREEN_WIDTH: i32 = 600;
pub const SCREEN_HEIGHT: i32 = 600;
pub const ROWS: u32 = 5;
pub const COLS: u32 = 5;
pub const MINES: u32 = 3;

pub struct App {
    game: Game,
}

impl App {
    pub fn new() -> Self {
        // Mine count vs. board size is validated at construction; a
        // bad combination is a configuration bug, so die loudly.
        let game = Game::new(COLS, ROWS, MINES)
            .unwrap_or_else(|e| panic!("invalid board configuration: {e}"));
        Self { game }
    }

    /// One frame: poll input, then render the resulting state.
    pub fn tick(&mut self) {
        self.handle_input();
        ui::draw(&self.game);
    }

    fn handle_input(&mut self) {
        if !is_mouse_button_pressed(MouseButton::Left) {
            return;
        }
        let point = Vec2::from(mouse_position());

        match self.game.state() {
            GameState::Playing => {
                let pos = ui::cell_at(point, ui::tile_size(&self.game));
                if let Err(e) = self.game.reveal(pos) {
                    warn!("ignored click at {}: {}", pos, e);
                }
            }
            GameState::Won | GameState::Lost => {
                info!("restarting");
                if let Err(e) = self.game.restart() {
                    error!("restart failed: {}", e);
                }
            }
        }
    }
}
