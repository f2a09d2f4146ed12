pub mod board;
pub mod error;
pub mod game;
pub mod position;

pub use board::{Board, Cell};
pub use error::GameError;
pub use game::{Game, GameState};
pub use position::Position;
