use crate::Position;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum GameError {
    #[error("position {0} is outside the board")]
    OutOfBounds(Position),
    #[error("the game has ended; restart to reveal more cells")]
    GameFinished,
    #[error("too many mines ({mines}) for a {width}x{height} board")]
    TooManyMines { width: u32, height: u32, mines: u32 },
    #[error("duplicate mine position {0}")]
    DuplicateMine(Position),
    #[error("starting cell {0} holds a mine")]
    UnsafeStart(Position),
}
