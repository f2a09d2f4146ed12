use crate::{Board, Cell, GameError, Position};
use rand::Rng;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameState {
    Playing,
    Won,
    Lost,
}

/// One round of the game: a board plus the current phase. Replaced
/// wholesale on restart; nothing outlives a single round.
pub struct Game {
    board: Board,
    state: GameState,
}

impl Game {
    pub fn new(width: u32, height: u32, mines_count: u32) -> Result<Self, GameError> {
        Self::with_rng(width, height, mines_count, &mut rand::thread_rng())
    }

    /// Builds a board and reveals one uniformly random safe starting
    /// cell. The start position is resampled on a mine; the mine
    /// layout itself is never redrawn.
    pub fn with_rng<R: Rng>(
        width: u32,
        height: u32,
        mines_count: u32,
        rng: &mut R,
    ) -> Result<Self, GameError> {
        let mut board = Board::new(width, height, mines_count, rng)?;

        let start = loop {
            let pos = board.sample_position(rng);
            if !board.get_cell(pos)?.is_mine() {
                break pos;
            }
        };
        board.reveal(start)?;
        log::debug!("new game, starting cell {}", start);

        Ok(Self {
            board,
            state: GameState::Playing,
        })
    }

    /// Wraps a prepared board, revealing the given starting cell. The
    /// start must be a safe cell; anything else is a setup error.
    pub fn from_board(mut board: Board, start: Position) -> Result<Self, GameError> {
        if board.get_cell(start)?.is_mine() {
            return Err(GameError::UnsafeStart(start));
        }
        board.reveal(start)?;

        Ok(Self {
            board,
            state: GameState::Playing,
        })
    }

    /// Reveals a single cell. Never cascades to neighbors, even when
    /// the cell has no adjacent mines.
    pub fn reveal(&mut self, pos: Position) -> Result<(), GameError> {
        if self.state != GameState::Playing {
            return Err(GameError::GameFinished);
        }

        if self.board.reveal(pos)?.is_mine() {
            self.state = GameState::Lost;
            log::debug!("mine hit at {}", pos);
            return Ok(());
        }

        let (width, height) = self.board.dimensions();
        if self.board.revealed_count() == width * height - self.board.mines_count() {
            self.state = GameState::Won;
            log::debug!("all safe cells revealed");
        }
        Ok(())
    }

    /// Fresh board and phase at the same dimensions and mine count.
    pub fn restart(&mut self) -> Result<(), GameError> {
        let (width, height) = self.board.dimensions();
        *self = Self::new(width, height, self.board.mines_count())?;
        Ok(())
    }

    pub fn state(&self) -> GameState {
        self.state
    }

    pub fn get_cell(&self, pos: Position) -> Result<Cell, GameError> {
        self.board.get_cell(pos)
    }

    pub fn adjacent_mines(&self, pos: Position) -> u8 {
        self.board.adjacent_mines(pos)
    }

    pub fn dimensions(&self) -> (u32, u32) {
        self.board.dimensions()
    }

    pub fn mines_count(&self) -> u32 {
        self.board.mines_count()
    }
}
