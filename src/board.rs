use crate::{GameError, Position};
use rand::Rng;
use std::collections::HashMap;

/// One grid cell. The payload records whether the cell holds a mine;
/// it is fixed at placement time and survives the reveal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cell {
    Hidden(bool),
    Revealed(bool),
}

impl Cell {
    pub fn is_mine(self) -> bool {
        match self {
            Cell::Hidden(mine) | Cell::Revealed(mine) => mine,
        }
    }

    pub fn is_revealed(self) -> bool {
        matches!(self, Cell::Revealed(_))
    }
}

#[derive(Debug)]
pub struct Board {
    cells: HashMap<Position, Cell>,
    width: u32,
    height: u32,
    mines_count: u32,
}

impl Board {
    /// Fresh board with `mines_count` mines at distinct uniform
    /// positions, resampling on collision.
    pub fn new<R: Rng>(
        width: u32,
        height: u32,
        mines_count: u32,
        rng: &mut R,
    ) -> Result<Self, GameError> {
        let mut board = Self::empty(width, height, mines_count)?;

        let mut placed = 0;
        while placed < mines_count {
            let pos = board.sample_position(rng);
            if let Some(Cell::Hidden(false)) = board.cells.get(&pos) {
                board.cells.insert(pos, Cell::Hidden(true));
                placed += 1;
            }
        }

        Ok(board)
    }

    /// Board with a pinned mine layout, for tests and scripted games.
    pub fn with_mines(
        width: u32,
        height: u32,
        mines: &[Position],
    ) -> Result<Self, GameError> {
        let mut board = Self::empty(width, height, mines.len() as u32)?;

        for &pos in mines {
            match board.cells.get(&pos) {
                None => return Err(GameError::OutOfBounds(pos)),
                Some(Cell::Hidden(true)) => return Err(GameError::DuplicateMine(pos)),
                _ => {
                    board.cells.insert(pos, Cell::Hidden(true));
                }
            }
        }

        Ok(board)
    }

    fn empty(width: u32, height: u32, mines_count: u32) -> Result<Self, GameError> {
        if mines_count >= width * height {
            return Err(GameError::TooManyMines {
                width,
                height,
                mines: mines_count,
            });
        }

        let mut cells = HashMap::new();
        for y in 0..height {
            for x in 0..width {
                cells.insert(Position::new(x as i32, y as i32), Cell::Hidden(false));
            }
        }

        Ok(Board {
            cells,
            width,
            height,
            mines_count,
        })
    }

    pub fn sample_position<R: Rng>(&self, rng: &mut R) -> Position {
        Position::new(
            rng.gen_range(0..self.width) as i32,
            rng.gen_range(0..self.height) as i32,
        )
    }

    pub fn get_cell(&self, pos: Position) -> Result<Cell, GameError> {
        self.cells
            .get(&pos)
            .copied()
            .ok_or(GameError::OutOfBounds(pos))
    }

    /// Marks a cell revealed. Hidden -> Revealed is the only
    /// transition; revealing an already revealed cell changes nothing.
    pub fn reveal(&mut self, pos: Position) -> Result<Cell, GameError> {
        let cell = Cell::Revealed(self.get_cell(pos)?.is_mine());
        self.cells.insert(pos, cell);
        Ok(cell)
    }

    /// Mines among the up-to-8 in-bounds neighbors.
    pub fn adjacent_mines(&self, pos: Position) -> u8 {
        pos.neighbors()
            .filter_map(|p| self.cells.get(&p))
            .filter(|cell| cell.is_mine())
            .count() as u8
    }

    pub fn revealed_count(&self) -> u32 {
        self.cells.values().filter(|cell| cell.is_revealed()).count() as u32
    }

    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    pub fn mines_count(&self) -> u32 {
        self.mines_count
    }
}
