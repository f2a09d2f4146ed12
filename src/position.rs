use std::fmt;

/// Offsets of the up-to-8 grid-adjacent cells, diagonals included.
static NEIGHBOR_OFFSETS: [(i32, i32); 8] = [
    (-1, -1),
    (0, -1),
    (1, -1),
    (-1, 0),
    (1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
];

/// A grid coordinate. `x` is the column, `y` the row, both growing
/// right/down to match screen coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// The 8 surrounding positions, unclipped; callers filter against
    /// board bounds.
    pub fn neighbors(self) -> impl Iterator<Item = Position> {
        NEIGHBOR_OFFSETS
            .iter()
            .map(move |&(dx, dy)| Position::new(self.x + dx, self.y + dy))
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn neighbors_surround_the_cell() {
        let neighbors: Vec<Position> = Position::new(3, 7).neighbors().collect();

        assert_eq!(neighbors.len(), 8);
        for dy in -1..=1 {
            for dx in -1..=1 {
                let pos = Position::new(3 + dx, 7 + dy);
                if dx == 0 && dy == 0 {
                    assert!(!neighbors.contains(&pos));
                } else {
                    assert!(neighbors.contains(&pos));
                }
            }
        }
    }

    #[test]
    fn neighbors_of_origin_go_negative() {
        // Clipping is the board's job, not the iterator's.
        let neighbors: Vec<Position> = Position::new(0, 0).neighbors().collect();
        assert!(neighbors.contains(&Position::new(-1, -1)));
        assert!(neighbors.contains(&Position::new(1, 1)));
    }
}
