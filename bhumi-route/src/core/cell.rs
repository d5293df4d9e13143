//! Cell coordinates and compass directions.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Grid cell identified by (row, col) integer indices.
///
/// Cells compare and hash by value and serialize as a two-field record,
/// which is also the route output format.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Cell {
    /// Row index.
    pub row: i32,
    /// Column index.
    pub col: i32,
}

impl Cell {
    /// Create a new cell coordinate.
    #[inline]
    pub fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// The adjacent cell in the given compass direction.
    #[inline]
    pub fn neighbor(&self, dir: Direction) -> Cell {
        let (dr, dc) = dir.offset();
        Cell::new(self.row + dr, self.col + dc)
    }

    /// Chebyshev distance (max of row and col distance) - the hop count
    /// between two cells under 8-connected movement.
    #[inline]
    pub fn chebyshev_distance(&self, other: &Cell) -> i32 {
        (self.row - other.row).abs().max((self.col - other.col).abs())
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// The 8 compass directions of the traversal graph.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    /// Row above.
    North,
    /// Row above, column right.
    NorthEast,
    /// Column right.
    East,
    /// Row below, column right.
    SouthEast,
    /// Row below.
    South,
    /// Row below, column left.
    SouthWest,
    /// Column left.
    West,
    /// Row above, column left.
    NorthWest,
}

impl Direction {
    /// All directions, in scan order.
    pub const ALL: [Direction; 8] = [
        Direction::North,
        Direction::NorthEast,
        Direction::East,
        Direction::SouthEast,
        Direction::South,
        Direction::SouthWest,
        Direction::West,
        Direction::NorthWest,
    ];

    /// (row, col) delta for this direction.
    #[inline]
    pub fn offset(&self) -> (i32, i32) {
        match self {
            Direction::North => (-1, 0),
            Direction::NorthEast => (-1, 1),
            Direction::East => (0, 1),
            Direction::SouthEast => (1, 1),
            Direction::South => (1, 0),
            Direction::SouthWest => (1, -1),
            Direction::West => (0, -1),
            Direction::NorthWest => (-1, -1),
        }
    }

    /// Whether this direction is diagonal.
    #[inline]
    pub fn is_diagonal(&self) -> bool {
        let (dr, dc) = self.offset();
        dr != 0 && dc != 0
    }
}
