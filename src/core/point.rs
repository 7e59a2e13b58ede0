//! Coordinate and direction types for the search grid.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::Sub;

/// Grid coordinates (integer cell indices).
///
/// Row 0 is the top row, column 0 the leftmost column.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
#[derive(Serialize, Deserialize)]
#[serde(from = "[i32; 2]", into = "[i32; 2]")]
pub struct GridCoord {
    /// Row index (grows downwards)
    pub row: i32,
    /// Column index (grows to the right)
    pub col: i32,
}

impl GridCoord {
    /// Create a new grid coordinate
    #[inline]
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// The neighbouring coordinate in `direction` (may be out of bounds)
    #[inline]
    pub fn step(self, direction: Direction) -> GridCoord {
        let (dr, dc) = direction.offset();
        GridCoord::new(self.row + dr, self.col + dc)
    }

    /// Get the 8 neighbors in expansion order (see [`Direction::ALL`])
    #[inline]
    pub fn neighbors_8(&self) -> [GridCoord; 8] {
        Direction::ALL.map(|d| self.step(d))
    }

    /// Chebyshev distance (max of row and column distance)
    #[inline]
    pub fn chebyshev_distance(&self, other: &GridCoord) -> i32 {
        (self.row - other.row)
            .abs()
            .max((self.col - other.col).abs())
    }

    /// Whether `other` is one of the 8 cells surrounding this one
    #[inline]
    pub fn is_adjacent(&self, other: &GridCoord) -> bool {
        self != other && self.chebyshev_distance(other) == 1
    }
}

impl fmt::Display for GridCoord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.row, self.col)
    }
}

impl From<[i32; 2]> for GridCoord {
    fn from([row, col]: [i32; 2]) -> Self {
        GridCoord::new(row, col)
    }
}

impl From<GridCoord> for [i32; 2] {
    fn from(coord: GridCoord) -> Self {
        [coord.row, coord.col]
    }
}

impl Sub for GridCoord {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        GridCoord::new(self.row - other.row, self.col - other.col)
    }
}

/// A single move on the 8-connected grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    /// (-1, 0)
    Up,
    /// (0, +1)
    Right,
    /// (+1, 0)
    Down,
    /// (+1, +1)
    DownRight,
    /// (0, -1)
    Left,
    /// (-1, -1)
    UpLeft,
    /// (-1, +1)
    UpRight,
    /// (+1, -1)
    DownLeft,
}

impl Direction {
    /// All directions in the order every search expands them.
    pub const ALL: [Direction; 8] = [
        Direction::Up,
        Direction::Right,
        Direction::Down,
        Direction::DownRight,
        Direction::Left,
        Direction::UpLeft,
        Direction::UpRight,
        Direction::DownLeft,
    ];

    /// (row, col) offset of this move
    #[inline]
    pub const fn offset(self) -> (i32, i32) {
        match self {
            Direction::Up => (-1, 0),
            Direction::Right => (0, 1),
            Direction::Down => (1, 0),
            Direction::DownRight => (1, 1),
            Direction::Left => (0, -1),
            Direction::UpLeft => (-1, -1),
            Direction::UpRight => (-1, 1),
            Direction::DownLeft => (1, -1),
        }
    }

    /// Does this move change both row and column?
    #[inline]
    pub const fn is_diagonal(self) -> bool {
        let (dr, dc) = self.offset();
        dr != 0 && dc != 0
    }

    /// Direction of the move from `from` to an adjacent `to`
    pub fn between(from: GridCoord, to: GridCoord) -> Option<Direction> {
        let delta = to - from;
        Direction::ALL
            .into_iter()
            .find(|d| d.offset() == (delta.row, delta.col))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_neighbor_order() {
        let n = GridCoord::new(5, 5).neighbors_8();
        assert_eq!(n[0], GridCoord::new(4, 5)); // Up
        assert_eq!(n[1], GridCoord::new(5, 6)); // Right
        assert_eq!(n[2], GridCoord::new(6, 5)); // Down
        assert_eq!(n[3], GridCoord::new(6, 6)); // DownRight
        assert_eq!(n[4], GridCoord::new(5, 4)); // Left
        assert_eq!(n[5], GridCoord::new(4, 4)); // UpLeft
        assert_eq!(n[6], GridCoord::new(4, 6)); // UpRight
        assert_eq!(n[7], GridCoord::new(6, 4)); // DownLeft
    }

    #[test]
    fn test_diagonal_directions() {
        let diagonals: Vec<_> = Direction::ALL
            .into_iter()
            .filter(|d| d.is_diagonal())
            .collect();
        assert_eq!(diagonals.len(), 4);
        assert!(!Direction::Up.is_diagonal());
        assert!(Direction::DownLeft.is_diagonal());
    }

    #[test]
    fn test_between() {
        let a = GridCoord::new(2, 2);
        assert_eq!(
            Direction::between(a, GridCoord::new(3, 3)),
            Some(Direction::DownRight)
        );
        assert_eq!(Direction::between(a, GridCoord::new(4, 4)), None);
        assert_eq!(Direction::between(a, a), None);
    }

    #[test]
    fn test_adjacency() {
        let a = GridCoord::new(0, 0);
        assert!(a.is_adjacent(&GridCoord::new(1, 1)));
        assert!(!a.is_adjacent(&GridCoord::new(0, 2)));
        assert!(!a.is_adjacent(&a));
    }

    #[test]
    fn test_display_and_array_conversion() {
        let c = GridCoord::new(3, 7);
        assert_eq!(c.to_string(), "3,7");
        let arr: [i32; 2] = c.into();
        assert_eq!(GridCoord::from(arr), c);
    }
}
