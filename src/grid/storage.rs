//! Grid storage implementation.

use crate::core::{CellType, Direction, GridCoord};
use log::warn;
use thiserror::Error;

/// Walls of the built-in layout.
pub const DEFAULT_WALLS: [(i32, i32); 12] = [
    (3, 3),
    (3, 4),
    (4, 3),
    (4, 4),
    (7, 2),
    (7, 3),
    (8, 2),
    (8, 3),
    (2, 7),
    (2, 8),
    (3, 7),
    (3, 8),
];

/// Grid construction error
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    /// Grid must have at least one cell
    #[error("grid size must be greater than zero")]
    EmptyGrid,
    /// Start or target outside the grid
    #[error("{what} ({coord}) is outside the {size}x{size} grid")]
    OutOfBounds {
        /// Which endpoint
        what: &'static str,
        /// Offending coordinate
        coord: GridCoord,
        /// Grid size
        size: usize,
    },
}

/// Cell count breakdown
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CellCounts {
    /// Traversable cells (including start and target)
    pub empty: usize,
    /// Wall cells
    pub walls: usize,
}

impl CellCounts {
    /// Total cells
    pub fn total(&self) -> usize {
        self.empty + self.walls
    }
}

/// Square grid with a start, a target and fixed walls.
///
/// Cells are stored row-major; cell (row, col) lives at `row * size + col`.
#[derive(Clone, Debug)]
pub struct GridStorage {
    cells: Vec<CellType>,
    size: usize,
    start: GridCoord,
    target: GridCoord,
}

impl GridStorage {
    /// Create an empty grid with the given start and target.
    ///
    /// Start and target may coincide (the search is then solved at once).
    pub fn new(size: usize, start: GridCoord, target: GridCoord) -> Result<Self, GridError> {
        if size == 0 {
            return Err(GridError::EmptyGrid);
        }

        let mut grid = Self {
            cells: vec![CellType::Empty; size * size],
            size,
            start,
            target,
        };

        if !grid.is_valid_coord(start) {
            return Err(GridError::OutOfBounds {
                what: "start",
                coord: start,
                size,
            });
        }
        if !grid.is_valid_coord(target) {
            return Err(GridError::OutOfBounds {
                what: "target",
                coord: target,
                size,
            });
        }

        grid.set_type(start, CellType::Start);
        // Target wins if it coincides with start
        grid.set_type(target, CellType::Target);
        Ok(grid)
    }

    /// The built-in 10x10 layout: start (0,0), target (9,9), twelve walls.
    pub fn default_layout() -> Self {
        let mut grid = Self {
            cells: vec![CellType::Empty; 100],
            size: 10,
            start: GridCoord::new(0, 0),
            target: GridCoord::new(9, 9),
        };
        grid.set_type(grid.start, CellType::Start);
        grid.set_type(grid.target, CellType::Target);
        for (row, col) in DEFAULT_WALLS {
            grid.add_wall(GridCoord::new(row, col));
        }
        grid
    }

    /// Add walls, builder style
    pub fn with_walls(mut self, walls: impl IntoIterator<Item = GridCoord>) -> Self {
        for wall in walls {
            self.add_wall(wall);
        }
        self
    }

    /// Mark a cell as wall.
    ///
    /// Returns false (and leaves the grid untouched) when the cell is out of
    /// bounds or is the start or target.
    pub fn add_wall(&mut self, coord: GridCoord) -> bool {
        if !self.is_valid_coord(coord) {
            warn!("[Grid] Ignoring wall at ({}): out of bounds", coord);
            return false;
        }
        if coord == self.start || coord == self.target {
            warn!("[Grid] Ignoring wall at ({}): start/target cell", coord);
            return false;
        }
        self.set_type(coord, CellType::Wall);
        true
    }

    /// Grid side length in cells
    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Total number of cells
    #[inline]
    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    /// Search origin
    #[inline]
    pub fn start(&self) -> GridCoord {
        self.start
    }

    /// Search goal
    #[inline]
    pub fn target(&self) -> GridCoord {
        self.target
    }

    /// Is this coordinate inside the grid?
    #[inline]
    pub fn is_valid_coord(&self, coord: GridCoord) -> bool {
        coord.row >= 0
            && coord.col >= 0
            && (coord.row as usize) < self.size
            && (coord.col as usize) < self.size
    }

    #[inline]
    fn index(&self, coord: GridCoord) -> Option<usize> {
        if self.is_valid_coord(coord) {
            Some(coord.row as usize * self.size + coord.col as usize)
        } else {
            None
        }
    }

    /// Cell type at `coord` (None when out of bounds)
    #[inline]
    pub fn cell_type(&self, coord: GridCoord) -> Option<CellType> {
        self.index(coord).map(|i| self.cells[i])
    }

    fn set_type(&mut self, coord: GridCoord, cell_type: CellType) {
        if let Some(i) = self.index(coord) {
            self.cells[i] = cell_type;
        }
    }

    /// In bounds and not a wall
    #[inline]
    pub fn is_traversable(&self, coord: GridCoord) -> bool {
        self.cell_type(coord).is_some_and(CellType::is_traversable)
    }

    /// Is `coord` the start cell?
    #[inline]
    pub fn is_start(&self, coord: GridCoord) -> bool {
        coord == self.start
    }

    /// Is `coord` the target cell?
    #[inline]
    pub fn is_target(&self, coord: GridCoord) -> bool {
        coord == self.target
    }

    /// Is `coord` a wall?
    #[inline]
    pub fn is_wall(&self, coord: GridCoord) -> bool {
        self.cell_type(coord) == Some(CellType::Wall)
    }

    /// Traversable neighbors in expansion order (Up, Right, Down,
    /// DownRight, Left, UpLeft, UpRight, DownLeft).
    pub fn neighbors(&self, coord: GridCoord) -> Vec<GridCoord> {
        coord
            .neighbors_8()
            .into_iter()
            .filter(|n| self.is_traversable(*n))
            .collect()
    }

    /// Cost of moving between two adjacent cells.
    ///
    /// Orthogonal moves cost 1, diagonal moves `diagonal_cost`.
    #[inline]
    pub fn move_cost(&self, from: GridCoord, to: GridCoord, diagonal_cost: f32) -> f32 {
        match Direction::between(from, to) {
            Some(d) if d.is_diagonal() => diagonal_cost,
            _ => 1.0,
        }
    }

    /// Count cells by type
    pub fn counts(&self) -> CellCounts {
        let walls = self.cells.iter().filter(|c| **c == CellType::Wall).count();
        CellCounts {
            empty: self.cells.len() - walls,
            walls,
        }
    }

    /// All wall coordinates in row-major order
    pub fn walls(&self) -> Vec<GridCoord> {
        self.iter()
            .filter(|(_, cell)| *cell == CellType::Wall)
            .map(|(coord, _)| coord)
            .collect()
    }

    /// Iterate over all cells in row-major order
    pub fn iter(&self) -> impl Iterator<Item = (GridCoord, CellType)> + '_ {
        let size = self.size;
        self.cells.iter().enumerate().map(move |(i, &cell)| {
            let coord = GridCoord::new((i / size) as i32, (i % size) as i32);
            (coord, cell)
        })
    }
}

impl Default for GridStorage {
    fn default() -> Self {
        Self::default_layout()
    }
}
