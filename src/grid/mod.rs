//! Static search grid.
//!
//! The grid is square, fully known in advance and never changes while a
//! search runs. Walls are the only obstacles.
//!
//! ```rust
//! use marga::grid::GridStorage;
//! use marga::core::GridCoord;
//!
//! let grid = GridStorage::default_layout();
//! assert_eq!(grid.size(), 10);
//! assert!(grid.is_wall(GridCoord::new(3, 3)));
//! assert_eq!(grid.neighbors(grid.start()).len(), 3);
//! ```

mod storage;

pub use storage::{CellCounts, DEFAULT_WALLS, GridError, GridStorage};
