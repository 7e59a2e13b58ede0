//! Grid section.

use serde::{Deserialize, Serialize};

use super::defaults;
use crate::core::GridCoord;
use crate::grid::{GridError, GridStorage};

/// Grid layout
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct GridSection {
    /// Side length in cells
    #[serde(default = "defaults::grid_size")]
    pub size: usize,

    /// Start cell as `[row, col]`
    #[serde(default = "defaults::start")]
    pub start: GridCoord,

    /// Target cell as `[row, col]`
    #[serde(default = "defaults::target")]
    pub target: GridCoord,

    /// Wall cells as `[row, col]` pairs
    #[serde(default = "defaults::walls")]
    pub walls: Vec<GridCoord>,
}

impl Default for GridSection {
    fn default() -> Self {
        Self {
            size: defaults::grid_size(),
            start: defaults::start(),
            target: defaults::target(),
            walls: defaults::walls(),
        }
    }
}

impl GridSection {
    /// Build the grid storage described by this section
    pub fn to_grid(&self) -> Result<GridStorage, GridError> {
        let grid = GridStorage::new(self.size, self.start, self.target)?;
        Ok(grid.with_walls(self.walls.iter().copied()))
    }
}
