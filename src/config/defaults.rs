//! Default value functions for serde deserialization.

use crate::core::GridCoord;
use crate::grid::DEFAULT_WALLS;

pub fn grid_size() -> usize {
    10
}

pub fn start() -> GridCoord {
    GridCoord::new(0, 0)
}

pub fn target() -> GridCoord {
    GridCoord::new(9, 9)
}

pub fn walls() -> Vec<GridCoord> {
    DEFAULT_WALLS
        .iter()
        .map(|&(row, col)| GridCoord::new(row, col))
        .collect()
}

pub fn depth_limit() -> usize {
    10
}

pub fn diagonal_cost() -> f32 {
    1.0
}

pub fn max_steps() -> usize {
    100_000
}

pub fn fps() -> u32 {
    5
}

pub fn cell_size() -> f32 {
    50.0
}

pub fn output_dir() -> String {
    "./output".to_string()
}
