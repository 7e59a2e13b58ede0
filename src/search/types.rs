//! Shared search types.

use crate::core::GridCoord;
use std::cmp::Ordering;
use std::collections::HashMap;

/// Search configuration
#[derive(Clone, Debug)]
pub struct SearchConfig {
    /// Maximum depth for depth-limited search
    pub depth_limit: usize,
    /// Diagonal movement cost for uniform-cost search (1.0 = every move costs the same)
    pub diagonal_cost: f32,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            depth_limit: 10,
            diagonal_cost: 1.0,
        }
    }
}

impl SearchConfig {
    /// Override the depth limit
    pub fn with_depth_limit(mut self, depth_limit: usize) -> Self {
        self.depth_limit = depth_limit;
        self
    }

    /// Override the diagonal cost
    pub fn with_diagonal_cost(mut self, diagonal_cost: f32) -> Self {
        self.diagonal_cost = diagonal_cost;
        self
    }
}

/// A node in the uniform-cost priority queue
#[derive(Clone, Debug)]
pub(super) struct CostNode {
    pub coord: GridCoord,
    pub parent: Option<GridCoord>,
    pub cost: f32,
    /// Insertion counter, breaks ties between equal cost and coordinate
    pub seq: u64,
}

impl Eq for CostNode {}

impl PartialEq for CostNode {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Ord for CostNode {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse ordering for min-heap behavior
        other
            .cost
            .partial_cmp(&self.cost)
            .unwrap_or(Ordering::Equal)
            .then_with(|| other.coord.cmp(&self.coord))
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for CostNode {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Walk `came_from` back from `node` and return the path start → node.
pub(super) fn reconstruct_path(
    came_from: &HashMap<GridCoord, GridCoord>,
    node: GridCoord,
) -> Vec<GridCoord> {
    let mut path = vec![node];
    let mut current = node;

    while let Some(&prev) = came_from.get(&current) {
        path.push(prev);
        current = prev;
    }

    path.reverse();
    path
}
