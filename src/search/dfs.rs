//! Depth-first search.

use std::collections::HashMap;
use std::sync::Arc;

use crate::core::GridCoord;
use crate::grid::GridStorage;

use super::types::reconstruct_path;
use super::{Algorithm, SearchCore, SearchState, SearchStatus, SearchStep, Searcher};

/// Depth-first search over a LIFO stack.
///
/// Neighbors are pushed in reverse expansion order so the first direction
/// (Up) is popped first.
pub struct DepthFirstSearch {
    core: SearchCore,
    stack: Vec<(GridCoord, Option<GridCoord>)>,
    came_from: HashMap<GridCoord, GridCoord>,
}

impl DepthFirstSearch {
    /// Create a search from the grid's start to its target
    pub fn new(grid: Arc<GridStorage>) -> Self {
        let start = grid.start();
        let mut core = SearchCore::new(grid, Algorithm::Dfs);
        core.state.push_frontier(start);

        Self {
            core,
            stack: vec![(start, None)],
            came_from: HashMap::new(),
        }
    }
}

impl Searcher for DepthFirstSearch {
    fn algorithm(&self) -> Algorithm {
        Algorithm::Dfs
    }

    fn step(&mut self) -> SearchStep {
        if !self.core.is_running() {
            return SearchStep::Idle;
        }

        while let Some((node, parent)) = self.stack.pop() {
            self.core.state.remove_frontier(node);
            if self.core.state.is_explored(node) {
                continue;
            }

            if let Some(parent) = parent {
                self.came_from.insert(node, parent);
            }
            let path = reconstruct_path(&self.came_from, node);
            self.core.state.expand(node, path.clone());

            if node == self.core.grid.target() {
                return self.core.found(path);
            }

            for neighbor in self.core.grid.neighbors(node).into_iter().rev() {
                let state = &mut self.core.state;
                if !state.is_explored(neighbor) && !state.in_frontier(neighbor) {
                    self.stack.push((neighbor, Some(node)));
                    state.push_frontier(neighbor);
                }
            }

            return self.core.expanded(node);
        }

        self.core.exhausted()
    }

    fn state(&self) -> &SearchState {
        &self.core.state
    }

    fn status(&self) -> SearchStatus {
        self.core.status
    }
}
