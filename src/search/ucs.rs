//! Uniform-cost search.

use std::collections::{BinaryHeap, HashMap};
use std::sync::Arc;

use crate::core::GridCoord;
use crate::grid::GridStorage;

use super::types::{CostNode, reconstruct_path};
use super::{Algorithm, SearchCore, SearchState, SearchStatus, SearchStep, Searcher};

/// Uniform-cost (Dijkstra) search.
///
/// Orthogonal moves cost 1.0 and diagonal moves `diagonal_cost`. Queue ties
/// are broken by coordinate (row, then column) and then by insertion order,
/// which keeps the expansion order deterministic.
pub struct UniformCostSearch {
    core: SearchCore,
    open_set: BinaryHeap<CostNode>,
    /// Best known cost per discovered node
    costs: HashMap<GridCoord, f32>,
    came_from: HashMap<GridCoord, GridCoord>,
    diagonal_cost: f32,
    found_cost: Option<f32>,
    seq: u64,
}

impl UniformCostSearch {
    /// Create a search from the grid's start to its target
    pub fn new(grid: Arc<GridStorage>, diagonal_cost: f32) -> Self {
        let start = grid.start();
        let mut core = SearchCore::new(grid, Algorithm::Ucs);
        core.state.push_frontier(start);

        let mut open_set = BinaryHeap::new();
        open_set.push(CostNode {
            coord: start,
            parent: None,
            cost: 0.0,
            seq: 0,
        });

        Self {
            core,
            open_set,
            costs: HashMap::from([(start, 0.0)]),
            came_from: HashMap::new(),
            diagonal_cost,
            found_cost: None,
            seq: 1,
        }
    }

    fn push(&mut self, coord: GridCoord, parent: GridCoord, cost: f32) {
        self.open_set.push(CostNode {
            coord,
            parent: Some(parent),
            cost,
            seq: self.seq,
        });
        self.seq += 1;
    }
}

impl Searcher for UniformCostSearch {
    fn algorithm(&self) -> Algorithm {
        Algorithm::Ucs
    }

    fn step(&mut self) -> SearchStep {
        if !self.core.is_running() {
            return SearchStep::Idle;
        }

        while let Some(current) = self.open_set.pop() {
            let node = current.coord;
            self.core.state.remove_frontier(node);
            if self.core.state.is_explored(node) {
                continue;
            }

            if let Some(parent) = current.parent {
                self.came_from.insert(node, parent);
            }
            let path = reconstruct_path(&self.came_from, node);
            self.core.state.expand(node, path.clone());

            if node == self.core.grid.target() {
                self.found_cost = Some(current.cost);
                return self.core.found(path);
            }

            for neighbor in self.core.grid.neighbors(node) {
                if self.core.state.is_explored(neighbor) {
                    continue;
                }

                let move_cost = self.core.grid.move_cost(node, neighbor, self.diagonal_cost);
                let tentative = current.cost + move_cost;
                let known = self.costs.get(&neighbor).copied().unwrap_or(f32::INFINITY);

                if tentative < known {
                    self.costs.insert(neighbor, tentative);
                    self.core.state.push_frontier(neighbor);
                    self.push(neighbor, node, tentative);
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

    fn cost(&self) -> Option<f32> {
        self.found_cost
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn run(search: &mut UniformCostSearch) -> Option<Vec<GridCoord>> {
        loop {
            match search.step() {
                SearchStep::Found(path) => return Some(path),
                SearchStep::Expanded(_) => {}
                _ => return None,
            }
        }
    }

    #[test]
    fn test_unit_cost_equals_move_count() {
        let grid = GridStorage::new(6, GridCoord::new(0, 0), GridCoord::new(5, 3)).unwrap();
        let mut ucs = UniformCostSearch::new(Arc::new(grid), 1.0);

        let path = run(&mut ucs).unwrap();
        assert_eq!(path.len(), 6);
        assert_relative_eq!(ucs.cost().unwrap(), 5.0);
    }

    #[test]
    fn test_diagonal_cost_prefers_fewer_diagonals() {
        // 0 rows down, 4 columns right: straight line is cheapest
        let grid = GridStorage::new(5, GridCoord::new(2, 0), GridCoord::new(2, 4)).unwrap();
        let mut ucs = UniformCostSearch::new(Arc::new(grid), std::f32::consts::SQRT_2);

        let path = run(&mut ucs).unwrap();
        assert_relative_eq!(ucs.cost().unwrap(), 4.0);
        assert!(path.iter().all(|c| c.row == 2));
    }

    #[test]
    fn test_octile_cost() {
        // 3 down, 5 right: 3 diagonals + 2 straight
        let grid = GridStorage::new(8, GridCoord::new(0, 0), GridCoord::new(3, 5)).unwrap();
        let mut ucs = UniformCostSearch::new(Arc::new(grid), std::f32::consts::SQRT_2);

        run(&mut ucs).unwrap();
        assert_relative_eq!(
            ucs.cost().unwrap(),
            3.0 * std::f32::consts::SQRT_2 + 2.0,
            epsilon = 1e-4
        );
    }

    #[test]
    fn test_no_cost_without_path() {
        let grid = GridStorage::new(3, GridCoord::new(0, 0), GridCoord::new(2, 2))
            .unwrap()
            .with_walls([
                GridCoord::new(1, 1),
                GridCoord::new(1, 2),
                GridCoord::new(2, 1),
            ]);
        let mut ucs = UniformCostSearch::new(Arc::new(grid), 1.0);
        assert!(run(&mut ucs).is_none());
        assert_eq!(ucs.cost(), None);
        assert_eq!(ucs.status(), SearchStatus::NoPath);
    }
}
