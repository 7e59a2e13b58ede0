//! Breadth-first search.

use std::collections::{HashMap, VecDeque};
use std::sync::Arc;

use crate::core::GridCoord;
use crate::grid::GridStorage;

use super::types::reconstruct_path;
use super::{Algorithm, SearchCore, SearchState, SearchStatus, SearchStep, Searcher};

/// Breadth-first search over a FIFO queue.
///
/// A neighbor is queued only if it is neither explored nor already in the
/// frontier, so every node enters the queue at most once and the first
/// path to reach the target has the fewest moves.
pub struct BreadthFirstSearch {
    core: SearchCore,
    /// (node, parent) pairs waiting for expansion
    queue: VecDeque<(GridCoord, Option<GridCoord>)>,
    came_from: HashMap<GridCoord, GridCoord>,
}

impl BreadthFirstSearch {
    /// Create a search from the grid's start to its target
    pub fn new(grid: Arc<GridStorage>) -> Self {
        let start = grid.start();
        let mut core = SearchCore::new(grid, Algorithm::Bfs);
        core.state.push_frontier(start);

        Self {
            core,
            queue: VecDeque::from([(start, None)]),
            came_from: HashMap::new(),
        }
    }
}

impl Searcher for BreadthFirstSearch {
    fn algorithm(&self) -> Algorithm {
        Algorithm::Bfs
    }

    fn step(&mut self) -> SearchStep {
        if !self.core.is_running() {
            return SearchStep::Idle;
        }

        while let Some((node, parent)) = self.queue.pop_front() {
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

            for neighbor in self.core.grid.neighbors(node) {
                let state = &mut self.core.state;
                if !state.is_explored(neighbor) && !state.in_frontier(neighbor) {
                    self.queue.push_back((neighbor, Some(node)));
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

#[cfg(test)]
mod tests {
    use super::*;

    fn open_grid(size: usize) -> Arc<GridStorage> {
        Arc::new(
            GridStorage::new(
                size,
                GridCoord::new(0, 0),
                GridCoord::new(size as i32 - 1, size as i32 - 1),
            )
            .unwrap(),
        )
    }

    #[test]
    fn test_first_expansion_order() {
        let mut bfs = BreadthFirstSearch::new(open_grid(5));

        assert_eq!(bfs.step(), SearchStep::Expanded(GridCoord::new(0, 0)));
        // Right, Down, DownRight discovered in that order
        assert_eq!(
            bfs.state().frontier(),
            vec![
                GridCoord::new(0, 1),
                GridCoord::new(1, 0),
                GridCoord::new(1, 1),
            ]
        );
        assert_eq!(bfs.step(), SearchStep::Expanded(GridCoord::new(0, 1)));
        assert_eq!(bfs.step(), SearchStep::Expanded(GridCoord::new(1, 0)));
        assert_eq!(
            bfs.state().current_path,
            vec![GridCoord::new(0, 0), GridCoord::new(1, 0)]
        );
    }

    #[test]
    fn test_diagonal_shortest_path() {
        let mut bfs = BreadthFirstSearch::new(open_grid(5));
        let path = loop {
            match bfs.step() {
                SearchStep::Found(path) => break path,
                SearchStep::Expanded(_) => {}
                other => panic!("unexpected step {other:?}"),
            }
        };
        // Straight diagonal: 4 moves
        assert_eq!(path.len(), 5);
        assert_eq!(bfs.state().path, path);
        assert_eq!(bfs.status(), SearchStatus::Found);
    }

    #[test]
    fn test_exhausted_when_target_walled_in() {
        let grid = GridStorage::new(4, GridCoord::new(0, 0), GridCoord::new(3, 3))
            .unwrap()
            .with_walls([
                GridCoord::new(2, 2),
                GridCoord::new(2, 3),
                GridCoord::new(3, 2),
            ]);
        let mut bfs = BreadthFirstSearch::new(Arc::new(grid));

        let mut expansions = 0;
        loop {
            match bfs.step() {
                SearchStep::Expanded(_) => expansions += 1,
                SearchStep::Exhausted => break,
                other => panic!("unexpected step {other:?}"),
            }
        }
        // 16 cells - 3 walls - target
        assert_eq!(expansions, 12);
        assert_eq!(bfs.status(), SearchStatus::NoPath);
        assert!(bfs.state().frontier().is_empty());
        assert_eq!(bfs.step(), SearchStep::Idle);
    }
}
