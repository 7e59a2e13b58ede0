//! Iterative-deepening depth-first search.

use std::sync::Arc;

use log::info;

use crate::grid::GridStorage;

use super::dls::DepthLimitedSearch;
use super::{Algorithm, SearchState, SearchStatus, SearchStep, Searcher};

/// Repeated depth-limited search with limits `1, 2, ..., size²`.
///
/// Every iteration starts from a clean state. The step that exhausts one
/// limit immediately begins the next one, so each call to
/// [`Searcher::step`] still expands exactly one node.
pub struct IterativeDeepeningSearch {
    grid: Arc<GridStorage>,
    inner: DepthLimitedSearch,
    max_limit: usize,
    status: SearchStatus,
}

impl IterativeDeepeningSearch {
    /// Create a search from the grid's start to its target
    pub fn new(grid: Arc<GridStorage>) -> Self {
        let max_limit = grid.cell_count();
        Self::with_max_limit(grid, max_limit)
    }

    /// Create a search that gives up after `max_limit`
    pub fn with_max_limit(grid: Arc<GridStorage>, max_limit: usize) -> Self {
        info!("[IDDFS] Trying depth limit 1");
        let inner = DepthLimitedSearch::with_algorithm(Arc::clone(&grid), 1, Algorithm::Iddfs);
        Self {
            grid,
            inner,
            max_limit: max_limit.max(1),
            status: SearchStatus::Running,
        }
    }

    /// Depth limit of the running iteration
    pub fn current_limit(&self) -> usize {
        self.inner.limit()
    }
}

impl Searcher for IterativeDeepeningSearch {
    fn algorithm(&self) -> Algorithm {
        Algorithm::Iddfs
    }

    fn step(&mut self) -> SearchStep {
        if self.status != SearchStatus::Running {
            return SearchStep::Idle;
        }

        loop {
            match self.inner.step() {
                SearchStep::Found(path) => {
                    info!("[IDDFS] Path found at depth limit {}", self.inner.limit());
                    self.status = SearchStatus::Found;
                    return SearchStep::Found(path);
                }
                SearchStep::Exhausted | SearchStep::Idle => {
                    let limit = self.inner.limit();
                    if limit >= self.max_limit {
                        info!("[IDDFS] No path found up to depth limit {}", limit);
                        self.status = SearchStatus::NoPath;
                        return SearchStep::Exhausted;
                    }
                    info!("[IDDFS] Trying depth limit {}", limit + 1);
                    self.inner = DepthLimitedSearch::with_algorithm(
                        Arc::clone(&self.grid),
                        limit + 1,
                        Algorithm::Iddfs,
                    );
                }
                step => return step,
            }
        }
    }

    fn state(&self) -> &SearchState {
        self.inner.state()
    }

    fn status(&self) -> SearchStatus {
        self.status
    }

    fn depth_limit(&self) -> Option<usize> {
        Some(self.inner.limit())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::GridCoord;

    #[test]
    fn test_deepens_until_found() {
        let grid = GridStorage::new(5, GridCoord::new(0, 0), GridCoord::new(0, 4)).unwrap();
        let mut iddfs = IterativeDeepeningSearch::new(Arc::new(grid));

        let path = loop {
            match iddfs.step() {
                SearchStep::Found(path) => break path,
                SearchStep::Expanded(_) => {}
                other => panic!("unexpected step {other:?}"),
            }
        };

        assert_eq!(path.first(), Some(&GridCoord::new(0, 0)));
        assert_eq!(path.last(), Some(&GridCoord::new(0, 4)));
        assert!(iddfs.current_limit() >= 4);
        assert_eq!(iddfs.depth_limit(), Some(iddfs.current_limit()));
    }

    #[test]
    fn test_state_resets_between_iterations() {
        let grid = GridStorage::new(5, GridCoord::new(0, 0), GridCoord::new(4, 4)).unwrap();
        let mut iddfs = IterativeDeepeningSearch::new(Arc::new(grid));

        // Limit 1: start plus its three neighbors
        for _ in 0..4 {
            assert!(matches!(iddfs.step(), SearchStep::Expanded(_)));
        }
        assert_eq!(iddfs.current_limit(), 1);
        assert_eq!(iddfs.state().explored.len(), 4);

        // Next step exhausts limit 1 and re-expands the start under limit 2
        assert_eq!(iddfs.step(), SearchStep::Expanded(GridCoord::new(0, 0)));
        assert_eq!(iddfs.current_limit(), 2);
        assert_eq!(iddfs.state().explored.len(), 1);
    }

    #[test]
    fn test_gives_up_after_max_limit() {
        let grid = GridStorage::new(3, GridCoord::new(0, 0), GridCoord::new(2, 2))
            .unwrap()
            .with_walls([
                GridCoord::new(1, 1),
                GridCoord::new(1, 2),
                GridCoord::new(2, 1),
            ]);
        let mut iddfs = IterativeDeepeningSearch::with_max_limit(Arc::new(grid), 4);

        let mut steps = 0;
        loop {
            match iddfs.step() {
                SearchStep::Expanded(_) => steps += 1,
                SearchStep::Exhausted => break,
                other => panic!("unexpected step {other:?}"),
            }
            assert!(steps < 1000);
        }
        assert_eq!(iddfs.status(), SearchStatus::NoPath);
        assert_eq!(iddfs.current_limit(), 4);
        assert_eq!(iddfs.step(), SearchStep::Idle);
    }
}
