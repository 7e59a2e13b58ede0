//! Renderable search state and step results.

use std::collections::HashSet;

use crate::core::GridCoord;

use super::Algorithm;

/// Display status of a single cell, highest priority first.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CellStatus {
    /// On the final path
    Path,
    /// Already expanded
    Explored,
    /// Discovered, waiting for expansion
    Frontier,
    /// Not touched by the search
    Unvisited,
}

/// Snapshot of a search that a renderer can draw after every step.
#[derive(Clone, Debug, Default)]
pub struct SearchState {
    /// Expanded nodes
    pub explored: HashSet<GridCoord>,
    /// Discovered but not yet expanded nodes (ordered, no duplicates)
    frontier: Vec<GridCoord>,
    /// Membership index over `frontier`
    frontier_index: HashSet<GridCoord>,
    /// Path from the start to the most recently expanded node
    pub current_path: Vec<GridCoord>,
    /// Final start-to-target path (empty until found)
    pub path: Vec<GridCoord>,
}

impl SearchState {
    /// Create an empty state
    pub fn new() -> Self {
        Self::default()
    }

    /// Clear everything
    pub fn reset(&mut self) {
        self.explored.clear();
        self.frontier.clear();
        self.frontier_index.clear();
        self.current_path.clear();
        self.path.clear();
    }

    /// Discovered but not yet expanded nodes, in discovery order
    #[inline]
    pub fn frontier(&self) -> &[GridCoord] {
        &self.frontier
    }

    /// Is `coord` in the frontier list?
    #[inline]
    pub fn in_frontier(&self, coord: GridCoord) -> bool {
        self.frontier_index.contains(&coord)
    }

    /// Has `coord` been expanded?
    #[inline]
    pub fn is_explored(&self, coord: GridCoord) -> bool {
        self.explored.contains(&coord)
    }

    /// Append to the frontier unless already present
    pub fn push_frontier(&mut self, coord: GridCoord) {
        if self.frontier_index.insert(coord) {
            self.frontier.push(coord);
        }
    }

    /// Remove from the frontier if present
    pub fn remove_frontier(&mut self, coord: GridCoord) {
        if !self.frontier_index.remove(&coord) {
            return;
        }
        if let Some(pos) = self.frontier.iter().position(|c| *c == coord) {
            self.frontier.remove(pos);
        }
    }

    /// Mark `coord` as expanded along `path`.
    ///
    /// Frontier bookkeeping is left to the caller. Returns false if the node
    /// had already been expanded.
    pub(crate) fn expand(&mut self, coord: GridCoord, path: Vec<GridCoord>) -> bool {
        if !self.explored.insert(coord) {
            return false;
        }
        self.current_path = path;
        true
    }

    /// Display status for a cell
    pub fn cell_status(&self, coord: GridCoord) -> CellStatus {
        if self.path.contains(&coord) {
            CellStatus::Path
        } else if self.explored.contains(&coord) {
            CellStatus::Explored
        } else if self.in_frontier(coord) {
            CellStatus::Frontier
        } else {
            CellStatus::Unvisited
        }
    }
}

/// Result of one call to [`Searcher::step`](super::Searcher::step).
#[derive(Clone, Debug, PartialEq)]
pub enum SearchStep {
    /// A node was expanded; the search continues
    Expanded(GridCoord),
    /// The target was reached along this path
    Found(Vec<GridCoord>),
    /// Nothing left to expand; no path exists (within the limits)
    Exhausted,
    /// The search had already finished
    Idle,
}

impl SearchStep {
    /// Did this step end the search?
    pub fn is_terminal(&self) -> bool {
        matches!(self, SearchStep::Found(_) | SearchStep::Exhausted)
    }
}

/// Lifecycle of a searcher
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SearchStatus {
    /// More steps to take
    Running,
    /// Path found
    Found,
    /// Search space exhausted
    NoPath,
}

/// Summary of a finished search
#[derive(Clone, Debug)]
pub struct SearchOutcome {
    /// Which algorithm ran
    pub algorithm: Algorithm,
    /// Start-to-target path if one was found
    pub path: Option<Vec<GridCoord>>,
    /// Path cost (uniform-cost search only)
    pub cost: Option<f32>,
    /// Number of productive steps taken
    pub steps: usize,
    /// Nodes expanded when the search stopped
    pub explored: usize,
    /// Frontier size when the search stopped
    pub frontier: usize,
    /// The step budget ran out before the search finished
    pub truncated: bool,
}

impl SearchOutcome {
    /// Path length in cells (0 when no path)
    pub fn path_len(&self) -> usize {
        self.path.as_ref().map_or(0, Vec::len)
    }

    /// Whether a path was found
    pub fn found(&self) -> bool {
        self.path.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frontier_is_duplicate_free() {
        let mut state = SearchState::new();
        state.push_frontier(GridCoord::new(1, 1));
        state.push_frontier(GridCoord::new(1, 1));
        state.push_frontier(GridCoord::new(0, 1));
        assert_eq!(
            state.frontier(),
            [GridCoord::new(1, 1), GridCoord::new(0, 1)]
        );

        state.remove_frontier(GridCoord::new(1, 1));
        state.remove_frontier(GridCoord::new(5, 5));
        assert_eq!(state.frontier(), [GridCoord::new(0, 1)]);
        assert!(!state.in_frontier(GridCoord::new(1, 1)));

        // Removed nodes can be discovered again
        state.push_frontier(GridCoord::new(1, 1));
        assert_eq!(
            state.frontier(),
            [GridCoord::new(0, 1), GridCoord::new(1, 1)]
        );
        assert!(state.in_frontier(GridCoord::new(1, 1)));

        state.reset();
        assert!(state.frontier().is_empty());
        assert!(!state.in_frontier(GridCoord::new(0, 1)));
    }

    #[test]
    fn test_expand_once() {
        let mut state = SearchState::new();
        let c = GridCoord::new(2, 3);
        state.push_frontier(c);
        assert!(state.expand(c, vec![GridCoord::new(2, 2), c]));
        assert!(state.in_frontier(c));
        assert!(state.is_explored(c));
        assert_eq!(state.current_path.len(), 2);
        assert!(!state.expand(c, vec![c]));
        assert_eq!(state.current_path.len(), 2);
    }

    #[test]
    fn test_cell_status_priority() {
        let mut state = SearchState::new();
        let c = GridCoord::new(0, 0);
        state.push_frontier(c);
        assert_eq!(state.cell_status(c), CellStatus::Frontier);
        state.explored.insert(c);
        assert_eq!(state.cell_status(c), CellStatus::Explored);
        state.path.push(c);
        assert_eq!(state.cell_status(c), CellStatus::Path);
        assert_eq!(
            state.cell_status(GridCoord::new(1, 1)),
            CellStatus::Unvisited
        );

        state.reset();
        assert_eq!(state.cell_status(c), CellStatus::Unvisited);
    }
}
