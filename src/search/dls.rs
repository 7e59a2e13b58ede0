//! Depth-limited search.
//!
//! The recursive formulation is flattened into an explicit stack of
//! [`Frame`]s so the search can stop after every expansion and resume on the
//! next call to [`Searcher::step`]. The nodes on the stack are the current
//! branch; they double as the current path and stay in the frontier until
//! their subtree is finished.

use std::sync::Arc;

use log::trace;

use crate::core::GridCoord;
use crate::grid::GridStorage;

use super::{Algorithm, SearchCore, SearchState, SearchStatus, SearchStep, Searcher};

/// One level of the depth-first descent
#[derive(Clone, Debug)]
struct Frame {
    coord: GridCoord,
    depth: usize,
    neighbors: Vec<GridCoord>,
    next: usize,
}

/// Depth-first search that never expands below `limit` moves from the start.
///
/// The explored set is shared by the whole run, so every node is expanded
/// at most once even if a shallower route to it shows up later.
pub struct DepthLimitedSearch {
    core: SearchCore,
    limit: usize,
    stack: Vec<Frame>,
    started: bool,
}

impl DepthLimitedSearch {
    /// Create a search with the given depth limit
    pub fn new(grid: Arc<GridStorage>, limit: usize) -> Self {
        Self::with_algorithm(grid, limit, Algorithm::Dls)
    }

    /// Same search, reported under another algorithm (used by IDDFS)
    pub(super) fn with_algorithm(
        grid: Arc<GridStorage>,
        limit: usize,
        algorithm: Algorithm,
    ) -> Self {
        let start = grid.start();
        let mut core = SearchCore::new(grid, algorithm);
        core.state.push_frontier(start);

        Self {
            core,
            limit,
            stack: Vec::new(),
            started: false,
        }
    }

    /// The configured depth limit
    pub fn limit(&self) -> usize {
        self.limit
    }

    /// Current depth of the descent (0 = at the start node)
    pub fn depth(&self) -> usize {
        self.stack.last().map_or(0, |f| f.depth)
    }

    /// Expand `coord` at `depth` and push its frame.
    ///
    /// Returns None when the node cannot be expanded.
    fn enter(&mut self, coord: GridCoord, depth: usize) -> Option<SearchStep> {
        if depth > self.limit || self.core.state.is_explored(coord) {
            return None;
        }

        let mut path: Vec<GridCoord> = self.stack.iter().map(|f| f.coord).collect();
        path.push(coord);
        self.core.state.expand(coord, path.clone());

        if coord == self.core.grid.target() {
            return Some(self.core.found(path));
        }

        self.stack.push(Frame {
            coord,
            depth,
            neighbors: self.core.grid.neighbors(coord),
            next: 0,
        });
        Some(self.core.expanded(coord))
    }
}

impl Searcher for DepthLimitedSearch {
    fn algorithm(&self) -> Algorithm {
        Algorithm::Dls
    }

    fn step(&mut self) -> SearchStep {
        if !self.core.is_running() {
            return SearchStep::Idle;
        }

        if !self.started {
            self.started = true;
            let start = self.core.grid.start();
            if let Some(step) = self.enter(start, 0) {
                return step;
            }
        }

        loop {
            let limit = self.limit;
            let Some(top) = self.stack.last_mut() else {
                return self.core.exhausted();
            };

            if top.depth < limit && top.next < top.neighbors.len() {
                let neighbor = top.neighbors[top.next];
                top.next += 1;
                let depth = top.depth + 1;

                let state = &mut self.core.state;
                if state.is_explored(neighbor) || state.in_frontier(neighbor) {
                    continue;
                }

                state.push_frontier(neighbor);
                match self.enter(neighbor, depth) {
                    Some(step) => return step,
                    None => self.core.state.remove_frontier(neighbor),
                }
            } else if let Some(done) = self.stack.pop() {
                trace!("[DLS] Backtrack ({}) depth {}", done.coord, done.depth);
                self.core.state.remove_frontier(done.coord);
            }
        }
    }

    fn state(&self) -> &SearchState {
        &self.core.state
    }

    fn status(&self) -> SearchStatus {
        self.core.status
    }

    fn depth_limit(&self) -> Option<usize> {
        Some(self.limit)
    }
}
