//! Uninformed search algorithms as resumable step machines.
//!
//! Every algorithm implements [`Searcher`]: each call to
//! [`Searcher::step`] expands at most one node and returns, leaving the
//! [`SearchState`] ready to be drawn. A renderer drives the searcher one
//! step per frame; headless callers use [`run_to_completion`].
//!
//! | Algorithm | Frontier | Notes |
//! |-----------|----------|-------|
//! | [`BreadthFirstSearch`] | FIFO queue | fewest moves |
//! | [`DepthFirstSearch`] | LIFO stack | first direction explored first |
//! | [`UniformCostSearch`] | min-heap on path cost | diagonal cost configurable |
//! | [`DepthLimitedSearch`] | explicit frame stack | stops at the depth limit |
//! | [`IterativeDeepeningSearch`] | DLS with limits 1..=size² | state reset per limit |
//! | [`BidirectionalSearch`] | two FIFO queues | meets in the middle |
//!
//! ## Example
//!
//! ```rust
//! use marga::grid::GridStorage;
//! use marga::search::{Algorithm, SearchConfig, SearchStep, run_to_completion};
//!
//! let grid = GridStorage::default_layout();
//! let mut searcher = Algorithm::Bfs.searcher(&grid, &SearchConfig::default());
//!
//! // Drive manually...
//! assert!(matches!(searcher.step(), SearchStep::Expanded(_)));
//!
//! // ...or run until it stops
//! let outcome = run_to_completion(searcher.as_mut(), 10_000);
//! assert!(outcome.found());
//! ```

mod bfs;
mod bidirectional;
mod dfs;
mod dls;
mod iddfs;
mod state;
mod types;
mod ucs;

pub use bfs::BreadthFirstSearch;
pub use bidirectional::BidirectionalSearch;
pub use dfs::DepthFirstSearch;
pub use dls::DepthLimitedSearch;
pub use iddfs::IterativeDeepeningSearch;
pub use state::{CellStatus, SearchOutcome, SearchState, SearchStatus, SearchStep};
pub use types::SearchConfig;
pub use ucs::UniformCostSearch;

use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use log::{debug, info};
use thiserror::Error;

use crate::core::GridCoord;
use crate::grid::GridStorage;

/// A search that can be advanced one node at a time.
pub trait Searcher {
    /// Which algorithm this is
    fn algorithm(&self) -> Algorithm;

    /// Expand at most one node.
    ///
    /// Returns [`SearchStep::Idle`] once the search has finished.
    fn step(&mut self) -> SearchStep;

    /// Current renderable state
    fn state(&self) -> &SearchState;

    /// Lifecycle status
    fn status(&self) -> SearchStatus;

    /// Cost of the found path, for cost-aware searches
    fn cost(&self) -> Option<f32> {
        None
    }

    /// Active depth limit, for depth-bounded searches
    fn depth_limit(&self) -> Option<usize> {
        None
    }

    /// Still running?
    fn is_running(&self) -> bool {
        self.status() == SearchStatus::Running
    }
}

/// The six supported algorithms, in display order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Algorithm {
    /// Breadth-first search
    Bfs,
    /// Depth-first search
    Dfs,
    /// Uniform-cost search
    Ucs,
    /// Depth-limited search
    Dls,
    /// Iterative-deepening depth-first search
    Iddfs,
    /// Bidirectional breadth-first search
    Bidirectional,
}

impl Algorithm {
    /// All algorithms in display order
    pub const ALL: [Algorithm; 6] = [
        Algorithm::Bfs,
        Algorithm::Dfs,
        Algorithm::Ucs,
        Algorithm::Dls,
        Algorithm::Iddfs,
        Algorithm::Bidirectional,
    ];

    /// Short display name
    pub fn name(self) -> &'static str {
        match self {
            Algorithm::Bfs => "BFS",
            Algorithm::Dfs => "DFS",
            Algorithm::Ucs => "UCS",
            Algorithm::Dls => "DLS",
            Algorithm::Iddfs => "IDDFS",
            Algorithm::Bidirectional => "Bidirectional",
        }
    }

    /// Long description
    pub fn description(self) -> &'static str {
        match self {
            Algorithm::Bfs => "Breadth-first search",
            Algorithm::Dfs => "Depth-first search",
            Algorithm::Ucs => "Uniform-cost search",
            Algorithm::Dls => "Depth-limited search",
            Algorithm::Iddfs => "Iterative-deepening depth-first search",
            Algorithm::Bidirectional => "Bidirectional breadth-first search",
        }
    }

    fn index(self) -> usize {
        Self::ALL.iter().position(|a| *a == self).unwrap_or(0)
    }

    /// Next algorithm, wrapping around
    pub fn next(self) -> Algorithm {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    /// Previous algorithm, wrapping around
    pub fn previous(self) -> Algorithm {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }

    /// Build a fresh searcher for this algorithm on `grid`
    pub fn searcher(self, grid: &GridStorage, config: &SearchConfig) -> Box<dyn Searcher> {
        let grid = Arc::new(grid.clone());
        info!(
            "[{}] Starting search from ({}) to ({})",
            self.name(),
            grid.start(),
            grid.target()
        );
        match self {
            Algorithm::Bfs => Box::new(BreadthFirstSearch::new(grid)),
            Algorithm::Dfs => Box::new(DepthFirstSearch::new(grid)),
            Algorithm::Ucs => Box::new(UniformCostSearch::new(grid, config.diagonal_cost)),
            Algorithm::Dls => Box::new(DepthLimitedSearch::new(grid, config.depth_limit)),
            Algorithm::Iddfs => Box::new(IterativeDeepeningSearch::new(grid)),
            Algorithm::Bidirectional => Box::new(BidirectionalSearch::new(grid)),
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Unrecognised algorithm name
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown algorithm '{0}' (expected one of: bfs, dfs, ucs, dls, iddfs, bidirectional)")]
pub struct UnknownAlgorithm(pub String);

impl FromStr for Algorithm {
    type Err = UnknownAlgorithm;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "bfs" => Ok(Algorithm::Bfs),
            "dfs" => Ok(Algorithm::Dfs),
            "ucs" => Ok(Algorithm::Ucs),
            "dls" => Ok(Algorithm::Dls),
            "iddfs" => Ok(Algorithm::Iddfs),
            "bidirectional" | "bidi" => Ok(Algorithm::Bidirectional),
            _ => Err(UnknownAlgorithm(s.to_string())),
        }
    }
}

/// Bookkeeping shared by every searcher: the grid, the renderable state
/// and the lifecycle status.
#[derive(Debug)]
pub(crate) struct SearchCore {
    pub grid: Arc<GridStorage>,
    pub state: SearchState,
    pub status: SearchStatus,
    algorithm: Algorithm,
}

impl SearchCore {
    pub fn new(grid: Arc<GridStorage>, algorithm: Algorithm) -> Self {
        Self {
            grid,
            state: SearchState::new(),
            status: SearchStatus::Running,
            algorithm,
        }
    }

    #[inline]
    pub fn is_running(&self) -> bool {
        self.status == SearchStatus::Running
    }

    /// Record the final path and stop
    pub fn found(&mut self, path: Vec<GridCoord>) -> SearchStep {
        info!(
            "[{}] Path found: {} cells, {} explored",
            self.algorithm.name(),
            path.len(),
            self.state.explored.len()
        );
        self.state.path = path.clone();
        self.status = SearchStatus::Found;
        SearchStep::Found(path)
    }

    /// Nothing left to expand
    pub fn exhausted(&mut self) -> SearchStep {
        // IDDFS exhausts once per depth limit; it reports the final outcome itself
        let level = if self.algorithm == Algorithm::Iddfs {
            log::Level::Debug
        } else {
            log::Level::Info
        };
        log::log!(
            level,
            "[{}] No path found after exploring {} nodes",
            self.algorithm.name(),
            self.state.explored.len()
        );
        self.status = SearchStatus::NoPath;
        SearchStep::Exhausted
    }

    /// Report an expansion
    pub fn expanded(&self, coord: GridCoord) -> SearchStep {
        debug!(
            "[{}] Expanded ({}), frontier={}",
            self.algorithm.name(),
            coord,
            self.state.frontier().len()
        );
        SearchStep::Expanded(coord)
    }
}

/// Drive `searcher` until it finishes or `max_steps` productive steps have
/// been taken.
pub fn run_to_completion(searcher: &mut dyn Searcher, max_steps: usize) -> SearchOutcome {
    let mut steps = 0;
    let mut path = None;

    while searcher.is_running() && steps < max_steps {
        match searcher.step() {
            SearchStep::Expanded(_) => steps += 1,
            SearchStep::Found(p) => {
                steps += 1;
                path = Some(p);
            }
            SearchStep::Exhausted | SearchStep::Idle => break,
        }
    }

    let state = searcher.state();
    SearchOutcome {
        algorithm: searcher.algorithm(),
        path,
        cost: searcher.cost(),
        steps,
        explored: state.explored.len(),
        frontier: state.frontier().len(),
        truncated: searcher.is_running(),
    }
}
