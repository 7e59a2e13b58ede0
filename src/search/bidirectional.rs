//! Bidirectional breadth-first search.

use std::collections::{HashMap, HashSet, VecDeque};
use std::sync::Arc;

use log::debug;

use crate::core::GridCoord;
use crate::grid::GridStorage;

use super::types::reconstruct_path;
use super::{Algorithm, SearchCore, SearchState, SearchStatus, SearchStep, Searcher};

/// Which end a half-search grows from
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Side {
    Forward,
    Backward,
}

/// One breadth-first half of the search
#[derive(Debug, Default)]
struct HalfSearch {
    queue: VecDeque<GridCoord>,
    /// Every node this side has discovered
    visited: HashSet<GridCoord>,
    came_from: HashMap<GridCoord, GridCoord>,
}

impl HalfSearch {
    fn seeded(root: GridCoord) -> Self {
        Self {
            queue: VecDeque::from([root]),
            visited: HashSet::from([root]),
            came_from: HashMap::new(),
        }
    }
}

/// Two breadth-first searches, one from the start and one from the target,
/// taking turns one expansion at a time.
///
/// The searches meet when one side pops a node the other side has already
/// discovered. The path is the forward chain up to the meeting node followed
/// by the backward chain from it to the target.
pub struct BidirectionalSearch {
    core: SearchCore,
    forward: HalfSearch,
    backward: HalfSearch,
    turn: Side,
}

impl BidirectionalSearch {
    /// Create a search from the grid's start to its target
    pub fn new(grid: Arc<GridStorage>) -> Self {
        let start = grid.start();
        let target = grid.target();
        let mut core = SearchCore::new(grid, Algorithm::Bidirectional);
        core.state.push_frontier(start);
        core.state.push_frontier(target);

        Self {
            core,
            forward: HalfSearch::seeded(start),
            backward: HalfSearch::seeded(target),
            turn: Side::Forward,
        }
    }

    /// Join the two half-paths at `meeting`
    fn joined_path(&self, meeting: GridCoord) -> Vec<GridCoord> {
        let mut path = reconstruct_path(&self.forward.came_from, meeting);
        let mut tail = reconstruct_path(&self.backward.came_from, meeting);
        tail.reverse();
        path.extend(tail.into_iter().skip(1));
        path
    }
}

impl Searcher for BidirectionalSearch {
    fn algorithm(&self) -> Algorithm {
        Algorithm::Bidirectional
    }

    fn step(&mut self) -> SearchStep {
        if !self.core.is_running() {
            return SearchStep::Idle;
        }

        if self.forward.queue.is_empty() || self.backward.queue.is_empty() {
            return self.core.exhausted();
        }

        let side = self.turn;
        self.turn = match side {
            Side::Forward => Side::Backward,
            Side::Backward => Side::Forward,
        };

        let (own, other) = match side {
            Side::Forward => (&mut self.forward, &self.backward),
            Side::Backward => (&mut self.backward, &self.forward),
        };

        let Some(node) = own.queue.pop_front() else {
            return self.core.exhausted();
        };

        let branch = reconstruct_path(&own.came_from, node);
        let meets = other.visited.contains(&node);

        if !meets {
            for neighbor in self.core.grid.neighbors(node) {
                if own.visited.insert(neighbor) {
                    own.came_from.insert(neighbor, node);
                    own.queue.push_back(neighbor);
                    self.core.state.push_frontier(neighbor);
                }
            }
        }

        self.core.state.remove_frontier(node);
        self.core.state.expand(node, branch);

        if meets {
            debug!(
                "[Bidirectional] {:?} search met the other side at ({})",
                side, node
            );
            let path = self.joined_path(node);
            return self.core.found(path);
        }

        self.core.expanded(node)
    }

    fn state(&self) -> &SearchState {
        &self.core.state
    }

    fn status(&self) -> SearchStatus {
        self.core.status
    }
}
