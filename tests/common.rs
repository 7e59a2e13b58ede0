//! Test utilities for Marga integration tests.

#![allow(dead_code)]

use std::collections::HashSet;

use marga::search::{SearchOutcome, SearchStep, Searcher, run_to_completion};
use marga::{Algorithm, GridCoord, GridStorage, SearchConfig};

/// Step budget large enough for every algorithm on the test grids
pub const MAX_STEPS: usize = 1_000_000;

/// Run `algorithm` on `grid` to completion.
pub fn run(algorithm: Algorithm, grid: &GridStorage, config: &SearchConfig) -> SearchOutcome {
    let mut searcher = algorithm.searcher(grid, config);
    run_to_completion(searcher.as_mut(), MAX_STEPS)
}

/// Run and also return the searcher for state inspection.
pub fn run_searcher(
    algorithm: Algorithm,
    grid: &GridStorage,
    config: &SearchConfig,
) -> Box<dyn Searcher> {
    let mut searcher = algorithm.searcher(grid, config);
    for _ in 0..MAX_STEPS {
        if searcher.step() == SearchStep::Idle {
            break;
        }
    }
    searcher
}

/// Assert that `path` is a valid start-to-target walk on `grid`.
pub fn assert_valid_path(grid: &GridStorage, path: &[GridCoord]) {
    assert!(!path.is_empty(), "empty path");
    assert_eq!(
        path.first(),
        Some(&grid.start()),
        "path must begin at start"
    );
    assert_eq!(path.last(), Some(&grid.target()), "path must end at target");

    for cell in path {
        assert!(
            grid.is_traversable(*cell),
            "path crosses blocked cell ({})",
            cell
        );
    }
    for pair in path.windows(2) {
        assert!(
            pair[0].is_adjacent(&pair[1]),
            "({}) -> ({}) is not a single move",
            pair[0],
            pair[1]
        );
    }

    let unique: HashSet<_> = path.iter().collect();
    assert_eq!(unique.len(), path.len(), "path revisits a cell");
}

/// Default layout with the target walled in.
pub fn enclosed_target_grid() -> GridStorage {
    GridStorage::default_layout().with_walls([
        GridCoord::new(8, 8),
        GridCoord::new(8, 9),
        GridCoord::new(9, 8),
    ])
}

/// Open grid without walls.
pub fn open_grid(size: usize) -> GridStorage {
    let far = size as i32 - 1;
    GridStorage::new(size, GridCoord::new(0, 0), GridCoord::new(far, far)).expect("valid open grid")
}
