//! Search integration tests on the built-in layout.
//!
//! Path lengths are in cells (moves + 1).

mod common;

use approx::assert_relative_eq;
use common::{assert_valid_path, enclosed_target_grid, open_grid, run, run_searcher};
use marga::search::{IterativeDeepeningSearch, SearchStep, SearchStatus, Searcher};
use marga::{Algorithm, GridCoord, GridStorage, SearchConfig};
use std::sync::Arc;

// ============================================================================
// Path Quality
// ============================================================================

#[test]
fn test_bfs_default_grid() {
    let grid = GridStorage::default_layout();
    let outcome = run(Algorithm::Bfs, &grid, &SearchConfig::default());

    let path = outcome.path.expect("BFS finds a path");
    assert_valid_path(&grid, &path);
    // The main diagonal is blocked at (3,3) and (4,4)
    assert_eq!(path.len(), 12);
    assert!(!outcome.truncated);
}

#[test]
fn test_found_paths_are_valid() {
    let grid = GridStorage::default_layout();
    let config = SearchConfig::default();

    for algorithm in Algorithm::ALL {
        let outcome = run(algorithm, &grid, &config);
        if let Some(ref path) = outcome.path {
            println!(
                "{}: {} cells, {} explored",
                algorithm,
                path.len(),
                outcome.explored
            );
            assert_valid_path(&grid, path);
        }
    }
}

#[test]
fn test_bfs_is_never_longer() {
    let grid = GridStorage::default_layout();
    let config = SearchConfig::default();
    let bfs_len = run(Algorithm::Bfs, &grid, &config).path_len();

    for algorithm in Algorithm::ALL {
        let outcome = run(algorithm, &grid, &config);
        if outcome.found() {
            assert!(
                bfs_len <= outcome.path_len(),
                "{} found {} cells, BFS {}",
                algorithm,
                outcome.path_len(),
                bfs_len
            );
        }
    }
}

#[test]
fn test_ucs_unit_cost_matches_bfs() {
    let grid = GridStorage::default_layout();
    let config = SearchConfig::default();

    let bfs = run(Algorithm::Bfs, &grid, &config);
    let ucs = run(Algorithm::Ucs, &grid, &config);

    assert_eq!(ucs.path_len(), bfs.path_len());
    assert_relative_eq!(ucs.cost.unwrap(), 11.0);
    assert!(bfs.cost.is_none());
}

#[test]
fn test_ucs_octile_cost() {
    let grid = GridStorage::default_layout();
    let config = SearchConfig::default().with_diagonal_cost(std::f32::consts::SQRT_2);

    let outcome = run(Algorithm::Ucs, &grid, &config);
    let path = outcome.path.expect("UCS finds a path");
    assert_valid_path(&grid, &path);

    // Seven diagonal and four straight moves
    assert_relative_eq!(
        outcome.cost.unwrap(),
        4.0 + 7.0 * std::f32::consts::SQRT_2,
        epsilon = 1e-4
    );

    // Recompute the cost from the path itself
    let walked: f32 = path
        .windows(2)
        .map(|p| grid.move_cost(p[0], p[1], std::f32::consts::SQRT_2))
        .sum();
    assert_relative_eq!(walked, outcome.cost.unwrap(), epsilon = 1e-4);
}

#[test]
fn test_dfs_default_grid() {
    let grid = GridStorage::default_layout();
    let outcome = run(Algorithm::Dfs, &grid, &SearchConfig::default());
    let path = outcome.path.expect("DFS finds a path");
    assert_valid_path(&grid, &path);
    assert_eq!(path.len(), 18);
    // One expansion off the final path
    assert_eq!(outcome.steps, 19);
}

#[test]
fn test_bidirectional_matches_bfs_length() {
    let grid = GridStorage::default_layout();
    let outcome = run(Algorithm::Bidirectional, &grid, &SearchConfig::default());

    let path = outcome.path.expect("bidirectional finds a path");
    assert_valid_path(&grid, &path);
    assert_eq!(path.len(), 12);
    // Fewer expansions than a one-sided BFS
    let bfs = run(Algorithm::Bfs, &grid, &SearchConfig::default());
    assert!(outcome.explored < bfs.explored);
}

// ============================================================================
// Depth Limits
// ============================================================================

#[test]
fn test_dls_limit_too_small() {
    let grid = GridStorage::default_layout();

    // Target is 9 moves away even without walls
    for limit in [1, 5, 8] {
        let config = SearchConfig::default().with_depth_limit(limit);
        let outcome = run(Algorithm::Dls, &grid, &config);
        assert!(
            !outcome.found(),
            "limit {} should not reach the target",
            limit
        );
        assert!(!outcome.truncated);
    }
}

#[test]
fn test_dls_default_limit_misses_default_target() {
    // Nodes are expanded once per run, so a deep first branch can hide
    // shallower routes from the limit
    let grid = GridStorage::default_layout();
    let outcome = run(Algorithm::Dls, &grid, &SearchConfig::default());
    assert!(!outcome.found());
}

#[test]
fn test_dls_generous_limit_finds_path() {
    let grid = GridStorage::default_layout();
    let config = SearchConfig::default().with_depth_limit(20);
    let outcome = run(Algorithm::Dls, &grid, &config);

    let path = outcome.path.expect("DLS with limit 20 finds a path");
    assert_valid_path(&grid, &path);
    assert!(path.len() <= 21);
}

#[test]
fn test_iddfs_eventually_finds_path() {
    let grid = GridStorage::default_layout();
    let mut searcher = Algorithm::Iddfs.searcher(&grid, &SearchConfig::default());

    let path = loop {
        match searcher.step() {
            SearchStep::Found(path) => break path,
            SearchStep::Expanded(_) => {}
            other => panic!("unexpected step {:?}", other),
        }
    };

    assert_valid_path(&grid, &path);
    assert_eq!(searcher.depth_limit(), Some(18));
    assert_eq!(path.len(), 19);
}

#[test]
fn test_iddfs_resets_between_iterations() {
    let grid = Arc::new(GridStorage::default_layout());
    let mut iddfs = IterativeDeepeningSearch::new(Arc::clone(&grid));

    let mut previous_limit = iddfs.current_limit();
    let mut resets = 0;
    while iddfs.is_running() {
        let before = iddfs.state().explored.len();
        iddfs.step();
        if iddfs.current_limit() != previous_limit {
            // The first expansion of a new iteration is the start node alone
            assert_eq!(iddfs.state().explored.len(), 1);
            assert!(iddfs.state().is_explored(grid.start()));
            assert!(before > 1);
            previous_limit = iddfs.current_limit();
            resets += 1;
        }
    }

    assert_eq!(iddfs.status(), SearchStatus::Found);
    assert_eq!(resets, 17);
}

// ============================================================================
// Step Granularity
// ============================================================================

#[test]
fn test_one_expansion_per_step() {
    let grid = GridStorage::default_layout();
    let config = SearchConfig::default();

    for algorithm in Algorithm::ALL {
        let mut searcher = algorithm.searcher(&grid, &config);
        for _ in 0..10_000 {
            let before = searcher.state().explored.len();
            let step = searcher.step();
            let after = searcher.state().explored.len();

            assert!(
                after <= before + 1,
                "{} expanded {} nodes",
                algorithm,
                after - before
            );
            match step {
                SearchStep::Expanded(coord) => {
                    assert!(searcher.state().is_explored(coord), "{}", algorithm)
                }
                SearchStep::Idle => break,
                _ => {}
            }
        }
        assert!(!searcher.is_running(), "{} did not finish", algorithm);
    }
}

#[test]
fn test_searchers_stop_cleanly() {
    let grid = GridStorage::default_layout();
    for algorithm in Algorithm::ALL {
        let mut searcher = run_searcher(algorithm, &grid, &SearchConfig::default());
        assert_ne!(searcher.status(), SearchStatus::Running);
        assert_eq!(searcher.step(), SearchStep::Idle);
        assert_eq!(searcher.step(), SearchStep::Idle);
    }
}

// ============================================================================
// Unreachable Targets
// ============================================================================

#[test]
fn test_enclosed_target_no_path() {
    let grid = enclosed_target_grid();
    let config = SearchConfig::default();

    for algorithm in Algorithm::ALL {
        let searcher = run_searcher(algorithm, &grid, &config);
        assert_eq!(searcher.status(), SearchStatus::NoPath, "{}", algorithm);
        assert!(searcher.state().path.is_empty(), "{}", algorithm);
    }
}

#[test]
fn test_enclosed_target_bfs_explores_reachable_cells() {
    let grid = enclosed_target_grid();
    let outcome = run(Algorithm::Bfs, &grid, &SearchConfig::default());

    // 100 cells, 15 walls, the target
    assert_eq!(outcome.explored, 84);
    assert_eq!(outcome.frontier, 0);
}

#[test]
fn test_start_is_target() {
    let grid = GridStorage::new(10, GridCoord::new(5, 5), GridCoord::new(5, 5)).unwrap();
    for algorithm in Algorithm::ALL {
        let outcome = run(algorithm, &grid, &SearchConfig::default());
        assert_eq!(
            outcome.path,
            Some(vec![GridCoord::new(5, 5)]),
            "{}",
            algorithm
        );
        assert_eq!(outcome.steps, 1);
    }
}

#[test]
fn test_open_grid_all_find_paths() {
    let grid = open_grid(6);
    for algorithm in Algorithm::ALL {
        let outcome = run(algorithm, &grid, &SearchConfig::default());
        let Some(path) = outcome.path else {
            panic!("{} found no path", algorithm);
        };
        assert_valid_path(&grid, &path);
    }
}
