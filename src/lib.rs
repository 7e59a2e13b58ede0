//! # Marga
//!
//! Step-by-step visualizer for uninformed search on a static grid.
//!
//! ## Overview
//!
//! Marga runs six classic uninformed searches on a square grid with fixed
//! walls and shows every expansion as it happens:
//!
//! - **BFS** - Breadth-first, fewest moves
//! - **DFS** - Depth-first, follows the first direction as far as it goes
//! - **UCS** - Uniform-cost, cheapest path with configurable diagonal cost
//! - **DLS** - Depth-limited depth-first search
//! - **IDDFS** - Depth-limited search with growing limits
//! - **Bidirectional** - Breadth-first from both ends until they meet
//!
//! Every search is a resumable step machine: [`search::Searcher::step`]
//! expands at most one node, so a renderer can draw after each call.
//!
//! ## Quick Start
//!
//! ```rust
//! use marga::{Algorithm, GridStorage, SearchConfig, run_to_completion};
//!
//! let grid = GridStorage::default_layout();
//! let mut searcher = Algorithm::Bfs.searcher(&grid, &SearchConfig::default());
//! let outcome = run_to_completion(searcher.as_mut(), 10_000);
//!
//! assert!(outcome.found());
//! println!("{} cells, {} explored", outcome.path_len(), outcome.explored);
//! ```
//!
//! ## Coordinate System
//!
//! - Row 0 is the top row, column 0 the leftmost column
//! - Neighbors are expanded in the fixed order
//!   Up, Right, Down, DownRight, Left, UpLeft, UpRight, DownLeft

#![warn(missing_docs)]

// Core types
pub mod core;

// Static grid
pub mod grid;

// Search algorithms
pub mod search;

// YAML configuration
pub mod config;

// Text and SVG rendering
pub mod io;

// Interactive terminal view
pub mod ui;

mod error;

// Re-export commonly used types
pub use core::{CellType, Direction, GridCoord};

pub use grid::{GridError, GridStorage};

pub use search::{
    Algorithm, SearchConfig, SearchOutcome, SearchState, SearchStatus, SearchStep, Searcher,
    run_to_completion,
};

pub use config::{ConfigLoadError, MargaConfig};

pub use error::{MargaError, Result};
