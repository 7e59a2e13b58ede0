//! Rendering of grids and search states outside the terminal UI.
//!
//! - **Text**: compact ASCII grid for logs and headless runs
//! - **SVG**: full-color frames with coordinate labels, legend and stats
//!
//! ## SVG Export
//!
//! ```rust,ignore
//! use marga::io::{SvgConfig, SvgVisualizer};
//! use std::path::Path;
//!
//! let visualizer = SvgVisualizer::new(&grid, SvgConfig::default())
//!     .with_title("BFS")
//!     .with_state(searcher.state());
//! visualizer.save(Path::new("bfs.svg"))?;
//! ```
//!
//! ## Frame Sequences
//!
//! ```rust,ignore
//! use marga::io::FrameRecorder;
//!
//! let mut recorder = FrameRecorder::new("frames", SvgConfig::default())?.with_every(5);
//! while searcher.is_running() {
//!     searcher.step();
//!     recorder.record(&grid, searcher.state())?;
//! }
//! recorder.finish(&grid, searcher.state())?;
//! ```

pub mod svg;
pub mod text;

pub use svg::{FrameRecorder, SvgColorScheme, SvgConfig, SvgVisualizer};
pub use text::render_ascii;
