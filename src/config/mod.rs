//! Configuration loading for Marga.
//!
//! Loads all configuration from a single YAML file with sensible defaults.
//! Every section and every field is optional.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use marga::config::MargaConfig;
//!
//! // Load from default path (configs/marga.yaml), or built-in defaults
//! let config = MargaConfig::load_default()?;
//!
//! // Convert to runtime types
//! let grid = config.build_grid()?;
//! let search = config.search_config();
//! ```
//!
//! ## Configuration Sections
//!
//! | Section | Description |
//! |---------|-------------|
//! | [`GridSection`] | Grid size, start, target, walls |
//! | [`SearchSection`] | Depth limit, diagonal cost, step budget |
//! | [`DisplaySection`] | Frame rate and SVG cell size |
//! | [`OutputSection`] | Directory for exported frames |
//!
//! ## Example YAML
//!
//! ```yaml
//! grid:
//!   size: 10
//!   start: [0, 0]
//!   target: [9, 9]
//!   walls: [[3, 3], [3, 4], [4, 3], [4, 4]]
//!
//! search:
//!   depth_limit: 10
//!   diagonal_cost: 1.0    # 1.414 for octile costs
//!
//! display:
//!   fps: 5
//! ```

mod defaults;
mod display;
mod error;
mod grid;
mod marga;
mod search;

pub use display::{DisplaySection, OutputSection};
pub use error::ConfigLoadError;
pub use grid::GridSection;
pub use marga::{DEFAULT_CONFIG_PATH, MAX_GRID_SIZE, MargaConfig};
pub use search::SearchSection;
