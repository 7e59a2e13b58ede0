//! Core types for the Marga search visualizer.
//!
//! ## Type Categories
//!
//! ### Coordinates
//! - [`GridCoord`]: Integer cell indices (row, column), row 0 at the top
//! - [`Direction`]: The eight moves in their fixed expansion order
//!
//! ### Grid Cells
//! - [`CellType`]: Static classification (Empty, Wall, Start, Target)
//!
//! ## Example
//!
//! ```rust
//! use marga::core::{Direction, GridCoord};
//!
//! let coord = GridCoord::new(4, 4);
//! let up = coord.step(Direction::Up);
//! assert_eq!(up, GridCoord::new(3, 4));
//! assert_eq!(coord.neighbors_8()[0], up);
//! ```

mod cell;
mod point;

pub use cell::CellType;
pub use point::{Direction, GridCoord};
