//! Display and output sections.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use super::defaults;

/// Rendering settings
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct DisplaySection {
    /// Search steps per second in the interactive view
    #[serde(default = "defaults::fps")]
    pub fps: u32,

    /// SVG cell edge length in pixels
    #[serde(default = "defaults::cell_size")]
    pub cell_size: f32,
}

impl Default for DisplaySection {
    fn default() -> Self {
        Self {
            fps: defaults::fps(),
            cell_size: defaults::cell_size(),
        }
    }
}

impl DisplaySection {
    /// Time between two search steps
    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(1000 / u64::from(self.fps.max(1)))
    }
}

/// Output locations
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct OutputSection {
    /// Directory for SVG exports
    #[serde(default = "defaults::output_dir")]
    pub dir: String,
}

impl Default for OutputSection {
    fn default() -> Self {
        Self {
            dir: defaults::output_dir(),
        }
    }
}
