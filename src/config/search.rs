//! Search section.

use serde::{Deserialize, Serialize};

use super::defaults;
use crate::search::SearchConfig;

/// Search tuning
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct SearchSection {
    /// Depth limit for depth-limited search
    #[serde(default = "defaults::depth_limit")]
    pub depth_limit: usize,

    /// Diagonal move cost for uniform-cost search
    #[serde(default = "defaults::diagonal_cost")]
    pub diagonal_cost: f32,

    /// Step budget for headless runs
    #[serde(default = "defaults::max_steps")]
    pub max_steps: usize,
}

impl Default for SearchSection {
    fn default() -> Self {
        Self {
            depth_limit: defaults::depth_limit(),
            diagonal_cost: defaults::diagonal_cost(),
            max_steps: defaults::max_steps(),
        }
    }
}

impl SearchSection {
    /// Convert to the runtime search configuration
    pub fn to_search_config(&self) -> SearchConfig {
        SearchConfig {
            depth_limit: self.depth_limit,
            diagonal_cost: self.diagonal_cost,
        }
    }
}
