//! Main MargaConfig and conversion methods.

use std::path::Path;

use log::info;
use serde::{Deserialize, Serialize};

use crate::grid::{GridError, GridStorage};
use crate::search::SearchConfig;

use super::display::{DisplaySection, OutputSection};
use super::error::ConfigLoadError;
use super::grid::GridSection;
use super::search::SearchSection;

/// Config file picked up when no path is given
pub const DEFAULT_CONFIG_PATH: &str = "configs/marga.yaml";

/// Largest accepted `grid.size`
pub const MAX_GRID_SIZE: usize = 100;

/// Full Marga configuration loaded from YAML
#[derive(Clone, Debug, Serialize, Deserialize, Default, PartialEq)]
pub struct MargaConfig {
    /// Grid layout
    #[serde(default)]
    pub grid: GridSection,

    /// Search tuning
    #[serde(default)]
    pub search: SearchSection,

    /// Rendering settings
    #[serde(default)]
    pub display: DisplaySection,

    /// Output locations
    #[serde(default)]
    pub output: OutputSection,
}

impl MargaConfig {
    /// Load configuration from a YAML file
    pub fn load(path: &Path) -> Result<Self, ConfigLoadError> {
        let contents =
            std::fs::read_to_string(path).map_err(|e| ConfigLoadError::Io(e.to_string()))?;
        Self::from_yaml(&contents)
    }

    /// Load from the default config path, or fall back to built-in defaults
    pub fn load_default() -> Result<Self, ConfigLoadError> {
        let path = Path::new(DEFAULT_CONFIG_PATH);
        if path.exists() {
            info!("Loading configuration from {}", path.display());
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Parse and validate a YAML string
    pub fn from_yaml(yaml: &str) -> Result<Self, ConfigLoadError> {
        // An empty document deserializes to null rather than an empty map
        let config: MargaConfig = if yaml.trim().is_empty() {
            MargaConfig::default()
        } else {
            serde_yaml::from_str(yaml).map_err(|e| ConfigLoadError::Parse(e.to_string()))?
        };
        config.validate()?;
        Ok(config)
    }

    /// Serialize to YAML
    pub fn to_yaml(&self) -> Result<String, ConfigLoadError> {
        serde_yaml::to_string(self).map_err(|e| ConfigLoadError::Parse(e.to_string()))
    }

    /// Check value ranges
    pub fn validate(&self) -> Result<(), ConfigLoadError> {
        if self.grid.size == 0 {
            return Err(ConfigLoadError::Invalid {
                field: "grid.size",
                reason: "must be greater than zero".to_string(),
            });
        }
        if self.grid.size > MAX_GRID_SIZE {
            return Err(ConfigLoadError::Invalid {
                field: "grid.size",
                reason: format!("must be at most {}, got {}", MAX_GRID_SIZE, self.grid.size),
            });
        }
        if let Err(e) = self.build_grid() {
            return Err(ConfigLoadError::Invalid {
                field: "grid",
                reason: e.to_string(),
            });
        }
        if !(self.search.diagonal_cost > 0.0 && self.search.diagonal_cost.is_finite()) {
            return Err(ConfigLoadError::Invalid {
                field: "search.diagonal_cost",
                reason: format!("must be positive, got {}", self.search.diagonal_cost),
            });
        }
        if self.search.max_steps == 0 {
            return Err(ConfigLoadError::Invalid {
                field: "search.max_steps",
                reason: "must be greater than zero".to_string(),
            });
        }
        if self.display.fps == 0 {
            return Err(ConfigLoadError::Invalid {
                field: "display.fps",
                reason: "must be greater than zero".to_string(),
            });
        }
        if self.display.cell_size <= 0.0 {
            return Err(ConfigLoadError::Invalid {
                field: "display.cell_size",
                reason: format!("must be positive, got {}", self.display.cell_size),
            });
        }
        Ok(())
    }

    /// Build the grid described by the `grid` section
    pub fn build_grid(&self) -> Result<GridStorage, GridError> {
        self.grid.to_grid()
    }

    /// Get the runtime search config
    pub fn search_config(&self) -> SearchConfig {
        self.search.to_search_config()
    }
}
