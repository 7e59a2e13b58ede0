//! Error types for Marga

use crate::config::ConfigLoadError;
use crate::grid::GridError;
use crate::search::UnknownAlgorithm;

/// Result type alias
pub type Result<T> = std::result::Result<T, MargaError>;

/// Marga error types
#[derive(Debug, thiserror::Error)]
pub enum MargaError {
    /// Configuration could not be loaded
    #[error("Config error: {0}")]
    Config(#[from] ConfigLoadError),

    /// Grid could not be built
    #[error("Grid error: {0}")]
    Grid(#[from] GridError),

    /// Unrecognised algorithm name
    #[error(transparent)]
    Algorithm(#[from] UnknownAlgorithm),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Terminal setup or drawing failed
    #[error("Terminal error: {0}")]
    Terminal(String),
}
