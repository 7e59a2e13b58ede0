//! Configuration loading errors.

use thiserror::Error;

/// Config load error
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigLoadError {
    /// I/O error
    #[error("IO error: {0}")]
    Io(String),
    /// Parse error
    #[error("Parse error: {0}")]
    Parse(String),
    /// A value outside its valid range
    #[error("Invalid {field}: {reason}")]
    Invalid {
        /// Dotted field name, e.g. `display.fps`
        field: &'static str,
        /// What is wrong with it
        reason: String,
    },
}
