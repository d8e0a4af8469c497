//! Error type for configuration loading.

use thiserror::Error;

/// Error raised while loading or parsing a configuration file
#[derive(Debug, Error)]
pub enum ConfigLoadError {
    /// Reading the file failed
    #[error("I/O error: {0}")]
    Io(String),

    /// The YAML contents did not parse
    #[error("Parse error: {0}")]
    Parse(String),
}
