//! CLI error types.

use std::fmt;

use tilepyramid::{BoundsError, ConfigError};

/// Errors that can occur while running the CLI.
#[derive(Debug)]
pub enum CliError {
    /// The bounds argument failed to parse or validate.
    Bounds(BoundsError),

    /// The zoom range or configuration was rejected.
    Config(ConfigError),

    /// Writing output failed.
    Io(std::io::Error),
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::Bounds(e) => write!(f, "Invalid bounds: {}", e),
            CliError::Config(e) => write!(f, "Invalid configuration: {}", e),
            CliError::Io(e) => write!(f, "Failed to write output: {}", e),
        }
    }
}

impl std::error::Error for CliError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CliError::Bounds(e) => Some(e),
            CliError::Config(e) => Some(e),
            CliError::Io(e) => Some(e),
        }
    }
}

impl From<BoundsError> for CliError {
    fn from(e: BoundsError) -> Self {
        CliError::Bounds(e)
    }
}

impl From<ConfigError> for CliError {
    fn from(e: ConfigError) -> Self {
        CliError::Config(e)
    }
}

impl From<std::io::Error> for CliError {
    fn from(e: std::io::Error) -> Self {
        CliError::Io(e)
    }
}
