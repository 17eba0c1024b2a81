use std::path::PathBuf;
use thiserror::Error;

/// Errors raised by the strategy lab harness.
#[derive(Error, Debug)]
pub enum LabError {
    /// Reading an input file (or stdin) failed.
    #[error("Failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    /// An input did not match the expected JSON shape.
    #[error("Invalid JSON in {path}: {source}")]
    Json {
        path: PathBuf,
        source: serde_json::Error,
    },

    /// Layered settings could not be built or deserialized.
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    /// Settings loaded but the strategy rejected them.
    #[error("Invalid strategy parameters: {0}")]
    Strategy(#[from] daily_swing::ConfigError),

    /// A result could not be encoded.
    #[error("Failed to encode output: {0}")]
    Encode(#[from] serde_json::Error),

    /// Writing results failed.
    #[error("Output error: {0}")]
    Output(#[from] std::io::Error),
}

/// A specialized Result type for strategy lab operations.
pub type Result<T> = std::result::Result<T, LabError>;
