//! Error types for console-core

use thiserror::Error;

/// Result type alias using console-core's Error
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while loading console inputs.
///
/// The presentation layer itself never fails: menus, forms and placeholders
/// degrade to a placeholder view. These variants cover the file and parsing
/// work done around it.
#[derive(Error, Debug)]
pub enum Error {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Invalid input
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}
