use std::io;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Core(#[from] console_core::Error),
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error(transparent)]
    Serialization(#[from] serde_json::Error),
    #[error("Invalid draft edit '{0}', expected KEY=VALUE")]
    InvalidEdit(String),
    #[error("Unknown configuration key: {0}")]
    UnknownConfigKey(String),
    #[error("Value for {key} does not match its type: {reason}")]
    InvalidEditValue { key: String, reason: String },
}
