use thiserror::Error;

use dathub_convert::{ConvertError, FormatParseError};

/// Errors that can occur during CLI command execution.
#[derive(Debug, Error)]
pub(crate) enum CliError {
    /// I/O error
    #[error("{0}")]
    Io(#[from] std::io::Error),

    /// Reading or writing a serialized document failed
    #[error("Conversion error: {0}")]
    Convert(#[from] ConvertError),

    /// Configuration error
    #[error("Config error: {0}")]
    Config(String),

    /// Unknown or unsupported format name
    #[error("{0}")]
    UnknownFormat(#[from] FormatParseError),

    /// Catch-all for other errors
    #[error("{0}")]
    Other(String),
}

impl CliError {
    pub(crate) fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    pub(crate) fn other(msg: impl Into<String>) -> Self {
        Self::Other(msg.into())
    }
}
