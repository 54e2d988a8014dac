//! CLI error types and result alias.

use dburl_config::ConnectionError;
use miette::Diagnostic;
use thiserror::Error;

/// Result type alias for CLI operations
pub type CliResult<T> = Result<T, CliError>;

/// CLI error types
#[derive(Error, Debug, Diagnostic)]
pub enum CliError {
    /// URL parsing or settings error
    #[error(transparent)]
    #[diagnostic(code(dburl::connection))]
    Connection(#[from] ConnectionError),

    /// Output rendering error
    #[error("Format error: {0}")]
    #[diagnostic(code(dburl::format))]
    Format(String),
}

impl From<toml::ser::Error> for CliError {
    fn from(err: toml::ser::Error) -> Self {
        CliError::Format(format!("Failed to serialize TOML: {}", err))
    }
}

impl From<serde_json::Error> for CliError {
    fn from(err: serde_json::Error) -> Self {
        CliError::Format(format!("Failed to serialize JSON: {}", err))
    }
}
