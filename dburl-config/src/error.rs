//! Error types for URL parsing and settings loading.

use thiserror::Error;

/// Result type for connection URL operations.
pub type ConnectionResult<T> = Result<T, ConnectionError>;

/// Errors that can occur while turning a URL into a [`ConnectionConfig`](crate::ConnectionConfig).
#[derive(Error, Debug)]
pub enum ConnectionError {
    /// The URL has no `scheme://` prefix or its authority cannot be split.
    #[error("Malformed database URL: {0}")]
    MalformedUrl(String),

    /// The scheme is neither a default nor a custom entry, and no engine was given.
    #[error("Unrecognized database URL scheme: {0}")]
    UnrecognizedScheme(String),

    /// The port segment is present but is not a valid port number.
    #[error("Invalid port '{0}': expected an integer between 1 and 65535")]
    InvalidPort(String),

    /// Environment variable not found.
    #[error("Environment variable not found: {0}")]
    EnvNotFound(String),

    /// Invalid environment variable value.
    #[error("Invalid environment variable '{name}': {message}")]
    InvalidEnvValue { name: String, message: String },

    /// Settings file error.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Settings file could not be read.
    #[error("Failed to read '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Settings file is not valid TOML.
    #[error("Failed to parse settings: {0}")]
    Toml(#[from] toml::de::Error),
}

impl ConnectionError {
    /// Create a malformed URL error.
    pub fn malformed(message: impl Into<String>) -> Self {
        Self::MalformedUrl(message.into())
    }

    /// Check if this error came from URL decomposition rather than settings or environment.
    pub fn is_url_error(&self) -> bool {
        matches!(
            self,
            Self::MalformedUrl(_) | Self::UnrecognizedScheme(_) | Self::InvalidPort(_)
        )
    }
}
