//! Error types for the folio server.

use std::net::AddrParseError;

use thiserror::Error;

/// Result type alias using `ServerError`.
pub type Result<T> = std::result::Result<T, ServerError>;

/// Server error types.
#[derive(Error, Debug)]
pub enum ServerError {
    /// Configuration loading, parsing, or validation error.
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    /// Listen address that does not parse as `host:port`.
    #[error("Invalid listen address '{addr}': {source}")]
    InvalidAddr {
        addr: String,
        #[source]
        source: AddrParseError,
    },

    /// Socket or file system I/O error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl ServerError {
    /// Create a configuration error from a validation message.
    pub fn invalid_config(message: impl Into<String>) -> Self {
        Self::Config(config::ConfigError::Message(message.into()))
    }

    /// Create an invalid address error.
    pub fn invalid_addr(addr: impl Into<String>, source: AddrParseError) -> Self {
        Self::InvalidAddr {
            addr: addr.into(),
            source,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_config_display() {
        let err = ServerError::invalid_config("output_name cannot be empty");
        assert!(err.to_string().contains("Configuration error"));
        assert!(err.to_string().contains("output_name cannot be empty"));
    }

    #[test]
    fn test_invalid_addr_display() {
        let source = "nope".parse::<std::net::SocketAddr>().unwrap_err();
        let err = ServerError::invalid_addr("nope", source);
        assert!(err.to_string().contains("'nope'"));
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::AddrInUse, "address in use");
        let err: ServerError = io_err.into();
        assert!(matches!(err, ServerError::Io(_)));
    }
}
