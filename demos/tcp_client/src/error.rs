//! Error types for the `tcp_client` demo.

use std::io;
use std::sync::Arc;

use thiserror::Error;

/// Errors raised by the demo commands.
#[derive(Debug, Error)]
pub enum TcpClientError {
    /// Wraps failures reported by `coral_config`.
    #[error("configuration error: {0}")]
    Configuration(#[from] Arc<coral_config::CoralError>),
    /// A scope name on the command line matched no demo scope.
    #[error("unknown scope '{0}', expected one of MoreConfigs, Client, TcpClient")]
    UnknownScope(String),
    /// A requested parameter name matched no demo parameter.
    #[error("unknown parameter '{0}'")]
    UnknownParameter(String),
    /// Writing to standard output failed.
    #[error(transparent)]
    Io(#[from] io::Error),
    /// Rendering JSON output failed.
    #[error("failed to render JSON: {0}")]
    Json(String),
}

/// Result alias used throughout the demo.
pub type Result<T, E = TcpClientError> = std::result::Result<T, E>;
