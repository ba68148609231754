//! Error taxonomy
//!
//! Request-scoped variants are turned into HTTP responses by the handler;
//! startup variants end the process with a non-zero exit code.

use std::net::SocketAddr;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ServeError {
    /// Requested path does not name a file under the serving root.
    #[error("File not found: {0}")]
    NotFound(String),

    /// Resolved path escapes the serving root.
    #[error("Path traversal attempt blocked: {0}")]
    TraversalBlocked(String),

    /// Reading a file failed after it was found.
    #[error("Failed to read '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Expected asset files are absent at startup.
    #[error("Missing required files: {}", .0.join(", "))]
    MissingFiles(Vec<String>),

    /// Serving root cannot be resolved.
    #[error("Serving directory '{}' is not accessible: {source}", .path.display())]
    Root {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid configuration: {0}")]
    Config(#[from] config::ConfigError),

    /// A configuration value parsed but is out of range.
    #[error("Invalid configuration value for {key}: {reason}")]
    InvalidSetting { key: &'static str, reason: String },

    #[error("Invalid listen address '{0}'")]
    Address(String),

    /// Listener could not be bound, e.g. the port is already in use.
    #[error("Failed to bind {addr}: {source}")]
    Bind {
        addr: SocketAddr,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    Runtime(#[from] std::io::Error),
}
