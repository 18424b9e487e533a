//! Error types for hostdb
//!
//! This module defines all error types used throughout the crate.

use thiserror::Error;

use crate::record::{IpAddress, QualifiedName};

/// Result type alias for hostdb operations
pub type Result<T> = std::result::Result<T, Error>;

/// Core error type for hostdb
#[derive(Error, Debug)]
pub enum Error {
    /// Malformed IP address or machine name
    #[error("{0}")]
    InvalidFormat(String),

    /// An entry already uses this IP address
    #[error("IP address already exists: {0}")]
    DuplicateIp(IpAddress),

    /// An entry already uses this machine name
    #[error("machine name already exists: {0}")]
    DuplicateName(QualifiedName),

    /// Reading or writing the backing file failed
    #[error("{0}")]
    Persistence(String),

    /// A command was recognised but its arguments were wrong
    #[error("usage: {0}")]
    Usage(String),

    /// The first token of a line matched no command
    #[error("unrecognized command: {0}")]
    UnrecognizedCommand(String),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// Line source or output sink failures
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON configuration errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// Create an invalid format error
    pub fn invalid_format(msg: impl Into<String>) -> Self {
        Self::InvalidFormat(msg.into())
    }

    /// Create a persistence error
    pub fn persistence(msg: impl Into<String>) -> Self {
        Self::Persistence(msg.into())
    }

    /// Create a usage error
    pub fn usage(msg: impl Into<String>) -> Self {
        Self::Usage(msg.into())
    }

    /// Create an unrecognized command error
    pub fn unrecognized(token: impl Into<String>) -> Self {
        Self::UnrecognizedCommand(token.into())
    }

    /// Create a configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }
}
