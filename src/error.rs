//! Error types for the LIRC client
//!
//! Provides a unified error type for all operations, plus a coarse
//! [`ErrorKind`] that groups variants the way callers usually react to them.

use std::time::Duration;

use thiserror::Error;

/// Result type alias using LircError
pub type Result<T> = std::result::Result<T, LircError>;

/// Unified error type for LIRC client operations
#[derive(Debug, Error)]
pub enum LircError {
    // -------------------------------------------------------------------------
    // Connection Errors
    // -------------------------------------------------------------------------
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Timed out after {}ms waiting for the daemon", .0.as_millis())]
    Timeout(Duration),

    #[error("Connection closed by the daemon before the reply was complete")]
    ConnectionClosed,

    // -------------------------------------------------------------------------
    // Protocol Errors
    // -------------------------------------------------------------------------
    #[error("Bad reply packet: {0}")]
    BadPacket(String),

    // -------------------------------------------------------------------------
    // Server Errors
    // -------------------------------------------------------------------------
    #[error("Command failed: {command}")]
    Server { command: String },

    // -------------------------------------------------------------------------
    // Caller Errors
    // -------------------------------------------------------------------------
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    // -------------------------------------------------------------------------
    // Configuration Errors
    // -------------------------------------------------------------------------
    #[error("Configuration error: {0}")]
    Config(String),
}

/// Broad failure classes of a round-trip
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Transport failure, timeout or premature end of stream
    Connection,

    /// The daemon's reply did not follow the framing grammar
    Protocol,

    /// The daemon answered `ERROR` for the command
    Server,

    /// The caller supplied unusable arguments; no I/O was attempted
    InvalidArgument,
}

impl LircError {
    /// Classify this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            LircError::Io(_)
            | LircError::Timeout(_)
            | LircError::ConnectionClosed
            | LircError::Config(_) => ErrorKind::Connection,
            LircError::BadPacket(_) => ErrorKind::Protocol,
            LircError::Server { .. } => ErrorKind::Server,
            LircError::InvalidArgument(_) => ErrorKind::InvalidArgument,
        }
    }

    pub(crate) fn server(command: impl Into<String>) -> Self {
        LircError::Server {
            command: command.into(),
        }
    }
}
