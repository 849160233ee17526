//! Network Module
//!
//! Line transports to the daemon.
//!
//! ## Architecture
//! - [`Transport`] is the only thing the protocol engine depends on
//! - [`SocketTransport`] implements it over any buffered socket
//! - TCP and Unix domain sockets are picked by [`Endpoint`], not by subtyping

mod stream;
mod tcp;
#[cfg(unix)]
mod unix;

use std::time::Duration;

use crate::config::{Config, Endpoint};
use crate::error::Result;

pub use stream::{Socket, SocketTransport, MAX_LINE_LEN};
pub use tcp::TcpTransport;
#[cfg(unix)]
pub use unix::UnixTransport;

/// Duplex line stream to the daemon
pub trait Transport: Send {
    /// Write all bytes and flush them.
    fn write_all(&mut self, data: &[u8]) -> Result<()>;

    /// Read one line, waiting at most `timeout` (zero = no deadline).
    ///
    /// The terminator (`\n` or `\r\n`) is stripped. Returns `Ok(None)` at
    /// end of stream, [`LircError::Timeout`](crate::LircError::Timeout)
    /// when the deadline passes.
    fn read_line(&mut self, timeout: Duration) -> Result<Option<String>>;

    /// Release the connection. Calling it again is a no-op.
    fn close(&mut self) -> Result<()>;

    /// Human-readable endpoint name, for logging only
    fn display_name(&self) -> &str;
}

impl<T: Transport + ?Sized> Transport for Box<T> {
    fn write_all(&mut self, data: &[u8]) -> Result<()> {
        (**self).write_all(data)
    }

    fn read_line(&mut self, timeout: Duration) -> Result<Option<String>> {
        (**self).read_line(timeout)
    }

    fn close(&mut self) -> Result<()> {
        (**self).close()
    }

    fn display_name(&self) -> &str {
        (**self).display_name()
    }
}

/// Open the transport selected by `config.endpoint`
pub fn connect(config: &Config) -> Result<Box<dyn Transport>> {
    match &config.endpoint {
        Endpoint::Tcp { host, port } => Ok(Box::new(TcpTransport::connect(host, *port, config)?)),
        Endpoint::Unix { path } => connect_unix(path, config),
    }
}

#[cfg(unix)]
fn connect_unix(path: &std::path::Path, config: &Config) -> Result<Box<dyn Transport>> {
    Ok(Box::new(UnixTransport::connect(path, config)?))
}

#[cfg(not(unix))]
fn connect_unix(path: &std::path::Path, _config: &Config) -> Result<Box<dyn Transport>> {
    Err(crate::error::LircError::Config(format!(
        "Unix domain sockets are not supported on this platform ({})",
        path.display()
    )))
}
