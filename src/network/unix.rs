//! Unix Domain Socket Transport
//!
//! Connects to lircd's local socket, usually `/var/run/lirc/lircd`.

use std::io;
use std::net::Shutdown;
use std::os::unix::net::UnixStream;
use std::path::Path;
use std::time::Duration;

use crate::config::Config;
use crate::error::Result;
use super::{Socket, SocketTransport};

/// Transport over a Unix domain socket
pub type UnixTransport = SocketTransport<UnixStream>;

impl Socket for UnixStream {
    fn try_clone(&self) -> io::Result<Self> {
        UnixStream::try_clone(self)
    }

    fn set_read_timeout(&self, timeout: Option<Duration>) -> io::Result<()> {
        UnixStream::set_read_timeout(self, timeout)
    }

    fn set_write_timeout(&self, timeout: Option<Duration>) -> io::Result<()> {
        UnixStream::set_write_timeout(self, timeout)
    }

    fn shutdown(&self, how: Shutdown) -> io::Result<()> {
        UnixStream::shutdown(self, how)
    }
}

impl SocketTransport<UnixStream> {
    /// Connect to the socket at `path`
    pub fn connect(path: &Path, config: &Config) -> Result<Self> {
        tracing::debug!("Connecting to {}", path.display());
        let stream = UnixStream::connect(path)?;
        Self::new(stream, path.display().to_string(), config)
    }
}
