//! TCP Transport
//!
//! Connects to lircd (or WinLIRC) listening on a TCP port.

use std::io;
use std::net::{Shutdown, TcpStream, ToSocketAddrs};
use std::time::Duration;

use crate::config::Config;
use crate::error::{LircError, Result};
use super::{Socket, SocketTransport};

/// Transport over a TCP connection
pub type TcpTransport = SocketTransport<TcpStream>;

impl Socket for TcpStream {
    fn try_clone(&self) -> io::Result<Self> {
        TcpStream::try_clone(self)
    }

    fn set_read_timeout(&self, timeout: Option<Duration>) -> io::Result<()> {
        TcpStream::set_read_timeout(self, timeout)
    }

    fn set_write_timeout(&self, timeout: Option<Duration>) -> io::Result<()> {
        TcpStream::set_write_timeout(self, timeout)
    }

    fn shutdown(&self, how: Shutdown) -> io::Result<()> {
        TcpStream::shutdown(self, how)
    }
}

impl SocketTransport<TcpStream> {
    /// Connect to `host:port`, trying each resolved address in turn
    pub fn connect(host: &str, port: u16, config: &Config) -> Result<Self> {
        let name = format!("{}:{}", host, port);
        let addrs = (host, port)
            .to_socket_addrs()
            .map_err(|e| LircError::Config(format!("cannot resolve {}: {}", name, e)))?;

        let connect_timeout = config.connect_timeout();
        let mut last_error = None;

        for addr in addrs {
            tracing::debug!("Connecting to {} ({})", name, addr);
            let attempt = if connect_timeout.is_zero() {
                TcpStream::connect(addr)
            } else {
                TcpStream::connect_timeout(&addr, connect_timeout)
            };

            match attempt {
                Ok(stream) => {
                    // Commands are single short lines; don't let Nagle hold them back
                    stream.set_nodelay(true)?;
                    return Self::new(stream, name, config);
                }
                Err(e) => {
                    tracing::debug!("Connecting to {} failed: {}", addr, e);
                    last_error = Some(e);
                }
            }
        }

        Err(match last_error {
            Some(e) => LircError::Io(e),
            None => LircError::Config(format!("{} did not resolve to any address", name)),
        })
    }
}
