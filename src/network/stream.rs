//! Socket Transport
//!
//! Buffered line I/O over a connected socket.

use std::io::{self, BufRead, BufReader, BufWriter, Read, Write};
use std::net::Shutdown;
use std::time::Duration;

use crate::config::Config;
use crate::error::{LircError, Result};
use super::Transport;

/// Longest reply line accepted, terminator excluded
///
/// lircd lines are at most a few hundred bytes. The cap also bounds how long
/// a daemon trickling bytes can hold a read past its deadline.
pub const MAX_LINE_LEN: usize = 4096;

/// Connected stream socket that can be split and given deadlines
pub trait Socket: Read + Write + Send + Sized {
    fn try_clone(&self) -> io::Result<Self>;
    fn set_read_timeout(&self, timeout: Option<Duration>) -> io::Result<()>;
    fn set_write_timeout(&self, timeout: Option<Duration>) -> io::Result<()>;
    fn shutdown(&self, how: Shutdown) -> io::Result<()>;
}

/// [`Transport`] over a [`Socket`]
pub struct SocketTransport<S: Socket> {
    /// Socket reader (buffered for line reads)
    reader: BufReader<S>,

    /// Socket writer (flushed after every command)
    writer: BufWriter<S>,

    /// Endpoint name for logging
    name: String,

    /// Read deadline currently set on the socket
    read_timeout: Option<Duration>,

    closed: bool,
}

impl<S: Socket> SocketTransport<S> {
    /// Wrap a connected socket
    ///
    /// Sets up buffered I/O and applies the configured deadlines
    pub fn new(stream: S, name: impl Into<String>, config: &Config) -> Result<Self> {
        let read_timeout = non_zero(config.read_timeout());
        stream.set_read_timeout(read_timeout)?;
        stream.set_write_timeout(non_zero(config.write_timeout()))?;

        // Clone stream for separate read/write handles
        let read_stream = stream.try_clone()?;
        let write_stream = stream;

        Ok(Self {
            reader: BufReader::new(read_stream),
            writer: BufWriter::new(write_stream),
            name: name.into(),
            read_timeout,
            closed: false,
        })
    }

    fn ensure_open(&self) -> Result<()> {
        if self.closed {
            return Err(LircError::Io(io::Error::new(
                io::ErrorKind::NotConnected,
                format!("connection to {} already closed", self.name),
            )));
        }
        Ok(())
    }
}

impl<S: Socket> Transport for SocketTransport<S> {
    fn write_all(&mut self, data: &[u8]) -> Result<()> {
        self.ensure_open()?;
        self.writer.write_all(data)?;
        self.writer.flush()?;
        Ok(())
    }

    fn read_line(&mut self, timeout: Duration) -> Result<Option<String>> {
        self.ensure_open()?;

        let wanted = non_zero(timeout);
        if wanted != self.read_timeout {
            self.reader.get_ref().set_read_timeout(wanted)?;
            self.read_timeout = wanted;
        }

        read_ascii_line(&mut self.reader, timeout)
    }

    fn close(&mut self) -> Result<()> {
        if self.closed {
            return Ok(());
        }
        self.closed = true;
        tracing::debug!("Closing connection to {}", self.name);

        let flushed = self.writer.flush();
        match self.writer.get_ref().shutdown(Shutdown::Both) {
            Ok(()) => {}
            // The daemon hung up first
            Err(e) if e.kind() == io::ErrorKind::NotConnected => {}
            Err(e) => return Err(e.into()),
        }
        flushed?;
        Ok(())
    }

    fn display_name(&self) -> &str {
        &self.name
    }
}

impl<S: Socket> Drop for SocketTransport<S> {
    fn drop(&mut self) {
        if let Err(e) = self.close() {
            tracing::debug!("Error closing connection to {}: {}", self.name, e);
        }
    }
}

fn non_zero(timeout: Duration) -> Option<Duration> {
    if timeout.is_zero() {
        None
    } else {
        Some(timeout)
    }
}

/// Read one newline-terminated line, decoding it as ASCII.
///
/// Non-ASCII bytes are replaced rather than rejected. A final line without
/// terminator is still returned. A line longer than [`MAX_LINE_LEN`] is a
/// [`LircError::BadPacket`].
pub(crate) fn read_ascii_line<R: BufRead>(reader: &mut R, timeout: Duration) -> Result<Option<String>> {
    let mut buf = Vec::with_capacity(64);
    let mut limited = reader.take(MAX_LINE_LEN as u64 + 2);
    match limited.read_until(b'\n', &mut buf) {
        Ok(0) => Ok(None),
        Ok(_) => {
            if buf.last() != Some(&b'\n') && buf.len() > MAX_LINE_LEN {
                return Err(LircError::BadPacket(format!(
                    "line exceeds {} bytes without a terminator",
                    MAX_LINE_LEN
                )));
            }
            if buf.last() == Some(&b'\n') {
                buf.pop();
                if buf.last() == Some(&b'\r') {
                    buf.pop();
                }
            }
            Ok(Some(String::from_utf8_lossy(&buf).into_owned()))
        }
        // Unix reports an expired SO_RCVTIMEO as WouldBlock, Windows as TimedOut
        Err(e) if matches!(e.kind(), io::ErrorKind::WouldBlock | io::ErrorKind::TimedOut) => {
            Err(LircError::Timeout(timeout))
        }
        Err(e) => Err(e.into()),
    }
}
