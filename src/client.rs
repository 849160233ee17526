//! Client Module
//!
//! Typed operations on top of the protocol engine.
//!
//! ## Responsibilities
//! - Validate arguments before any I/O
//! - Run one command round-trip per operation
//! - Turn replies into typed results
//! - Remember the last repeat-send target for the parameterless stop

use std::time::Duration;

use crate::config::{Config, DEFAULT_TIMEOUT_MS};
use crate::error::{LircError, Result};
use crate::network::{self, Transport};
use crate::protocol::{round_trip, Command, LinePolicy, Reply};

/// Highest transmitter number a 64 bit mask can address
pub const MAX_TRANSMITTER: u32 = u64::BITS;

/// Client for one daemon connection
///
/// ## Concurrency Model
///
/// Strictly one command in flight: every operation takes `&mut self` and
/// returns only after its reply has been read completely (or has failed).
/// After a timeout the connection state is unknown; close the client and
/// reconnect instead of reusing it.
pub struct LircClient<T: Transport = Box<dyn Transport>> {
    /// Exclusively owned connection
    transport: T,

    /// Deadline for every line read
    timeout: Duration,

    /// Remote and command of the last successful SEND_START
    last_repeat: Option<(String, String)>,

    /// Set once the transport has been released
    closed: bool,
}

impl LircClient<Box<dyn Transport>> {
    /// Connect to the endpoint in `config`
    pub fn connect(config: &Config) -> Result<Self> {
        let transport = network::connect(config)?;
        tracing::debug!("Connected to lirc@{}", transport.display_name());
        Ok(Self::with_timeout(transport, config.read_timeout()))
    }
}

impl<T: Transport> LircClient<T> {
    /// Wrap an open transport, using the default read timeout
    pub fn new(transport: T) -> Self {
        Self::with_timeout(transport, Duration::from_millis(DEFAULT_TIMEOUT_MS))
    }

    /// Wrap an open transport with a read timeout (zero = wait forever)
    pub fn with_timeout(transport: T, timeout: Duration) -> Self {
        Self {
            transport,
            timeout,
            last_repeat: None,
            closed: false,
        }
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    pub fn set_timeout(&mut self, timeout: Duration) {
        self.timeout = timeout;
    }

    /// Endpoint name of the underlying transport
    pub fn display_name(&self) -> &str {
        self.transport.display_name()
    }

    /// Remote and command the parameterless stop would use
    pub fn last_repeat(&self) -> Option<(&str, &str)> {
        self.last_repeat
            .as_ref()
            .map(|(remote, command)| (remote.as_str(), command.as_str()))
    }

    // =========================================================================
    // Transmission
    // =========================================================================

    /// Send `command` of `remote` `count` times (count >= 1)
    pub fn send_command(&mut self, remote: &str, command: &str, count: u32) -> Result<()> {
        check_token("remote", remote)?;
        check_token("command", command)?;
        if count == 0 {
            return Err(LircError::InvalidArgument(
                "count must be at least 1".to_string(),
            ));
        }

        self.execute(&Command::send_once(remote, command, count - 1))?;
        Ok(())
    }

    /// Start sending `command` of `remote` until stopped
    pub fn send_command_repeat(&mut self, remote: &str, command: &str) -> Result<()> {
        check_token("remote", remote)?;
        check_token("command", command)?;

        self.execute(&Command::send_start(remote, command))?;
        self.last_repeat = Some((remote.to_string(), command.to_string()));
        Ok(())
    }

    /// Stop a repeat-send of `command` of `remote`
    pub fn stop_repeat(&mut self, remote: &str, command: &str) -> Result<()> {
        check_token("remote", remote)?;
        check_token("command", command)?;

        self.execute(&Command::send_stop(remote, command))?;
        Ok(())
    }

    /// Stop the repeat-send most recently started on this connection
    pub fn stop_last_repeat(&mut self) -> Result<()> {
        let (remote, command) = self.last_repeat.clone().ok_or_else(|| {
            LircError::InvalidArgument("no repeat-send has been started".to_string())
        })?;

        self.execute(&Command::send_stop(&remote, &command))?;
        Ok(())
    }

    // =========================================================================
    // Inquiries
    // =========================================================================

    /// Names of the remotes the daemon knows, in daemon order
    pub fn list_remotes(&mut self) -> Result<Vec<String>> {
        let reply = self.execute(&Command::list(None))?;
        Ok(LinePolicy::Verbatim.apply(reply))
    }

    /// Names of the commands of `remote`, in daemon order
    pub fn list_commands(&mut self, remote: &str) -> Result<Vec<String>> {
        check_token("remote", remote)?;

        let reply = self.execute(&Command::list(Some(remote)))?;
        Ok(LinePolicy::LastToken.apply(reply))
    }

    /// Version string reported by the daemon
    pub fn version(&mut self) -> Result<String> {
        let command = Command::version();
        let mut lines = self.execute(&command)?.into_lines();

        match lines.len() {
            0 => Err(LircError::server(command.to_line())),
            1 => Ok(lines.swap_remove(0)),
            n => Err(LircError::BadPacket(format!(
                "one version line expected but {} received",
                n
            ))),
        }
    }

    // =========================================================================
    // Daemon Settings
    // =========================================================================

    /// Enable exactly the given transmitters (numbered from 1)
    ///
    /// Repeated numbers are harmless.
    pub fn set_transmitters(&mut self, transmitters: &[u32]) -> Result<()> {
        let mask = transmitter_mask(transmitters)?;
        self.set_transmitters_mask(mask)
    }

    /// Enable transmitters by raw bitmask (bit i = transmitter i + 1)
    pub fn set_transmitters_mask(&mut self, mask: u64) -> Result<()> {
        self.execute(&Command::set_transmitters(mask))?;
        Ok(())
    }

    /// Start logging received input to `path`, or stop with `None`
    pub fn set_input_log(&mut self, path: Option<&str>) -> Result<()> {
        if let Some(path) = path {
            check_token("log path", path)?;
        }

        self.execute(&Command::set_input_log(path))?;
        Ok(())
    }

    /// Set a driver option
    pub fn set_driver_option(&mut self, key: &str, value: &str) -> Result<()> {
        check_token("option key", key)?;
        check_token("option value", value)?;

        self.execute(&Command::drv_option(key, value))?;
        Ok(())
    }

    /// Make the daemon act as if `button` of `remote` had been received
    pub fn simulate(&mut self, code: u64, repeat: u8, button: &str, remote: &str) -> Result<()> {
        check_token("button", button)?;
        check_token("remote", remote)?;

        self.execute(&Command::simulate(code, repeat, button, remote))?;
        Ok(())
    }

    // =========================================================================
    // Lifecycle
    // =========================================================================

    /// Release the connection
    pub fn close(mut self) -> Result<()> {
        self.closed = true;
        self.transport.close()
    }

    fn execute(&mut self, command: &Command) -> Result<Reply> {
        round_trip(&mut self.transport, command, self.timeout)
    }
}

impl<T: Transport> Drop for LircClient<T> {
    fn drop(&mut self) {
        if self.closed {
            return;
        }
        self.closed = true;
        if let Err(e) = self.transport.close() {
            tracing::debug!("Error closing lirc@{}: {}", self.transport.display_name(), e);
        }
    }
}

/// Combine 1-based transmitter numbers into a bitmask
pub fn transmitter_mask(transmitters: &[u32]) -> Result<u64> {
    if transmitters.is_empty() {
        return Err(LircError::InvalidArgument(
            "at least one transmitter is required".to_string(),
        ));
    }

    transmitters.iter().try_fold(0u64, |mask, &n| {
        if n == 0 || n > MAX_TRANSMITTER {
            return Err(LircError::InvalidArgument(format!(
                "transmitter {} out of range 1..={}",
                n, MAX_TRANSMITTER
            )));
        }
        Ok(mask | 1u64 << (n - 1))
    })
}

/// Reject tokens the line protocol cannot carry
fn check_token(what: &str, value: &str) -> Result<()> {
    if value.is_empty() {
        return Err(LircError::InvalidArgument(format!("{} must not be empty", what)));
    }
    if !value.is_ascii() || value.chars().any(|c| c.is_ascii_whitespace() || c.is_ascii_control()) {
        return Err(LircError::InvalidArgument(format!(
            "{} `{}` must be printable ASCII without whitespace",
            what,
            value.escape_debug()
        )));
    }
    Ok(())
}
