//! Configuration for the LIRC client
//!
//! Centralized configuration with sensible defaults.

use std::path::PathBuf;
use std::time::Duration;

/// Port lircd listens on when started with `--listen`
pub const DEFAULT_PORT: u16 = 8765;

/// Host used when none is given
pub const DEFAULT_HOST: &str = "localhost";

/// Where lircd puts its socket on most distributions
pub const DEFAULT_SOCKET_PATH: &str = "/var/run/lirc/lircd";

/// Default deadline for connects and reads. WinLIRC can be really slow.
pub const DEFAULT_TIMEOUT_MS: u64 = 5000;

/// Main configuration for a client connection
#[derive(Debug, Clone)]
pub struct Config {
    // -------------------------------------------------------------------------
    // Endpoint Configuration
    // -------------------------------------------------------------------------
    /// Where the daemon is reached
    pub endpoint: Endpoint,

    // -------------------------------------------------------------------------
    // Timeout Configuration (0 = no deadline)
    // -------------------------------------------------------------------------
    /// Connect timeout (milliseconds, TCP only)
    pub connect_timeout_ms: u64,

    /// Per-line read timeout (milliseconds)
    pub read_timeout_ms: u64,

    /// Write timeout (milliseconds)
    pub write_timeout_ms: u64,
}

/// Daemon endpoint
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Endpoint {
    /// lircd listening on a TCP port
    Tcp { host: String, port: u16 },

    /// lircd's local Unix domain socket
    Unix { path: PathBuf },
}

impl Default for Endpoint {
    fn default() -> Self {
        Endpoint::Tcp {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            endpoint: Endpoint::default(),
            connect_timeout_ms: DEFAULT_TIMEOUT_MS,
            read_timeout_ms: DEFAULT_TIMEOUT_MS,
            write_timeout_ms: DEFAULT_TIMEOUT_MS,
        }
    }
}

impl Config {
    /// Create a new config builder
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }

    /// Read deadline as a Duration (zero = block forever)
    pub fn read_timeout(&self) -> Duration {
        Duration::from_millis(self.read_timeout_ms)
    }

    /// Write deadline as a Duration (zero = block forever)
    pub fn write_timeout(&self) -> Duration {
        Duration::from_millis(self.write_timeout_ms)
    }

    /// Connect deadline as a Duration (zero = OS default)
    pub fn connect_timeout(&self) -> Duration {
        Duration::from_millis(self.connect_timeout_ms)
    }
}

/// Builder for Config
#[derive(Default)]
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Connect over TCP to `host`, keeping the current port if already TCP
    pub fn host(mut self, host: impl Into<String>) -> Self {
        let port = match self.config.endpoint {
            Endpoint::Tcp { port, .. } => port,
            Endpoint::Unix { .. } => DEFAULT_PORT,
        };
        self.config.endpoint = Endpoint::Tcp {
            host: host.into(),
            port,
        };
        self
    }

    /// Connect over TCP on `port`, keeping the current host if already TCP
    pub fn port(mut self, port: u16) -> Self {
        let host = match &self.config.endpoint {
            Endpoint::Tcp { host, .. } => host.clone(),
            Endpoint::Unix { .. } => DEFAULT_HOST.to_string(),
        };
        self.config.endpoint = Endpoint::Tcp { host, port };
        self
    }

    /// Connect through a Unix domain socket instead of TCP
    pub fn socket_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.config.endpoint = Endpoint::Unix { path: path.into() };
        self
    }

    /// Set the endpoint directly
    pub fn endpoint(mut self, endpoint: Endpoint) -> Self {
        self.config.endpoint = endpoint;
        self
    }

    /// Set the connect timeout (in milliseconds)
    pub fn connect_timeout_ms(mut self, ms: u64) -> Self {
        self.config.connect_timeout_ms = ms;
        self
    }

    /// Set the read timeout (in milliseconds)
    pub fn read_timeout_ms(mut self, ms: u64) -> Self {
        self.config.read_timeout_ms = ms;
        self
    }

    /// Set the write timeout (in milliseconds)
    pub fn write_timeout_ms(mut self, ms: u64) -> Self {
        self.config.write_timeout_ms = ms;
        self
    }

    /// Set connect, read and write timeouts at once
    pub fn timeout_ms(self, ms: u64) -> Self {
        self.connect_timeout_ms(ms)
            .read_timeout_ms(ms)
            .write_timeout_ms(ms)
    }

    pub fn build(self) -> Config {
        self.config
    }
}
