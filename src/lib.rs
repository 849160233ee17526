//! # lirc-client
//!
//! A client for the LIRC daemon's text protocol, with:
//! - Listing of remotes and their commands
//! - One-shot and repeated transmission of IR commands
//! - Transmitter selection, input logging and driver options
//! - TCP and Unix domain socket transports
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                        LircClient                            │
//! │          (typed operations, last repeat-send target)         │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │ Command
//! ┌─────────────────────▼───────────────────────────────────────┐
//! │                      Protocol Engine                         │
//! │        (command encoding, reply parser state machine)        │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │ lines
//!          ┌────────────┴────────────┐
//!          │        Transport        │
//!          ▼                         ▼
//!   ┌─────────────┐          ┌─────────────┐
//!   │     TCP     │          │ Unix socket │
//!   └─────────────┘          └─────────────┘
//! ```
//!
//! ## Example
//!
//! ```no_run
//! use lirc_client::{Config, LircClient};
//!
//! # fn main() -> lirc_client::Result<()> {
//! let config = Config::builder().host("localhost").port(8765).build();
//! let mut client = LircClient::connect(&config)?;
//!
//! for remote in client.list_remotes()? {
//!     println!("{}", remote);
//! }
//! client.send_command("tv", "KEY_POWER", 1)?;
//! client.close()
//! # }
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod config;

pub mod protocol;
pub mod network;
pub mod client;

// =============================================================================
// Public API Re-exports
// =============================================================================

pub use error::{ErrorKind, LircError, Result};
pub use config::{Config, Endpoint};
pub use client::LircClient;
pub use network::Transport;

// =============================================================================
// Version Info
// =============================================================================

/// Current version of lirc-client
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
