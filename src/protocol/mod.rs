//! Protocol Module
//!
//! Defines the lircd text protocol for client-daemon communication.
//!
//! ## Protocol Format (ASCII, newline-terminated lines)
//!
//! ### Request Format
//! ```text
//! <VERB> <arg1> <arg2> ...\n
//! ```
//!
//! ### Verbs
//! - SEND_ONCE remote command repeats
//! - SEND_START remote command
//! - SEND_STOP remote command
//! - LIST [remote]
//! - SET_TRANSMITTERS mask
//! - VERSION
//! - SET_INPUTLOG path|null
//! - DRV_OPTION key value
//! - SIMULATE code repeat button remote
//!
//! ### Reply Format
//! ```text
//! BEGIN
//! <command as sent, compared case-insensitively>
//! SUCCESS | ERROR | END
//! [DATA
//!  <n>
//!  <line 1>
//!  ...
//!  <line n>]
//! END
//! ```
//!
//! Lines outside a `BEGIN` block (lircd broadcasts decoded button presses
//! to every connected client) are skipped.

mod command;
mod reply;
mod parser;
mod codec;

pub use command::{Command, Verb};
pub use reply::{LinePolicy, Reply};
pub use parser::ReplyParser;
pub use codec::{parse_reply, read_reply, round_trip, write_command};
