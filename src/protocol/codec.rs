//! Protocol codec
//!
//! Stream-level helpers: write a [`Command`], then drive a [`ReplyParser`]
//! with lines from a [`Transport`] until the reply is complete.

use std::time::Duration;

use crate::error::Result;
use crate::network::Transport;
use super::{Command, Reply, ReplyParser};

/// Write a command to the transport
pub fn write_command<T: Transport + ?Sized>(transport: &mut T, command: &Command) -> Result<()> {
    tracing::debug!(
        "Sending command `{}` to lirc@{}",
        command,
        transport.display_name()
    );
    transport.write_all(&command.encode())
}

/// Read the reply to `command` from the transport
///
/// Blocks until a complete reply or a terminal error. Each line read may take
/// up to `timeout`; an expired deadline aborts the round-trip.
pub fn read_reply<T: Transport + ?Sized>(
    transport: &mut T,
    command: &Command,
    timeout: Duration,
) -> Result<Reply> {
    let mut parser = ReplyParser::new(command.to_line());

    loop {
        let line = match transport.read_line(timeout)? {
            Some(line) => line,
            None => return Err(parser.end_of_stream()),
        };
        tracing::trace!("Received `{}` from lirc@{}", line, transport.display_name());

        if let Some(reply) = parser.feed(&line)? {
            return Ok(reply);
        }
    }
}

/// Write a command and read its reply
pub fn round_trip<T: Transport + ?Sized>(
    transport: &mut T,
    command: &Command,
    timeout: Duration,
) -> Result<Reply> {
    write_command(transport, command)?;

    let outcome = read_reply(transport, command, timeout);
    match &outcome {
        Ok(reply) => tracing::debug!("`{}` succeeded with {} line(s)", command, reply.len()),
        Err(e) => tracing::debug!("`{}` failed: {}", command, e),
    }
    outcome
}

/// Parse a complete reply from already received lines
///
/// Running out of lines before the reply is complete is reported as
/// [`LircError::ConnectionClosed`](crate::LircError::ConnectionClosed), exactly as a closed stream would be.
pub fn parse_reply<I, S>(command_line: &str, lines: I) -> Result<Reply>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut parser = ReplyParser::new(command_line);
    for line in lines {
        if let Some(reply) = parser.feed(line.as_ref())? {
            return Ok(reply);
        }
    }
    Err(parser.end_of_stream())
}

