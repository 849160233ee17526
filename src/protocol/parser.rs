//! Reply parser
//!
//! State machine turning the daemon's lines into one [`Reply`] or one error.
//!
//! A parser is bound to the command line it waits for and serves exactly
//! one round-trip. Transitions live in `transition`, a pure function of
//! the current state and the incoming line; [`ReplyParser`] only threads
//! the state and the collected data lines through it.

use std::mem;

use crate::error::{LircError, Result};
use super::Reply;

/// Position inside a reply block
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    /// Waiting for `BEGIN`; anything else is chatter
    Begin,

    /// Waiting for the echoed command
    Message,

    /// Waiting for `SUCCESS`, `ERROR` or `END`
    Status,

    /// After `SUCCESS`: `DATA` or `END`
    Data,

    /// Waiting for the data line count
    Count,

    /// Collecting `expected` data lines
    DataLines { expected: usize },

    /// Waiting for the closing `END`
    End,

    /// Reply complete
    Done,
}

/// Outcome of feeding one line
#[derive(Debug, PartialEq, Eq)]
enum Step {
    /// Move to a new state, dropping the line
    Goto(State),

    /// Keep the line as data, then move on
    Collect(State),

    /// The reply is complete
    Finish,
}

fn transition(state: State, line: &str, command: &str, collected: usize) -> Result<Step> {
    match state {
        State::Begin => {
            if line == "BEGIN" {
                Ok(Step::Goto(State::Message))
            } else {
                tracing::debug!("Skipping out-of-frame line `{}`", line);
                Ok(Step::Goto(State::Begin))
            }
        }
        State::Message => {
            if line.trim().eq_ignore_ascii_case(command) {
                Ok(Step::Goto(State::Status))
            } else {
                tracing::debug!("Skipping reply to `{}` while waiting for `{}`", line, command);
                Ok(Step::Goto(State::Begin))
            }
        }
        State::Status => match line {
            "SUCCESS" => Ok(Step::Goto(State::Data)),
            "END" => Ok(Step::Finish),
            "ERROR" => Err(LircError::server(command)),
            _ => Err(LircError::BadPacket(format!(
                "unknown status `{}` for `{}`",
                line, command
            ))),
        },
        State::Data => match line {
            "END" => Ok(Step::Finish),
            "DATA" => Ok(Step::Goto(State::Count)),
            _ => Err(LircError::BadPacket(format!(
                "`DATA` or `END` expected but `{}` received",
                line
            ))),
        },
        State::Count => match line.parse::<usize>() {
            Ok(0) => Ok(Step::Goto(State::End)),
            Ok(expected) => Ok(Step::Goto(State::DataLines { expected })),
            Err(_) => Err(LircError::BadPacket(format!(
                "integer expected but `{}` received",
                line
            ))),
        },
        State::DataLines { expected } => {
            if collected + 1 >= expected {
                Ok(Step::Collect(State::End))
            } else {
                Ok(Step::Collect(state))
            }
        }
        State::End => {
            if line == "END" {
                Ok(Step::Finish)
            } else {
                Err(LircError::BadPacket(format!(
                    "`END` expected but `{}` received",
                    line
                )))
            }
        }
        State::Done => Err(LircError::BadPacket(format!(
            "unexpected `{}` after the end of the reply",
            line
        ))),
    }
}

/// Parser for one reply
#[derive(Debug)]
pub struct ReplyParser {
    /// Command line the reply must echo (no terminator)
    command: String,

    state: State,

    /// Data lines collected so far
    lines: Vec<String>,
}

impl ReplyParser {
    /// Create a parser waiting for the reply to `command`
    pub fn new(command: impl Into<String>) -> Self {
        Self {
            command: command.into(),
            state: State::Begin,
            lines: Vec::new(),
        }
    }

    /// Feed one line (without terminator).
    ///
    /// Returns `Ok(Some(reply))` once the reply is complete, `Ok(None)` while
    /// more lines are needed. Errors are terminal; collected data is dropped.
    pub fn feed(&mut self, line: &str) -> Result<Option<Reply>> {
        let step = match transition(self.state, line, &self.command, self.lines.len()) {
            Ok(step) => step,
            Err(e) => {
                self.state = State::Done;
                self.lines.clear();
                return Err(e);
            }
        };

        match step {
            Step::Goto(next) => {
                self.state = next;
                Ok(None)
            }
            Step::Collect(next) => {
                self.lines.push(line.to_string());
                self.state = next;
                Ok(None)
            }
            Step::Finish => {
                self.state = State::Done;
                Ok(Some(Reply::new(mem::take(&mut self.lines))))
            }
        }
    }

    /// The stream ended before the reply was complete
    pub fn end_of_stream(&mut self) -> LircError {
        tracing::debug!(
            "Stream ended in state {:?} waiting for `{}`, {} data line(s) dropped",
            self.state,
            self.command,
            self.lines.len()
        );
        self.state = State::Done;
        self.lines.clear();
        LircError::ConnectionClosed
    }

    /// Whether a reply or an error has been produced
    pub fn is_done(&self) -> bool {
        self.state == State::Done
    }

    /// The command line this parser waits for
    pub fn command(&self) -> &str {
        &self.command
    }
}
