//! Command definitions
//!
//! Builds the exact lines sent to the daemon. No escaping is done: callers
//! pass tokens free of whitespace.

use std::fmt;

/// Command verbs understood by lircd
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Verb {
    SendOnce,
    SendStart,
    SendStop,
    List,
    SetTransmitters,
    Version,
    SetInputLog,
    DrvOption,
    Simulate,
}

impl Verb {
    /// Wire spelling of the verb
    pub fn as_str(&self) -> &'static str {
        match self {
            Verb::SendOnce => "SEND_ONCE",
            Verb::SendStart => "SEND_START",
            Verb::SendStop => "SEND_STOP",
            Verb::List => "LIST",
            Verb::SetTransmitters => "SET_TRANSMITTERS",
            Verb::Version => "VERSION",
            Verb::SetInputLog => "SET_INPUTLOG",
            Verb::DrvOption => "DRV_OPTION",
            Verb::Simulate => "SIMULATE",
        }
    }
}

impl fmt::Display for Verb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A command ready to be written
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Command {
    verb: Verb,
    args: Vec<String>,
}

impl Command {
    /// Token SET_INPUTLOG takes to switch input logging off
    pub const INPUT_LOG_OFF: &'static str = "null";

    /// Create a command from a verb and its positional arguments
    pub fn new<I, S>(verb: Verb, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            verb,
            args: args.into_iter().map(Into::into).collect(),
        }
    }

    /// `SEND_ONCE remote command repeats`, where `repeats` is the number of
    /// extra transmissions (count - 1)
    pub fn send_once(remote: &str, command: &str, repeats: u32) -> Self {
        Self::new(
            Verb::SendOnce,
            [remote.to_string(), command.to_string(), repeats.to_string()],
        )
    }

    pub fn send_start(remote: &str, command: &str) -> Self {
        Self::new(Verb::SendStart, [remote, command])
    }

    pub fn send_stop(remote: &str, command: &str) -> Self {
        Self::new(Verb::SendStop, [remote, command])
    }

    /// `LIST` for the remotes, `LIST remote` for the commands of one remote
    pub fn list(remote: Option<&str>) -> Self {
        Self::new(Verb::List, remote)
    }

    pub fn set_transmitters(mask: u64) -> Self {
        Self::new(Verb::SetTransmitters, [mask.to_string()])
    }

    pub fn version() -> Self {
        Self::new(Verb::Version, std::iter::empty::<String>())
    }

    /// `SET_INPUTLOG path`, or `SET_INPUTLOG null` to stop logging
    pub fn set_input_log(path: Option<&str>) -> Self {
        Self::new(Verb::SetInputLog, [path.unwrap_or(Self::INPUT_LOG_OFF)])
    }

    pub fn drv_option(key: &str, value: &str) -> Self {
        Self::new(Verb::DrvOption, [key, value])
    }

    /// `SIMULATE` with lircd's event layout: 16 hex digit code, 2 hex digit
    /// repeat counter, button name, remote name
    pub fn simulate(code: u64, repeat: u8, button: &str, remote: &str) -> Self {
        Self::new(
            Verb::Simulate,
            [
                format!("{:016x}", code),
                format!("{:02x}", repeat),
                button.to_string(),
                remote.to_string(),
            ],
        )
    }

    pub fn verb(&self) -> Verb {
        self.verb
    }

    pub fn args(&self) -> &[String] {
        &self.args
    }

    /// The command line without its terminator. This is also what the
    /// daemon echoes back inside the reply.
    pub fn to_line(&self) -> String {
        let mut line = String::from(self.verb.as_str());
        for arg in &self.args {
            line.push(' ');
            line.push_str(arg);
        }
        line
    }

    /// Bytes to put on the wire, newline included
    pub fn encode(&self) -> Vec<u8> {
        let mut bytes = self.to_line().into_bytes();
        bytes.push(b'\n');
        bytes
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_line())
    }
}
