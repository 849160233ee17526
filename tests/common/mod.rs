//! Shared test helpers
//!
//! - `ScriptedTransport`: in-memory transport replaying canned lines
//! - `lircd`: a stateless imitation of the daemon's replies
//! - `spawn_tcp_daemon` / `spawn_unix_daemon`: serve a handler on a socket

#![allow(dead_code)]

use std::collections::VecDeque;
use std::io::{BufRead, BufReader, Write};
use std::net::{SocketAddr, TcpListener};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::thread::{self, JoinHandle};
use std::time::Duration;

use lirc_client::{LircError, Result, Transport};

// =============================================================================
// Reply Builders
// =============================================================================

/// Full reply block as the daemon frames it
pub fn framed(command: &str, status: &str, data: &[&str]) -> Vec<String> {
    let mut lines = vec!["BEGIN".to_string(), command.to_string(), status.to_string()];
    if !data.is_empty() {
        lines.push("DATA".to_string());
        lines.push(data.len().to_string());
        lines.extend(data.iter().map(|d| d.to_string()));
    }
    lines.push("END".to_string());
    lines
}

pub fn success(command: &str, data: &[&str]) -> Vec<String> {
    framed(command, "SUCCESS", data)
}

pub fn failure(command: &str, message: &str) -> Vec<String> {
    framed(command, "ERROR", &[message])
}

// =============================================================================
// Scripted Transport
// =============================================================================

/// One thing the scripted transport does when asked for a line
#[derive(Debug, Clone)]
pub enum Event {
    Line(String),
    Timeout,
    Eof,
}

/// Observes a `ScriptedTransport` after it has been moved into a client
#[derive(Debug, Clone, Default)]
pub struct Recorder {
    written: Arc<Mutex<Vec<u8>>>,
    closes: Arc<AtomicUsize>,
}

impl Recorder {
    /// Everything written so far, as text
    pub fn written(&self) -> String {
        String::from_utf8(self.written.lock().unwrap().clone()).unwrap()
    }

    /// Number of `close` calls
    pub fn closes(&self) -> usize {
        self.closes.load(Ordering::SeqCst)
    }
}

/// Transport replaying a fixed script of lines
#[derive(Debug, Default)]
pub struct ScriptedTransport {
    events: VecDeque<Event>,
    recorder: Recorder,
}

impl ScriptedTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue raw lines
    pub fn lines<I, S>(mut self, lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.events
            .extend(lines.into_iter().map(|l| Event::Line(l.into())));
        self
    }

    /// Queue a read timeout
    pub fn timeout(mut self) -> Self {
        self.events.push_back(Event::Timeout);
        self
    }

    /// Queue an explicit end of stream
    pub fn eof(mut self) -> Self {
        self.events.push_back(Event::Eof);
        self
    }

    pub fn recorder(&self) -> Recorder {
        self.recorder.clone()
    }
}

impl Transport for ScriptedTransport {
    fn write_all(&mut self, data: &[u8]) -> Result<()> {
        self.recorder.written.lock().unwrap().extend_from_slice(data);
        Ok(())
    }

    fn read_line(&mut self, timeout: Duration) -> Result<Option<String>> {
        match self.events.pop_front() {
            Some(Event::Line(line)) => Ok(Some(line)),
            Some(Event::Timeout) => Err(LircError::Timeout(timeout)),
            Some(Event::Eof) | None => Ok(None),
        }
    }

    fn close(&mut self) -> Result<()> {
        self.recorder.closes.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }

    fn display_name(&self) -> &str {
        "scripted"
    }
}

// =============================================================================
// Fake Daemon
// =============================================================================

/// What the fake daemon does with a received command
#[derive(Debug, Clone)]
pub enum Action {
    /// Write these lines
    Reply(Vec<String>),

    /// Write nothing and keep the connection open
    Silent,

    /// Write these lines, then drop the connection
    Hangup(Vec<String>),
}

/// Answer like lircd with two remotes, `tv` and `amp`
pub fn lircd(command: &str) -> Action {
    let words: Vec<&str> = command.split_whitespace().collect();
    let known = |remote: &str| remote == "tv" || remote == "amp";

    let lines = match words.as_slice() {
        ["VERSION"] => success(command, &["0.10.2"]),
        ["LIST"] => success(command, &["tv", "amp"]),
        ["LIST", "tv"] => success(
            command,
            &["0000000000000001 KEY_POWER", "0000000000000002 KEY_VOLUMEUP"],
        ),
        ["LIST", "amp"] => success(command, &["amp KEY_MUTE"]),
        ["SEND_ONCE", remote, _, _] | ["SEND_START", remote, _] | ["SEND_STOP", remote, _]
            if known(*remote) =>
        {
            success(command, &[])
        }
        ["SET_TRANSMITTERS", _] | ["SET_INPUTLOG", _] | ["DRV_OPTION", _, _] => {
            success(command, &[])
        }
        ["SIMULATE", _, _, _, remote] if known(*remote) => success(command, &[]),
        [_, remote, ..] => failure(command, &format!("unknown remote: \"{}\"", remote)),
        _ => failure(command, &format!("unknown directive: \"{}\"", command)),
    };
    Action::Reply(lines)
}

/// Serve one connection until the client hangs up; returns received lines
pub fn serve<R, W, F>(reader: R, mut writer: W, mut handler: F) -> Vec<String>
where
    R: BufRead,
    W: Write,
    F: FnMut(&str) -> Action,
{
    let mut received = Vec::new();
    for line in reader.lines() {
        let line = match line {
            Ok(line) => line,
            Err(_) => break,
        };
        received.push(line.clone());

        let (lines, hangup) = match handler(&line) {
            Action::Reply(lines) => (lines, false),
            Action::Silent => (Vec::new(), false),
            Action::Hangup(lines) => (lines, true),
        };
        let mut text = String::new();
        for l in lines {
            text.push_str(&l);
            text.push('\n');
        }
        if writer.write_all(text.as_bytes()).and_then(|_| writer.flush()).is_err() || hangup {
            break;
        }
    }
    received
}

/// Accept one TCP connection on an ephemeral port and serve it
pub fn spawn_tcp_daemon<F>(handler: F) -> (SocketAddr, JoinHandle<Vec<String>>)
where
    F: FnMut(&str) -> Action + Send + 'static,
{
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    let handle = thread::spawn(move || {
        let (stream, _) = listener.accept().unwrap();
        let reader = BufReader::new(stream.try_clone().unwrap());
        serve(reader, stream, handler)
    });
    (addr, handle)
}

/// Accept one connection on a Unix socket at `path` and serve it
#[cfg(unix)]
pub fn spawn_unix_daemon<F>(path: &std::path::Path, handler: F) -> JoinHandle<Vec<String>>
where
    F: FnMut(&str) -> Action + Send + 'static,
{
    let listener = std::os::unix::net::UnixListener::bind(path).unwrap();
    thread::spawn(move || {
        let (stream, _) = listener.accept().unwrap();
        let reader = BufReader::new(stream.try_clone().unwrap());
        serve(reader, stream, handler)
    })
}
