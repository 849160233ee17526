//! Tests for LircClient lifecycle
//!
//! The transport must be released exactly once, whichever way the client
//! goes away.

use lirc_client::LircClient;

use crate::common::{failure, ScriptedTransport};

#[test]
fn test_close_releases_transport_once() {
    let transport = ScriptedTransport::new();
    let recorder = transport.recorder();

    let client = LircClient::new(transport);
    assert_eq!(client.display_name(), "scripted");
    client.close().unwrap();

    assert_eq!(recorder.closes(), 1);
}

#[test]
fn test_drop_releases_transport_once() {
    let transport = ScriptedTransport::new();
    let recorder = transport.recorder();

    {
        let _client = LircClient::new(transport);
    }

    assert_eq!(recorder.closes(), 1);
}

#[test]
fn test_close_after_failed_operation() {
    let transport = ScriptedTransport::new().lines(failure("VERSION", "no version"));
    let recorder = transport.recorder();

    let mut client = LircClient::new(transport);
    assert!(client.version().is_err());
    client.close().unwrap();

    assert_eq!(recorder.closes(), 1);
}

#[test]
fn test_boxed_transport() {
    let transport = ScriptedTransport::new();
    let recorder = transport.recorder();

    let boxed: Box<dyn lirc_client::Transport> = Box::new(transport);
    let client: LircClient = LircClient::new(boxed);
    client.close().unwrap();

    assert_eq!(recorder.closes(), 1);
}
