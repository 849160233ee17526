//! Tests for Command encoding
//!
//! These tests verify:
//! - Exact wire lines for every verb
//! - Newline termination
//! - The repeat count offset of SEND_ONCE

use lirc_client::protocol::{Command, Verb};

#[test]
fn test_send_once_line() {
    let cmd = Command::send_once("tv", "KEY_POWER", 2);
    assert_eq!(cmd.verb(), Verb::SendOnce);
    assert_eq!(cmd.to_line(), "SEND_ONCE tv KEY_POWER 2");
}

#[test]
fn test_encode_appends_newline() {
    let cmd = Command::send_start("tv", "KEY_VOLUMEUP");
    assert_eq!(cmd.encode(), b"SEND_START tv KEY_VOLUMEUP\n".to_vec());
}

#[test]
fn test_send_stop_line() {
    assert_eq!(
        Command::send_stop("tv", "KEY_VOLUMEUP").to_line(),
        "SEND_STOP tv KEY_VOLUMEUP"
    );
}

#[test]
fn test_list_with_and_without_remote() {
    assert_eq!(Command::list(None).to_line(), "LIST");
    assert!(Command::list(None).args().is_empty());
    assert_eq!(Command::list(Some("living_room")).to_line(), "LIST living_room");
}

#[test]
fn test_set_transmitters_is_decimal() {
    assert_eq!(Command::set_transmitters(5).to_line(), "SET_TRANSMITTERS 5");
    assert_eq!(
        Command::set_transmitters(1 << 63).to_line(),
        "SET_TRANSMITTERS 9223372036854775808"
    );
}

#[test]
fn test_version_has_no_arguments() {
    let cmd = Command::version();
    assert_eq!(cmd.to_line(), "VERSION");
    assert_eq!(cmd.encode(), b"VERSION\n".to_vec());
}

#[test]
fn test_set_input_log() {
    assert_eq!(
        Command::set_input_log(Some("/var/log/lirc.in")).to_line(),
        "SET_INPUTLOG /var/log/lirc.in"
    );
    assert_eq!(Command::set_input_log(None).to_line(), "SET_INPUTLOG null");
}

#[test]
fn test_drv_option() {
    assert_eq!(
        Command::drv_option("device", "/dev/lirc1").to_line(),
        "DRV_OPTION device /dev/lirc1"
    );
}

#[test]
fn test_simulate_pads_hex_fields() {
    let cmd = Command::simulate(0xf40bf0, 0, "KEY_UP", "tv");
    assert_eq!(cmd.to_line(), "SIMULATE 0000000000f40bf0 00 KEY_UP tv");

    let cmd = Command::simulate(u64::MAX, 0x1a, "KEY_DOWN", "tv");
    assert_eq!(cmd.to_line(), "SIMULATE ffffffffffffffff 1a KEY_DOWN tv");
}

#[test]
fn test_simulate_repeat_is_always_two_digits() {
    for repeat in [0u8, 0x0f, 0x10, u8::MAX] {
        let cmd = Command::simulate(0xf40bf0, repeat, "KEY_UP", "tv");
        assert_eq!(cmd.args()[1].len(), 2, "repeat {:#x}", repeat);
    }
    assert_eq!(Command::simulate(1, u8::MAX, "KEY_UP", "tv").args()[1], "ff");
}

#[test]
fn test_generic_constructor_and_display() {
    let cmd = Command::new(Verb::DrvOption, ["a", "b"]);
    assert_eq!(cmd, Command::drv_option("a", "b"));
    assert_eq!(cmd.to_string(), "DRV_OPTION a b");
    assert_eq!(Verb::SetInputLog.to_string(), "SET_INPUTLOG");
}
