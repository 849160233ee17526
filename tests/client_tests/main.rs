//! Client Tests
//!
//! Typed operations of `LircClient` against a scripted transport.

#[path = "../common/mod.rs"]
mod common;

mod lifecycle_tests;
