// Shared helpers for the integration test crates. Each per-topic test file
// pulls this in with `#[path = "../common/mod.rs"] mod common;`.
#![allow(dead_code)]

pub mod fixtures;

use libnfcemu::device::MockTag;
use libnfcemu::dispatch::{BufferConsole, MockHost};
use libnfcemu::test_support;

pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Host, console and a handle on the tag endpoint's storage.
pub fn setup() -> (MockHost, BufferConsole, MockTag) {
    init_logging();
    let tag = MockTag::new();
    let host = test_support::emulator_host(&tag);
    (host, BufferConsole::new(), tag)
}
