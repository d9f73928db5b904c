//! Test support helpers intended for use by unit and integration tests.
//!
//! These helpers centralize the mock device layouts that tests across the
//! crate and the tests/ directory share.
#![allow(dead_code)]

use crate::device::{MockDevice, MockTag, RemoteEndpoint, RfInterface};
use crate::dispatch::MockHost;
use crate::types::{RfInterfaceKind, RfProtocol, RfTechMode};

/// Index of the peer-to-peer endpoint in `emulator_device`.
pub const P2P_RE: usize = 0;
/// Index of the tag endpoint in `emulator_device`.
pub const TAG_RE: usize = 1;

/// Default LLCP SAPs left on the peer-to-peer endpoint.
pub const LAST_DSAP: u8 = 4;
pub const LAST_SSAP: u8 = 32;

/// RF interface table: a frame interface for T2T on NFC-A, then NFC-DEP
/// on NFC-A and on NFC-F.
#[doc(hidden)]
pub fn rf_interfaces() -> Vec<RfInterface> {
    vec![
        RfInterface::new(
            RfInterfaceKind::Frame,
            RfProtocol::T2t,
            RfTechMode::NfcAPassivePoll,
        ),
        RfInterface::new(
            RfInterfaceKind::NfcDep,
            RfProtocol::NfcDep,
            RfTechMode::NfcAPassivePoll,
        ),
        RfInterface::new(
            RfInterfaceKind::NfcDep,
            RfProtocol::NfcDep,
            RfTechMode::NfcFPassivePoll,
        ),
    ]
}

/// A device with an NFC-DEP peer on NFC-F (index `P2P_RE`, active, with
/// SAPs `LAST_DSAP`/`LAST_SSAP`) and a T2T tag backed by `tag` (index
/// `TAG_RE`). No RF interface is active.
#[doc(hidden)]
pub fn emulator_device(tag: &MockTag) -> MockDevice {
    let mut dev = MockDevice::new();
    let mut peer = RemoteEndpoint::new(RfProtocol::NfcDep, RfTechMode::NfcFPassivePoll);
    peer.last_dsap = LAST_DSAP;
    peer.last_ssap = LAST_SSAP;
    dev.res.push(peer);
    dev.res.push(
        RemoteEndpoint::new(RfProtocol::T2t, RfTechMode::NfcAPassivePoll)
            .with_tag(Box::new(tag.clone())),
    );
    dev.active_re = Some(P2P_RE);
    dev.rf = rf_interfaces();
    dev
}

/// `emulator_device` wrapped in a `MockHost`.
#[doc(hidden)]
pub fn emulator_host(tag: &MockTag) -> MockHost {
    MockHost::new(emulator_device(tag))
}

/// Frame a complete SNEP PUT carrying `ndef` as it would arrive from a
/// peer.
#[doc(hidden)]
pub fn snep_put_frame(ndef: &[u8]) -> Vec<u8> {
    let mut frame = vec![0x10, 0x02];
    frame.extend_from_slice(&(ndef.len() as u32).to_be_bytes());
    frame.extend_from_slice(ndef);
    frame
}
