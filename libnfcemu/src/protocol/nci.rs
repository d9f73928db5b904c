// libnfcemu/src/protocol/nci.rs

//! NCI RF management notifications.
//!
//! A control packet is `MT|PBF|GID (1) + OID (1) + payload length (1)`
//! followed by the payload.

use crate::constants::{
    NCI_GID_RF, NCI_HEADER_LEN, NCI_MAX_PAYLOAD_LEN, NCI_MT_NTF, NCI_OID_RF_DEACTIVATE,
};
use crate::device::{NfcDevice, active_endpoint};
use crate::protocol::parser::ensure_capacity;
use crate::types::{DeactivationReason, DeactivationType, DiscoverNtfType, RfSelect};
use crate::{Error, Result};

/// Write a notification header for `payload_len` bytes into `packet`.
pub fn create_ntf_header(packet: &mut [u8], gid: u8, oid: u8, payload_len: usize) -> Result<usize> {
    if payload_len > NCI_MAX_PAYLOAD_LEN {
        return Err(Error::FieldTooLong {
            field: "NCI payload",
            len: payload_len,
            max: NCI_MAX_PAYLOAD_LEN,
        });
    }
    ensure_capacity(packet, NCI_HEADER_LEN)?;
    packet[0] = NCI_MT_NTF | (gid & 0x0f);
    packet[1] = oid & 0x3f;
    packet[2] = payload_len as u8;
    Ok(NCI_HEADER_LEN)
}

/// Write a complete notification into `packet`; returns the packet length.
pub fn write_ntf(packet: &mut [u8], gid: u8, oid: u8, payload: &[u8]) -> Result<usize> {
    let total = NCI_HEADER_LEN + payload.len();
    ensure_capacity(packet, total)?;
    create_ntf_header(packet, gid, oid, payload.len())?;
    packet[NCI_HEADER_LEN..total].copy_from_slice(payload);
    Ok(total)
}

/// RF_DEACTIVATE_NTF: `61 06 02 <type> <reason>`.
pub fn create_deactivate_ntf(
    dtype: DeactivationType,
    reason: DeactivationReason,
    packet: &mut [u8],
) -> Result<usize> {
    write_ntf(
        packet,
        NCI_GID_RF,
        NCI_OID_RF_DEACTIVATE,
        &[dtype.as_u8(), reason.as_u8()],
    )
}

/// Parameters of one `nci` command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NtfParam {
    Discover {
        re: usize,
        ntype: DiscoverNtfType,
    },
    /// `re: None` selects the active remote endpoint.
    IntfActivated {
        re: Option<usize>,
        rf: RfSelect,
    },
    IntfDeactivate {
        dtype: DeactivationType,
        reason: DeactivationReason,
    },
}

impl Default for NtfParam {
    fn default() -> Self {
        NtfParam::IntfDeactivate {
            dtype: DeactivationType::Discovery,
            reason: DeactivationReason::RfLinkLoss,
        }
    }
}

impl NtfParam {
    /// Name of the command producing this notification.
    pub fn op_name(&self) -> &'static str {
        match self {
            NtfParam::Discover { .. } => "rf_discover_ntf",
            NtfParam::IntfActivated { .. } => "rf_intf_activated_ntf",
            NtfParam::IntfDeactivate { .. } => "rf_intf_deactivate_ntf",
        }
    }
}

/// RF_DISCOVER_NTF for endpoint `re`, built by the host.
pub fn create_rf_discover_ntf(
    device: &mut dyn NfcDevice,
    re: usize,
    ntype: DiscoverNtfType,
    packet: &mut [u8],
) -> Result<usize> {
    device
        .create_rf_discover_ntf(re, ntype, packet)
        .map_err(|e| Error::failed("rf_discover_ntf", e))
}

/// RF_INTF_ACTIVATED_NTF. Picks the endpoint and RF interface and builds
/// the notification; only once that succeeded is the endpoint's link state
/// reset and the interface activated. An already active interface is kept.
pub fn create_rf_intf_activated_ntf(
    device: &mut dyn NfcDevice,
    re: Option<usize>,
    rf: RfSelect,
    packet: &mut [u8],
) -> Result<usize> {
    let (re, endpoint) = match re {
        Some(i) => {
            let endpoint = device
                .remote_endpoints()
                .get(i)
                .ok_or(Error::UnknownIndex {
                    field: "remote endpoint",
                    value: i as i64,
                })?;
            (i, endpoint)
        }
        None => active_endpoint(device)?,
    };
    let (protocol, mode) = (endpoint.rf_protocol, endpoint.mode);

    let selected = match (device.active_rf_interface(), rf) {
        (Some(active), _) => active,
        (None, RfSelect::Auto) => device
            .find_rf_interface(protocol, mode)
            .ok_or(Error::NoRfInterface)?,
        (None, RfSelect::Index(i)) => {
            if i >= device.rf_interfaces().len() {
                return Err(Error::UnknownIndex {
                    field: "rf index",
                    value: i as i64,
                });
            }
            i
        }
    };
    log::debug!(
        "activating rf interface {} for remote endpoint {} ({}, {})",
        selected,
        re,
        protocol,
        mode
    );

    let n = device
        .create_rf_intf_activated_ntf(re, selected, packet)
        .map_err(|e| Error::failed("rf_intf_activated_ntf", e))?;
    device.clear_remote_endpoint(re);
    device.set_active_rf_interface(selected);
    Ok(n)
}

/// Build the notification described by `param` into `packet`.
pub fn create_ntf(device: &mut dyn NfcDevice, param: &NtfParam, packet: &mut [u8]) -> Result<usize> {
    match *param {
        NtfParam::Discover { re, ntype } => create_rf_discover_ntf(device, re, ntype, packet),
        NtfParam::IntfActivated { re, rf } => create_rf_intf_activated_ntf(device, re, rf, packet),
        NtfParam::IntfDeactivate { dtype, reason } => create_deactivate_ntf(dtype, reason, packet)
            .map_err(|e| Error::failed("rf_intf_deactivate_ntf", e)),
    }
}
