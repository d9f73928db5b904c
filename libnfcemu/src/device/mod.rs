// libnfcemu/src/device/mod.rs

//! Host-owned emulator state as seen by the command core.
//!
//! The host keeps the remote-endpoint and RF-interface tables and the
//! link-layer machinery; commands only read the fields exposed here and
//! request the few mutations `NfcDevice` offers.

pub mod mock;

pub use mock::{MockDevice, MockTag};

use crate::types::{DiscoverNtfType, RfInterfaceKind, RfProtocol, RfTechMode};
use crate::{Error, Result};

/// Stored NDEF content of an emulated tag.
pub trait Tag: std::fmt::Debug {
    /// Replace the tag's NDEF content. An empty slice clears it.
    fn set_data(&mut self, data: &[u8]) -> Result<()>;

    /// Reset the tag to its blank, freshly formatted state.
    fn format(&mut self) -> Result<()>;
}

/// An emulated peer device or tag.
#[derive(Debug)]
pub struct RemoteEndpoint {
    pub rf_protocol: RfProtocol,
    pub mode: RfTechMode,
    /// DSAP of the last LLCP exchange.
    pub last_dsap: u8,
    /// SSAP of the last LLCP exchange.
    pub last_ssap: u8,
    pub tag: Option<Box<dyn Tag>>,
}

impl RemoteEndpoint {
    pub fn new(rf_protocol: RfProtocol, mode: RfTechMode) -> Self {
        Self {
            rf_protocol,
            mode,
            last_dsap: 0,
            last_ssap: 0,
            tag: None,
        }
    }

    /// Attach a tag handle, making this endpoint a tag.
    pub fn with_tag(mut self, tag: Box<dyn Tag>) -> Self {
        self.tag = Some(tag);
        self
    }

    /// Forget the SAPs negotiated over the previous link.
    pub fn clear(&mut self) {
        self.last_dsap = 0;
        self.last_ssap = 0;
    }
}

/// Controller-side RF interface bound to an RF protocol and mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RfInterface {
    pub kind: RfInterfaceKind,
    pub protocol: RfProtocol,
    pub mode: RfTechMode,
}

impl RfInterface {
    pub fn new(kind: RfInterfaceKind, protocol: RfProtocol, mode: RfTechMode) -> Self {
        Self {
            kind,
            protocol,
            mode,
        }
    }
}

/// Device context owned by the host.
pub trait NfcDevice {
    fn remote_endpoints(&self) -> &[RemoteEndpoint];

    fn remote_endpoints_mut(&mut self) -> &mut [RemoteEndpoint];

    /// Index of the remote endpoint currently linked, if any.
    fn active_remote_endpoint(&self) -> Option<usize>;

    fn rf_interfaces(&self) -> &[RfInterface];

    /// Index of the active RF interface, if any.
    fn active_rf_interface(&self) -> Option<usize>;

    fn set_active_rf_interface(&mut self, rf: usize);

    /// First RF interface bound to `protocol` and `mode`.
    fn find_rf_interface(&self, protocol: RfProtocol, mode: RfTechMode) -> Option<usize> {
        self.rf_interfaces()
            .iter()
            .position(|rf| rf.protocol == protocol && rf.mode == mode)
    }

    /// Reset the link-layer state negotiated with endpoint `re`. Hosts with
    /// their own LLCP state should override this and reset it as well.
    fn clear_remote_endpoint(&mut self, re: usize) {
        if let Some(endpoint) = self.remote_endpoints_mut().get_mut(re) {
            endpoint.clear();
        }
    }

    /// Send a SNEP PUT to endpoint `re` over LLCP. `encode` fills the
    /// information field of one link-layer frame and returns its length.
    fn send_snep_put(
        &mut self,
        re: usize,
        dsap: u8,
        ssap: u8,
        encode: &mut dyn FnMut(&mut [u8]) -> Result<usize>,
    ) -> Result<usize>;

    /// Take the next SNEP PUT received from endpoint `re` and hand its NDEF
    /// message to `process`.
    fn recv_snep_put(
        &mut self,
        re: usize,
        dsap: u8,
        ssap: u8,
        process: &mut dyn FnMut(&[u8]) -> Result<()>,
    ) -> Result<usize>;

    /// Send an LLCP CONNECT to endpoint `re`.
    fn send_llcp_connect(&mut self, re: usize, dsap: u8, ssap: u8) -> Result<usize>;

    /// Write RF_DISCOVER_NTF for endpoint `re` into `packet`.
    fn create_rf_discover_ntf(
        &mut self,
        re: usize,
        ntype: DiscoverNtfType,
        packet: &mut [u8],
    ) -> Result<usize>;

    /// Write RF_INTF_ACTIVATED_NTF for endpoint `re` activated over RF
    /// interface `rf` into `packet`. Must not change device state.
    fn create_rf_intf_activated_ntf(
        &mut self,
        re: usize,
        rf: usize,
        packet: &mut [u8],
    ) -> Result<usize>;
}

/// The active remote endpoint's index and record.
pub fn active_endpoint(device: &dyn NfcDevice) -> Result<(usize, &RemoteEndpoint)> {
    let re = device
        .active_remote_endpoint()
        .ok_or(Error::NoActiveRemoteEndpoint)?;
    let endpoint = device
        .remote_endpoints()
        .get(re)
        .ok_or(Error::NoActiveRemoteEndpoint)?;
    Ok((re, endpoint))
}
