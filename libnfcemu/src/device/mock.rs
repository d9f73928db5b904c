// libnfcemu/src/device/mock.rs

use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

use crate::constants::{NCI_GID_RF, NCI_OID_RF_DISCOVER, NCI_OID_RF_INTF_ACTIVATED};
use crate::device::{NfcDevice, RemoteEndpoint, RfInterface, Tag};
use crate::protocol::nci::write_ntf;
use crate::protocol::snep::SnepRequest;
use crate::types::DiscoverNtfType;
use crate::{Error, Result};

/// Information field size of one mock LLCP I-PDU.
pub const MOCK_LINK_MIU: usize = 1024;

/// In-memory device context for tests. Records every link-layer request
/// and serves queued SNEP requests on receive.
#[derive(Debug, Default)]
pub struct MockDevice {
    pub res: Vec<RemoteEndpoint>,
    pub active_re: Option<usize>,
    pub rf: Vec<RfInterface>,
    pub active_rf: Option<usize>,
    /// Complete SNEP requests waiting to be received, oldest first.
    pub incoming: VecDeque<Vec<u8>>,
    /// Sent SNEP requests: (re, dsap, ssap, frame)
    pub sent: Vec<(usize, u8, u8, Vec<u8>)>,
    /// LLCP connects: (re, dsap, ssap)
    pub connects: Vec<(usize, u8, u8)>,
    /// Endpoints cleared, in order.
    pub cleared: Vec<usize>,
    /// Testing hook: fail all link-layer operations.
    pub link_down: bool,
    /// Testing hook: fail building RF_INTF_ACTIVATED_NTF.
    pub activation_fails: bool,
}

impl MockDevice {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_incoming(&mut self, frame: Vec<u8>) {
        self.incoming.push_back(frame);
    }

    pub fn pop_sent(&mut self) -> Option<(usize, u8, u8, Vec<u8>)> {
        self.sent.pop()
    }

    fn link(&self) -> Result<()> {
        if self.link_down {
            return Err(Error::Host("link down".to_string()));
        }
        Ok(())
    }

    fn endpoint_mut(&mut self, re: usize) -> Result<&mut RemoteEndpoint> {
        self.res.get_mut(re).ok_or(Error::UnknownIndex {
            field: "remote endpoint",
            value: re as i64,
        })
    }
}

impl NfcDevice for MockDevice {
    fn remote_endpoints(&self) -> &[RemoteEndpoint] {
        &self.res
    }

    fn remote_endpoints_mut(&mut self) -> &mut [RemoteEndpoint] {
        &mut self.res
    }

    fn active_remote_endpoint(&self) -> Option<usize> {
        self.active_re
    }

    fn rf_interfaces(&self) -> &[RfInterface] {
        &self.rf
    }

    fn active_rf_interface(&self) -> Option<usize> {
        self.active_rf
    }

    fn set_active_rf_interface(&mut self, rf: usize) {
        self.active_rf = Some(rf);
    }

    fn clear_remote_endpoint(&mut self, re: usize) {
        self.cleared.push(re);
        if let Some(endpoint) = self.res.get_mut(re) {
            endpoint.clear();
        }
    }

    fn send_snep_put(
        &mut self,
        re: usize,
        dsap: u8,
        ssap: u8,
        encode: &mut dyn FnMut(&mut [u8]) -> Result<usize>,
    ) -> Result<usize> {
        self.link()?;
        let mut frame = vec![0u8; MOCK_LINK_MIU];
        let n = encode(&mut frame)?;
        frame.truncate(n);

        let endpoint = self.endpoint_mut(re)?;
        endpoint.last_dsap = dsap;
        endpoint.last_ssap = ssap;
        self.sent.push((re, dsap, ssap, frame));
        Ok(n)
    }

    fn recv_snep_put(
        &mut self,
        re: usize,
        dsap: u8,
        ssap: u8,
        process: &mut dyn FnMut(&[u8]) -> Result<()>,
    ) -> Result<usize> {
        self.link()?;
        let frame = self
            .incoming
            .pop_front()
            .ok_or_else(|| Error::Host("no SNEP request pending".to_string()))?;
        let req = SnepRequest::parse(&frame)?;
        if !req.is_put() {
            return Err(Error::FrameFormat(format!(
                "unexpected SNEP request {:#04x}",
                req.request
            )));
        }
        process(req.info)?;

        let endpoint = self.endpoint_mut(re)?;
        endpoint.last_dsap = dsap;
        endpoint.last_ssap = ssap;
        Ok(frame.len())
    }

    fn send_llcp_connect(&mut self, re: usize, dsap: u8, ssap: u8) -> Result<usize> {
        self.link()?;
        let endpoint = self.endpoint_mut(re)?;
        endpoint.last_dsap = dsap;
        endpoint.last_ssap = ssap;
        self.connects.push((re, dsap, ssap));
        // CONNECT PDU header without parameters
        Ok(2)
    }

    fn create_rf_discover_ntf(
        &mut self,
        re: usize,
        ntype: DiscoverNtfType,
        packet: &mut [u8],
    ) -> Result<usize> {
        let endpoint = self.endpoint_mut(re)?;
        // discovery id, protocol, mode, no tech-specific parameters, type
        let payload = [
            (re + 1) as u8,
            endpoint.rf_protocol.as_u8(),
            endpoint.mode.as_u8(),
            0,
            ntype.as_u8(),
        ];
        write_ntf(packet, NCI_GID_RF, NCI_OID_RF_DISCOVER, &payload)
    }

    fn create_rf_intf_activated_ntf(
        &mut self,
        re: usize,
        rf: usize,
        packet: &mut [u8],
    ) -> Result<usize> {
        if self.activation_fails {
            return Err(Error::Host("activation rejected".to_string()));
        }
        let rf = self.rf.get(rf).copied().ok_or(Error::NoRfInterface)?;
        let endpoint = self.endpoint_mut(re)?;
        let payload = [
            (re + 1) as u8,
            rf.kind.as_u8(),
            endpoint.rf_protocol.as_u8(),
            endpoint.mode.as_u8(),
            0xff, // max data packet payload
            0x01, // initial credits
            0,    // no tech-specific parameters
            endpoint.mode.as_u8(),
            0, // tx bit rate
            0, // rx bit rate
            0, // no activation parameters
        ];
        write_ntf(packet, NCI_GID_RF, NCI_OID_RF_INTF_ACTIVATED, &payload)
    }
}

#[derive(Debug, Default)]
struct MockTagState {
    data: Vec<u8>,
    writes: usize,
    formats: usize,
    fail: bool,
}

/// Tag whose state is shared between clones, so a test can keep a handle
/// after boxing one into a `RemoteEndpoint`.
#[derive(Debug, Clone, Default)]
pub struct MockTag {
    state: Rc<RefCell<MockTagState>>,
}

impl MockTag {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current NDEF content.
    pub fn data(&self) -> Vec<u8> {
        self.state.borrow().data.clone()
    }

    pub fn writes(&self) -> usize {
        self.state.borrow().writes
    }

    pub fn formats(&self) -> usize {
        self.state.borrow().formats
    }

    /// Make subsequent operations fail.
    pub fn set_failing(&self, fail: bool) {
        self.state.borrow_mut().fail = fail;
    }
}

impl Tag for MockTag {
    fn set_data(&mut self, data: &[u8]) -> Result<()> {
        let mut state = self.state.borrow_mut();
        if state.fail {
            return Err(Error::Host("tag write failed".to_string()));
        }
        state.data = data.to_vec();
        state.writes += 1;
        Ok(())
    }

    fn format(&mut self) -> Result<()> {
        let mut state = self.state.borrow_mut();
        if state.fail {
            return Err(Error::Host("tag format failed".to_string()));
        }
        state.data.clear();
        state.formats += 1;
        Ok(())
    }
}
