// libnfcemu/src/dispatch/mock.rs

use crate::constants::NCI_MAX_PACKET_LEN;
use crate::device::{MockDevice, NfcDevice};
use crate::dispatch::traits::{Console, DeviceOp, Dispatch, PacketOp};
use crate::Result;

/// Dispatcher for tests. Runs every operation synchronously against an
/// owned `MockDevice` and records the results.
#[derive(Debug, Default)]
pub struct MockHost {
    pub device: MockDevice,
    /// Byte counts returned by data-path operations.
    pub dta: Vec<usize>,
    /// Byte counts returned by receive operations.
    pub received: Vec<usize>,
    /// Notification packets produced by `send_ntf`.
    pub ntfs: Vec<Vec<u8>>,
}

impl MockHost {
    pub fn new(device: MockDevice) -> Self {
        Self {
            device,
            ..Default::default()
        }
    }

    pub fn pop_ntf(&mut self) -> Option<Vec<u8>> {
        self.ntfs.pop()
    }
}

impl Dispatch for MockHost {
    fn device(&self) -> &dyn NfcDevice {
        &self.device
    }

    fn device_mut(&mut self) -> &mut dyn NfcDevice {
        &mut self.device
    }

    fn send_dta(&mut self, op: &mut PacketOp<'_>) -> Result<usize> {
        let mut packet = [0u8; NCI_MAX_PACKET_LEN];
        let n = op(&mut self.device, &mut packet)?;
        self.dta.push(n);
        Ok(n)
    }

    fn recv_dta(&mut self, op: &mut DeviceOp<'_>) -> Result<usize> {
        let n = op(&mut self.device)?;
        self.received.push(n);
        Ok(n)
    }

    fn send_ntf(&mut self, op: &mut PacketOp<'_>) -> Result<usize> {
        let mut packet = [0u8; NCI_MAX_PACKET_LEN];
        let n = op(&mut self.device, &mut packet)?;
        self.ntfs.push(packet[..n].to_vec());
        Ok(n)
    }
}

/// Console collecting output and errors into strings.
#[derive(Debug, Default, Clone)]
pub struct BufferConsole {
    pub out: String,
    pub err: String,
}

impl BufferConsole {
    pub fn new() -> Self {
        Self::default()
    }

    /// Error lines logged so far.
    pub fn errors(&self) -> Vec<&str> {
        self.err.lines().collect()
    }
}

impl Console for BufferConsole {
    fn log_err(&mut self, msg: &str) {
        self.err.push_str(msg);
    }

    fn log_msg(&mut self, msg: &str) {
        self.out.push_str(msg);
    }
}
