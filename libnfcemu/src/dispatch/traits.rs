// libnfcemu/src/dispatch/traits.rs

use crate::device::NfcDevice;
use crate::Result;

/// Operation run by `send_dta`/`send_ntf` against the device context and a
/// packet buffer owned by the host. Returns the number of bytes produced.
pub type PacketOp<'a> = dyn FnMut(&mut dyn NfcDevice, &mut [u8]) -> Result<usize> + 'a;

/// Operation run by `recv_dta` against the device context.
pub type DeviceOp<'a> = dyn FnMut(&mut dyn NfcDevice) -> Result<usize> + 'a;

/// Host side of the command core. Each command runs at most one
/// operation through one of these entry points; the operation's result is
/// passed through unchanged.
pub trait Dispatch {
    /// Device context for read-only lookups while parsing.
    fn device(&self) -> &dyn NfcDevice;

    /// Device context for direct mutations (tag content).
    fn device_mut(&mut self) -> &mut dyn NfcDevice;

    /// Run `op` on the data path, e.g. to hand an LLCP PDU to the link.
    fn send_dta(&mut self, op: &mut PacketOp<'_>) -> Result<usize>;

    /// Run `op` to consume pending incoming data.
    fn recv_dta(&mut self, op: &mut DeviceOp<'_>) -> Result<usize>;

    /// Run `op` to build an NCI notification and deliver it to the host
    /// stack.
    fn send_ntf(&mut self, op: &mut PacketOp<'_>) -> Result<usize>;
}

/// Text sink for command diagnostics and reports.
pub trait Console {
    /// Report a failure. Messages are `KO: `-prefixed and end in `\r\n`.
    fn log_err(&mut self, msg: &str);

    /// Emit regular output.
    fn log_msg(&mut self, msg: &str);
}
