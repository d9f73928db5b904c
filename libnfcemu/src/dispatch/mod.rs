// libnfcemu/src/dispatch/mod.rs

pub mod console;
pub mod mock;
pub mod traits;

pub use console::{ConsoleWriter, LogConsole};
pub use mock::{BufferConsole, MockHost};
pub use traits::{Console, DeviceOp, Dispatch, PacketOp};
