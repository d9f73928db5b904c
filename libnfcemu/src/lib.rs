// libnfcemu/src/lib.rs

//! libnfcemu
//!
//! Command core of an NFC device emulator: turns textual test directives
//! into NDEF, SNEP, LLCP and NCI messages and reports received NDEF
//! messages as text.

pub mod cmdline;
pub mod constants;
pub mod device;
pub mod dispatch;
pub mod error;
pub mod prelude;
pub mod protocol;
pub mod test_support;
pub mod types;

// Re-export common types at crate root so `crate::Error`, `crate::Result`
// and the protocol enumerations in `types` are available for consumers
// and for convenient `prelude` re-exports.
pub use crate::error::*;
pub use crate::types::*;

pub use prelude::*;
