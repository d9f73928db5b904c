// libnfcemu/src/prelude.rs

pub use crate::cmdline::{execute, nfc_cmd_llcp, nfc_cmd_nci, nfc_cmd_snep, nfc_cmd_tag};
pub use crate::device::{NfcDevice, RemoteEndpoint, RfInterface, Tag};
pub use crate::dispatch::{Console, ConsoleWriter, Dispatch, LogConsole};
pub use crate::protocol::{NdefRecordSpec, NtfParam, build_ndef_msg, encode_put, report_ndef_msg};
pub use crate::{
    DeactivationReason, DeactivationType, DiscoverNtfType, Error, Result, RfInterfaceKind,
    RfProtocol, RfSelect, RfTechMode, Sap, Tnf,
};
