// libnfcemu/src/protocol/mod.rs

pub mod codec;
pub mod nci;
pub mod ndef;
pub mod parser;
pub mod snep;

pub use codec::{decode_base64, encode_base64};
pub use nci::{NtfParam, create_deactivate_ntf, create_ntf, write_ntf};
pub use ndef::{
    NdefRecordList, NdefRecordSpec, NdefRecordView, NdefRecords, RecordHeader, build_ndef_msg,
    report_ndef_msg,
};
pub use snep::{SnepRequest, encode_put};
