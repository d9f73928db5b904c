// libnfcemu/src/constants.rs
//! Common protocol constants used across the crate

/// NDEF header flag: Message Begin
pub const NDEF_FLAG_MB: u8 = 0x80;
/// NDEF header flag: Message End
pub const NDEF_FLAG_ME: u8 = 0x40;
/// NDEF header flag: Chunk Flag
pub const NDEF_FLAG_CF: u8 = 0x20;
/// NDEF header flag: Short Record (1-byte payload length)
pub const NDEF_FLAG_SR: u8 = 0x10;
/// NDEF header flag: ID Length present
pub const NDEF_FLAG_IL: u8 = 0x08;

/// All header flag bits.
pub const NDEF_FLAG_BITS: u8 =
    NDEF_FLAG_MB | NDEF_FLAG_ME | NDEF_FLAG_CF | NDEF_FLAG_SR | NDEF_FLAG_IL;

/// Flag bits a caller may set on a record. MB, ME and IL are derived
/// from the record's position and id length.
pub const NDEF_CALLER_FLAG_BITS: u8 = NDEF_FLAG_CF | NDEF_FLAG_SR;

/// Type Name Format occupies the low three bits of the header byte.
pub const NDEF_TNF_BITS: u8 = 0x07;

/// Largest payload a short record can describe.
pub const NDEF_SR_MAX_PAYLOAD_LEN: usize = 255;

/// Records per NDEF message accepted by `snep put`.
pub const MAX_NDEF_RECORDS: usize = 4;

/// Records per NDEF message accepted by `tag set`.
pub const MAX_TAG_RECORDS: usize = 4;

/// Capacity of the buffer a tag's NDEF content is built into.
pub const MAXIMUM_SUPPORTED_TAG_SIZE: usize = 512;

/// Base64 text length for `n` input bytes (padded).
pub const fn base64_encoded_len(n: usize) -> usize {
    n.div_ceil(3) * 4
}

/// Working buffer size for one base64 field of an NDEF report.
pub const NDEF_REPORT_FIELD_CAPACITY: usize = base64_encoded_len(MAXIMUM_SUPPORTED_TAG_SIZE);

/// Number of LLCP service access points; valid SAPs are `0..64`.
pub const LLCP_NUMBER_OF_SAPS: i64 = 64;

/// LLCP link management SAP. Reserved; never a connection endpoint.
pub const LLCP_SAP_LM: u8 = 0;

/// SNEP protocol version 1.0
pub const SNEP_VERSION: u8 = 0x10;

/// SNEP request code: PUT
pub const SNEP_REQ_PUT: u8 = 0x02;

/// SNEP header: version(1) + request(1) + length(4)
pub const SNEP_HEADER_LEN: usize = 6;

/// NCI control packet header: MT/PBF/GID(1) + OID(1) + length(1)
pub const NCI_HEADER_LEN: usize = 3;

/// Maximum payload of one NCI control packet.
pub const NCI_MAX_PAYLOAD_LEN: usize = 255;

/// Maximum size of one NCI control packet.
pub const NCI_MAX_PACKET_LEN: usize = NCI_HEADER_LEN + NCI_MAX_PAYLOAD_LEN;

/// NCI message type: notification (MT = 0b011)
pub const NCI_MT_NTF: u8 = 0x60;

/// NCI group: RF management
pub const NCI_GID_RF: u8 = 0x01;

/// RF_DISCOVER_NTF opcode
pub const NCI_OID_RF_DISCOVER: u8 = 0x03;

/// RF_INTF_ACTIVATED_NTF opcode
pub const NCI_OID_RF_INTF_ACTIVATED: u8 = 0x05;

/// RF_DEACTIVATE_NTF opcode
pub const NCI_OID_RF_DEACTIVATE: u8 = 0x06;
