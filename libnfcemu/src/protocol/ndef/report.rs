// libnfcemu/src/protocol/ndef/report.rs

use std::fmt::Write;

use crate::constants::NDEF_REPORT_FIELD_CAPACITY;
use crate::protocol::codec::encode_base64;
use crate::protocol::ndef::NdefRecords;
use crate::Result;

/// Render a binary NDEF message as a JSON-like list, one entry per record:
///
/// `[{"tnf": 1, "type": "VA", "id": "", "payload": "eA"},...]\r\n`
///
/// Type, id and payload are base64url encoded. The whole message is
/// checked before anything is written, so a truncated message produces no
/// output.
pub fn report_ndef_msg<W: Write + ?Sized>(msg: &[u8], out: &mut W) -> Result<()> {
    for record in NdefRecords::new(msg) {
        record?;
    }

    let mut fields = [[0u8; NDEF_REPORT_FIELD_CAPACITY]; 3];
    let [type_buf, id_buf, payload_buf] = &mut fields;

    out.write_str("[")?;
    for (i, record) in NdefRecords::new(msg).enumerate() {
        let record = record?;
        if i > 0 {
            out.write_str(",")?;
        }
        let type_ = encode_base64(record.type_, type_buf)?;
        let id = encode_base64(record.id, id_buf)?;
        let payload = encode_base64(record.payload, payload_buf)?;
        write!(
            out,
            "{{\"tnf\": {}, \"type\": \"{}\", \"id\": \"{}\", \"payload\": \"{}\"}}",
            record.header.tnf_bits(),
            type_,
            id,
            payload
        )?;
    }
    out.write_str("]\r\n")?;
    Ok(())
}
