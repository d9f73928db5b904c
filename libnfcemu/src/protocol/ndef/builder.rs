// libnfcemu/src/protocol/ndef/builder.rs

use crate::constants::{
    NDEF_CALLER_FLAG_BITS, NDEF_FLAG_IL, NDEF_FLAG_MB, NDEF_FLAG_ME, NDEF_FLAG_SR,
    NDEF_SR_MAX_PAYLOAD_LEN,
};
use crate::protocol::codec::decode_base64;
use crate::protocol::ndef::NdefRecordSpec;
use crate::protocol::ndef::header;
use crate::{Error, Result};

/// Encode `records` as one binary NDEF message into `buf` and return the
/// number of bytes written.
///
/// MB is set on the first record, ME on the last and IL on every record
/// with a non-empty id; these are OR-ed onto the caller's CF/SR bits.
/// Length fields carry the decoded byte lengths. On error the content of
/// `buf` is unspecified.
pub fn build_ndef_msg(records: &[NdefRecordSpec<'_>], buf: &mut [u8]) -> Result<usize> {
    let mut off = 0usize;
    let last = records.len().saturating_sub(1);

    for (i, record) in records.iter().enumerate() {
        if record.flags & !NDEF_CALLER_FLAG_BITS != 0 {
            return Err(Error::ReservedFlags(u64::from(record.flags)));
        }

        // Non-empty base64url text always decodes to at least one byte.
        let has_id = !record.id.is_empty();
        let mut flags = record.flags;
        if i == 0 {
            flags |= NDEF_FLAG_MB;
        }
        if i == last {
            flags |= NDEF_FLAG_ME;
        }
        if has_id {
            flags |= NDEF_FLAG_IL;
        }

        let start = off;
        off += header::create_rec(&mut buf[off..], flags, record.tnf)?;

        let n = decode_base64(record.type_, &mut buf[off..])?;
        header::set_type_len(&mut buf[start..], n)?;
        off += n;

        if has_id {
            let n = decode_base64(record.id, &mut buf[off..])?;
            header::set_id_len(&mut buf[start..], n)?;
            off += n;
        }

        let n = decode_base64(record.payload, &mut buf[off..])?;
        if n > NDEF_SR_MAX_PAYLOAD_LEN && flags & NDEF_FLAG_SR != 0 {
            return Err(Error::ShortRecordTooLong(n));
        }
        header::set_payload_len(&mut buf[start..], n)?;
        off += n;

        log::trace!(
            "ndef record {}: flags={:#04x} tnf={} len={}",
            i,
            flags,
            record.tnf,
            off - start
        );
    }

    Ok(off)
}
