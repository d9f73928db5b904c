// libnfcemu/src/protocol/ndef/header.rs

//! NDEF record header accessors. The builder and the reporter both go
//! through these so they agree on the wire layout:
//! flags|TNF(1) + type_len(1) + payload_len(1 if SR else 4, BE)
//! + id_len(1, only if IL) + type + id + payload

use crate::constants::{
    NDEF_FLAG_BITS, NDEF_FLAG_IL, NDEF_FLAG_SR, NDEF_SR_MAX_PAYLOAD_LEN, NDEF_TNF_BITS,
};
use crate::protocol::parser::{be_u32_at, byte_at, ensure_capacity, put_be_u32};
use crate::types::Tnf;
use crate::{Error, Result};

/// Smallest possible header: flags, type length and a short payload length.
pub const NDEF_MIN_HEADER_LEN: usize = 3;

const TYPE_LEN_OFFSET: usize = 1;
const PAYLOAD_LEN_OFFSET: usize = 2;

/// Header length implied by the flag byte.
pub fn header_len(flags: u8) -> usize {
    let payload_len_size = if flags & NDEF_FLAG_SR != 0 { 1 } else { 4 };
    let id_len_size = if flags & NDEF_FLAG_IL != 0 { 1 } else { 0 };
    PAYLOAD_LEN_OFFSET + payload_len_size + id_len_size
}

fn id_len_offset(flags: u8) -> usize {
    header_len(flags) - 1
}

/// Decoded record header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RecordHeader {
    /// Raw first byte: flag bits and TNF.
    pub flags: u8,
    pub type_len: u8,
    pub id_len: u8,
    pub payload_len: u32,
}

impl RecordHeader {
    /// Parse the header at the start of `data`. Fails with
    /// `MessageTruncated` when `data` is shorter than the header.
    pub fn parse(data: &[u8]) -> Result<Self> {
        if data.len() < NDEF_MIN_HEADER_LEN {
            return Err(Error::MessageTruncated {
                remaining: data.len(),
                needed: NDEF_MIN_HEADER_LEN,
            });
        }
        let flags = data[0];
        let len = header_len(flags);
        if data.len() < len {
            return Err(Error::MessageTruncated {
                remaining: data.len(),
                needed: len,
            });
        }

        let type_len = byte_at(data, TYPE_LEN_OFFSET)?;
        let payload_len = if flags & NDEF_FLAG_SR != 0 {
            u32::from(byte_at(data, PAYLOAD_LEN_OFFSET)?)
        } else {
            be_u32_at(data, PAYLOAD_LEN_OFFSET)?
        };
        let id_len = if flags & NDEF_FLAG_IL != 0 {
            byte_at(data, id_len_offset(flags))?
        } else {
            0
        };

        Ok(Self {
            flags,
            type_len,
            id_len,
            payload_len,
        })
    }

    /// Flag bits without the TNF.
    pub fn flag_bits(&self) -> u8 {
        self.flags & NDEF_FLAG_BITS
    }

    /// Raw three-bit TNF value.
    pub fn tnf_bits(&self) -> u8 {
        self.flags & NDEF_TNF_BITS
    }

    /// TNF as an enumeration; `None` for the reserved value.
    pub fn tnf(&self) -> Option<Tnf> {
        Tnf::from_u8(self.tnf_bits())
    }

    pub fn header_len(&self) -> usize {
        header_len(self.flags)
    }

    /// Total wire length: header + type + id + payload.
    pub fn record_len(&self) -> usize {
        self.header_len()
            .saturating_add(usize::from(self.type_len))
            .saturating_add(usize::from(self.id_len))
            .saturating_add(self.payload_len as usize)
    }
}

/// Write a record header with zeroed length fields at the start of `rec`
/// and return the header length.
pub fn create_rec(rec: &mut [u8], flags: u8, tnf: Tnf) -> Result<usize> {
    let len = header_len(flags);
    ensure_capacity(rec, len)?;
    rec[..len].fill(0);
    rec[0] = (flags & NDEF_FLAG_BITS) | tnf.as_u8();
    Ok(len)
}

/// Set the type length of the record starting at `rec`.
pub fn set_type_len(rec: &mut [u8], len: usize) -> Result<()> {
    let len = u8::try_from(len).map_err(|_| Error::FieldTooLong {
        field: "NDEF type",
        len,
        max: u8::MAX as usize,
    })?;
    ensure_capacity(rec, TYPE_LEN_OFFSET + 1)?;
    rec[TYPE_LEN_OFFSET] = len;
    Ok(())
}

/// Set the id length of the record starting at `rec`. The record must
/// carry the IL flag.
pub fn set_id_len(rec: &mut [u8], len: usize) -> Result<()> {
    let flags = byte_at(rec, 0)?;
    if flags & NDEF_FLAG_IL == 0 {
        return Err(Error::FrameFormat("NDEF record has no id length".into()));
    }
    let len = u8::try_from(len).map_err(|_| Error::FieldTooLong {
        field: "NDEF id",
        len,
        max: u8::MAX as usize,
    })?;
    let idx = id_len_offset(flags);
    ensure_capacity(rec, idx + 1)?;
    rec[idx] = len;
    Ok(())
}

/// Set the payload length of the record starting at `rec`, in the short or
/// long encoding selected by its SR flag.
pub fn set_payload_len(rec: &mut [u8], len: usize) -> Result<()> {
    let flags = byte_at(rec, 0)?;
    if flags & NDEF_FLAG_SR != 0 {
        if len > NDEF_SR_MAX_PAYLOAD_LEN {
            return Err(Error::ShortRecordTooLong(len));
        }
        ensure_capacity(rec, PAYLOAD_LEN_OFFSET + 1)?;
        rec[PAYLOAD_LEN_OFFSET] = len as u8;
        Ok(())
    } else {
        let len = u32::try_from(len).map_err(|_| Error::FieldTooLong {
            field: "NDEF payload",
            len,
            max: u32::MAX as usize,
        })?;
        put_be_u32(rec, PAYLOAD_LEN_OFFSET, len)
    }
}
