// libnfcemu/src/protocol/snep.rs

//! SNEP request framing. A request is
//! version(1) + request code(1) + information length(4, BE) + information.

use crate::constants::{SNEP_HEADER_LEN, SNEP_REQ_PUT, SNEP_VERSION};
use crate::protocol::ndef::{NdefRecordSpec, build_ndef_msg};
use crate::protocol::parser::{be_u32_at, byte_at, ensure_capacity, ensure_len, put_be_u32};
use crate::{Error, Result};

/// Write a SNEP request header for `info_len` bytes of information at the
/// start of `frame`.
pub fn create_req(frame: &mut [u8], request: u8, info_len: usize) -> Result<usize> {
    ensure_capacity(frame, SNEP_HEADER_LEN)?;
    let len = u32::try_from(info_len).map_err(|_| Error::FieldTooLong {
        field: "SNEP information",
        len: info_len,
        max: u32::MAX as usize,
    })?;
    frame[0] = SNEP_VERSION;
    frame[1] = request;
    put_be_u32(frame, 2, len)?;
    Ok(SNEP_HEADER_LEN)
}

/// Build `records` as an NDEF message in the information field of `frame`
/// and wrap it as a SNEP PUT request. Returns the full request length.
pub fn encode_put(records: &[NdefRecordSpec<'_>], frame: &mut [u8]) -> Result<usize> {
    ensure_capacity(frame, SNEP_HEADER_LEN)?;
    let info_len = build_ndef_msg(records, &mut frame[SNEP_HEADER_LEN..])?;
    create_req(frame, SNEP_REQ_PUT, info_len)?;
    Ok(SNEP_HEADER_LEN + info_len)
}

/// A parsed SNEP request borrowing its information field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SnepRequest<'a> {
    pub version: u8,
    pub request: u8,
    pub info: &'a [u8],
}

impl<'a> SnepRequest<'a> {
    /// Parse one complete request. The frame must hold exactly the
    /// declared information length.
    pub fn parse(frame: &'a [u8]) -> Result<Self> {
        ensure_len(frame, SNEP_HEADER_LEN)?;
        let version = byte_at(frame, 0)?;
        if version >> 4 != SNEP_VERSION >> 4 {
            return Err(Error::FrameFormat(format!(
                "unsupported SNEP version {:#04x}",
                version
            )));
        }
        let request = byte_at(frame, 1)?;
        let len = be_u32_at(frame, 2)? as usize;
        let required = SNEP_HEADER_LEN.saturating_add(len);
        if frame.len() != required {
            return Err(Error::InvalidLength {
                expected: required,
                actual: frame.len(),
            });
        }
        Ok(Self {
            version,
            request,
            info: &frame[SNEP_HEADER_LEN..],
        })
    }

    pub fn is_put(&self) -> bool {
        self.request == SNEP_REQ_PUT
    }
}
