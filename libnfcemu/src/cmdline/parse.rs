// libnfcemu/src/cmdline/parse.rs

//! Typed argument parsers shared by the command families.

use crate::cmdline::lexer::Lexer;
use crate::constants::{LLCP_NUMBER_OF_SAPS, NDEF_CALLER_FLAG_BITS};
use crate::protocol::ndef::{NdefRecordList, NdefRecordSpec};
use crate::types::{
    DeactivationReason, DeactivationType, DiscoverNtfType, RfSelect, Sap, Tnf,
};
use crate::{Error, Result};

fn index_value(v: u64) -> i64 {
    i64::try_from(v).unwrap_or(i64::MAX)
}

/// LLCP SAP in `[0, 64)`; `-1` selects the last SAP when `autodetect`.
pub fn parse_sap(lx: &mut Lexer<'_>, field: &'static str, autodetect: bool) -> Result<Sap> {
    let value = lx.parse_i64(field, " ")?;
    match value {
        -1 if autodetect => Ok(Sap::Auto),
        0..LLCP_NUMBER_OF_SAPS => Ok(Sap::Value(value as u8)),
        _ => Err(Error::InvalidSap { field, value }),
    }
}

/// One `[flags,tnf,type,id,payload]` record. Fields are separated by a
/// space or comma; only whitespace may precede the opening bracket.
pub fn parse_ndef_rec<'a>(lx: &mut Lexer<'a>) -> Result<NdefRecordSpec<'a>> {
    lx.skip_whitespace();
    let Some(rest) = lx.rest().filter(|s| !s.is_empty()) else {
        return Err(Error::NoNdefRecord);
    };
    if !lx.eat('[') {
        return Err(Error::InvalidValue {
            field: "NDEF record",
            value: rest.to_string(),
            reason: "expected '['",
        });
    }

    let flags = lx.parse_u64("NDEF flags", " ,")?;
    if flags & !u64::from(NDEF_CALLER_FLAG_BITS) != 0 {
        return Err(Error::ReservedFlags(flags));
    }
    let tnf = lx.parse_u64("NDEF TNF", " ,")?;
    let tnf = u8::try_from(tnf)
        .ok()
        .and_then(Tnf::from_u8)
        .ok_or(Error::InvalidTnf(tnf))?;

    let type_ = lx.parse_str("NDEF type", " ,", false)?;
    let id = lx.parse_str("NDEF id", " ,", true)?;
    let payload = lx.parse_str("NDEF payload", "]", false)?;
    if lx.rest().is_none() {
        return Err(Error::InvalidValue {
            field: "NDEF payload",
            value: payload.to_string(),
            reason: "missing ']'",
        });
    }

    Ok(NdefRecordSpec {
        flags: flags as u8,
        tnf,
        type_,
        id,
        payload,
    })
}

/// Records until the input is blank or `capacity` records were read.
/// Anything but whitespace left over is an error.
pub fn parse_ndef_msg<'a>(
    lx: &mut Lexer<'a>,
    records: &mut NdefRecordList<'a>,
    capacity: usize,
) -> Result<usize> {
    let capacity = capacity.min(records.capacity());
    while records.len() < capacity && lx.remaining().is_some() {
        records.push(parse_ndef_rec(lx)?)?;
    }
    if let Some(rest) = lx.remaining() {
        return Err(Error::TrailingCharacters(rest.to_string()));
    }
    Ok(records.len())
}

/// Remote endpoint index in `[0, count)`.
pub fn parse_re_index(lx: &mut Lexer<'_>, count: usize) -> Result<usize> {
    let value = lx.parse_u64("remote endpoint", " ")?;
    match usize::try_from(value) {
        Ok(i) if i < count => Ok(i),
        _ => Err(Error::UnknownIndex {
            field: "remote endpoint",
            value: index_value(value),
        }),
    }
}

/// RF interface index in `[-1, count)`; `-1` selects automatically.
pub fn parse_rf_index(lx: &mut Lexer<'_>, count: usize) -> Result<RfSelect> {
    let value = lx.parse_i64("rf index", " ")?;
    if value == -1 {
        return Ok(RfSelect::Auto);
    }
    match usize::try_from(value) {
        Ok(i) if i < count => Ok(RfSelect::Index(i)),
        _ => Err(Error::UnknownIndex {
            field: "rf index",
            value,
        }),
    }
}

fn parse_wire<T>(
    lx: &mut Lexer<'_>,
    field: &'static str,
    from_u8: fn(u8) -> Option<T>,
) -> Result<T> {
    let value = lx.parse_u64(field, " ")?;
    u8::try_from(value)
        .ok()
        .and_then(from_u8)
        .ok_or(Error::UnknownIndex {
            field,
            value: index_value(value),
        })
}

pub fn parse_discover_ntf_type(lx: &mut Lexer<'_>) -> Result<DiscoverNtfType> {
    parse_wire(lx, "discover notification type", DiscoverNtfType::from_u8)
}

pub fn parse_deact_type(lx: &mut Lexer<'_>) -> Result<DeactivationType> {
    parse_wire(lx, "deactivate notification type", DeactivationType::from_u8)
}

pub fn parse_deact_reason(lx: &mut Lexer<'_>) -> Result<DeactivationReason> {
    parse_wire(lx, "deactivate notification reason", DeactivationReason::from_u8)
}
