// libnfcemu/src/cmdline/tag.rs

//! `tag set <re> [records...] | clear <re> | format <re>`

use crate::cmdline::lexer::Lexer;
use crate::cmdline::parse::{parse_ndef_msg, parse_re_index};
use crate::constants::{MAX_TAG_RECORDS, MAXIMUM_SUPPORTED_TAG_SIZE};
use crate::device::{NfcDevice, Tag};
use crate::dispatch::Dispatch;
use crate::protocol::ndef::{NdefRecordList, NdefRecordSpec, build_ndef_msg};
use crate::{Error, Result};

fn tag_mut(device: &mut dyn NfcDevice, re: usize) -> Result<&mut Box<dyn Tag>> {
    device
        .remote_endpoints_mut()
        .get_mut(re)
        .and_then(|endpoint| endpoint.tag.as_mut())
        .ok_or(Error::NotATag)
}

fn is_tag(device: &dyn NfcDevice, re: usize) -> bool {
    device
        .remote_endpoints()
        .get(re)
        .is_some_and(|endpoint| endpoint.tag.is_some())
}

/// Build `records` and install them as the tag's content.
pub fn set(device: &mut dyn NfcDevice, re: usize, records: &[NdefRecordSpec<'_>]) -> Result<usize> {
    if records.is_empty() {
        return Err(Error::NoNdefRecord);
    }
    let mut buf = [0u8; MAXIMUM_SUPPORTED_TAG_SIZE];
    let n = build_ndef_msg(records, &mut buf)?;
    log::debug!("tag set: remote endpoint {} gets {} bytes", re, n);
    tag_mut(device, re)?
        .set_data(&buf[..n])
        .map_err(|e| Error::failed("tag set", e))?;
    Ok(n)
}

/// Remove the tag's content.
pub fn clear(device: &mut dyn NfcDevice, re: usize) -> Result<()> {
    log::debug!("tag clear: remote endpoint {}", re);
    tag_mut(device, re)?
        .set_data(&[])
        .map_err(|e| Error::failed("tag clear", e))
}

/// Reset the tag to its blank state.
pub fn format(device: &mut dyn NfcDevice, re: usize) -> Result<()> {
    log::debug!("tag format: remote endpoint {}", re);
    tag_mut(device, re)?
        .format()
        .map_err(|e| Error::failed("tag format", e))
}

pub fn run(lx: &mut Lexer<'_>, host: &mut dyn Dispatch) -> Result<()> {
    let op = lx.token(" ").ok_or(Error::NoOperation)?;
    let res = host.device().remote_endpoints().len();
    match op {
        "set" => {
            let re = parse_re_index(lx, res)?;
            if !is_tag(host.device(), re) {
                return Err(Error::NotATag);
            }
            let mut records = NdefRecordList::new();
            parse_ndef_msg(lx, &mut records, MAX_TAG_RECORDS)?;
            set(host.device_mut(), re, records.as_slice())?;
        }
        "clear" => {
            let re = parse_re_index(lx, res)?;
            clear(host.device_mut(), re)?;
        }
        "format" => {
            let re = parse_re_index(lx, res)?;
            format(host.device_mut(), re)?;
        }
        _ => return Err(Error::InvalidOperation(op.to_string())),
    }
    Ok(())
}
