// libnfcemu/src/cmdline/snep.rs

//! `snep put <dsap> <ssap> [records...]`

use crate::cmdline::lexer::Lexer;
use crate::cmdline::parse::{parse_ndef_msg, parse_sap};
use crate::constants::MAX_NDEF_RECORDS;
use crate::device::{NfcDevice, active_endpoint};
use crate::dispatch::{Console, ConsoleWriter, Dispatch};
use crate::protocol::ndef::{NdefRecordList, report_ndef_msg};
use crate::protocol::snep::encode_put;
use crate::types::Sap;
use crate::{Error, Result};

/// Parsed `snep put`. Without records the command prints the next NDEF
/// message received instead of sending one.
#[derive(Debug, Clone, Copy, Default)]
pub struct SnepPutParam<'a> {
    pub dsap: Sap,
    pub ssap: Sap,
    pub records: NdefRecordList<'a>,
}

impl<'a> SnepPutParam<'a> {
    pub fn parse(lx: &mut Lexer<'a>) -> Result<Self> {
        let dsap = parse_sap(lx, "DSAP", true)?;
        let ssap = parse_sap(lx, "SSAP", true)?;
        let mut records = NdefRecordList::new();
        parse_ndef_msg(lx, &mut records, MAX_NDEF_RECORDS)?;
        Ok(Self {
            dsap,
            ssap,
            records,
        })
    }

    /// Active endpoint and the SAPs to use with it.
    fn link(&self, device: &dyn NfcDevice) -> Result<(usize, u8, u8)> {
        let (re, endpoint) = active_endpoint(device)?;
        Ok((
            re,
            self.dsap.resolve(endpoint.last_dsap),
            self.ssap.resolve(endpoint.last_ssap),
        ))
    }
}

/// Encode the records as a SNEP PUT and send it to the active endpoint.
pub fn send_put(host: &mut dyn Dispatch, param: &SnepPutParam<'_>) -> Result<usize> {
    host.send_dta(&mut |device, _packet| {
        let (re, dsap, ssap) = param.link(&*device)?;
        log::debug!(
            "snep put: {} record(s) to remote endpoint {} dsap={} ssap={}",
            param.records.len(),
            re,
            dsap,
            ssap
        );
        device
            .send_snep_put(re, dsap, ssap, &mut |frame| {
                encode_put(param.records.as_slice(), frame)
            })
            .map_err(|e| Error::failed("snep put", e))
    })
}

/// Receive the next SNEP PUT from the active endpoint and write its NDEF
/// message to `console` as a report.
pub fn recv_put(
    host: &mut dyn Dispatch,
    console: &mut dyn Console,
    param: &SnepPutParam<'_>,
) -> Result<usize> {
    host.recv_dta(&mut |device| {
        let (re, dsap, ssap) = param.link(&*device)?;
        log::debug!(
            "snep put: receiving from remote endpoint {} dsap={} ssap={}",
            re,
            dsap,
            ssap
        );
        device
            .recv_snep_put(re, dsap, ssap, &mut |msg| {
                report_ndef_msg(msg, &mut ConsoleWriter::new(&mut *console))
            })
            .map_err(|e| Error::failed("snep put", e))
    })
}

pub fn run(lx: &mut Lexer<'_>, host: &mut dyn Dispatch, console: &mut dyn Console) -> Result<()> {
    let op = lx.token(" ").ok_or(Error::NoOperation)?;
    match op {
        "put" => {
            let param = SnepPutParam::parse(lx)?;
            if param.records.is_empty() {
                recv_put(host, console, &param)?;
            } else {
                send_put(host, &param)?;
            }
            Ok(())
        }
        _ => Err(Error::InvalidOperation(op.to_string())),
    }
}
