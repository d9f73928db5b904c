// libnfcemu/src/cmdline/llcp.rs

//! `llcp connect <dsap> <ssap>`

use crate::cmdline::lexer::Lexer;
use crate::cmdline::parse::parse_sap;
use crate::constants::LLCP_SAP_LM;
use crate::device::active_endpoint;
use crate::dispatch::Dispatch;
use crate::types::Sap;
use crate::{Error, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LlcpConnectParam {
    pub dsap: Sap,
    pub ssap: Sap,
}

impl LlcpConnectParam {
    pub fn parse(lx: &mut Lexer<'_>) -> Result<Self> {
        let dsap = parse_sap(lx, "DSAP", true)?;
        let ssap = parse_sap(lx, "SSAP", true)?;
        Ok(Self { dsap, ssap })
    }
}

/// Send an LLCP CONNECT to the active endpoint. Neither SAP may resolve to
/// the link management SAP.
pub fn connect(host: &mut dyn Dispatch, param: &LlcpConnectParam) -> Result<usize> {
    host.send_dta(&mut |device, _packet| {
        let (re, endpoint) = active_endpoint(&*device)?;
        let dsap = param.dsap.resolve(endpoint.last_dsap);
        let ssap = param.ssap.resolve(endpoint.last_ssap);
        if dsap == LLCP_SAP_LM {
            return Err(Error::ZeroSap { field: "DSAP" });
        }
        if ssap == LLCP_SAP_LM {
            return Err(Error::ZeroSap { field: "SSAP" });
        }
        log::debug!("llcp connect: remote endpoint {} dsap={} ssap={}", re, dsap, ssap);
        device
            .send_llcp_connect(re, dsap, ssap)
            .map_err(|e| Error::failed("LLCP connect", e))
    })
}

pub fn run(lx: &mut Lexer<'_>, host: &mut dyn Dispatch) -> Result<()> {
    let op = lx.token(" ").ok_or(Error::NoOperation)?;
    match op {
        "connect" => {
            let param = LlcpConnectParam::parse(lx)?;
            connect(host, &param)?;
            Ok(())
        }
        _ => Err(Error::InvalidOperation(op.to_string())),
    }
}
