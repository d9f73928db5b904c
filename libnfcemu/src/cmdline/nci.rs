// libnfcemu/src/cmdline/nci.rs

//! `nci rf_discover_ntf | rf_intf_activated_ntf | rf_intf_deactivate_ntf`

use crate::cmdline::lexer::Lexer;
use crate::cmdline::parse::{
    parse_deact_reason, parse_deact_type, parse_discover_ntf_type, parse_re_index, parse_rf_index,
};
use crate::device::NfcDevice;
use crate::dispatch::Dispatch;
use crate::protocol::nci::{NtfParam, create_ntf};
use crate::types::RfSelect;
use crate::{Error, Result};

/// Parse the notification named by `op`. Indices are checked against the
/// tables of `device`.
pub fn parse_ntf_param(op: &str, lx: &mut Lexer<'_>, device: &dyn NfcDevice) -> Result<NtfParam> {
    let res = device.remote_endpoints().len();
    match op {
        "rf_discover_ntf" => {
            let re = parse_re_index(lx, res)?;
            let ntype = parse_discover_ntf_type(lx)?;
            Ok(NtfParam::Discover { re, ntype })
        }
        "rf_intf_activated_ntf" => {
            if !lx.has_more() {
                return Ok(NtfParam::IntfActivated {
                    re: None,
                    rf: RfSelect::Auto,
                });
            }
            let re = parse_re_index(lx, res)?;
            let rf = if lx.has_more() {
                parse_rf_index(lx, device.rf_interfaces().len())?
            } else {
                RfSelect::Auto
            };
            Ok(NtfParam::IntfActivated { re: Some(re), rf })
        }
        "rf_intf_deactivate_ntf" => {
            if !lx.has_more() {
                return Ok(NtfParam::default());
            }
            let dtype = parse_deact_type(lx)?;
            let reason = parse_deact_reason(lx)?;
            Ok(NtfParam::IntfDeactivate { dtype, reason })
        }
        _ => Err(Error::InvalidOperation(op.to_string())),
    }
}

/// Build the notification through the host's notification path.
pub fn send_ntf(host: &mut dyn Dispatch, param: &NtfParam) -> Result<usize> {
    log::debug!("nci {}: {:?}", param.op_name(), param);
    host.send_ntf(&mut |device, packet| create_ntf(device, param, packet))
}

pub fn run(lx: &mut Lexer<'_>, host: &mut dyn Dispatch) -> Result<()> {
    let op = lx.token(" ").ok_or(Error::NoOperation)?;
    let param = parse_ntf_param(op, lx, host.device())?;
    send_ntf(host, &param)?;
    Ok(())
}
