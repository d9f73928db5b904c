// libnfcemu/src/cmdline/mod.rs

//! Text command front end.
//!
//! Every entry point takes the arguments following its keyword, runs at
//! most one host operation and reports a failure once through the console
//! as `KO: <error>\r\n` before returning it.

pub mod lexer;
pub mod llcp;
pub mod nci;
pub mod parse;
pub mod snep;
pub mod tag;

pub use lexer::Lexer;
pub use llcp::LlcpConnectParam;
pub use snep::SnepPutParam;

use crate::dispatch::{Console, Dispatch};
use crate::{Error, Result};

fn report<T>(console: &mut dyn Console, result: Result<T>) -> Result<T> {
    if let Err(err) = &result {
        log::debug!("command failed: {:?}", err);
        console.log_err(&format!("KO: {}\r\n", err));
    }
    result
}

fn arguments(args: Option<&str>) -> Result<Lexer<'_>> {
    args.map(|a| Lexer::new(Some(a))).ok_or(Error::NoArguments)
}

/// `snep put <dsap> <ssap> [records...]`
pub fn nfc_cmd_snep(
    args: Option<&str>,
    host: &mut dyn Dispatch,
    console: &mut dyn Console,
) -> Result<()> {
    let result = arguments(args).and_then(|mut lx| snep::run(&mut lx, host, console));
    report(console, result)
}

/// `nci rf_discover_ntf | rf_intf_activated_ntf | rf_intf_deactivate_ntf`
pub fn nfc_cmd_nci(
    args: Option<&str>,
    host: &mut dyn Dispatch,
    console: &mut dyn Console,
) -> Result<()> {
    let result = arguments(args).and_then(|mut lx| nci::run(&mut lx, host));
    report(console, result)
}

/// `llcp connect <dsap> <ssap>`
pub fn nfc_cmd_llcp(
    args: Option<&str>,
    host: &mut dyn Dispatch,
    console: &mut dyn Console,
) -> Result<()> {
    let result = arguments(args).and_then(|mut lx| llcp::run(&mut lx, host));
    report(console, result)
}

/// `tag set | clear | format`
pub fn nfc_cmd_tag(
    args: Option<&str>,
    host: &mut dyn Dispatch,
    console: &mut dyn Console,
) -> Result<()> {
    let result = arguments(args).and_then(|mut lx| tag::run(&mut lx, host));
    report(console, result)
}

/// Run one full command line, choosing the command family by its first
/// word. A trailing line break is ignored.
pub fn execute(line: &str, host: &mut dyn Dispatch, console: &mut dyn Console) -> Result<()> {
    let line = line.trim_end_matches(['\r', '\n']);
    let mut lx = Lexer::new(Some(line));
    let keyword = lx.token(" ").unwrap_or_default();
    let args = lx.rest();
    match keyword {
        "snep" => nfc_cmd_snep(args, host, console),
        "nci" => nfc_cmd_nci(args, host, console),
        "llcp" => nfc_cmd_llcp(args, host, console),
        "tag" => nfc_cmd_tag(args, host, console),
        "" => report(console, Err(Error::NoArguments)),
        _ => report(console, Err(Error::UnknownCommand(keyword.to_string()))),
    }
}
