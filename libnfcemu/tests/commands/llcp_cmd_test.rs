#[path = "../common/mod.rs"]
mod common;

use libnfcemu::test_support::{LAST_DSAP, LAST_SSAP, P2P_RE};
use libnfcemu::{Error, execute};

#[test]
fn connect_with_explicit_and_auto_saps() -> anyhow::Result<()> {
    let (mut host, mut console, _tag) = common::setup();
    execute("llcp connect 16 17", &mut host, &mut console)?;
    execute("llcp connect -1 -1", &mut host, &mut console)?;
    // the first connect left 16/17 as the last SAPs
    assert_eq!(
        host.device.connects,
        vec![(P2P_RE, 16, 17), (P2P_RE, 16, 17)]
    );
    Ok(())
}

#[test]
fn connect_auto_uses_endpoint_saps() -> anyhow::Result<()> {
    let (mut host, mut console, _tag) = common::setup();
    execute("llcp connect -1 -1", &mut host, &mut console)?;
    assert_eq!(host.device.connects, vec![(P2P_RE, LAST_DSAP, LAST_SSAP)]);
    Ok(())
}

#[test]
fn zero_sap_after_resolution() {
    let (mut host, mut console, _tag) = common::setup();
    host.device.res[P2P_RE].clear();
    assert!(matches!(
        execute("llcp connect -1 -1", &mut host, &mut console),
        Err(Error::ZeroSap { field: "DSAP" })
    ));
    assert_eq!(console.errors(), vec!["KO: DSAP is 0"]);
    assert!(host.device.connects.is_empty());
}

#[test]
fn link_failure_reported() {
    let (mut host, mut console, _tag) = common::setup();
    host.device.link_down = true;
    assert!(execute("llcp connect 4 32", &mut host, &mut console).is_err());
    assert!(console.err.starts_with("KO: 'LLCP connect' failed"));
}
