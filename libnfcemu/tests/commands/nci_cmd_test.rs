#[path = "../common/mod.rs"]
mod common;

use libnfcemu::test_support::{P2P_RE, TAG_RE};
use libnfcemu::{Error, execute};

#[test]
fn deactivate_default_and_explicit() -> anyhow::Result<()> {
    let (mut host, mut console, _tag) = common::setup();
    execute("nci rf_intf_deactivate_ntf", &mut host, &mut console)?;
    execute("nci rf_intf_deactivate_ntf 1 0", &mut host, &mut console)?;
    assert_eq!(
        host.ntfs,
        vec![
            hex::decode("6106020302")?,
            hex::decode("6106020100")?,
        ]
    );
    Ok(())
}

#[test]
fn discover_for_each_endpoint() -> anyhow::Result<()> {
    let (mut host, mut console, _tag) = common::setup();
    execute("nci rf_discover_ntf 0 2", &mut host, &mut console)?;
    execute("nci rf_discover_ntf 1 0", &mut host, &mut console)?;
    assert_eq!(
        host.ntfs,
        vec![
            hex::decode("6103050105020002")?,
            hex::decode("6103050202000000")?,
        ]
    );
    Ok(())
}

#[test]
fn activated_auto_selects_for_active_endpoint() -> anyhow::Result<()> {
    let (mut host, mut console, _tag) = common::setup();
    execute("nci rf_intf_activated_ntf", &mut host, &mut console)?;

    // NFC-DEP on NFC-F is the third interface
    assert_eq!(host.device.active_rf, Some(2));
    assert_eq!(host.device.cleared, vec![P2P_RE]);
    assert_eq!(host.device.res[P2P_RE].last_dsap, 0);
    let ntf = host.pop_ntf().expect("notification sent");
    assert_eq!(&ntf[..5], &[0x61, 0x05, 0x0b, 0x01, 0x03]);
    Ok(())
}

#[test]
fn activated_keeps_already_active_interface() -> anyhow::Result<()> {
    let (mut host, mut console, _tag) = common::setup();
    host.device.active_rf = Some(1);
    execute(
        &format!("nci rf_intf_activated_ntf {} 0", TAG_RE),
        &mut host,
        &mut console,
    )?;
    assert_eq!(host.device.active_rf, Some(1));
    assert_eq!(host.device.cleared, vec![TAG_RE]);
    Ok(())
}

#[test]
fn activated_explicit_index() -> anyhow::Result<()> {
    let (mut host, mut console, _tag) = common::setup();
    execute("nci rf_intf_activated_ntf 0 1", &mut host, &mut console)?;
    assert_eq!(host.device.active_rf, Some(1));
    Ok(())
}

#[test]
fn activated_without_match_changes_nothing() {
    let (mut host, mut console, _tag) = common::setup();
    host.device.rf.truncate(1);
    let err = execute("nci rf_intf_activated_ntf", &mut host, &mut console).unwrap_err();
    assert!(matches!(err, Error::NoRfInterface));
    assert_eq!(console.errors(), vec!["KO: no active rf interface"]);
    assert!(host.device.cleared.is_empty());
    assert_eq!(host.device.res[P2P_RE].last_ssap, 32);
    assert!(host.ntfs.is_empty());
}

#[test]
fn activated_host_failure_changes_nothing() {
    let (mut host, mut console, _tag) = common::setup();
    host.device.activation_fails = true;
    let err = execute("nci rf_intf_activated_ntf", &mut host, &mut console).unwrap_err();
    assert!(matches!(
        err,
        Error::Failed {
            op: "rf_intf_activated_ntf",
            ..
        }
    ));
    assert_eq!(host.device.active_rf, None);
    assert!(host.device.cleared.is_empty());
    assert_eq!(host.device.res[P2P_RE].last_ssap, 32);
    assert!(host.ntfs.is_empty());
}

#[test]
fn activated_without_active_endpoint() {
    let (mut host, mut console, _tag) = common::setup();
    host.device.active_re = None;
    assert!(matches!(
        execute("nci rf_intf_activated_ntf", &mut host, &mut console),
        Err(Error::NoActiveRemoteEndpoint)
    ));
}

#[test]
fn bad_indices_and_types() {
    let (mut host, mut console, _tag) = common::setup();
    let cases = [
        ("nci rf_discover_ntf 2 0", "KO: unknown remote endpoint 2"),
        ("nci rf_discover_ntf 0 3", "KO: unknown discover notification type 3"),
        ("nci rf_intf_activated_ntf 0 3", "KO: unknown rf index 3"),
        ("nci rf_intf_activated_ntf 0 -2", "KO: unknown rf index -2"),
        ("nci rf_intf_deactivate_ntf 4 0", "KO: unknown deactivate notification type 4"),
        ("nci rf_intf_deactivate_ntf 0 4", "KO: unknown deactivate notification reason 4"),
        ("nci rf_field_info_ntf", "KO: invalid operation 'rf_field_info_ntf'"),
    ];
    for (line, expected) in cases {
        console.err.clear();
        assert!(execute(line, &mut host, &mut console).is_err(), "{}", line);
        assert_eq!(console.errors(), vec![expected], "{}", line);
    }
    assert!(host.ntfs.is_empty());
}
