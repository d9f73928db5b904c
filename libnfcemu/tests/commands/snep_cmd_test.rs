#[path = "../common/mod.rs"]
mod common;

use libnfcemu::test_support::{LAST_DSAP, LAST_SSAP, P2P_RE, snep_put_frame};
use libnfcemu::{Error, execute};

#[test]
fn put_sends_encoded_request() -> anyhow::Result<()> {
    let (mut host, mut console, _tag) = common::setup();
    execute(
        &format!("snep put 4 32 {}", common::fixtures::ABC_DEF_RECORD),
        &mut host,
        &mut console,
    )?;

    let (re, dsap, ssap, frame) = host.device.pop_sent().expect("one request sent");
    assert_eq!((re, dsap, ssap), (P2P_RE, 4, 32));
    assert_eq!(frame, snep_put_frame(&common::fixtures::abc_def_ndef()));
    assert!(console.err.is_empty());
    assert!(console.out.is_empty());
    Ok(())
}

#[test]
fn put_two_records_with_auto_saps() -> anyhow::Result<()> {
    let (mut host, mut console, _tag) = common::setup();
    execute(
        &format!("snep put -1 -1 {}", common::fixtures::URI_AND_MIME_RECORDS),
        &mut host,
        &mut console,
    )?;
    let (_, dsap, ssap, frame) = host.device.pop_sent().expect("one request sent");
    assert_eq!((dsap, ssap), (LAST_DSAP, LAST_SSAP));
    assert_eq!(frame, snep_put_frame(&common::fixtures::uri_and_mime_ndef()));
    Ok(())
}

#[test]
fn put_without_records_prints_received_message() -> anyhow::Result<()> {
    let (mut host, mut console, _tag) = common::setup();
    host.device
        .push_incoming(snep_put_frame(&common::fixtures::uri_and_mime_ndef()));
    execute("snep put -1 -1\r\n", &mut host, &mut console)?;

    assert!(host.device.sent.is_empty());
    assert_eq!(
        console.out,
        "[{\"tnf\": 1, \"type\": \"VQ\", \"id\": \"dTE\", \"payload\": \"BGV4YW1wbGUuY29t\"},\
         {\"tnf\": 2, \"type\": \"dGV4dC9wbGFpbg\", \"id\": \"\", \"payload\": \"aGk\"}]\r\n"
    );
    Ok(())
}

#[test]
fn truncated_incoming_message_prints_nothing() {
    let (mut host, mut console, _tag) = common::setup();
    let mut ndef = common::fixtures::abc_def_ndef();
    ndef.push(0x51);
    host.device.push_incoming(snep_put_frame(&ndef));

    let err = execute("snep put -1 -1", &mut host, &mut console).unwrap_err();
    assert!(matches!(err, Error::Failed { op: "snep put", .. }));
    assert!(console.out.is_empty());
    assert_eq!(console.errors().len(), 1);
    assert!(console.err.starts_with("KO: 'snep put' failed"));
}

#[test]
fn put_errors_are_reported_once() {
    let (mut host, mut console, _tag) = common::setup();
    let cases = [
        ("snep put", "KO: no token DSAP given"),
        ("snep put 64 32", "KO: invalid DSAP '64'"),
        ("snep put 4 -2", "KO: invalid SSAP '-2'"),
        ("snep put 4 32 [128,1,QUJD,,REVG]", "KO: invalid NDEF flags '0x80'"),
        ("snep put 4 32 [16,7,QUJD,,REVG]", "KO: invalid NDEF TNF '7'"),
        (
            "snep put 4 32 [16,1,QUJD,,REVG] x",
            "KO: invalid value 'x' for token NDEF record: expected '['",
        ),
        (
            "snep put 4 32 [0,1,QQ,,QQ][0,1,QQ,,QQ][0,1,QQ,,QQ][0,1,QQ,,QQ] [0,1,QQ,,QQ]",
            "KO: invalid characters near EOL: [0,1,QQ,,QQ]",
        ),
        ("snep get", "KO: invalid operation 'get'"),
        ("snep", "KO: no arguments given"),
    ];
    for (line, expected) in cases {
        console.err.clear();
        assert!(execute(line, &mut host, &mut console).is_err(), "{}", line);
        assert_eq!(console.errors(), vec![expected], "{}", line);
    }
    assert!(host.device.sent.is_empty());
}

#[test]
fn short_record_conflict_is_reported() {
    let (mut host, mut console, _tag) = common::setup();
    let payload = "QUFB".repeat(86);
    let line = format!("snep put 4 32 [16,1,VA,,{}]", payload);
    assert!(matches!(
        execute(&line, &mut host, &mut console),
        Err(Error::Failed { .. })
    ));
    assert!(console
        .err
        .contains("NDEF flag SR set for long payload of 258 bytes"));
}
