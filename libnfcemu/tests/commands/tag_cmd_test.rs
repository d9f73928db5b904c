#[path = "../common/mod.rs"]
mod common;

use libnfcemu::test_support::{P2P_RE, TAG_RE};
use libnfcemu::{Error, execute, report_ndef_msg};

#[test]
fn set_clear_format_cycle() -> anyhow::Result<()> {
    let (mut host, mut console, tag) = common::setup();

    execute(
        &format!("tag set {} {}", TAG_RE, common::fixtures::URI_AND_MIME_RECORDS),
        &mut host,
        &mut console,
    )?;
    assert_eq!(tag.data(), common::fixtures::uri_and_mime_ndef());

    execute(&format!("tag clear {}", TAG_RE), &mut host, &mut console)?;
    assert!(tag.data().is_empty());

    execute(&format!("tag format {}", TAG_RE), &mut host, &mut console)?;
    assert_eq!(tag.formats(), 1);
    assert!(console.err.is_empty());
    Ok(())
}

#[test]
fn set_long_record() -> anyhow::Result<()> {
    let (mut host, mut console, tag) = common::setup();
    execute(
        &format!("tag set {} {}", TAG_RE, common::fixtures::ABC_DEF_LONG_RECORD),
        &mut host,
        &mut console,
    )?;
    assert_eq!(tag.data(), common::fixtures::abc_def_long_ndef());

    let mut report = String::new();
    report_ndef_msg(&tag.data(), &mut report)?;
    assert_eq!(
        report,
        "[{\"tnf\": 1, \"type\": \"QUJD\", \"id\": \"\", \"payload\": \"REVG\"}]\r\n"
    );
    Ok(())
}

#[test]
fn peer_endpoint_is_not_a_tag() {
    let (mut host, mut console, tag) = common::setup();
    for op in ["set", "clear", "format"] {
        let line = format!("tag {} {} {}", op, P2P_RE, common::fixtures::ABC_DEF_RECORD);
        console.err.clear();
        assert!(matches!(
            execute(&line, &mut host, &mut console),
            Err(Error::NotATag)
        ));
        assert_eq!(console.errors(), vec!["KO: remote endpoint is not a tag"]);
    }
    assert_eq!(tag.writes(), 0);
}

#[test]
fn set_errors_leave_tag_untouched() {
    let (mut host, mut console, tag) = common::setup();
    let five = common::fixtures::ABC_DEF_RECORD.repeat(5);
    for line in [
        format!("tag set {}", TAG_RE),
        format!("tag set {} {}", TAG_RE, five),
        format!("tag set {} [16,1,Q!JD,,REVG]", TAG_RE),
        "tag set 2 [16,1,QUJD,,REVG]".to_string(),
        "tag lock 1".to_string(),
    ] {
        assert!(execute(&line, &mut host, &mut console).is_err(), "{}", line);
    }
    assert_eq!(console.errors().len(), 5);
    assert_eq!(tag.writes(), 0);
}
