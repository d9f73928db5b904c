#[path = "../common/mod.rs"]
mod common;

use libnfcemu::constants::{NDEF_FLAG_IL, NDEF_FLAG_MB, NDEF_FLAG_ME, NDEF_FLAG_SR};
use libnfcemu::protocol::{
    NdefRecordSpec, NdefRecords, build_ndef_msg, encode_base64, report_ndef_msg,
};
use libnfcemu::{Error, Tnf};
use proptest::prelude::*;

fn spec<'a>(flags: u8, tnf: Tnf, type_: &'a str, id: &'a str, payload: &'a str) -> NdefRecordSpec<'a> {
    NdefRecordSpec {
        flags,
        tnf,
        type_,
        id,
        payload,
    }
}

#[test]
fn build_matches_fixtures() -> anyhow::Result<()> {
    let mut buf = [0u8; 128];

    let n = build_ndef_msg(&[spec(NDEF_FLAG_SR, Tnf::WellKnown, "QUJD", "", "REVG")], &mut buf)?;
    assert_eq!(&buf[..n], &common::fixtures::abc_def_ndef()[..]);

    let n = build_ndef_msg(&[spec(0, Tnf::WellKnown, "QUJD", "", "REVG")], &mut buf)?;
    assert_eq!(&buf[..n], &common::fixtures::abc_def_long_ndef()[..]);

    let n = build_ndef_msg(
        &[
            spec(NDEF_FLAG_SR, Tnf::WellKnown, "VQ", "dTE", "BGV4YW1wbGUuY29t"),
            spec(NDEF_FLAG_SR, Tnf::MediaType, "dGV4dC9wbGFpbg", "", "aGk"),
        ],
        &mut buf,
    )?;
    assert_eq!(&buf[..n], &common::fixtures::uri_and_mime_ndef()[..]);
    Ok(())
}

#[test]
fn report_matches_fixtures() -> anyhow::Result<()> {
    let mut out = String::new();
    report_ndef_msg(&common::fixtures::uri_and_mime_ndef(), &mut out)?;
    assert_eq!(
        out,
        "[{\"tnf\": 1, \"type\": \"VQ\", \"id\": \"dTE\", \"payload\": \"BGV4YW1wbGUuY29t\"},\
         {\"tnf\": 2, \"type\": \"dGV4dC9wbGFpbg\", \"id\": \"\", \"payload\": \"aGk\"}]\r\n"
    );

    // long record form reports the same as the short one
    let mut short = String::new();
    let mut long = String::new();
    report_ndef_msg(&common::fixtures::abc_def_ndef(), &mut short)?;
    report_ndef_msg(&common::fixtures::abc_def_long_ndef(), &mut long)?;
    assert_eq!(short, long);
    Ok(())
}

#[test]
fn report_rejects_truncation() {
    let full = common::fixtures::uri_and_mime_ndef();
    // cut inside the second header, then inside the second payload
    for cut in [full.len() - 14, full.len() - 1] {
        let mut out = String::new();
        assert!(matches!(
            report_ndef_msg(&full[..cut], &mut out),
            Err(Error::MessageTruncated { .. })
        ));
        assert!(out.is_empty());
    }
}

#[test]
fn report_rejects_oversized_field() {
    // 600-byte payload does not fit the report's field buffer
    let mut msg = vec![0xc5, 0x00, 0x00, 0x00, 0x02, 0x58];
    msg.extend(std::iter::repeat(0x55).take(600));
    let mut out = String::new();
    assert!(matches!(
        report_ndef_msg(&msg, &mut out),
        Err(Error::BufferOverflow { .. })
    ));
}

fn field() -> impl Strategy<Value = Vec<u8>> {
    prop::collection::vec(any::<u8>(), 0..40)
}

proptest! {
    #[test]
    fn build_then_iterate_agrees(
        records in prop::collection::vec((any::<bool>(), 0u8..7, field(), field(), field()), 1..5)
    ) {
        let texts: Vec<[String; 3]> = records
            .iter()
            .map(|(_, _, t, i, p)| {
                let enc = |data: &[u8]| {
                    let mut out = [0u8; 64];
                    encode_base64(data, &mut out).unwrap().to_string()
                };
                [enc(&t[..]), enc(&i[..]), enc(&p[..])]
            })
            .collect();
        let specs: Vec<NdefRecordSpec<'_>> = records
            .iter()
            .zip(&texts)
            .map(|((short, tnf, ..), [t, i, p])| {
                spec(
                    if *short { NDEF_FLAG_SR } else { 0 },
                    Tnf::from_u8(*tnf).unwrap(),
                    t,
                    i,
                    p,
                )
            })
            .collect();

        let mut buf = [0u8; 1024];
        let n = build_ndef_msg(&specs, &mut buf).unwrap();
        let views = NdefRecords::new(&buf[..n])
            .collect::<libnfcemu::Result<Vec<_>>>()
            .unwrap();

        prop_assert_eq!(views.len(), records.len());
        let last = records.len() - 1;
        for (k, (view, (short, tnf, t, i, p))) in views.iter().zip(&records).enumerate() {
            let flags = view.header.flag_bits();
            prop_assert_eq!(flags & NDEF_FLAG_MB != 0, k == 0);
            prop_assert_eq!(flags & NDEF_FLAG_ME != 0, k == last);
            prop_assert_eq!(flags & NDEF_FLAG_IL != 0, !i.is_empty());
            prop_assert_eq!(flags & NDEF_FLAG_SR != 0, *short);
            prop_assert_eq!(view.header.tnf_bits(), *tnf);
            prop_assert_eq!(view.type_, &t[..]);
            prop_assert_eq!(view.id, &i[..]);
            prop_assert_eq!(view.payload, &p[..]);
        }
    }
}
