// fixtures.rs - commonly used record literals and their wire encodings

/// One well-known record: type "ABC", no id, payload "DEF", short record.
pub const ABC_DEF_RECORD: &str = "[16,1,QUJD,,REVG]";

pub fn abc_def_ndef() -> Vec<u8> {
    hex::decode("d10303414243444546").unwrap()
}

/// The same record without SR, so with a 4-byte payload length.
pub const ABC_DEF_LONG_RECORD: &str = "[0,1,QUJD,,REVG]";

pub fn abc_def_long_ndef() -> Vec<u8> {
    hex::decode("c10300000003414243444546").unwrap()
}

/// A URI record ("U", prefix 0x04 + "example.com") with id "u1", followed
/// by a MIME record "text/plain" carrying "hi".
pub const URI_AND_MIME_RECORDS: &str =
    "[16,1,VQ,dTE,BGV4YW1wbGUuY29t] [16,2,dGV4dC9wbGFpbg,,aGk]";

pub fn uri_and_mime_ndef() -> Vec<u8> {
    let mut msg = hex::decode("99010c02" /* MB|SR|IL, TNF 1 */).unwrap();
    msg.extend_from_slice(b"U");
    msg.extend_from_slice(b"u1");
    msg.push(0x04);
    msg.extend_from_slice(b"example.com");
    msg.extend_from_slice(&hex::decode("520a02").unwrap());
    msg.extend_from_slice(b"text/plain");
    msg.extend_from_slice(b"hi");
    msg
}
