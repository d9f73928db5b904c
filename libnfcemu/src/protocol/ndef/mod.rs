// libnfcemu/src/protocol/ndef/mod.rs

//! NDEF message building and reporting.

pub mod builder;
pub mod header;
pub mod report;

pub use builder::build_ndef_msg;
pub use header::RecordHeader;
pub use report::report_ndef_msg;

use crate::constants::MAX_NDEF_RECORDS;
use crate::types::Tnf;
use crate::{Error, Result};

/// One record to encode, as typed on a command line. `type_`, `id` and
/// `payload` are base64url text borrowed from the line; `id` may be empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct NdefRecordSpec<'a> {
    /// Caller flag bits (CF/SR only).
    pub flags: u8,
    pub tnf: Tnf,
    pub type_: &'a str,
    pub id: &'a str,
    pub payload: &'a str,
}

/// Inline list of up to `MAX_NDEF_RECORDS` record specs.
#[derive(Debug, Clone, Copy, Default)]
pub struct NdefRecordList<'a> {
    records: [NdefRecordSpec<'a>; MAX_NDEF_RECORDS],
    len: usize,
}

impl<'a> NdefRecordList<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of slots.
    pub fn capacity(&self) -> usize {
        MAX_NDEF_RECORDS
    }

    pub fn push(&mut self, record: NdefRecordSpec<'a>) -> Result<()> {
        if self.len == MAX_NDEF_RECORDS {
            return Err(Error::TooManyRecords {
                min: 0,
                max: MAX_NDEF_RECORDS,
                actual: self.len + 1,
            });
        }
        self.records[self.len] = record;
        self.len += 1;
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn as_slice(&self) -> &[NdefRecordSpec<'a>] {
        &self.records[..self.len]
    }
}

/// A record borrowed from a binary NDEF message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NdefRecordView<'a> {
    pub header: RecordHeader,
    pub type_: &'a [u8],
    pub id: &'a [u8],
    pub payload: &'a [u8],
}

/// Iterator over the records of a binary NDEF message, in wire order.
/// Yields an error and stops when a header or record runs past the end.
pub struct NdefRecords<'a> {
    rest: &'a [u8],
    failed: bool,
}

impl<'a> NdefRecords<'a> {
    pub fn new(msg: &'a [u8]) -> Self {
        Self {
            rest: msg,
            failed: false,
        }
    }

    fn next_record(&mut self) -> Result<NdefRecordView<'a>> {
        let header = RecordHeader::parse(self.rest)?;
        let total = header.record_len();
        if self.rest.len() < total {
            return Err(Error::MessageTruncated {
                remaining: self.rest.len(),
                needed: total,
            });
        }

        let (record, rest) = self.rest.split_at(total);
        let type_start = header.header_len();
        let id_start = type_start + usize::from(header.type_len);
        let payload_start = id_start + usize::from(header.id_len);
        self.rest = rest;

        Ok(NdefRecordView {
            header,
            type_: &record[type_start..id_start],
            id: &record[id_start..payload_start],
            payload: &record[payload_start..],
        })
    }
}

impl<'a> Iterator for NdefRecords<'a> {
    type Item = Result<NdefRecordView<'a>>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed || self.rest.is_empty() {
            return None;
        }
        let item = self.next_record();
        self.failed = item.is_err();
        Some(item)
    }
}
