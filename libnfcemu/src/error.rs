// libnfcemu/src/error.rs

use thiserror::Error;

/// Common error type. Every command failure is reported once through the
/// console as `KO: <display>`.
#[derive(Error, Debug)]
pub enum Error {
    #[error("no arguments given")]
    NoArguments,

    #[error("no operation given")]
    NoOperation,

    #[error("invalid operation '{0}'")]
    InvalidOperation(String),

    #[error("unknown command '{0}'")]
    UnknownCommand(String),

    #[error("no token {field} given")]
    MissingToken { field: &'static str },

    #[error("empty token {field}")]
    EmptyToken { field: &'static str },

    #[error("invalid value '{value}' for token {field}: {reason}")]
    InvalidValue {
        field: &'static str,
        value: String,
        reason: &'static str,
    },

    #[error("invalid {field} '{value}'")]
    InvalidSap { field: &'static str, value: i64 },

    #[error("{field} is 0")]
    ZeroSap { field: &'static str },

    #[error("unknown {field} {value}")]
    UnknownIndex { field: &'static str, value: i64 },

    #[error("no NDEF record given")]
    NoNdefRecord,

    #[error("invalid NDEF flags '{0:#04x}'")]
    ReservedFlags(u64),

    #[error("invalid NDEF TNF '{0}'")]
    InvalidTnf(u64),

    #[error("invalid characters near EOL: {0}")]
    TrailingCharacters(String),

    #[error("expected {min} to {max} NDEF records, got {actual}")]
    TooManyRecords {
        min: usize,
        max: usize,
        actual: usize,
    },

    #[error("NDEF flag SR set for long payload of {0} bytes")]
    ShortRecordTooLong(usize),

    #[error("base64 error: {0}")]
    Base64(#[from] base64::DecodeError),

    #[error("buffer overflow: need {needed} bytes, {available} available")]
    BufferOverflow { needed: usize, available: usize },

    #[error("{field} of {len} bytes exceeds {max}")]
    FieldTooLong {
        field: &'static str,
        len: usize,
        max: usize,
    },

    #[error("report formatting failed")]
    Fmt(#[from] std::fmt::Error),

    #[error("message truncated: {remaining} bytes left, {needed} needed")]
    MessageTruncated { remaining: usize, needed: usize },

    #[error("invalid packet length: expected {expected}, got {actual}")]
    InvalidLength { expected: usize, actual: usize },

    #[error("frame format error: {0}")]
    FrameFormat(String),

    #[error("no active remote endpoint")]
    NoActiveRemoteEndpoint,

    #[error("remote endpoint is not a tag")]
    NotATag,

    #[error("no active rf interface")]
    NoRfInterface,

    #[error("'{op}' failed: {source}")]
    Failed {
        op: &'static str,
        #[source]
        source: Box<Error>,
    },

    #[error("host error: {0}")]
    Host(String),
}

impl Error {
    /// Wrap a host-side failure with the name of the operation it broke.
    pub fn failed(op: &'static str, source: Error) -> Self {
        Error::Failed {
            op,
            source: Box::new(source),
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
