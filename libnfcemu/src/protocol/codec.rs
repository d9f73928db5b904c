// libnfcemu/src/protocol/codec.rs

//! base64url transcoding for the variable-length fields typed on a command
//! line. Both directions write into caller-provided buffers and never past
//! their end.

use base64::Engine as _;
use base64::alphabet;
use base64::engine::{DecodePaddingMode, GeneralPurpose, GeneralPurposeConfig};

use crate::{Error, Result};

/// URL-safe alphabet; decoding accepts text with or without padding,
/// encoding emits none.
const BASE64URL: GeneralPurpose = GeneralPurpose::new(
    &alphabet::URL_SAFE,
    GeneralPurposeConfig::new()
        .with_encode_padding(false)
        .with_decode_padding_mode(DecodePaddingMode::Indifferent),
);

/// Decode base64url `text` into `out`, returning the number of bytes
/// written.
pub fn decode_base64(text: &str, out: &mut [u8]) -> Result<usize> {
    BASE64URL
        .decode_slice(text.as_bytes(), out)
        .map_err(|e| match e {
            base64::DecodeSliceError::DecodeError(e) => Error::Base64(e),
            base64::DecodeSliceError::OutputSliceTooSmall => Error::BufferOverflow {
                needed: decoded_len_hint(text),
                available: out.len(),
            },
        })
}

/// Encode `data` as base64url into `out` and return the encoded text.
pub fn encode_base64<'a>(data: &[u8], out: &'a mut [u8]) -> Result<&'a str> {
    let n = BASE64URL
        .encode_slice(data, out)
        .map_err(|_| Error::BufferOverflow {
            needed: crate::constants::base64_encoded_len(data.len()),
            available: out.len(),
        })?;
    // The base64url alphabet is pure ASCII.
    std::str::from_utf8(&out[..n]).map_err(|e| Error::FrameFormat(e.to_string()))
}

fn decoded_len_hint(text: &str) -> usize {
    let digits = text.trim_end_matches('=').len();
    digits * 3 / 4
}
