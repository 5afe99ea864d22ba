// Copyright 2026 abhirupbanerjee
// Licensed under the Apache License, Version 2.0

//! Numeric codec: hex ⇄ field element, fixed-width big-endian bytes, and
//! unpadded URL-safe base64.
//!
//! # Hex format
//!
//! [`hex_to_scalar`] accepts `0x`-prefixed or raw hex, either case, odd or
//! even length. Signs, whitespace and separators are rejected.
//!
//! # Byte order
//!
//! [`int_to_fixed_bytes`] is big-endian, zero-padded on the left. A value
//! that does not fit is an error, never truncated.

use std::fmt;

use base64::engine::general_purpose::{URL_SAFE, URL_SAFE_NO_PAD};
use base64::Engine;
use num_bigint::BigUint;

use crate::error::CodecError;

/// Byte width of one encoded field element (256-bit field).
pub const SCALAR_BYTES: usize = 32;

/// One field element, kept at arbitrary precision until it is encoded.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Scalar(pub BigUint);

impl Scalar {
    pub fn from_hex(s: &str) -> Result<Self, CodecError> {
        hex_to_scalar(s)
    }

    /// Big-endian, exactly [`SCALAR_BYTES`] long.
    pub fn to_bytes32(&self) -> Result<[u8; SCALAR_BYTES], CodecError> {
        let mut out = [0u8; SCALAR_BYTES];
        out.copy_from_slice(&int_to_fixed_bytes(self, SCALAR_BYTES)?);
        Ok(out)
    }

    pub fn from_be_bytes(bytes: &[u8]) -> Self {
        Scalar(BigUint::from_bytes_be(bytes))
    }
}

impl From<u64> for Scalar {
    fn from(v: u64) -> Self {
        Scalar(BigUint::from(v))
    }
}

/// Decimal, as integer literals appear in generated Pact code.
impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

pub fn hex_to_scalar(s: &str) -> Result<Scalar, CodecError> {
    let digits = s
        .strip_prefix("0x")
        .or_else(|| s.strip_prefix("0X"))
        .unwrap_or(s);
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(CodecError::MalformedHex(s.to_string()));
    }
    let decoded = if digits.len() % 2 == 1 {
        hex::decode(format!("0{digits}"))
    } else {
        hex::decode(digits)
    };
    let bytes = decoded.map_err(|_| CodecError::MalformedHex(s.to_string()))?;
    Ok(Scalar::from_be_bytes(&bytes))
}

pub fn int_to_fixed_bytes(v: &Scalar, width: usize) -> Result<Vec<u8>, CodecError> {
    let needed = v.0.bits().div_ceil(8) as usize;
    if needed > width {
        return Err(CodecError::ValueTooLarge { needed, width });
    }
    let mut out = vec![0u8; width];
    if needed > 0 {
        let bytes = v.0.to_bytes_be();
        out[width - bytes.len()..].copy_from_slice(&bytes);
    }
    Ok(out)
}

/// Lowercase hex, no prefix.
pub fn bytes_to_hex(bytes: &[u8]) -> String {
    hex::encode(bytes)
}

pub fn b64_url_encode(bytes: &[u8]) -> String {
    URL_SAFE_NO_PAD.encode(bytes)
}

/// Restores the padding stripped by [`b64_url_encode`] from `len % 4`
/// before decoding.
pub fn b64_url_decode(data: &str) -> Result<Vec<u8>, CodecError> {
    let padding = match data.len() % 4 {
        0 => "",
        2 => "==",
        3 => "=",
        _ => return Err(CodecError::InvalidBase64Length(data.len())),
    };
    Ok(URL_SAFE.decode(format!("{data}{padding}"))?)
}
