//! # Hex Encoding/Decoding Utilities
//!
//! Senet delivers every PDU as a hex string, so the decoder and its callers
//! share these helpers for turning frames into bytes and back, and for
//! rendering frames compactly in log output.
//!
//! ## Usage
//!
//! ```rust
//! use senet_rs::util::hex::{decode_hex, encode_hex, format_hex_compact};
//!
//! let data = decode_hex("100D00").unwrap();
//! assert_eq!(data, vec![0x10, 0x0D, 0x00]);
//! assert_eq!(encode_hex(&data), "100d00");
//! assert_eq!(format_hex_compact(&data), "10 0d 00");
//! ```

use thiserror::Error;

/// Errors that can occur during hex operations
#[derive(Error, Debug, Clone, PartialEq)]
pub enum HexError {
    #[error("Invalid hex character {0:?} at index {1}")]
    InvalidCharacter(char, usize),

    #[error("Odd number of hex characters: {0}")]
    OddLength(usize),

    #[error("Empty hex string")]
    EmptyString,

    #[error("Invalid hex string length")]
    InvalidLength,
}

impl From<hex::FromHexError> for HexError {
    fn from(err: hex::FromHexError) -> Self {
        match err {
            hex::FromHexError::InvalidHexCharacter { c, index } => {
                HexError::InvalidCharacter(c, index)
            }
            // length is checked before decoding, so these carry no usable count
            hex::FromHexError::OddLength | hex::FromHexError::InvalidStringLength => {
                HexError::InvalidLength
            }
        }
    }
}

/// Encode bytes to lowercase hex string
pub fn encode_hex(data: &[u8]) -> String {
    hex::encode(data)
}

/// Decode hex string to bytes
///
/// Accepts both uppercase and lowercase hex characters. Anything that is
/// not a hex digit is rejected, whitespace included.
pub fn decode_hex(hex_str: &str) -> Result<Vec<u8>, HexError> {
    if hex_str.is_empty() {
        return Err(HexError::EmptyString);
    }

    if hex_str.len() % 2 != 0 {
        return Err(HexError::OddLength(hex_str.len()));
    }

    Ok(hex::decode(hex_str)?)
}

/// Format hex data for compact display (useful for logs)
///
/// Formats data as "10 0d 00" with spaces between bytes.
pub fn format_hex_compact(data: &[u8]) -> String {
    data.iter()
        .map(|b| format!("{:02x}", b))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Helper for creating test data from hex strings
///
/// Panics on invalid hex (intended for test code only).
pub fn hex_to_bytes(hex: &str) -> Vec<u8> {
    decode_hex(hex).expect("Invalid hex in test data")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_mixed_case() {
        assert_eq!(decode_hex("0dFb").unwrap(), vec![0x0D, 0xFB]);
    }

    #[test]
    fn test_decode_rejects_surrounding_whitespace() {
        assert_eq!(decode_hex("  1002"), Err(HexError::InvalidCharacter(' ', 0)));
        assert_eq!(decode_hex("1002\n"), Err(HexError::OddLength(5)));
        assert_eq!(decode_hex(" 10020"), Err(HexError::InvalidCharacter(' ', 0)));
    }

    #[test]
    fn test_library_length_errors_have_no_fake_count() {
        assert_eq!(
            HexError::from(hex::FromHexError::OddLength),
            HexError::InvalidLength
        );
        assert_eq!(
            HexError::from(hex::FromHexError::InvalidStringLength),
            HexError::InvalidLength
        );
    }

    #[test]
    fn test_format_compact() {
        let data = vec![0x10, 0x0D, 0x00, 0x19];
        assert_eq!(format_hex_compact(&data), "10 0d 00 19");
    }

    #[test]
    fn test_hex_to_bytes() {
        assert_eq!(hex_to_bytes("10FD01"), vec![0x10, 0xFD, 0x01]);
    }

    #[test]
    fn test_errors() {
        assert_eq!(decode_hex(""), Err(HexError::EmptyString));
        assert_eq!(decode_hex("   "), Err(HexError::OddLength(3)));
        assert_eq!(decode_hex("100"), Err(HexError::OddLength(3)));
        assert_eq!(decode_hex("10GG"), Err(HexError::InvalidCharacter('G', 2)));
        assert!(decode_hex("10 02").is_err());
    }
}
