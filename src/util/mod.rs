//! # Utility Modules
//!
//! Common helpers shared by the decoder and the envelope layer.

pub mod hex;

pub use hex::{decode_hex, encode_hex, format_hex_compact, hex_to_bytes, HexError};
