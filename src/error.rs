//! # Error Handling
//!
//! This module defines the error types that can occur in the senet-rs crate:
//! [`DecodeError`] for the frame decoder and [`SenetError`] for the envelope
//! layer that feeds it.

use crate::radio_bridge::MessageType;
use crate::util::hex::HexError;
use thiserror::Error;

/// Represents the ways a single frame decode can fail.
///
/// Every variant is scoped to one decode call; none of them affect other
/// frames.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeError {
    /// The input is not a usable frame (bad hex or shorter than the header).
    #[error("Malformed frame: {0}")]
    MalformedFrame(String),

    /// The payload is shorter than the dispatched message type requires.
    #[error("Short payload for {message_type}: expected {expected} bytes, got {actual}")]
    ShortPayload {
        message_type: MessageType,
        expected: usize,
        actual: usize,
    },
}

impl From<HexError> for DecodeError {
    fn from(err: HexError) -> Self {
        DecodeError::MalformedFrame(err.to_string())
    }
}

/// Errors raised while handling Senet envelopes around the decoder.
#[derive(Debug, Error)]
pub enum SenetError {
    /// The envelope body is not valid JSON for a Senet packet.
    #[error("Envelope error: {0}")]
    Envelope(#[from] serde_json::Error),

    /// The envelope carried no PDU.
    #[error("Envelope for device {0} carries no PDU")]
    MissingPdu(String),

    /// The PDU inside the envelope failed to decode.
    #[error("Decode error: {0}")]
    Decode(#[from] DecodeError),

    /// Reading envelopes or writing records failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
