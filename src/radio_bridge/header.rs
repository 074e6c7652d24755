//! Frame header parsing
//!
//! Byte 0 packs the protocol version (high nibble) and the per-device
//! sequence number (low nibble); byte 1 is the message type.

use super::types::MessageType;
use crate::constants::FRAME_HEADER_LEN;
use crate::error::DecodeError;
use nom::bits::{bits, complete::take as take_bits};
use nom::number::complete::be_u8;
use nom::sequence::tuple;
use nom::IResult;
use serde::{Deserialize, Serialize};

/// The common two byte header of every frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FrameHeader {
    pub version: u8,
    pub sequence: u8,
    pub message_type: MessageType,
}

fn version_and_sequence(input: &[u8]) -> IResult<&[u8], (u8, u8)> {
    bits::<_, _, nom::error::Error<(&[u8], usize)>, _, _>(tuple((
        take_bits(4usize),
        take_bits(4usize),
    )))(input)
}

/// Uses `nom` to parse the frame header from a byte slice.
pub fn parse_header(input: &[u8]) -> IResult<&[u8], FrameHeader> {
    let (input, (version, sequence)) = version_and_sequence(input)?;
    let (input, code) = be_u8(input)?;
    Ok((
        input,
        FrameHeader {
            version,
            sequence,
            message_type: MessageType::from_code(code),
        },
    ))
}

/// Splits a raw frame into its header and the bytes following the header.
pub fn split_frame(frame: &[u8]) -> Result<(FrameHeader, &[u8]), DecodeError> {
    if frame.len() < FRAME_HEADER_LEN {
        return Err(DecodeError::MalformedFrame(format!(
            "frame has {} bytes, header needs {}",
            frame.len(),
            FRAME_HEADER_LEN
        )));
    }

    parse_header(frame)
        .map(|(rest, header)| (header, rest))
        .map_err(|e| DecodeError::MalformedFrame(format!("header: {e}")))
}
