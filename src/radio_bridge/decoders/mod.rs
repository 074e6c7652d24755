//! Per message type decoders
//!
//! Each decoder is a `nom` parser over the payload bytes of its message type
//! that produces a typed report. [`dispatch`] selects the decoder for a
//! message type and turns parser failures into [`DecodeError::ShortPayload`].

pub mod link_quality;
pub mod reset;
pub mod sensor_state;
pub mod supervisory;
pub mod tamper;
pub mod temperature;

pub use link_quality::LinkQualityReport;
pub use reset::{FirmwareVersion, ResetReport};
pub use sensor_state::SensorStateReport;
pub use supervisory::{ErrorCodes, SupervisoryReport};
pub use tamper::{TamperEvent, TamperReport};
pub use temperature::TemperatureReport;

use super::result::Message;
use super::types::MessageType;
use crate::constants::*;
use crate::error::DecodeError;
use nom::IResult;

/// Run a payload parser after checking the minimum length for its type.
///
/// The length check makes the reported `expected` size exact; the parser is
/// still run on complete input, so any error it raises is also reported as a
/// short payload rather than a panic.
fn run_parser<'a, O, F>(
    message_type: MessageType,
    min_len: usize,
    payload: &'a [u8],
    mut parser: F,
) -> Result<O, DecodeError>
where
    F: FnMut(&'a [u8]) -> IResult<&'a [u8], O>,
{
    let short = || DecodeError::ShortPayload {
        message_type,
        expected: min_len,
        actual: payload.len(),
    };

    if payload.len() < min_len {
        return Err(short());
    }

    match parser(payload) {
        Ok((remaining, report)) => {
            if !remaining.is_empty() {
                log::debug!(
                    "{} decoder left {} trailing bytes unparsed",
                    message_type,
                    remaining.len()
                );
            }
            Ok(report)
        }
        Err(_) => Err(short()),
    }
}

/// Decode `payload` as a message of type `message_type`.
pub fn dispatch(message_type: MessageType, payload: &[u8]) -> Result<Message, DecodeError> {
    let message = match message_type {
        MessageType::Reset => Message::Reset(run_parser(
            message_type,
            RESET_PAYLOAD_LEN,
            payload,
            reset::parse_reset,
        )?),
        MessageType::Supervisory => Message::Supervisory(run_parser(
            message_type,
            SUPERVISORY_PAYLOAD_LEN,
            payload,
            supervisory::parse_supervisory,
        )?),
        MessageType::Tamper => Message::Tamper(run_parser(
            message_type,
            TAMPER_PAYLOAD_LEN,
            payload,
            tamper::parse_tamper,
        )?),
        MessageType::Temperature => Message::Temperature(run_parser(
            message_type,
            TEMPERATURE_PAYLOAD_LEN,
            payload,
            temperature::parse_temperature,
        )?),
        MessageType::LinkQuality => Message::LinkQuality(run_parser(
            message_type,
            LINK_QUALITY_PAYLOAD_LEN,
            payload,
            link_quality::parse_link_quality,
        )?),
        MessageType::RateLimitExceeded => Message::RateLimitExceeded,
        MessageType::SensorState => Message::SensorState(run_parser(
            message_type,
            SENSOR_STATE_PAYLOAD_LEN,
            payload,
            sensor_state::parse_sensor_state,
        )?),
        MessageType::DownlinkAck => Message::DownlinkAck,
        MessageType::Unknown(code) => {
            log::debug!("No decoder for message type 0x{code:02X}");
            Message::Unknown(code)
        }
    };

    Ok(message)
}
