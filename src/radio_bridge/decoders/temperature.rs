//! Temperature/humidity message decoder
//!
//! Unlike the other message types this payload is treated as one big-endian
//! integer and the fields are cut out of its low 40 bits with fixed masks:
//!
//! ```text
//!  39      32 31 30    24 23  20 19  16 15      8 7    4 3    0
//! +----------+--+--------+------+------+---------+------+------+
//! |  event   |S | t.whole|t.frac|  --  | h.whole |h.frac|  --  |
//! +----------+--+--------+------+------+---------+------+------+
//! ```
//!
//! The fractional nibbles are decimal tenths. Values 10..=15 are not
//! rejected; they carry into the whole part (20 + 12/10 renders as 21.2).

use crate::constants::*;
use crate::radio_bridge::result::{DecodedFields, Report};
use crate::radio_bridge::types::EventPayload;
use nom::combinator::{rest, verify};
use nom::IResult;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TemperatureReport {
    pub event: EventPayload,
    /// Temperature in tenths of a degree Celsius
    pub temperature_tenths: i16,
    /// Relative humidity in tenths of a percent
    pub humidity_tenths: u16,
}

impl TemperatureReport {
    pub fn from_raw(raw: u64) -> Self {
        let event = ((raw & TEMP_EVENT_MASK) >> 32) as u8;
        let temp_whole = ((raw & TEMP_WHOLE_MASK) >> 24) as i16;
        let temp_frac = ((raw & TEMP_FRAC_MASK) >> 20) as i16;
        let negative = raw & TEMP_SIGN_MASK != 0;
        let hum_whole = ((raw & HUM_WHOLE_MASK) >> 8) as u16;
        let hum_frac = ((raw & HUM_FRAC_MASK) >> 4) as u16;

        let magnitude = temp_whole * 10 + temp_frac;
        Self {
            event: EventPayload::from_code(event),
            temperature_tenths: if negative { -magnitude } else { magnitude },
            humidity_tenths: hum_whole * 10 + hum_frac,
        }
    }

    pub fn temperature(&self) -> f32 {
        f32::from(self.temperature_tenths) / 10.0
    }

    pub fn humidity(&self) -> f32 {
        f32::from(self.humidity_tenths) / 10.0
    }
}

/// Render tenths with exactly one fractional digit.
fn format_tenths(tenths: i32) -> String {
    let sign = if tenths < 0 { "-" } else { "" };
    let abs = tenths.unsigned_abs();
    format!("{sign}{}.{}", abs / 10, abs % 10)
}

/// Low 40 bits of the payload read as a big-endian integer.
fn low_40_bits(bytes: &[u8]) -> u64 {
    let start = bytes.len().saturating_sub(TEMPERATURE_PAYLOAD_LEN);
    bytes[start..]
        .iter()
        .fold(0u64, |acc, &byte| (acc << 8) | u64::from(byte))
}

pub fn parse_temperature(input: &[u8]) -> IResult<&[u8], TemperatureReport> {
    let (input, bytes) = verify(rest, |b: &[u8]| b.len() >= TEMPERATURE_PAYLOAD_LEN)(input)?;
    Ok((input, TemperatureReport::from_raw(low_40_bits(bytes))))
}

impl Report for TemperatureReport {
    fn fields(&self) -> DecodedFields {
        let mut fields = DecodedFields::new();
        fields.insert("Event Payload", self.event.label());
        fields.insert(
            "Temperature",
            format_tenths(i32::from(self.temperature_tenths)),
        );
        fields.insert(
            "Relative Humidity",
            format_tenths(i32::from(self.humidity_tenths)),
        );
        fields
    }

    fn is_alert(&self) -> bool {
        self.event.is_alert()
    }
}
