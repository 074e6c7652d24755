//! Supervisory message decoder
//!
//! Periodic health report: error flags, sensor state, battery level and the
//! accumulated event count.

use crate::radio_bridge::result::{DecodedFields, Report};
use bitflags::bitflags;
use nom::number::complete::{be_i16, be_u32, be_u8};
use nom::IResult;
use serde::Serialize;

bitflags! {
    /// Error code byte of the supervisory message
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
    #[serde(transparent)]
    pub struct ErrorCodes: u8 {
        const RADIO_COMM_ERROR   = 0b0000_0001;
        const BATTERY_LOW        = 0b0000_0010;
        const DOWNLINK_ERROR     = 0b0000_0100;
        /// Tamper input is currently active
        const CURRENT_TAMPER     = 0b0000_1000;
        const TAMPER_SINCE_RESET = 0b0001_0000;
    }
}

impl ErrorCodes {
    /// Flags that make a supervisory message an alert
    pub const ALERTING: ErrorCodes = ErrorCodes::RADIO_COMM_ERROR
        .union(ErrorCodes::BATTERY_LOW)
        .union(ErrorCodes::DOWNLINK_ERROR);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SupervisoryReport {
    pub error_codes: ErrorCodes,
    pub sensor_state: u8,
    pub battery_level: u8,
    pub extended_sensor_state: u32,
    pub accumulation_count: i16,
}

pub fn parse_supervisory(input: &[u8]) -> IResult<&[u8], SupervisoryReport> {
    let (input, error_byte) = be_u8(input)?;
    let (input, sensor_state) = be_u8(input)?;
    let (input, battery_level) = be_u8(input)?;
    let (input, extended_sensor_state) = be_u32(input)?;
    let (input, accumulation_count) = be_i16(input)?;

    Ok((
        input,
        SupervisoryReport {
            error_codes: ErrorCodes::from_bits_retain(error_byte),
            sensor_state,
            battery_level,
            extended_sensor_state,
            accumulation_count,
        },
    ))
}

impl Report for SupervisoryReport {
    fn fields(&self) -> DecodedFields {
        let mut fields = DecodedFields::new();
        let flags = self.error_codes;

        if flags.contains(ErrorCodes::TAMPER_SINCE_RESET) {
            fields.insert("Tamper Since Reset", "true");
        }
        if flags.contains(ErrorCodes::DOWNLINK_ERROR) {
            fields.insert("Downlink Error", "true");
        }
        // Field name kept as deployed consumers read it
        if flags.contains(ErrorCodes::BATTERY_LOW) {
            fields.insert("Batter Low", "true");
        }
        if flags.contains(ErrorCodes::RADIO_COMM_ERROR) {
            fields.insert("Radio Communication Error", "true");
        }

        fields.insert(
            "Sensor State",
            format!("{:X} {:X}", self.sensor_state, self.extended_sensor_state),
        );
        fields.insert("Battery Level", self.battery_level.to_string());
        fields.insert("Accumulation Count", self.accumulation_count.to_string());
        fields.insert(
            "Current Tamper State",
            u8::from(flags.contains(ErrorCodes::CURRENT_TAMPER)).to_string(),
        );
        fields
    }

    fn is_alert(&self) -> bool {
        self.error_codes.intersects(ErrorCodes::ALERTING)
    }
}
