//! Reset message decoder
//!
//! Sent once after power-up or a device reset. Carries the sensor type,
//! hardware and firmware versions and the reset reason code.

use crate::constants::*;
use crate::radio_bridge::result::{DecodedFields, Report};
use nom::number::complete::{be_i16, be_u16, be_u8};
use nom::IResult;
use serde::Serialize;
use std::fmt;

/// Firmware version as reported in the reset message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum FirmwareVersion {
    /// Firmware before 2.0: `major.minor`
    Legacy { major: u8, minor: u8 },
    /// Firmware 2.0 and later: `major.minor.build`
    Extended { major: u8, minor: u8, build: u8 },
}

impl FirmwareVersion {
    pub fn from_raw(raw: u16) -> Self {
        if raw & FIRMWARE_FORMAT_FLAG == 0 {
            FirmwareVersion::Legacy {
                major: ((raw & FIRMWARE_LEGACY_MAJOR_MASK) >> 8) as u8,
                minor: (raw & FIRMWARE_LEGACY_MINOR_MASK) as u8,
            }
        } else {
            FirmwareVersion::Extended {
                major: ((raw & FIRMWARE_MAJOR_MASK) >> 10) as u8,
                minor: ((raw & FIRMWARE_MINOR_MASK) >> 5) as u8,
                build: (raw & FIRMWARE_BUILD_MASK) as u8,
            }
        }
    }
}

impl fmt::Display for FirmwareVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FirmwareVersion::Legacy { major, minor } => write!(f, "{major}.{minor}"),
            FirmwareVersion::Extended {
                major,
                minor,
                build,
            } => write!(f, "{major}.{minor}.{build}"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ResetReport {
    pub sensor_type_code: u8,
    pub hardware_version: u8,
    pub firmware_raw: u16,
    pub firmware: FirmwareVersion,
    pub reset_code: i16,
}

pub fn parse_reset(input: &[u8]) -> IResult<&[u8], ResetReport> {
    let (input, sensor_type_code) = be_u8(input)?;
    let (input, hardware_version) = be_u8(input)?;
    let (input, firmware_raw) = be_u16(input)?;
    let (input, reset_code) = be_i16(input)?;

    Ok((
        input,
        ResetReport {
            sensor_type_code,
            hardware_version,
            firmware_raw,
            firmware: FirmwareVersion::from_raw(firmware_raw),
            reset_code,
        },
    ))
}

impl Report for ResetReport {
    fn fields(&self) -> DecodedFields {
        let mut fields = DecodedFields::new();
        fields.insert("Sensor Type Code", self.sensor_type_code.to_string());
        fields.insert("Hardware Version", self.hardware_version.to_string());
        fields.insert("Firmware Version", self.firmware.to_string());
        fields.insert("Reset Code", self.reset_code.to_string());
        fields
    }

    fn is_alert(&self) -> bool {
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_legacy_firmware() {
        assert_eq!(
            FirmwareVersion::from_raw(0x0105),
            FirmwareVersion::Legacy { major: 1, minor: 5 }
        );
        assert_eq!(FirmwareVersion::from_raw(0x0105).to_string(), "1.5");
    }

    #[test]
    fn test_extended_firmware() {
        // 1 00010 00011 00100 -> 2.3.4
        assert_eq!(FirmwareVersion::from_raw(0x8864).to_string(), "2.3.4");
        assert_eq!(FirmwareVersion::from_raw(0x8105).to_string(), "0.0.5");
    }

    #[test]
    fn test_extended_minor_mask_skips_bit_8() {
        // bit 8 set on its own is not part of the minor number
        assert_eq!(
            FirmwareVersion::from_raw(0x8100),
            FirmwareVersion::Extended {
                major: 0,
                minor: 0,
                build: 0
            }
        );
        // 0x02E0 >> 5 == 0b10111
        assert_eq!(
            FirmwareVersion::from_raw(0x83E0),
            FirmwareVersion::Extended {
                major: 0,
                minor: 0x17,
                build: 0
            }
        );
    }

    #[test]
    fn test_parse_reset() {
        let payload = [0x0A, 0x03, 0x01, 0x05, 0xFF, 0xFE];
        let (rest, report) = parse_reset(&payload).unwrap();
        assert!(rest.is_empty());
        assert_eq!(report.sensor_type_code, 10);
        assert_eq!(report.hardware_version, 3);
        assert_eq!(report.reset_code, -2);

        let fields = report.fields();
        assert_eq!(fields.get("Sensor Type Code"), Some("10"));
        assert_eq!(fields.get("Hardware Version"), Some("3"));
        assert_eq!(fields.get("Firmware Version"), Some("1.5"));
        assert_eq!(fields.get("Reset Code"), Some("-2"));
        assert!(report.is_alert());
    }
}
