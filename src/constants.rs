//! RadioBridge Protocol Constants
//!
//! Message type codes, payload lengths and bit masks used by the frame
//! decoder.

/// Size of the common frame header (version/sequence byte + message type byte)
pub const FRAME_HEADER_LEN: usize = 2;

/// Message type codes
pub const MSG_TYPE_RESET: u8 = 0x00;
pub const MSG_TYPE_SUPERVISORY: u8 = 0x01;
pub const MSG_TYPE_TAMPER: u8 = 0x02;
pub const MSG_TYPE_TEMPERATURE: u8 = 0x0D;
pub const MSG_TYPE_LINK_QUALITY: u8 = 0xFB;
pub const MSG_TYPE_RATE_LIMIT_EXCEEDED: u8 = 0xFC;
pub const MSG_TYPE_SENSOR_STATE: u8 = 0xFD;
pub const MSG_TYPE_DOWNLINK_ACK: u8 = 0xFF;

/// Minimum payload lengths per message type
pub const RESET_PAYLOAD_LEN: usize = 6;
pub const SUPERVISORY_PAYLOAD_LEN: usize = 9;
pub const TAMPER_PAYLOAD_LEN: usize = 1;
pub const TEMPERATURE_PAYLOAD_LEN: usize = 5;
pub const LINK_QUALITY_PAYLOAD_LEN: usize = 3;
pub const SENSOR_STATE_PAYLOAD_LEN: usize = 1;

/// Firmware version format flag (bit 7 of the first firmware byte)
pub const FIRMWARE_FORMAT_FLAG: u16 = 0x8000;

/// Legacy firmware `major.minor` masks
pub const FIRMWARE_LEGACY_MAJOR_MASK: u16 = 0x7F00;
pub const FIRMWARE_LEGACY_MINOR_MASK: u16 = 0x00FF;

/// Firmware `major.minor.build` masks. The minor mask skips bit 8.
pub const FIRMWARE_MAJOR_MASK: u16 = 0x7C00;
pub const FIRMWARE_MINOR_MASK: u16 = 0x02E0;
pub const FIRMWARE_BUILD_MASK: u16 = 0x001F;

/// Temperature/humidity bit masks over the low 40 bits of the payload
pub const TEMP_EVENT_MASK: u64 = 0xFF_0000_0000;
pub const TEMP_SIGN_MASK: u64 = 0x00_8000_0000;
pub const TEMP_WHOLE_MASK: u64 = 0x00_7F00_0000;
pub const TEMP_FRAC_MASK: u64 = 0x00_00F0_0000;
pub const HUM_WHOLE_MASK: u64 = 0x00_0000_FF00;
pub const HUM_FRAC_MASK: u64 = 0x00_0000_00F0;
