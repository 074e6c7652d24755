//! # senet-rs - Decoding RadioBridge Sensor Frames from the Senet Network
//!
//! The senet-rs crate decodes the telemetry frames sent by RadioBridge
//! wireless sensors (temperature/humidity, tamper, supervisory and link
//! reports) as they are delivered by the Senet LoRaWAN network.
//!
//! ## Features
//!
//! - Parse the two byte frame header (protocol version, sequence number, message type)
//! - Decode every RadioBridge message type into a normalized field map plus an alert flag
//! - Structured, typed reports alongside the field map
//! - Typed errors for malformed frames and short payloads; a bad frame never aborts the caller
//! - Parse Senet JSON envelopes and shape decoded frames into storage records
//! - Support for logging and error handling
//!
//! ## Usage
//!
//! ```rust
//! use senet_rs::{decode, MessageType};
//!
//! let result = decode("100D0019302D60").unwrap();
//! assert_eq!(result.header.message_type, MessageType::Temperature);
//! assert_eq!(result.fields.get("Temperature"), Some("25.3"));
//! assert_eq!(result.fields.get("Relative Humidity"), Some("45.6"));
//! assert!(!result.alert);
//! ```

pub mod constants;
pub mod error;
pub mod logging;
pub mod radio_bridge;
pub mod senet;
pub mod util;

pub use crate::error::{DecodeError, SenetError};
pub use crate::logging::{init_logger, log_info};

// Core decoder types
pub use radio_bridge::{
    decode, decode_bytes, DecodedFields, DecodedResult, DecoderConfig, EventPayload,
    FrameHeader, Message, MessageType, PayloadAlignment, RadioBridgeDecoder, Report,
};

// Senet envelope layer
pub use senet::{process_envelope, process_stream, SenetPacket, SensorRecord, StreamSummary};
