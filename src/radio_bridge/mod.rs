//! RadioBridge frame decoder
//!
//! Decodes the hex PDUs sent by RadioBridge wireless sensors. Every frame
//! starts with a two byte header (version/sequence nibbles and a message
//! type) followed by a payload whose layout depends on the message type.
//!
//! Decoding is a pure function of the input and the [`DecoderConfig`]: no
//! state is kept between frames, so one decoder can be shared freely between
//! threads.
//!
//! ```rust
//! use senet_rs::radio_bridge::{decode, MessageType};
//!
//! let result = decode("100200").unwrap();
//! assert_eq!(result.header.version, 1);
//! assert_eq!(result.header.message_type, MessageType::Tamper);
//! assert_eq!(result.fields.get("Tamper Event"), Some("Opened"));
//! assert!(result.alert);
//! ```

pub mod decoders;
pub mod header;
pub mod result;
pub mod types;

pub use decoders::{
    ErrorCodes, FirmwareVersion, LinkQualityReport, ResetReport, SensorStateReport,
    SupervisoryReport, TamperEvent, TamperReport, TemperatureReport,
};
pub use header::{parse_header, split_frame, FrameHeader};
pub use result::{DecodedFields, DecodedResult, Message, Report};
pub use types::{EventPayload, MessageType};

use crate::error::DecodeError;
use crate::util::hex::{decode_hex, format_hex_compact};
use serde::{Deserialize, Serialize};

/// Where the per-type payload starts within a frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PayloadAlignment {
    /// Payload starts after the message type byte (byte 2).
    #[default]
    Corrected,
    /// Payload starts at the message type byte (byte 1), shifting every
    /// byte-aligned field by one. Matches output of the first generation
    /// Senet integration.
    Legacy,
}

impl PayloadAlignment {
    fn offset(&self) -> usize {
        match self {
            PayloadAlignment::Corrected => 2,
            PayloadAlignment::Legacy => 1,
        }
    }
}

/// Decoder configuration. The default reads payloads from byte 2.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DecoderConfig {
    pub payload_alignment: PayloadAlignment,
}

impl DecoderConfig {
    /// Configuration reproducing the first generation payload alignment.
    pub fn legacy() -> Self {
        Self {
            payload_alignment: PayloadAlignment::Legacy,
        }
    }
}

/// Decoder for RadioBridge frames
#[derive(Debug, Clone, Copy, Default)]
pub struct RadioBridgeDecoder {
    config: DecoderConfig,
}

impl RadioBridgeDecoder {
    /// Create a decoder with the given configuration.
    pub fn new(config: DecoderConfig) -> Self {
        Self { config }
    }

    /// Configuration this decoder was built with.
    pub fn config(&self) -> &DecoderConfig {
        &self.config
    }

    /// Decode a hex encoded PDU.
    pub fn decode(&self, pdu: &str) -> Result<DecodedResult, DecodeError> {
        let frame = decode_hex(pdu)?;
        self.decode_bytes(&frame)
    }

    /// Decode a raw frame.
    pub fn decode_bytes(&self, frame: &[u8]) -> Result<DecodedResult, DecodeError> {
        let (header, _) = split_frame(frame)?;
        log::debug!(
            "Decoding {} frame v{} seq {}: {}",
            header.message_type,
            header.version,
            header.sequence,
            format_hex_compact(frame)
        );

        let payload = &frame[self.config.payload_alignment.offset()..];
        let message = decoders::dispatch(header.message_type, payload)?;
        Ok(DecodedResult::new(header, message))
    }
}

/// Decode a hex encoded PDU with the default configuration.
pub fn decode(pdu: &str) -> Result<DecodedResult, DecodeError> {
    RadioBridgeDecoder::default().decode(pdu)
}

/// Decode a raw frame with the default configuration.
pub fn decode_bytes(frame: &[u8]) -> Result<DecodedResult, DecodeError> {
    RadioBridgeDecoder::default().decode_bytes(frame)
}
