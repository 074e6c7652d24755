//! Senet network envelope handling
//!
//! Senet forwards each uplink as a JSON document carrying the hex PDU
//! together with device identity, gateway and radio metadata. This module
//! parses that envelope, runs the PDU through the RadioBridge decoder and
//! shapes the outcome into a [`SensorRecord`] ready for storage.

pub mod stream;

pub use stream::{process_stream, StreamSummary};

use crate::error::SenetError;
use crate::logging::log_debug;
use crate::radio_bridge::{DecodedResult, RadioBridgeDecoder};
use chrono::{DateTime, FixedOffset, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Uplink envelope as delivered by the Senet network
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SenetPacket {
    pub ack: bool,
    pub ack_dn_msg_id: i64,
    pub dev_class: String,
    pub dev_eui: String,
    pub gw_eui: String,
    pub join_id: i64,
    pub pdu: String,
    pub port: i64,
    pub seq_no: i64,
    pub txtime: String,
    pub channel: i64,
    pub datarate: i64,
    pub freq: f64,
    pub rssi: i64,
    pub snr: i64,
}

impl SenetPacket {
    pub fn from_json(body: &str) -> Result<Self, SenetError> {
        Ok(serde_json::from_str(body)?)
    }

    pub fn dev_eui(&self) -> &str {
        &self.dev_eui
    }

    pub fn pdu(&self) -> &str {
        &self.pdu
    }

    /// Transmit time, when `txtime` holds an RFC 3339 timestamp.
    pub fn tx_time(&self) -> Option<DateTime<FixedOffset>> {
        DateTime::parse_from_rfc3339(&self.txtime).ok()
    }
}

/// One decoded uplink, shaped for the sensor data store
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct SensorRecord {
    pub sensor_id: String,
    pub timestamp: String,
    pub data: BTreeMap<String, String>,
    pub has_alert: bool,
    pub alert_cleared: bool,
}

impl SensorRecord {
    pub fn new(packet: &SenetPacket, result: &DecodedResult) -> Self {
        let timestamp = match packet.tx_time() {
            Some(time) => time
                .with_timezone(&Utc)
                .to_rfc3339_opts(SecondsFormat::Millis, true),
            None => packet.txtime.clone(),
        };

        Self {
            sensor_id: packet.dev_eui.clone(),
            timestamp,
            data: result.fields.clone().into_inner(),
            has_alert: result.alert,
            alert_cleared: !result.alert,
        }
    }
}

/// Parse one envelope body and decode the PDU it carries.
pub fn process_envelope(
    decoder: &RadioBridgeDecoder,
    body: &str,
) -> Result<SensorRecord, SenetError> {
    let packet = SenetPacket::from_json(body)?;
    if packet.pdu.trim().is_empty() {
        return Err(SenetError::MissingPdu(packet.dev_eui));
    }

    log_debug(&format!("DevID: {} PDU: {}", packet.dev_eui(), packet.pdu()));
    let result = decoder.decode(packet.pdu().trim())?;
    Ok(SensorRecord::new(&packet, &result))
}
