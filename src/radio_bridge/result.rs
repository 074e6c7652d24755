//! Decoded frame results
//!
//! A decode produces both the display-oriented field map (field name to
//! rendered string, the shape downstream storage expects) and a structured
//! [`Message`] carrying the same values with their real types.

use super::decoders::{
    LinkQualityReport, ResetReport, SensorStateReport, SupervisoryReport, TamperReport,
    TemperatureReport,
};
use super::header::FrameHeader;
use serde::Serialize;
use std::collections::BTreeMap;

/// Field name to rendered value. Keys are unique; iteration is sorted by name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct DecodedFields(BTreeMap<String, String>);

impl DecodedFields {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn insert(&mut self, name: &str, value: impl Into<String>) {
        self.0.insert(name.to_string(), value.into());
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.0.get(name).map(String::as_str)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.0.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn into_inner(self) -> BTreeMap<String, String> {
        self.0
    }
}

impl<'a> IntoIterator for &'a DecodedFields {
    type Item = (&'a String, &'a String);
    type IntoIter = std::collections::btree_map::Iter<'a, String, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// Behaviour shared by every per-type report.
pub trait Report {
    /// Render the report into the normalized field map.
    fn fields(&self) -> DecodedFields;

    /// Whether the report needs operator attention.
    fn is_alert(&self) -> bool;
}

/// Structured form of a decoded message
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum Message {
    Reset(ResetReport),
    Supervisory(SupervisoryReport),
    Tamper(TamperReport),
    Temperature(TemperatureReport),
    LinkQuality(LinkQualityReport),
    RateLimitExceeded,
    SensorState(SensorStateReport),
    /// Recognized, but carries nothing to decode
    DownlinkAck,
    Unknown(u8),
}

impl Report for Message {
    fn fields(&self) -> DecodedFields {
        match self {
            Message::Reset(report) => report.fields(),
            Message::Supervisory(report) => report.fields(),
            Message::Tamper(report) => report.fields(),
            Message::Temperature(report) => report.fields(),
            Message::LinkQuality(report) => report.fields(),
            Message::RateLimitExceeded => {
                let mut fields = DecodedFields::new();
                fields.insert("Rate Limit Exceeded", "true");
                fields
            }
            Message::SensorState(report) => report.fields(),
            Message::DownlinkAck | Message::Unknown(_) => DecodedFields::new(),
        }
    }

    fn is_alert(&self) -> bool {
        match self {
            Message::Reset(report) => report.is_alert(),
            Message::Supervisory(report) => report.is_alert(),
            Message::Tamper(report) => report.is_alert(),
            Message::Temperature(report) => report.is_alert(),
            Message::LinkQuality(report) => report.is_alert(),
            Message::RateLimitExceeded => true,
            Message::SensorState(report) => report.is_alert(),
            Message::DownlinkAck | Message::Unknown(_) => false,
        }
    }
}

/// Everything produced by one decode call.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DecodedResult {
    pub header: FrameHeader,
    pub message: Message,
    pub fields: DecodedFields,
    pub alert: bool,
}

impl DecodedResult {
    pub(crate) fn new(header: FrameHeader, message: Message) -> Self {
        let fields = message.fields();
        let alert = message.is_alert();
        Self {
            header,
            message,
            fields,
            alert,
        }
    }

    pub fn has_alert(&self) -> bool {
        self.alert
    }

    pub fn data(&self) -> &DecodedFields {
        &self.fields
    }
}
