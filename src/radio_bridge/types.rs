//! Message type and event code enumerations for RadioBridge frames

use crate::constants::*;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Message types carried in byte 1 of every frame
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MessageType {
    Reset,
    Supervisory,
    Tamper,
    Temperature,
    LinkQuality,
    RateLimitExceeded,
    SensorState,
    DownlinkAck,
    /// Any code outside the recognized set
    Unknown(u8),
}

impl MessageType {
    pub fn from_code(code: u8) -> Self {
        match code {
            MSG_TYPE_RESET => Self::Reset,
            MSG_TYPE_SUPERVISORY => Self::Supervisory,
            MSG_TYPE_TAMPER => Self::Tamper,
            MSG_TYPE_TEMPERATURE => Self::Temperature,
            MSG_TYPE_LINK_QUALITY => Self::LinkQuality,
            MSG_TYPE_RATE_LIMIT_EXCEEDED => Self::RateLimitExceeded,
            MSG_TYPE_SENSOR_STATE => Self::SensorState,
            MSG_TYPE_DOWNLINK_ACK => Self::DownlinkAck,
            other => Self::Unknown(other),
        }
    }

    pub fn code(&self) -> u8 {
        match self {
            Self::Reset => MSG_TYPE_RESET,
            Self::Supervisory => MSG_TYPE_SUPERVISORY,
            Self::Tamper => MSG_TYPE_TAMPER,
            Self::Temperature => MSG_TYPE_TEMPERATURE,
            Self::LinkQuality => MSG_TYPE_LINK_QUALITY,
            Self::RateLimitExceeded => MSG_TYPE_RATE_LIMIT_EXCEEDED,
            Self::SensorState => MSG_TYPE_SENSOR_STATE,
            Self::DownlinkAck => MSG_TYPE_DOWNLINK_ACK,
            Self::Unknown(code) => *code,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Reset => "Reset",
            Self::Supervisory => "Supervisory",
            Self::Tamper => "Tamper",
            Self::Temperature => "Temperature",
            Self::LinkQuality => "Link Quality",
            Self::RateLimitExceeded => "Rate Limit Exceeded",
            Self::SensorState => "Sensor State",
            Self::DownlinkAck => "Downlink Ack",
            Self::Unknown(_) => "Unknown Message",
        }
    }

    pub fn is_known(&self) -> bool {
        !matches!(self, Self::Unknown(_))
    }
}

impl From<u8> for MessageType {
    fn from(code: u8) -> Self {
        Self::from_code(code)
    }
}

impl fmt::Display for MessageType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Event codes reported by the temperature/humidity sensor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EventPayload {
    PeriodicReport,
    TemperatureOverThreshold,
    TemperatureUnderThreshold,
    TemperatureIncrease,
    TemperatureDecrease,
    HumidityOverThreshold,
    HumidityUnderThreshold,
    HumidityIncrease,
    HumidityDecrease,
    Unknown(u8),
}

impl EventPayload {
    pub fn from_code(code: u8) -> Self {
        match code {
            0 => Self::PeriodicReport,
            1 => Self::TemperatureOverThreshold,
            2 => Self::TemperatureUnderThreshold,
            3 => Self::TemperatureIncrease,
            4 => Self::TemperatureDecrease,
            5 => Self::HumidityOverThreshold,
            6 => Self::HumidityUnderThreshold,
            7 => Self::HumidityIncrease,
            8 => Self::HumidityDecrease,
            other => Self::Unknown(other),
        }
    }

    pub fn code(&self) -> u8 {
        match self {
            Self::PeriodicReport => 0,
            Self::TemperatureOverThreshold => 1,
            Self::TemperatureUnderThreshold => 2,
            Self::TemperatureIncrease => 3,
            Self::TemperatureDecrease => 4,
            Self::HumidityOverThreshold => 5,
            Self::HumidityUnderThreshold => 6,
            Self::HumidityIncrease => 7,
            Self::HumidityDecrease => 8,
            Self::Unknown(code) => *code,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::PeriodicReport => "Periodic Report",
            Self::TemperatureOverThreshold => "Temperature Over Threshold",
            Self::TemperatureUnderThreshold => "Temperature Under Threshold",
            Self::TemperatureIncrease => "Temperature Increase",
            Self::TemperatureDecrease => "Temperature Decrease",
            Self::HumidityOverThreshold => "Humidity Over Threshold",
            Self::HumidityUnderThreshold => "Humidity Under Threshold",
            Self::HumidityIncrease => "Humidity Increase",
            Self::HumidityDecrease => "Humidity Decrease",
            Self::Unknown(_) => "Unknown Event",
        }
    }

    /// Anything other than the periodic report is an alert condition.
    pub fn is_alert(&self) -> bool {
        *self != Self::PeriodicReport
    }
}

impl From<u8> for EventPayload {
    fn from(code: u8) -> Self {
        Self::from_code(code)
    }
}

impl fmt::Display for EventPayload {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
