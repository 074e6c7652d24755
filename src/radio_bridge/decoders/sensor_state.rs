//! Sensor state (test) message decoder

use crate::radio_bridge::result::{DecodedFields, Report};
use nom::number::complete::be_u8;
use nom::IResult;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SensorStateReport {
    pub state: u8,
}

pub fn parse_sensor_state(input: &[u8]) -> IResult<&[u8], SensorStateReport> {
    let (input, state) = be_u8(input)?;
    Ok((input, SensorStateReport { state }))
}

impl Report for SensorStateReport {
    fn fields(&self) -> DecodedFields {
        let mut fields = DecodedFields::new();
        fields.insert("Sensor State", self.state.to_string());
        fields
    }

    fn is_alert(&self) -> bool {
        false
    }
}
