//! Tamper message decoder

use crate::radio_bridge::result::{DecodedFields, Report};
use nom::number::complete::be_u8;
use nom::IResult;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum TamperEvent {
    Opened,
    Closed,
}

impl TamperEvent {
    pub fn label(&self) -> &'static str {
        match self {
            TamperEvent::Opened => "Opened",
            TamperEvent::Closed => "Closed",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TamperReport {
    pub event: TamperEvent,
}

pub fn parse_tamper(input: &[u8]) -> IResult<&[u8], TamperReport> {
    let (input, state) = be_u8(input)?;
    let event = if state == 0x00 {
        TamperEvent::Opened
    } else {
        TamperEvent::Closed
    };
    Ok((input, TamperReport { event }))
}

impl Report for TamperReport {
    fn fields(&self) -> DecodedFields {
        let mut fields = DecodedFields::new();
        fields.insert("Tamper Event", self.event.label());
        fields
    }

    fn is_alert(&self) -> bool {
        true
    }
}
