//! Link quality message decoder
//!
//! RSSI and SNR are reported as the raw byte the device sent; no sign
//! conversion is applied.

use crate::radio_bridge::result::{DecodedFields, Report};
use nom::number::complete::be_u8;
use nom::sequence::tuple;
use nom::IResult;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LinkQualityReport {
    pub sub_band: u8,
    pub rssi: u8,
    pub snr: u8,
}

pub fn parse_link_quality(input: &[u8]) -> IResult<&[u8], LinkQualityReport> {
    let (input, (sub_band, rssi, snr)) = tuple((be_u8, be_u8, be_u8))(input)?;
    Ok((input, LinkQualityReport { sub_band, rssi, snr }))
}

impl Report for LinkQualityReport {
    fn fields(&self) -> DecodedFields {
        let mut fields = DecodedFields::new();
        fields.insert("Sub-Band", self.sub_band.to_string());
        fields.insert("RSSI", self.rssi.to_string());
        fields.insert("SNR", self.snr.to_string());
        fields
    }

    fn is_alert(&self) -> bool {
        false
    }
}
