//! Integration tests for the RadioBridge frame decoder

use senet_rs::radio_bridge::{FirmwareVersion, TamperEvent};
use senet_rs::{
    decode, decode_bytes, DecodeError, DecoderConfig, EventPayload, Message, MessageType,
    RadioBridgeDecoder,
};

#[test]
fn test_header_nibbles_for_every_message_type() {
    for code in ["00", "01", "02", "0D", "FB", "FC", "FD", "FF", "42"] {
        let pdu = format!("A7{code}0000000000000000000000");
        let result = decode(&pdu).unwrap();
        assert_eq!(result.header.version, 0xA);
        assert_eq!(result.header.sequence, 0x7);
    }
}

#[test]
fn test_reset_legacy_firmware() {
    let result = decode("10000A0301050001").unwrap();
    assert_eq!(result.header.message_type, MessageType::Reset);
    assert_eq!(result.fields.get("Sensor Type Code"), Some("10"));
    assert_eq!(result.fields.get("Hardware Version"), Some("3"));
    assert_eq!(result.fields.get("Firmware Version"), Some("1.5"));
    assert_eq!(result.fields.get("Reset Code"), Some("1"));
    assert!(result.alert);
}

#[test]
fn test_reset_extended_firmware() {
    let result = decode("10000A0381050001").unwrap();
    assert_eq!(result.fields.get("Firmware Version"), Some("0.0.5"));
    assert!(result.alert);

    match result.message {
        Message::Reset(report) => {
            assert_eq!(report.firmware_raw, 0x8105);
            assert_eq!(
                report.firmware,
                FirmwareVersion::Extended {
                    major: 0,
                    minor: 0,
                    build: 5
                }
            );
        }
        other => panic!("Expected reset message, got {other:?}"),
    }
}

#[test]
fn test_supervisory_error_flags() {
    let result = decode("1001070A5F00000000FFFF").unwrap();
    assert!(result.alert);
    assert_eq!(result.fields.get("Downlink Error"), Some("true"));
    assert_eq!(result.fields.get("Batter Low"), Some("true"));
    assert_eq!(result.fields.get("Radio Communication Error"), Some("true"));
    assert!(!result.fields.contains("Tamper Since Reset"));
    assert_eq!(result.fields.get("Current Tamper State"), Some("0"));
    assert_eq!(result.fields.get("Sensor State"), Some("A 0"));
    assert_eq!(result.fields.get("Battery Level"), Some("95"));
    assert_eq!(result.fields.get("Accumulation Count"), Some("-1"));
}

#[test]
fn test_supervisory_tamper_only() {
    let result = decode("100118005F000000000003").unwrap();
    assert!(!result.alert);
    assert_eq!(result.fields.get("Tamper Since Reset"), Some("true"));
    assert_eq!(result.fields.get("Current Tamper State"), Some("1"));
    assert!(!result.fields.contains("Batter Low"));
}

#[test]
fn test_tamper_opened_and_closed() {
    let opened = decode("100200").unwrap();
    assert_eq!(opened.fields.get("Tamper Event"), Some("Opened"));
    assert!(opened.alert);

    let closed = decode("100201").unwrap();
    assert_eq!(closed.fields.get("Tamper Event"), Some("Closed"));
    assert!(closed.alert);
    assert_eq!(
        closed.message,
        Message::Tamper(senet_rs::radio_bridge::TamperReport {
            event: TamperEvent::Closed
        })
    );
}

#[test]
fn test_temperature_sign_toggle() {
    let positive = decode("100D0032500000").unwrap();
    assert_eq!(positive.fields.get("Temperature"), Some("50.5"));
    assert_eq!(positive.fields.get("Relative Humidity"), Some("0.0"));
    assert_eq!(positive.fields.get("Event Payload"), Some("Periodic Report"));
    assert!(!positive.alert);

    let negative = decode("100D00B2500000").unwrap();
    assert_eq!(negative.fields.get("Temperature"), Some("-50.5"));
    assert_eq!(negative.fields.get("Relative Humidity"), Some("0.0"));
}

#[test]
fn test_temperature_event_raises_alert() {
    let result = decode("100D0519302D60").unwrap();
    assert_eq!(result.fields.get("Event Payload"), Some("Humidity Over Threshold"));
    assert!(result.alert);

    let unknown = decode("100D0919302D60").unwrap();
    assert_eq!(unknown.fields.get("Event Payload"), Some("Unknown Event"));
    assert!(unknown.alert);
    match unknown.message {
        Message::Temperature(report) => assert_eq!(report.event, EventPayload::Unknown(9)),
        other => panic!("Expected temperature message, got {other:?}"),
    }
}

#[test]
fn test_link_quality() {
    let result = decode("10FB02B509").unwrap();
    assert_eq!(result.fields.get("Sub-Band"), Some("2"));
    assert_eq!(result.fields.get("RSSI"), Some("181"));
    assert_eq!(result.fields.get("SNR"), Some("9"));
    assert!(!result.alert);
}

#[test]
fn test_rate_limit_exceeded() {
    let result = decode("10FC").unwrap();
    assert_eq!(result.fields.get("Rate Limit Exceeded"), Some("true"));
    assert_eq!(result.fields.len(), 1);
    assert!(result.alert);
}

#[test]
fn test_sensor_state() {
    let result = decode("10FD01").unwrap();
    assert_eq!(result.fields.get("Sensor State"), Some("1"));
    assert!(!result.alert);
}

#[test]
fn test_downlink_ack_has_no_fields() {
    let result = decode("10FF01").unwrap();
    assert_eq!(result.header.message_type, MessageType::DownlinkAck);
    assert!(result.fields.is_empty());
    assert!(!result.alert);
}

#[test]
fn test_unknown_message_type_is_not_an_error() {
    let result = decode("1003AABBCC").unwrap();
    assert_eq!(result.header.message_type, MessageType::Unknown(0x03));
    assert_eq!(result.message, Message::Unknown(0x03));
    assert!(result.fields.is_empty());
    assert!(!result.alert);
}

#[test]
fn test_short_payloads() {
    let cases = [
        ("10000A03010500", MessageType::Reset, 6, 5),
        ("1001070A5F000000", MessageType::Supervisory, 9, 6),
        ("1002", MessageType::Tamper, 1, 0),
        ("100D0019302D", MessageType::Temperature, 5, 4),
        ("10FB02B5", MessageType::LinkQuality, 3, 2),
        ("10FD", MessageType::SensorState, 1, 0),
    ];

    for (pdu, message_type, expected, actual) in cases {
        assert_eq!(
            decode(pdu).unwrap_err(),
            DecodeError::ShortPayload {
                message_type,
                expected,
                actual
            },
            "pdu {pdu}"
        );
    }
}

#[test]
fn test_malformed_frames() {
    for pdu in [
        "",
        "1",
        "10",
        "100",
        "zz00",
        "10 02 00",
        " 100200",
        "100200\n",
        " 100200\n",
    ] {
        assert!(
            matches!(decode(pdu), Err(DecodeError::MalformedFrame(_))),
            "pdu {pdu:?}"
        );
    }
}

#[test]
fn test_failed_frame_does_not_affect_next() {
    let decoder = RadioBridgeDecoder::default();
    assert!(decoder.decode("1000").is_err());
    let result = decoder.decode("100200").unwrap();
    assert_eq!(result.fields.get("Tamper Event"), Some("Opened"));
}

#[test]
fn test_legacy_alignment_shifts_payload() {
    let decoder = RadioBridgeDecoder::new(DecoderConfig::legacy());

    // the message type byte (0x02) is read as the tamper state
    let result = decoder.decode("100200").unwrap();
    assert_eq!(result.fields.get("Tamper Event"), Some("Closed"));

    // temperature fields come from the low 40 bits either way
    let legacy = decoder.decode("100D0019302D60").unwrap();
    let corrected = decode("100D0019302D60").unwrap();
    assert_eq!(legacy, corrected);
}

#[test]
fn test_decode_is_idempotent() {
    for pdu in ["10000A0381050001", "1001070A5F00000000FFFF", "100D0519302D60", "10FB02B509"] {
        assert_eq!(decode(pdu).unwrap(), decode(pdu).unwrap());
    }
}

mod properties {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn prop_decode_never_panics(frame in proptest::collection::vec(any::<u8>(), 0..24)) {
            let first = decode_bytes(&frame);
            let second = decode_bytes(&frame);
            prop_assert_eq!(first, second);
        }

        #[test]
        fn prop_header_nibbles(byte0 in any::<u8>(), payload in proptest::collection::vec(any::<u8>(), 9..12)) {
            let mut frame = vec![byte0, 0xFD];
            frame.extend_from_slice(&payload);
            let result = decode_bytes(&frame).unwrap();
            prop_assert_eq!(result.header.version, byte0 >> 4);
            prop_assert_eq!(result.header.sequence, byte0 & 0x0F);
        }
    }
}
