#![no_main]

use libfuzzer_sys::fuzz_target;
use senet_rs::radio_bridge::{DecoderConfig, RadioBridgeDecoder};
use senet_rs::{decode, decode_bytes};

fuzz_target!(|data: &[u8]| {
    // Every input must come back as a result or a typed error
    let _ = decode_bytes(data);
    let _ = RadioBridgeDecoder::new(DecoderConfig::legacy()).decode_bytes(data);

    // Same bytes through the hex path
    if let Ok(text) = std::str::from_utf8(data) {
        let _ = decode(text);
    }
});
