//! Line oriented envelope processing
//!
//! Reads one Senet JSON envelope per line and writes one JSON
//! [`SensorRecord`](super::SensorRecord) per successfully decoded line. A bad
//! envelope or PDU is logged and counted; it never stops the stream.

use super::process_envelope;
use crate::error::SenetError;
use crate::logging::log_warn;
use crate::radio_bridge::RadioBridgeDecoder;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};

/// Outcome counters for one stream run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StreamSummary {
    pub decoded: usize,
    pub failed: usize,
}

/// Decode every envelope read from `reader`, writing records to `writer`.
///
/// Only I/O failures end the run early.
pub async fn process_stream<R, W>(
    decoder: &RadioBridgeDecoder,
    reader: R,
    mut writer: W,
) -> Result<StreamSummary, SenetError>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let mut summary = StreamSummary::default();
    let mut lines = reader.lines();
    let mut line_no = 0usize;

    while let Some(line) = lines.next_line().await? {
        line_no += 1;
        let body = line.trim();
        if body.is_empty() {
            continue;
        }

        match process_envelope(decoder, body) {
            Ok(record) => {
                let mut json = serde_json::to_vec(&record)?;
                json.push(b'\n');
                writer.write_all(&json).await?;
                summary.decoded += 1;
            }
            Err(e) => {
                log_warn(&format!("Skipping envelope on line {line_no}: {e}"));
                summary.failed += 1;
            }
        }
    }

    writer.flush().await?;
    Ok(summary)
}
