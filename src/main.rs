use anyhow::Context;
use clap::{Parser, Subcommand};
use senet_rs::logging::{init_logger_with_default, log_error};
use senet_rs::{log_info, process_stream, DecoderConfig, RadioBridgeDecoder};
use tokio::io::{self, BufReader};

#[derive(Parser)]
#[command(name = "senet-cli")]
#[command(about = "CLI tool for decoding RadioBridge frames from the Senet network")]
struct Cli {
    /// Read payloads starting at the message type byte, as the first
    /// generation integration did
    #[arg(long, global = true)]
    legacy_alignment: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Decode a single hex PDU
    Decode {
        pdu: String,
        /// Print the full result as JSON
        #[arg(long)]
        json: bool,
    },
    /// Decode Senet JSON envelopes, one per line, into storage records
    Envelope {
        /// Read envelopes from a file instead of stdin
        #[arg(short, long)]
        file: Option<std::path::PathBuf>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_logger_with_default("warn");

    let cli = Cli::parse();
    let config = if cli.legacy_alignment {
        DecoderConfig::legacy()
    } else {
        DecoderConfig::default()
    };
    let decoder = RadioBridgeDecoder::new(config);

    match cli.command {
        Commands::Decode { pdu, json } => {
            let result = match decoder.decode(pdu.trim()) {
                Ok(result) => result,
                Err(err) => {
                    log_error(&format!("Rejected PDU {pdu}: {err}"));
                    return Err(err).with_context(|| format!("failed to decode PDU {pdu}"));
                }
            };
            if json {
                println!("{}", serde_json::to_string_pretty(&result)?);
            } else {
                let header = &result.header;
                println!(
                    "{} (version {}, sequence {})",
                    header.message_type, header.version, header.sequence
                );
                for (name, value) in result.fields.iter() {
                    println!("  {name}: {value}");
                }
                println!("  Alert: {}", result.alert);
            }
        }
        Commands::Envelope { file } => {
            let summary = match file {
                Some(path) => {
                    let f = tokio::fs::File::open(&path)
                        .await
                        .with_context(|| format!("failed to open {}", path.display()))?;
                    process_stream(&decoder, BufReader::new(f), io::stdout()).await?
                }
                None => process_stream(&decoder, BufReader::new(io::stdin()), io::stdout()).await?,
            };
            log_info(&format!(
                "Decoded {} envelopes, {} failed",
                summary.decoded, summary.failed
            ));
        }
    }

    Ok(())
}
