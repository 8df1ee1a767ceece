use anyhow::Context;
use clap::{Parser, Subcommand, ValueEnum};
use endian_codec::{ByteOrder, ScalarKind};
use tracing::{debug, info};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

mod render;
mod value;

use value::ScalarValue;

#[derive(Parser, Debug)]
#[command(name = "endian-inspect", author, version, about, long_about = None)]
struct Cli {
    /// Output format
    #[arg(long, env = "ENDIAN_INSPECT_FORMAT", value_enum, default_value_t = OutputFormat::Text, global = true)]
    format: OutputFormat,

    /// Subcommand/tool to run
    #[command(subcommand)]
    command: Commands,
}

#[derive(Copy, Clone, Debug, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Print a value's bit pattern and its bytes in native, little- and big-endian order
    Show {
        /// Scalar kind (u16, i16, u32, i32, f32, u64, i64, f64)
        kind: ScalarKind,
        /// Value; integers may use 0x/0o/0b prefixes
        #[arg(allow_hyphen_values = true)]
        value: String,
    },
    /// Like `show`, but takes the raw bit pattern in hex (useful for exact NaN payloads)
    Bits {
        /// Scalar kind (u16, i16, u32, i32, f32, u64, i64, f64)
        kind: ScalarKind,
        /// Bit pattern in hex, with or without a 0x prefix
        bits: String,
    },
    /// Run the named convert_to_* and read_* operations for one byte order
    Convert {
        /// Scalar kind (u16, i16, u32, i32, f32, u64, i64, f64)
        kind: ScalarKind,
        /// Value; integers may use 0x/0o/0b prefixes
        #[arg(allow_hyphen_values = true)]
        value: String,
        /// Target byte order (le, be, little, big, network)
        #[arg(long, short)]
        order: ByteOrder,
    },
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        // Standard logger, configured via the RUST_LOG env variable
        .with(tracing_subscriber::fmt::layer().with_filter(EnvFilter::from_default_env()))
        .init();

    let cli = Cli::parse();
    info!(host_order = %ByteOrder::NATIVE, "Starting endian-inspect");

    let output = match cli.command {
        Commands::Show { kind, value } => {
            let parsed = ScalarValue::parse(kind, &value)
                .with_context(|| format!("Failed to parse `{value}` as {kind}"))?;
            debug!(%kind, input = %value, parsed = %parsed, "Parsed scalar");
            match cli.format {
                OutputFormat::Text => render::layout_text(&parsed),
                OutputFormat::Json => serde_json::to_string_pretty(&render::layout_json(&parsed))?,
            }
        }
        Commands::Bits { kind, bits } => {
            let parsed = ScalarValue::from_bit_pattern(kind, &bits)
                .with_context(|| format!("Failed to read `{bits}` as a {kind} bit pattern"))?;
            debug!(%kind, input = %bits, parsed = %parsed, "Parsed bit pattern");
            match cli.format {
                OutputFormat::Text => render::layout_text(&parsed),
                OutputFormat::Json => serde_json::to_string_pretty(&render::layout_json(&parsed))?,
            }
        }
        Commands::Convert { kind, value, order } => {
            let parsed = ScalarValue::parse(kind, &value)
                .with_context(|| format!("Failed to parse `{value}` as {kind}"))?;
            debug!(%kind, %order, input = %value, parsed = %parsed, "Converting scalar");
            match cli.format {
                OutputFormat::Text => render::conversion_text(&parsed, order),
                OutputFormat::Json => {
                    serde_json::to_string_pretty(&render::conversion_json(&parsed, order))?
                }
            }
        }
    };

    println!("{output}");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_convert_subcommand() {
        let cli = Cli::try_parse_from([
            "endian-inspect",
            "--format",
            "json",
            "convert",
            "s32",
            "-5",
            "--order",
            "network",
        ])
        .unwrap();
        assert!(matches!(cli.format, OutputFormat::Json));
        let Commands::Convert { kind, value, order } = cli.command else {
            panic!("expected the convert subcommand");
        };
        assert_eq!(kind, ScalarKind::I32);
        assert_eq!(value, "-5");
        assert_eq!(order, ByteOrder::Big);
    }

    #[test]
    fn parses_bits_subcommand_with_format_from_env() {
        // SAFETY: no other test reads or writes this variable.
        unsafe { std::env::set_var("ENDIAN_INSPECT_FORMAT", "json") };
        let parsed = Cli::try_parse_from(["endian-inspect", "bits", "f32", "7fc00000"]);
        unsafe { std::env::remove_var("ENDIAN_INSPECT_FORMAT") };

        let cli = parsed.unwrap();
        assert!(matches!(cli.format, OutputFormat::Json));
        let Commands::Bits { kind, bits } = cli.command else {
            panic!("expected the bits subcommand");
        };
        assert_eq!(kind, ScalarKind::F32);
        let value = ScalarValue::from_bit_pattern(kind, &bits).unwrap();
        assert_eq!(value.bits(), 0x7FC0_0000);
    }

    #[test]
    fn rejects_single_byte_kinds() {
        let err = Cli::try_parse_from(["endian-inspect", "show", "u8", "1"]).unwrap_err();
        assert!(err.to_string().contains("single-byte"));
    }
}
