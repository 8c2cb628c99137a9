//! audiodesc CLI - Inspect audio stream descriptors from the command line
//!
//! This binary describes and classifies format descriptors, channel layouts,
//! and time stamps stored as JSON documents or raw platform records.

use clap::{Parser, Subcommand};
use std::process::ExitCode;

use audiodesc_cli::commands;

/// audiodesc - Audio Stream Descriptor Inspector
#[derive(Parser)]
#[command(name = "audiodesc")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Describe and classify a stream format descriptor
    Format {
        /// Path to the format file (.json, or raw .bin/.asbd)
        #[arg(short, long)]
        input: String,

        /// Decode the file as a raw 40-byte record whatever its extension
        #[arg(long)]
        raw: bool,

        /// Output machine-readable JSON diagnostics (no colored output)
        #[arg(long)]
        json: bool,
    },

    /// Print the canonical record for a common PCM format
    Common {
        /// Sample encoding
        #[arg(short, long, value_parser = ["float32", "float64", "int16", "int32"])]
        kind: String,

        /// Sample rate in Hz
        #[arg(short, long, default_value_t = 44100.0)]
        sample_rate: f64,

        /// Channels per frame
        #[arg(short, long, default_value_t = 2)]
        channels: u32,

        /// Build the non-interleaved (one buffer per channel) variant
        #[arg(long)]
        non_interleaved: bool,

        /// Output machine-readable JSON diagnostics (no colored output)
        #[arg(long)]
        json: bool,
    },

    /// Describe a channel layout
    Layout {
        /// Path to the layout file (.json, or raw .bin)
        #[arg(short, long)]
        input: String,

        /// Output machine-readable JSON diagnostics (no colored output)
        #[arg(long)]
        json: bool,
    },

    /// Describe an audio time stamp
    Timestamp {
        /// Path to the time stamp file (.json, or raw .bin)
        #[arg(short, long)]
        input: String,

        /// Output machine-readable JSON diagnostics (no colored output)
        #[arg(long)]
        json: bool,
    },

    /// Compare two stream format descriptors for equality and congruence
    Compare {
        /// Path to the first format
        #[arg(short, long)]
        a: String,

        /// Path to the second format
        #[arg(short, long)]
        b: String,

        /// Output machine-readable JSON diagnostics (no colored output)
        #[arg(long)]
        json: bool,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Format { input, raw, json } => commands::format::run(&input, raw, json),
        Commands::Common {
            kind,
            sample_rate,
            channels,
            non_interleaved,
            json,
        } => commands::common::run(&kind, sample_rate, channels, non_interleaved, json),
        Commands::Layout { input, json } => commands::layout::run(&input, json),
        Commands::Timestamp { input, json } => commands::timestamp::run(&input, json),
        Commands::Compare { a, b, json } => commands::compare::run(&a, &b, json),
    };

    match result {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{}: {:#}", colored::Colorize::red("error"), e);
            ExitCode::from(1)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parses_format() {
        let cli = Cli::try_parse_from(["audiodesc", "format", "--input", "f.bin", "--raw"]).unwrap();
        match cli.command {
            Commands::Format { input, raw, json } => {
                assert_eq!(input, "f.bin");
                assert!(raw);
                assert!(!json);
            }
            _ => panic!("expected format command"),
        }
    }

    #[test]
    fn test_cli_parses_common_with_defaults() {
        let cli = Cli::try_parse_from(["audiodesc", "common", "--kind", "int16"]).unwrap();
        match cli.command {
            Commands::Common {
                kind,
                sample_rate,
                channels,
                non_interleaved,
                json,
            } => {
                assert_eq!(kind, "int16");
                assert_eq!(sample_rate, 44100.0);
                assert_eq!(channels, 2);
                assert!(!non_interleaved);
                assert!(!json);
            }
            _ => panic!("expected common command"),
        }
    }

    #[test]
    fn test_cli_rejects_unknown_common_kind() {
        assert!(Cli::try_parse_from(["audiodesc", "common", "--kind", "int24"]).is_err());
    }

    #[test]
    fn test_cli_parses_compare_with_json() {
        let cli =
            Cli::try_parse_from(["audiodesc", "compare", "--a", "a.json", "--b", "b.json", "--json"])
                .unwrap();
        match cli.command {
            Commands::Compare { a, b, json } => {
                assert_eq!(a, "a.json");
                assert_eq!(b, "b.json");
                assert!(json);
            }
            _ => panic!("expected compare command"),
        }
    }

    #[test]
    fn test_cli_requires_a_and_b_for_compare() {
        let err = Cli::try_parse_from(["audiodesc", "compare", "--a", "a.json"])
            .err()
            .unwrap();
        assert!(err.to_string().contains("-b"));
    }

    #[test]
    fn test_cli_parses_layout_and_timestamp() {
        let cli = Cli::try_parse_from(["audiodesc", "layout", "-i", "l.json"]).unwrap();
        assert!(matches!(cli.command, Commands::Layout { json: false, .. }));

        let cli = Cli::try_parse_from(["audiodesc", "timestamp", "-i", "t.bin", "--json"]).unwrap();
        assert!(matches!(cli.command, Commands::Timestamp { json: true, .. }));
    }
}
