//! Common command implementation
//!
//! Builds the canonical record for one of the four common PCM encodings.

use anyhow::{Context, Result};
use audiodesc_spec::{CommonPcmFormat, StreamDescription};
use colored::Colorize;
use std::process::ExitCode;

use super::json_output::{error_codes, CommandOutput, CommonResult, JsonError};
use super::print_json;

/// Run the common command
///
/// # Arguments
/// * `kind` - Encoding name (float32, float64, int16, int32)
/// * `sample_rate` - Frames per second
/// * `channels` - Channels per frame
/// * `non_interleaved` - Build the one-buffer-per-channel variant
/// * `json_output` - Whether to output machine-readable JSON
///
/// # Returns
/// Exit code: 0 on success, 1 on error
pub fn run(
    kind: &str,
    sample_rate: f64,
    channels: u32,
    non_interleaved: bool,
    json_output: bool,
) -> Result<ExitCode> {
    if json_output {
        run_json(kind, sample_rate, channels, non_interleaved)
    } else {
        run_human(kind, sample_rate, channels, non_interleaved)
    }
}

/// Run common with human-readable (colored) output
fn run_human(kind: &str, sample_rate: f64, channels: u32, non_interleaved: bool) -> Result<ExitCode> {
    let kind: CommonPcmFormat = kind
        .parse()
        .with_context(|| format!("Invalid --kind: {}", kind))?;
    let asbd = StreamDescription::common(kind, sample_rate, channels, !non_interleaved);

    println!("{} {}", "Canonical format:".cyan().bold(), kind);
    println!("  {}", asbd.description().bold());
    println!("  {:<20} 0x{:08x}", "format flags", asbd.format_flags);
    println!("  {:<20} {}", "bytes per packet", asbd.bytes_per_packet);
    println!("  {:<20} {}", "frames per packet", asbd.frames_per_packet);
    println!("  {:<20} {}", "bytes per frame", asbd.bytes_per_frame);
    println!("  {:<20} {}", "bits per channel", asbd.bits_per_channel);

    if channels == 0 {
        println!(
            "{} {}",
            "!".yellow(),
            "zero channels: the record describes no audio".yellow()
        );
    }

    Ok(ExitCode::SUCCESS)
}

/// Run common with machine-readable JSON output
fn run_json(kind: &str, sample_rate: f64, channels: u32, non_interleaved: bool) -> Result<ExitCode> {
    let kind: CommonPcmFormat = match kind.parse() {
        Ok(kind) => kind,
        Err(e) => {
            let error = JsonError::new(error_codes::UNKNOWN_COMMON_FORMAT, format!("{}", e));
            let output: CommandOutput<CommonResult> = CommandOutput::failure(vec![error]);
            print_json(&output)?;
            return Ok(ExitCode::from(1));
        }
    };

    let asbd = StreamDescription::common(kind, sample_rate, channels, !non_interleaved);
    let result = CommonResult {
        description: asbd.description(),
        format: asbd,
    };
    print_json(&CommandOutput::success(result))?;

    Ok(ExitCode::SUCCESS)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_common_every_kind() {
        for kind in CommonPcmFormat::all() {
            let code = run(kind.as_str(), 44100.0, 2, false, true).unwrap();
            assert_eq!(code, ExitCode::SUCCESS);
        }
    }

    #[test]
    fn test_common_human_non_interleaved() {
        let code = run("Float32", 48000.0, 4, true, false).unwrap();
        assert_eq!(code, ExitCode::SUCCESS);
    }

    #[test]
    fn test_common_unknown_kind() {
        let code = run("int24", 44100.0, 2, false, true).unwrap();
        assert_eq!(code, ExitCode::from(1));

        let err = run("int24", 44100.0, 2, false, false).unwrap_err();
        assert!(err.to_string().contains("int24"));
    }
}
