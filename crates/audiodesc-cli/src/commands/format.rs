//! Format command implementation
//!
//! Loads a stream format descriptor and prints its description, the result
//! of every classification query, and the common PCM format it matches.

use anyhow::{Context, Result};
use audiodesc_spec::names::format_id_description;
use audiodesc_spec::StreamDescription;
use colored::Colorize;
use std::path::Path;
use std::process::ExitCode;

use super::json_output::{input_error_to_json, CommandOutput, FormatClassification, FormatResult};
use super::print_json;
use crate::input::load_record;

/// Run the format command
///
/// # Arguments
/// * `input` - Path to a JSON document or raw 40-byte record
/// * `raw` - Decode as raw bytes whatever the extension
/// * `json_output` - Whether to output machine-readable JSON
///
/// # Returns
/// Exit code: 0 on success, 1 on error
pub fn run(input: &str, raw: bool, json_output: bool) -> Result<ExitCode> {
    if json_output {
        run_json(input, raw)
    } else {
        run_human(input, raw)
    }
}

/// Run format with human-readable (colored) output
fn run_human(input: &str, raw: bool) -> Result<ExitCode> {
    println!("{} {}", "Describing:".cyan().bold(), input);

    let loaded = load_record::<StreamDescription>(Path::new(input), raw)
        .with_context(|| format!("Failed to load format: {}", input))?;
    let asbd = loaded.record;

    println!("  {}", asbd.description().bold());
    println!(
        "  {} {}",
        "Format ID:".dimmed(),
        format_id_description(asbd.format_id)
    );
    match asbd.common_format() {
        Some(common) => println!("  {} {}", "Common format:".dimmed(), common.to_string().green()),
        None => println!("  {} {}", "Common format:".dimmed(), "none".dimmed()),
    }

    println!("\n{}", "Classification:".cyan().bold());
    let c = FormatClassification::of(&asbd);
    print_flag("pcm", c.pcm);
    print_flag("float", c.float);
    print_flag("signed integer", c.signed_integer);
    print_flag("fixed point", c.fixed_point);
    print_flag("big-endian", c.big_endian);
    print_flag("native endian", c.native_endian);
    print_flag("packed flag", c.packed_flag);
    print_flag("implicitly packed", c.implicitly_packed);
    print_flag("aligned high", c.aligned_high);
    print_flag("interleaved", c.interleaved);
    print_flag("mixable", c.mixable);
    println!("  {:<20} {}", "fractional bits", c.fractional_bits);
    println!("  {:<20} {}", "sample word size", c.sample_word_size);
    println!("  {:<20} {}", "channel streams", c.channel_stream_count);

    for warning in format_warnings(&asbd) {
        println!("{} {}", "!".yellow(), warning.yellow());
    }

    Ok(ExitCode::SUCCESS)
}

/// Run format with machine-readable JSON output
fn run_json(input: &str, raw: bool) -> Result<ExitCode> {
    let loaded = match load_record::<StreamDescription>(Path::new(input), raw) {
        Ok(loaded) => loaded,
        Err(e) => {
            let output: CommandOutput<FormatResult> =
                CommandOutput::failure(vec![input_error_to_json(&e, input)]);
            print_json(&output)?;
            return Ok(ExitCode::from(1));
        }
    };

    let asbd = loaded.record;
    let result = FormatResult {
        description: asbd.description(),
        common_format: asbd.common_format().map(|c| c.as_str().to_string()),
        classification: FormatClassification::of(&asbd),
        format: asbd,
        source_kind: loaded.source_kind.as_str().to_string(),
    };
    print_json(&CommandOutput::success(result))?;

    Ok(ExitCode::SUCCESS)
}

fn print_flag(name: &str, value: bool) {
    let mark = if value { "yes".green() } else { "no".dimmed() };
    println!("  {:<20} {}", name, mark);
}

/// Observations worth flagging about a record that is otherwise usable.
pub fn format_warnings(asbd: &StreamDescription) -> Vec<String> {
    let mut warnings = Vec::new();
    if !asbd.is_complete() {
        warnings.push("some fields are zero and match anything when compared".to_string());
    }
    if asbd.is_pcm() && asbd.is_packed() && !asbd.is_implicitly_packed() {
        warnings.push(format!(
            "packed flag is set but {} bits x {} channels do not fill {} bytes/frame",
            asbd.bits_per_channel,
            asbd.interleaved_channel_count(),
            asbd.bytes_per_frame
        ));
    }
    if asbd.is_pcm() && !asbd.is_native_endian() {
        warnings.push("samples are not in native byte order".to_string());
    }
    warnings
}

#[cfg(test)]
mod tests {
    use super::*;
    use audiodesc_spec::format::{flags, ids};
    use audiodesc_spec::{CommonPcmFormat, Record};
    use std::fs;

    #[test]
    fn test_format_json_file() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("format.json");
        let asbd = StreamDescription::common(CommonPcmFormat::Float32, 48000.0, 2, true);
        fs::write(&path, serde_json::to_string(&asbd).unwrap()).unwrap();

        let code = run(path.to_str().unwrap(), false, true).unwrap();
        assert_eq!(code, ExitCode::SUCCESS);

        let code = run(path.to_str().unwrap(), false, false).unwrap();
        assert_eq!(code, ExitCode::SUCCESS);
    }

    #[test]
    fn test_format_raw_file() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("format.bin");
        let asbd = StreamDescription::common(CommonPcmFormat::Int32, 44100.0, 1, true);
        fs::write(&path, asbd.to_bytes()).unwrap();

        let code = run(path.to_str().unwrap(), false, true).unwrap();
        assert_eq!(code, ExitCode::SUCCESS);
    }

    #[test]
    fn test_format_file_not_found() {
        let code = run("/nonexistent/format.json", false, true).unwrap();
        assert_eq!(code, ExitCode::from(1));

        assert!(run("/nonexistent/format.json", false, false).is_err());
    }

    #[test]
    fn test_format_short_raw_file() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("format.asbd");
        fs::write(&path, [0u8; 12]).unwrap();

        let code = run(path.to_str().unwrap(), false, true).unwrap();
        assert_eq!(code, ExitCode::from(1));
    }

    #[test]
    fn test_warnings() {
        let common = StreamDescription::common(CommonPcmFormat::Int16, 44100.0, 2, true);
        assert!(format_warnings(&common).is_empty());

        // Packed flag set, but 24 bits in 4-byte containers.
        let padded = StreamDescription::new(
            44100.0,
            ids::LINEAR_PCM,
            flags::IS_SIGNED_INTEGER | flags::IS_PACKED | flags::NATIVE_ENDIAN,
            8,
            1,
            8,
            2,
            24,
        );
        let warnings = format_warnings(&padded);
        assert_eq!(warnings.len(), 1);
        assert!(warnings[0].contains("packed flag"));

        assert_eq!(format_warnings(&StreamDescription::default()).len(), 1);
    }
}
