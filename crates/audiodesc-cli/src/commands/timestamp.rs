//! Timestamp command implementation

use anyhow::{Context, Result};
use audiodesc_spec::TimeStamp;
use colored::Colorize;
use std::path::Path;
use std::process::ExitCode;

use super::json_output::{input_error_to_json, CommandOutput, TimestampResult};
use super::print_json;
use crate::input::load_record;

/// Run the timestamp command
///
/// # Arguments
/// * `input` - Path to a JSON document or raw 64-byte record
/// * `json_output` - Whether to output machine-readable JSON
///
/// # Returns
/// Exit code: 0 on success, 1 on error
pub fn run(input: &str, json_output: bool) -> Result<ExitCode> {
    if json_output {
        run_json(input)
    } else {
        run_human(input)
    }
}

/// Run timestamp with human-readable (colored) output
fn run_human(input: &str) -> Result<ExitCode> {
    println!("{} {}", "Describing:".cyan().bold(), input);

    let ts = load_record::<TimeStamp>(Path::new(input), false)
        .with_context(|| format!("Failed to load time stamp: {}", input))?
        .record;

    if ts.is_valid() {
        println!("  {}", ts.description().bold());
    } else {
        println!(
            "{} {}",
            "!".yellow(),
            "no validity flags set; nothing in this time stamp is meaningful".yellow()
        );
    }
    if ts.smpte_time_is_valid() {
        let smpte = ts.smpte_time;
        println!(
            "  {} {:02}:{:02}:{:02}:{:02}",
            "SMPTE:".dimmed(),
            smpte.hours,
            smpte.minutes,
            smpte.seconds,
            smpte.frames
        );
    }

    Ok(ExitCode::SUCCESS)
}

/// Run timestamp with machine-readable JSON output
fn run_json(input: &str) -> Result<ExitCode> {
    let ts = match load_record::<TimeStamp>(Path::new(input), false) {
        Ok(loaded) => loaded.record,
        Err(e) => {
            let output: CommandOutput<TimestampResult> =
                CommandOutput::failure(vec![input_error_to_json(&e, input)]);
            print_json(&output)?;
            return Ok(ExitCode::from(1));
        }
    };

    let result = TimestampResult {
        description: ts.description(),
        valid: ts.is_valid(),
        timestamp: ts,
    };
    print_json(&CommandOutput::success(result))?;

    Ok(ExitCode::SUCCESS)
}
