//! Compare command implementation
//!
//! Compares two stream format descriptors for exact equality and for
//! congruence, where a zero field on either side matches anything.

use anyhow::{Context, Result};
use audiodesc_spec::{fourcc_string, StreamDescription};
use colored::Colorize;
use std::path::Path;
use std::process::ExitCode;

use super::json_output::{
    input_error_to_json, CommandOutput, CompareResult, FieldComparison, FieldMatch,
};
use super::print_json;
use crate::input::load_record;

/// Run the compare command
///
/// # Arguments
/// * `path_a` - Path to the first format
/// * `path_b` - Path to the second format
/// * `json_output` - Whether to output machine-readable JSON
///
/// # Returns
/// Exit code: 0 on success, 1 on error
pub fn run(path_a: &str, path_b: &str, json_output: bool) -> Result<ExitCode> {
    if json_output {
        run_json(path_a, path_b)
    } else {
        run_human(path_a, path_b)
    }
}

/// Run compare with human-readable (colored) output
fn run_human(path_a: &str, path_b: &str) -> Result<ExitCode> {
    println!("{}", "Comparing formats:".cyan().bold());
    println!("  {} {}", "A:".dimmed(), path_a);
    println!("  {} {}", "B:".dimmed(), path_b);

    let a = load_record::<StreamDescription>(Path::new(path_a), false)
        .with_context(|| format!("Failed to load format A: {}", path_a))?
        .record;
    let b = load_record::<StreamDescription>(Path::new(path_b), false)
        .with_context(|| format!("Failed to load format B: {}", path_b))?
        .record;

    println!("  {} {}", "A:".dimmed(), a);
    println!("  {} {}", "B:".dimmed(), b);

    let result = compare(&a, &b);

    println!();
    println!("  {:<20} {:>14} {:>14}", "Field".bold(), "A".bold(), "B".bold());
    for row in &result.fields {
        let marker = match row.status {
            FieldMatch::Equal => "=".green(),
            FieldMatch::Wildcard => "~".yellow(),
            FieldMatch::Differ => "x".red().bold(),
        };
        println!("  {:<20} {:>14} {:>14}  {}", row.field, row.a, row.b, marker);
    }
    if result.equal {
        println!("\n{}", "Formats are identical".green().bold());
    } else if result.congruent {
        println!(
            "\n{}",
            "Formats are congruent (zero fields match anything)".green()
        );
    } else {
        println!("\n{}", "Formats differ".red().bold());
    }

    Ok(ExitCode::SUCCESS)
}

/// Run compare with machine-readable JSON output
fn run_json(path_a: &str, path_b: &str) -> Result<ExitCode> {
    let output = collect(path_a, path_b);
    print_json(&output)?;

    if output.success {
        Ok(ExitCode::SUCCESS)
    } else {
        Ok(ExitCode::from(1))
    }
}

/// Loads both formats and compares them, keeping every load failure.
pub fn collect(path_a: &str, path_b: &str) -> CommandOutput<CompareResult> {
    let mut errors = Vec::new();
    let a = load_record::<StreamDescription>(Path::new(path_a), false)
        .map_err(|e| errors.push(input_error_to_json(&e, path_a)))
        .ok();
    let b = load_record::<StreamDescription>(Path::new(path_b), false)
        .map_err(|e| errors.push(input_error_to_json(&e, path_b)))
        .ok();

    match (a, b) {
        (Some(a), Some(b)) => CommandOutput::success(compare(&a.record, &b.record)),
        _ => CommandOutput::failure(errors),
    }
}

fn compare(a: &StreamDescription, b: &StreamDescription) -> CompareResult {
    let sample_rate = if a.sample_rate == b.sample_rate {
        FieldMatch::Equal
    } else if a.sample_rate == 0.0 || b.sample_rate == 0.0 {
        FieldMatch::Wildcard
    } else {
        FieldMatch::Differ
    };

    let mut fields = vec![FieldComparison {
        field: "sample_rate".to_string(),
        a: a.sample_rate.to_string(),
        b: b.sample_rate.to_string(),
        status: sample_rate,
    }];
    fields.push(field("format_id", a.format_id, b.format_id, fourcc_string));
    fields.push(field("format_flags", a.format_flags, b.format_flags, |v| {
        format!("0x{:08x}", v)
    }));
    for (name, x, y) in [
        ("bytes_per_packet", a.bytes_per_packet, b.bytes_per_packet),
        ("frames_per_packet", a.frames_per_packet, b.frames_per_packet),
        ("bytes_per_frame", a.bytes_per_frame, b.bytes_per_frame),
        ("channels_per_frame", a.channels_per_frame, b.channels_per_frame),
        ("bits_per_channel", a.bits_per_channel, b.bits_per_channel),
    ] {
        fields.push(field(name, x, y, |v| v.to_string()));
    }

    CompareResult {
        description_a: a.description(),
        description_b: b.description(),
        equal: a.is_equal_to(b),
        congruent: a.is_congruent_to(b),
        fields,
    }
}

fn field(name: &str, a: u32, b: u32, render: impl Fn(u32) -> String) -> FieldComparison {
    let status = if a == b {
        FieldMatch::Equal
    } else if a == 0 || b == 0 {
        FieldMatch::Wildcard
    } else {
        FieldMatch::Differ
    };
    FieldComparison {
        field: name.to_string(),
        a: render(a),
        b: render(b),
        status,
    }
}
