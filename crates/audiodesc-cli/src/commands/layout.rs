//! Layout command implementation

use anyhow::{Context, Result};
use audiodesc_spec::names::channel_layout_tag_name;
use audiodesc_spec::{ChannelDescription, ChannelLayout, ChannelLayoutKind};
use colored::Colorize;
use std::path::Path;
use std::process::ExitCode;

use super::json_output::{input_error_to_json, CommandOutput, LayoutResult};
use super::print_json;
use crate::input::load_record;

/// Run the layout command
///
/// # Arguments
/// * `input` - Path to a JSON document or raw layout record
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

/// Run layout with human-readable (colored) output
fn run_human(input: &str) -> Result<ExitCode> {
    println!("{} {}", "Describing:".cyan().bold(), input);

    let layout = load_record::<ChannelLayout>(Path::new(input), false)
        .with_context(|| format!("Failed to load channel layout: {}", input))?
        .record;

    println!("  {}", layout.description().bold());
    println!("  {} {}", "Tag:".dimmed(), channel_layout_tag_name(layout.tag));

    match layout.kind() {
        ChannelLayoutKind::Descriptions(descriptions) => {
            for (index, channel) in descriptions.iter().enumerate() {
                println!("  {:>3}  {}", index, channel);
            }
        }
        ChannelLayoutKind::Bitmap(_) | ChannelLayoutKind::Tag(_) => {
            if !layout.descriptions.is_empty() {
                println!(
                    "{} {}",
                    "!".yellow(),
                    format!(
                        "{} channel descriptions ignored: tag is not UseChannelDescriptions",
                        layout.descriptions.len()
                    )
                    .yellow()
                );
            }
        }
    }

    Ok(ExitCode::SUCCESS)
}

/// Run layout with machine-readable JSON output
fn run_json(input: &str) -> Result<ExitCode> {
    let layout = match load_record::<ChannelLayout>(Path::new(input), false) {
        Ok(loaded) => loaded.record,
        Err(e) => {
            let output: CommandOutput<LayoutResult> =
                CommandOutput::failure(vec![input_error_to_json(&e, input)]);
            print_json(&output)?;
            return Ok(ExitCode::from(1));
        }
    };

    let channels = match layout.kind() {
        ChannelLayoutKind::Descriptions(descriptions) => descriptions
            .iter()
            .map(ChannelDescription::description)
            .collect(),
        ChannelLayoutKind::Bitmap(_) | ChannelLayoutKind::Tag(_) => Vec::new(),
    };
    let result = LayoutResult {
        description: layout.description(),
        channel_count: layout.channel_count(),
        channels,
        layout,
    };
    print_json(&CommandOutput::success(result))?;

    Ok(ExitCode::SUCCESS)
}
