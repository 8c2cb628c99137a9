//! JSON output types for machine-readable CLI output.
//!
//! Every command wraps its result in a [`CommandOutput`] when run with
//! `--json`, so tools can check `success` and the stable error codes without
//! scraping colored text.

use audiodesc_spec::{ChannelLayout, StreamDescription, TimeStamp};
use serde::{Deserialize, Serialize};

use crate::input::InputError;

/// Error codes for CLI operations.
///
/// These codes are stable and can be used for programmatic error handling.
pub mod error_codes {
    /// File could not be read
    pub const FILE_READ: &str = "CLI_001";
    /// Unknown file extension
    pub const UNKNOWN_EXTENSION: &str = "CLI_002";
    /// JSON parse error
    pub const JSON_PARSE: &str = "CLI_003";
    /// Raw record too short or malformed
    pub const RECORD_DECODE: &str = "CLI_004";
    /// Unknown common PCM format name
    pub const UNKNOWN_COMMON_FORMAT: &str = "CLI_005";
}

/// A structured error in JSON output.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct JsonError {
    /// Stable error code (e.g., "CLI_001")
    pub code: String,
    /// Human-readable error message
    pub message: String,
    /// Source file path (if applicable)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file: Option<String>,
}

impl JsonError {
    /// Creates a new error with code and message.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            file: None,
        }
    }

    /// Sets the file path for this error.
    pub fn with_file(mut self, file: impl Into<String>) -> Self {
        self.file = Some(file.into());
        self
    }
}

/// Converts an input error to a JSON error.
pub fn input_error_to_json(error: &InputError, file: &str) -> JsonError {
    let code = match error {
        InputError::FileRead { .. } => error_codes::FILE_READ,
        InputError::UnknownExtension { .. } => error_codes::UNKNOWN_EXTENSION,
        InputError::JsonParse { .. } => error_codes::JSON_PARSE,
        InputError::Decode { .. } => error_codes::RECORD_DECODE,
    };
    JsonError::new(code, error.to_string()).with_file(file)
}

/// JSON envelope shared by every command.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommandOutput<R> {
    /// Whether the command succeeded
    pub success: bool,
    /// Errors encountered
    pub errors: Vec<JsonError>,
    /// Command result (on success)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<R>,
}

impl<R> CommandOutput<R> {
    /// Creates a successful output.
    pub fn success(result: R) -> Self {
        Self {
            success: true,
            errors: Vec::new(),
            result: Some(result),
        }
    }

    /// Creates a failed output.
    pub fn failure(errors: Vec<JsonError>) -> Self {
        Self {
            success: false,
            errors,
            result: None,
        }
    }
}

/// Classification of a format descriptor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FormatClassification {
    pub pcm: bool,
    pub float: bool,
    pub signed_integer: bool,
    pub fixed_point: bool,
    pub fractional_bits: u32,
    pub big_endian: bool,
    pub native_endian: bool,
    pub packed_flag: bool,
    pub implicitly_packed: bool,
    pub aligned_high: bool,
    pub interleaved: bool,
    pub mixable: bool,
    pub complete: bool,
    pub channel_stream_count: u32,
    pub interleaved_channel_count: u32,
    pub sample_word_size: u32,
}

impl FormatClassification {
    /// Runs every classification query against `asbd`.
    pub fn of(asbd: &StreamDescription) -> Self {
        Self {
            pcm: asbd.is_pcm(),
            float: asbd.is_float(),
            signed_integer: asbd.is_signed_integer(),
            fixed_point: asbd.is_fixed_point(),
            fractional_bits: asbd.fractional_bits(),
            big_endian: asbd.is_big_endian(),
            native_endian: asbd.is_native_endian(),
            packed_flag: asbd.is_packed(),
            implicitly_packed: asbd.is_implicitly_packed(),
            aligned_high: asbd.is_aligned_high(),
            interleaved: asbd.is_interleaved(),
            mixable: asbd.is_mixable(),
            complete: asbd.is_complete(),
            channel_stream_count: asbd.channel_stream_count(),
            interleaved_channel_count: asbd.interleaved_channel_count(),
            sample_word_size: asbd.sample_word_size(),
        }
    }
}

/// Result of the `format` command.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FormatResult {
    /// One-line description
    pub description: String,
    /// Common PCM format, if the record is one
    #[serde(skip_serializing_if = "Option::is_none")]
    pub common_format: Option<String>,
    /// Classification queries
    pub classification: FormatClassification,
    /// The record as read
    pub format: StreamDescription,
    /// How the input was read (json/raw)
    pub source_kind: String,
}

/// Result of the `common` command.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommonResult {
    /// One-line description
    pub description: String,
    /// The canonical record
    pub format: StreamDescription,
}

/// Result of the `layout` command.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LayoutResult {
    /// One-line description
    pub description: String,
    /// Number of channels
    pub channel_count: u32,
    /// Per-channel descriptions (description layouts only)
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub channels: Vec<String>,
    /// The layout as read
    pub layout: ChannelLayout,
}

/// Result of the `timestamp` command.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimestampResult {
    /// Valid representations, comma-separated
    pub description: String,
    /// Whether any validity bit is set
    pub valid: bool,
    /// The time stamp as read
    pub timestamp: TimeStamp,
}

/// Result of the `compare` command.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompareResult {
    /// Description of format A
    pub description_a: String,
    /// Description of format B
    pub description_b: String,
    /// Exact field equality
    pub equal: bool,
    /// Equality with zero fields as wildcards
    pub congruent: bool,
    /// Field-by-field breakdown
    pub fields: Vec<FieldComparison>,
}

/// How one descriptor field compares between two records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldMatch {
    /// Both sides hold the same value
    Equal,
    /// The values differ but one side is zero
    Wildcard,
    /// The values differ and neither is zero
    Differ,
}

/// One row of a field-by-field comparison.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldComparison {
    /// Field name
    pub field: String,
    /// Value in format A
    pub a: String,
    /// Value in format B
    pub b: String,
    /// Comparison outcome
    pub status: FieldMatch,
}
