//! Error types for record decoding and document loading.
//!
//! Classification queries never fail; they degrade to `false`, `None` or `0`
//! on degenerate input. Errors only arise at the edges: decoding raw records,
//! parsing JSON documents, and parsing names supplied by a user.

use thiserror::Error;

/// Which record a decoding error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RecordKind {
    /// A stream format descriptor (40 bytes).
    FormatDescription,
    /// A minimum/maximum pair (16 bytes).
    ValueRange,
    /// A SMPTE time record (24 bytes).
    SmpteTime,
    /// An audio time stamp (64 bytes).
    TimeStamp,
    /// A single channel description (20 bytes).
    ChannelDescription,
    /// A channel layout header plus its trailing descriptions.
    ChannelLayout,
}

impl RecordKind {
    /// Returns the record kind as a string.
    pub fn as_str(&self) -> &'static str {
        match self {
            RecordKind::FormatDescription => "format description",
            RecordKind::ValueRange => "value range",
            RecordKind::SmpteTime => "SMPTE time",
            RecordKind::TimeStamp => "time stamp",
            RecordKind::ChannelDescription => "channel description",
            RecordKind::ChannelLayout => "channel layout",
        }
    }
}

impl std::fmt::Display for RecordKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Top-level error type for descriptor operations.
#[derive(Debug, Error)]
pub enum DescError {
    /// The byte slice ended before the record did.
    #[error("{kind} record needs {expected} bytes, got {actual}")]
    RecordTooShort {
        /// The record being decoded.
        kind: RecordKind,
        /// Number of bytes the record requires.
        expected: usize,
        /// Number of bytes supplied.
        actual: usize,
    },

    /// A common PCM format name was not recognized.
    #[error("unknown common PCM format: {0} (expected float32, float64, int16, or int32)")]
    UnknownCommonFormat(String),

    /// JSON parsing error.
    #[error("JSON parse error: {0}")]
    JsonParse(#[from] serde_json::Error),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl DescError {
    /// Creates a `RecordTooShort` error.
    pub fn too_short(kind: RecordKind, expected: usize, actual: usize) -> Self {
        DescError::RecordTooShort {
            kind,
            expected,
            actual,
        }
    }
}

/// Result alias used throughout the crate.
pub type DescResult<T> = Result<T, DescError>;
