//! Input abstraction for loading records from JSON documents or raw bytes.
//!
//! Files are dispatched by extension: `.json` is parsed as a JSON document,
//! `.bin` and `.asbd` are decoded as the native-endian platform layout.
//! Callers can force raw decoding regardless of extension.

use audiodesc_spec::{DescError, Record};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Recognized JSON extensions.
pub const JSON_EXTENSIONS: &[&str] = &["json"];

/// Recognized raw record extensions.
pub const RAW_EXTENSIONS: &[&str] = &["bin", "asbd"];

/// Identifies how a record file was read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SourceKind {
    /// JSON document.
    Json,
    /// Raw native-endian record bytes.
    Raw,
}

impl SourceKind {
    /// Returns the string representation for reports.
    pub fn as_str(&self) -> &'static str {
        match self {
            SourceKind::Json => "json",
            SourceKind::Raw => "raw",
        }
    }
}

impl std::fmt::Display for SourceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A record loaded from disk.
#[derive(Debug)]
pub struct Loaded<T> {
    /// The decoded record.
    pub record: T,
    /// How the file was read.
    pub source_kind: SourceKind,
}

/// Errors that can occur while loading a record.
#[derive(Debug)]
pub enum InputError {
    /// File could not be read.
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Unknown file extension.
    UnknownExtension { extension: Option<String> },

    /// JSON parsing failed.
    JsonParse { source: DescError },

    /// Raw bytes did not hold a complete record.
    Decode { source: DescError },
}

impl std::fmt::Display for InputError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InputError::FileRead { path, source } => {
                write!(f, "failed to read file '{}': {}", path.display(), source)
            }
            InputError::UnknownExtension { extension } => match extension {
                Some(ext) => write!(
                    f,
                    "unknown file extension '.{}' (expected .json, .bin, or .asbd)",
                    ext
                ),
                None => write!(f, "file has no extension (expected .json, .bin, or .asbd)"),
            },
            InputError::JsonParse { source } => write!(f, "{}", source),
            InputError::Decode { source } => {
                write!(f, "invalid record: {}", source)
            }
        }
    }
}

impl std::error::Error for InputError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            InputError::FileRead { source, .. } => Some(source),
            InputError::Decode { source } => Some(source),
            _ => None,
        }
    }
}

/// Load a record from a file path, dispatching by extension.
///
/// # Arguments
/// * `path` - Path to the record file (.json, .bin, or .asbd)
/// * `force_raw` - Decode as raw bytes whatever the extension
///
/// # Example
/// ```no_run
/// use std::path::Path;
/// use audiodesc_cli::input::load_record;
/// use audiodesc_spec::StreamDescription;
///
/// let loaded = load_record::<StreamDescription>(Path::new("format.json"), false).unwrap();
/// println!("{}", loaded.record);
/// ```
pub fn load_record<T>(path: &Path, force_raw: bool) -> Result<Loaded<T>, InputError>
where
    T: Record + DeserializeOwned,
{
    if force_raw {
        return load_raw(path);
    }

    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|s| s.to_lowercase());

    match extension.as_deref() {
        Some(ext) if JSON_EXTENSIONS.contains(&ext) => load_json(path),
        Some(ext) if RAW_EXTENSIONS.contains(&ext) => load_raw(path),
        _ => Err(InputError::UnknownExtension { extension }),
    }
}

fn load_json<T: Record + DeserializeOwned>(path: &Path) -> Result<Loaded<T>, InputError> {
    let content = std::fs::read_to_string(path).map_err(|e| InputError::FileRead {
        path: path.to_path_buf(),
        source: e,
    })?;

    let record = T::from_json(&content).map_err(|source| InputError::JsonParse { source })?;

    Ok(Loaded {
        record,
        source_kind: SourceKind::Json,
    })
}

fn load_raw<T: Record>(path: &Path) -> Result<Loaded<T>, InputError> {
    let record = T::read_file(path).map_err(|e| match e {
        DescError::Io(source) => InputError::FileRead {
            path: path.to_path_buf(),
            source,
        },
        source => InputError::Decode { source },
    })?;

    Ok(Loaded {
        record,
        source_kind: SourceKind::Raw,
    })
}
