//! Test fixtures: representative descriptors and a temp directory to write
//! them into.

use audiodesc_spec::format::{flags, ids};
use audiodesc_spec::{Record, StreamDescription};
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// 16-bit signed stereo at 44.1 kHz, interleaved and packed.
pub fn int16_stereo() -> StreamDescription {
    StreamDescription::new(
        44100.0,
        ids::LINEAR_PCM,
        flags::IS_SIGNED_INTEGER | flags::IS_PACKED | flags::NATIVE_ENDIAN,
        4,
        1,
        4,
        2,
        16,
    )
}

/// [`int16_stereo`] with each sample padded to 4 bytes.
pub fn int16_stereo_padded() -> StreamDescription {
    StreamDescription {
        bytes_per_packet: 8,
        bytes_per_frame: 8,
        ..int16_stereo()
    }
}

/// 24-bit samples in the high bytes of 32-bit containers, deinterleaved.
pub fn int24_in_32_high_aligned() -> StreamDescription {
    StreamDescription::new(
        96000.0,
        ids::LINEAR_PCM,
        flags::IS_SIGNED_INTEGER
            | flags::IS_ALIGNED_HIGH
            | flags::IS_NON_INTERLEAVED
            | flags::NATIVE_ENDIAN,
        4,
        1,
        4,
        8,
        24,
    )
}

/// Stereo AAC-LC: variable-size packets of 1024 frames.
pub fn aac_stereo() -> StreamDescription {
    StreamDescription::new(44100.0, ids::MPEG4_AAC, 0, 0, 1024, 0, 2, 0)
}

/// Apple Lossless encoded from a 24-bit source.
pub fn alac_from_24_bit() -> StreamDescription {
    StreamDescription::new(
        48000.0,
        ids::APPLE_LOSSLESS,
        flags::LOSSLESS_24_BIT_SOURCE,
        0,
        4096,
        0,
        2,
        0,
    )
}

/// A temp directory that record files are written into.
pub struct FixtureDir {
    pub root: TempDir,
}

impl FixtureDir {
    /// Create a new empty fixture directory.
    pub fn new() -> Self {
        let root = TempDir::new().expect("Failed to create temp dir");
        Self { root }
    }

    /// Get the directory path.
    pub fn path(&self) -> &Path {
        self.root.path()
    }

    /// Write `value` as a JSON document.
    pub fn write_json<T: Serialize>(&self, name: &str, value: &T) -> PathBuf {
        let content = serde_json::to_string_pretty(value).expect("Failed to serialize fixture");
        self.write_bytes(name, content.as_bytes())
    }

    /// Write `value` in its raw record layout.
    pub fn write_raw<T: Record>(&self, name: &str, value: &T) -> PathBuf {
        self.write_bytes(name, &value.to_bytes())
    }

    /// Write arbitrary bytes.
    pub fn write_bytes(&self, name: &str, bytes: &[u8]) -> PathBuf {
        let path = self.root.path().join(name);
        fs::write(&path, bytes).expect("Failed to write fixture file");
        path
    }
}

impl Default for FixtureDir {
    fn default() -> Self {
        Self::new()
    }
}
