//! Audio Stream Descriptor Library
//!
//! This crate models the fixed-layout records the platform audio APIs use to
//! describe streams: format descriptors, value ranges, time stamps, and
//! channel layouts. Every record is plain data; the operations are pure
//! queries, small transforms, and human-readable descriptions.
//!
//! # Overview
//!
//! - **Format descriptors** classify a stream (PCM or not, float or integer,
//!   packing, endianness, interleaving), recognize the four common PCM
//!   formats, and convert between interleaved and non-interleaved layouts
//! - **Time stamps** compare by the highest-priority representation both
//!   sides carry
//! - **Channel layouts** come as a tag, a bitmap, or explicit descriptions
//!
//! # Example
//!
//! ```
//! use audiodesc_spec::{CommonPcmFormat, Record, StreamDescription};
//!
//! let asbd = StreamDescription::common(CommonPcmFormat::Float32, 48000.0, 2, false);
//! assert_eq!(asbd.common_format(), Some(CommonPcmFormat::Float32));
//! assert_eq!(asbd.channel_stream_count(), 2);
//! assert_eq!(asbd.description(), "2 ch @ 48000 Hz, Float32, deinterleaved");
//!
//! // Round-trip through the 40-byte platform layout
//! let bytes = asbd.to_bytes();
//! let decoded = StreamDescription::read_from(&bytes).unwrap();
//! assert!(decoded.is_equal_to(&asbd));
//! ```
//!
//! # Modules
//!
//! - [`error`]: Error type for record decoding and document loading
//! - [`format`]: Stream format descriptors, flags, and format identifiers
//! - [`fourcc`]: Four-character code packing and rendering
//! - [`layout`]: Channel layouts and channel descriptions
//! - [`names`]: Name tables for format IDs, layout tags, labels, and bitmaps
//! - [`number`]: Float formatting shared by the descriptions
//! - [`record`]: Native-endian binary codec for every record
//! - [`timestamp`]: Audio time stamps
//! - [`value_range`]: Closed numeric ranges

pub mod error;
pub mod format;
pub mod fourcc;
pub mod layout;
pub mod names;
pub mod number;
pub mod record;
pub mod timestamp;
pub mod value_range;

// Re-export commonly used types at the crate root
pub use error::{DescError, DescResult, RecordKind};
pub use format::{CommonPcmFormat, StreamDescription};
pub use fourcc::{fourcc, fourcc_string};
pub use layout::{ChannelDescription, ChannelLayout, ChannelLayoutKind};
pub use record::Record;
pub use timestamp::{SmpteTime, TimeStamp};
pub use value_range::ValueRange;

#[cfg(test)]
mod integration_tests {
    use super::*;
    use crate::format::{flags, ids};
    use pretty_assertions::assert_eq;

    /// A 24-bit integer stream in 32-bit containers, as a capture device reports it.
    #[test]
    fn test_parse_padded_capture_format() {
        let json = r#"{
            "sample_rate": 96000.0,
            "format_id": "lpcm",
            "format_flags": 4,
            "bytes_per_packet": 8,
            "frames_per_packet": 1,
            "bytes_per_frame": 8,
            "channels_per_frame": 2,
            "bits_per_channel": 24
        }"#;

        let asbd: StreamDescription = serde_json::from_str(json).unwrap();
        assert_eq!(asbd.format_id, ids::LINEAR_PCM);
        assert_eq!(asbd.format_flags, flags::IS_SIGNED_INTEGER);
        assert_eq!(asbd.sample_word_size(), 4);
        assert!(!asbd.is_implicitly_packed());
        assert_eq!(asbd.common_format(), None);

        let text = asbd.description();
        assert!(text.starts_with("2 ch @ 96000 Hz, 24-bit"), "{}", text);
        assert!(text.contains("unpacked in 4 bytes low-aligned"), "{}", text);
    }

    #[test]
    fn test_json_round_trip_keeps_fourcc_readable() {
        let asbd = StreamDescription::common(CommonPcmFormat::Int32, 44100.0, 1, true);
        let json = serde_json::to_string(&asbd).unwrap();
        assert!(json.contains(r#""format_id":"lpcm""#), "{}", json);

        let parsed: StreamDescription = serde_json::from_str(&json).unwrap();
        assert!(parsed.is_equal_to(&asbd));
    }

    #[test]
    fn test_layout_and_format_agree_on_channels() {
        let asbd = StreamDescription::common(CommonPcmFormat::Float32, 48000.0, 2, true);
        let layout = ChannelLayout::from_tag(names::layout_tags::STEREO);
        assert_eq!(asbd.channel_count(), layout.channel_count());
    }
}
