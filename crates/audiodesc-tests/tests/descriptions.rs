//! Description rendering for representative real-world records.
//!
//! ## Running Tests
//!
//! ```bash
//! cargo test -p audiodesc-tests --test descriptions
//! ```

use pretty_assertions::assert_eq;

use audiodesc_spec::format::{flags, ids};
use audiodesc_spec::names::{bitmap, labels, layout_tags};
use audiodesc_spec::{
    ChannelDescription, ChannelLayout, CommonPcmFormat, StreamDescription, TimeStamp, ValueRange,
};
use audiodesc_tests::fixtures;

/// Byte order wording for records flagged native-endian on this host.
fn native_order() -> &'static str {
    if cfg!(target_endian = "big") {
        "big-endian"
    } else {
        "little-endian"
    }
}

// ============================================================================
// Format Descriptors
// ============================================================================

#[test]
fn common_formats_use_short_form() {
    assert_eq!(
        fixtures::int16_stereo().description(),
        "2 ch @ 44100 Hz, Int16, interleaved"
    );
    assert_eq!(
        StreamDescription::common(CommonPcmFormat::Float64, 192000.0, 1, false).description(),
        "1 ch @ 192000 Hz, Float64, deinterleaved"
    );
}

#[test]
fn padded_integer_shows_container() {
    assert_eq!(
        fixtures::int16_stereo_padded().description(),
        format!(
            "2 ch @ 44100 Hz, 16-bit {} signed integer, packed in 4 bytes",
            native_order()
        )
    );
}

#[test]
fn high_aligned_deinterleaved_integer() {
    assert_eq!(
        fixtures::int24_in_32_high_aligned().description(),
        format!(
            "8 ch @ 96000 Hz, 24-bit {} signed integer, unpacked in 4 bytes high-aligned, deinterleaved",
            native_order()
        )
    );
}

#[test]
fn fixed_point_shows_integer_and_fraction_bits() {
    let asbd = StreamDescription::new(
        44100.0,
        ids::LINEAR_PCM,
        flags::CANONICAL_INTEGER | flags::with_fractional_bits(24),
        8,
        1,
        8,
        2,
        32,
    );
    assert!(asbd.is_fixed_point());
    assert_eq!(asbd.common_format(), None);
    assert_eq!(
        asbd.description(),
        format!("2 ch @ 44100 Hz, 8.24-bit {} signed integer", native_order())
    );
}

#[test]
fn eight_bit_unsigned_omits_byte_order() {
    let asbd = StreamDescription::new(22050.0, ids::LINEAR_PCM, flags::IS_PACKED, 1, 1, 1, 1, 8);
    assert_eq!(asbd.description(), "1 ch @ 22050 Hz, 8-bit unsigned integer");
}

#[test]
fn fractional_sample_rate_has_two_decimals() {
    let asbd = StreamDescription::common(CommonPcmFormat::Int16, 22050.5, 2, true);
    assert_eq!(asbd.description(), "2 ch @ 22050.50 Hz, Int16, interleaved");
}

#[test]
fn compressed_formats_list_packet_fields() {
    assert_eq!(
        fixtures::aac_stereo().description(),
        "2 ch @ 44100 Hz, MPEG-4 Low Complexity AAC (0x00000000) 0 bits/channel, \
         0 bytes/packet, 1024 frames/packet, 0 bytes/frame"
    );
}

#[test]
fn lossless_formats_report_source_depth() {
    assert_eq!(
        fixtures::alac_from_24_bit().description(),
        "2 ch @ 48000 Hz, Apple Lossless (0x00000003) from 24-bit source, 4096 frames/packet"
    );

    let flac = StreamDescription {
        format_id: ids::FLAC,
        format_flags: 0,
        ..fixtures::alac_from_24_bit()
    };
    assert_eq!(
        flac.description(),
        "2 ch @ 48000 Hz, Free Lossless Audio Codec (0x00000000) from unknown source bit depth, \
         4096 frames/packet"
    );
}

#[test]
fn unnamed_format_falls_back_to_fourcc() {
    let asbd = StreamDescription {
        format_id: audiodesc_spec::fourcc(b"zzzz"),
        ..fixtures::aac_stereo()
    };
    assert!(asbd.description().contains("'zzzz' (0x00000000)"));
}

#[test]
fn zero_record_still_renders() {
    assert_eq!(
        StreamDescription::default().description(),
        "0 ch @ 0 Hz, 0x00000000 (0x00000000) 0 bits/channel, 0 bytes/packet, \
         0 frames/packet, 0 bytes/frame"
    );
}

// ============================================================================
// Layouts, Time Stamps, Ranges
// ============================================================================

#[test]
fn layout_descriptions() {
    assert_eq!(
        ChannelLayout::from_tag(layout_tags::MPEG_5_1_A).description(),
        "6 ch, tag 0x00790006 [MPEG_5_1_A]"
    );
    assert_eq!(
        ChannelLayout::from_tag(layout_tags::HOA_ACN_SN3D | 4).description(),
        "4 ch, tag 0x00be0004 [HOA_ACN_SN3D(4)]"
    );
    assert_eq!(
        ChannelLayout::from_bitmap(bitmap::LEFT | bitmap::RIGHT).description(),
        "2 ch, bitmap 0x00000003 [Left | Right]"
    );
    assert_eq!(
        ChannelLayout::from_descriptions(vec![
            ChannelDescription::labeled(labels::CENTER),
            ChannelDescription::labeled(labels::HOA_ACN_0 | 1),
            ChannelDescription::labeled(0x0009_0000),
        ])
        .description(),
        "3 ch, [Center, HOA_ACN_1, 0x00090000]"
    );
}

#[test]
fn time_stamp_descriptions() {
    assert_eq!(
        TimeStamp::with_sample_and_host_time(1_234_567.0, 42).description(),
        "sample time = 1.23457e+06, host time = 42"
    );
    assert_eq!(TimeStamp::default().description(), "");
}

#[test]
fn value_range_display() {
    assert_eq!(ValueRange::new(0.5, 96000.0).to_string(), "[0.5, 96000]");
}
