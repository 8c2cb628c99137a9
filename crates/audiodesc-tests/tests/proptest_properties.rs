//! Property-based tests for the descriptor records using proptest.
//!
//! These tests check classification, canonical construction, and the
//! interleaving transforms against arbitrary records, including degenerate
//! ones.
//!
//! ## Running Tests
//!
//! ```bash
//! cargo test -p audiodesc-tests --test proptest_properties
//! ```

use proptest::prelude::*;

use audiodesc_spec::format::{flags, ids};
use audiodesc_spec::timestamp::flags as ts_flags;
use audiodesc_spec::{
    ChannelLayout, CommonPcmFormat, Record, StreamDescription, TimeStamp, ValueRange,
};

/// Any field combination, with a finite sample rate.
fn arbitrary_description() -> impl Strategy<Value = StreamDescription> {
    (
        0.0f64..1_000_000.0,
        prop_oneof![Just(ids::LINEAR_PCM), Just(ids::MPEG4_AAC), any::<u32>()],
        any::<u32>(),
        any::<u32>(),
        any::<u32>(),
        any::<u32>(),
        any::<u32>(),
        any::<u32>(),
    )
        .prop_map(|(rate, id, fl, bpp, fpp, bpf, ch, bits)| {
            StreamDescription::new(rate, id, fl, bpp, fpp, bpf, ch, bits)
        })
}

fn common_kind() -> impl Strategy<Value = CommonPcmFormat> {
    prop::sample::select(CommonPcmFormat::all().to_vec())
}

/// Interleaved PCM whose byte fields divide evenly by the channel count.
fn interleaved_pcm() -> impl Strategy<Value = StreamDescription> {
    (
        1u32..=64,
        0u32..=1024,
        1u32..=16,
        1u32..=64,
        any::<u32>(),
        8000.0f64..384_000.0,
    )
        .prop_map(|(channels, word, frames, bits, fl, rate)| {
            let bytes_per_frame = word * channels;
            StreamDescription::new(
                rate,
                ids::LINEAR_PCM,
                fl & !flags::IS_NON_INTERLEAVED,
                bytes_per_frame * frames,
                frames,
                bytes_per_frame,
                channels,
                bits,
            )
        })
}

// ============================================================================
// 1. Canonical Construction
// ============================================================================

proptest! {
    /// Building a common format and recognizing it returns the same kind.
    #[test]
    fn common_format_round_trips(
        kind in common_kind(),
        rate in 1.0f64..768_000.0,
        channels in 1u32..=64,
        interleaved in any::<bool>(),
    ) {
        let asbd = StreamDescription::common(kind, rate, channels, interleaved);
        prop_assert_eq!(asbd.common_format(), Some(kind));
        prop_assert_eq!(asbd.is_interleaved(), interleaved);
        prop_assert_eq!(asbd.channel_count(), channels);
        prop_assert!(asbd.is_implicitly_packed());
    }

    /// Non-PCM records never match a common format.
    #[test]
    fn non_pcm_is_never_common(asbd in arbitrary_description()) {
        prop_assume!(asbd.format_id != ids::LINEAR_PCM);
        prop_assert_eq!(asbd.common_format(), None);
    }

    /// Anything recognized as common is native-endian PCM of the right width.
    #[test]
    fn recognized_common_formats_are_consistent(asbd in arbitrary_description()) {
        if let Some(kind) = asbd.common_format() {
            prop_assert!(asbd.is_pcm());
            prop_assert!(asbd.is_native_endian());
            prop_assert_eq!(asbd.bits_per_channel, kind.bits_per_channel());
            prop_assert_eq!(asbd.is_float(), kind.is_float());
        }
    }
}

// ============================================================================
// 2. Classification
// ============================================================================

proptest! {
    /// Interleaved and non-interleaved are mutually exclusive.
    #[test]
    fn interleaving_is_exclusive(asbd in arbitrary_description()) {
        prop_assert_eq!(asbd.is_interleaved(), !asbd.is_non_interleaved());
        prop_assert_eq!(asbd.is_big_endian(), !asbd.is_little_endian());
    }

    /// Buffer and per-buffer channel counts follow the interleaving flag.
    #[test]
    fn stream_counts_follow_interleaving(asbd in arbitrary_description()) {
        if asbd.is_interleaved() {
            prop_assert_eq!(asbd.channel_stream_count(), 1);
            prop_assert_eq!(asbd.interleaved_channel_count(), asbd.channel_count());
        } else {
            prop_assert_eq!(asbd.channel_stream_count(), asbd.channel_count());
            prop_assert_eq!(asbd.interleaved_channel_count(), 1);
        }
    }

    /// Float and integer partition PCM; neither holds for other formats.
    #[test]
    fn float_and_integer_partition_pcm(asbd in arbitrary_description()) {
        if asbd.is_pcm() {
            prop_assert_ne!(asbd.is_float(), asbd.is_integer());
        } else {
            prop_assert!(!asbd.is_float());
            prop_assert!(!asbd.is_integer());
            prop_assert!(!asbd.is_mixable());
        }
    }

    /// No query panics, whatever the fields hold.
    #[test]
    fn queries_never_panic(asbd in arbitrary_description(), n in any::<u64>()) {
        let _ = asbd.sample_word_size();
        let _ = asbd.is_implicitly_packed();
        let _ = asbd.byte_size(n);
        let _ = asbd.frame_count(n);
        let _ = asbd.packet_duration();
        let _ = asbd.fractional_bits();
        let _ = asbd.description();
        let _ = asbd.to_interleaved();
        let _ = asbd.to_non_interleaved();
    }
}

// ============================================================================
// 3. Interleaving Transforms
// ============================================================================

proptest! {
    /// De-interleaving then re-interleaving gives back a congruent record.
    #[test]
    fn interleave_round_trip(asbd in interleaved_pcm()) {
        let split = asbd.to_non_interleaved().unwrap();
        prop_assert!(split.is_non_interleaved());
        prop_assert_eq!(split.channel_stream_count(), asbd.channel_count());

        let joined = split.to_interleaved().unwrap();
        prop_assert!(joined.is_congruent_to(&asbd));
        prop_assert!(joined.is_equal_to(&asbd));
    }

    /// Re-interleaving then splitting a non-interleaved record is lossless.
    #[test]
    fn deinterleave_round_trip(asbd in interleaved_pcm()) {
        let split = asbd.to_non_interleaved().unwrap();
        let again = split.to_interleaved().unwrap().to_non_interleaved().unwrap();
        prop_assert!(again.is_equal_to(&split));
    }

    /// Transforms are only defined for PCM.
    #[test]
    fn transforms_absent_for_non_pcm(asbd in arbitrary_description()) {
        prop_assume!(!asbd.is_pcm());
        prop_assert!(asbd.to_interleaved().is_none());
        prop_assert!(asbd.to_non_interleaved().is_none());
    }

    /// Transforms are idempotent on records already in the target layout.
    #[test]
    fn transforms_are_idempotent(asbd in interleaved_pcm()) {
        prop_assert!(asbd.to_interleaved().unwrap().is_equal_to(&asbd));
        let split = asbd.to_non_interleaved().unwrap();
        prop_assert!(split.to_non_interleaved().unwrap().is_equal_to(&split));
    }
}

// ============================================================================
// 4. Equality and Congruence
// ============================================================================

proptest! {
    /// Congruence is reflexive.
    #[test]
    fn congruence_is_reflexive(asbd in arbitrary_description()) {
        prop_assert!(asbd.is_congruent_to(&asbd));
        prop_assert!(asbd.is_equal_to(&asbd));
    }

    /// Congruence is symmetric.
    #[test]
    fn congruence_is_symmetric(a in arbitrary_description(), b in arbitrary_description()) {
        prop_assert_eq!(a.is_congruent_to(&b), b.is_congruent_to(&a));
    }

    /// Equality implies congruence.
    #[test]
    fn equality_implies_congruence(a in arbitrary_description(), b in arbitrary_description()) {
        if a.is_equal_to(&b) {
            prop_assert!(a.is_congruent_to(&b));
        }
    }

    /// The all-zero record is congruent to everything.
    #[test]
    fn zero_record_matches_anything(asbd in arbitrary_description()) {
        prop_assert!(StreamDescription::default().is_congruent_to(&asbd));
    }
}

#[test]
fn congruence_is_not_transitive() {
    let a = StreamDescription {
        sample_rate: 44100.0,
        ..Default::default()
    };
    let b = StreamDescription {
        channels_per_frame: 2,
        ..Default::default()
    };
    let c = StreamDescription {
        sample_rate: 48000.0,
        channels_per_frame: 2,
        ..Default::default()
    };
    let d = StreamDescription::default();

    assert!(a.is_congruent_to(&d));
    assert!(d.is_congruent_to(&b));
    assert!(b.is_congruent_to(&c));
    assert!(!a.is_congruent_to(&c));
}

// ============================================================================
// 5. Value Range
// ============================================================================

proptest! {
    /// A range contains both bounds and nothing just past the top.
    #[test]
    fn value_range_bounds(lo in -1.0e9f64..1.0e9, span in 0.0f64..1.0e9) {
        let hi = lo + span;
        let range = ValueRange::new(lo, hi);
        prop_assert!(range.contains(lo));
        prop_assert!(range.contains(hi));
        prop_assert!(!range.contains(hi + hi.abs().max(1.0) * 1e-9));
        prop_assert!(!range.contains(lo - lo.abs().max(1.0) * 1e-9));
    }
}

// ============================================================================
// 6. Time Stamps
// ============================================================================

proptest! {
    /// Exactly one of less/equal/greater holds when sample times are both valid.
    #[test]
    fn sample_time_ordering_is_total(a in -1.0e12f64..1.0e12, b in -1.0e12f64..1.0e12) {
        let x = TimeStamp::with_sample_time(a);
        let y = TimeStamp::with_sample_time(b);
        let outcomes = [x.less_than(&y), x.equal_to(&y), x.greater_than(&y)];
        prop_assert_eq!(outcomes.iter().filter(|o| **o).count(), 1);
        prop_assert_eq!(x.less_than(&y), y.greater_than(&x));
    }

    /// Stamps with no valid field in common never compare.
    #[test]
    fn disjoint_stamps_never_compare(sample in any::<f64>(), host in any::<u64>()) {
        let x = TimeStamp::with_sample_time(sample);
        let y = TimeStamp::with_host_time(host);
        prop_assert!(!x.equal_to(&y));
        prop_assert!(!x.less_than(&y));
        prop_assert!(!x.greater_than(&y));
        prop_assert_eq!(x.flags & y.flags & ts_flags::SAMPLE_HOST_TIME_VALID, 0);
    }
}

// ============================================================================
// 7. Binary Decoding
// ============================================================================

proptest! {
    /// Arbitrary bytes decode or fail cleanly; they never panic.
    #[test]
    fn decoders_never_panic(bytes in prop::collection::vec(any::<u8>(), 0..256)) {
        let _ = StreamDescription::read_from(&bytes);
        let _ = TimeStamp::read_from(&bytes);
        let _ = ValueRange::read_from(&bytes);
        if let Ok(layout) = ChannelLayout::read_from(&bytes) {
            let _ = layout.description();
        }
    }

    /// Encoding then decoding a descriptor reproduces it bit-exactly.
    #[test]
    fn descriptor_bytes_round_trip(asbd in arbitrary_description(), reserved in any::<u32>()) {
        let asbd = StreamDescription { reserved, ..asbd };
        let bytes = asbd.to_bytes();
        let decoded = StreamDescription::read_from(&bytes).unwrap();
        prop_assert_eq!(decoded.to_bytes(), bytes);
    }
}
