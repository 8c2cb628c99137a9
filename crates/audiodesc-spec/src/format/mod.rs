//! Stream format descriptors.
//!
//! A [`StreamDescription`] mirrors the platform's fixed 40-byte stream
//! description record. Nothing is validated at construction; every query
//! below is a pure function of the fields and degrades to `false`, `None`
//! or `0` on degenerate (e.g. all-zero) records instead of failing.

pub mod common;
pub mod flags;
pub mod ids;
mod render;


use serde::{Deserialize, Serialize};

use crate::fourcc::serde_fourcc;

pub use common::CommonPcmFormat;

/// A stream format descriptor.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct StreamDescription {
    /// Frames per second.
    pub sample_rate: f64,
    /// Format identifier, usually a four-character code.
    #[serde(with = "serde_fourcc")]
    pub format_id: u32,
    /// Format-specific flags (see [`flags`]).
    pub format_flags: u32,
    /// Bytes in one packet of data.
    pub bytes_per_packet: u32,
    /// Frames in one packet of data.
    pub frames_per_packet: u32,
    /// Bytes in one frame of a single buffer.
    pub bytes_per_frame: u32,
    /// Channels in each frame.
    pub channels_per_frame: u32,
    /// Bits of sample data per channel.
    pub bits_per_channel: u32,
    /// Padding; carried through the binary codec, ignored everywhere else.
    #[serde(skip_serializing_if = "is_zero")]
    pub reserved: u32,
}

fn is_zero(value: &u32) -> bool {
    *value == 0
}

impl StreamDescription {
    /// Creates a descriptor from its fields.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        sample_rate: f64,
        format_id: u32,
        format_flags: u32,
        bytes_per_packet: u32,
        frames_per_packet: u32,
        bytes_per_frame: u32,
        channels_per_frame: u32,
        bits_per_channel: u32,
    ) -> Self {
        Self {
            sample_rate,
            format_id,
            format_flags,
            bytes_per_packet,
            frames_per_packet,
            bytes_per_frame,
            channels_per_frame,
            bits_per_channel,
            reserved: 0,
        }
    }

    /// Zeroes every field in place.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// True when every field except the flags and padding is non-zero.
    pub fn is_complete(&self) -> bool {
        self.sample_rate != 0.0
            && self.format_id != 0
            && self.bytes_per_packet != 0
            && self.frames_per_packet != 0
            && self.bytes_per_frame != 0
            && self.channels_per_frame != 0
            && self.bits_per_channel != 0
    }

    fn has_flag(&self, bit: u32) -> bool {
        flags::has(self.format_flags, bit)
    }

    // ------------------------------------------------------------------
    // Classification
    // ------------------------------------------------------------------

    /// Checks if the format is linear PCM.
    pub fn is_pcm(&self) -> bool {
        self.format_id == ids::LINEAR_PCM
    }

    /// Linear PCM with floating-point samples.
    pub fn is_float(&self) -> bool {
        self.is_pcm() && self.has_flag(flags::IS_FLOAT)
    }

    /// Linear PCM with integer (or fixed-point) samples.
    pub fn is_integer(&self) -> bool {
        self.is_pcm() && !self.has_flag(flags::IS_FLOAT)
    }

    /// Linear PCM with the signed-integer bit set.
    pub fn is_signed_integer(&self) -> bool {
        self.is_pcm() && self.has_flag(flags::IS_SIGNED_INTEGER)
    }

    pub fn is_big_endian(&self) -> bool {
        self.has_flag(flags::IS_BIG_ENDIAN)
    }

    pub fn is_little_endian(&self) -> bool {
        !self.has_flag(flags::IS_BIG_ENDIAN)
    }

    /// The endianness bit equals this process's native value.
    pub fn is_native_endian(&self) -> bool {
        self.format_flags & flags::IS_BIG_ENDIAN == flags::NATIVE_ENDIAN
    }

    /// The explicit packed flag is set.
    pub fn is_packed(&self) -> bool {
        self.has_flag(flags::IS_PACKED)
    }

    /// Packedness derived from the frame arithmetic, ignoring the flag:
    /// `(bits_per_channel / 8) * interleaved_channel_count == bytes_per_frame`.
    pub fn is_implicitly_packed(&self) -> bool {
        let container = u64::from(self.bits_per_channel / 8);
        container * u64::from(self.interleaved_channel_count()) == u64::from(self.bytes_per_frame)
    }

    pub fn is_aligned_high(&self) -> bool {
        self.has_flag(flags::IS_ALIGNED_HIGH)
    }

    /// Width of the fixed-point fraction, in bits.
    pub fn fractional_bits(&self) -> u32 {
        flags::fractional_bits(self.format_flags)
    }

    pub fn is_fixed_point(&self) -> bool {
        self.is_integer() && self.fractional_bits() > 0
    }

    pub fn is_non_mixable(&self) -> bool {
        self.has_flag(flags::IS_NON_MIXABLE)
    }

    /// Linear PCM without the non-mixable bit.
    pub fn is_mixable(&self) -> bool {
        self.is_pcm() && !self.has_flag(flags::IS_NON_MIXABLE)
    }

    pub fn is_non_interleaved(&self) -> bool {
        self.has_flag(flags::IS_NON_INTERLEAVED)
    }

    pub fn is_interleaved(&self) -> bool {
        !self.has_flag(flags::IS_NON_INTERLEAVED)
    }

    /// Channels sharing one buffer: all of them when interleaved, else one.
    pub fn interleaved_channel_count(&self) -> u32 {
        if self.is_interleaved() {
            self.channels_per_frame
        } else {
            1
        }
    }

    /// Number of buffers: one when interleaved, else one per channel.
    pub fn channel_stream_count(&self) -> u32 {
        if self.is_interleaved() {
            1
        } else {
            self.channels_per_frame
        }
    }

    pub fn channel_count(&self) -> u32 {
        self.channels_per_frame
    }

    /// Bytes occupied by one sample, `0` when there are no channels.
    pub fn sample_word_size(&self) -> u32 {
        self.bytes_per_frame
            .checked_div(self.interleaved_channel_count())
            .unwrap_or(0)
    }

    /// Seconds per packet. Non-finite when the sample rate is zero; treat
    /// that as undefined rather than as a duration.
    pub fn packet_duration(&self) -> f64 {
        f64::from(self.frames_per_packet) / self.sample_rate
    }

    /// Bytes needed for `frames` frames.
    pub fn byte_size(&self, frames: u64) -> u64 {
        frames.saturating_mul(u64::from(self.bytes_per_frame))
    }

    /// Whole frames in `bytes` bytes, `0` when the frame size is zero.
    pub fn frame_count(&self, bytes: u64) -> u64 {
        bytes
            .checked_div(u64::from(self.bytes_per_frame))
            .unwrap_or(0)
    }

    // ------------------------------------------------------------------
    // Transformation
    // ------------------------------------------------------------------

    /// The non-interleaved form of a PCM record; `None` for other formats.
    pub fn to_non_interleaved(&self) -> Option<Self> {
        if !self.is_pcm() {
            return None;
        }
        if self.is_non_interleaved() {
            return Some(*self);
        }
        let channels = self.channels_per_frame;
        Some(Self {
            format_flags: self.format_flags | flags::IS_NON_INTERLEAVED,
            bytes_per_packet: self.bytes_per_packet.checked_div(channels).unwrap_or(0),
            bytes_per_frame: self.bytes_per_frame.checked_div(channels).unwrap_or(0),
            ..*self
        })
    }

    /// The interleaved form of a PCM record; `None` for other formats.
    pub fn to_interleaved(&self) -> Option<Self> {
        if !self.is_pcm() {
            return None;
        }
        if self.is_interleaved() {
            return Some(*self);
        }
        let channels = self.channels_per_frame;
        Some(Self {
            format_flags: self.format_flags & !flags::IS_NON_INTERLEAVED,
            bytes_per_packet: self.bytes_per_packet.saturating_mul(channels),
            bytes_per_frame: self.bytes_per_frame.saturating_mul(channels),
            ..*self
        })
    }

    // ------------------------------------------------------------------
    // Comparison
    // ------------------------------------------------------------------

    /// Exact equality over every field except the padding.
    pub fn is_equal_to(&self, other: &Self) -> bool {
        self.format_id == other.format_id
            && self.format_flags == other.format_flags
            && self.sample_rate == other.sample_rate
            && self.channels_per_frame == other.channels_per_frame
            && self.bits_per_channel == other.bits_per_channel
            && self.bytes_per_packet == other.bytes_per_packet
            && self.frames_per_packet == other.frames_per_packet
            && self.bytes_per_frame == other.bytes_per_frame
    }

    /// Field-wise equality where a zero on either side matches anything.
    ///
    /// Symmetric, but not transitive: two records that both match an
    /// all-zero record need not match each other.
    pub fn is_congruent_to(&self, other: &Self) -> bool {
        fn matches(a: u32, b: u32) -> bool {
            a == 0 || b == 0 || a == b
        }

        (self.sample_rate == 0.0 || other.sample_rate == 0.0 || self.sample_rate == other.sample_rate)
            && matches(self.format_id, other.format_id)
            && matches(self.format_flags, other.format_flags)
            && matches(self.channels_per_frame, other.channels_per_frame)
            && matches(self.bits_per_channel, other.bits_per_channel)
            && matches(self.bytes_per_packet, other.bytes_per_packet)
            && matches(self.frames_per_packet, other.frames_per_packet)
            && matches(self.bytes_per_frame, other.bytes_per_frame)
    }
}

impl PartialEq for StreamDescription {
    fn eq(&self, other: &Self) -> bool {
        self.is_equal_to(other)
    }
}

impl std::fmt::Display for StreamDescription {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.description())
    }
}
