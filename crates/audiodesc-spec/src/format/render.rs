//! One-line descriptions of stream formats.

use std::fmt::Write;

use super::{flags, ids, StreamDescription};
use crate::names::format_id_description;
use crate::number::format_sample_rate;

impl StreamDescription {
    /// Renders a deterministic single-line description.
    ///
    /// ```
    /// use audiodesc_spec::{CommonPcmFormat, StreamDescription};
    ///
    /// let asbd = StreamDescription::common(CommonPcmFormat::Int16, 44100.0, 2, true);
    /// assert_eq!(asbd.description(), "2 ch @ 44100 Hz, Int16, interleaved");
    /// ```
    pub fn description(&self) -> String {
        let mut out = format!(
            "{} ch @ {} Hz, ",
            self.channels_per_frame,
            format_sample_rate(self.sample_rate)
        );

        if let Some(common) = self.common_format() {
            out.push_str(common.display_name());
            out.push_str(if self.is_interleaved() {
                ", interleaved"
            } else {
                ", deinterleaved"
            });
            return out;
        }

        if self.is_pcm() {
            self.write_pcm_clauses(&mut out);
        } else if ids::uses_lossless_source_flags(self.format_id) {
            let _ = write!(
                out,
                "{} (0x{:08x}) ",
                format_id_description(self.format_id),
                self.format_flags
            );
            match flags::lossless_source_bit_depth(self.format_flags) {
                Some(bits) => {
                    let _ = write!(out, "from {}-bit source, ", bits);
                }
                None => out.push_str("from unknown source bit depth, "),
            }
            let _ = write!(out, "{} frames/packet", self.frames_per_packet);
        } else {
            let _ = write!(
                out,
                "{} (0x{:08x}) {} bits/channel, {} bytes/packet, {} frames/packet, {} bytes/frame",
                format_id_description(self.format_id),
                self.format_flags,
                self.bits_per_channel,
                self.bytes_per_packet,
                self.frames_per_packet,
                self.bytes_per_frame
            );
        }

        out
    }

    /// Bit depth, byte order, sign, sample kind, packing, alignment, layout.
    fn write_pcm_clauses(&self, out: &mut String) {
        let fraction = self.fractional_bits();
        if self.is_fixed_point() {
            let _ = write!(
                out,
                "{}.{}-bit",
                self.bits_per_channel.saturating_sub(fraction),
                fraction
            );
        } else {
            let _ = write!(out, "{}-bit", self.bits_per_channel);
        }

        let word_size = self.sample_word_size();
        if word_size > 1 {
            out.push_str(if self.is_big_endian() {
                " big-endian"
            } else {
                " little-endian"
            });
        }

        let is_integer = self.is_integer();
        if is_integer {
            out.push_str(if self.is_signed_integer() {
                " signed"
            } else {
                " unsigned"
            });
        }
        out.push_str(if is_integer { " integer" } else { " float" });

        // Packing only says something when the samples do not exactly fill
        // the frame; alignment only when they are also not flagged packed.
        if word_size > 0 && !self.is_implicitly_packed() {
            let _ = write!(
                out,
                ", {} in {} bytes",
                if self.is_packed() { "packed" } else { "unpacked" },
                word_size
            );
            if !self.is_packed() {
                out.push_str(if self.is_aligned_high() {
                    " high-aligned"
                } else {
                    " low-aligned"
                });
            }
        }

        if self.is_non_interleaved() {
            out.push_str(", deinterleaved");
        }
    }
}
