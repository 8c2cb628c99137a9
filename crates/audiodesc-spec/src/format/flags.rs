//! Format flag bits.
//!
//! Flags are carried as a raw `u32`. Their meaning depends on the format
//! identifier; the linear-PCM interpretation below is the one the
//! classification queries use.

/// Samples are IEEE floating point.
pub const IS_FLOAT: u32 = 1 << 0;
/// Samples are big-endian.
pub const IS_BIG_ENDIAN: u32 = 1 << 1;
/// Integer samples are signed.
pub const IS_SIGNED_INTEGER: u32 = 1 << 2;
/// Sample bits occupy the entire container.
pub const IS_PACKED: u32 = 1 << 3;
/// Unpacked sample bits sit in the high end of the container.
pub const IS_ALIGNED_HIGH: u32 = 1 << 4;
/// Each channel lives in its own buffer.
pub const IS_NON_INTERLEAVED: u32 = 1 << 5;
/// The stream may not be mixed with others.
pub const IS_NON_MIXABLE: u32 = 1 << 6;
/// Marker for "all flags clear" when zero would otherwise mean "unspecified".
pub const ARE_ALL_CLEAR: u32 = 0x8000_0000;

/// Shift of the fixed-point fraction width sub-field.
pub const SAMPLE_FRACTION_SHIFT: u32 = 7;
/// Mask of the fixed-point fraction width sub-field.
pub const SAMPLE_FRACTION_MASK: u32 = 0x3F << SAMPLE_FRACTION_SHIFT;

/// The endianness bit value for this process.
#[cfg(target_endian = "big")]
pub const NATIVE_ENDIAN: u32 = IS_BIG_ENDIAN;
/// The endianness bit value for this process.
#[cfg(target_endian = "little")]
pub const NATIVE_ENDIAN: u32 = 0;

/// Native-endian signed packed integers.
pub const CANONICAL_INTEGER: u32 = IS_SIGNED_INTEGER | NATIVE_ENDIAN | IS_PACKED;
/// Native-endian packed floats.
pub const CANONICAL_FLOAT: u32 = IS_FLOAT | NATIVE_ENDIAN | IS_PACKED;

/// Apple Lossless and FLAC: source material was 16-bit.
pub const LOSSLESS_16_BIT_SOURCE: u32 = 1;
/// Apple Lossless and FLAC: source material was 20-bit.
pub const LOSSLESS_20_BIT_SOURCE: u32 = 2;
/// Apple Lossless and FLAC: source material was 24-bit.
pub const LOSSLESS_24_BIT_SOURCE: u32 = 3;
/// Apple Lossless and FLAC: source material was 32-bit.
pub const LOSSLESS_32_BIT_SOURCE: u32 = 4;

/// Returns true if `bit` is set in `flags`.
pub const fn has(flags: u32, bit: u32) -> bool {
    flags & bit != 0
}

/// Extracts the fixed-point fraction width.
pub const fn fractional_bits(flags: u32) -> u32 {
    (flags & SAMPLE_FRACTION_MASK) >> SAMPLE_FRACTION_SHIFT
}

/// Builds the fraction width sub-field for `bits` fractional bits.
pub const fn with_fractional_bits(bits: u32) -> u32 {
    (bits << SAMPLE_FRACTION_SHIFT) & SAMPLE_FRACTION_MASK
}

/// Maps a lossless source-depth flag value to its bit depth.
///
/// Only an exact match counts; any other flag value yields `None`.
pub const fn lossless_source_bit_depth(flags: u32) -> Option<u32> {
    match flags {
        LOSSLESS_16_BIT_SOURCE => Some(16),
        LOSSLESS_20_BIT_SOURCE => Some(20),
        LOSSLESS_24_BIT_SOURCE => Some(24),
        LOSSLESS_32_BIT_SOURCE => Some(32),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fraction_field() {
        assert_eq!(SAMPLE_FRACTION_MASK, 0x1F80);
        assert_eq!(fractional_bits(with_fractional_bits(24)), 24);
        assert_eq!(fractional_bits(IS_FLOAT | IS_PACKED), 0);
        // Width is six bits; anything larger is truncated by the mask.
        assert_eq!(fractional_bits(with_fractional_bits(64)), 0);
    }

    #[test]
    fn test_lossless_table() {
        assert_eq!(lossless_source_bit_depth(1), Some(16));
        assert_eq!(lossless_source_bit_depth(2), Some(20));
        assert_eq!(lossless_source_bit_depth(3), Some(24));
        assert_eq!(lossless_source_bit_depth(4), Some(32));
        assert_eq!(lossless_source_bit_depth(0), None);
        assert_eq!(lossless_source_bit_depth(5), None);
    }

    #[test]
    fn test_native_endian_matches_target() {
        assert_eq!(NATIVE_ENDIAN != 0, cfg!(target_endian = "big"));
    }
}
