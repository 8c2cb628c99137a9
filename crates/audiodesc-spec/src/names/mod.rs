//! Static naming tables.
//!
//! Every lookup here is total: an exact table hit returns the table name,
//! parametrized families render their family name plus the parameter, and
//! anything else falls back to a hex rendering of the raw value.
//!
//! - [`format_ids`]: format identifier names
//! - [`layout_tags`]: channel layout tag names and channel counts
//! - [`labels`]: channel label names
//! - [`bitmap`]: channel bitmap bit names and coordinate flag names

pub mod bitmap;
pub mod format_ids;
pub mod labels;
pub mod layout_tags;

pub use bitmap::{channel_bitmap_description, channel_flags_description};
pub use format_ids::{format_id_description, format_id_name};
pub use labels::channel_label_name;
pub use layout_tags::{channel_layout_tag_name, tag_channel_count};

/// Looks up `code` in a sorted-or-unsorted `(code, name)` table.
pub(crate) fn lookup(table: &'static [(u32, &'static str)], code: u32) -> Option<&'static str> {
    table
        .iter()
        .find(|(value, _)| *value == code)
        .map(|(_, name)| *name)
}

/// Yields each set bit of `mask`, lowest first.
pub fn set_bits(mask: u32) -> impl Iterator<Item = u32> {
    let mut remaining = mask;
    std::iter::from_fn(move || {
        if remaining == 0 {
            return None;
        }
        let bit = remaining & remaining.wrapping_neg();
        remaining &= !bit;
        Some(bit)
    })
}

/// Renders each set bit of `mask` through `table`, joined by `" | "`.
///
/// Bits without a name render as `0x%08x`. An empty mask renders as an
/// empty string.
pub fn describe_bits(mask: u32, table: &'static [(u32, &'static str)]) -> String {
    set_bits(mask)
        .map(|bit| match lookup(table, bit) {
            Some(name) => name.to_string(),
            None => format!("0x{:08x}", bit),
        })
        .collect::<Vec<_>>()
        .join(" | ")
}

#[cfg(test)]
mod tests {
    use super::*;

    const TABLE: &[(u32, &str)] = &[(1, "One"), (4, "Four")];

    #[test]
    fn test_set_bits_lowest_first() {
        let bits: Vec<u32> = set_bits(0b1010_0110).collect();
        assert_eq!(bits, vec![0b10, 0b100, 0b10_0000, 0b1000_0000]);
        assert_eq!(set_bits(0).count(), 0);
        assert_eq!(set_bits(u32::MAX).count(), 32);
    }

    #[test]
    fn test_set_bits_high_bit() {
        let bits: Vec<u32> = set_bits(0x8000_0001).collect();
        assert_eq!(bits, vec![1, 0x8000_0000]);
    }

    #[test]
    fn test_describe_bits() {
        assert_eq!(describe_bits(0b101, TABLE), "One | Four");
        assert_eq!(describe_bits(0b111, TABLE), "One | 0x00000002 | Four");
        assert_eq!(describe_bits(0, TABLE), "");
    }
}
