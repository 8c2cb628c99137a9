//! Closed numeric ranges.

use serde::{Deserialize, Serialize};

use crate::number::format_general;

/// A `[minimum, maximum]` pair, e.g. a device's supported sample rates.
///
/// Ordering of the bounds is not enforced; [`ValueRange::contains`] assumes
/// `minimum <= maximum` and an inverted range contains nothing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ValueRange {
    /// Lower bound, inclusive.
    pub minimum: f64,
    /// Upper bound, inclusive.
    pub maximum: f64,
}

impl ValueRange {
    /// Creates a range.
    pub fn new(minimum: f64, maximum: f64) -> Self {
        Self { minimum, maximum }
    }

    /// A range containing exactly one value.
    pub fn single(value: f64) -> Self {
        Self::new(value, value)
    }

    /// Checks if `value` lies within the bounds, inclusive.
    pub fn contains(&self, value: f64) -> bool {
        self.minimum <= value && value <= self.maximum
    }

    /// Exact equality of both bounds.
    pub fn is_equal_to(&self, other: &Self) -> bool {
        self.minimum == other.minimum && self.maximum == other.maximum
    }
}

impl std::fmt::Display for ValueRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "[{}, {}]",
            format_general(self.minimum),
            format_general(self.maximum)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contains_bounds() {
        let range = ValueRange::new(44100.0, 192000.0);
        assert!(range.contains(44100.0));
        assert!(range.contains(192000.0));
        assert!(range.contains(96000.0));
        assert!(!range.contains(192000.0 + 1e-6));
        assert!(!range.contains(22050.0));
        assert!(!range.contains(f64::NAN));
    }

    #[test]
    fn test_inverted_range_is_not_normalized() {
        let range = ValueRange::new(10.0, 1.0);
        assert!(!range.contains(5.0));
        assert_eq!(range.minimum, 10.0);
    }

    #[test]
    fn test_equality() {
        assert!(ValueRange::single(48000.0).is_equal_to(&ValueRange::new(48000.0, 48000.0)));
        assert!(!ValueRange::new(0.0, 1.0).is_equal_to(&ValueRange::new(0.0, 2.0)));
    }

    #[test]
    fn test_display() {
        assert_eq!(ValueRange::new(8000.0, 384000.0).to_string(), "[8000, 384000]");
    }
}
