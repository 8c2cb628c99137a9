//! Channel bitmap and channel description flag names.

use super::describe_bits;

pub const LEFT: u32 = 1 << 0;
pub const RIGHT: u32 = 1 << 1;
pub const CENTER: u32 = 1 << 2;
pub const LFE_SCREEN: u32 = 1 << 3;
pub const LEFT_SURROUND: u32 = 1 << 4;
pub const RIGHT_SURROUND: u32 = 1 << 5;

/// Names of the channel position bits.
pub const CHANNEL_BITMAP_NAMES: &[(u32, &str)] = &[
    (LEFT, "Left"),
    (RIGHT, "Right"),
    (CENTER, "Center"),
    (LFE_SCREEN, "LFEScreen"),
    (LEFT_SURROUND, "LeftSurround"),
    (RIGHT_SURROUND, "RightSurround"),
    (1 << 6, "LeftCenter"),
    (1 << 7, "RightCenter"),
    (1 << 8, "CenterSurround"),
    (1 << 9, "LeftSurroundDirect"),
    (1 << 10, "RightSurroundDirect"),
    (1 << 11, "TopCenterSurround"),
    (1 << 12, "VerticalHeightLeft"),
    (1 << 13, "VerticalHeightCenter"),
    (1 << 14, "VerticalHeightRight"),
    (1 << 15, "TopBackLeft"),
    (1 << 16, "TopBackCenter"),
    (1 << 17, "TopBackRight"),
    (1 << 21, "LeftTopMiddle"),
    (1 << 23, "RightTopMiddle"),
    (1 << 24, "LeftTopRear"),
    (1 << 25, "CenterTopRear"),
    (1 << 26, "RightTopRear"),
];

/// Coordinates are left/right, back/front, down/up.
pub const RECTANGULAR_COORDINATES: u32 = 1 << 0;
/// Coordinates are azimuth, elevation, distance.
pub const SPHERICAL_COORDINATES: u32 = 1 << 1;
/// Distances are in meters rather than relative units.
pub const METERS: u32 = 1 << 2;

/// Names of the channel description flag bits.
pub const CHANNEL_FLAG_NAMES: &[(u32, &str)] = &[
    (RECTANGULAR_COORDINATES, "Rectangular"),
    (SPHERICAL_COORDINATES, "Spherical"),
    (METERS, "Meters"),
];

/// Decomposes a channel bitmap into `" | "`-joined position names.
pub fn channel_bitmap_description(bitmap: u32) -> String {
    describe_bits(bitmap, CHANNEL_BITMAP_NAMES)
}

/// Decomposes channel description flags; no flags renders as `AllOff`.
pub fn channel_flags_description(flags: u32) -> String {
    if flags == 0 {
        return "AllOff".to_string();
    }
    describe_bits(flags, CHANNEL_FLAG_NAMES)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bitmap_description() {
        assert_eq!(channel_bitmap_description(LEFT | RIGHT), "Left | Right");
        assert_eq!(
            channel_bitmap_description(LEFT | RIGHT | CENTER | LFE_SCREEN | LEFT_SURROUND | RIGHT_SURROUND),
            "Left | Right | Center | LFEScreen | LeftSurround | RightSurround"
        );
        assert_eq!(channel_bitmap_description(1 << 18), "0x00040000");
        assert_eq!(channel_bitmap_description(0), "");
    }

    #[test]
    fn test_flags_description() {
        assert_eq!(channel_flags_description(0), "AllOff");
        assert_eq!(
            channel_flags_description(RECTANGULAR_COORDINATES | METERS),
            "Rectangular | Meters"
        );
        assert_eq!(channel_flags_description(SPHERICAL_COORDINATES), "Spherical");
        assert_eq!(channel_flags_description(1 << 3), "0x00000008");
    }
}
