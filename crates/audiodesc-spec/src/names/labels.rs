//! Channel label names.

use super::lookup;

pub const UNUSED: u32 = 0;
pub const LEFT: u32 = 1;
pub const RIGHT: u32 = 2;
pub const CENTER: u32 = 3;
pub const LFE_SCREEN: u32 = 4;
pub const LEFT_SURROUND: u32 = 5;
pub const RIGHT_SURROUND: u32 = 6;
pub const MONO: u32 = 42;
/// Sentinel: the description carries coordinates instead of a role.
pub const USE_COORDINATES: u32 = 100;
pub const DISCRETE: u32 = 400;
pub const HOA_ACN: u32 = 500;
pub const UNKNOWN: u32 = 0xFFFF_FFFF;

/// `Discrete_N` labels: `DISCRETE_0 | N`.
pub const DISCRETE_0: u32 = 1 << 16;
/// `HOA_ACN_N` labels (SN3D normalization): `HOA_ACN_0 | N`.
pub const HOA_ACN_0: u32 = 2 << 16;
/// `HOA_N3D_N` labels: `HOA_N3D_0 | N`.
pub const HOA_N3D_0: u32 = 3 << 16;

/// Mask selecting the family of a parametrized label.
pub const LABEL_FAMILY_MASK: u32 = 0xFFFF_0000;

/// Names keyed by exact label value.
pub const CHANNEL_LABEL_NAMES: &[(u32, &str)] = &[
    (UNUSED, "Unused"),
    (LEFT, "Left"),
    (RIGHT, "Right"),
    (CENTER, "Center"),
    (LFE_SCREEN, "LFEScreen"),
    (LEFT_SURROUND, "LeftSurround"),
    (RIGHT_SURROUND, "RightSurround"),
    (7, "LeftCenter"),
    (8, "RightCenter"),
    (9, "CenterSurround"),
    (10, "LeftSurroundDirect"),
    (11, "RightSurroundDirect"),
    (12, "TopCenterSurround"),
    (13, "VerticalHeightLeft"),
    (14, "VerticalHeightCenter"),
    (15, "VerticalHeightRight"),
    (16, "TopBackLeft"),
    (17, "TopBackCenter"),
    (18, "TopBackRight"),
    (33, "RearSurroundLeft"),
    (34, "RearSurroundRight"),
    (35, "LeftWide"),
    (36, "RightWide"),
    (37, "LFE2"),
    (38, "LeftTotal"),
    (39, "RightTotal"),
    (40, "HearingImpaired"),
    (41, "Narration"),
    (MONO, "Mono"),
    (43, "DialogCentricMix"),
    (44, "CenterSurroundDirect"),
    (45, "Haptic"),
    (49, "LeftTopMiddle"),
    (51, "RightTopMiddle"),
    (52, "LeftTopRear"),
    (53, "CenterTopRear"),
    (54, "RightTopRear"),
    (55, "LeftSideSurround"),
    (56, "RightSideSurround"),
    (57, "LeftBottom"),
    (58, "RightBottom"),
    (59, "CenterBottom"),
    (60, "LeftTopSurround"),
    (61, "RightTopSurround"),
    (62, "LFE3"),
    (63, "LeftBackSurround"),
    (64, "RightBackSurround"),
    (65, "LeftEdgeOfScreen"),
    (66, "RightEdgeOfScreen"),
    (USE_COORDINATES, "UseCoordinates"),
    (200, "Ambisonic_W"),
    (201, "Ambisonic_X"),
    (202, "Ambisonic_Y"),
    (203, "Ambisonic_Z"),
    (204, "MS_Mid"),
    (205, "MS_Side"),
    (206, "XY_X"),
    (207, "XY_Y"),
    (208, "BinauralLeft"),
    (209, "BinauralRight"),
    (301, "HeadphonesLeft"),
    (302, "HeadphonesRight"),
    (304, "ClickTrack"),
    (305, "ForeignLanguage"),
    (DISCRETE, "Discrete"),
    (HOA_ACN, "HOA_ACN"),
    (UNKNOWN, "Unknown"),
];

/// Parametrized families: the low 16 bits carry the index.
pub const CHANNEL_LABEL_FAMILIES: &[(u32, &str)] = &[
    (DISCRETE_0, "Discrete"),
    (HOA_ACN_0, "HOA_ACN"),
    (HOA_N3D_0, "HOA_N3D"),
];

/// Resolves a label to a name.
///
/// Exact matches win; family members render as `Family_N`; anything else
/// renders as `0x%08x`.
pub fn channel_label_name(label: u32) -> String {
    if let Some(name) = lookup(CHANNEL_LABEL_NAMES, label) {
        return name.to_string();
    }
    if let Some(family) = lookup(CHANNEL_LABEL_FAMILIES, label & LABEL_FAMILY_MASK) {
        return format!("{}_{}", family, label & !LABEL_FAMILY_MASK);
    }
    format!("0x{:08x}", label)
}
