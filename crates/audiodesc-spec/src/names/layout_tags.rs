//! Channel layout tag names.
//!
//! A tag packs a layout index in the high 16 bits and the channel count in
//! the low 16 bits. Aliases (e.g. `MPEG_2_0` for `Stereo`) share a value, so
//! the table lists each value once under its primary name.

use super::lookup;

const fn tag(index: u32, channels: u32) -> u32 {
    (index << 16) | channels
}

pub const USE_CHANNEL_DESCRIPTIONS: u32 = tag(0, 0);
pub const USE_CHANNEL_BITMAP: u32 = tag(1, 0);
pub const MONO: u32 = tag(100, 1);
pub const STEREO: u32 = tag(101, 2);
pub const STEREO_HEADPHONES: u32 = tag(102, 2);
pub const QUADRAPHONIC: u32 = tag(108, 4);
pub const MPEG_5_1_A: u32 = tag(121, 6);
pub const MPEG_7_1_A: u32 = tag(126, 8);
pub const DISCRETE_IN_ORDER: u32 = tag(147, 0);
pub const HOA_ACN_SN3D: u32 = tag(190, 0);
pub const HOA_ACN_N3D: u32 = tag(191, 0);
pub const ATMOS_7_1_4: u32 = tag(192, 12);
pub const UNKNOWN: u32 = 0xFFFF_0000;

/// Mask selecting the layout index of a tag.
pub const TAG_FAMILY_MASK: u32 = 0xFFFF_0000;

/// Primary names keyed by exact tag value.
pub const LAYOUT_TAG_NAMES: &[(u32, &str)] = &[
    (USE_CHANNEL_DESCRIPTIONS, "UseChannelDescriptions"),
    (USE_CHANNEL_BITMAP, "UseChannelBitmap"),
    (MONO, "Mono"),
    (STEREO, "Stereo"),
    (STEREO_HEADPHONES, "StereoHeadphones"),
    (tag(103, 2), "MatrixStereo"),
    (tag(104, 2), "MidSide"),
    (tag(105, 2), "XY"),
    (tag(106, 2), "Binaural"),
    (tag(107, 4), "Ambisonic_B_Format"),
    (QUADRAPHONIC, "Quadraphonic"),
    (tag(109, 5), "Pentagonal"),
    (tag(110, 6), "Hexagonal"),
    (tag(111, 8), "Octagonal"),
    (tag(112, 8), "Cube"),
    (tag(113, 3), "MPEG_3_0_A"),
    (tag(114, 3), "MPEG_3_0_B"),
    (tag(115, 4), "MPEG_4_0_A"),
    (tag(116, 4), "MPEG_4_0_B"),
    (tag(117, 5), "MPEG_5_0_A"),
    (tag(118, 5), "MPEG_5_0_B"),
    (tag(119, 5), "MPEG_5_0_C"),
    (tag(120, 5), "MPEG_5_0_D"),
    (MPEG_5_1_A, "MPEG_5_1_A"),
    (tag(122, 6), "MPEG_5_1_B"),
    (tag(123, 6), "MPEG_5_1_C"),
    (tag(124, 6), "MPEG_5_1_D"),
    (tag(125, 7), "MPEG_6_1_A"),
    (MPEG_7_1_A, "MPEG_7_1_A"),
    (tag(127, 8), "MPEG_7_1_B"),
    (tag(128, 8), "MPEG_7_1_C"),
    (tag(129, 8), "Emagic_Default_7_1"),
    (tag(130, 8), "SMPTE_DTV"),
    (tag(131, 3), "ITU_2_1"),
    (tag(132, 4), "ITU_2_2"),
    (tag(133, 3), "DVD_4"),
    (tag(134, 4), "DVD_5"),
    (tag(135, 5), "DVD_6"),
    (tag(136, 4), "DVD_10"),
    (tag(137, 5), "DVD_11"),
    (tag(138, 5), "DVD_18"),
    (tag(139, 6), "AudioUnit_6_0"),
    (tag(140, 7), "AudioUnit_7_0"),
    (tag(141, 6), "AAC_6_0"),
    (tag(142, 7), "AAC_6_1"),
    (tag(143, 7), "AAC_7_0"),
    (tag(144, 8), "AAC_Octagonal"),
    (tag(145, 16), "TMH_10_2_std"),
    (tag(146, 21), "TMH_10_2_full"),
    (tag(148, 7), "AudioUnit_7_0_Front"),
    (tag(149, 2), "AC3_1_0_1"),
    (tag(150, 3), "AC3_3_0"),
    (tag(151, 4), "AC3_3_1"),
    (tag(152, 4), "AC3_3_0_1"),
    (tag(153, 4), "AC3_2_1_1"),
    (tag(154, 5), "AC3_3_1_1"),
    (tag(155, 6), "EAC_6_0_A"),
    (tag(156, 7), "EAC_7_0_A"),
    (tag(157, 7), "EAC3_6_1_A"),
    (tag(158, 7), "EAC3_6_1_B"),
    (tag(159, 7), "EAC3_6_1_C"),
    (tag(160, 8), "EAC3_7_1_A"),
    (tag(161, 8), "EAC3_7_1_B"),
    (tag(162, 8), "EAC3_7_1_C"),
    (tag(163, 8), "EAC3_7_1_D"),
    (tag(164, 8), "EAC3_7_1_E"),
    (tag(165, 8), "EAC3_7_1_F"),
    (tag(166, 8), "EAC3_7_1_G"),
    (tag(167, 8), "EAC3_7_1_H"),
    (tag(168, 4), "DTS_3_1"),
    (tag(169, 5), "DTS_4_1"),
    (tag(170, 6), "DTS_6_0_A"),
    (tag(171, 6), "DTS_6_0_B"),
    (tag(172, 6), "DTS_6_0_C"),
    (tag(173, 7), "DTS_6_1_A"),
    (tag(174, 7), "DTS_6_1_B"),
    (tag(175, 7), "DTS_6_1_C"),
    (tag(176, 7), "DTS_7_0"),
    (tag(177, 8), "DTS_7_1"),
    (tag(178, 8), "DTS_8_0_A"),
    (tag(179, 8), "DTS_8_0_B"),
    (tag(180, 9), "DTS_8_1_A"),
    (tag(181, 9), "DTS_8_1_B"),
    (tag(182, 7), "DTS_6_1_D"),
    (tag(183, 8), "AAC_7_1_B"),
    (tag(184, 8), "AAC_7_1_C"),
    (tag(185, 4), "WAVE_4_0_B"),
    (tag(186, 5), "WAVE_5_0_B"),
    (tag(187, 6), "WAVE_5_1_B"),
    (tag(188, 7), "WAVE_6_1"),
    (tag(189, 8), "WAVE_7_1"),
    (ATMOS_7_1_4, "Atmos_7_1_4"),
    (tag(193, 16), "Atmos_9_1_6"),
    (tag(194, 8), "Atmos_5_1_2"),
    (tag(195, 10), "Atmos_5_1_4"),
    (tag(196, 10), "Atmos_7_1_2"),
    (tag(197, 4), "Logic_4_0_C"),
    (tag(198, 6), "Logic_6_0_B"),
    (tag(199, 7), "Logic_6_1_B"),
    (tag(200, 7), "Logic_6_1_D"),
    (tag(201, 8), "Logic_7_1_B"),
    (tag(202, 12), "Logic_Atmos_7_1_4_B"),
    (tag(203, 14), "Logic_Atmos_7_1_6"),
    (tag(204, 24), "CICP_13"),
    (tag(205, 8), "CICP_14"),
    (tag(206, 12), "CICP_15"),
    (tag(207, 10), "CICP_16"),
    (tag(208, 12), "CICP_17"),
    (tag(209, 14), "CICP_18"),
    (tag(210, 12), "CICP_19"),
    (tag(211, 14), "CICP_20"),
    (UNKNOWN, "Unknown"),
];

/// Parametrized families: the low 16 bits carry the channel count.
pub const LAYOUT_TAG_FAMILIES: &[(u32, &str)] = &[
    (DISCRETE_IN_ORDER, "DiscreteInOrder"),
    (HOA_ACN_SN3D, "HOA_ACN_SN3D"),
    (HOA_ACN_N3D, "HOA_ACN_N3D"),
];

/// Number of channels a tag describes.
pub const fn tag_channel_count(tag: u32) -> u32 {
    tag & 0x0000_FFFF
}

/// Resolves a tag to a name.
///
/// Exact matches win; family members render as `Family(N)`; anything else
/// renders as `0x%08x`.
pub fn channel_layout_tag_name(tag: u32) -> String {
    if let Some(name) = lookup(LAYOUT_TAG_NAMES, tag) {
        return name.to_string();
    }
    if let Some(family) = lookup(LAYOUT_TAG_FAMILIES, tag & TAG_FAMILY_MASK) {
        return format!("{}({})", family, tag_channel_count(tag));
    }
    format!("0x{:08x}", tag)
}
