//! Channel layouts.
//!
//! A [`ChannelLayout`] is one of three things, selected by its tag:
//!
//! - `UseChannelDescriptions`: an explicit list of [`ChannelDescription`]s
//! - `UseChannelBitmap`: a bitmap of speaker positions
//! - any other tag: a well-known layout whose channel count is encoded in
//!   the tag itself


use serde::{Deserialize, Serialize};

use crate::names::bitmap::{SPHERICAL_COORDINATES, RECTANGULAR_COORDINATES};
use crate::names::layout_tags::{USE_CHANNEL_BITMAP, USE_CHANNEL_DESCRIPTIONS};
use crate::names::{
    channel_bitmap_description, channel_flags_description, channel_label_name,
    channel_layout_tag_name, labels, tag_channel_count,
};
use crate::number::format_general;

/// One channel's role, or its position in space.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ChannelDescription {
    /// Channel label; [`labels::USE_COORDINATES`] means "see coordinates".
    pub label: u32,
    /// Coordinate system and unit flags.
    pub flags: u32,
    /// Left/right, back/front, down/up; or azimuth, elevation, distance.
    pub coordinates: [f32; 3],
}

impl ChannelDescription {
    /// A channel identified by label.
    pub fn labeled(label: u32) -> Self {
        Self {
            label,
            ..Default::default()
        }
    }

    /// A channel identified by position.
    pub fn at_coordinates(flags: u32, coordinates: [f32; 3]) -> Self {
        Self {
            label: labels::USE_COORDINATES,
            flags,
            coordinates,
        }
    }

    pub fn uses_coordinates(&self) -> bool {
        self.label == labels::USE_COORDINATES
    }

    pub fn is_rectangular(&self) -> bool {
        self.flags & RECTANGULAR_COORDINATES != 0
    }

    pub fn is_spherical(&self) -> bool {
        self.flags & SPHERICAL_COORDINATES != 0
    }

    /// The label name, or the coordinate flags and position.
    pub fn description(&self) -> String {
        if self.uses_coordinates() {
            let [a, b, c] = self.coordinates;
            format!(
                "{} ({}, {}, {})",
                channel_flags_description(self.flags),
                format_general(f64::from(a)),
                format_general(f64::from(b)),
                format_general(f64::from(c))
            )
        } else {
            channel_label_name(self.label)
        }
    }
}

impl std::fmt::Display for ChannelDescription {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.description())
    }
}

/// A borrowed view of a layout's active representation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ChannelLayoutKind<'a> {
    /// Explicit per-channel descriptions.
    Descriptions(&'a [ChannelDescription]),
    /// Speaker position bitmap.
    Bitmap(u32),
    /// Well-known layout tag.
    Tag(u32),
}

/// A channel layout.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ChannelLayout {
    /// Layout tag (see [`crate::names::layout_tags`]).
    pub tag: u32,
    /// Speaker positions; meaningful only with `UseChannelBitmap`.
    pub bitmap: u32,
    /// Per-channel descriptions; meaningful only with `UseChannelDescriptions`.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub descriptions: Vec<ChannelDescription>,
}

impl ChannelLayout {
    /// A layout described by a well-known tag.
    pub fn from_tag(tag: u32) -> Self {
        Self {
            tag,
            ..Default::default()
        }
    }

    /// A layout described by a speaker bitmap.
    pub fn from_bitmap(bitmap: u32) -> Self {
        Self {
            tag: USE_CHANNEL_BITMAP,
            bitmap,
            descriptions: Vec::new(),
        }
    }

    /// A layout described channel by channel.
    pub fn from_descriptions(descriptions: Vec<ChannelDescription>) -> Self {
        Self {
            tag: USE_CHANNEL_DESCRIPTIONS,
            bitmap: 0,
            descriptions,
        }
    }

    pub fn kind(&self) -> ChannelLayoutKind<'_> {
        match self.tag {
            USE_CHANNEL_DESCRIPTIONS => ChannelLayoutKind::Descriptions(&self.descriptions),
            USE_CHANNEL_BITMAP => ChannelLayoutKind::Bitmap(self.bitmap),
            tag => ChannelLayoutKind::Tag(tag),
        }
    }

    /// The explicit channel descriptions.
    ///
    /// # Panics
    ///
    /// Panics if the tag is not `UseChannelDescriptions`. Reading
    /// descriptions from a bitmap or tagged layout is a caller bug; use
    /// [`ChannelLayout::kind`] to branch instead.
    pub fn channel_descriptions(&self) -> &[ChannelDescription] {
        assert_eq!(
            self.tag, USE_CHANNEL_DESCRIPTIONS,
            "channel descriptions requested from a layout with tag {}",
            channel_layout_tag_name(self.tag)
        );
        &self.descriptions
    }

    /// Number of channels in the layout.
    pub fn channel_count(&self) -> u32 {
        match self.kind() {
            ChannelLayoutKind::Descriptions(descriptions) => {
                u32::try_from(descriptions.len()).unwrap_or(u32::MAX)
            }
            ChannelLayoutKind::Bitmap(bitmap) => bitmap.count_ones(),
            ChannelLayoutKind::Tag(tag) => tag_channel_count(tag),
        }
    }

    /// Renders the channel count and the active representation, e.g.
    /// `"2 ch, tag 0x00650002 [Stereo]"`.
    pub fn description(&self) -> String {
        let count = self.channel_count();
        match self.kind() {
            ChannelLayoutKind::Descriptions(descriptions) => {
                let channels: Vec<String> =
                    descriptions.iter().map(ChannelDescription::description).collect();
                format!("{} ch, [{}]", count, channels.join(", "))
            }
            ChannelLayoutKind::Bitmap(bitmap) => format!(
                "{} ch, bitmap 0x{:08x} [{}]",
                count,
                bitmap,
                channel_bitmap_description(bitmap)
            ),
            ChannelLayoutKind::Tag(tag) => format!(
                "{} ch, tag 0x{:08x} [{}]",
                count,
                tag,
                channel_layout_tag_name(tag)
            ),
        }
    }
}

impl std::fmt::Display for ChannelLayout {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.description())
    }
}
