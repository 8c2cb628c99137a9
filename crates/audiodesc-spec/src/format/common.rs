//! The four canonical linear-PCM encodings.

use serde::{Deserialize, Serialize};

use super::{flags, ids, StreamDescription};
use crate::error::DescError;

/// A native-endian, packed linear-PCM encoding recognized by name.
///
/// This is a computed view of a [`StreamDescription`]; it is never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CommonPcmFormat {
    /// 32-bit IEEE float.
    Float32,
    /// 64-bit IEEE float.
    Float64,
    /// 16-bit signed integer.
    Int16,
    /// 32-bit signed integer.
    Int32,
}

impl CommonPcmFormat {
    /// Returns the lowercase identifier (e.g. `"int16"`).
    pub fn as_str(&self) -> &'static str {
        match self {
            CommonPcmFormat::Float32 => "float32",
            CommonPcmFormat::Float64 => "float64",
            CommonPcmFormat::Int16 => "int16",
            CommonPcmFormat::Int32 => "int32",
        }
    }

    /// Returns the name used in descriptions (e.g. `"Int16"`).
    pub fn display_name(&self) -> &'static str {
        match self {
            CommonPcmFormat::Float32 => "Float32",
            CommonPcmFormat::Float64 => "Float64",
            CommonPcmFormat::Int16 => "Int16",
            CommonPcmFormat::Int32 => "Int32",
        }
    }

    /// Sample width in bits.
    pub fn bits_per_channel(&self) -> u32 {
        match self {
            CommonPcmFormat::Int16 => 16,
            CommonPcmFormat::Float32 | CommonPcmFormat::Int32 => 32,
            CommonPcmFormat::Float64 => 64,
        }
    }

    /// Checks if this is a floating-point encoding.
    pub fn is_float(&self) -> bool {
        matches!(self, CommonPcmFormat::Float32 | CommonPcmFormat::Float64)
    }

    /// Format flags of the canonical record for this encoding.
    pub fn format_flags(&self, interleaved: bool) -> u32 {
        let kind = if self.is_float() {
            flags::IS_FLOAT
        } else {
            flags::IS_SIGNED_INTEGER
        };
        let layout = if interleaved {
            0
        } else {
            flags::IS_NON_INTERLEAVED
        };
        kind | flags::NATIVE_ENDIAN | flags::IS_PACKED | layout
    }

    /// Returns all encodings.
    pub fn all() -> &'static [CommonPcmFormat] {
        &[
            CommonPcmFormat::Float32,
            CommonPcmFormat::Float64,
            CommonPcmFormat::Int16,
            CommonPcmFormat::Int32,
        ]
    }
}

impl std::fmt::Display for CommonPcmFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for CommonPcmFormat {
    type Err = DescError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "float32" => Ok(CommonPcmFormat::Float32),
            "float64" => Ok(CommonPcmFormat::Float64),
            "int16" => Ok(CommonPcmFormat::Int16),
            "int32" => Ok(CommonPcmFormat::Int32),
            _ => Err(DescError::UnknownCommonFormat(s.to_string())),
        }
    }
}

impl StreamDescription {
    /// Builds the canonical linear-PCM record for `kind`.
    ///
    /// The result always classifies back to `kind` via
    /// [`StreamDescription::common_format`].
    pub fn common(
        kind: CommonPcmFormat,
        sample_rate: f64,
        channels_per_frame: u32,
        interleaved: bool,
    ) -> Self {
        let bits_per_channel = kind.bits_per_channel();
        let samples_per_frame = if interleaved { channels_per_frame } else { 1 };
        let bytes_per_frame = samples_per_frame.saturating_mul(bits_per_channel / 8);

        Self {
            sample_rate,
            format_id: ids::LINEAR_PCM,
            format_flags: kind.format_flags(interleaved),
            bytes_per_packet: bytes_per_frame,
            frames_per_packet: 1,
            bytes_per_frame,
            channels_per_frame,
            bits_per_channel,
            reserved: 0,
        }
    }

    /// Identifies which canonical encoding this record is, if any.
    ///
    /// Requires linear PCM in native byte order. Floats must be 32 or 64
    /// bits wide. Integers must be signed, not fixed-point, flagged packed,
    /// exactly packed (see [`StreamDescription::is_implicitly_packed`]) and 16
    /// or 32 bits wide.
    pub fn common_format(&self) -> Option<CommonPcmFormat> {
        if !self.is_pcm() || !self.is_native_endian() {
            return None;
        }

        if self.is_float() {
            match self.bits_per_channel {
                32 => Some(CommonPcmFormat::Float32),
                64 => Some(CommonPcmFormat::Float64),
                _ => None,
            }
        } else if self.is_signed_integer() {
            if !self.is_packed() || !self.is_implicitly_packed() || self.is_fixed_point() {
                return None;
            }
            match self.bits_per_channel {
                16 => Some(CommonPcmFormat::Int16),
                32 => Some(CommonPcmFormat::Int32),
                _ => None,
            }
        } else {
            None
        }
    }

    /// Native-endian 32-bit float, non-interleaved, at the same rate and
    /// channel count. `None` for non-PCM records.
    pub fn to_standard(&self) -> Option<Self> {
        if !self.is_pcm() {
            return None;
        }
        Some(Self::common(
            CommonPcmFormat::Float32,
            self.sample_rate,
            self.channels_per_frame,
            false,
        ))
    }
}
