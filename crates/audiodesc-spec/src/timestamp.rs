//! Audio time stamps.
//!
//! A [`TimeStamp`] carries several independent representations of one
//! instant; the validity flags say which of them are meaningful. Comparisons
//! only look at representations valid on both sides.

use serde::{Deserialize, Serialize};

use crate::number::format_general;

/// Time stamp validity bits.
pub mod flags {
    pub const SAMPLE_TIME_VALID: u32 = 1 << 0;
    pub const HOST_TIME_VALID: u32 = 1 << 1;
    pub const RATE_SCALAR_VALID: u32 = 1 << 2;
    pub const WORD_CLOCK_TIME_VALID: u32 = 1 << 3;
    pub const SMPTE_TIME_VALID: u32 = 1 << 4;
    pub const SAMPLE_HOST_TIME_VALID: u32 = SAMPLE_TIME_VALID | HOST_TIME_VALID;
}

/// A SMPTE time. Carried verbatim; never interpreted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SmpteTime {
    pub subframes: i16,
    pub subframe_divisor: i16,
    pub counter: u32,
    #[serde(rename = "type")]
    pub smpte_type: u32,
    pub flags: u32,
    pub hours: i16,
    pub minutes: i16,
    pub seconds: i16,
    pub frames: i16,
}

/// An audio time stamp.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TimeStamp {
    /// Position in sample frames.
    pub sample_time: f64,
    /// Host clock ticks.
    pub host_time: u64,
    /// Ratio of actual to nominal host ticks per sample frame.
    pub rate_scalar: f64,
    /// Word clock ticks.
    pub word_clock_time: u64,
    /// SMPTE time.
    pub smpte_time: SmpteTime,
    /// Validity bits (see [`flags`]).
    pub flags: u32,
    /// Padding.
    #[serde(skip_serializing_if = "is_zero")]
    pub reserved: u32,
}

fn is_zero(value: &u32) -> bool {
    *value == 0
}

/// The representation two time stamps were compared by.
#[derive(Debug, Clone, Copy)]
enum CommonField {
    Sample(f64, f64),
    Host(u64, u64),
    WordClock(u64, u64),
}

impl TimeStamp {
    /// A time stamp with only the sample time valid.
    pub fn with_sample_time(sample_time: f64) -> Self {
        Self {
            sample_time,
            flags: flags::SAMPLE_TIME_VALID,
            ..Default::default()
        }
    }

    /// A time stamp with only the host time valid.
    pub fn with_host_time(host_time: u64) -> Self {
        Self {
            host_time,
            flags: flags::HOST_TIME_VALID,
            ..Default::default()
        }
    }

    /// A time stamp with sample and host times valid.
    pub fn with_sample_and_host_time(sample_time: f64, host_time: u64) -> Self {
        Self {
            sample_time,
            host_time,
            flags: flags::SAMPLE_HOST_TIME_VALID,
            ..Default::default()
        }
    }

    /// A time stamp with only the word clock time valid.
    pub fn with_word_clock_time(word_clock_time: u64) -> Self {
        Self {
            word_clock_time,
            flags: flags::WORD_CLOCK_TIME_VALID,
            ..Default::default()
        }
    }

    /// Zeroes every field in place.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn sample_time_is_valid(&self) -> bool {
        self.flags & flags::SAMPLE_TIME_VALID != 0
    }

    pub fn host_time_is_valid(&self) -> bool {
        self.flags & flags::HOST_TIME_VALID != 0
    }

    pub fn rate_scalar_is_valid(&self) -> bool {
        self.flags & flags::RATE_SCALAR_VALID != 0
    }

    pub fn word_clock_time_is_valid(&self) -> bool {
        self.flags & flags::WORD_CLOCK_TIME_VALID != 0
    }

    pub fn smpte_time_is_valid(&self) -> bool {
        self.flags & flags::SMPTE_TIME_VALID != 0
    }

    /// True if any validity bit is set.
    pub fn is_valid(&self) -> bool {
        self.flags != 0
    }

    /// First representation valid in both, by priority sample > host > word clock.
    fn common_field(&self, other: &Self) -> Option<CommonField> {
        if self.sample_time_is_valid() && other.sample_time_is_valid() {
            Some(CommonField::Sample(self.sample_time, other.sample_time))
        } else if self.host_time_is_valid() && other.host_time_is_valid() {
            Some(CommonField::Host(self.host_time, other.host_time))
        } else if self.word_clock_time_is_valid() && other.word_clock_time_is_valid() {
            Some(CommonField::WordClock(self.word_clock_time, other.word_clock_time))
        } else {
            None
        }
    }

    /// Equal in the highest-priority representation both have; false if none.
    pub fn equal_to(&self, other: &Self) -> bool {
        match self.common_field(other) {
            Some(CommonField::Sample(a, b)) => a == b,
            Some(CommonField::Host(a, b)) | Some(CommonField::WordClock(a, b)) => a == b,
            None => false,
        }
    }

    /// Later in the highest-priority representation both have; false if none.
    pub fn greater_than(&self, other: &Self) -> bool {
        match self.common_field(other) {
            Some(CommonField::Sample(a, b)) => a > b,
            Some(CommonField::Host(a, b)) | Some(CommonField::WordClock(a, b)) => a > b,
            None => false,
        }
    }

    /// Earlier in the highest-priority representation both have; false if none.
    pub fn less_than(&self, other: &Self) -> bool {
        match self.common_field(other) {
            Some(CommonField::Sample(a, b)) => a < b,
            Some(CommonField::Host(a, b)) | Some(CommonField::WordClock(a, b)) => a < b,
            None => false,
        }
    }

    /// Lists the valid representations, e.g.
    /// `"sample time = 512, host time = 1000"`.
    pub fn description(&self) -> String {
        let mut parts = Vec::new();
        if self.sample_time_is_valid() {
            parts.push(format!("sample time = {}", format_general(self.sample_time)));
        }
        if self.host_time_is_valid() {
            parts.push(format!("host time = {}", self.host_time));
        }
        if self.rate_scalar_is_valid() {
            parts.push(format!("rate scalar = {}", format_general(self.rate_scalar)));
        }
        if self.word_clock_time_is_valid() {
            parts.push(format!("word clock time = {}", self.word_clock_time));
        }
        parts.join(", ")
    }
}

impl std::fmt::Display for TimeStamp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.description())
    }
}
