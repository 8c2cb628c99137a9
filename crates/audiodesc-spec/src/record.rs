//! Binary codec for the platform record layouts.
//!
//! Every record is read and written in native byte order with no padding,
//! exactly as the platform lays it out in memory. Decoding checks the slice
//! length up front and never panics; trailing bytes are ignored.

use byteorder::{ByteOrder, NativeEndian};
use serde::de::DeserializeOwned;
use std::path::Path;

use crate::error::{DescError, DescResult, RecordKind};
use crate::format::StreamDescription;
use crate::layout::{ChannelDescription, ChannelLayout};
use crate::timestamp::{SmpteTime, TimeStamp};
use crate::value_range::ValueRange;

/// Size of the fixed channel layout header: tag, bitmap, description count.
pub const CHANNEL_LAYOUT_HEADER_SIZE: usize = 12;

/// A record with a fixed binary layout.
pub trait Record: Sized {
    /// Which record this is, for error reporting.
    const KIND: RecordKind;

    /// Encoded size in bytes. For variable-length records this is the size
    /// of the fixed header.
    const SIZE: usize;

    /// Decodes a record from the front of `bytes`.
    fn read_from(bytes: &[u8]) -> DescResult<Self>;

    /// Appends the encoded record to `out`.
    fn write_to(&self, out: &mut Vec<u8>);

    /// Number of bytes [`Record::write_to`] appends.
    fn encoded_len(&self) -> usize {
        Self::SIZE
    }

    /// Encodes the record into a new buffer.
    fn to_bytes(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(self.encoded_len());
        self.write_to(&mut out);
        out
    }

    /// Parses the record from its JSON document form.
    fn from_json(json: &str) -> DescResult<Self>
    where
        Self: DeserializeOwned,
    {
        Ok(serde_json::from_str(json)?)
    }

    /// Reads a file holding the raw record layout and decodes it.
    fn read_file(path: &Path) -> DescResult<Self> {
        let bytes = std::fs::read(path)?;
        Self::read_from(&bytes)
    }
}

/// Sequential native-endian reader over a length-checked slice.
struct Decoder<'a> {
    kind: RecordKind,
    bytes: &'a [u8],
    pos: usize,
}

impl<'a> Decoder<'a> {
    fn new(kind: RecordKind, bytes: &'a [u8], expected: usize) -> DescResult<Self> {
        if bytes.len() < expected {
            return Err(DescError::too_short(kind, expected, bytes.len()));
        }
        Ok(Self {
            kind,
            bytes,
            pos: 0,
        })
    }

    fn take(&mut self, len: usize) -> DescResult<&'a [u8]> {
        let end = self.pos.saturating_add(len);
        let chunk = self
            .bytes
            .get(self.pos..end)
            .ok_or_else(|| DescError::too_short(self.kind, end, self.bytes.len()))?;
        self.pos = end;
        Ok(chunk)
    }

    fn i16(&mut self) -> DescResult<i16> {
        Ok(NativeEndian::read_i16(self.take(2)?))
    }

    fn u32(&mut self) -> DescResult<u32> {
        Ok(NativeEndian::read_u32(self.take(4)?))
    }

    fn u64(&mut self) -> DescResult<u64> {
        Ok(NativeEndian::read_u64(self.take(8)?))
    }

    fn f32(&mut self) -> DescResult<f32> {
        Ok(NativeEndian::read_f32(self.take(4)?))
    }

    fn f64(&mut self) -> DescResult<f64> {
        Ok(NativeEndian::read_f64(self.take(8)?))
    }

    fn record<R: Record>(&mut self) -> DescResult<R> {
        R::read_from(self.take(R::SIZE)?)
    }
}

/// Native-endian writer appending to a byte buffer.
struct Encoder<'a>(&'a mut Vec<u8>);

impl Encoder<'_> {
    fn i16(&mut self, value: i16) -> &mut Self {
        let mut buf = [0u8; 2];
        NativeEndian::write_i16(&mut buf, value);
        self.0.extend_from_slice(&buf);
        self
    }

    fn u32(&mut self, value: u32) -> &mut Self {
        let mut buf = [0u8; 4];
        NativeEndian::write_u32(&mut buf, value);
        self.0.extend_from_slice(&buf);
        self
    }

    fn u64(&mut self, value: u64) -> &mut Self {
        let mut buf = [0u8; 8];
        NativeEndian::write_u64(&mut buf, value);
        self.0.extend_from_slice(&buf);
        self
    }

    fn f32(&mut self, value: f32) -> &mut Self {
        let mut buf = [0u8; 4];
        NativeEndian::write_f32(&mut buf, value);
        self.0.extend_from_slice(&buf);
        self
    }

    fn f64(&mut self, value: f64) -> &mut Self {
        let mut buf = [0u8; 8];
        NativeEndian::write_f64(&mut buf, value);
        self.0.extend_from_slice(&buf);
        self
    }
}

impl Record for StreamDescription {
    const KIND: RecordKind = RecordKind::FormatDescription;
    const SIZE: usize = 40;

    fn read_from(bytes: &[u8]) -> DescResult<Self> {
        let mut d = Decoder::new(Self::KIND, bytes, Self::SIZE)?;
        Ok(Self {
            sample_rate: d.f64()?,
            format_id: d.u32()?,
            format_flags: d.u32()?,
            bytes_per_packet: d.u32()?,
            frames_per_packet: d.u32()?,
            bytes_per_frame: d.u32()?,
            channels_per_frame: d.u32()?,
            bits_per_channel: d.u32()?,
            reserved: d.u32()?,
        })
    }

    fn write_to(&self, out: &mut Vec<u8>) {
        Encoder(out)
            .f64(self.sample_rate)
            .u32(self.format_id)
            .u32(self.format_flags)
            .u32(self.bytes_per_packet)
            .u32(self.frames_per_packet)
            .u32(self.bytes_per_frame)
            .u32(self.channels_per_frame)
            .u32(self.bits_per_channel)
            .u32(self.reserved);
    }
}

impl Record for ValueRange {
    const KIND: RecordKind = RecordKind::ValueRange;
    const SIZE: usize = 16;

    fn read_from(bytes: &[u8]) -> DescResult<Self> {
        let mut d = Decoder::new(Self::KIND, bytes, Self::SIZE)?;
        Ok(Self {
            minimum: d.f64()?,
            maximum: d.f64()?,
        })
    }

    fn write_to(&self, out: &mut Vec<u8>) {
        Encoder(out).f64(self.minimum).f64(self.maximum);
    }
}

impl Record for SmpteTime {
    const KIND: RecordKind = RecordKind::SmpteTime;
    const SIZE: usize = 24;

    fn read_from(bytes: &[u8]) -> DescResult<Self> {
        let mut d = Decoder::new(Self::KIND, bytes, Self::SIZE)?;
        Ok(Self {
            subframes: d.i16()?,
            subframe_divisor: d.i16()?,
            counter: d.u32()?,
            smpte_type: d.u32()?,
            flags: d.u32()?,
            hours: d.i16()?,
            minutes: d.i16()?,
            seconds: d.i16()?,
            frames: d.i16()?,
        })
    }

    fn write_to(&self, out: &mut Vec<u8>) {
        Encoder(out)
            .i16(self.subframes)
            .i16(self.subframe_divisor)
            .u32(self.counter)
            .u32(self.smpte_type)
            .u32(self.flags)
            .i16(self.hours)
            .i16(self.minutes)
            .i16(self.seconds)
            .i16(self.frames);
    }
}

impl Record for TimeStamp {
    const KIND: RecordKind = RecordKind::TimeStamp;
    const SIZE: usize = 64;

    fn read_from(bytes: &[u8]) -> DescResult<Self> {
        let mut d = Decoder::new(Self::KIND, bytes, Self::SIZE)?;
        Ok(Self {
            sample_time: d.f64()?,
            host_time: d.u64()?,
            rate_scalar: d.f64()?,
            word_clock_time: d.u64()?,
            smpte_time: d.record()?,
            flags: d.u32()?,
            reserved: d.u32()?,
        })
    }

    fn write_to(&self, out: &mut Vec<u8>) {
        Encoder(out)
            .f64(self.sample_time)
            .u64(self.host_time)
            .f64(self.rate_scalar)
            .u64(self.word_clock_time);
        self.smpte_time.write_to(out);
        Encoder(out).u32(self.flags).u32(self.reserved);
    }
}

impl Record for ChannelDescription {
    const KIND: RecordKind = RecordKind::ChannelDescription;
    const SIZE: usize = 20;

    fn read_from(bytes: &[u8]) -> DescResult<Self> {
        let mut d = Decoder::new(Self::KIND, bytes, Self::SIZE)?;
        Ok(Self {
            label: d.u32()?,
            flags: d.u32()?,
            coordinates: [d.f32()?, d.f32()?, d.f32()?],
        })
    }

    fn write_to(&self, out: &mut Vec<u8>) {
        let [x, y, z] = self.coordinates;
        Encoder(out)
            .u32(self.label)
            .u32(self.flags)
            .f32(x)
            .f32(y)
            .f32(z);
    }
}

impl Record for ChannelLayout {
    const KIND: RecordKind = RecordKind::ChannelLayout;
    const SIZE: usize = CHANNEL_LAYOUT_HEADER_SIZE;

    fn read_from(bytes: &[u8]) -> DescResult<Self> {
        let mut d = Decoder::new(Self::KIND, bytes, Self::SIZE)?;
        let tag = d.u32()?;
        let bitmap = d.u32()?;
        let count = d.u32()?;

        // Check the whole body before allocating for it.
        let expected = usize::try_from(count)
            .ok()
            .and_then(|n| n.checked_mul(ChannelDescription::SIZE))
            .and_then(|body| body.checked_add(Self::SIZE))
            .unwrap_or(usize::MAX);
        if bytes.len() < expected {
            return Err(DescError::too_short(Self::KIND, expected, bytes.len()));
        }

        let descriptions = (0..count)
            .map(|_| d.record())
            .collect::<DescResult<Vec<ChannelDescription>>>()?;
        Ok(Self {
            tag,
            bitmap,
            descriptions,
        })
    }

    fn write_to(&self, out: &mut Vec<u8>) {
        let count = u32::try_from(self.descriptions.len()).unwrap_or(u32::MAX);
        Encoder(out).u32(self.tag).u32(self.bitmap).u32(count);
        for description in self.descriptions.iter().take(count as usize) {
            description.write_to(out);
        }
    }

    fn encoded_len(&self) -> usize {
        Self::SIZE + self.descriptions.len() * ChannelDescription::SIZE
    }
}
