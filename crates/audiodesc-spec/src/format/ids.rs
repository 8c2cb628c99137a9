//! Format identifier codes.

use crate::fourcc::fourcc;

pub const LINEAR_PCM: u32 = fourcc(b"lpcm");
pub const AC3: u32 = fourcc(b"ac-3");
pub const AC3_60958: u32 = fourcc(b"cac3");
pub const APPLE_IMA4: u32 = fourcc(b"ima4");
pub const MPEG4_AAC: u32 = fourcc(b"aac ");
pub const MPEG4_CELP: u32 = fourcc(b"celp");
pub const MPEG4_HVXC: u32 = fourcc(b"hvxc");
pub const MPEG4_TWIN_VQ: u32 = fourcc(b"twvq");
pub const MACE3: u32 = fourcc(b"MAC3");
pub const MACE6: u32 = fourcc(b"MAC6");
pub const ULAW: u32 = fourcc(b"ulaw");
pub const ALAW: u32 = fourcc(b"alaw");
pub const QDESIGN: u32 = fourcc(b"QDMC");
pub const QDESIGN2: u32 = fourcc(b"QDM2");
pub const QUALCOMM: u32 = fourcc(b"Qclp");
pub const QUALCOMM_QCLQ: u32 = fourcc(b"Qclq");
pub const MPEG_LAYER1: u32 = fourcc(b".mp1");
pub const MPEG_LAYER2: u32 = fourcc(b".mp2");
pub const MPEG_LAYER3: u32 = fourcc(b".mp3");
pub const TIMECODE: u32 = fourcc(b"time");
pub const MIDI_STREAM: u32 = fourcc(b"midi");
pub const PARAMETER_VALUE_STREAM: u32 = fourcc(b"apvs");
pub const APPLE_LOSSLESS: u32 = fourcc(b"alac");
pub const MPEG4_AAC_HE: u32 = fourcc(b"aach");
pub const MPEG4_AAC_LD: u32 = fourcc(b"aacl");
pub const MPEG4_AAC_ELD: u32 = fourcc(b"aace");
pub const MPEG4_AAC_ELD_SBR: u32 = fourcc(b"aacf");
pub const MPEG4_AAC_ELD_V2: u32 = fourcc(b"aacg");
pub const MPEG4_AAC_HE_V2: u32 = fourcc(b"aacp");
pub const MPEG4_AAC_SPATIAL: u32 = fourcc(b"aacs");
pub const MPEGD_USAC: u32 = fourcc(b"usac");
pub const AMR: u32 = fourcc(b"samr");
pub const AMR_WB: u32 = fourcc(b"sawb");
pub const AUDIBLE: u32 = fourcc(b"AUDB");
pub const ILBC: u32 = fourcc(b"ilbc");
pub const DVI_INTEL_IMA: u32 = 0x6D73_0011;
pub const MICROSOFT_GSM: u32 = 0x6D73_0031;
pub const AES3: u32 = fourcc(b"aes3");
pub const ENHANCED_AC3: u32 = fourcc(b"ec-3");
pub const FLAC: u32 = fourcc(b"flac");
pub const OPUS: u32 = fourcc(b"opus");
pub const EVS: u32 = fourcc(b"evs ");

/// Returns true for the lossless codecs whose flags encode the source bit depth.
pub const fn uses_lossless_source_flags(format_id: u32) -> bool {
    format_id == APPLE_LOSSLESS || format_id == FLAC
}
