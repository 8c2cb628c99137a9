//! Format identifier names.

use super::lookup;
use crate::format::ids;
use crate::fourcc::fourcc_string;

/// Human-readable names keyed by format identifier.
pub const FORMAT_ID_NAMES: &[(u32, &str)] = &[
    (ids::LINEAR_PCM, "Linear PCM"),
    (ids::AC3, "AC-3"),
    (ids::AC3_60958, "AC-3 over IEC 60958"),
    (ids::APPLE_IMA4, "IMA 4:1 ADPCM"),
    (ids::MPEG4_AAC, "MPEG-4 Low Complexity AAC"),
    (ids::MPEG4_CELP, "MPEG-4 CELP"),
    (ids::MPEG4_HVXC, "MPEG-4 HVXC"),
    (ids::MPEG4_TWIN_VQ, "MPEG-4 TwinVQ"),
    (ids::MACE3, "MACE 3:1"),
    (ids::MACE6, "MACE 6:1"),
    (ids::ULAW, "µ-law 2:1"),
    (ids::ALAW, "A-law 2:1"),
    (ids::QDESIGN, "QDesign Music"),
    (ids::QDESIGN2, "QDesign2 Music"),
    (ids::QUALCOMM, "QUALCOMM PureVoice"),
    (ids::QUALCOMM_QCLQ, "QUALCOMM PureVoice (Qclq)"),
    (ids::MPEG_LAYER1, "MPEG-1/2 Layer I"),
    (ids::MPEG_LAYER2, "MPEG-1/2 Layer II"),
    (ids::MPEG_LAYER3, "MPEG-1/2 Layer III"),
    (ids::TIMECODE, "Time Code"),
    (ids::MIDI_STREAM, "MIDI"),
    (ids::PARAMETER_VALUE_STREAM, "Parameter Value Stream"),
    (ids::APPLE_LOSSLESS, "Apple Lossless"),
    (ids::MPEG4_AAC_HE, "MPEG-4 High Efficiency AAC"),
    (ids::MPEG4_AAC_LD, "MPEG-4 AAC Low Delay"),
    (ids::MPEG4_AAC_ELD, "MPEG-4 AAC Enhanced Low Delay"),
    (ids::MPEG4_AAC_ELD_SBR, "MPEG-4 AAC Enhanced Low Delay with SBR"),
    (ids::MPEG4_AAC_ELD_V2, "MPEG-4 AAC Enhanced Low Delay Version 2"),
    (ids::MPEG4_AAC_HE_V2, "MPEG-4 High Efficiency AAC Version 2"),
    (ids::MPEG4_AAC_SPATIAL, "MPEG-4 Spatial Audio"),
    (ids::MPEGD_USAC, "MPEG-D Unified Speech and Audio Coding"),
    (ids::AMR, "AMR Narrow Band"),
    (ids::AMR_WB, "AMR Wide Band"),
    (ids::AUDIBLE, "Audible"),
    (ids::ILBC, "iLBC"),
    (ids::DVI_INTEL_IMA, "DVI/Intel IMA ADPCM"),
    (ids::MICROSOFT_GSM, "Microsoft GSM 6.10"),
    (ids::AES3, "AES3-2003"),
    (ids::ENHANCED_AC3, "Enhanced AC-3"),
    (ids::FLAC, "Free Lossless Audio Codec"),
    (ids::OPUS, "Opus"),
    (ids::EVS, "Enhanced Voice Services"),
];

/// Returns the table name for `format_id`, if it has one.
pub fn format_id_name(format_id: u32) -> Option<&'static str> {
    lookup(FORMAT_ID_NAMES, format_id)
}

/// Returns the table name, else the four-character code, else hex.
pub fn format_id_description(format_id: u32) -> String {
    match format_id_name(format_id) {
        Some(name) => name.to_string(),
        None => fourcc_string(format_id),
    }
}
