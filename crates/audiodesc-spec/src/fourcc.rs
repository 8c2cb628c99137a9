//! Four-character codes.
//!
//! Format identifiers are 32-bit integers that usually spell four ASCII
//! characters, most significant byte first. Where you would write `'lpcm'`
//! in C, write `fourcc(b"lpcm")` here.

use serde::de::{self, Visitor};
use serde::{Deserializer, Serializer};

/// Packs four bytes into a code, first byte in the high bits.
pub const fn fourcc(code: &[u8; 4]) -> u32 {
    u32::from_be_bytes(*code)
}

/// Returns the four characters of `code` if every byte is printable ASCII.
pub fn fourcc_chars(code: u32) -> Option<String> {
    let bytes = code.to_be_bytes();
    if bytes.iter().all(|b| (0x20..=0x7E).contains(b)) {
        Some(bytes.iter().map(|&b| b as char).collect())
    } else {
        None
    }
}

/// Renders a code as `'abcd'` when printable, else as `0x%08x`.
pub fn fourcc_string(code: u32) -> String {
    match fourcc_chars(code) {
        Some(chars) => format!("'{}'", chars),
        None => format!("0x{:08x}", code),
    }
}

/// Serde adapter: writes printable codes as four-character strings and
/// everything else as a number; reads either form.
pub mod serde_fourcc {
    use super::*;

    /// Serializes a code.
    pub fn serialize<S>(code: &u32, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match fourcc_chars(*code) {
            Some(chars) => serializer.serialize_str(&chars),
            None => serializer.serialize_u32(*code),
        }
    }

    /// Deserializes a code from a string of exactly four bytes or an integer.
    pub fn deserialize<'de, D>(deserializer: D) -> Result<u32, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct FourCcVisitor;

        impl<'de> Visitor<'de> for FourCcVisitor {
            type Value = u32;

            fn expecting(&self, formatter: &mut std::fmt::Formatter) -> std::fmt::Result {
                formatter.write_str("a four-character code string or a 32-bit integer")
            }

            fn visit_u64<E: de::Error>(self, v: u64) -> Result<Self::Value, E> {
                u32::try_from(v).map_err(|_| E::custom(format!("code {} exceeds 32 bits", v)))
            }

            fn visit_i64<E: de::Error>(self, v: i64) -> Result<Self::Value, E> {
                u32::try_from(v).map_err(|_| E::custom(format!("code {} is not a u32", v)))
            }

            fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
                let bytes: [u8; 4] = v.as_bytes().try_into().map_err(|_| {
                    E::custom(format!("four-character code must be 4 bytes, got {:?}", v))
                })?;
                Ok(fourcc(&bytes))
            }
        }

        deserializer.deserialize_any(FourCcVisitor)
    }
}
