use serde::Deserialize;
use std::borrow::Cow;
use std::fmt::Display;

use super::fnv::fnv1_32;

/// How a string is turned into the byte sequence fed to the hasher. The
/// choice changes the hash value, so it is part of the public contract.
#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, PartialEq)]
pub enum TextEncoding {
    #[default]
    #[serde(rename = "utf-8")]
    Utf8,
    /// Big-endian code units, no byte-order mark.
    #[serde(rename = "utf-16be")]
    Utf16Be,
}

impl TextEncoding {
    #[must_use]
    pub fn from_string(input: &str) -> Option<Self> {
        match input {
            "utf-8" => Some(TextEncoding::Utf8),
            "utf-16be" => Some(TextEncoding::Utf16Be),
            _ => None,
        }
    }

    #[must_use]
    pub fn encode<'a>(&self, input: &'a str) -> Cow<'a, [u8]> {
        match self {
            TextEncoding::Utf8 => Cow::Borrowed(input.as_bytes()),
            TextEncoding::Utf16Be => Cow::Owned(
                input
                    .encode_utf16()
                    .flat_map(|unit| unit.to_be_bytes())
                    .collect(),
            ),
        }
    }
}

impl Display for TextEncoding {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TextEncoding::Utf8 => write!(f, "utf-8"),
            TextEncoding::Utf16Be => write!(f, "utf-16be"),
        }
    }
}

/// Trims the input, encodes it, hashes with FNV-1 32-bit, and renders the
/// result as a base-10 decimal string.
#[must_use]
pub fn fnv1_32_decimal_string(input: &str, encoding: TextEncoding) -> String {
    let trimmed = input.trim();
    fnv1_32(&encoding.encode(trimmed)).to_string()
}
