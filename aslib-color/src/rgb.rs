use std::{
    fmt::{self, Display, Formatter},
    str::FromStr,
};

use log::debug;
use serde::{Deserialize, Deserializer, Serialize, Serializer, de};

use crate::errors::{ColorError, Result};

/// Length in bytes of a `#rrggbb` color string.
const HEX_COLOR_LEN: usize = 7;

/// Red, green and blue channels of a display color.
#[derive(Debug, Eq, PartialEq, Copy, Clone, Default, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

impl Display for Rgb {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl FromStr for Rgb {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self> {
        hex_to_rgb(s)
    }
}

impl From<Rgb> for (u8, u8, u8) {
    fn from(value: Rgb) -> Self {
        (value.r, value.g, value.b)
    }
}

impl Serialize for Rgb {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Rgb {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let hex = String::deserialize(deserializer)?;
        hex_to_rgb(&hex).map_err(de::Error::custom)
    }
}

/// Convert a `#rrggbb` hex string to its RGB channels.
///
/// Hex digits are case-insensitive. The `#rgb` shorthand, alpha channels
/// and strings without the leading `#` are rejected with
/// [`ColorError::InvalidFormat`].
pub fn hex_to_rgb(hex: &str) -> Result<Rgb> {
    decode_hex(hex).ok_or_else(|| {
        debug!("rejected hex color: {hex:?}");
        ColorError::InvalidFormat(hex.to_string())
    })
}

/// Decode a `#rrggbb` string during constant evaluation.
pub(crate) const fn decode_hex(hex: &str) -> Option<Rgb> {
    let bytes = hex.as_bytes();
    if bytes.len() != HEX_COLOR_LEN || bytes[0] != b'#' {
        return None;
    }

    let Some(r) = parse_hex_byte(bytes[1], bytes[2]) else {
        return None;
    };
    let Some(g) = parse_hex_byte(bytes[3], bytes[4]) else {
        return None;
    };
    let Some(b) = parse_hex_byte(bytes[5], bytes[6]) else {
        return None;
    };

    Some(Rgb { r, g, b })
}

#[inline]
const fn parse_hex_byte(hi: u8, lo: u8) -> Option<u8> {
    match (parse_hex_digit(hi), parse_hex_digit(lo)) {
        (Some(hi), Some(lo)) => Some(hi << 4 | lo),
        _ => None,
    }
}

#[inline]
const fn parse_hex_digit(c: u8) -> Option<u8> {
    match c {
        b'0'..=b'9' => Some(c - b'0'),
        b'a'..=b'f' => Some(c - b'a' + 10),
        b'A'..=b'F' => Some(c - b'A' + 10),
        _ => None,
    }
}
