use std::fmt;

use log::debug;
use serde::{Deserialize, Deserializer, Serialize, Serializer, de};

use crate::errors::{ColorError, Result};
use crate::rgb::{Rgb, decode_hex, hex_to_rgb};

/// Colors used in AgroSuccess visualisations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    Blue,
    Red,
    Grey,
    Violet,
    Yellow,
    LightBlue,
    Green,
    LightPurple,
    Orange,
    DarkPurple,
}

impl Color {
    /// Every palette color in declaration order.
    pub const ALL: [Color; 10] = [
        Self::Blue,
        Self::Red,
        Self::Grey,
        Self::Violet,
        Self::Yellow,
        Self::LightBlue,
        Self::Green,
        Self::LightPurple,
        Self::Orange,
        Self::DarkPurple,
    ];

    /// Symbolic name of the color, e.g. `LIGHT_BLUE`.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Blue => "BLUE",
            Self::Red => "RED",
            Self::Grey => "GREY",
            Self::Violet => "VIOLET",
            Self::Yellow => "YELLOW",
            Self::LightBlue => "LIGHT_BLUE",
            Self::Green => "GREEN",
            Self::LightPurple => "LIGHT_PURPLE",
            Self::Orange => "ORANGE",
            Self::DarkPurple => "DARK_PURPLE",
        }
    }

    /// Hex color code, as used in HTML.
    pub const fn hex_code(self) -> &'static str {
        match self {
            Self::Blue => "#0074d9",
            Self::Red => "#ff4136",
            Self::Grey => "#333333",
            Self::Violet => "#bfbfff",
            Self::Yellow => "#ffdc00",
            Self::LightBlue => "#7fdbff",
            Self::Green => "#2ecc40",
            Self::LightPurple => "#b10dc9",
            Self::Orange => "#ff851b",
            Self::DarkPurple => "#85144b",
        }
    }

    /// RGB representation of [`Color::hex_code`].
    pub const fn rgb(self) -> Rgb {
        PALETTE_RGB[self as usize]
    }

    /// Look a color up by its symbolic name.
    pub fn from_name(name: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|color| color.name() == name)
            .ok_or_else(|| {
                debug!("no palette color named {name:?}");
                ColorError::NotFound(name.to_string())
            })
    }

    /// Look a color up by its hex code.
    ///
    /// Codes are compared by value, so `#FF4136` finds [`Color::Red`].
    pub fn from_hex_code(hex: &str) -> Result<Self> {
        let rgb = hex_to_rgb(hex)?;

        Self::ALL
            .into_iter()
            .find(|color| color.rgb() == rgb)
            .ok_or_else(|| {
                debug!("no palette color with hex code {hex:?}");
                ColorError::NotFound(hex.to_string())
            })
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl From<Color> for Rgb {
    fn from(value: Color) -> Self {
        value.rgb()
    }
}

impl Serialize for Color {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.hex_code())
    }
}

impl<'de> Deserialize<'de> for Color {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let hex = String::deserialize(deserializer)?;
        Self::from_hex_code(&hex).map_err(de::Error::custom)
    }
}

/// Decoded channels of every palette color, indexed by discriminant.
///
/// A malformed or repeated palette hex code fails constant evaluation.
const PALETTE_RGB: [Rgb; Color::ALL.len()] = {
    let mut table = [Rgb::new(0, 0, 0); Color::ALL.len()];

    let mut i = 0;
    while i < Color::ALL.len() {
        let color = Color::ALL[i];
        table[color as usize] = match decode_hex(color.hex_code()) {
            Some(rgb) => rgb,
            None => panic!("palette hex codes must be `#rrggbb`"),
        };
        i += 1;
    }

    let mut i = 0;
    while i < table.len() {
        let mut j = i + 1;
        while j < table.len() {
            let (a, b) = (table[i], table[j]);
            assert!(
                a.r != b.r || a.g != b.g || a.b != b.b,
                "palette hex codes must be unique"
            );
            j += 1;
        }
        i += 1;
    }

    table
};
