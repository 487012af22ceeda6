use aslib_color::Color;

use crate::encoding::{Code, Encoding, impl_encoding};
use crate::errors::Result;

/// Land cover types from James Millington's PhD thesis.
///
/// Codes match the transition table in the supplementary materials of
/// Millington et al. (2009).
#[repr(i32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MillingtonLct {
    Pine = 1,
    TransitionForest = 2,
    Deciduous = 3,
    HolmOak = 4,
    Pasture = 5,
    HolmOakWPasture = 6,
    Cropland = 7,
    Scrubland = 8,
    WaterQuarry = 9,
    Urban = 10,
    Burnt = 11,
}

impl MillingtonLct {
    pub const ALL: [Self; 11] = [
        Self::Pine,
        Self::TransitionForest,
        Self::Deciduous,
        Self::HolmOak,
        Self::Pasture,
        Self::HolmOakWPasture,
        Self::Cropland,
        Self::Scrubland,
        Self::WaterQuarry,
        Self::Urban,
        Self::Burnt,
    ];

    pub const fn value(self) -> Code {
        self as Code
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Pine => "PINE",
            Self::TransitionForest => "TRANSITION_FOREST",
            Self::Deciduous => "DECIDUOUS",
            Self::HolmOak => "HOLM_OAK",
            Self::Pasture => "PASTURE",
            Self::HolmOakWPasture => "HOLM_OAK_W_PASTURE",
            Self::Cropland => "CROPLAND",
            Self::Scrubland => "SCRUBLAND",
            Self::WaterQuarry => "WATER_QUARRY",
            Self::Urban => "URBAN",
            Self::Burnt => "BURNT",
        }
    }

    pub const fn alias(self) -> &'static str {
        match self {
            Self::Pine => "pine",
            Self::TransitionForest => "transition_forest",
            Self::Deciduous => "deciduous",
            Self::HolmOak => "holm_oak",
            Self::Pasture => "pasture",
            Self::HolmOakWPasture => "holm_oak_w_pasture",
            Self::Cropland => "cropland",
            Self::Scrubland => "scrubland",
            Self::WaterQuarry => "water_quarry",
            Self::Urban => "urban",
            Self::Burnt => "burnt",
        }
    }
}

impl_encoding!(MillingtonLct);

/// Land cover types and codes used in AgroSuccess.
///
/// Aliases are not the lower-cased names: they follow the aliases used by
/// the Java implementation of the AgroSuccess simulation model.
#[repr(i32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AgroSuccessLct {
    WaterQuarry = 0,
    Burnt = 1,
    Wheat = 2,
    /// Depleted agricultural land.
    Dal = 3,
    Shrubland = 4,
    Pine = 5,
    TransForest = 6,
    Deciduous = 7,
    Oak = 8,
}

impl AgroSuccessLct {
    pub const ALL: [Self; 9] = [
        Self::WaterQuarry,
        Self::Burnt,
        Self::Wheat,
        Self::Dal,
        Self::Shrubland,
        Self::Pine,
        Self::TransForest,
        Self::Deciduous,
        Self::Oak,
    ];

    pub const fn value(self) -> Code {
        self as Code
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::WaterQuarry => "WATER_QUARRY",
            Self::Burnt => "BURNT",
            Self::Wheat => "WHEAT",
            Self::Dal => "DAL",
            Self::Shrubland => "SHRUBLAND",
            Self::Pine => "PINE",
            Self::TransForest => "TRANS_FOREST",
            Self::Deciduous => "DECIDUOUS",
            Self::Oak => "OAK",
        }
    }

    pub const fn alias(self) -> &'static str {
        match self {
            Self::WaterQuarry => "WaterQuarry",
            Self::Burnt => "Burnt",
            Self::Wheat => "Wheat",
            Self::Dal => "DAL",
            Self::Shrubland => "Shrubland",
            Self::Pine => "Pine",
            Self::TransForest => "TransForest",
            Self::Deciduous => "Deciduous",
            Self::Oak => "Oak",
        }
    }

    /// Color the land cover type is drawn with on maps and legends.
    pub const fn color(self) -> Color {
        match self {
            Self::WaterQuarry => Color::Blue,
            Self::Burnt => Color::Red,
            Self::Wheat => Color::Violet,
            Self::Dal => Color::Yellow,
            Self::Shrubland => Color::LightBlue,
            Self::Pine => Color::Green,
            Self::TransForest => Color::LightPurple,
            Self::Deciduous => Color::Orange,
            Self::Oak => Color::DarkPurple,
        }
    }

    /// Find the land cover type with the given AgroSuccess alias, e.g. `Oak`.
    pub fn from_alias(alias: &str) -> Result<Self> {
        <Self as Encoding>::from_alias(alias)
    }
}

impl_encoding!(AgroSuccessLct);
