//! Fixed display palette shared by AgroSuccess maps and legends.

mod errors;
mod palette;
mod rgb;

pub use crate::errors::{ColorError, Result};
pub use crate::palette::Color;
pub use crate::rgb::{Rgb, hex_to_rgb};
