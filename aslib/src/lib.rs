//! Library for working with the AgroSuccess model and its outputs.
//!
//! - [`colors`]: the visualisation palette and hex to RGB conversion.
//! - [`encodings`]: numeric codes and aliases for environmental states and
//!   land cover types.

pub use aslib_color as colors;
pub use aslib_encodings as encodings;

pub use aslib_color::{Color, ColorError, Rgb, hex_to_rgb};
pub use aslib_encodings::{
    AgroSuccessLct, Aspect, Code, Encoding, EncodingError, LookupKey,
    MillingtonLct, SeedPresence, Succession, Water,
};
