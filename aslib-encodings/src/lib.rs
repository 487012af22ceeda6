//! Encodings between environmental states and the numerical codes that
//! represent them in simulation models.
//!
//! Every enumeration implements [`Encoding`], which converts members to and
//! from their integer codes and human-readable aliases. Aliases are what
//! `Display`, `FromStr` and the serde impls use.
//!
//! ```
//! use aslib_encodings::{AgroSuccessLct, Encoding, Water};
//!
//! let oak = AgroSuccessLct::from_alias("Oak").unwrap();
//! assert_eq!(oak.value(), 8);
//! assert_eq!(oak.color().hex_code(), "#85144b");
//!
//! assert_eq!(Water::from_value(2).unwrap(), Water::Hydric);
//! ```

mod encoding;
mod environment;
mod errors;
mod land_cover;

pub use aslib_color::Color;

pub use crate::encoding::{Code, Encoding};
pub use crate::environment::{Aspect, SeedPresence, Succession, Water};
pub use crate::errors::{EncodingError, LookupKey, Result};
pub use crate::land_cover::{AgroSuccessLct, MillingtonLct};
