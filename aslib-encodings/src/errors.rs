use std::fmt;

use thiserror::Error;

use crate::encoding::Code;

/// Attribute an encoding lookup was keyed on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LookupKey {
    Value(Code),
    Alias(String),
    Name(String),
}

impl fmt::Display for LookupKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Value(value) => write!(f, "value: {value}"),
            Self::Alias(alias) => write!(f, "alias: {alias:?}"),
            Self::Name(name) => write!(f, "name: {name:?}"),
        }
    }
}

/// Errors originating from encoding lookups.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EncodingError {
    #[error("no member in {encoding} with {key}")]
    NotFound {
        encoding: &'static str,
        key: LookupKey,
    },
}

pub type Result<T> = std::result::Result<T, EncodingError>;
