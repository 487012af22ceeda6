use thiserror::Error;

/// Errors originating from the color palette.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ColorError {
    #[error("invalid hex color {0:?}: expected `#RRGGBB`")]
    InvalidFormat(String),

    #[error("no palette color matches {0:?}")]
    NotFound(String),
}

pub type Result<T> = std::result::Result<T, ColorError>;
