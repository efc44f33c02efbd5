//! Error types for color parsing.

use thiserror::Error;

/// Errors that can occur when parsing a CSS color value.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ColorParseError {
    /// The input was empty or only whitespace.
    #[error("empty color string")]
    Empty,

    /// Unknown color name.
    #[error("unknown color name: {0}")]
    UnknownName(String),

    /// Invalid hex color format.
    #[error("invalid hex color: {0}")]
    InvalidHex(String),

    /// Malformed `rgb()`/`hsl()` function call.
    #[error("invalid color function: {0}")]
    InvalidFunction(String),

    /// A numeric component was missing, malformed or out of range.
    #[error("invalid color component: {0}")]
    InvalidComponent(String),
}
