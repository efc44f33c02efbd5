//! Error types for descriptor construction and descriptor sheet loading.
//!
//! Rendering itself never fails; these errors only surface when descriptors
//! are validated or built from configuration.

use thiserror::Error;

/// Errors that can occur while building or loading CSS property descriptors.
///
/// # Examples
///
/// ```rust
/// use dyncss::DynCssError;
/// use dyncss::sheet::parse_sheet;
///
/// let result = parse_sheet("color: sparkle(3) { .a; }");
/// assert!(matches!(result, Err(DynCssError::InvalidModifierKind(_))));
/// ```
#[derive(Error, Debug)]
pub enum DynCssError {
    /// A descriptor has a blank property name.
    #[error("CSS property name is missing")]
    MissingName,

    /// A descriptor declares no selector groups at all.
    #[error("CSS property '{property}' has no selector groups")]
    MissingSelectors { property: String },

    /// A modifier name does not resolve to any registered modifier.
    #[error("Unknown modifier: {0}")]
    InvalidModifierKind(String),

    /// A modifier was found but its arguments are unusable.
    #[error("Invalid arguments for modifier '{name}': {reason}")]
    InvalidModifierArgs { name: String, reason: String },

    /// Malformed descriptor sheet text.
    ///
    /// The string contains the line number and the offending input.
    #[error("Descriptor sheet syntax error: {0}")]
    InvalidSyntax(String),

    /// An I/O error occurred while reading a descriptor sheet file.
    #[error("I/O error reading descriptor sheet")]
    Io(#[from] std::io::Error),
}
