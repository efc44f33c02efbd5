//! CSS color values for generated stylesheets.
//!
//! Settings that drive generated CSS usually hold a color picked in a UI
//! (`#1fa0e2`, `rgb(31, 160, 226)`, `coral`). Modifiers derive related shades
//! from that value before it is emitted. This crate provides the value type
//! those modifiers work on:
//!
//! - [`RgbaColor`]: parse any common CSS color notation, adjust it in HSL space,
//!   and format it back to CSS text
//! - [`ColorParseError`]: what went wrong when a string is not a color
//!
//! # Usage
//!
//! ```
//! use dyncss_color::RgbaColor;
//!
//! let base = RgbaColor::parse("#ffffff").unwrap();
//! assert_eq!(base.darken(20.0).to_string(), "#cccccc");
//!
//! let overlay = RgbaColor::parse("red").unwrap().with_alpha(0.5);
//! assert_eq!(overlay.to_string(), "rgba(255, 0, 0, 0.5)");
//! ```

pub mod color;
pub mod error;
mod named;

pub use color::RgbaColor;
pub use error::ColorParseError;
