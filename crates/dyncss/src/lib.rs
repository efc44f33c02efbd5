//! # dyncss - CSS generated from a setting value
//!
//! A theme setting (say, "accent color") usually affects many rules: link
//! colors, button backgrounds, a darker hover shade, a border that only
//! appears on wide screens. This crate describes those rules declaratively
//! and renders them against the setting's current value.
//!
//! - **Descriptors**: [`CssProperty`] names a CSS property, its selectors
//!   grouped by media query, and an optional [`Modifier`]
//! - **Generation**: [`CssGenerator`] renders descriptors against a
//!   [`ValueSource`] in a fixed, byte-stable format
//! - **Configuration**: [`sheet`] loads descriptors from a small text format
//!
//! ## Quick Start
//!
//! ```rust
//! use dyncss::{CssGenerator, CssProperty, Modifier, StaticValue};
//! use dyncss::modifier::Darken;
//!
//! let generator = CssGenerator::new(StaticValue::new("#ffffff"))
//!     .property(CssProperty::new("color").selectors("noop", ["a", ".link"]))
//!     .property(
//!         CssProperty::new("background-color")
//!             .selectors("@media (min-width: 900px)", [".btn:hover"])
//!             .with_modifier(Modifier::new(Darken::new(20.0))),
//!     );
//!
//! assert_eq!(
//!     generator.render(),
//!     "a, .link { color: #ffffff; }\n\
//!      @media (min-width: 900px) { .btn:hover { background-color: #cccccc; } }\n"
//! );
//! ```
//!
//! ## Modules
//!
//! - [`descriptor`]: descriptors and selector groups
//! - [`generator`]: rendering and filtering
//! - [`modifier`]: the modifier abstraction and built-in modifiers
//! - [`value`]: value sources
//! - [`sheet`]: descriptor sheet parsing
//! - [`error`]: error types

pub mod descriptor;
pub mod error;
pub mod generator;
pub mod modifier;
pub mod sheet;
pub mod value;

pub use descriptor::{CssProperty, MediaQuery, SelectorGroup, SelectorGroups};
pub use error::DynCssError;
pub use generator::CssGenerator;
pub use modifier::{Modifier, ModifierRegistry, Modify, apply_modifier};
pub use value::{FnValue, SharedValue, StaticValue, ValueSource, value_fn};
