//! # dynamic-css
//!
//! A settings type that generates CSS from a live value.
//!
//! Theme options such as an accent color typically feed many CSS rules at
//! once. [`DynamicCssSetting`] keeps the value, the descriptors of every rule
//! it affects, and a hint telling the host whether changes can be previewed
//! live. The heavy lifting lives in two workspace crates, re-exported here:
//!
//! - [`dyncss`]: descriptors, modifiers, rendering and descriptor sheets
//! - [`dyncss_color`]: color parsing and shade math used by color modifiers
//!
//! ## Quick Start
//!
//! ```rust
//! use dynamic_css::DynamicCssSetting;
//!
//! let setting = DynamicCssSetting::from_sheet(
//!     "primary_color",
//!     "#ffffff",
//!     r#"
//!         color { .title; }
//!         background-color: darken(20%) {
//!             @media (min-width: 900px) { .btn:hover; }
//!         }
//!     "#,
//! )
//! .unwrap();
//!
//! assert_eq!(
//!     setting.render_css(),
//!     ".title { color: #ffffff; }\n\
//!      @media (min-width: 900px) { .btn:hover { background-color: #cccccc; } }\n"
//! );
//! ```

pub mod error;
mod log_init;
pub mod setting;

pub use dyncss;
pub use dyncss_color;

pub use dyncss::sheet::{load_sheet, parse_sheet};
pub use dyncss::{
    CssGenerator, CssProperty, DynCssError, MediaQuery, Modifier, Modify, SharedValue,
    StaticValue, ValueSource,
};
pub use dyncss_color::RgbaColor;
pub use error::{Error, Result};
pub use log_init::init_logger;
pub use setting::{DynamicCssSetting, Transport};

// Re-export the log crate so hosts can use dynamic_css::log::info!, etc.
pub use log;
