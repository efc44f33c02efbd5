//! Built-in color modifiers.
//!
//! All of these parse the incoming value as a CSS color. When the value is not
//! a color (a setting holding `inherit`, say) they log a warning and return
//! the value unchanged rather than breaking the generated stylesheet.

use dyncss_color::RgbaColor;

use super::Modify;

fn parse_or_warn(modifier: &str, value: &str) -> Option<RgbaColor> {
    match RgbaColor::parse(value) {
        Ok(color) => Some(color),
        Err(e) => {
            log::warn!("{} modifier: passing '{}' through unchanged ({})", modifier, value, e);
            None
        }
    }
}

/// Lowers HSL lightness by `amount` percentage points.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Darken {
    pub amount: f32,
}

impl Darken {
    pub fn new(amount: f32) -> Self {
        Self { amount }
    }
}

impl Modify for Darken {
    fn modify(&self, value: &str) -> String {
        match parse_or_warn("darken", value) {
            Some(color) => color.darken(self.amount).to_string(),
            None => value.to_string(),
        }
    }

    fn describe(&self) -> Option<String> {
        Some(format!("darken({}%)", self.amount))
    }
}

/// Raises HSL lightness by `amount` percentage points.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Lighten {
    pub amount: f32,
}

impl Lighten {
    pub fn new(amount: f32) -> Self {
        Self { amount }
    }
}

impl Modify for Lighten {
    fn modify(&self, value: &str) -> String {
        match parse_or_warn("lighten", value) {
            Some(color) => color.lighten(self.amount).to_string(),
            None => value.to_string(),
        }
    }

    fn describe(&self) -> Option<String> {
        Some(format!("lighten({}%)", self.amount))
    }
}

/// Replaces the alpha channel, producing `rgba(...)` for translucent results.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Alpha {
    pub opacity: f32,
}

impl Alpha {
    pub fn new(opacity: f32) -> Self {
        Self { opacity }
    }
}

impl Modify for Alpha {
    fn modify(&self, value: &str) -> String {
        match parse_or_warn("alpha", value) {
            Some(color) => color.with_alpha(self.opacity).to_string(),
            None => value.to_string(),
        }
    }

    fn describe(&self) -> Option<String> {
        Some(format!("alpha({})", self.opacity))
    }
}

/// Builds a two-stop gradient from the color to a darker shade of it.
///
/// ```rust
/// use dyncss::modifier::{LinearGradient, Modify};
///
/// let gradient = LinearGradient::new("to bottom", 20.0);
/// assert_eq!(
///     gradient.modify("#ffffff"),
///     "linear-gradient(to bottom, #ffffff, #cccccc)"
/// );
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct LinearGradient {
    pub direction: String,
    pub darken: f32,
}

impl LinearGradient {
    pub const DEFAULT_DIRECTION: &'static str = "to bottom";
    pub const DEFAULT_DARKEN: f32 = 10.0;

    pub fn new(direction: impl Into<String>, darken: f32) -> Self {
        Self {
            direction: direction.into(),
            darken,
        }
    }
}

impl Default for LinearGradient {
    fn default() -> Self {
        Self::new(Self::DEFAULT_DIRECTION, Self::DEFAULT_DARKEN)
    }
}

impl Modify for LinearGradient {
    fn modify(&self, value: &str) -> String {
        match parse_or_warn("linear-gradient", value) {
            Some(color) => format!(
                "linear-gradient({}, {}, {})",
                self.direction,
                color,
                color.darken(self.darken)
            ),
            None => value.to_string(),
        }
    }

    fn describe(&self) -> Option<String> {
        Some(format!("linear-gradient({}, {}%)", self.direction, self.darken))
    }
}
