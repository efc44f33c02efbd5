//! RGBA color type with parsing, HSL adjustment and CSS formatting.
//!
//! ## Supported Input Formats
//!
//! - **Hex**: `#RGB`, `#RGBA`, `#RRGGBB`, `#RRGGBBAA`
//! - **RGB**: `rgb(r, g, b)`, `rgba(r, g, b, a)`
//! - **HSL**: `hsl(h, s%, l%)`, `hsla(h, s%, l%, a)`
//! - **Named**: CSS color keywords like `red`, `aliceblue`, `rebeccapurple`
//! - **Special**: `transparent`
//!
//! ## Output
//!
//! [`fmt::Display`] writes opaque colors as lowercase `#rrggbb` and translucent
//! ones as `rgba(r, g, b, a)`, which is what a browser accepts everywhere a
//! color is allowed.
//!
//! ## Adjustments
//!
//! Amounts are percentage points of HSL lightness, matching the usual
//! preprocessor semantics:
//!
//! ```
//! use dyncss_color::RgbaColor;
//!
//! let black = RgbaColor::black();
//! assert_eq!(black.lighten(20.0).to_string(), "#333333");
//! ```

use std::fmt;
use std::str::FromStr;

use crate::error::ColorParseError;
use crate::named::NAMED_COLORS;

/// An sRGB color with straight alpha.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RgbaColor {
    /// Red component (0-255).
    pub r: u8,
    /// Green component (0-255).
    pub g: u8,
    /// Blue component (0-255).
    pub b: u8,
    /// Alpha component (0.0 = transparent, 1.0 = opaque).
    pub a: f32,
}

impl Default for RgbaColor {
    fn default() -> Self {
        Self::black()
    }
}

impl RgbaColor {
    pub fn white() -> Self {
        Self::rgb(255, 255, 255)
    }

    pub fn black() -> Self {
        Self::rgb(0, 0, 0)
    }

    /// Returns a fully transparent color.
    pub fn transparent() -> Self {
        Self::rgba(0, 0, 0, 0.0)
    }

    pub fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    pub fn rgba(r: u8, g: u8, b: u8, a: f32) -> Self {
        Self {
            r,
            g,
            b,
            a: a.clamp(0.0, 1.0),
        }
    }

    /// Returns a copy of this color with the specified alpha value.
    pub fn with_alpha(&self, alpha: f32) -> Self {
        Self::rgba(self.r, self.g, self.b, alpha)
    }

    /// Returns true if the color is fully opaque.
    pub fn is_opaque(&self) -> bool {
        self.a >= 1.0
    }

    /// Increases HSL lightness by `amount` percentage points.
    pub fn lighten(&self, amount: f32) -> Self {
        self.adjust_lightness(amount)
    }

    /// Decreases HSL lightness by `amount` percentage points.
    pub fn darken(&self, amount: f32) -> Self {
        self.adjust_lightness(-amount)
    }

    fn adjust_lightness(&self, delta: f32) -> Self {
        let (h, s, l) = self.to_hsl();
        let new_l = (l + delta / 100.0).clamp(0.0, 1.0);
        Self::from_hsl(h, s, new_l, self.a)
    }

    /// Formats the color as `#rrggbb`, ignoring alpha.
    pub fn to_hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    /// Parse a color string in any supported format.
    pub fn parse(input: &str) -> Result<Self, ColorParseError> {
        let input = input.trim();
        if input.is_empty() {
            return Err(ColorParseError::Empty);
        }

        let lower = input.to_ascii_lowercase();

        if lower == "transparent" {
            return Ok(Self::transparent());
        }

        if let Some(hex) = lower.strip_prefix('#') {
            return Self::parse_hex(hex);
        }

        if lower.starts_with("rgb") {
            let parts = Self::function_args(&lower)?;
            return Self::from_rgb_args(&parts);
        }

        if lower.starts_with("hsl") {
            let parts = Self::function_args(&lower)?;
            return Self::from_hsl_args(&parts);
        }

        NAMED_COLORS
            .get(lower.as_str())
            .map(|&(r, g, b)| Self::rgb(r, g, b))
            .ok_or(ColorParseError::UnknownName(lower))
    }

    fn parse_hex(hex: &str) -> Result<Self, ColorParseError> {
        // from_str_radix alone would accept a leading sign.
        if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(ColorParseError::InvalidHex(hex.to_string()));
        }

        let nibble = |i: usize| -> Result<u8, ColorParseError> {
            u8::from_str_radix(&hex[i..i + 1], 16)
                .map(|v| v * 17)
                .map_err(|_| ColorParseError::InvalidHex(hex.to_string()))
        };
        let byte = |i: usize| -> Result<u8, ColorParseError> {
            u8::from_str_radix(&hex[i..i + 2], 16)
                .map_err(|_| ColorParseError::InvalidHex(hex.to_string()))
        };

        match hex.len() {
            3 => Ok(Self::rgb(nibble(0)?, nibble(1)?, nibble(2)?)),
            4 => Ok(Self::rgba(
                nibble(0)?,
                nibble(1)?,
                nibble(2)?,
                nibble(3)? as f32 / 255.0,
            )),
            6 => Ok(Self::rgb(byte(0)?, byte(2)?, byte(4)?)),
            8 => Ok(Self::rgba(byte(0)?, byte(2)?, byte(4)?, byte(6)? as f32 / 255.0)),
            _ => Err(ColorParseError::InvalidHex(hex.to_string())),
        }
    }

    /// Splits `name(a, b, c)` into its trimmed arguments.
    fn function_args(input: &str) -> Result<Vec<&str>, ColorParseError> {
        let start = input
            .find('(')
            .ok_or_else(|| ColorParseError::InvalidFunction(input.to_string()))?;
        if !input.ends_with(')') {
            return Err(ColorParseError::InvalidFunction(input.to_string()));
        }

        let parts: Vec<&str> = input[start + 1..input.len() - 1]
            .split(',')
            .map(str::trim)
            .collect();

        if parts.len() < 3 || parts.len() > 4 {
            return Err(ColorParseError::InvalidFunction(input.to_string()));
        }
        Ok(parts)
    }

    fn from_rgb_args(parts: &[&str]) -> Result<Self, ColorParseError> {
        let channel = |s: &str| -> Result<u8, ColorParseError> {
            s.parse::<u8>()
                .map_err(|_| ColorParseError::InvalidComponent(s.to_string()))
        };

        let alpha = match parts.get(3) {
            Some(a) => Self::parse_alpha(a)?,
            None => 1.0,
        };
        Ok(Self::rgba(
            channel(parts[0])?,
            channel(parts[1])?,
            channel(parts[2])?,
            alpha,
        ))
    }

    fn from_hsl_args(parts: &[&str]) -> Result<Self, ColorParseError> {
        let h: f32 = parts[0]
            .trim_end_matches("deg")
            .parse()
            .map_err(|_| ColorParseError::InvalidComponent(parts[0].to_string()))?;
        let s = Self::parse_percentage(parts[1])?;
        let l = Self::parse_percentage(parts[2])?;
        let alpha = match parts.get(3) {
            Some(a) => Self::parse_alpha(a)?,
            None => 1.0,
        };
        Ok(Self::from_hsl(h.rem_euclid(360.0), s, l, alpha))
    }

    fn parse_alpha(s: &str) -> Result<f32, ColorParseError> {
        let value: f32 = s
            .parse()
            .map_err(|_| ColorParseError::InvalidComponent(s.to_string()))?;
        if !(0.0..=1.0).contains(&value) {
            return Err(ColorParseError::InvalidComponent(s.to_string()));
        }
        Ok(value)
    }

    fn parse_percentage(s: &str) -> Result<f32, ColorParseError> {
        let value: f32 = s
            .trim_end_matches('%')
            .parse()
            .map_err(|_| ColorParseError::InvalidComponent(s.to_string()))?;
        Ok((value / 100.0).clamp(0.0, 1.0))
    }

    /// Converts to `(hue in degrees, saturation 0-1, lightness 0-1)`.
    pub fn to_hsl(&self) -> (f32, f32, f32) {
        let r = self.r as f32 / 255.0;
        let g = self.g as f32 / 255.0;
        let b = self.b as f32 / 255.0;

        let max = r.max(g).max(b);
        let min = r.min(g).min(b);
        let l = (max + min) / 2.0;

        if max == min {
            return (0.0, 0.0, l);
        }

        let d = max - min;
        let s = if l > 0.5 {
            d / (2.0 - max - min)
        } else {
            d / (max + min)
        };
        let h = if max == r {
            (g - b) / d + if g < b { 6.0 } else { 0.0 }
        } else if max == g {
            (b - r) / d + 2.0
        } else {
            (r - g) / d + 4.0
        };
        (h * 60.0, s, l)
    }

    /// Creates a color from HSL values (hue in degrees, others 0-1).
    pub fn from_hsl(h: f32, s: f32, l: f32, a: f32) -> Self {
        let h = h / 360.0;
        let (r, g, b) = if s == 0.0 {
            (l, l, l)
        } else {
            let q = if l < 0.5 {
                l * (1.0 + s)
            } else {
                l + s - l * s
            };
            let p = 2.0 * l - q;
            (
                hue_to_rgb(p, q, h + 1.0 / 3.0),
                hue_to_rgb(p, q, h),
                hue_to_rgb(p, q, h - 1.0 / 3.0),
            )
        };

        let channel = |v: f32| (v * 255.0).round().clamp(0.0, 255.0) as u8;
        Self::rgba(channel(r), channel(g), channel(b), a)
    }
}

fn hue_to_rgb(p: f32, q: f32, mut t: f32) -> f32 {
    if t < 0.0 {
        t += 1.0;
    }
    if t > 1.0 {
        t -= 1.0;
    }

    if t < 1.0 / 6.0 {
        p + (q - p) * 6.0 * t
    } else if t < 1.0 / 2.0 {
        q
    } else if t < 2.0 / 3.0 {
        p + (q - p) * (2.0 / 3.0 - t) * 6.0
    } else {
        p
    }
}

impl FromStr for RgbaColor {
    type Err = ColorParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for RgbaColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_opaque() {
            write!(f, "{}", self.to_hex())
        } else {
            // Two decimals is plenty for alpha and keeps output stable.
            let alpha = (self.a * 100.0).round() / 100.0;
            write!(f, "rgba({}, {}, {}, {})", self.r, self.g, self.b, alpha)
        }
    }
}
