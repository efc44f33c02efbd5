//! The dynamic CSS setting type.
//!
//! A [`DynamicCssSetting`] is what a configuration host registers: an id, a
//! stored value with its default, a transport hint, and the descriptors that
//! turn the value into CSS. The host owns persistence and the UI; it writes
//! new values with [`DynamicCssSetting::set_value`] and asks for
//! [`DynamicCssSetting::render_css`] whenever it needs the stylesheet.

use dyncss::sheet::parse_sheet;
use dyncss::{CssGenerator, CssProperty, Modifier, SharedValue};
use dyncss_color::RgbaColor;

use crate::error::Result;

/// How the host should propagate value changes to a preview.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Transport {
    /// Reload the preview.
    Refresh,
    /// Push the new value to the open preview without reloading.
    #[default]
    PostMessage,
}

impl Transport {
    pub fn as_str(&self) -> &'static str {
        match self {
            Transport::Refresh => "refresh",
            Transport::PostMessage => "postMessage",
        }
    }

    /// True when the host may update the preview in place.
    pub fn is_live(&self) -> bool {
        matches!(self, Transport::PostMessage)
    }
}

/// A setting whose value drives a set of generated CSS rules.
///
/// # Example
///
/// ```rust
/// use dynamic_css::{CssProperty, DynamicCssSetting, Transport};
///
/// let setting = DynamicCssSetting::new(
///     "accent_color",
///     "#1fa0e2",
///     vec![CssProperty::new("color").selectors("noop", ["a"])],
/// );
///
/// assert_eq!(setting.transport(), Transport::PostMessage);
/// assert_eq!(setting.render_css(), "a { color: #1fa0e2; }\n");
///
/// setting.set_value("#333333");
/// assert_eq!(setting.render_css(), "a { color: #333333; }\n");
/// ```
#[derive(Debug, Clone)]
pub struct DynamicCssSetting {
    id: String,
    default: String,
    transport: Transport,
    value: SharedValue,
    css: CssGenerator<SharedValue>,
}

impl DynamicCssSetting {
    /// Creates a setting holding `default`, without validating descriptors.
    pub fn new(
        id: impl Into<String>,
        default: impl Into<String>,
        properties: Vec<CssProperty>,
    ) -> Self {
        let default = default.into();
        let value = SharedValue::new(default.clone());
        Self {
            id: id.into(),
            default,
            transport: Transport::default(),
            css: CssGenerator::with_properties(value.clone(), properties),
            value,
        }
    }

    /// Creates a setting, rejecting descriptors without a name or selectors.
    pub fn try_new(
        id: impl Into<String>,
        default: impl Into<String>,
        properties: Vec<CssProperty>,
    ) -> Result<Self> {
        let setting = Self::new(id, default, properties);
        setting.css.validate()?;
        Ok(setting)
    }

    /// Creates a setting from descriptor sheet text.
    pub fn from_sheet(
        id: impl Into<String>,
        default: impl Into<String>,
        sheet: &str,
    ) -> Result<Self> {
        Ok(Self::new(id, default, parse_sheet(sheet)?))
    }

    /// Builder method to set the transport hint.
    pub fn with_transport(mut self, transport: Transport) -> Self {
        self.transport = transport;
        self
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn transport(&self) -> Transport {
        self.transport
    }

    pub fn default_value(&self) -> &str {
        &self.default
    }

    /// The current stored value.
    pub fn value(&self) -> String {
        self.value.get()
    }

    /// Stores a new value; the next render uses it.
    pub fn set_value(&self, value: impl Into<String>) {
        let value = value.into();
        log::debug!("setting '{}' = '{}'", self.id, value);
        self.value.set(value);
    }

    /// The current value parsed as a CSS color.
    pub fn color(&self) -> Result<RgbaColor> {
        Ok(RgbaColor::parse(&self.value())?)
    }

    /// Restores the default value.
    pub fn reset(&self) {
        self.set_value(self.default.clone());
    }

    /// A handle the host can write through directly.
    pub fn value_handle(&self) -> SharedValue {
        self.value.clone()
    }

    /// All descriptors in declaration order.
    pub fn css_props(&self) -> &[CssProperty] {
        self.css.properties()
    }

    /// Descriptors for one CSS property.
    ///
    /// With `modifier` set to `None` every descriptor named `name` is
    /// returned. `Some(m)` additionally requires the descriptor's modifier to
    /// equal `m`, where `Some(None)` selects descriptors without a modifier.
    pub fn single_css_prop(
        &self,
        name: &str,
        modifier: Option<Option<&Modifier>>,
    ) -> Vec<&CssProperty> {
        match modifier {
            Some(modifier) => self.css.filter_by_name_and_modifier(name, modifier),
            None => self.css.filter_by_name(name),
        }
    }

    /// Renders the CSS for the current value.
    pub fn render_css(&self) -> String {
        self.css.render()
    }
}
