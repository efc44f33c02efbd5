//! CSS generation from property descriptors.
//!
//! [`CssGenerator`] owns an ordered list of [`CssProperty`] descriptors and a
//! [`ValueSource`]. Rendering walks descriptors in insertion order and, within
//! each descriptor, its selector groups in insertion order, emitting one rule
//! per group:
//!
//! ```text
//! .a, .b { color: red; }
//! @media (min-width: 900px) { .c { color: red; } }
//! ```
//!
//! Every rule ends with a single `\n`. The exact spacing is stable: live
//! preview hosts compare rendered output byte for byte.

use crate::descriptor::{CssProperty, MediaQuery};
use crate::error::DynCssError;
use crate::modifier::{Modifier, apply_modifier};
use crate::value::ValueSource;

/// Renders CSS for a list of descriptors bound to one setting value.
///
/// # Example
///
/// ```rust
/// use dyncss::{CssGenerator, CssProperty, StaticValue};
///
/// let generator = CssGenerator::with_properties(
///     StaticValue::new("red"),
///     vec![CssProperty::new("color").selectors("noop", [".a", ".b"])],
/// );
///
/// assert_eq!(generator.render(), ".a, .b { color: red; }\n");
/// ```
#[derive(Debug, Clone)]
pub struct CssGenerator<S> {
    properties: Vec<CssProperty>,
    source: S,
}

impl<S: ValueSource> CssGenerator<S> {
    /// Creates a generator with no descriptors.
    pub fn new(source: S) -> Self {
        Self::with_properties(source, Vec::new())
    }

    /// Creates a generator over `properties`, without validating them.
    pub fn with_properties(source: S, properties: Vec<CssProperty>) -> Self {
        Self { properties, source }
    }

    /// Creates a generator only if every descriptor passes
    /// [`CssProperty::validate`].
    pub fn try_from_properties(
        source: S,
        properties: Vec<CssProperty>,
    ) -> Result<Self, DynCssError> {
        let generator = Self::with_properties(source, properties);
        generator.validate()?;
        Ok(generator)
    }

    /// Appends a descriptor. Emission order follows insertion order.
    pub fn push(&mut self, property: CssProperty) {
        self.properties.push(property);
    }

    /// Builder method to append a descriptor.
    pub fn property(mut self, property: CssProperty) -> Self {
        self.push(property);
        self
    }

    /// All descriptors in insertion order.
    pub fn properties(&self) -> &[CssProperty] {
        &self.properties
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    /// Descriptors whose name equals `name`, in insertion order.
    pub fn filter_by_name(&self, name: &str) -> Vec<&CssProperty> {
        self.properties.iter().filter(|p| p.name == name).collect()
    }

    /// Descriptors whose name equals `name` and whose modifier equals
    /// `modifier`. `None` selects descriptors without a modifier.
    pub fn filter_by_name_and_modifier(
        &self,
        name: &str,
        modifier: Option<&Modifier>,
    ) -> Vec<&CssProperty> {
        self.properties
            .iter()
            .filter(|p| p.name == name && p.has_modifier(modifier))
            .collect()
    }

    /// Validates every descriptor; the first failure is returned.
    pub fn validate(&self) -> Result<(), DynCssError> {
        self.properties.iter().try_for_each(CssProperty::validate)
    }

    /// Renders all descriptors against the current value.
    ///
    /// The value is read once per call. Modifiers run once per selector
    /// group. Groups without selectors are skipped.
    pub fn render(&self) -> String {
        let mut out = String::new();
        if self.properties.is_empty() {
            return out;
        }

        let base_value = self.source.current_value();
        log::trace!(
            "rendering {} css properties with value '{}'",
            self.properties.len(),
            base_value
        );

        for property in &self.properties {
            for group in &property.selectors {
                if group.is_empty() {
                    log::debug!(
                        "skipping empty selector group '{}' of '{}'",
                        group.media.as_key(),
                        property.name
                    );
                    continue;
                }

                let value = match &property.modifier {
                    Some(modifier) => apply_modifier(&base_value, modifier),
                    None => base_value.clone(),
                };

                write_rule(
                    &mut out,
                    &group.media,
                    &group.joined(),
                    &property.name,
                    &value,
                );
            }
        }

        out
    }
}

fn write_rule(out: &mut String, media: &MediaQuery, selectors: &str, name: &str, value: &str) {
    let rule = match media {
        MediaQuery::Noop => format!("{} {{ {}: {}; }}", selectors, name, value),
        MediaQuery::Prelude(prelude) => {
            format!("{} {{ {} {{ {}: {}; }} }}", prelude, selectors, name, value)
        }
    };
    log::trace!("emit: {}", rule);
    out.push_str(&rule);
    out.push('\n');
}
