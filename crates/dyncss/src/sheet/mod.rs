//! Descriptor sheets: CSS property descriptors declared as text.
//!
//! Configuration code can build [`CssProperty`] values directly, or load them
//! from a sheet:
//!
//! ```text
//! /* Link colors */
//! color {
//!     a, .link;
//!     @media (min-width: 900px) { .nav a; }
//! }
//!
//! background-color: darken(10%) {
//!     .btn:hover, .btn:focus;
//! }
//! ```
//!
//! ## Syntax
//!
//! - A block starts with the CSS property name, optionally followed by `:` and
//!   a modifier call (`name` or `name(arg, ...)`)
//! - `selectors;` inside a block adds to the top-level (`noop`) group
//! - `@prelude { selectors; }` adds to the group keyed by the prelude text
//! - Repeating a group key appends to the first occurrence
//! - Whitespace runs inside a prelude or selector, line breaks included,
//!   collapse to one space
//! - Stray `;` items are ignored
//! - `/* ... */` comments are ignored, except inside quoted strings
//! - Quoted strings may not contain `{`, `}` or `;`
//!
//! Modifier names resolve through a [`ModifierRegistry`]; [`parse_sheet`] uses
//! the built-in one.
//!
//! ## Example
//!
//! ```rust
//! use dyncss::sheet::parse_sheet;
//!
//! let props = parse_sheet("color { .a, .b; }").unwrap();
//! assert_eq!(props[0].name, "color");
//! ```

pub mod comments;
pub mod parser;
pub mod selectors;

use std::path::Path;

use crate::descriptor::{CssProperty, MediaQuery, SelectorGroups};
use crate::error::DynCssError;
use crate::modifier::{ModifierRegistry, builtin_registry};

pub use comments::strip_comments;
pub use parser::{RawCall, RawGroup, RawProperty, parse_properties};
pub use selectors::{collapse_whitespace, split_selectors};

/// Parses a sheet, resolving modifiers against the built-in registry.
pub fn parse_sheet(source: &str) -> Result<Vec<CssProperty>, DynCssError> {
    parse_sheet_with(source, builtin_registry())
}

/// Parses a sheet, resolving modifiers against `registry`.
pub fn parse_sheet_with(
    source: &str,
    registry: &ModifierRegistry,
) -> Result<Vec<CssProperty>, DynCssError> {
    let clean = strip_comments(source);

    let (remaining, raw) = parse_properties(&clean)
        .map_err(|e| DynCssError::InvalidSyntax(e.to_string()))?;

    if !remaining.is_empty() {
        let consumed = &clean[..clean.len() - remaining.len()];
        let line = consumed.matches('\n').count() + 1;
        let near = remaining.lines().next().unwrap_or_default().trim();
        return Err(DynCssError::InvalidSyntax(format!(
            "line {}: unexpected input near '{}'",
            line, near
        )));
    }

    raw.into_iter()
        .map(|prop| build_property(prop, registry))
        .collect()
}

/// Reads and parses a sheet file with the built-in registry.
pub fn load_sheet(path: impl AsRef<Path>) -> Result<Vec<CssProperty>, DynCssError> {
    let source = std::fs::read_to_string(path.as_ref())?;
    log::debug!("loaded descriptor sheet {}", path.as_ref().display());
    parse_sheet(&source)
}

fn build_property(
    raw: RawProperty<'_>,
    registry: &ModifierRegistry,
) -> Result<CssProperty, DynCssError> {
    let mut groups = SelectorGroups::new();
    for group in raw.groups {
        let media = match group.media {
            Some(prelude) => MediaQuery::from_key(&collapse_whitespace(prelude)),
            None => MediaQuery::Noop,
        };
        let selectors = group.selectors.into_iter().map(collapse_whitespace);
        groups.extend(media, selectors);
    }

    let mut property = CssProperty::new(raw.name).with_selector_groups(groups);
    if let Some(call) = raw.modifier {
        property = property.with_modifier(registry.resolve(call.name, &call.args)?);
    }

    property.validate()?;
    log::debug!(
        "parsed css property '{}' with {} selector group(s)",
        property.name,
        property.selectors.len()
    );
    Ok(property)
}
