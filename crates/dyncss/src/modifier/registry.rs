//! Name-based modifier lookup.
//!
//! The descriptor sheet refers to modifiers by call syntax, e.g.
//! `darken(10%)`. A [`ModifierRegistry`] maps the name to a factory that turns
//! the raw argument strings into a [`Modifier`].
//!
//! ## Built-in Modifiers
//!
//! | Name              | Arguments                         |
//! |-------------------|-----------------------------------|
//! | `darken`          | amount, `10` or `10%`             |
//! | `lighten`         | amount, `10` or `10%`             |
//! | `alpha`           | opacity between `0` and `1`       |
//! | `linear-gradient` | optional direction, optional amount |
//! | `identity`        | none                              |

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use once_cell::sync::Lazy;

use super::Modifier;
use super::color::{Alpha, Darken, Lighten, LinearGradient};
use crate::error::DynCssError;

/// Builds a modifier from its call arguments.
pub type ModifierFactory = Arc<dyn Fn(&[&str]) -> Result<Modifier, DynCssError> + Send + Sync>;

static BUILTIN_REGISTRY: Lazy<ModifierRegistry> = Lazy::new(ModifierRegistry::with_builtins);

/// Returns the shared registry of built-in modifiers.
pub fn builtin_registry() -> &'static ModifierRegistry {
    &BUILTIN_REGISTRY
}

/// Maps modifier names to factories.
#[derive(Clone, Default)]
pub struct ModifierRegistry {
    factories: HashMap<String, ModifierFactory>,
}

impl ModifierRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a registry pre-populated with the built-in modifiers.
    pub fn with_builtins() -> Self {
        let mut registry = Self::new();

        registry.register("darken", |args| {
            expect_arity("darken", args, 1, 1)?;
            Ok(Modifier::new(Darken::new(parse_amount("darken", args[0])?)))
        });
        registry.register("lighten", |args| {
            expect_arity("lighten", args, 1, 1)?;
            Ok(Modifier::new(Lighten::new(parse_amount("lighten", args[0])?)))
        });
        registry.register("alpha", |args| {
            expect_arity("alpha", args, 1, 1)?;
            Ok(Modifier::new(Alpha::new(parse_opacity("alpha", args[0])?)))
        });
        registry.register("linear-gradient", |args| {
            expect_arity("linear-gradient", args, 0, 2)?;
            let direction = args
                .first()
                .copied()
                .unwrap_or(LinearGradient::DEFAULT_DIRECTION);
            let darken = match args.get(1) {
                Some(amount) => parse_amount("linear-gradient", amount)?,
                None => LinearGradient::DEFAULT_DARKEN,
            };
            Ok(Modifier::new(LinearGradient::new(direction, darken)))
        });
        registry.register("identity", |args| {
            expect_arity("identity", args, 0, 0)?;
            Ok(Modifier::identity())
        });

        registry
    }

    /// Registers a factory, replacing any previous one with the same name.
    pub fn register<F>(&mut self, name: impl Into<String>, factory: F) -> &mut Self
    where
        F: Fn(&[&str]) -> Result<Modifier, DynCssError> + Send + Sync + 'static,
    {
        self.factories.insert(name.into(), Arc::new(factory));
        self
    }

    pub fn contains(&self, name: &str) -> bool {
        self.factories.contains_key(name)
    }

    /// Registered names, sorted.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.factories.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Builds the modifier called `name` with `args`.
    pub fn resolve(&self, name: &str, args: &[&str]) -> Result<Modifier, DynCssError> {
        let factory = self
            .factories
            .get(name)
            .ok_or_else(|| DynCssError::InvalidModifierKind(name.to_string()))?;
        factory(args)
    }
}

impl fmt::Debug for ModifierRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ModifierRegistry")
            .field("names", &self.names())
            .finish()
    }
}

fn invalid_args(name: &str, reason: impl Into<String>) -> DynCssError {
    DynCssError::InvalidModifierArgs {
        name: name.to_string(),
        reason: reason.into(),
    }
}

fn expect_arity(name: &str, args: &[&str], min: usize, max: usize) -> Result<(), DynCssError> {
    if args.len() < min || args.len() > max {
        let expected = if min == max {
            format!("{}", min)
        } else {
            format!("{} to {}", min, max)
        };
        return Err(invalid_args(
            name,
            format!("expected {} argument(s), got {}", expected, args.len()),
        ));
    }
    Ok(())
}

/// Parses a lightness amount: `10` and `10%` both mean ten percentage points.
fn parse_amount(name: &str, arg: &str) -> Result<f32, DynCssError> {
    let amount: f32 = arg
        .trim()
        .trim_end_matches('%')
        .parse()
        .map_err(|_| invalid_args(name, format!("'{}' is not a number", arg)))?;
    if !(0.0..=100.0).contains(&amount) {
        return Err(invalid_args(name, format!("{} is outside 0-100", arg)));
    }
    Ok(amount)
}

fn parse_opacity(name: &str, arg: &str) -> Result<f32, DynCssError> {
    let opacity: f32 = arg
        .trim()
        .parse()
        .map_err(|_| invalid_args(name, format!("'{}' is not a number", arg)))?;
    if !(0.0..=1.0).contains(&opacity) {
        return Err(invalid_args(name, format!("{} is outside 0-1", arg)));
    }
    Ok(opacity)
}
