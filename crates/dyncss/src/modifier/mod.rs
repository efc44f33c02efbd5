//! Value modifiers.
//!
//! A modifier transforms the raw setting value before it is written into a
//! rule, e.g. deriving a darker hover shade from a picked color. Anything that
//! implements [`Modify`] can be used; plain closures are adapted with
//! [`Modifier::from_fn`]. Either way the generator only ever calls
//! [`Modifier::apply`].
//!
//! ## Equality
//!
//! Descriptors can be filtered by modifier, so modifiers compare:
//!
//! - equal when they are the same handle (clones share one allocation)
//! - equal when both report the same [`Modify::describe`] string, so two
//!   independently built `darken(10%)` modifiers match
//! - unequal otherwise; closures never describe themselves
//!
//! ## Submodules
//!
//! - [`color`]: built-in color modifiers (`darken`, `lighten`, `alpha`, `linear-gradient`)
//! - [`registry`]: name-based lookup used by the descriptor sheet

pub mod color;
pub mod registry;

use std::fmt;
use std::sync::Arc;

pub use color::{Alpha, Darken, Lighten, LinearGradient};
pub use registry::{ModifierFactory, ModifierRegistry, builtin_registry};

/// A pure value transform.
///
/// Implementations must not rely on being called a particular number of
/// times: the generator runs the modifier once per selector group.
pub trait Modify: Send + Sync {
    fn modify(&self, value: &str) -> String;

    /// A canonical description such as `darken(10%)`.
    ///
    /// Modifiers that describe themselves identically are considered equal.
    fn describe(&self) -> Option<String> {
        None
    }
}

/// Shared handle to a [`Modify`] implementation.
#[derive(Clone)]
pub struct Modifier {
    inner: Arc<dyn Modify>,
}

impl Modifier {
    pub fn new<M: Modify + 'static>(modify: M) -> Self {
        Self {
            inner: Arc::new(modify),
        }
    }

    /// Wraps a bare function as a modifier.
    pub fn from_fn<F>(f: F) -> Self
    where
        F: Fn(&str) -> String + Send + Sync + 'static,
    {
        Self::new(FnModify(f))
    }

    /// A modifier that passes the value through untouched.
    ///
    /// Stands in for configuration that names something which is neither a
    /// function nor a modifier object.
    pub fn inert() -> Self {
        Self::new(Inert)
    }

    /// The identity modifier, which describes itself as `identity`.
    pub fn identity() -> Self {
        Self::new(Identity)
    }

    pub fn apply(&self, value: &str) -> String {
        self.inner.modify(value)
    }

    pub fn describe(&self) -> Option<String> {
        self.inner.describe()
    }
}

/// Applies `modifier` to `value`.
pub fn apply_modifier(value: &str, modifier: &Modifier) -> String {
    modifier.apply(value)
}

impl PartialEq for Modifier {
    fn eq(&self, other: &Self) -> bool {
        if Arc::ptr_eq(&self.inner, &other.inner) {
            return true;
        }
        match (self.describe(), other.describe()) {
            (Some(a), Some(b)) => a == b,
            _ => false,
        }
    }
}

impl fmt::Debug for Modifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.describe() {
            Some(description) => write!(f, "Modifier({})", description),
            None => f.write_str("Modifier(<opaque>)"),
        }
    }
}

struct FnModify<F>(F);

impl<F> Modify for FnModify<F>
where
    F: Fn(&str) -> String + Send + Sync,
{
    fn modify(&self, value: &str) -> String {
        (self.0)(value)
    }
}

struct Inert;

impl Modify for Inert {
    fn modify(&self, value: &str) -> String {
        value.to_string()
    }
}

struct Identity;

impl Modify for Identity {
    fn modify(&self, value: &str) -> String {
        value.to_string()
    }

    fn describe(&self) -> Option<String> {
        Some("identity".to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Suffix(&'static str);

    impl Modify for Suffix {
        fn modify(&self, value: &str) -> String {
            format!("{}{}", value, self.0)
        }

        fn describe(&self) -> Option<String> {
            Some(format!("suffix({})", self.0))
        }
    }

    #[test]
    fn test_capability_object_dispatch() {
        let m = Modifier::new(Suffix("px"));
        assert_eq!(apply_modifier("12", &m), "12px");
    }

    #[test]
    fn test_closure_dispatch() {
        let m = Modifier::from_fn(|v| v.to_uppercase());
        assert_eq!(apply_modifier("red", &m), "RED");
    }

    #[test]
    fn test_inert_passthrough() {
        assert_eq!(apply_modifier("#fff", &Modifier::inert()), "#fff");
        assert_eq!(apply_modifier("#fff", &Modifier::identity()), "#fff");
    }

    #[test]
    fn test_equality_by_handle() {
        let a = Modifier::from_fn(|v| v.to_string());
        let b = Modifier::from_fn(|v| v.to_string());
        assert_eq!(a, a.clone());
        assert_ne!(a, b);
    }

    #[test]
    fn test_equality_by_description() {
        assert_eq!(Modifier::new(Suffix("px")), Modifier::new(Suffix("px")));
        assert_ne!(Modifier::new(Suffix("px")), Modifier::new(Suffix("em")));
        assert_ne!(Modifier::inert(), Modifier::inert());
        assert_eq!(Modifier::identity(), Modifier::identity());
    }

    #[test]
    fn test_debug_output() {
        assert_eq!(
            format!("{:?}", Modifier::new(Suffix("px"))),
            "Modifier(suffix(px))"
        );
        assert_eq!(format!("{:?}", Modifier::inert()), "Modifier(<opaque>)");
    }
}
