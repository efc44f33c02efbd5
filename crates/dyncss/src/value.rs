//! Sources for the current setting value.
//!
//! The generator never looks the value up itself; it is handed a
//! [`ValueSource`] when it is constructed. Hosts usually pass a
//! [`SharedValue`] they keep writing to, tests usually pass a
//! [`StaticValue`].

use std::sync::{Arc, RwLock};

/// Supplies the live value of the setting a generator is attached to.
pub trait ValueSource: Send + Sync {
    fn current_value(&self) -> String;
}

impl<T: ValueSource + ?Sized> ValueSource for &T {
    fn current_value(&self) -> String {
        (**self).current_value()
    }
}

impl<T: ValueSource + ?Sized> ValueSource for Box<T> {
    fn current_value(&self) -> String {
        (**self).current_value()
    }
}

impl<T: ValueSource + ?Sized> ValueSource for Arc<T> {
    fn current_value(&self) -> String {
        (**self).current_value()
    }
}

/// A fixed value.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StaticValue(pub String);

impl StaticValue {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }
}

impl ValueSource for StaticValue {
    fn current_value(&self) -> String {
        self.0.clone()
    }
}

/// A value computed on every read.
pub struct FnValue<F>(pub F);

impl<F> ValueSource for FnValue<F>
where
    F: Fn() -> String + Send + Sync,
{
    fn current_value(&self) -> String {
        (self.0)()
    }
}

/// Wraps a closure as a [`ValueSource`].
pub fn value_fn<F>(f: F) -> FnValue<F>
where
    F: Fn() -> String + Send + Sync,
{
    FnValue(f)
}

/// A value cell shared between the host, which writes it, and generators,
/// which read it.
///
/// Clones share the same cell.
///
/// ```rust
/// use dyncss::{SharedValue, ValueSource};
///
/// let value = SharedValue::new("red");
/// let reader = value.clone();
/// value.set("blue");
/// assert_eq!(reader.current_value(), "blue");
/// ```
#[derive(Clone, Debug, Default)]
pub struct SharedValue {
    cell: Arc<RwLock<String>>,
}

impl SharedValue {
    pub fn new(initial: impl Into<String>) -> Self {
        Self {
            cell: Arc::new(RwLock::new(initial.into())),
        }
    }

    pub fn get(&self) -> String {
        // A poisoned lock still holds a complete String.
        match self.cell.read() {
            Ok(guard) => guard.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }

    pub fn set(&self, value: impl Into<String>) {
        let value = value.into();
        match self.cell.write() {
            Ok(mut guard) => *guard = value,
            Err(poisoned) => *poisoned.into_inner() = value,
        }
    }
}

impl ValueSource for SharedValue {
    fn current_value(&self) -> String {
        self.get()
    }
}
