//! CSS property descriptors.
//!
//! A [`CssProperty`] names one CSS property, the selectors it applies to, and
//! an optional [`Modifier`] that transforms the setting value before it is
//! written out. Selectors are grouped by [`MediaQuery`]: the `noop` group is
//! emitted at the top level, every other group is wrapped in its at-rule
//! prelude verbatim.

use crate::error::DynCssError;
use crate::modifier::Modifier;

/// The key of a selector group.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum MediaQuery {
    /// No wrapper; rules are emitted at the top level.
    Noop,
    /// An at-rule prelude such as `@media (min-width: 900px)`, used verbatim.
    Prelude(String),
}

impl MediaQuery {
    /// The configuration key that means "no media query".
    pub const NOOP_KEY: &'static str = "noop";

    /// Maps a configuration key to a media query. Only the exact string
    /// `noop` selects [`MediaQuery::Noop`].
    pub fn from_key(key: &str) -> Self {
        if key == Self::NOOP_KEY {
            MediaQuery::Noop
        } else {
            MediaQuery::Prelude(key.to_string())
        }
    }

    /// Returns the configuration key for this media query.
    pub fn as_key(&self) -> &str {
        match self {
            MediaQuery::Noop => Self::NOOP_KEY,
            MediaQuery::Prelude(prelude) => prelude,
        }
    }

    pub fn is_noop(&self) -> bool {
        matches!(self, MediaQuery::Noop)
    }
}

impl From<&str> for MediaQuery {
    fn from(key: &str) -> Self {
        Self::from_key(key)
    }
}

impl From<String> for MediaQuery {
    fn from(key: String) -> Self {
        if key == Self::NOOP_KEY {
            MediaQuery::Noop
        } else {
            MediaQuery::Prelude(key)
        }
    }
}

/// Selectors sharing one media query within a descriptor.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SelectorGroup {
    pub media: MediaQuery,
    pub selectors: Vec<String>,
}

impl SelectorGroup {
    pub fn new(media: MediaQuery, selectors: Vec<String>) -> Self {
        Self { media, selectors }
    }

    /// The selector list as it appears in a rule: `.a, .b`.
    pub fn joined(&self) -> String {
        self.selectors.join(", ")
    }

    pub fn is_empty(&self) -> bool {
        self.selectors.is_empty()
    }
}

/// Ordered mapping from media query to selectors.
///
/// Keys are unique. Inserting an existing key replaces its selectors but keeps
/// the group at its original position.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SelectorGroups {
    groups: Vec<SelectorGroup>,
}

impl SelectorGroups {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the selectors for `media`, replacing any existing group in place.
    pub fn insert<M, I, S>(&mut self, media: M, selectors: I)
    where
        M: Into<MediaQuery>,
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let media = media.into();
        let selectors: Vec<String> = selectors.into_iter().map(Into::into).collect();
        match self.groups.iter_mut().find(|g| g.media == media) {
            Some(group) => group.selectors = selectors,
            None => self.groups.push(SelectorGroup::new(media, selectors)),
        }
    }

    /// Appends selectors to the group for `media`, creating it at the end if needed.
    pub fn extend<M, I, S>(&mut self, media: M, selectors: I)
    where
        M: Into<MediaQuery>,
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let media = media.into();
        let selectors = selectors.into_iter().map(Into::into);
        match self.groups.iter_mut().find(|g| g.media == media) {
            Some(group) => group.selectors.extend(selectors),
            None => self.groups.push(SelectorGroup::new(media, selectors.collect())),
        }
    }

    pub fn get(&self, media: &MediaQuery) -> Option<&SelectorGroup> {
        self.groups.iter().find(|g| &g.media == media)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, SelectorGroup> {
        self.groups.iter()
    }

    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }
}

impl<'a> IntoIterator for &'a SelectorGroups {
    type Item = &'a SelectorGroup;
    type IntoIter = std::slice::Iter<'a, SelectorGroup>;

    fn into_iter(self) -> Self::IntoIter {
        self.groups.iter()
    }
}

impl<M, I, S> FromIterator<(M, I)> for SelectorGroups
where
    M: Into<MediaQuery>,
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    fn from_iter<T: IntoIterator<Item = (M, I)>>(iter: T) -> Self {
        let mut groups = SelectorGroups::new();
        for (media, selectors) in iter {
            groups.insert(media, selectors);
        }
        groups
    }
}

/// One CSS property driven by the setting value.
///
/// # Example
///
/// ```rust
/// use dyncss::{CssProperty, Modifier};
///
/// let prop = CssProperty::new("color")
///     .selectors("noop", [".a", ".b"])
///     .selectors("@media (min-width: 900px)", [".c"])
///     .with_modifier(Modifier::from_fn(|v| v.to_uppercase()));
///
/// assert_eq!(prop.selectors.len(), 2);
/// assert!(prop.modifier.is_some());
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct CssProperty {
    pub name: String,
    pub selectors: SelectorGroups,
    pub modifier: Option<Modifier>,
}

impl CssProperty {
    /// Creates a descriptor with no selector groups and no modifier.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            selectors: SelectorGroups::new(),
            modifier: None,
        }
    }

    /// Builder method to set the selectors of one group.
    pub fn selectors<M, I, S>(mut self, media: M, selectors: I) -> Self
    where
        M: Into<MediaQuery>,
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.selectors.insert(media, selectors);
        self
    }

    /// Builder method to replace all selector groups.
    pub fn with_selector_groups(mut self, groups: SelectorGroups) -> Self {
        self.selectors = groups;
        self
    }

    /// Builder method to set the modifier.
    pub fn with_modifier(mut self, modifier: Modifier) -> Self {
        self.modifier = Some(modifier);
        self
    }

    /// Returns true if this descriptor's modifier equals `modifier`.
    ///
    /// `None` matches only descriptors without a modifier.
    pub fn has_modifier(&self, modifier: Option<&Modifier>) -> bool {
        self.modifier.as_ref() == modifier
    }

    /// Checks the required fields.
    ///
    /// Rendering does not call this; it is meant for configuration code that
    /// wants to reject incomplete descriptors up front.
    pub fn validate(&self) -> Result<(), DynCssError> {
        if self.name.trim().is_empty() {
            return Err(DynCssError::MissingName);
        }
        if self.selectors.is_empty() {
            return Err(DynCssError::MissingSelectors {
                property: self.name.clone(),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_media_query_from_key() {
        assert_eq!(MediaQuery::from_key("noop"), MediaQuery::Noop);
        assert_eq!(
            MediaQuery::from_key("@media print"),
            MediaQuery::Prelude("@media print".to_string())
        );
        // Only the exact key is special.
        assert!(!MediaQuery::from_key("NOOP").is_noop());
        assert_eq!(MediaQuery::Noop.as_key(), "noop");
    }

    #[test]
    fn test_insert_replaces_in_place() {
        let mut groups = SelectorGroups::new();
        groups.insert("noop", [".a"]);
        groups.insert("@media print", [".b"]);
        groups.insert("noop", [".c", ".d"]);

        let keys: Vec<&str> = groups.iter().map(|g| g.media.as_key()).collect();
        assert_eq!(keys, vec!["noop", "@media print"]);
        assert_eq!(groups.get(&MediaQuery::Noop).unwrap().joined(), ".c, .d");
    }

    #[test]
    fn test_extend_appends() {
        let mut groups = SelectorGroups::new();
        groups.extend("noop", [".a"]);
        groups.extend("noop", [".b"]);
        assert_eq!(groups.len(), 1);
        assert_eq!(groups.get(&MediaQuery::Noop).unwrap().joined(), ".a, .b");
    }

    #[test]
    fn test_from_iterator_keeps_order() {
        let groups: SelectorGroups = vec![
            ("@media (min-width: 900px)", vec![".c"]),
            ("noop", vec![".a", ".b"]),
        ]
        .into_iter()
        .collect();

        let keys: Vec<&str> = groups.iter().map(|g| g.media.as_key()).collect();
        assert_eq!(keys, vec!["@media (min-width: 900px)", "noop"]);
    }

    #[test]
    fn test_validate() {
        assert!(matches!(
            CssProperty::new("  ").selectors("noop", [".a"]).validate(),
            Err(DynCssError::MissingName)
        ));
        assert!(matches!(
            CssProperty::new("color").validate(),
            Err(DynCssError::MissingSelectors { property }) if property == "color"
        ));
        // An empty group still counts as declared.
        let no_selectors: Vec<String> = Vec::new();
        let empty_group = CssProperty::new("color").selectors("noop", no_selectors);
        assert!(empty_group.validate().is_ok());
    }

    #[test]
    fn test_has_modifier() {
        let m = Modifier::from_fn(|v| v.to_string());
        let plain = CssProperty::new("color");
        let modified = CssProperty::new("color").with_modifier(m.clone());

        assert!(plain.has_modifier(None));
        assert!(!plain.has_modifier(Some(&m)));
        assert!(modified.has_modifier(Some(&m)));
        assert!(!modified.has_modifier(None));
    }
}
