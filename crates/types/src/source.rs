use serde::{Deserialize, Serialize};

/// One entry of an `@font-face` `src` descriptor.
///
/// The variants are distinguished by shape when deserializing: an object with
/// a `url` key is [`FontSource::Remote`], an object with a `name` key is
/// [`FontSource::Local`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(untagged)]
pub enum FontSource {
    /// A font file reachable by URL, rendered as `url("...")`.
    Remote {
        url: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        format: Option<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        tech: Option<String>,
    },
    /// A font already installed on the client, rendered as `local("...")`.
    Local { name: String },
}

impl FontSource {
    pub fn local(name: impl Into<String>) -> Self {
        FontSource::Local { name: name.into() }
    }

    pub fn remote(url: impl Into<String>) -> Self {
        FontSource::Remote {
            url: url.into(),
            format: None,
            tech: None,
        }
    }

    /// Sets the `format()` hint. No effect on local sources.
    pub fn with_format(mut self, hint: impl Into<String>) -> Self {
        if let FontSource::Remote { format, .. } = &mut self {
            *format = Some(hint.into());
        }
        self
    }

    /// Sets the `tech()` hint. No effect on local sources.
    pub fn with_tech(mut self, hint: impl Into<String>) -> Self {
        if let FontSource::Remote { tech, .. } = &mut self {
            *tech = Some(hint.into());
        }
        self
    }

    pub fn is_remote(&self) -> bool {
        matches!(self, FontSource::Remote { .. })
    }
}

/// A `src` entry as authored: either string shorthand or a structured source.
///
/// Shorthand strings are normalized into a [`FontSource`] by the renderer.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(untagged)]
pub enum SourceEntry {
    Shorthand(String),
    Source(FontSource),
}

impl From<&str> for SourceEntry {
    fn from(value: &str) -> Self {
        SourceEntry::Shorthand(value.to_string())
    }
}

impl From<String> for SourceEntry {
    fn from(value: String) -> Self {
        SourceEntry::Shorthand(value)
    }
}

impl From<FontSource> for SourceEntry {
    fn from(value: FontSource) -> Self {
        SourceEntry::Source(value)
    }
}

/// Either a single value or an ordered list of values.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(untagged)]
pub enum OneOrMany<T> {
    One(T),
    Many(Vec<T>),
}

impl<T> OneOrMany<T> {
    pub fn as_slice(&self) -> &[T] {
        match self {
            OneOrMany::One(item) => std::slice::from_ref(item),
            OneOrMany::Many(items) => items,
        }
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.as_slice().iter()
    }

    pub fn len(&self) -> usize {
        self.as_slice().len()
    }

    pub fn is_empty(&self) -> bool {
        self.as_slice().is_empty()
    }

    pub fn into_vec(self) -> Vec<T> {
        match self {
            OneOrMany::One(item) => vec![item],
            OneOrMany::Many(items) => items,
        }
    }
}

impl From<SourceEntry> for OneOrMany<SourceEntry> {
    fn from(value: SourceEntry) -> Self {
        OneOrMany::One(value)
    }
}

impl From<FontSource> for OneOrMany<SourceEntry> {
    fn from(value: FontSource) -> Self {
        OneOrMany::One(SourceEntry::Source(value))
    }
}

impl From<&str> for OneOrMany<SourceEntry> {
    fn from(value: &str) -> Self {
        OneOrMany::One(SourceEntry::from(value))
    }
}

impl From<String> for OneOrMany<SourceEntry> {
    fn from(value: String) -> Self {
        OneOrMany::One(SourceEntry::from(value))
    }
}

impl<T> From<Vec<T>> for OneOrMany<T> {
    fn from(value: Vec<T>) -> Self {
        OneOrMany::Many(value)
    }
}

impl<'a, T> IntoIterator for &'a OneOrMany<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
