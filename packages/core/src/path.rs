//! Container paths.

use std::borrow::Cow;
use std::fmt;

use bytes::Bytes;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// An ordered sequence of container names, starting at the store root.
///
/// The empty path denotes the root namespace itself. Names are the raw key
/// bytes the engine stores, so a path built from a listed container marker
/// resolves back to that container even when its name is not UTF-8. There
/// is no identifier validation.
///
/// Serializes as a JSON array of names; names that are not UTF-8 are
/// decoded lossily.
#[derive(Clone, Debug, Default, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct Path {
    pub components: Vec<Bytes>,
}

impl Path {
    /// The root namespace.
    pub fn root() -> Self {
        Self::default()
    }

    /// Parse a `/`-separated path string.
    ///
    /// Empty components are ignored, so `//`, leading and trailing slashes
    /// all normalize away. A backslash escapes the next character, which is
    /// how a name containing `/` is written: `a\/b` is the single name `a/b`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use nestview_core::Path;
    ///
    /// let path = Path::parse("users/2024/archived");
    /// assert_eq!(path.len(), 3);
    ///
    /// assert_eq!(Path::parse("/users/"), Path::parse("users"));
    /// assert!(Path::parse("/").is_empty());
    /// assert_eq!(Path::parse(r"logs/2024\/01").len(), 2);
    /// ```
    pub fn parse(s: &str) -> Self {
        Path {
            components: split_names(s)
                .into_iter()
                .filter(|c| !c.is_empty())
                .map(Bytes::from)
                .collect(),
        }
    }

    /// Create a path from its names, taken verbatim.
    pub fn from_components<I, S>(components: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<Bytes>,
    {
        Path {
            components: components.into_iter().map(Into::into).collect(),
        }
    }

    /// Check if this path is empty (root path).
    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }

    /// Get the number of components.
    pub fn len(&self) -> usize {
        self.components.len()
    }

    /// Iterate over components.
    pub fn iter(&self) -> impl Iterator<Item = &Bytes> {
        self.components.iter()
    }

    /// The last component, if any.
    pub fn last(&self) -> Option<&[u8]> {
        self.components.last().map(Bytes::as_ref)
    }

    /// Append a name in place.
    pub fn push(&mut self, name: impl Into<Bytes>) {
        self.components.push(name.into());
    }

    /// This path with one more name appended.
    #[must_use]
    pub fn child(&self, name: impl Into<Bytes>) -> Path {
        let mut child = self.clone();
        child.push(name);
        child
    }

    /// This path without its last name. The root is its own parent.
    #[must_use]
    pub fn parent(&self) -> Path {
        let mut components = self.components.clone();
        components.pop();
        Path { components }
    }

    /// Join this path with another.
    #[must_use]
    pub fn join(&self, other: &Path) -> Path {
        let mut components = self.components.clone();
        components.extend(other.components.iter().cloned());
        Path { components }
    }
}

/// Split `/`-separated input into unescaped names, keeping empty ones.
///
/// `\x` stands for `x`; a trailing lone backslash is kept as is.
pub fn split_names(s: &str) -> Vec<String> {
    let mut names = vec![String::new()];
    let mut chars = s.chars();
    while let Some(c) = chars.next() {
        match c {
            '\\' => {
                let escaped = chars.next().unwrap_or('\\');
                if let Some(name) = names.last_mut() {
                    name.push(escaped);
                }
            }
            '/' => names.push(String::new()),
            c => {
                if let Some(name) = names.last_mut() {
                    name.push(c);
                }
            }
        }
    }
    names
}

/// Write `name` so that [`Path::parse`] reads it back as one name.
///
/// ```rust
/// use nestview_core::escape_name;
///
/// assert_eq!(escape_name("plain"), "plain");
/// assert_eq!(escape_name("a/b"), r"a\/b");
/// ```
pub fn escape_name(name: &str) -> Cow<'_, str> {
    if !name.contains(['/', '\\']) {
        return Cow::Borrowed(name);
    }
    let mut out = String::with_capacity(name.len() + 2);
    for c in name.chars() {
        if matches!(c, '/' | '\\') {
            out.push('\\');
        }
        out.push(c);
    }
    Cow::Owned(out)
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, name) in self.components.iter().enumerate() {
            if i > 0 {
                f.write_str("/")?;
            }
            f.write_str(&escape_name(&String::from_utf8_lossy(name)))?;
        }
        Ok(())
    }
}

impl Serialize for Path {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.components.iter().map(|c| String::from_utf8_lossy(c)))
    }
}

impl<'de> Deserialize<'de> for Path {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Vec::<String>::deserialize(deserializer).map(Path::from_components)
    }
}

impl std::ops::Index<usize> for Path {
    type Output = Bytes;

    fn index(&self, i: usize) -> &Self::Output {
        &self.components[i]
    }
}

impl<S: Into<Bytes>> FromIterator<S> for Path {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Path::from_components(iter)
    }
}

/// Macro for creating paths from a `/`-separated literal.
///
/// # Example
///
/// ```rust
/// use nestview_core::path;
///
/// let p = path!("users/archived");
/// assert_eq!(p.len(), 2);
/// ```
#[macro_export]
macro_rules! path {
    ($s:expr) => {
        $crate::Path::parse($s)
    };
}
