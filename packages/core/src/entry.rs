//! Page entries.

use serde::{Deserialize, Serialize};

use crate::Path;

/// One element of a page: a key and what it holds.
///
/// An entry is either a leaf (it has a value) or a container marker (it has
/// the path of the nested container). The two cases are variants of
/// [`EntryKind`], so an entry can never be both.
///
/// Serializes as `{"key": .., "value": ..}` for leaves and
/// `{"key": .., "containerPath": [..]}` for containers.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    /// The raw key decoded as text.
    pub key: String,
    #[serde(flatten)]
    pub kind: EntryKind,
}

/// Whether an entry is a leaf value or a nested container.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum EntryKind {
    /// A stored value, decoded as text. May be empty.
    Leaf { value: String },
    /// A nested container; `path` is the parent's path plus this key.
    Container {
        #[serde(rename = "containerPath")]
        path: Path,
    },
}

impl Entry {
    /// A leaf entry.
    pub fn leaf(key: impl Into<String>, value: impl Into<String>) -> Self {
        Entry {
            key: key.into(),
            kind: EntryKind::Leaf {
                value: value.into(),
            },
        }
    }

    /// A container marker.
    pub fn container(key: impl Into<String>, path: Path) -> Self {
        Entry {
            key: key.into(),
            kind: EntryKind::Container { path },
        }
    }

    /// Check if this entry marks a nested container.
    pub fn is_container(&self) -> bool {
        matches!(self.kind, EntryKind::Container { .. })
    }

    /// The value of a leaf entry.
    pub fn value(&self) -> Option<&str> {
        match &self.kind {
            EntryKind::Leaf { value } => Some(value),
            EntryKind::Container { .. } => None,
        }
    }

    /// The path of a container entry.
    pub fn container_path(&self) -> Option<&Path> {
        match &self.kind {
            EntryKind::Leaf { .. } => None,
            EntryKind::Container { path } => Some(path),
        }
    }
}

/// An ordered slice of entries returned for one request.
///
/// Serializes as a JSON array of entries.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Page {
    entries: Vec<Entry>,
}

impl Page {
    pub fn new(entries: Vec<Entry>) -> Self {
        Page { entries }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Entry> {
        self.entries.iter()
    }

    pub fn into_entries(self) -> Vec<Entry> {
        self.entries
    }

    /// The keys of every entry, in page order.
    pub fn keys(&self) -> Vec<&str> {
        self.entries.iter().map(|e| e.key.as_str()).collect()
    }
}

impl FromIterator<Entry> for Page {
    fn from_iter<I: IntoIterator<Item = Entry>>(iter: I) -> Self {
        Page {
            entries: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for Page {
    type Item = Entry;
    type IntoIter = std::vec::IntoIter<Entry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl<'a> IntoIterator for &'a Page {
    type Item = &'a Entry;
    type IntoIter = std::slice::Iter<'a, Entry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
