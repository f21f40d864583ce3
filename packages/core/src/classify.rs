//! Leaf/container classification.
//!
//! The engine does not tag entries with a type. A key with stored bytes is a
//! leaf. A key with no value, or an empty one, may be a nested container or a
//! legitimately empty leaf; only a container lookup can tell them apart, so
//! every such key is probed.

use bytes::Bytes;
use nestview_engine::{Container, KeyValue};

use crate::{Entry, Error, Path};

/// Classifies the raw entries of one container.
pub struct EntryClassifier<'a, 'txn> {
    container: &'a dyn Container<'txn>,
    parent: &'a Path,
}

impl<'a, 'txn> EntryClassifier<'a, 'txn> {
    /// `parent` is the resolved path of `container`; the empty path for the
    /// root namespace.
    pub fn new(container: &'a dyn Container<'txn>, parent: &'a Path) -> Self {
        Self { container, parent }
    }

    /// Turn one cursor entry into a leaf or a container marker.
    pub fn classify(&self, (key, value): KeyValue) -> Result<Entry, Error> {
        let name = decode(&key);
        if let Some(value) = value.as_ref().filter(|v| !v.is_empty()) {
            return Ok(Entry::leaf(name, decode(value)));
        }
        if self.container.container(&key)?.is_some() {
            let path = self.parent.child(key);
            Ok(Entry::container(name, path))
        } else {
            Ok(Entry::leaf(name, String::new()))
        }
    }
}

fn decode(bytes: &Bytes) -> String {
    String::from_utf8_lossy(bytes).into_owned()
}
