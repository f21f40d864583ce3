//! In-memory engine built on ordered maps.
//!
//! Buckets are `BTreeMap<Bytes, _>` trees, so iteration is byte-lexicographic.
//! The engine keeps its current root behind an `Arc`; a read transaction holds
//! a clone of that `Arc` and therefore sees a frozen snapshot no matter what
//! happens to the engine afterwards.

use std::collections::BTreeMap;
use std::ops::Bound;
use std::sync::{Arc, PoisonError, RwLock};

use bytes::Bytes;

use crate::{Container, Cursor, Engine, EngineError, KeyValue, ReadTxn};

/// An ordered container of values and nested buckets.
///
/// # Example
///
/// ```rust
/// use nestview_engine::MemoryBucket;
///
/// let users = MemoryBucket::new()
///     .with_value("alice", "1")
///     .with_bucket("archived", MemoryBucket::new());
///
/// assert_eq!(users.len(), 2);
/// assert_eq!(users.get(b"alice").map(|v| v.as_ref()), Some(&b"1"[..]));
/// assert!(users.bucket(b"archived").is_some());
/// assert!(users.bucket(b"alice").is_none());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryBucket {
    entries: BTreeMap<Bytes, Slot>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Slot {
    Value(Bytes),
    Bucket(MemoryBucket),
}

impl Slot {
    /// The value half of a cursor entry: nested buckets carry no value.
    fn stored_value(&self) -> Option<Bytes> {
        match self {
            Slot::Value(value) => Some(value.clone()),
            Slot::Bucket(_) => None,
        }
    }
}

impl MemoryBucket {
    /// Create an empty bucket.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder form of [`MemoryBucket::insert_value`].
    #[must_use]
    pub fn with_value(mut self, key: impl Into<Bytes>, value: impl Into<Bytes>) -> Self {
        self.insert_value(key, value);
        self
    }

    /// Builder form of [`MemoryBucket::insert_bucket`].
    #[must_use]
    pub fn with_bucket(mut self, name: impl Into<Bytes>, bucket: MemoryBucket) -> Self {
        self.insert_bucket(name, bucket);
        self
    }

    /// Store a value, replacing whatever was at `key`.
    pub fn insert_value(&mut self, key: impl Into<Bytes>, value: impl Into<Bytes>) {
        self.entries.insert(key.into(), Slot::Value(value.into()));
    }

    /// Store a nested bucket, replacing whatever was at `name`.
    pub fn insert_bucket(&mut self, name: impl Into<Bytes>, bucket: MemoryBucket) {
        self.entries.insert(name.into(), Slot::Bucket(bucket));
    }

    /// The value stored at `key`, if `key` holds a value.
    pub fn get(&self, key: &[u8]) -> Option<&Bytes> {
        match self.entries.get(key) {
            Some(Slot::Value(value)) => Some(value),
            _ => None,
        }
    }

    /// The bucket nested at `name`, if `name` holds a bucket.
    pub fn bucket(&self, name: &[u8]) -> Option<&MemoryBucket> {
        match self.entries.get(name) {
            Some(Slot::Bucket(bucket)) => Some(bucket),
            _ => None,
        }
    }

    /// Number of entries (values and buckets) directly in this bucket.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if this bucket has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// An engine that keeps the whole store in memory.
///
/// The engine is read-only from the point of view of transactions. The only
/// mutation is [`MemoryEngine::replace`], which swaps in a new root for
/// transactions opened afterwards.
#[derive(Debug, Default)]
pub struct MemoryEngine {
    root: RwLock<Arc<MemoryBucket>>,
}

impl MemoryEngine {
    /// Create an engine whose root namespace is `root`.
    pub fn new(root: MemoryBucket) -> Self {
        Self {
            root: RwLock::new(Arc::new(root)),
        }
    }

    /// Swap in a new root. Open transactions keep their snapshot.
    pub fn replace(&self, root: MemoryBucket) {
        let mut current = self.root.write().unwrap_or_else(PoisonError::into_inner);
        *current = Arc::new(root);
    }

    /// The current root.
    pub fn snapshot(&self) -> Arc<MemoryBucket> {
        let current = self.root.read().unwrap_or_else(PoisonError::into_inner);
        Arc::clone(&current)
    }
}

impl Engine for MemoryEngine {
    fn begin_read(&self) -> Result<Box<dyn ReadTxn + '_>, EngineError> {
        let snapshot = self.snapshot();
        tracing::trace!(top_level = snapshot.len(), "opened read transaction");
        Ok(Box::new(MemoryTxn { snapshot }))
    }
}

struct MemoryTxn {
    snapshot: Arc<MemoryBucket>,
}

impl ReadTxn for MemoryTxn {
    fn root(&self) -> Box<dyn Container<'_> + '_> {
        Box::new(MemoryContainer {
            bucket: self.snapshot.as_ref(),
        })
    }
}

struct MemoryContainer<'txn> {
    bucket: &'txn MemoryBucket,
}

impl<'txn> Container<'txn> for MemoryContainer<'txn> {
    fn container(
        &self,
        name: &[u8],
    ) -> Result<Option<Box<dyn Container<'txn> + 'txn>>, EngineError> {
        Ok(self.bucket.bucket(name).map(|bucket| {
            Box::new(MemoryContainer { bucket }) as Box<dyn Container<'txn> + 'txn>
        }))
    }

    fn cursor(&self) -> Result<Box<dyn Cursor + 'txn>, EngineError> {
        Ok(Box::new(MemoryCursor {
            entries: &self.bucket.entries,
            state: CursorState::Unpositioned,
        }))
    }
}

enum CursorState {
    Unpositioned,
    At(Bytes),
    Exhausted,
}

struct MemoryCursor<'txn> {
    entries: &'txn BTreeMap<Bytes, Slot>,
    state: CursorState,
}

impl<'txn> MemoryCursor<'txn> {
    fn land(&mut self, found: Option<(&'txn Bytes, &'txn Slot)>) -> Option<KeyValue> {
        match found {
            Some((key, slot)) => {
                self.state = CursorState::At(key.clone());
                Some((key.clone(), slot.stored_value()))
            }
            None => {
                self.state = CursorState::Exhausted;
                None
            }
        }
    }
}

impl Cursor for MemoryCursor<'_> {
    fn first(&mut self) -> Result<Option<KeyValue>, EngineError> {
        let entries = self.entries;
        Ok(self.land(entries.iter().next()))
    }

    fn next(&mut self) -> Result<Option<KeyValue>, EngineError> {
        let current = match &self.state {
            CursorState::Unpositioned => return self.first(),
            CursorState::Exhausted => return Ok(None),
            CursorState::At(key) => key.clone(),
        };
        let entries = self.entries;
        let found = entries
            .range::<[u8], _>((Bound::Excluded(current.as_ref()), Bound::Unbounded))
            .next();
        Ok(self.land(found))
    }

    fn seek(&mut self, key: &[u8]) -> Result<Option<KeyValue>, EngineError> {
        let entries = self.entries;
        let found = entries
            .range::<[u8], _>((Bound::Included(key), Bound::Unbounded))
            .next();
        Ok(self.land(found))
    }
}
