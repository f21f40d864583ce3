//! Core traits for the engine layer.

use std::sync::Arc;

use bytes::Bytes;

use crate::EngineError;

/// A key and its stored value as yielded by a [`Cursor`].
///
/// A `None` value is the engine's container marker: the key names a nested
/// container rather than stored bytes. A `Some` value may be empty. Callers
/// that need to know whether a nested container really exists must ask the
/// owning [`Container`]; the marker alone is only a hint.
pub type KeyValue = (Bytes, Option<Bytes>);

/// Ordered, forward-only cursor over the entries of one container.
///
/// Keys are visited in ascending byte-lexicographic order. The order is stable
/// for the lifetime of the transaction that produced the cursor.
pub trait Cursor {
    /// Position at the first entry.
    ///
    /// Returns `Ok(None)` if the container is empty.
    fn first(&mut self) -> Result<Option<KeyValue>, EngineError>;

    /// Advance to the next entry.
    ///
    /// On an unpositioned cursor this behaves like [`Cursor::first`]. Once the
    /// cursor has run off the end it keeps returning `Ok(None)`.
    fn next(&mut self) -> Result<Option<KeyValue>, EngineError>;

    /// Position at the first entry whose key is greater than or equal to `key`.
    fn seek(&mut self, key: &[u8]) -> Result<Option<KeyValue>, EngineError>;
}

/// A handle on one container (the root namespace or a nested container).
///
/// Handles are bound to the transaction lifetime `'txn`, not to the handle
/// they were obtained from, so a lookup chain can drop each parent as soon as
/// the child is resolved.
///
/// # Object Safety
///
/// This trait is object-safe: engines hand out `Box<dyn Container<'txn>>`.
pub trait Container<'txn> {
    /// Look up a container nested directly inside this one.
    ///
    /// # Returns
    ///
    /// * `Ok(None)` - No container with that name exists here. A leaf value
    ///   stored under `name` is not a container.
    /// * `Ok(Some(handle))` - The nested container.
    /// * `Err(EngineError)` - The engine failed.
    fn container(&self, name: &[u8])
        -> Result<Option<Box<dyn Container<'txn> + 'txn>>, EngineError>;

    /// Open a cursor over this container's entries.
    fn cursor(&self) -> Result<Box<dyn Cursor + 'txn>, EngineError>;
}

/// A read-only, snapshot-consistent transaction.
///
/// Everything observed through one transaction reflects a single point in
/// time. Dropping the transaction releases the snapshot.
pub trait ReadTxn {
    /// The root namespace of the store.
    fn root(&self) -> Box<dyn Container<'_> + '_>;
}

/// A storage engine that can open read transactions.
///
/// Engines are opened once and shared; implementations for `&T`, `Box<T>` and
/// `Arc<T>` delegate so a single handle can be injected wherever it is needed.
pub trait Engine: Send + Sync {
    /// Open a read-only transaction.
    fn begin_read(&self) -> Result<Box<dyn ReadTxn + '_>, EngineError>;
}

// Blanket implementations for references, boxes and shared handles

impl<T: Cursor + ?Sized> Cursor for &mut T {
    fn first(&mut self) -> Result<Option<KeyValue>, EngineError> {
        (**self).first()
    }

    fn next(&mut self) -> Result<Option<KeyValue>, EngineError> {
        (**self).next()
    }

    fn seek(&mut self, key: &[u8]) -> Result<Option<KeyValue>, EngineError> {
        (**self).seek(key)
    }
}

impl<T: Cursor + ?Sized> Cursor for Box<T> {
    fn first(&mut self) -> Result<Option<KeyValue>, EngineError> {
        self.as_mut().first()
    }

    fn next(&mut self) -> Result<Option<KeyValue>, EngineError> {
        self.as_mut().next()
    }

    fn seek(&mut self, key: &[u8]) -> Result<Option<KeyValue>, EngineError> {
        self.as_mut().seek(key)
    }
}

impl<T: Engine + ?Sized> Engine for &T {
    fn begin_read(&self) -> Result<Box<dyn ReadTxn + '_>, EngineError> {
        (**self).begin_read()
    }
}

impl<T: Engine + ?Sized> Engine for Box<T> {
    fn begin_read(&self) -> Result<Box<dyn ReadTxn + '_>, EngineError> {
        self.as_ref().begin_read()
    }
}

impl<T: Engine + ?Sized> Engine for Arc<T> {
    fn begin_read(&self) -> Result<Box<dyn ReadTxn + '_>, EngineError> {
        self.as_ref().begin_read()
    }
}
