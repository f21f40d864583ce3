//! nestview-engine: the storage layer underneath nestview.
//!
//! This is the narrow waist of the nestview stack. Everything at this level is
//! pure bytes - keys and values are opaque, containers are found by raw name,
//! and ordering is the natural byte-lexicographic order of keys.
//!
//! An engine provides:
//! - Snapshot-consistent read-only transactions (`Engine::begin_read`)
//! - A root namespace holding top-level containers (`ReadTxn::root`)
//! - Nested container lookup by name (`Container::container`)
//! - An ordered cursor per container with `first`, `next` and `seek`
//!
//! [`MemoryEngine`] is an in-memory implementation backed by ordered maps. It
//! can be built programmatically or loaded from a JSON document.
//!
//! # Example
//!
//! ```rust
//! use nestview_engine::{Engine, EngineError, MemoryBucket, MemoryEngine};
//!
//! fn first_user(engine: &dyn Engine) -> Result<Option<Vec<u8>>, EngineError> {
//!     let txn = engine.begin_read()?;
//!     let root = txn.root();
//!     let Some(users) = root.container(b"users")? else {
//!         return Ok(None);
//!     };
//!     let mut cursor = users.cursor()?;
//!     Ok(cursor.first()?.map(|(key, _)| key.to_vec()))
//! }
//!
//! let engine = MemoryEngine::new(
//!     MemoryBucket::new().with_bucket("users", MemoryBucket::new().with_value("alice", "1")),
//! );
//! assert_eq!(first_user(&engine).unwrap(), Some(b"alice".to_vec()));
//! ```

pub use bytes::Bytes;

mod error;
mod fixture;
mod memory;
mod traits;

pub use error::EngineError;
pub use memory::{MemoryBucket, MemoryEngine};
pub use traits::{Container, Cursor, Engine, KeyValue, ReadTxn};
