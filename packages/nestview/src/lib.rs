//! nestview: read-only browsing of nested, ordered key-value stores.
//!
//! A store is a root namespace of named containers, each holding ordered
//! entries that are either leaf values or further containers. nestview lists
//! those entries a page at a time and scans them by key prefix, always inside
//! one snapshot-consistent read transaction.
//!
//! This crate re-exports the two layers:
//! - [`engine`]: the storage contract (transactions, containers, cursors) and
//!   an in-memory engine that can be loaded from JSON
//! - the browse layer at the crate root: [`Browser`], [`Path`], [`Entry`],
//!   [`Page`], [`PageRequest`] and the resolve/scan/classify stages
//!
//! # Example
//!
//! ```rust
//! use nestview::engine::MemoryEngine;
//! use nestview::{path, Browser, PageRequest};
//!
//! let engine = MemoryEngine::from_json(&serde_json::json!({
//!     "users": {"alice": "1", "bob": "2"},
//!     "logs": {}
//! }))
//! .unwrap();
//! let browser = Browser::new(engine);
//!
//! let root = browser.list_root(PageRequest::default()).unwrap();
//! assert!(root.iter().all(|entry| entry.is_container()));
//!
//! let users = browser.list_container(&path!("users"), PageRequest::new(1, 1)).unwrap();
//! assert_eq!(users.keys(), vec!["bob"]);
//! ```

pub use nestview_core::*;

/// The storage engine layer.
pub mod engine {
    pub use nestview_engine::*;
}
