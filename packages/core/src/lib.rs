//! nestview-core: browsing a nested key-value store
//!
//! This layer gives structure to the raw cursors of `nestview-engine`:
//! - `Path`: ordered container names from the root namespace
//! - `Entry`: a leaf value or a nested-container marker
//! - `Page`: an ordered slice of entries for one request
//! - `PageRequest`: skip/limit pagination, `limit == 0` meaning unbounded
//!
//! and three read-only operations: [`list_root`], [`list_container`] and
//! [`scan_prefix`]. Each is assembled from the same stages: [`resolve`] finds
//! the target container, [`CursorScan`] and [`paginate`] select the window of
//! entries, and [`EntryClassifier`] labels what is found.
//!
//! # Example
//!
//! ```rust
//! use nestview_core::{path, Browser, PageRequest};
//! use nestview_core::nestview_engine::{MemoryBucket, MemoryEngine};
//!
//! let browser = Browser::new(MemoryEngine::new(
//!     MemoryBucket::new().with_bucket(
//!         "c",
//!         MemoryBucket::new()
//!             .with_value("a1", "x")
//!             .with_value("a2", "y")
//!             .with_value("b1", "z"),
//!     ),
//! ));
//!
//! let page = browser.scan_prefix(&path!("c"), b"a", PageRequest::default()).unwrap();
//! assert_eq!(page.keys(), vec!["a1", "a2"]);
//! ```

pub use nestview_engine;

mod browse;
mod classify;
mod entry;
mod error;
mod path;
mod request;
mod resolve;
mod scan;

pub use browse::{list_container, list_root, scan_prefix, Browser};
pub use classify::EntryClassifier;
pub use entry::{Entry, EntryKind, Page};
pub use error::Error;
pub use path::{escape_name, split_names, Path};
pub use request::{PageRequest, DEFAULT_LIMIT, DEFAULT_SKIP};
pub use resolve::resolve;
pub use scan::{paginate, CursorScan, Paginate};
