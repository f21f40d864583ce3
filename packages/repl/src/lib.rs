//! # nestview-repl
//!
//! Command-line front end for browsing nested key-value stores.
//!
//! The store is loaded from a JSON document: objects and arrays become
//! containers, everything else becomes a leaf. Run with a subcommand to
//! print one page and exit, or without one to browse interactively.
//!
//! ## Features
//!
//! - Listing and prefix scans with skip/limit pagination
//! - `cd`/`pwd` navigation with relative paths and `..`
//! - Paging through the last listing with `next` and `prev`
//! - Text or JSON output
//! - Tab completion and highlighting for commands
//! - Vi mode support (detected from EDITOR, .inputrc, or NESTVIEW_EDIT_MODE)
//! - Command history
//!
//! ## Usage
//!
//! ```bash
//! # One page of a container, as JSON
//! nestview --data store.json ls users --limit 10 --json
//!
//! # Keys in users starting with "a"
//! nestview --data store.json scan users a
//!
//! # Interactive
//! nestview --data store.json
//! > ls
//! > cd users
//! > limit 20
//! > scan a
//! > next
//! ```

pub mod cli;
pub mod commands;
pub mod completer;
pub mod context;
pub mod highlighter;
pub mod host;
pub mod io;
pub mod render;
pub mod repl;

pub use context::BrowseContext;
pub use repl::{run, ReplCore};
