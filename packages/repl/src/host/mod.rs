//! Host implementations for the REPL.
//!
//! The terminal host uses Reedline for interactive terminal I/O.

pub mod terminal;

pub use terminal::{EditModePreference, TerminalHost};
