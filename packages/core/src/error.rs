//! Error types for browse operations.

use nestview_engine::EngineError;

/// Errors from resolving, listing and scanning.
///
/// Every error is terminal for the request that raised it: no partial page is
/// returned alongside an error.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A container named in a path does not exist at its nesting level.
    ///
    /// `depth` is the zero-based position of `name` in the requested path.
    #[error("container {name:?} not found")]
    NotFound { name: String, depth: usize },

    /// The request is malformed; raised before the store is touched.
    #[error("invalid request: {message}")]
    InvalidRequest { message: String },

    /// The storage engine failed.
    #[error("engine error: {0}")]
    Engine(#[from] EngineError),
}

impl Error {
    /// Check if this is a `NotFound` error.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Error::NotFound { .. })
    }
}
