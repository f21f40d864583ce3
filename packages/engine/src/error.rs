//! Error types for the engine layer.
//!
//! Errors at this level are storage-focused. No semantic errors like
//! "container not found" - a missing container is `Ok(None)`, and the layers
//! above decide whether that is a failure.

/// Errors raised by a storage engine.
#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    /// Generic I/O or transport failure from a third-party engine.
    #[error("transport error: {0}")]
    Transport(Box<dyn std::error::Error + Send + Sync>),

    /// Reading a backing file failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A JSON fixture could not be parsed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// A JSON fixture parsed but does not describe a valid store.
    #[error("invalid fixture: {message}")]
    Fixture { message: String },
}

impl EngineError {
    pub(crate) fn fixture(message: impl Into<String>) -> Self {
        EngineError::Fixture {
            message: message.into(),
        }
    }
}
