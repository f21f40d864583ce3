//! I/O abstraction for the REPL.
//!
//! The REPL core never touches the terminal directly. It talks to an
//! [`IoHost`], which the terminal host implements with reedline and the test
//! host implements with in-memory queues.

pub mod types;

#[cfg(test)]
pub mod test_host;

pub use types::*;

#[cfg(test)]
pub use test_host::TestHost;

/// Error type for I/O operations.
#[derive(Debug, thiserror::Error)]
pub enum IoError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Host interface for REPL I/O operations.
pub trait IoHost {
    /// Block until the user has entered a line or sent a signal.
    ///
    /// Afterwards exactly one of `read_input()` and `read_signal()` returns
    /// `Some`.
    fn wait_for_input(&mut self) -> Result<(), IoError>;

    /// Take the pending input line, if any.
    fn read_input(&mut self) -> Result<Option<InputLine>, IoError>;

    /// Take the pending signal (Ctrl+C, Ctrl+D), if any.
    fn read_signal(&mut self) -> Result<Option<Signal>, IoError>;

    /// Show output to the user.
    fn write_output(&mut self, output: Output) -> Result<(), IoError>;

    /// Set the prompt shown before the next input.
    fn write_prompt(&mut self, config: PromptConfig) -> Result<(), IoError>;

    /// Flush any buffered output.
    fn flush(&mut self) -> Result<(), IoError> {
        Ok(())
    }
}
