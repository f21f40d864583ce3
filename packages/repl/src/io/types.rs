//! Messages exchanged between the REPL core and its host.
//!
//! All of them are plain serializable data, so a host may queue, log or
//! forward them without knowing anything about the store being browsed.

use serde::{Deserialize, Serialize};

/// A line typed by the user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputLine {
    pub line: String,
}

/// Ctrl+C or Ctrl+D, as reported by the host.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "signal", rename_all = "lowercase")]
pub enum Signal {
    Interrupt,
    Eof,
}

/// One block of text for the host to show.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Output {
    pub text: String,
    #[serde(default)]
    pub style: OutputStyle,
}

impl Output {
    fn styled(text: impl Into<String>, style: OutputStyle) -> Self {
        Self {
            text: text.into(),
            style,
        }
    }

    /// Command output; may already carry ANSI colors.
    pub fn normal(text: impl Into<String>) -> Self {
        Self::styled(text, OutputStyle::Normal)
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self::styled(text, OutputStyle::Error)
    }

    pub fn info(text: impl Into<String>) -> Self {
        Self::styled(text, OutputStyle::Info)
    }

    pub fn banner(text: impl Into<String>) -> Self {
        Self::styled(text, OutputStyle::Banner)
    }
}

/// How the host should present an [`Output`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputStyle {
    #[default]
    Normal,
    /// Host prefixes it with a red `Error:`.
    Error,
    Info,
    Banner,
}

/// What the prompt should show before the next line is read.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PromptConfig {
    /// Current container, formatted with a leading `/`.
    pub current_path: String,
    pub skip: usize,
    /// Page size; 0 means no limit.
    pub limit: usize,
}

/// Why [`ReplCore::run`](crate::repl::ReplCore::run) returned.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExitReason {
    /// `exit` or `quit`.
    UserExit,
    /// Ctrl+D.
    Eof,
}
