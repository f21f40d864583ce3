use reedline::{Completer, Span, Suggestion};

use crate::commands::COMMANDS;

/// Completes command names at the start of the line.
pub struct ReplCompleter {
    commands: Vec<(&'static str, &'static str)>,
}

impl ReplCompleter {
    pub fn new() -> Self {
        Self {
            commands: COMMANDS
                .iter()
                .map(|(name, _, description)| (*name, *description))
                .collect(),
        }
    }
}

impl Default for ReplCompleter {
    fn default() -> Self {
        Self::new()
    }
}

impl Completer for ReplCompleter {
    fn complete(&mut self, line: &str, pos: usize) -> Vec<Suggestion> {
        let line_to_pos = &line[..pos];
        let start = line_to_pos.len() - line_to_pos.trim_start().len();
        let word = &line_to_pos[start..];

        // Only the command word is completed.
        if word.contains(char::is_whitespace) {
            return Vec::new();
        }

        self.commands
            .iter()
            .filter(|(name, _)| name.starts_with(word))
            .map(|(name, description)| Suggestion {
                value: name.to_string(),
                description: Some(description.to_string()),
                style: None,
                extra: None,
                span: Span::new(start, pos),
                append_whitespace: true,
                match_indices: None,
            })
            .collect()
    }
}
