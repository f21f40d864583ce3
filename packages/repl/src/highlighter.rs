use nu_ansi_term::{Color, Style};
use reedline::{Highlighter, StyledText};

use crate::commands;

/// Colors the command word, and path arguments of commands that take one.
pub struct ReplHighlighter;

impl Highlighter for ReplHighlighter {
    fn highlight(&self, line: &str, _cursor: usize) -> StyledText {
        let mut styled = StyledText::new();
        if line.is_empty() {
            return styled;
        }

        let lead = line.len() - line.trim_start().len();
        let (command, rest) = match line[lead..].find(char::is_whitespace) {
            Some(pos) => line.split_at(lead + pos),
            None => (line, ""),
        };

        let word = command.trim_start();
        let cmd_style = if commands::is_command(word) {
            Style::new().bold().fg(Color::Cyan)
        } else {
            Style::new().fg(Color::Red)
        };
        styled.push((cmd_style, command.to_string()));

        if !rest.is_empty() {
            let arg_style = match word.to_lowercase().as_str() {
                "ls" | "list" | "cd" | "scan" => Style::new().fg(Color::Yellow),
                _ => Style::new(),
            };
            styled.push((arg_style, rest.to_string()));
        }
        styled
    }
}
