//! Terminal host implementation using Reedline.
//!
//! This host provides interactive terminal I/O with:
//! - Readline-style line editing (Vi and Emacs modes)
//! - Tab completion of command names
//! - Command highlighting
//! - Command history

use std::borrow::Cow;
use std::io::{self, Write};
use std::path::PathBuf;

use nu_ansi_term::{Color, Style};
use reedline::{
    default_emacs_keybindings, default_vi_insert_keybindings, default_vi_normal_keybindings,
    ColumnarMenu, DefaultHinter, EditCommand, EditMode, Emacs, FileBackedHistory, KeyCode,
    KeyModifiers, Keybindings, MenuBuilder, Prompt, PromptEditMode, PromptHistorySearch,
    PromptHistorySearchStatus, Reedline, ReedlineEvent, ReedlineMenu, Signal as ReedlineSignal, Vi,
};

use crate::completer::ReplCompleter;
use crate::highlighter::ReplHighlighter;
use crate::io::{InputLine, IoError, IoHost, Output, OutputStyle, PromptConfig, Signal};

const HISTORY_SIZE: usize = 1000;

/// Which line-editing mode to use.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum EditModePreference {
    /// Decide from `EDITOR`, `VISUAL`, `.inputrc` and `NESTVIEW_EDIT_MODE`.
    #[default]
    Detect,
    Vi,
    Emacs,
}

impl EditModePreference {
    fn use_vi(self) -> bool {
        match self {
            EditModePreference::Detect => should_use_vi_mode(),
            EditModePreference::Vi => true,
            EditModePreference::Emacs => false,
        }
    }
}

/// Terminal host using Reedline for interactive I/O.
pub struct TerminalHost {
    line_editor: Reedline,
    pending_input: Option<InputLine>,
    pending_signal: Option<Signal>,
    current_prompt: PromptConfig,
}

impl TerminalHost {
    pub fn new(edit_mode: EditModePreference) -> io::Result<Self> {
        let hinter = Box::new(
            DefaultHinter::default().with_style(Style::new().fg(Color::LightGray).dimmed()),
        );
        let completion_menu = Box::new(
            ColumnarMenu::default()
                .with_name("completion_menu")
                .with_text_style(Style::new().fg(Color::Cyan))
                .with_selected_text_style(Style::new().fg(Color::Black).on(Color::Cyan).bold()),
        );

        let edit_mode: Box<dyn EditMode> = if edit_mode.use_vi() {
            let mut insert_keybindings = default_vi_insert_keybindings();
            bind_tab_completion(&mut insert_keybindings);
            Box::new(Vi::new(insert_keybindings, default_vi_normal_keybindings()))
        } else {
            let mut keybindings = default_emacs_keybindings();
            bind_tab_completion(&mut keybindings);
            keybindings.add_binding(
                KeyModifiers::CONTROL,
                KeyCode::Char('d'),
                ReedlineEvent::Edit(vec![EditCommand::Clear]),
            );
            Box::new(Emacs::new(keybindings))
        };

        let mut line_editor = Reedline::create()
            .with_completer(Box::new(ReplCompleter::new()))
            .with_highlighter(Box::new(ReplHighlighter))
            .with_hinter(hinter)
            .with_menu(ReedlineMenu::EngineCompleter(completion_menu))
            .with_edit_mode(edit_mode);

        if let Some(history_path) = history_path() {
            if let Some(parent) = history_path.parent() {
                if let Err(e) = std::fs::create_dir_all(parent) {
                    tracing::warn!(path = %parent.display(), error = %e, "cannot create history directory");
                }
            }
            match FileBackedHistory::with_file(HISTORY_SIZE, history_path.clone()) {
                Ok(history) => line_editor = line_editor.with_history(Box::new(history)),
                Err(e) => {
                    tracing::warn!(path = %history_path.display(), error = %e, "history disabled")
                }
            }
        }

        Ok(Self {
            line_editor,
            pending_input: None,
            pending_signal: None,
            current_prompt: PromptConfig::default(),
        })
    }
}

fn bind_tab_completion(keybindings: &mut Keybindings) {
    keybindings.add_binding(
        KeyModifiers::NONE,
        KeyCode::Tab,
        ReedlineEvent::UntilFound(vec![
            ReedlineEvent::Menu("completion_menu".to_string()),
            ReedlineEvent::MenuNext,
        ]),
    );
}

impl IoHost for TerminalHost {
    fn wait_for_input(&mut self) -> Result<(), IoError> {
        let prompt = TerminalPrompt(&self.current_prompt);

        match self.line_editor.read_line(&prompt)? {
            ReedlineSignal::Success(line) => self.pending_input = Some(InputLine { line }),
            ReedlineSignal::CtrlC => self.pending_signal = Some(Signal::Interrupt),
            ReedlineSignal::CtrlD => self.pending_signal = Some(Signal::Eof),
        }
        Ok(())
    }

    fn read_input(&mut self) -> Result<Option<InputLine>, IoError> {
        Ok(self.pending_input.take())
    }

    fn read_signal(&mut self) -> Result<Option<Signal>, IoError> {
        Ok(self.pending_signal.take())
    }

    fn write_output(&mut self, output: Output) -> Result<(), IoError> {
        let styled = match output.style {
            OutputStyle::Normal => output.text,
            OutputStyle::Error => {
                format!("{} {}", Color::Red.bold().paint("Error:"), output.text)
            }
            OutputStyle::Info | OutputStyle::Banner => Color::Cyan.paint(&output.text).to_string(),
        };
        println!("{}", styled);
        Ok(())
    }

    fn write_prompt(&mut self, config: PromptConfig) -> Result<(), IoError> {
        self.current_prompt = config;
        Ok(())
    }

    fn flush(&mut self) -> Result<(), IoError> {
        io::stdout().flush()?;
        Ok(())
    }
}

/// Prompt rendering `nestview /path [skip+limit]`.
struct TerminalPrompt<'a>(&'a PromptConfig);

impl Prompt for TerminalPrompt<'_> {
    fn render_prompt_left(&self) -> Cow<'_, str> {
        let page = if self.0.limit == 0 {
            format!("[{}+all]", self.0.skip)
        } else {
            format!("[{}+{}]", self.0.skip, self.0.limit)
        };
        Cow::Owned(format!(
            "{} {} {}",
            Color::Blue.bold().paint("nestview"),
            Color::Yellow.paint(&self.0.current_path),
            Color::DarkGray.paint(page)
        ))
    }

    fn render_prompt_right(&self) -> Cow<'_, str> {
        Cow::Borrowed("")
    }

    fn render_prompt_indicator(&self, edit_mode: PromptEditMode) -> Cow<'_, str> {
        match edit_mode {
            PromptEditMode::Default | PromptEditMode::Emacs => {
                Cow::Owned(format!("{} ", Color::Green.bold().paint(">")))
            }
            PromptEditMode::Vi(vi_mode) => {
                let indicator = match vi_mode {
                    reedline::PromptViMode::Normal => Color::Blue.bold().paint("[N]>"),
                    reedline::PromptViMode::Insert => Color::Green.bold().paint("[I]>"),
                };
                Cow::Owned(format!("{} ", indicator))
            }
            PromptEditMode::Custom(s) => Cow::Owned(format!("({})> ", s)),
        }
    }

    fn render_prompt_multiline_indicator(&self) -> Cow<'_, str> {
        Cow::Borrowed(": ")
    }

    fn render_prompt_history_search_indicator(
        &self,
        history_search: PromptHistorySearch,
    ) -> Cow<'_, str> {
        let prefix = match history_search.status {
            PromptHistorySearchStatus::Passing => "",
            PromptHistorySearchStatus::Failing => "failing ",
        };
        Cow::Owned(format!(
            "({}reverse-search: {}) ",
            prefix, history_search.term
        ))
    }
}

fn history_path() -> Option<PathBuf> {
    dirs::data_local_dir().map(|p| p.join("nestview").join("history.txt"))
}

fn is_vi_editor(value: &str) -> bool {
    let value = value.to_lowercase();
    value.contains("vim") || value == "vi" || value.ends_with("/vi")
}

/// Check if vi mode should be used based on environment configuration.
fn should_use_vi_mode() -> bool {
    if let Ok(mode) = std::env::var("NESTVIEW_EDIT_MODE") {
        return matches!(mode.to_lowercase().as_str(), "vi" | "vim");
    }
    let from_editor = ["EDITOR", "VISUAL"]
        .iter()
        .filter_map(|var| std::env::var(var).ok())
        .any(|value| is_vi_editor(&value));
    from_editor || check_inputrc_vi_mode()
}

/// Check .inputrc for `set editing-mode vi`.
fn check_inputrc_vi_mode() -> bool {
    let inputrc_paths = [
        std::env::var("INPUTRC").ok().map(PathBuf::from),
        dirs::home_dir().map(|p| p.join(".inputrc")),
        Some(PathBuf::from("/etc/inputrc")),
    ];

    inputrc_paths
        .into_iter()
        .flatten()
        .filter_map(|path| std::fs::read_to_string(path).ok())
        .any(|content| content.lines().any(sets_vi_editing_mode))
}

fn sets_vi_editing_mode(line: &str) -> bool {
    let mut words = line.split_whitespace();
    words.next() == Some("set") && words.next() == Some("editing-mode") && words.next() == Some("vi")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vi_editors_are_recognized() {
        assert!(is_vi_editor("vim"));
        assert!(is_vi_editor("/usr/bin/nvim"));
        assert!(is_vi_editor("/usr/bin/vi"));
        assert!(!is_vi_editor("emacs"));
        assert!(!is_vi_editor("nano"));
    }

    #[test]
    fn inputrc_lines() {
        assert!(sets_vi_editing_mode("set editing-mode vi"));
        assert!(sets_vi_editing_mode("  set   editing-mode vi  "));
        assert!(!sets_vi_editing_mode("set editing-mode emacs"));
        assert!(!sets_vi_editing_mode("# set editing-mode vi"));
    }

    #[test]
    fn explicit_preferences_skip_detection() {
        assert!(EditModePreference::Vi.use_vi());
        assert!(!EditModePreference::Emacs.use_vi());
    }

    #[test]
    fn prompt_shows_pagination() {
        let config = PromptConfig {
            current_path: "/users".to_string(),
            skip: 0,
            limit: 0,
        };
        let left = TerminalPrompt(&config).render_prompt_left().into_owned();
        assert!(left.contains("/users"));
        assert!(left.contains("[0+all]"));
    }
}
