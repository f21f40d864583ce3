//! Page rendering for terminal output.

use nestview_core::{escape_name, EntryKind, Page, Path};
use nu_ansi_term::{Color, Style};

/// Render a page as JSON, one array of entry objects.
pub fn json(page: &Page) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(page)
}

/// Render a page as text rows.
///
/// Containers are shown as `name/`, with any `/` in the name escaped so the
/// row can be pasted back as a path. Leaves are shown as `name  value`. With `styled`
/// set, names and values are colored for the terminal.
pub fn text(page: &Page, styled: bool) -> String {
    let width = page.iter().map(|e| e.key.chars().count()).max().unwrap_or(0);
    let key_style = if styled { Color::Cyan.normal() } else { Style::new() };
    let dir_style = if styled { Color::Blue.bold() } else { Style::new() };

    let mut out = String::new();
    for entry in page {
        match &entry.kind {
            EntryKind::Container { .. } => {
                let name = escape_name(&entry.key);
                out.push_str(&dir_style.paint(format!("{name}/")).to_string());
            }
            EntryKind::Leaf { value } => {
                let pad = width - entry.key.chars().count();
                out.push_str(&key_style.paint(&entry.key).to_string());
                out.push_str(&" ".repeat(pad + 2));
                out.push_str(value);
            }
        }
        out.push('\n');
    }
    out.truncate(out.trim_end_matches('\n').len());
    out
}

/// Format a path for display, with a leading `/`.
pub fn path(path: &Path) -> String {
    format!("/{path}")
}
