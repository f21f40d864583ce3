//! REPL command parsing and execution.
//!
//! Commands:
//! - `ls [path]` - List a container, or the root at `/`
//! - `scan <prefix> [path]` - List the entries whose keys begin with `prefix`
//! - `cd <path>` - Change the current container
//! - `pwd` - Print the current container
//! - `skip [n]` / `limit [n]` - Show or set pagination
//! - `next` / `prev` - Page through the last listing
//! - `json [on|off]` - Switch between JSON and text output
//! - `help` - Show help
//! - `exit` - Exit the REPL

use nestview_core::Page;
use nu_ansi_term::{Color, Style};

use crate::context::BrowseContext;
use crate::render;

/// Command table: name, arguments, description.
pub const COMMANDS: &[(&str, &str, &str)] = &[
    ("ls", "[path]", "List a container (alias: list)"),
    ("scan", "<prefix> [path]", "List entries whose keys begin with prefix"),
    ("cd", "<path>", "Change current container"),
    ("pwd", "", "Print current container"),
    ("skip", "[n]", "Show or set how many entries to skip"),
    ("limit", "[n]", "Show or set the page size (0 = no limit)"),
    ("next", "", "Show the next page of the last listing"),
    ("prev", "", "Show the previous page of the last listing"),
    ("json", "[on|off]", "Show or set JSON output"),
    ("help", "", "Show this help message"),
    ("exit", "", "Exit the REPL (alias: quit, q)"),
];

/// Check if `word` names a command or one of its aliases.
pub fn is_command(word: &str) -> bool {
    let word = word.to_lowercase();
    COMMANDS.iter().any(|(name, _, _)| *name == word)
        || matches!(word.as_str(), "list" | "quit" | "q" | "?")
}

/// Result of executing a command
pub enum CommandResult {
    /// Command succeeded, optionally with output to display
    Ok { display: Option<String> },
    /// Command failed with an error message
    Error(String),
    /// User requested to exit
    Exit,
    /// Show help
    Help,
}

impl CommandResult {
    fn ok_display(display: impl Into<String>) -> Self {
        CommandResult::Ok {
            display: Some(display.into()),
        }
    }

    fn ok_none() -> Self {
        CommandResult::Ok { display: None }
    }
}

/// Parse and execute a command
pub fn execute(input: &str, ctx: &mut BrowseContext) -> CommandResult {
    let input = input.trim();
    if input.is_empty() {
        return CommandResult::ok_none();
    }

    let mut parts = input.splitn(2, char::is_whitespace);
    let command = parts.next().unwrap_or("");
    let args = parts.next().unwrap_or("").trim();

    match command.to_lowercase().as_str() {
        "help" | "?" => CommandResult::Help,
        "exit" | "quit" | "q" => CommandResult::Exit,
        "ls" | "list" => cmd_ls(args, ctx),
        "scan" => cmd_scan(args, ctx),
        "cd" => cmd_cd(args, ctx),
        "pwd" => CommandResult::ok_display(render::path(ctx.current_path())),
        "skip" => cmd_skip(args, ctx),
        "limit" => cmd_limit(args, ctx),
        "next" => cmd_page(ctx, true),
        "prev" => cmd_page(ctx, false),
        "json" => cmd_json(args, ctx),
        _ => CommandResult::Error(format!(
            "Unknown command: '{}'. Type 'help' for available commands.",
            command
        )),
    }
}

/// Format help text
pub fn format_help() -> String {
    let cmd_style = Style::new().bold().fg(Color::Cyan);
    let arg_style = Style::new().fg(Color::Yellow);

    let mut help = String::new();
    help.push_str(&format!(
        "{}\n\n",
        Style::new().bold().paint("nestview commands")
    ));
    for (cmd, args, desc) in COMMANDS {
        help.push_str(&format!(
            "  {:<8} {:<18} {}\n",
            cmd_style.paint(*cmd),
            arg_style.paint(*args),
            desc
        ));
    }
    help.push_str(&format!(
        "\n{}",
        Style::new()
            .italic()
            .paint("Paths: '/' is the root, '..' goes up, anything else is relative to the current container.\n\
                    Write '\\/' for a '/' inside a container name, as listings show it.")
    ));
    help
}

fn cmd_ls(args: &str, ctx: &mut BrowseContext) -> CommandResult {
    let path = ctx.resolve_path(args);
    match ctx.list(path) {
        Ok(page) => show_page(&page, ctx),
        Err(e) => CommandResult::Error(e.to_string()),
    }
}

fn cmd_scan(args: &str, ctx: &mut BrowseContext) -> CommandResult {
    let mut parts = args.split_whitespace();
    let Some(prefix) = parts.next() else {
        return CommandResult::Error("Usage: scan <prefix> [path]".to_string());
    };
    let path = ctx.resolve_path(parts.next().unwrap_or(""));
    match ctx.scan(path, prefix) {
        Ok(page) => show_page(&page, ctx),
        Err(e) => CommandResult::Error(e.to_string()),
    }
}

fn cmd_cd(args: &str, ctx: &mut BrowseContext) -> CommandResult {
    let target = if args.is_empty() { "/" } else { args };
    let path = ctx.resolve_path(target);
    match ctx.change_dir(path) {
        Ok(()) => CommandResult::ok_none(),
        Err(e) => CommandResult::Error(e.to_string()),
    }
}

fn cmd_skip(args: &str, ctx: &mut BrowseContext) -> CommandResult {
    if args.is_empty() {
        return CommandResult::ok_display(format!("skip {}", ctx.request().skip));
    }
    match args.parse() {
        Ok(n) => {
            ctx.set_skip(n);
            CommandResult::ok_none()
        }
        Err(_) => CommandResult::Error(format!("Invalid skip: '{}'", args)),
    }
}

fn cmd_limit(args: &str, ctx: &mut BrowseContext) -> CommandResult {
    if args.is_empty() {
        let limit = ctx.request().limit;
        return if limit == 0 {
            CommandResult::ok_display("limit 0 (no limit)")
        } else {
            CommandResult::ok_display(format!("limit {}", limit))
        };
    }
    match args.parse() {
        Ok(n) => {
            ctx.set_limit(n);
            CommandResult::ok_none()
        }
        Err(_) => CommandResult::Error(format!("Invalid limit: '{}'", args)),
    }
}

fn cmd_page(ctx: &mut BrowseContext, forward: bool) -> CommandResult {
    let current = ctx.request();
    if current.is_unbounded() {
        return CommandResult::Error("limit is 0, every entry is already shown".to_string());
    }
    let request = if forward {
        current.next_page()
    } else {
        current.prev_page()
    };
    match ctx.replay(request) {
        Ok(Some(page)) => show_page(&page, ctx),
        Ok(None) => CommandResult::Error("Nothing to page through; run 'ls' or 'scan' first".to_string()),
        Err(e) => CommandResult::Error(e.to_string()),
    }
}

fn cmd_json(args: &str, ctx: &mut BrowseContext) -> CommandResult {
    match args.to_lowercase().as_str() {
        "" => CommandResult::ok_display(if ctx.json() { "json on" } else { "json off" }),
        "on" => {
            ctx.set_json(true);
            CommandResult::ok_none()
        }
        "off" => {
            ctx.set_json(false);
            CommandResult::ok_none()
        }
        _ => CommandResult::Error("Usage: json [on|off]".to_string()),
    }
}

fn show_page(page: &Page, ctx: &BrowseContext) -> CommandResult {
    if ctx.json() {
        return match render::json(page) {
            Ok(json) => CommandResult::ok_display(json),
            Err(e) => CommandResult::Error(format!("JSON error: {}", e)),
        };
    }
    if page.is_empty() {
        return CommandResult::ok_display(Color::Yellow.paint("(no entries)").to_string());
    }

    let mut out = render::text(page, true);
    let request = ctx.request();
    if request.max_entries() == Some(page.len()) {
        out.push_str(&format!(
            "\n{}",
            Color::DarkGray.paint(format!(
                "-- entries {}..{}, 'next' for more --",
                request.skip + 1,
                request.skip + page.len()
            ))
        ));
    }
    CommandResult::ok_display(out)
}
