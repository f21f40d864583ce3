//! Command-line arguments and one-shot commands.

use std::io::Write;
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use nestview_core::nestview_engine::{EngineError, MemoryEngine};
use nestview_core::{Browser, Page, PageRequest, Path, DEFAULT_LIMIT, DEFAULT_SKIP};

use crate::context::BrowseContext;
use crate::host::EditModePreference;
use crate::io::IoError;
use crate::render;

/// nestview - browse nested key-value stores
#[derive(Parser, Debug)]
#[command(name = "nestview")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// JSON document to open as the store
    #[arg(long, env = "NESTVIEW_DATA", value_name = "FILE")]
    pub data: PathBuf,

    /// Force vi editing mode
    #[arg(long, conflicts_with = "emacs")]
    pub vi: bool,

    /// Force emacs editing mode
    #[arg(long)]
    pub emacs: bool,

    /// Run one command and exit instead of starting the REPL
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// List the root namespace or a container
    Ls {
        /// Container path such as `users/teams`; the root when omitted
        path: Option<String>,
        #[command(flatten)]
        page: PageArgs,
    },
    /// List the entries of a container whose keys begin with a prefix
    Scan {
        /// Container path; must not be empty
        path: String,
        prefix: String,
        #[command(flatten)]
        page: PageArgs,
    },
}

#[derive(clap::Args, Debug, Clone, PartialEq, Eq)]
pub struct PageArgs {
    /// Entries to skip before the page starts
    #[arg(long, default_value_t = DEFAULT_SKIP)]
    pub skip: usize,

    /// Page size; 0 lists everything
    #[arg(long, default_value_t = DEFAULT_LIMIT)]
    pub limit: usize,

    /// Print the page as JSON
    #[arg(long)]
    pub json: bool,
}

impl PageArgs {
    fn request(&self) -> PageRequest {
        PageRequest::new(self.skip, self.limit)
    }
}

#[derive(thiserror::Error, Debug)]
pub enum CliError {
    #[error("cannot open {}: {source}", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: EngineError,
    },

    #[error(transparent)]
    Browse(#[from] nestview_core::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Repl(#[from] IoError),
}

impl Cli {
    pub fn edit_mode(&self) -> EditModePreference {
        if self.vi {
            EditModePreference::Vi
        } else if self.emacs {
            EditModePreference::Emacs
        } else {
            EditModePreference::Detect
        }
    }

    /// Open the store named by `--data`.
    pub fn open(&self) -> Result<Browser<MemoryEngine>, CliError> {
        let engine = MemoryEngine::open(&self.data).map_err(|source| CliError::Open {
            path: self.data.clone(),
            source,
        })?;
        tracing::debug!(path = %self.data.display(), "store opened");
        Ok(Browser::new(engine))
    }
}

/// Open the store, then run the subcommand or the interactive REPL.
pub fn run(cli: Cli) -> Result<(), CliError> {
    let browser = cli.open()?;
    match &cli.command {
        Some(command) => execute_once(&browser, command, &mut std::io::stdout().lock()),
        None => {
            crate::repl::run(BrowseContext::new(browser), cli.edit_mode())?;
            Ok(())
        }
    }
}

/// Run one command, writing its page to `out`.
pub fn execute_once(
    browser: &Browser<MemoryEngine>,
    command: &Command,
    out: &mut impl Write,
) -> Result<(), CliError> {
    let (page, args) = match command {
        Command::Ls { path, page } => {
            let path = Path::parse(path.as_deref().unwrap_or(""));
            (browser.list_container(&path, page.request())?, page)
        }
        Command::Scan { path, prefix, page } => {
            let path = Path::parse(path);
            (
                browser.scan_prefix(&path, prefix.as_bytes(), page.request())?,
                page,
            )
        }
    };
    write_page(&page, args.json, out)
}

fn write_page(page: &Page, json: bool, out: &mut impl Write) -> Result<(), CliError> {
    if json {
        writeln!(out, "{}", render::json(page)?)?;
    } else if !page.is_empty() {
        writeln!(out, "{}", render::text(page, false))?;
    }
    Ok(())
}
