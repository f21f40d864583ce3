//! Platform-independent REPL core.
//!
//! The loop reads lines through an [`IoHost`], runs them as commands against
//! a [`BrowseContext`] and writes the results back through the host.

use crate::commands::{self, CommandResult};
use crate::context::BrowseContext;
use crate::host::{EditModePreference, TerminalHost};
use crate::io::{ExitReason, IoError, IoHost, Output, PromptConfig, Signal};
use crate::render;

/// The platform-independent REPL core.
pub struct ReplCore {
    ctx: BrowseContext,
}

impl ReplCore {
    pub fn new(ctx: BrowseContext) -> Self {
        Self { ctx }
    }

    /// Run the REPL loop, reading/writing through the provided I/O host.
    pub fn run(&mut self, io: &mut impl IoHost) -> Result<ExitReason, IoError> {
        io.write_output(Output::banner(BANNER))?;

        loop {
            io.write_prompt(self.prompt())?;
            io.wait_for_input()?;

            if let Some(signal) = io.read_signal()? {
                match signal {
                    Signal::Eof => {
                        io.write_output(Output::info("Goodbye!"))?;
                        io.flush()?;
                        return Ok(ExitReason::Eof);
                    }
                    Signal::Interrupt => {
                        io.write_output(Output::info("^C (use 'exit' to quit)"))?;
                        continue;
                    }
                }
            }

            let Some(input) = io.read_input()? else {
                continue;
            };

            tracing::debug!(line = %input.line, "executing command");
            match commands::execute(&input.line, &mut self.ctx) {
                CommandResult::Ok { display: None } => {}
                CommandResult::Ok {
                    display: Some(output),
                } => io.write_output(Output::normal(output))?,
                CommandResult::Error(msg) => io.write_output(Output::error(msg))?,
                CommandResult::Help => io.write_output(Output::normal(commands::format_help()))?,
                CommandResult::Exit => {
                    io.write_output(Output::info("Goodbye!"))?;
                    io.flush()?;
                    return Ok(ExitReason::UserExit);
                }
            }

            io.flush()?;
        }
    }

    pub fn context(&self) -> &BrowseContext {
        &self.ctx
    }

    fn prompt(&self) -> PromptConfig {
        let request = self.ctx.request();
        PromptConfig {
            current_path: render::path(self.ctx.current_path()),
            skip: request.skip,
            limit: request.limit,
        }
    }
}

/// Run the interactive REPL on the terminal.
pub fn run(ctx: BrowseContext, edit_mode: EditModePreference) -> Result<ExitReason, IoError> {
    let mut host = TerminalHost::new(edit_mode)?;
    ReplCore::new(ctx).run(&mut host)
}

const BANNER: &str = r#"
 _ __   ___  ___| |___   _(_) _____      __
| '_ \ / _ \/ __| __\ \ / / |/ _ \ \ /\ / /
| | | |  __/\__ \ |_ \ V /| |  __/\ V  V /
|_| |_|\___||___/\__| \_/ |_|\___| \_/\_/

Type 'help' for available commands, 'exit' to quit.
"#;
