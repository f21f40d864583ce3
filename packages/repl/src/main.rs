use clap::Parser;
use nu_ansi_term::Color;
use tracing_subscriber::EnvFilter;

use nestview_repl::cli::{self, Cli};

fn init_tracing() {
    // Logs go to stderr so stdout carries only command output.
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .init();
}

fn main() {
    init_tracing();
    let args = Cli::parse();

    if let Err(e) = cli::run(args) {
        eprintln!("{} {}", Color::Red.bold().paint("Error:"), e);
        std::process::exit(1);
    }
}
