//! chatex command line interface.

mod commands;

use clap::{Parser, Subcommand};
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "chatex",
    version,
    about = "Export AI chat transcripts from saved HTML pages to Markdown"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Export a saved chat page to Markdown
    Export(commands::export::ExportArgs),
    /// List supported platforms
    Platforms,
    /// Inspect configuration
    Config {
        #[command(subcommand)]
        action: commands::config::ConfigAction,
    },
}

#[cfg(not(tarpaulin_include))]
fn main() -> ExitCode {
    init_tracing();

    let cli = Cli::parse();
    let outcome = match cli.command {
        Command::Export(args) => commands::export::handle(args),
        Command::Platforms => commands::platforms::handle(),
        Command::Config { action } => commands::config::handle(action),
    };

    match outcome {
        Ok(code) => code,
        Err(err) => {
            eprintln!("Error: {err:#}");
            ExitCode::FAILURE
        }
    }
}

/// Diagnostics go to stderr so piped Markdown stays clean.
#[cfg(not(tarpaulin_include))]
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
