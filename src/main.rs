// composeful - terminal preview for the progress button
//
// Parses the command line, loads layered config, installs tracing, and runs
// the preview until the user quits.

use anyhow::Result;
use clap::Parser;
use composeful::cli::{self, Cli};
use composeful::config::Config;
use composeful::logging::{self, LogBuffer};
use composeful::tui;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Handle CLI commands first (config --show, --path, --reset)
    // If a command was handled, exit early
    if cli::handle_command(&cli)? {
        return Ok(());
    }

    // Ensure config template exists (helps users discover options)
    Config::ensure_config_exists();

    // Precedence: flags > env > config file > defaults
    let mut config = Config::load()?;
    cli.apply_overrides(&mut config);

    // Logs are captured for the preview's log pane
    // The guard must be kept alive for the duration of the program to ensure logs flush
    let log_buffer = LogBuffer::new();
    let _file_guard = logging::init(&config.logging, &log_buffer)?;

    tui::run_preview(config, log_buffer).await
}
