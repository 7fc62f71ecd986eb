// CLI module - command-line argument parsing and handlers
//
// Running without a subcommand launches the preview. Flags override the
// loaded config for this run only.
//
// Subcommands for configuration management:
// - config --show: Display effective configuration
// - config --path: Show config file path
// - config --reset: Regenerate config file with defaults

use crate::config::{Config, VERSION};
use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::io::Write;

/// composeful - loading button preview for the terminal
#[derive(Parser, Debug)]
#[command(name = "composeful")]
#[command(version = VERSION)]
#[command(about = "Loading button preview for the terminal", long_about = None)]
pub struct Cli {
    /// Theme name (auto, dracula, nord, gruvbox, monokai)
    #[arg(long, global = true)]
    pub theme: Option<String>,

    /// How long a click keeps its button loading, in milliseconds
    #[arg(long, global = true)]
    pub delay_ms: Option<u64>,

    /// Name shown on the text button
    #[arg(long, global = true)]
    pub greeting: Option<String>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Manage configuration
    Config {
        /// Show effective configuration
        #[arg(long)]
        show: bool,

        /// Reset config file to defaults
        #[arg(long)]
        reset: bool,

        /// Show config file path
        #[arg(long)]
        path: bool,
    },
}

impl Cli {
    /// Apply command-line overrides on top of env/file/defaults
    pub fn apply_overrides(&self, config: &mut Config) {
        if let Some(theme) = &self.theme {
            config.theme = theme.clone();
        }
        if let Some(delay_ms) = self.delay_ms {
            config.loading_delay_ms = delay_ms;
        }
        if let Some(greeting) = &self.greeting {
            config.greeting = greeting.clone();
        }
    }
}

/// Handle CLI subcommands. Returns true if a command was handled (exit after).
pub fn handle_command(cli: &Cli) -> Result<bool> {
    match cli.command {
        Some(Commands::Config { show, reset, path }) => {
            if path {
                handle_config_path()?;
            } else if show {
                handle_config_show(cli)?;
            } else if reset {
                handle_config_reset()?;
            } else {
                // No flag provided, show help
                println!("Usage: composeful config [--show|--path|--reset]");
                println!();
                println!("Options:");
                println!("  --show    Display effective configuration");
                println!("  --path    Show config file path");
                println!("  --reset   Reset config file to defaults");
            }
            Ok(true)
        }
        None => Ok(false), // No subcommand, run the preview
    }
}

fn handle_config_path() -> Result<()> {
    let path = Config::config_path().context("Could not determine config path")?;
    println!("{}", path.display());
    Ok(())
}

fn handle_config_show(cli: &Cli) -> Result<()> {
    let mut config = Config::load()?;
    cli.apply_overrides(&mut config);

    println!("# Effective configuration (flags > env > file > defaults)");
    println!();
    print!("{}", config.to_toml());

    // Show source info
    println!();
    if let Some(path) = Config::config_path() {
        if path.exists() {
            println!("# Source: {}", path.display());
        } else {
            println!("# Source: defaults (no config file)");
        }
    }
    Ok(())
}

fn handle_config_reset() -> Result<()> {
    let path = Config::config_path().context("Could not determine config path")?;

    // Confirm if file exists
    if path.exists() {
        eprint!(
            "Config file exists at {}. Overwrite? [y/N] ",
            path.display()
        );
        std::io::stderr().flush()?;

        let mut input = String::new();
        std::io::stdin()
            .read_line(&mut input)
            .context("Failed to read confirmation")?;

        if !input.trim().eq_ignore_ascii_case("y") {
            println!("Aborted.");
            return Ok(());
        }
    }

    Config::write_default(&path)?;
    println!("Config reset to defaults: {}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_args_runs_preview() {
        let cli = Cli::try_parse_from(["composeful"]).unwrap();
        assert!(cli.command.is_none());
        assert!(cli.theme.is_none());
    }

    #[test]
    fn test_overrides_apply_to_config() {
        let cli = Cli::try_parse_from([
            "composeful",
            "--theme",
            "nord",
            "--delay-ms",
            "750",
            "--greeting",
            "Ferris",
        ])
        .unwrap();

        let mut config = Config::default();
        cli.apply_overrides(&mut config);
        assert_eq!(config.theme, "nord");
        assert_eq!(config.loading_delay_ms, 750);
        assert_eq!(config.greeting, "Ferris");
    }

    #[test]
    fn test_missing_overrides_keep_config() {
        let cli = Cli::try_parse_from(["composeful", "--theme", "auto"]).unwrap();
        let mut config = Config::default();
        cli.apply_overrides(&mut config);
        assert_eq!(config.theme, "auto");
        assert_eq!(config.loading_delay_ms, 3000);
        assert_eq!(config.greeting, "Android");
    }

    #[test]
    fn test_config_subcommand_flags() {
        let cli = Cli::try_parse_from(["composeful", "config", "--path"]).unwrap();
        assert!(matches!(
            cli.command,
            Some(Commands::Config {
                path: true,
                show: false,
                reset: false
            })
        ));
    }

    #[test]
    fn test_invalid_delay_rejected() {
        assert!(Cli::try_parse_from(["composeful", "--delay-ms", "soon"]).is_err());
    }
}
