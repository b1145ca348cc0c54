//! Fanny CLI
//!
//! Developer tool for theme authors:
//! - `fanny check <theme.toml>` validates a theme file and summarizes it
//! - `fanny css` prints the style sheet of the component showcase
//! - `fanny showcase` prints the showcase as HTML with its style sheet

mod commands;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

/// Theme tooling for the Fanny component library
#[derive(Parser, Debug)]
#[command(name = "fanny")]
#[command(about = "Theme tooling for the Fanny component library")]
#[command(version)]
struct Cli {
    /// Log verbosely
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Validate a theme file
    Check {
        /// Theme file to validate
        theme: PathBuf,

        /// Print the summary as JSON
        #[arg(long)]
        json: bool,
    },

    /// Print the style sheet generated for every component
    Css {
        /// Theme file to apply
        #[arg(short, long)]
        theme: Option<PathBuf>,
    },

    /// Print a standalone HTML page rendering every component
    Showcase {
        /// Theme file to apply
        #[arg(short, long)]
        theme: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::WARN
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Command::Check { theme, json } => commands::check(&theme, json),
        Command::Css { theme } => commands::css(theme.as_deref()),
        Command::Showcase { theme } => commands::showcase(theme.as_deref()),
    }
}
