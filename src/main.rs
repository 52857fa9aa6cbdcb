mod cli;
mod commands;
mod paths;
mod ui;

use anyhow::Result;
use clap::{CommandFactory, Parser};
use clap_complete::generate;
use cli::{Cli, Command};
use std::io;

/// Global context for the application
pub struct Context {
    pub verbose: u8,
    pub quiet: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging based on verbosity
    let log_level = match cli.verbose {
        0 => log::LevelFilter::Warn,
        1 => log::LevelFilter::Info,
        2 => log::LevelFilter::Debug,
        _ => log::LevelFilter::Trace,
    };

    env_logger::Builder::new()
        .filter_level(if cli.quiet {
            log::LevelFilter::Error
        } else {
            log_level
        })
        .format_timestamp(None)
        .init();

    let ctx = Context {
        verbose: cli.verbose,
        quiet: cli.quiet,
    };

    match cli.command {
        Command::Sync { dry_run } => {
            let config = paths::resolve_config(cli.config.as_deref())?;
            commands::sync::run(&ctx, &config, dry_run)
        }
        Command::List => {
            let config = paths::resolve_config(cli.config.as_deref())?;
            commands::list::run(&ctx, &config)
        }
        Command::Init { output } => {
            let output =
                paths::resolve_config(output.as_deref().or(cli.config.as_deref()))?;
            commands::init::run(&ctx, &output)
        }
        Command::Completions { shell } => {
            let mut cmd = Cli::command();
            generate(shell, &mut cmd, "pacsync", &mut io::stdout());
            Ok(())
        }
    }
}
