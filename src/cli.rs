use clap::{Parser, Subcommand};
use clap_complete::Shell;

#[derive(Parser)]
#[command(name = "pacsync")]
#[command(version)]
#[command(about = "Reconcile installed packages against a declarative config", long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Verbosity level
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Config file path (defaults to ~/.config/pacsync/config.toml)
    #[arg(short, long, global = true)]
    pub config: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Install missing packages and remove undeclared ones
    Sync {
        /// Show what would change without running install/uninstall commands
        #[arg(short = 'n', long)]
        dry_run: bool,
    },

    /// List currently-installed packages for each configured manager
    List,

    /// Generate a config file from the package managers found on this host
    Init {
        /// Where to write the generated config (defaults to the config path)
        output: Option<String>,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}
