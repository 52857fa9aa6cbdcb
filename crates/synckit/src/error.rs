//! Error types for reconciliation operations.
//!
//! Configuration errors are fatal and stop a run before any command is
//! executed. Execution errors carry the manager name and the phase
//! (list/install/uninstall) so a report can say exactly which command failed.

use std::path::PathBuf;
use thiserror::Error;

/// Phase of a package-manager interaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Querying the installed set via the list command.
    List,
    /// Installing missing packages via the install command.
    Install,
    /// Removing undeclared packages via the uninstall command.
    Uninstall,
}

impl Phase {
    /// Get the lowercase name used in messages and logs.
    pub fn as_str(&self) -> &'static str {
        match self {
            Phase::List => "list",
            Phase::Install => "install",
            Phase::Uninstall => "uninstall",
        }
    }
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Errors that can occur while loading config or reconciling a manager.
#[derive(Debug, Error)]
pub enum Error {
    /// Config file missing or unreadable
    #[error("config file not found: {}", .path.display())]
    ConfigNotFound {
        /// Path that was attempted
        path: PathBuf,
        /// Underlying IO error
        #[source]
        source: std::io::Error,
    },

    /// Config file exists but is not valid TOML (or violates the schema)
    #[error("invalid config {}: {source}", .path.display())]
    ConfigParse {
        /// Path of the offending file
        path: PathBuf,
        /// Parse error from the TOML deserializer
        #[source]
        source: Box<toml::de::Error>,
    },

    /// A declared manager ended up without a complete command set
    #[error(
        "package manager '{name}' is missing {missing} \
         (a manager without built-in defaults must define list_cmd, install_cmd and uninstall_cmd)"
    )]
    IncompleteManager {
        /// Config section name
        name: String,
        /// Comma-separated missing keys
        missing: String,
    },

    /// A list/install/uninstall command exited non-zero
    #[error("{manager}: {phase} command exited with status {status}")]
    CommandFailed {
        /// Manager whose command failed
        manager: String,
        /// Which of the three commands ran
        phase: Phase,
        /// Exit status of the shell (-1 if killed by a signal)
        status: i32,
        /// Captured standard error, trimmed
        stderr: String,
    },

    /// The shell itself could not be spawned
    #[error("{manager}: failed to spawn {phase} command")]
    Spawn {
        /// Manager whose command could not start
        manager: String,
        /// Which of the three commands was attempted
        phase: Phase,
        /// Underlying IO error
        #[source]
        source: std::io::Error,
    },

    /// IO error outside command execution (e.g. writing a generated config)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for reconciliation operations.
pub type Result<T> = std::result::Result<T, Error>;
