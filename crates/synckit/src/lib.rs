//! # synckit
//!
//! Library for declarative package management: declare, per package manager,
//! the set of packages a machine should have, then converge the machine to
//! that state.
//!
//! This crate provides functionality for:
//! - Loading and validating the declarative config (TOML table of tables)
//! - Built-in command templates for well-known package managers
//! - Diffing declared packages against the installed set
//! - Applying the diff via batched install/uninstall commands (or dry-run)
//! - Bootstrapping a config file from the host's current state
//!
//! Every package manager is addressed purely through three shell command
//! templates (list/install/uninstall); synckit never parses any manager's
//! own CLI output format beyond "one package name per line".
//!
//! ## Example
//!
//! ```no_run
//! use std::path::Path;
//! use synckit::Client;
//!
//! let entries = synckit::read_config(Path::new("config.toml")).expect("valid config");
//! let client = Client::new();
//!
//! for entry in &entries {
//!     let plan = client.plan(entry).expect("list command failed");
//!     let report = client.apply(entry, &plan, true).expect("apply failed");
//!     println!(
//!         "{}: would install {}, remove {}",
//!         report.manager,
//!         report.installed.len(),
//!         report.removed.len()
//!     );
//! }
//! ```

pub mod apply;
pub mod config;
pub mod error;
pub mod exec;
pub mod init;
pub mod plan;
pub mod registry;

pub use apply::SyncReport;
pub use config::{read_config, ConfigEntry, PackageManager};
pub use error::{Error, Phase, Result};
pub use exec::{CommandOutput, CommandRunner, ShellRunner};
pub use plan::SyncPlan;

/// High-level client over a command runner.
///
/// Wraps the process-spawning boundary so callers (and tests) can swap the
/// real shell for a mock.
pub struct Client {
    runner: Box<dyn CommandRunner>,
}

impl Client {
    /// Create a client that executes commands through `sh -c`.
    pub fn new() -> Self {
        Self {
            runner: Box::new(ShellRunner),
        }
    }

    /// Create a client with a custom runner (useful for testing).
    pub fn with_runner(runner: Box<dyn CommandRunner>) -> Self {
        Self { runner }
    }

    /// Compute the reconciliation plan for one config entry.
    pub fn plan(&self, entry: &ConfigEntry) -> Result<SyncPlan> {
        plan::plan(entry, self.runner.as_ref())
    }

    /// Apply a previously computed plan (or report it under dry-run).
    pub fn apply(&self, entry: &ConfigEntry, plan: &SyncPlan, dry_run: bool) -> Result<SyncReport> {
        apply::apply(&entry.manager, plan, self.runner.as_ref(), dry_run)
    }

    /// Plan and apply in one step.
    pub fn sync(&self, entry: &ConfigEntry, dry_run: bool) -> Result<SyncReport> {
        let plan = self.plan(entry)?;
        self.apply(entry, &plan, dry_run)
    }

    /// Query a manager's currently-installed packages.
    pub fn list_installed(&self, manager: &PackageManager) -> Result<Vec<String>> {
        let entry = ConfigEntry {
            manager: manager.clone(),
            packages: Vec::new(),
        };
        Ok(plan::plan(&entry, self.runner.as_ref())?.installed)
    }

    /// Write a config file capturing the host's state for the reachable
    /// candidates. Returns whether anything was written.
    pub fn init_file(
        &self,
        path: &std::path::Path,
        candidates: &[PackageManager],
    ) -> Result<bool> {
        init::write(path, candidates, self.runner.as_ref())
    }
}

impl Default for Client {
    fn default() -> Self {
        Self::new()
    }
}
