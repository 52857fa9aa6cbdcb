//! Diff computation between declared and installed package sets.

use std::collections::HashSet;

use crate::config::ConfigEntry;
use crate::error::{Error, Phase, Result};
use crate::exec::CommandRunner;

/// The reconciliation plan for one config entry.
///
/// `to_install` and `to_remove` are disjoint by construction; together with
/// the kept packages they cover the desired and installed sets exactly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyncPlan {
    /// Installed set observed via the list command (duplicates collapsed,
    /// observed order kept)
    pub installed: Vec<String>,
    /// Declared but not installed, in declared order
    pub to_install: Vec<String>,
    /// Installed but not declared, in observed order
    pub to_remove: Vec<String>,
}

impl SyncPlan {
    /// Whether the manager is already in the declared state.
    pub fn is_noop(&self) -> bool {
        self.to_install.is_empty() && self.to_remove.is_empty()
    }

    /// Number of packages that are both declared and installed.
    pub fn kept(&self) -> usize {
        self.installed.len() - self.to_remove.len()
    }
}

/// Query a manager's installed set and diff it against the declared one.
///
/// A non-zero exit from the list command is an execution error, not an
/// empty installed set. An empty declared list legitimately plans a full
/// removal; an empty installed set plans installing everything declared.
pub fn plan(entry: &ConfigEntry, runner: &dyn CommandRunner) -> Result<SyncPlan> {
    let manager = &entry.manager;

    let output = runner
        .execute(&manager.list_cmd, &[])
        .map_err(|source| Error::Spawn {
            manager: manager.name.clone(),
            phase: Phase::List,
            source,
        })?;

    if !output.success() {
        return Err(Error::CommandFailed {
            manager: manager.name.clone(),
            phase: Phase::List,
            status: output.status,
            stderr: output.stderr.trim().to_string(),
        });
    }

    let installed = dedup_preserving_order(output.lines());
    log::debug!("{}: {} packages installed", manager.name, installed.len());

    let installed_set: HashSet<&str> = installed.iter().map(String::as_str).collect();
    let desired_set: HashSet<&str> = entry.packages.iter().map(String::as_str).collect();

    let to_install = dedup_preserving_order(
        entry
            .packages
            .iter()
            .filter(|p| !installed_set.contains(p.as_str()))
            .cloned()
            .collect(),
    );
    let to_remove: Vec<String> = installed
        .iter()
        .filter(|p| !desired_set.contains(p.as_str()))
        .cloned()
        .collect();

    Ok(SyncPlan {
        installed,
        to_install,
        to_remove,
    })
}

/// Drop duplicate names, keeping the first occurrence of each.
fn dedup_preserving_order(names: Vec<String>) -> Vec<String> {
    let mut seen = HashSet::new();
    names
        .into_iter()
        .filter(|name| seen.insert(name.clone()))
        .collect()
}
