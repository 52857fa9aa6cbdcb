//! Declarative config: core types plus the merge-and-validate loader.
//!
//! The config file is a TOML table of tables. Each top-level key names a
//! package manager; its body may override any of the three command templates
//! and may declare a `packages` array. Built-in managers supply defaults for
//! whatever the section leaves out; a section that still lacks a command
//! after the overlay is a fatal configuration error.

use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::error::{Error, Result};
use crate::registry;

/// A package manager addressed through three shell command templates.
///
/// Immutable after construction. `install_cmd`/`uninstall_cmd` are invoked
/// with the affected package names appended; `list_cmd` runs bare and its
/// stdout lines are the installed set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackageManager {
    /// Unique name (config section key)
    pub name: String,
    /// Command printing installed packages, one per line
    pub list_cmd: String,
    /// Command installing the packages appended to it
    pub install_cmd: String,
    /// Command removing the packages appended to it
    pub uninstall_cmd: String,
}

impl PackageManager {
    /// Create a manager from its name and three command templates.
    pub fn new(
        name: impl Into<String>,
        list_cmd: impl Into<String>,
        install_cmd: impl Into<String>,
        uninstall_cmd: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            list_cmd: list_cmd.into(),
            install_cmd: install_cmd.into(),
            uninstall_cmd: uninstall_cmd.into(),
        }
    }
}

/// One loaded config section: a manager and its declared package list.
///
/// Package order is preserved as written; duplicates are redundant rather
/// than an error (membership is what reconciliation cares about).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigEntry {
    /// The manager this section configures
    pub manager: PackageManager,
    /// Declared (desired) packages, in file order
    pub packages: Vec<String>,
}

/// Raw section body as written in the file. Strict: unknown keys are
/// rejected so a typo like `instal_cmd` cannot silently fall back to a
/// built-in default.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct ManagerSection {
    list_cmd: Option<String>,
    install_cmd: Option<String>,
    uninstall_cmd: Option<String>,
    #[serde(default)]
    packages: Vec<String>,
}

/// Read and validate a config file into entries.
///
/// Manager names are unique per load (TOML rejects duplicate tables).
/// Sections come back in the deserializer's order, which is deterministic;
/// package order within a section is exactly as written.
pub fn read_config(path: &Path) -> Result<Vec<ConfigEntry>> {
    let content = fs::read_to_string(path).map_err(|source| Error::ConfigNotFound {
        path: path.to_path_buf(),
        source,
    })?;
    parse_config(&content, path)
}

/// Parse config text. Split from [`read_config`] so tests can feed strings.
fn parse_config(content: &str, path: &Path) -> Result<Vec<ConfigEntry>> {
    let table: toml::Table = content.parse().map_err(|source| Error::ConfigParse {
        path: path.to_path_buf(),
        source: Box::new(source),
    })?;

    let mut entries = Vec::with_capacity(table.len());
    for (name, value) in table {
        let section: ManagerSection = value.try_into().map_err(|source| Error::ConfigParse {
            path: path.to_path_buf(),
            source: Box::new(source),
        })?;
        entries.push(merge_section(&name, section)?);
    }

    Ok(entries)
}

/// Overlay a section onto the built-in defaults and validate completeness.
fn merge_section(name: &str, section: ManagerSection) -> Result<ConfigEntry> {
    let defaults = registry::lookup(name)
        .unwrap_or_else(|| PackageManager::new(name, "", "", ""));

    let manager = PackageManager {
        name: name.to_string(),
        list_cmd: section.list_cmd.unwrap_or(defaults.list_cmd),
        install_cmd: section.install_cmd.unwrap_or(defaults.install_cmd),
        uninstall_cmd: section.uninstall_cmd.unwrap_or(defaults.uninstall_cmd),
    };

    let missing: Vec<&str> = [
        ("list_cmd", &manager.list_cmd),
        ("install_cmd", &manager.install_cmd),
        ("uninstall_cmd", &manager.uninstall_cmd),
    ]
    .iter()
    .filter(|(_, cmd)| cmd.is_empty())
    .map(|(key, _)| *key)
    .collect();

    if !missing.is_empty() {
        return Err(Error::IncompleteManager {
            name: name.to_string(),
            missing: missing.join(", "),
        });
    }

    Ok(ConfigEntry {
        manager,
        packages: section.packages,
    })
}
