//! Config bootstrap: capture the host's current state into a config file.
//!
//! For every candidate manager whose executable is on the search path, the
//! list command runs and its output becomes that section's `packages` array,
//! order preserved. Managers that are not reachable are skipped silently.
//! When nothing is reachable, nothing is written at all, so callers can tell
//! "no managers found" apart from "wrote an empty config".

use std::fmt::Write;
use std::fs;
use std::path::Path;

use crate::config::PackageManager;
use crate::error::{Error, Phase, Result};
use crate::exec::CommandRunner;
use crate::registry;

/// Generate config text for the reachable candidates.
///
/// Returns `Ok(None)` when no candidate is reachable. The probe is keyed by
/// the manager's *name*, not its list command, since list commands are
/// frequently composite shell expressions.
pub fn generate(
    candidates: &[PackageManager],
    runner: &dyn CommandRunner,
) -> Result<Option<String>> {
    let mut out = String::new();

    for manager in candidates {
        if !runner.is_on_path(&manager.name) {
            log::info!("skipping {}: not on PATH", manager.name);
            continue;
        }

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

        write_section(&mut out, manager, &output.lines());
    }

    Ok(if out.is_empty() { None } else { Some(out) })
}

/// Generate config text and write it to `path`.
///
/// Returns whether anything was written; with zero reachable candidates the
/// file is left untouched.
pub fn write(
    path: &Path,
    candidates: &[PackageManager],
    runner: &dyn CommandRunner,
) -> Result<bool> {
    match generate(candidates, runner)? {
        Some(text) => {
            fs::write(path, text)?;
            Ok(true)
        }
        None => Ok(false),
    }
}

/// Write one `[name]` section.
///
/// Command templates are emitted only where they differ from the built-in
/// defaults; a manager running on pure defaults round-trips as just its
/// package list.
fn write_section(out: &mut String, manager: &PackageManager, packages: &[String]) {
    if !out.is_empty() {
        writeln!(out).unwrap();
    }
    writeln!(out, "[{}]", manager.name).unwrap();

    let defaults = registry::lookup(&manager.name)
        .unwrap_or_else(|| PackageManager::new(manager.name.as_str(), "", "", ""));

    for (key, value, default) in [
        ("list_cmd", &manager.list_cmd, &defaults.list_cmd),
        ("install_cmd", &manager.install_cmd, &defaults.install_cmd),
        ("uninstall_cmd", &manager.uninstall_cmd, &defaults.uninstall_cmd),
    ] {
        if value != default {
            writeln!(out, "{} = \"{}\"", key, escape(value)).unwrap();
        }
    }

    if packages.is_empty() {
        writeln!(out, "packages = []").unwrap();
        return;
    }

    writeln!(out, "packages = [").unwrap();
    for (i, pkg) in packages.iter().enumerate() {
        let comma = if i + 1 == packages.len() { "" } else { "," };
        writeln!(out, "    \"{}\"{}", escape(pkg), comma).unwrap();
    }
    writeln!(out, "]").unwrap();
}

/// Escape a value for a basic TOML string.
fn escape(value: &str) -> String {
    value.replace('\\', "\\\\").replace('"', "\\\"")
}
