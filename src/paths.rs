//! Config file location.

use anyhow::{Context, Result};
use std::path::PathBuf;

/// Default config file path: `~/.config/pacsync/config.toml`.
pub fn default_config_path() -> Result<PathBuf> {
    let home = dirs::home_dir().context("Could not determine home directory")?;
    Ok(home.join(".config").join("pacsync").join("config.toml"))
}

/// Resolve a config path from a CLI argument, expanding `~`.
pub fn resolve_config(arg: Option<&str>) -> Result<PathBuf> {
    match arg {
        Some(raw) => Ok(PathBuf::from(shellexpand::tilde(raw).as_ref())),
        None => default_config_path(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_path_wins() {
        let path = resolve_config(Some("custom.toml")).expect("resolve");
        assert_eq!(path, PathBuf::from("custom.toml"));
    }

    #[test]
    fn tilde_is_expanded() {
        let path = resolve_config(Some("~/custom.toml")).expect("resolve");
        assert!(!path.to_string_lossy().starts_with('~'));
        assert!(path.to_string_lossy().ends_with("custom.toml"));
    }

    #[test]
    fn default_lands_in_config_dir() {
        let path = default_config_path().expect("home dir available");
        assert!(path.ends_with(".config/pacsync/config.toml"));
    }
}
