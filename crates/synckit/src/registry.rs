//! Built-in package managers.
//!
//! Each entry supplies the three command templates for a well-known manager,
//! so a config section naming one of them only needs a `packages` list. The
//! list commands are composite shell expressions that reduce the manager's
//! output to bare package names, one per line.

use crate::config::PackageManager;

/// `(name, list_cmd, install_cmd, uninstall_cmd)` for each built-in manager.
const BUILTINS: &[(&str, &str, &str, &str)] = &[
    ("brew", "brew leaves", "brew install", "brew uninstall"),
    (
        "cargo",
        "cargo install --list | grep -v '^ ' | cut -d ' ' -f 1",
        "cargo install",
        "cargo uninstall",
    ),
    (
        "pipx",
        "pipx list --short | cut -d ' ' -f 1",
        "pipx install",
        "pipx uninstall",
    ),
    (
        "uv",
        "uv tool list | grep -v '^-' | cut -d ' ' -f 1",
        "uv tool install",
        "uv tool uninstall",
    ),
];

/// Look up a built-in manager by name.
///
/// Returns `None` for unknown names; callers treat that as "user-defined
/// manager, all commands must come from the config".
pub fn lookup(name: &str) -> Option<PackageManager> {
    BUILTINS
        .iter()
        .find(|(n, _, _, _)| *n == name)
        .map(|&(n, list, install, uninstall)| PackageManager::new(n, list, install, uninstall))
}

/// All built-in managers, in table order.
///
/// This is the default candidate set for `init`.
pub fn builtins() -> Vec<PackageManager> {
    BUILTINS
        .iter()
        .map(|&(n, list, install, uninstall)| PackageManager::new(n, list, install, uninstall))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_known_manager() {
        let uv = lookup("uv").expect("uv is built in");
        assert_eq!(uv.name, "uv");
        assert_eq!(uv.install_cmd, "uv tool install");
        assert_eq!(uv.uninstall_cmd, "uv tool uninstall");
        assert!(!uv.list_cmd.is_empty());
    }

    #[test]
    fn lookup_unknown_manager() {
        assert!(lookup("not-a-manager").is_none());
    }

    #[test]
    fn builtins_are_complete() {
        let all = builtins();
        assert!(!all.is_empty());
        for manager in &all {
            assert!(!manager.list_cmd.is_empty(), "{} list_cmd", manager.name);
            assert!(
                !manager.install_cmd.is_empty(),
                "{} install_cmd",
                manager.name
            );
            assert!(
                !manager.uninstall_cmd.is_empty(),
                "{} uninstall_cmd",
                manager.name
            );
        }
    }

    #[test]
    fn builtin_names_are_unique() {
        let all = builtins();
        let mut names: Vec<_> = all.iter().map(|m| m.name.as_str()).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), all.len());
    }
}
