//! Plan application: batched install/uninstall or dry-run reporting.

use crate::config::PackageManager;
use crate::error::{Error, Phase, Result};
use crate::exec::CommandRunner;
use crate::plan::SyncPlan;

/// Structured result of applying one plan.
///
/// Under dry-run the lists carry what *would* have changed; no command ran.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyncReport {
    /// Manager the report is about
    pub manager: String,
    /// Packages installed (or to be installed, under dry-run)
    pub installed: Vec<String>,
    /// Packages removed (or to be removed, under dry-run)
    pub removed: Vec<String>,
    /// Whether this was a dry run
    pub dry_run: bool,
}

impl SyncReport {
    /// Total number of packages touched (or reported) by this entry.
    pub fn changed(&self) -> usize {
        self.installed.len() + self.removed.len()
    }
}

/// Realize a plan for one manager, or report it under dry-run.
///
/// Installs run first, then removals; each command is invoked at most once
/// with every affected package name appended (batched), and not at all when
/// its set is empty.
pub fn apply(
    manager: &PackageManager,
    plan: &SyncPlan,
    runner: &dyn CommandRunner,
    dry_run: bool,
) -> Result<SyncReport> {
    let report = SyncReport {
        manager: manager.name.clone(),
        installed: plan.to_install.clone(),
        removed: plan.to_remove.clone(),
        dry_run,
    };

    if dry_run {
        return Ok(report);
    }

    if !plan.to_install.is_empty() {
        run_phase(
            manager,
            Phase::Install,
            &manager.install_cmd,
            &plan.to_install,
            runner,
        )?;
    }

    if !plan.to_remove.is_empty() {
        run_phase(
            manager,
            Phase::Uninstall,
            &manager.uninstall_cmd,
            &plan.to_remove,
            runner,
        )?;
    }

    Ok(report)
}

/// Run one install/uninstall command with the package names appended.
fn run_phase(
    manager: &PackageManager,
    phase: Phase,
    command: &str,
    packages: &[String],
    runner: &dyn CommandRunner,
) -> Result<()> {
    log::info!("{}: {} {}", manager.name, phase, packages.join(" "));

    let output = runner
        .execute(command, packages)
        .map_err(|source| Error::Spawn {
            manager: manager.name.clone(),
            phase,
            source,
        })?;

    if !output.success() {
        return Err(Error::CommandFailed {
            manager: manager.name.clone(),
            phase,
            status: output.status,
            stderr: output.stderr.trim().to_string(),
        });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testutil::{failure, listing, MockRunner};

    fn manager() -> PackageManager {
        PackageManager::new("my_pkg_mgr", "list", "install", "uninstall")
    }

    fn plan(to_install: &[&str], to_remove: &[&str]) -> SyncPlan {
        SyncPlan {
            installed: to_remove.iter().map(|p| p.to_string()).collect(),
            to_install: to_install.iter().map(|p| p.to_string()).collect(),
            to_remove: to_remove.iter().map(|p| p.to_string()).collect(),
        }
    }

    #[test]
    fn batches_each_phase_into_one_invocation() {
        let runner = MockRunner::new(|_| Ok(listing("")));
        let report = apply(
            &manager(),
            &plan(&["pkg3", "pkg4"], &["pkg1"]),
            &runner,
            false,
        )
        .expect("apply");

        assert_eq!(
            runner.calls(),
            vec!["install pkg3 pkg4", "uninstall pkg1"]
        );
        assert_eq!(report.installed, vec!["pkg3", "pkg4"]);
        assert_eq!(report.removed, vec!["pkg1"]);
        assert!(!report.dry_run);
    }

    #[test]
    fn empty_sets_invoke_nothing() {
        let runner = MockRunner::new(|_| Ok(listing("")));
        let report = apply(&manager(), &plan(&[], &[]), &runner, false).expect("apply");

        assert!(runner.calls().is_empty());
        assert_eq!(report.changed(), 0);
    }

    #[test]
    fn install_only_skips_uninstall_command() {
        let runner = MockRunner::new(|_| Ok(listing("")));
        apply(&manager(), &plan(&["pkg3"], &[]), &runner, false).expect("apply");
        assert_eq!(runner.calls(), vec!["install pkg3"]);
    }

    #[test]
    fn dry_run_executes_nothing_but_reports_everything() {
        let runner = MockRunner::new(|_| Ok(listing("")));
        let report = apply(
            &manager(),
            &plan(&["pkg3"], &["pkg1", "pkg2"]),
            &runner,
            true,
        )
        .expect("apply");

        assert!(runner.calls().is_empty());
        assert!(report.dry_run);
        assert_eq!(report.installed, vec!["pkg3"]);
        assert_eq!(report.removed, vec!["pkg1", "pkg2"]);
        assert_eq!(report.changed(), 3);
    }

    #[test]
    fn failing_install_names_manager_and_phase() {
        let runner = MockRunner::new(|cmd| {
            if cmd == "install" {
                Ok(failure(1, "disk full"))
            } else {
                Ok(listing(""))
            }
        });
        let err = apply(&manager(), &plan(&["pkg3"], &["pkg1"]), &runner, false).unwrap_err();
        match err {
            Error::CommandFailed { manager, phase, .. } => {
                assert_eq!(manager, "my_pkg_mgr");
                assert_eq!(phase, Phase::Install);
            }
            other => panic!("expected CommandFailed, got {other:?}"),
        }
    }

    #[test]
    fn real_shell_sync_scenario() {
        use crate::config::ConfigEntry;
        use crate::exec::ShellRunner;

        // Mock package manager whose install/uninstall commands dump their
        // arguments to files, as in the acceptance scenario: pkg1 removed,
        // pkg2 kept, pkg3 installed.
        let dir = tempfile::tempdir().expect("temp dir");
        let installed_file = dir.path().join("installed");
        let removed_file = dir.path().join("removed");

        let dump = "dump_args() { f=$1; shift; echo $@ > $f; }";
        let entry = ConfigEntry {
            manager: PackageManager::new(
                "my_pkg_mgr",
                "echo pkg1; echo pkg2",
                format!("{dump}; dump_args {}", installed_file.display()),
                format!("{dump}; dump_args {}", removed_file.display()),
            ),
            packages: vec!["pkg2".to_string(), "pkg3".to_string()],
        };

        let plan = crate::plan::plan(&entry, &ShellRunner).expect("plan");
        apply(&entry.manager, &plan, &ShellRunner, false).expect("apply");

        let installed = std::fs::read_to_string(&installed_file).expect("install ran");
        let removed = std::fs::read_to_string(&removed_file).expect("uninstall ran");
        assert_eq!(installed, "pkg3\n");
        assert_eq!(removed, "pkg1\n");
    }
}
