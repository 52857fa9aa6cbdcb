//! Process execution boundary.
//!
//! All process spawning in the crate goes through the [`CommandRunner`]
//! trait, so the reconciliation engine can be tested without running real
//! commands. The shell implementation appends package names to the command
//! template and hands the whole line to `sh -c`, which lets templates be
//! arbitrary shell (pipelines, function definitions, `;`-chains).

use std::io;
use std::process::{Command, Stdio};

/// Captured result of one command invocation.
#[derive(Debug, Clone)]
pub struct CommandOutput {
    /// Captured standard output
    pub stdout: String,
    /// Captured standard error
    pub stderr: String,
    /// Exit status (-1 if terminated by a signal)
    pub status: i32,
}

impl CommandOutput {
    /// Whether the command exited zero.
    pub fn success(&self) -> bool {
        self.status == 0
    }

    /// Stdout split into trimmed, non-blank lines.
    pub fn lines(&self) -> Vec<String> {
        self.stdout
            .lines()
            .map(str::trim)
            .filter(|l| !l.is_empty())
            .map(str::to_string)
            .collect()
    }
}

/// Narrow interface for running shell command templates.
///
/// Non-zero exit is not an error at this layer; callers attach the manager
/// name and phase when they decide it is.
pub trait CommandRunner: Send + Sync {
    /// Run `command` with `extra_args` appended, capturing output.
    fn execute(&self, command: &str, extra_args: &[String]) -> io::Result<CommandOutput>;

    /// Check whether an executable named `name` is on the search path.
    fn is_on_path(&self, name: &str) -> bool;
}

/// Runner that executes command templates through `sh -c`.
#[derive(Debug, Default, Clone, Copy)]
pub struct ShellRunner;

/// Append extra arguments to a command template.
fn compose(command: &str, extra_args: &[String]) -> String {
    if extra_args.is_empty() {
        command.to_string()
    } else {
        format!("{} {}", command, extra_args.join(" "))
    }
}

impl CommandRunner for ShellRunner {
    fn execute(&self, command: &str, extra_args: &[String]) -> io::Result<CommandOutput> {
        let command_line = compose(command, extra_args);
        log::debug!("running: sh -c {:?}", command_line);

        let output = Command::new("sh").arg("-c").arg(&command_line).output()?;

        Ok(CommandOutput {
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
            status: output.status.code().unwrap_or(-1),
        })
    }

    fn is_on_path(&self, name: &str) -> bool {
        Command::new("which")
            .arg(name)
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()
            .map(|s| s.success())
            .unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn compose_appends_args() {
        assert_eq!(compose("brew install", &[]), "brew install");
        assert_eq!(
            compose(
                "brew install",
                &["git".to_string(), "ripgrep".to_string()]
            ),
            "brew install git ripgrep"
        );
    }

    #[test]
    fn lines_trims_and_drops_blanks() {
        let output = CommandOutput {
            stdout: "  pkg1  \n\npkg2\n   \n".to_string(),
            stderr: String::new(),
            status: 0,
        };
        assert_eq!(output.lines(), vec!["pkg1", "pkg2"]);
    }

    #[test]
    fn shell_runner_captures_stdout() {
        let output = ShellRunner
            .execute("echo pkg1; echo pkg2", &[])
            .expect("echo should run");
        assert!(output.success());
        assert_eq!(output.lines(), vec!["pkg1", "pkg2"]);
    }

    #[test]
    fn shell_runner_appends_package_names() {
        let output = ShellRunner
            .execute("echo", &["pkg1".to_string(), "pkg2".to_string()])
            .expect("echo should run");
        assert_eq!(output.stdout.trim(), "pkg1 pkg2");
    }

    #[test]
    fn shell_runner_reports_exit_status() {
        let output = ShellRunner.execute("exit 3", &[]).expect("sh should run");
        assert!(!output.success());
        assert_eq!(output.status, 3);
    }

    #[test]
    fn is_on_path_finds_sh() {
        assert!(ShellRunner.is_on_path("sh"));
        assert!(!ShellRunner.is_on_path("definitely-not-a-real-tool-name"));
    }
}
