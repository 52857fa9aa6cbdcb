//! Sync command: converge each configured manager to its declared state.

use anyhow::Result;
use colored::Colorize;
use std::path::Path;

use crate::ui;
use crate::Context;

pub fn run(ctx: &Context, config: &Path, dry_run: bool) -> Result<()> {
    if dry_run {
        ui::header("Sync (dry run)");
    } else {
        ui::header("Syncing Packages");
    }
    ui::dim(&format!("Using: {}", config.display()));

    // A broken config aborts here, before any command runs.
    let entries = synckit::read_config(config)?;
    if entries.is_empty() {
        ui::info("No package managers configured");
        return Ok(());
    }

    let client = synckit::Client::new();
    let mut installed = 0;
    let mut removed = 0;
    let mut in_sync = 0;
    let mut failed: Vec<String> = Vec::new();

    for entry in &entries {
        ui::section(&entry.manager.name);
        if ctx.verbose > 0 {
            ui::dim(&format!("list: {}", entry.manager.list_cmd));
            ui::dim(&format!("install: {}", entry.manager.install_cmd));
            ui::dim(&format!("uninstall: {}", entry.manager.uninstall_cmd));
        }

        let plan = match client.plan(entry) {
            Ok(plan) => plan,
            Err(e) => {
                ui::error(&e.to_string());
                failed.push(entry.manager.name.clone());
                continue;
            }
        };

        if plan.is_noop() {
            ui::success(&format!("in sync ({} packages)", plan.kept()));
            in_sync += 1;
            continue;
        }

        if !ctx.quiet {
            for pkg in &plan.to_install {
                println!("    {} {}", "+".green(), pkg);
            }
            for pkg in &plan.to_remove {
                println!("    {} {}", "-".red(), pkg);
            }
        }

        match client.apply(entry, &plan, dry_run) {
            Ok(report) if report.dry_run => {
                if !report.installed.is_empty() {
                    ui::dim(&format!("would install: {}", report.installed.join(" ")));
                }
                if !report.removed.is_empty() {
                    ui::dim(&format!("would remove: {}", report.removed.join(" ")));
                }
            }
            Ok(report) => {
                installed += report.installed.len();
                removed += report.removed.len();
                ui::success(&format!(
                    "{} installed, {} removed",
                    report.installed.len(),
                    report.removed.len()
                ));
            }
            Err(e) => {
                ui::error(&e.to_string());
                failed.push(entry.manager.name.clone());
            }
        }
    }

    // Summary
    println!();
    println!("{}", "─".repeat(50).dimmed());
    if dry_run {
        println!("  {} Dry run - no changes made", "ℹ".blue());
    } else {
        println!(
            "  {} installed, {} removed, {} already in sync, {} failed",
            installed.to_string().green(),
            removed.to_string().red(),
            in_sync.to_string().dimmed(),
            if failed.is_empty() {
                failed.len().to_string().dimmed()
            } else {
                failed.len().to_string().red()
            }
        );
    }

    if !failed.is_empty() {
        anyhow::bail!("sync failed for: {}", failed.join(", "));
    }

    if !dry_run {
        println!();
        ui::success("Sync complete!");
    }
    Ok(())
}
