//! List command: show each configured manager's installed packages.

use anyhow::Result;
use colored::Colorize;
use std::path::Path;

use crate::ui;
use crate::Context;

pub fn run(_ctx: &Context, config: &Path) -> Result<()> {
    ui::header("Installed Packages");
    ui::dim(&format!("Using: {}", config.display()));

    let entries = synckit::read_config(config)?;
    if entries.is_empty() {
        ui::info("No package managers configured");
        return Ok(());
    }

    let client = synckit::Client::new();
    let mut total = 0;
    let mut failed: Vec<String> = Vec::new();

    for entry in &entries {
        match client.list_installed(&entry.manager) {
            Ok(packages) => {
                println!();
                println!("{} ({})", entry.manager.name.bold(), packages.len());
                for pkg in &packages {
                    println!("    {}", pkg);
                }
                total += packages.len();
            }
            Err(e) => {
                println!();
                ui::error(&e.to_string());
                failed.push(entry.manager.name.clone());
            }
        }
    }

    println!();
    println!("{}", "─".repeat(50).dimmed());
    println!(
        "  Total: {} packages across {} managers",
        total,
        entries.len()
    );

    if !failed.is_empty() {
        anyhow::bail!("list failed for: {}", failed.join(", "));
    }
    Ok(())
}
