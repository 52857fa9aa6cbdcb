//! Init command: bootstrap a config file from the host's current state.

use anyhow::{Context as AnyhowContext, Result};
use std::fs;
use std::path::Path;

use crate::ui;
use crate::Context;

pub fn run(_ctx: &Context, output: &Path) -> Result<()> {
    ui::header("Bootstrapping Config");
    ui::dim(&format!("Output: {}", output.display()));

    if let Some(parent) = output.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Could not create {}", parent.display()))?;
    }

    let candidates = synckit::registry::builtins();
    let client = synckit::Client::new();
    let written = client.init_file(output, &candidates)?;

    println!();
    if written {
        ui::success(&format!("Wrote {}", output.display()));
    } else {
        ui::warn("No supported package managers found on this host - nothing written");
    }
    Ok(())
}
