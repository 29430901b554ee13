use anyhow::{Context, Result};
use std::path::Path;
use std::process::Command;
use tracing::debug;

/// Hands `path` to the desktop's default application. Does not wait for it.
pub fn open_in_viewer(path: &Path) -> Result<()> {
    let mut command = viewer_command(path);
    debug!(?command, "launching viewer");

    command
        .spawn()
        .with_context(|| format!("Unable to open {}", path.display()))?;

    Ok(())
}

#[cfg(target_os = "windows")]
fn viewer_command(path: &Path) -> Command {
    let mut command = Command::new("cmd");
    command.arg("/C").arg("start").arg("").arg(path);
    command
}

#[cfg(target_os = "macos")]
fn viewer_command(path: &Path) -> Command {
    let mut command = Command::new("open");
    command.arg(path);
    command
}

#[cfg(not(any(target_os = "windows", target_os = "macos")))]
fn viewer_command(path: &Path) -> Command {
    let mut command = Command::new("xdg-open");
    command.arg(path);
    command
}
