//! Open rendered charts with the host's default handler.

use crate::utils::error::RenderError;
use log::debug;
use std::path::Path;
use std::process::Command;

#[cfg(target_os = "windows")]
const OPENER: Option<&str> = Some("explorer");
#[cfg(target_os = "macos")]
const OPENER: Option<&str> = Some("open");
#[cfg(target_os = "linux")]
const OPENER: Option<&str> = Some("xdg-open");
#[cfg(not(any(target_os = "windows", target_os = "macos", target_os = "linux")))]
const OPENER: Option<&str> = None;

/// Hand `path` to the platform opener without waiting for it
pub fn open_in_viewer(path: &Path) -> Result<(), RenderError> {
    let program = OPENER.ok_or(RenderError::UnsupportedPlatform)?;

    debug!("Opening {} with {}", path.display(), program);

    Command::new(program)
        .arg(path)
        .spawn()
        .map_err(|source| RenderError::ViewerFailed { program, source })?;

    Ok(())
}
