// ABOUTME: Container engine discovery.
// ABOUTME: Locates the docker executable on PATH before any subprocess work.

use crate::error::Result;
use std::path::PathBuf;

/// Name of the container engine binary expected on PATH.
pub const ENGINE_BINARY: &str = "docker";

/// Locate the container engine executable.
///
/// Both subcommands shell out to the engine, so a missing binary is fatal
/// up front rather than surfacing as N identical per-image failures.
pub fn locate() -> Result<PathBuf> {
    let path = which::which(ENGINE_BINARY)?;
    tracing::debug!(engine = %path.display(), "located container engine");
    Ok(path)
}
